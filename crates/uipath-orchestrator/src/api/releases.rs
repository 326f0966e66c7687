use std::path::Path;

use tracing::info;
use uipath_domain::{Release, Response};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_releases(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Release>>> {
        info!(folder = fid, "Retrieving the list of all process releases");
        self.fetch_list("odata/Releases", Some(fid), None, save_as).await
    }
}
