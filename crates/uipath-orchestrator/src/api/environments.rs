use std::path::Path;

use tracing::info;
use uipath_domain::{Environment, Response};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_environments(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Environment>>> {
        info!(folder = fid, "Retrieving all environments");
        self.fetch_list("odata/Environments", Some(fid), None, save_as).await
    }
}
