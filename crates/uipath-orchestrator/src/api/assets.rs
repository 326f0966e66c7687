use std::path::Path;

use tracing::info;
use uipath_domain::{Asset, Response};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    /// List the assets of folder `fid`
    pub async fn list_assets(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Asset>>> {
        info!(folder = fid, "Retrieving all assets");
        self.fetch_list("odata/Assets", Some(fid), None, save_as).await
    }
}
