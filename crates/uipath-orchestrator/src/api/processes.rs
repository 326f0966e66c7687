use std::path::Path;

use tracing::info;
use uipath_domain::{Process, Response};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_processes(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Process>>> {
        info!(folder = fid, "Retrieving a list of all processes");
        self.fetch_list("odata/Processes", Some(fid), None, save_as).await
    }
}
