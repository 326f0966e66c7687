use std::path::Path;

use tracing::info;
use uipath_domain::{Machine, Response};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_machines(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Machine>>> {
        info!(folder = fid, "Retrieving a list of all machines");
        self.fetch_list("odata/Machines", Some(fid), None, save_as).await
    }
}
