use std::path::Path;

use tracing::info;
use uipath_domain::{Response, Schedule};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_schedules(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Schedule>>> {
        info!(folder = fid, "Retrieving a list of all schedules");
        self.fetch_list("odata/ProcessSchedules", Some(fid), None, save_as).await
    }
}
