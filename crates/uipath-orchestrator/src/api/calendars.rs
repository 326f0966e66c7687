use std::path::Path;

use tracing::info;
use uipath_domain::{Calendar, Response};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_calendars(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Calendar>>> {
        info!(folder = fid, "Retrieving all calendars");
        self.fetch_list("odata/Calendars", Some(fid), None, save_as).await
    }
}
