use std::path::Path;

use tracing::info;
use uipath_domain::{Response, Session};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_sessions(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Session>>> {
        info!(folder = fid, "Retrieving a list of all active sessions");
        self.fetch_list("odata/Sessions", Some(fid), None, save_as).await
    }
}
