use std::path::Path;

use tracing::info;
use uipath_domain::{Response, Role};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    /// List the roles of the tenant. Roles are not folder scoped, so no
    /// folder header is sent.
    pub async fn list_roles(&self, save_as: Option<&Path>) -> Result<Response<Vec<Role>>> {
        info!("Retrieving a list of all roles");
        self.fetch_list("odata/Roles", None, None, save_as).await
    }
}
