use std::path::Path;

use tracing::info;
use uipath_domain::{Response, Robot, RobotLog};

use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    pub async fn list_robots(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Robot>>> {
        info!(folder = fid, "Retrieving a list of all robots");
        self.fetch_list("odata/Robots", Some(fid), None, save_as).await
    }

    /// List robot log lines matching the OData `filter`, e.g.
    /// `Level eq 'Error' or Level eq 'Fatal'` or
    /// `JobKey eq 98f59394-45e7-4da6-a695-50c70f4d87e3`
    pub async fn list_robot_logs(
        &self,
        fid: &str,
        filter: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<RobotLog>>> {
        info!(folder = fid, filter, "Retrieving robot logs using the provided filter criteria");
        self.fetch_list("odata/RobotLogs", Some(fid), Some(filter), save_as).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use uipath_domain::{Robot, Selectable};

    use crate::client::test_support::*;

    #[tokio::test]
    async fn test_list_robot_logs() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/odata/RobotLogs")
            .match_query(Matcher::UrlEncoded("$filter".into(), "Level eq 'Error'".into()))
            .with_status(200)
            .with_body(
                r#"{"value":[{
                    "Id":88,"JobKey":"98f59394-45e7-4da6-a695-50c70f4d87e3","Level":"Error",
                    "WindowsIdentity":"CORP\\svc-rpa","ProcessName":"InvoiceBot_Prod",
                    "TimeStamp":"2021-10-12T00:00:00.000Z","Message":"Selector not found",
                    "RobotName":"Porto_Prod_2","MachineId":12
                }]}"#,
            )
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture.list_robot_logs(FOLDER, "Level eq 'Error'", None).await.unwrap();

        mock.assert_async().await;
        let logs = actual.content.unwrap();
        assert_eq!(logs[0].robot_name, "Porto_Prod_2");
        assert_eq!(logs[0].windows_identity, "CORP\\svc-rpa");
    }

    #[tokio::test]
    async fn test_list_robots_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/odata/Robots")
            .match_query(Matcher::UrlEncoded("$select".into(), Robot::select()))
            .with_status(500)
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture.list_robots(FOLDER, None).await.unwrap();

        assert_eq!(actual.status_code, 500);
        assert_eq!(actual.content, None);
    }
}
