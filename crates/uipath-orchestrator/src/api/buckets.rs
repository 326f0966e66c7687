use std::path::Path;

use reqwest::{Method, StatusCode};
use tracing::info;
use uipath_domain::{BlobFileAccess, Bucket, NewBucket, Response};

use super::SERVER_CONFIGURATION;
use crate::client::{UiPath, decode_scalar};
use crate::errors::{Result, UiPathError};

impl UiPath {
    /// List the storage buckets of folder `fid`
    pub async fn list_buckets(
        &self,
        fid: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Bucket>>> {
        info!(folder = fid, "Retrieving the list of all storage buckets");
        self.fetch_list("odata/Buckets", Some(fid), None, save_as).await
    }

    /// Create an Orchestrator-managed bucket identified by `guid`
    pub async fn create_bucket(
        &self,
        fid: &str,
        name: &str,
        guid: &str,
        description: Option<&str>,
    ) -> Result<Response> {
        info!(folder = fid, bucket = name, "Creating a new storage bucket");
        let body = NewBucket::new(name, guid).description(description.unwrap_or_default());
        let builder = self.request(Method::POST, "odata/Buckets", Some(fid))?.json(&body);
        self.send_expecting(builder, StatusCode::CREATED).await
    }

    pub async fn delete_bucket(&self, fid: &str, id: i64) -> Result<Response> {
        info!(folder = fid, bucket = id, "Deleting the storage bucket");
        let builder = self.request(Method::DELETE, &format!("odata/Buckets({id})"), Some(fid))?;
        self.send_expecting(builder, StatusCode::NO_CONTENT).await
    }

    /// Upload `localpath` to `remotepath` inside bucket `id`.
    ///
    /// Asks Orchestrator for a pre-signed write URI, then PUTs the file
    /// there as a block blob. The returned status is the one of the last
    /// request made.
    pub async fn upload_bucket_file(
        &self,
        fid: &str,
        id: i64,
        localpath: &Path,
        remotepath: &str,
    ) -> Result<Response> {
        info!(
            folder = fid,
            bucket = id,
            local = %localpath.display(),
            remote = remotepath,
            "Uploading file to the bucket"
        );

        let path = format!("odata/Buckets({id})/{SERVER_CONFIGURATION}.GetWriteUri");
        let builder = self
            .request(Method::GET, &path, Some(fid))?
            .query(&[("path", remotepath), ("expiryInMinutes", "0")]);
        let response = self.send(builder).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Ok(Response::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let access: BlobFileAccess = decode_scalar(&body)?;

        let content = tokio::fs::read(localpath).await.map_err(|e| {
            UiPathError::file_error_with_source(localpath.display().to_string(), e)
        })?;

        let upload = self
            .http()
            .put(&access.uri)
            .header("x-ms-blob-type", "BlockBlob")
            .body(content);
        let response = self.send(upload).await?;
        let status = response.status();
        if status.is_success() {
            info!("File uploaded successfully");
        }
        Ok(Response::status(status.as_u16()))
    }

    pub async fn delete_bucket_file(&self, fid: &str, id: i64, filename: &str) -> Result<Response> {
        info!(folder = fid, bucket = id, file = filename, "Deleting file from the bucket");
        let path = format!("odata/Buckets({id})/{SERVER_CONFIGURATION}.DeleteFile");
        let builder = self
            .request(Method::DELETE, &path, Some(fid))?
            .query(&[("path", filename)]);
        self.send_expecting(builder, StatusCode::NO_CONTENT).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use uipath_domain::Response;

    use crate::client::test_support::*;
    use crate::errors::UiPathError;

    #[tokio::test]
    async fn test_create_bucket_posts_full_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/odata/Buckets")
            .match_header("x-uipath-organizationunitid", FOLDER)
            .match_body(Matcher::Json(json!({
                "Name": "invoices",
                "Description": "",
                "Identifier": "6f1b2a9e",
                "StorageProvider": null,
                "StorageParameters": null,
                "StorageContainer": null,
                "CredentialStoreId": null,
                "ExternalName": null,
                "Password": null,
                "FoldersCount": 0,
                "Id": 0
            })))
            .with_status(201)
            .with_body(r#"{"Id":3,"Name":"invoices"}"#)
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture.create_bucket(FOLDER, "invoices", "6f1b2a9e", None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(actual, Response::status(201));
    }

    #[tokio::test]
    async fn test_delete_bucket() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/odata/Buckets(3)")
            .with_status(204)
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture.delete_bucket(FOLDER, 3).await.unwrap();

        mock.assert_async().await;
        assert_eq!(actual.status_code, 204);
    }

    #[tokio::test]
    async fn test_delete_missing_bucket_reports_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/odata/Buckets(99)")
            .with_status(404)
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture.delete_bucket(FOLDER, 99).await.unwrap();

        assert_eq!(actual, Response::status(404));
    }

    #[tokio::test]
    async fn test_upload_bucket_file_puts_to_write_uri() {
        let mut server = mockito::Server::new_async().await;
        let write_uri = format!("{}/blob/reports/q1.pdf?sig=abc", server.url());
        let get_uri = server
            .mock("GET", "/odata/Buckets(3)/UiPath.Server.Configuration.OData.GetWriteUri")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("path".into(), "reports/q1.pdf".into()),
                Matcher::UrlEncoded("expiryInMinutes".into(), "0".into()),
            ]))
            .match_header("x-uipath-organizationunitid", FOLDER)
            .with_status(200)
            .with_body(json!({"Uri": write_uri, "Verb": "PUT", "RequiresAuth": false}).to_string())
            .create_async()
            .await;
        let put_blob = server
            .mock("PUT", "/blob/reports/q1.pdf")
            .match_query(Matcher::UrlEncoded("sig".into(), "abc".into()))
            .match_header("x-ms-blob-type", "BlockBlob")
            .match_header("authorization", Matcher::Missing)
            .match_body("%PDF-1.7 fake")
            .with_status(201)
            .create_async()
            .await;
        let fixture = client_for(&server);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.7 fake").unwrap();

        let actual = fixture
            .upload_bucket_file(FOLDER, 3, file.path(), "reports/q1.pdf")
            .await
            .unwrap();

        get_uri.assert_async().await;
        put_blob.assert_async().await;
        assert_eq!(actual.status_code, 201);
    }

    #[tokio::test]
    async fn test_upload_stops_when_write_uri_is_refused() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/odata/Buckets(3)/UiPath.Server.Configuration.OData.GetWriteUri")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture
            .upload_bucket_file(FOLDER, 3, std::path::Path::new("/unused"), "a.txt")
            .await
            .unwrap();

        assert_eq!(actual, Response::status(404));
    }

    #[tokio::test]
    async fn test_upload_missing_local_file_is_file_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/odata/Buckets(3)/UiPath.Server.Configuration.OData.GetWriteUri")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"Uri":"http://127.0.0.1:9/never"}"#)
            .create_async()
            .await;
        let fixture = client_for(&server);
        let dir = tempfile::tempdir().unwrap();

        let actual = fixture
            .upload_bucket_file(FOLDER, 3, &dir.path().join("missing.pdf"), "a.pdf")
            .await;

        assert!(matches!(actual, Err(UiPathError::FileError { .. })));
    }

    #[tokio::test]
    async fn test_delete_bucket_file() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/odata/Buckets(3)/UiPath.Server.Configuration.OData.DeleteFile")
            .match_query(Matcher::UrlEncoded("path".into(), "reports/q1.pdf".into()))
            .with_status(204)
            .create_async()
            .await;
        let fixture = client_for(&server);

        let actual = fixture.delete_bucket_file(FOLDER, 3, "reports/q1.pdf").await.unwrap();

        mock.assert_async().await;
        assert_eq!(actual.status_code, 204);
    }
}
