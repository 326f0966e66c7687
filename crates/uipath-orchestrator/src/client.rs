//! Authenticated session against an Orchestrator tenant

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uipath_domain::{Configuration, FOLDER_HEADER, ODataCollection, Response, Selectable};

use crate::errors::{Result, UiPathError};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the Orchestrator OData API.
///
/// Holds one pooled HTTP session for its whole lifetime. Authentication is a
/// single client-credentials exchange; the token is never refreshed.
pub struct UiPath {
    http: reqwest::Client,
    configuration: Configuration,
}

impl UiPath {
    /// Build a client and authenticate right away.
    ///
    /// A rejected credential exchange is not an error: the client is
    /// returned unauthenticated and [`UiPath::is_auth`] reports `false`.
    pub async fn new(configuration: Configuration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("uipath-orchestrator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let mut client = Self::with_http_client(http, configuration);
        client.auth().await?;
        Ok(client)
    }

    /// Wrap an existing HTTP client without authenticating
    pub fn with_http_client(http: reqwest::Client, configuration: Configuration) -> Self {
        Self { http, configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Whether a bearer token is held
    pub fn is_auth(&self) -> bool {
        debug!("Checking if authentication is established with UiPath Orchestrator");
        self.configuration.token.is_some()
    }

    /// Exchange the client credentials for a bearer token
    pub async fn auth(&mut self) -> Result<()> {
        info!("Authenticating with UiPath Orchestrator using client credentials");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.configuration.client_id.as_str()),
            ("client_secret", self.configuration.client_secret.as_str()),
            ("scope", self.configuration.scope.as_str()),
        ];

        let response = self
            .http
            .post(&self.configuration.auth_url)
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        info!(status = status.as_u16(), "HTTP Status Code {}", status.as_u16());

        if status == StatusCode::OK {
            let body = response.bytes().await?;
            let token: TokenResponse = serde_json::from_slice(&body)
                .map_err(|e| UiPathError::decode_error_with_source("token", e))?;
            self.configuration.token = Some(token.access_token);
        } else {
            warn!(status = status.as_u16(), "Authentication was rejected");
        }

        Ok(())
    }

    /// Start a request against an Orchestrator path, scoped to folder `fid`
    /// when given
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        fid: Option<&str>,
    ) -> Result<RequestBuilder> {
        let mut builder = self
            .http
            .request(method, self.configuration.endpoint(path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.configuration.token {
            builder = builder.bearer_auth(token);
        }

        if let Some(fid) = fid {
            if fid.trim().is_empty() {
                return Err(UiPathError::validation_error("fid", "folder id must not be empty"));
            }
            builder = builder.header(FOLDER_HEADER, fid);
        }

        Ok(builder)
    }

    /// Send a request and log the status it came back with
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        info!(status, "HTTP Status Code {}", status);
        Ok(response)
    }

    /// Send a request whose response carries no content of interest
    pub(crate) async fn send_expecting(
        &self,
        builder: RequestBuilder,
        success: StatusCode,
    ) -> Result<Response> {
        let response = self.send(builder).await?;
        let status = response.status();
        if status == success {
            info!("Request successful");
        }
        Ok(Response::status(status.as_u16()))
    }

    /// GET an entity collection, selecting the fields `T` reads
    pub(crate) async fn fetch_list<T>(
        &self,
        path: &str,
        fid: Option<&str>,
        filter: Option<&str>,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<T>>>
    where
        T: DeserializeOwned + Selectable,
    {
        let select = T::select();
        let mut query = vec![("$select", select.as_str())];
        if let Some(filter) = filter {
            query.push(("$filter", filter));
        }

        let builder = self.request(Method::GET, path, fid)?.query(&query);
        let response = self.send(builder).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Ok(Response::status(status.as_u16()));
        }

        info!("Request successful");
        let body = response.bytes().await?;
        export_to_json(&body, save_as).await?;
        let content = decode_list::<T>(&body)?;
        Ok(Response::new(status.as_u16(), Some(content)))
    }

    /// GET a single entity, selecting the fields `T` reads
    pub(crate) async fn fetch_one<T>(
        &self,
        path: &str,
        fid: Option<&str>,
        save_as: Option<&Path>,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Selectable,
    {
        let select = T::select();
        let builder = self
            .request(Method::GET, path, fid)?
            .query(&[("$select", select.as_str())]);
        let response = self.send(builder).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Ok(Response::status(status.as_u16()));
        }

        info!("Request successful");
        let body = response.bytes().await?;
        export_to_json(&body, save_as).await?;
        let content = decode_scalar::<T>(&body)?;
        Ok(Response::new(status.as_u16(), Some(content)))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

fn entity_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Decode a single entity body
pub(crate) fn decode_scalar<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| UiPathError::decode_error_with_source(entity_name::<T>(), e))
}

/// Decode the `value` array of an OData collection body
pub(crate) fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice::<ODataCollection<T>>(body)
        .map(|collection| collection.value)
        .map_err(|e| UiPathError::decode_error_with_source(entity_name::<T>(), e))
}

/// Write the raw response body to `save_as` when a path is given
pub(crate) async fn export_to_json(content: &[u8], save_as: Option<&Path>) -> Result<()> {
    if let Some(path) = save_as {
        info!(path = %path.display(), "Exporting response to JSON file");
        tokio::fs::write(path, content)
            .await
            .map_err(|e| UiPathError::file_error_with_source(path.display().to_string(), e))?;
    }
    Ok(())
}
