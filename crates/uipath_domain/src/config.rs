//! Connection settings and credentials for an Orchestrator tenant

use std::fmt;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Identity server token endpoint used when none is configured
pub const DEFAULT_AUTH_URL: &str = "https://cloud.uipath.com/identity_/connect/token";

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

/// Credentials and endpoints of an Orchestrator tenant.
///
/// `token` stays `None` until a client-credentials exchange succeeds.
#[derive(Clone, Serialize, Deserialize, Setters, PartialEq)]
#[setters(strip_option, into)]
pub struct Configuration {
    /// Base URL of the Orchestrator service, e.g.
    /// `https://cloud.uipath.com/{org}/{tenant}/orchestrator_`
    pub url_base: String,
    /// External application id
    pub client_id: String,
    /// External application secret
    #[serde(skip_serializing)]
    pub client_secret: String,
    /// Space separated OAuth scopes
    pub scope: String,
    /// Identity server token endpoint
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Bearer token obtained from the identity server
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl Configuration {
    pub fn new(
        url_base: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            url_base: url_base.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: scope.into(),
            auth_url: default_auth_url(),
            token: None,
        }
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("url_base", &self.url_base)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scope", &self.scope)
            .field("auth_url", &self.auth_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
