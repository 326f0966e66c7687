//! Error handling for Orchestrator client operations
//!
//! HTTP status codes are not errors here: every call that reaches the server
//! reports its status through [`uipath_domain::Response`]. These variants
//! cover what happens around the exchange.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Orchestrator client
#[derive(Error, Debug)]
pub enum UiPathError {
    #[error("HTTP transport failed: {operation}")]
    TransportError {
        operation: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Could not decode {entity} response")]
    DecodeError {
        entity: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("File operation failed: {path}")]
    FileError {
        path: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Configuration error: {field}")]
    ConfigurationError {
        field: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Validation failed: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl UiPathError {
    pub fn transport_error_with_source(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::TransportError { operation: operation.into(), source: Some(Box::new(source)) }
    }

    pub fn decode_error_with_source(
        entity: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DecodeError { entity: entity.into(), source: Some(Box::new(source)) }
    }

    pub fn file_error_with_source(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::FileError { path: path.into(), source: Some(Box::new(source)) }
    }

    pub fn configuration_error(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into(), source: None }
    }

    pub fn configuration_error_with_source(
        field: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigurationError { field: field.into(), source: Some(Box::new(source)) }
    }

    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError { field: field.into(), message: message.into() }
    }

    /// Stable machine readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TransportError { .. } => "TRANSPORT_ERROR",
            Self::DecodeError { .. } => "DECODE_ERROR",
            Self::FileError { .. } => "FILE_ERROR",
            Self::ConfigurationError { .. } => "CONFIGURATION_ERROR",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
        }
    }

    /// Whether repeating the same call could succeed. The client itself
    /// never retries; callers decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TransportError { .. } => true,
            Self::DecodeError { .. } => false,
            Self::FileError { .. } => false,
            Self::ConfigurationError { .. } => false,
            Self::ValidationError { .. } => false,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, UiPathError>;

impl From<reqwest::Error> for UiPathError {
    fn from(err: reqwest::Error) -> Self {
        let operation = match err.url() {
            Some(url) => format!("request to {} failed", url.path()),
            None => "request failed".to_string(),
        };
        Self::transport_error_with_source(operation, err)
    }
}

impl From<config::ConfigError> for UiPathError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration_error_with_source("settings", err)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_codes() {
        let fixture = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            UiPathError::decode_error_with_source("Asset", fixture).error_code(),
            "DECODE_ERROR"
        );
        assert_eq!(
            UiPathError::validation_error("fid", "must not be empty").error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_only_transport_is_retryable() {
        let io = || std::io::Error::other("boom");
        assert!(UiPathError::transport_error_with_source("GET /odata/Jobs", io()).is_retryable());
        assert!(!UiPathError::file_error_with_source("/tmp/out.json", io()).is_retryable());
        assert!(!UiPathError::configuration_error("url_base").is_retryable());
    }

    #[test]
    fn test_display_includes_context() {
        let fixture = UiPathError::file_error_with_source(
            "/tmp/missing.bin",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let actual = fixture.to_string();
        assert_eq!(actual, "File operation failed: /tmp/missing.bin");
        assert!(std::error::Error::source(&fixture).is_some());
    }
}
