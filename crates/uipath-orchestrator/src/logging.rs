//! Tracing subscriber setup for the client and the `uipath` binary

use std::env;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for this crate (trace, debug, info, warn, error)
    pub level: Level,
    /// Whether to include file and line numbers
    pub include_location: bool,
    /// Whether to include timestamps
    pub include_timestamps: bool,
    /// Whether to use JSON formatting
    pub json_format: bool,
    /// Overrides the default directives when set (`RUST_LOG`)
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_location: false,
            include_timestamps: true,
            json_format: false,
            env_filter: None,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

impl LoggingConfig {
    /// Create a logging configuration from environment variables
    pub fn from_env() -> Self {
        let level = env::var("LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            level,
            include_location: env_flag("LOG_INCLUDE_LOCATION", false),
            include_timestamps: env_flag("LOG_INCLUDE_TIMESTAMPS", true),
            json_format: env_flag("LOG_JSON_FORMAT", false),
            env_filter: env::var("RUST_LOG").ok(),
        }
    }

    /// Install the global tracing subscriber. Logs go to stderr so that
    /// command output on stdout stays machine readable.
    pub fn init_tracing(&self) -> Result<()> {
        let env_filter = self.build_env_filter()?;

        let fmt_layer = if self.json_format {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_target(true);
            if self.include_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        } else {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_target(false);
            if self.include_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter> {
        let filter = if let Some(ref env_filter) = self.env_filter {
            EnvFilter::try_new(env_filter)?
        } else {
            EnvFilter::default()
                .add_directive(format!("uipath_orchestrator={}", self.level).parse()?)
                .add_directive(format!("uipath={}", self.level).parse()?)
                .add_directive("reqwest=info".parse()?)
                .add_directive("hyper=info".parse()?)
        };

        Ok(filter)
    }
}

/// Initialize logging from the environment
pub fn init_default_logging() -> Result<()> {
    LoggingConfig::from_env().init_tracing()
}
