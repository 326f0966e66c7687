//! Async client for the UiPath Orchestrator cloud API
//!
//! ```no_run
//! # async fn run() -> uipath_orchestrator::Result<()> {
//! use uipath_orchestrator::{Configuration, UiPath};
//!
//! let configuration = Configuration::new(
//!     "https://cloud.uipath.com/acme/DefaultTenant/orchestrator_",
//!     "app-id",
//!     "app-secret",
//!     "OR.Assets OR.Jobs OR.Queues",
//! );
//! let client = UiPath::new(configuration).await?;
//! let jobs = client.list_jobs("42", "State eq 'Faulted'", None).await?;
//! println!("{} -> {:?}", jobs.status_code, jobs.content);
//! # Ok(())
//! # }
//! ```

mod api;
pub mod client;
pub mod errors;
pub mod logging;
pub mod settings;

pub use client::UiPath;
pub use errors::{Result, UiPathError};
pub use logging::{LoggingConfig, init_default_logging};
pub use settings::load_configuration;
pub use uipath_domain::{Configuration, Priority, Response};
