//! Domain types for the UiPath Orchestrator API

pub mod config;
pub mod models;
pub mod odata;
pub mod requests;
pub mod response;

mod serde_helpers;

pub use config::{Configuration, DEFAULT_AUTH_URL};
pub use models::*;
pub use odata::{FOLDER_HEADER, ODataCollection, Selectable};
pub use requests::{
    AddQueueItem, JobSource, NewBucket, Priority, QueueItemData, StartInfo, StartJobs, StopJob,
    Strategy, UpdateQueueItem,
};
pub use response::Response;
