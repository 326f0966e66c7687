//! Orchestrator entities as returned by the OData endpoints.
//!
//! Models read the API's PascalCase field names and serialize back out in
//! snake_case. Optional fields default to `None` when absent.

mod asset;
mod bucket;
mod calendar;
mod environment;
mod job;
mod machine;
mod process;
mod queue;
mod release;
mod robot;
mod role;
mod schedule;
mod session;

pub use asset::Asset;
pub use bucket::{BlobFileAccess, Bucket};
pub use calendar::Calendar;
pub use environment::Environment;
pub use job::Job;
pub use machine::Machine;
pub use process::Process;
pub use queue::{Queue, QueueItem, QueueItemCreated};
pub use release::Release;
pub use robot::{Robot, RobotLog};
pub use role::Role;
pub use schedule::Schedule;
pub use session::Session;
