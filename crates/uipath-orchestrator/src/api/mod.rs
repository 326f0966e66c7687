//! Orchestrator resources, one module per OData entity set

mod assets;
mod buckets;
mod calendars;
mod environments;
mod jobs;
mod machines;
mod processes;
mod queues;
mod releases;
mod robots;
mod roles;
mod schedules;
mod sessions;

/// Namespace of the bound OData actions
const SERVER_CONFIGURATION: &str = "UiPath.Server.Configuration.OData";
