use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uipath_orchestrator::Priority;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file (TOML, YAML or JSON); UIPATH_* variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Folder scope and optional raw export shared by the list commands
#[derive(clap::Args, Debug, Clone)]
pub struct FolderArgs {
    /// Folder (organization unit) id
    #[arg(long, short)]
    pub folder: String,

    /// Write the raw JSON response to this file
    #[arg(long)]
    pub save_as: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List assets
    Assets(FolderArgs),
    /// List storage buckets
    Buckets(FolderArgs),
    /// List calendars
    Calendars(FolderArgs),
    /// List environments
    Environments(FolderArgs),
    /// List jobs matching an OData filter
    Jobs {
        #[command(flatten)]
        scope: FolderArgs,
        /// OData filter, e.g. "State eq 'Faulted'"
        #[arg(long)]
        filter: String,
    },
    /// List machines
    Machines(FolderArgs),
    /// List processes
    Processes(FolderArgs),
    /// List queue definitions
    Queues(FolderArgs),
    /// List queue items matching an OData filter
    QueueItems {
        #[command(flatten)]
        scope: FolderArgs,
        #[arg(long)]
        filter: String,
    },
    /// Show one queue item
    QueueItem {
        #[command(flatten)]
        scope: FolderArgs,
        #[arg(long)]
        id: i64,
    },
    /// List process releases
    Releases(FolderArgs),
    /// List robots
    Robots(FolderArgs),
    /// List robot logs matching an OData filter
    RobotLogs {
        #[command(flatten)]
        scope: FolderArgs,
        #[arg(long)]
        filter: String,
    },
    /// List tenant roles
    Roles {
        #[arg(long)]
        save_as: Option<PathBuf>,
    },
    /// List process schedules
    Schedules(FolderArgs),
    /// List robot sessions
    Sessions(FolderArgs),
    /// Start a job for a release key
    StartJob {
        #[arg(long, short)]
        folder: String,
        /// Release key of the process
        #[arg(long)]
        process_key: String,
        /// Run on this robot instead of any available one
        #[arg(long)]
        robot_id: Option<i64>,
    },
    /// Kill a running job
    StopJob {
        #[arg(long, short)]
        folder: String,
        #[arg(long)]
        id: i64,
    },
    /// Add an item to a queue
    AddQueueItem {
        #[command(flatten)]
        scope: FolderArgs,
        #[arg(long)]
        queue: String,
        #[arg(long)]
        reference: String,
        /// Specific content as a JSON object
        #[arg(long)]
        data: String,
        #[arg(long, default_value_t = Priority::Normal)]
        priority: Priority,
    },
    /// Upload a local file into a storage bucket
    UploadFile {
        #[arg(long, short)]
        folder: String,
        /// Bucket id
        #[arg(long)]
        bucket: i64,
        #[arg(long)]
        local: PathBuf,
        /// Destination path inside the bucket
        #[arg(long)]
        remote: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_jobs_with_filter() {
        let fixture = ["uipath", "jobs", "--folder", "42", "--filter", "State eq 'Faulted'"];
        let actual = Args::parse_from(fixture);
        match actual.command {
            Commands::Jobs { scope, filter } => {
                assert_eq!(scope.folder, "42");
                assert_eq!(filter, "State eq 'Faulted'");
                assert_eq!(scope.save_as, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_add_queue_item_defaults_to_normal_priority() {
        let fixture = [
            "uipath",
            "add-queue-item",
            "-f",
            "42",
            "--queue",
            "Invoices",
            "--reference",
            "INV-1",
            "--data",
            "{}",
        ];
        let actual = Args::parse_from(fixture);
        match actual.command {
            Commands::AddQueueItem { priority, .. } => assert_eq!(priority, Priority::Normal),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let fixture = [
            "uipath", "add-queue-item", "-f", "42", "--queue", "Q", "--reference", "R", "--data",
            "{}", "--priority", "Urgent",
        ];
        assert!(Args::try_parse_from(fixture).is_err());
    }
}
