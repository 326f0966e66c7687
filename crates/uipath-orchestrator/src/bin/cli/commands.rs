use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};
use uipath_orchestrator::{Response, UiPath, load_configuration};

use super::args::{Args, Commands};

/// Load settings, authenticate and execute one command
pub async fn run(args: Args) -> Result<()> {
    let configuration = load_configuration(args.config.as_deref())
        .context("Failed to load UiPath settings")?;
    info!(url_base = %configuration.url_base, "Configuration loaded");

    let client = UiPath::new(configuration).await?;
    if !client.is_auth() {
        error!("Authentication with UiPath Orchestrator failed");
        bail!("authentication with UiPath Orchestrator failed, check client id, secret and scope");
    }

    match args.command {
        Commands::Assets(s) => print(client.list_assets(&s.folder, s.save_as.as_deref()).await?),
        Commands::Buckets(s) => print(client.list_buckets(&s.folder, s.save_as.as_deref()).await?),
        Commands::Calendars(s) => {
            print(client.list_calendars(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::Environments(s) => {
            print(client.list_environments(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::Jobs { scope, filter } => print(
            client
                .list_jobs(&scope.folder, &filter, scope.save_as.as_deref())
                .await?,
        ),
        Commands::Machines(s) => {
            print(client.list_machines(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::Processes(s) => {
            print(client.list_processes(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::Queues(s) => print(client.list_queues(&s.folder, s.save_as.as_deref()).await?),
        Commands::QueueItems { scope, filter } => print(
            client
                .list_queue_items(&scope.folder, &filter, scope.save_as.as_deref())
                .await?,
        ),
        Commands::QueueItem { scope, id } => print(
            client
                .get_queue_item(&scope.folder, id, scope.save_as.as_deref())
                .await?,
        ),
        Commands::Releases(s) => {
            print(client.list_releases(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::Robots(s) => print(client.list_robots(&s.folder, s.save_as.as_deref()).await?),
        Commands::RobotLogs { scope, filter } => print(
            client
                .list_robot_logs(&scope.folder, &filter, scope.save_as.as_deref())
                .await?,
        ),
        Commands::Roles { save_as } => print(client.list_roles(save_as.as_deref()).await?),
        Commands::Schedules(s) => {
            print(client.list_schedules(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::Sessions(s) => {
            print(client.list_sessions(&s.folder, s.save_as.as_deref()).await?)
        }
        Commands::StartJob { folder, process_key, robot_id } => {
            print(client.start_job(&folder, &process_key, robot_id).await?)
        }
        Commands::StopJob { folder, id } => print(client.stop_job(&folder, id).await?),
        Commands::AddQueueItem { scope, queue, reference, data, priority } => {
            let data = parse_specific_content(&data)?;
            print(
                client
                    .add_queue_item(
                        &scope.folder,
                        &queue,
                        data,
                        &reference,
                        priority,
                        scope.save_as.as_deref(),
                    )
                    .await?,
            )
        }
        Commands::UploadFile { folder, bucket, local, remote } => {
            print(client.upload_bucket_file(&folder, bucket, &local, &remote).await?)
        }
    }
}

fn print<T: Serialize>(response: Response<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Parse the `--data` argument of `add-queue-item`
fn parse_specific_content(data: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(data).context("--data is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("--data must be a JSON object, got {other}"),
    }
}
