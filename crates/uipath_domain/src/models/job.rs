use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

/// Execution of a release on a robot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Job {
    pub id: i64,
    pub key: String,
    pub release_name: String,
    #[serde(default)]
    pub host_machine_name: Option<String>,
    pub r#type: String,
    #[serde(default)]
    pub starting_schedule_id: Option<i64>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub state: String,
    pub source: String,
}

impl Selectable for Job {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "Key",
        "ReleaseName",
        "HostMachineName",
        "Type",
        "StartingScheduleId",
        "CreationTime",
        "StartTime",
        "EndTime",
        "State",
        "Source",
    ];
}
