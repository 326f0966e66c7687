use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Robot {
    pub id: i64,
    #[serde(default)]
    pub machine_name: Option<String>,
    pub name: String,
    pub username: String,
    pub r#type: String,
    pub robot_environments: String,
}

impl Selectable for Robot {
    const FIELDS: &'static [&'static str] =
        &["Id", "MachineName", "Name", "Username", "Type", "RobotEnvironments"];
}

/// Log line emitted by a robot during a job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct RobotLog {
    pub id: i64,
    pub job_key: String,
    pub level: String,
    pub windows_identity: String,
    pub process_name: String,
    pub time_stamp: String,
    pub message: String,
    pub robot_name: String,
    pub machine_id: i64,
}

impl Selectable for RobotLog {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "JobKey",
        "Level",
        "WindowsIdentity",
        "ProcessName",
        "TimeStamp",
        "Message",
        "RobotName",
        "MachineId",
    ];
}
