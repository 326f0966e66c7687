use serde::{Deserialize, Serialize};

use crate::odata::Selectable;
use crate::serde_helpers::lenient_string;

/// Time trigger of a process
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    pub package_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub environment_id: Option<String>,
    #[serde(default)]
    pub environment_name: Option<String>,
    pub start_process_cron: String,
    pub start_process_cron_summary: String,
    pub enabled: bool,
}

impl Selectable for Schedule {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "Name",
        "PackageName",
        "EnvironmentId",
        "EnvironmentName",
        "StartProcessCron",
        "StartProcessCronSummary",
        "Enabled",
    ];
}
