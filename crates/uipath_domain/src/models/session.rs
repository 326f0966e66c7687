use serde::{Deserialize, Serialize};

use crate::odata::Selectable;
use crate::serde_helpers::lenient_string;

/// Robot session on a host machine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Session {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub machine_id: Option<String>,
    pub host_machine_name: String,
    #[serde(default)]
    pub machine_name: Option<String>,
    pub state: String,
    pub reporting_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub organization_unit_id: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
}

impl Selectable for Session {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "MachineId",
        "HostMachineName",
        "MachineName",
        "State",
        "ReportingTime",
        "OrganizationUnitId",
        "FolderName",
    ];
}
