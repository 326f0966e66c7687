use serde::{Deserialize, Serialize};

use crate::odata::Selectable;
use crate::serde_helpers::first_robot_version;

/// Machine template or standard machine.
///
/// The API reports robot versions as a list of objects; only the version of
/// the first entry is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Machine {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub r#type: String,
    pub non_production_slots: i64,
    pub unattended_slots: i64,
    #[serde(default, deserialize_with = "first_robot_version")]
    pub robot_versions: Option<String>,
}

impl Selectable for Machine {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "Type",
        "NonProductionSlots",
        "UnattendedSlots",
        "RobotVersions",
    ];
}
