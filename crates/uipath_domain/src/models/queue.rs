use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

/// Queue definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Queue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Selectable for Queue {
    const FIELDS: &'static [&'static str] = &["Id", "Name", "Description"];
}

/// Transaction item of a queue. `specific_data` is the item's payload as
/// serialized JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct QueueItem {
    pub id: i64,
    pub queue_definition_id: i64,
    pub status: String,
    pub reference: String,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub start_processing: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_processing: Option<DateTime<Utc>>,
    pub retry_number: i64,
    pub specific_data: String,
}

impl Selectable for QueueItem {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "QueueDefinitionId",
        "Status",
        "Reference",
        "CreationTime",
        "StartProcessing",
        "EndProcessing",
        "RetryNumber",
        "SpecificData",
    ];
}

/// Identifiers returned after adding an item to a queue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct QueueItemCreated {
    pub id: i64,
    pub organization_unit_id: i64,
    pub queue_definition_id: i64,
}

impl Selectable for QueueItemCreated {
    const FIELDS: &'static [&'static str] = &["Id", "OrganizationUnitId", "QueueDefinitionId"];
}
