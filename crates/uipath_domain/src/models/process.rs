use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

/// Published process package. `id` is the package name, not a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Process {
    pub id: String,
    pub key: String,
    pub version: String,
    pub published: DateTime<Utc>,
    pub authors: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Selectable for Process {
    const FIELDS: &'static [&'static str] =
        &["Id", "Key", "Version", "Published", "Authors", "Description"];
}
