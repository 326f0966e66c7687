use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

/// Tenant level role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub r#type: String,
}

impl Selectable for Role {
    const FIELDS: &'static [&'static str] = &["Id", "Name", "DisplayName", "Type"];
}
