use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

/// Asset stored in an Orchestrator folder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub external_name: Option<String>,
    pub has_default_value: bool,
    pub value: String,
    pub value_scope: String,
    pub value_type: String,
    pub int_value: i64,
    pub string_value: String,
    pub bool_value: bool,
    pub credential_username: String,
    #[serde(default)]
    pub credential_store_id: Option<i64>,
    pub can_be_deleted: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Selectable for Asset {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "Name",
        "ExternalName",
        "HasDefaultValue",
        "Value",
        "ValueScope",
        "ValueType",
        "IntValue",
        "StringValue",
        "BoolValue",
        "CredentialUsername",
        "CredentialStoreId",
        "CanBeDeleted",
        "Description",
    ];
}
