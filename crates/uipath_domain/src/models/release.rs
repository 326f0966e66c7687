use serde::{Deserialize, Serialize};

use crate::odata::Selectable;
use crate::serde_helpers::lenient_string;

/// Process release (a package version bound to a folder)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Release {
    pub id: i64,
    pub key: String,
    pub process_key: String,
    pub process_version: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub environment_id: Option<String>,
}

impl Selectable for Release {
    const FIELDS: &'static [&'static str] =
        &["Id", "Key", "ProcessKey", "ProcessVersion", "EnvironmentId"];
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_numeric_environment_id_becomes_text() {
        let fixture = serde_json::json!({
            "Id": 4,
            "Key": "0b5c3f0e-1111-2222-3333-444455556666",
            "ProcessKey": "InvoiceBot",
            "ProcessVersion": "1.0.4",
            "EnvironmentId": 17
        });
        let actual: Release = serde_json::from_value(fixture).unwrap();
        assert_eq!(actual.environment_id.as_deref(), Some("17"));
    }

    #[test]
    fn test_null_environment_id_is_none() {
        let fixture = serde_json::json!({
            "Id": 4, "Key": "k", "ProcessKey": "p", "ProcessVersion": "1.0.0",
            "EnvironmentId": null
        });
        let actual: Release = serde_json::from_value(fixture).unwrap();
        assert_eq!(actual.environment_id, None);
    }
}
