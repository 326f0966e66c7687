use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Environment {
    pub id: i64,
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Selectable for Environment {
    const FIELDS: &'static [&'static str] = &["Id", "Name", "Type", "Description"];
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_type_field_maps_from_pascal_case() {
        let fixture = serde_json::json!({"Id": 2, "Name": "Prod", "Type": "Prod"});
        let actual: Environment = serde_json::from_value(fixture).unwrap();
        let expected = Environment {
            id: 2,
            name: "Prod".to_string(),
            r#type: "Prod".to_string(),
            description: None,
        };
        assert_eq!(actual, expected);
    }
}
