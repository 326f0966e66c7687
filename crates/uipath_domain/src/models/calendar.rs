use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::odata::Selectable;

/// Calendar of excluded (non-working) dates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Calendar {
    pub id: i64,
    pub name: String,
    pub excluded_dates: Vec<Value>,
    #[serde(default)]
    pub time_zone_id: Option<String>,
}

impl Selectable for Calendar {
    const FIELDS: &'static [&'static str] = &["Id", "Name", "ExcludedDates", "TimeZoneId"];
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_excluded_dates_are_kept_verbatim() {
        let fixture = serde_json::json!({
            "Id": 1,
            "Name": "Holidays DE",
            "ExcludedDates": ["2025-12-25T00:00:00Z", "2025-12-26T00:00:00Z"],
            "TimeZoneId": "W. Europe Standard Time"
        });
        let actual: Calendar = serde_json::from_value(fixture).unwrap();
        assert_eq!(actual.excluded_dates.len(), 2);
        assert_eq!(actual.time_zone_id.as_deref(), Some("W. Europe Standard Time"));
    }
}
