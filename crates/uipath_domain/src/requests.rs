//! Request bodies sent to Orchestrator write endpoints

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};

/// Body for creating an Orchestrator-managed storage bucket
#[derive(Debug, Clone, Serialize, PartialEq, Setters)]
#[serde(rename_all = "PascalCase")]
#[setters(strip_option, into)]
pub struct NewBucket {
    pub name: String,
    pub description: String,
    pub identifier: String,
    pub storage_provider: Option<String>,
    pub storage_parameters: Option<String>,
    pub storage_container: Option<String>,
    pub credential_store_id: Option<i64>,
    pub external_name: Option<String>,
    pub password: Option<String>,
    pub folders_count: i64,
    pub id: i64,
}

impl NewBucket {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            identifier: identifier.into(),
            storage_provider: None,
            storage_parameters: None,
            storage_container: None,
            credential_store_id: None,
            external_name: None,
            password: None,
            folders_count: 0,
            id: 0,
        }
    }
}

/// How Orchestrator allocates robots to a job start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Strategy {
    /// Run on the robots listed in `RobotIds`
    Specific,
    /// Run `JobsCount` times on whichever robots are free
    JobsCount,
}

/// Origin recorded on jobs started through this client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum JobSource {
    #[default]
    Manual,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StartInfo {
    pub release_key: String,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot_ids: Option<Vec<i64>>,
    pub jobs_count: u32,
    pub source: JobSource,
}

/// Body of the `StartJobs` action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StartJobs {
    #[serde(rename = "startInfo")]
    pub start_info: StartInfo,
}

impl StartJobs {
    /// Start `release_key` on `robot_id`, or once on any available robot
    pub fn new(release_key: impl Into<String>, robot_id: Option<i64>) -> Self {
        let release_key = release_key.into();
        let start_info = match robot_id {
            Some(id) => StartInfo {
                release_key,
                strategy: Strategy::Specific,
                robot_ids: Some(vec![id]),
                jobs_count: 0,
                source: JobSource::Manual,
            },
            None => StartInfo {
                release_key,
                strategy: Strategy::JobsCount,
                robot_ids: None,
                jobs_count: 1,
                source: JobSource::Manual,
            },
        };
        Self { start_info }
    }
}

/// Body of the `StopJob` action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StopJob {
    pub strategy: String,
}

impl StopJob {
    /// Terminate the job immediately
    pub fn kill() -> Self {
        Self { strategy: "2".to_string() }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QueueItemData {
    pub name: String,
    pub priority: Priority,
    pub defer_date: Option<String>,
    pub due_date: Option<String>,
    pub reference: String,
    pub specific_content: Map<String, Value>,
}

/// Body of the `AddQueueItem` action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddQueueItem {
    #[serde(rename = "itemData")]
    pub item_data: QueueItemData,
}

impl AddQueueItem {
    pub fn new(
        queue: impl Into<String>,
        reference: impl Into<String>,
        priority: Priority,
        specific_content: Map<String, Value>,
    ) -> Self {
        Self {
            item_data: QueueItemData {
                name: queue.into(),
                priority,
                defer_date: None,
                due_date: None,
                reference: reference.into(),
                specific_content,
            },
        }
    }
}

/// Replacement body for an existing queue item
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateQueueItem {
    pub name: String,
    pub priority: Priority,
    pub specific_content: Map<String, Value>,
    pub defer_date: Option<String>,
    pub due_date: Option<String>,
    pub risk_sla_date: Option<String>,
}

impl UpdateQueueItem {
    pub fn new(queue: impl Into<String>, specific_content: Map<String, Value>) -> Self {
        Self {
            name: queue.into(),
            priority: Priority::High,
            specific_content,
            defer_date: None,
            due_date: None,
            risk_sla_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn content() -> Map<String, Value> {
        let mut fixture = Map::new();
        fixture.insert("InvoiceNo".to_string(), json!("INV-1"));
        fixture.insert("Amount".to_string(), json!(12.5));
        fixture
    }

    #[test]
    fn test_new_bucket_body() {
        let fixture = NewBucket::new("invoices", "6f1b2a9e").description("Scanned PDFs");
        let actual = serde_json::to_value(&fixture).unwrap();
        let expected = json!({
            "Name": "invoices",
            "Description": "Scanned PDFs",
            "Identifier": "6f1b2a9e",
            "StorageProvider": null,
            "StorageParameters": null,
            "StorageContainer": null,
            "CredentialStoreId": null,
            "ExternalName": null,
            "Password": null,
            "FoldersCount": 0,
            "Id": 0
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_start_jobs_on_specific_robot() {
        let actual = serde_json::to_value(StartJobs::new("rel-key", Some(5))).unwrap();
        let expected = json!({
            "startInfo": {
                "ReleaseKey": "rel-key",
                "Strategy": "Specific",
                "RobotIds": [5],
                "JobsCount": 0,
                "Source": "Manual"
            }
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_start_jobs_on_any_robot() {
        let actual = serde_json::to_value(StartJobs::new("rel-key", None)).unwrap();
        let expected = json!({
            "startInfo": {
                "ReleaseKey": "rel-key",
                "Strategy": "JobsCount",
                "JobsCount": 1,
                "Source": "Manual"
            }
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_stop_job_kill() {
        let actual = serde_json::to_value(StopJob::kill()).unwrap();
        assert_eq!(actual, json!({"strategy": "2"}));
    }

    #[test]
    fn test_add_queue_item_body() {
        let fixture = AddQueueItem::new("Invoices", "INV-1", Priority::default(), content());
        let actual = serde_json::to_value(&fixture).unwrap();
        let expected = json!({
            "itemData": {
                "Name": "Invoices",
                "Priority": "Normal",
                "DeferDate": null,
                "DueDate": null,
                "Reference": "INV-1",
                "SpecificContent": {"InvoiceNo": "INV-1", "Amount": 12.5}
            }
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_queue_item_is_high_priority() {
        let actual = serde_json::to_value(UpdateQueueItem::new("Invoices", content())).unwrap();
        assert_eq!(actual["Priority"], json!("High"));
        assert_eq!(actual["RiskSlaDate"], Value::Null);
    }

    #[test]
    fn test_strategy_parses_from_text() {
        assert_eq!(Strategy::from_str("JobsCount").unwrap(), Strategy::JobsCount);
        assert!(Strategy::from_str("All").is_err());
        assert_eq!(JobSource::default().to_string(), "Manual");
    }

    #[test]
    fn test_priority_parses_from_text() {
        assert_eq!(Priority::from_str("High").unwrap(), Priority::High);
        assert!(Priority::from_str("Urgent").is_err());
    }
}
