use serde::{Deserialize, Serialize};

use crate::odata::Selectable;

/// Storage bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct Bucket {
    pub id: i64,
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Selectable for Bucket {
    const FIELDS: &'static [&'static str] = &["Id", "Identifier", "Name", "Description"];
}

/// Pre-signed URI for writing one file of a bucket. The URI carries its own
/// signature, so the upload goes out without the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct BlobFileAccess {
    pub uri: String,
}
