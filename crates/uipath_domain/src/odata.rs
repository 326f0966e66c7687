//! OData conventions shared by every Orchestrator resource

use serde::{Deserialize, Serialize};

/// Header that scopes a request to a folder (organization unit)
pub const FOLDER_HEADER: &str = "X-UIPATH-OrganizationUnitID";

/// Envelope of an OData collection response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ODataCollection<T> {
    pub value: Vec<T>,
}

/// Entity whose API field names are requested through `$select`
pub trait Selectable {
    /// API field names, in declaration order
    const FIELDS: &'static [&'static str];

    fn select() -> String {
        Self::FIELDS.join(",")
    }
}
