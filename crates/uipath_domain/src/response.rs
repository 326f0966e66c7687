use serde::{Deserialize, Serialize};

/// Outcome of an Orchestrator call.
///
/// Any HTTP status is reported here rather than as an error; `content` is
/// only populated when the operation's success status came back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response<T = ()> {
    pub status_code: u16,
    pub content: Option<T>,
}

impl<T> Response<T> {
    pub fn new(status_code: u16, content: Option<T>) -> Self {
        Self { status_code, content }
    }

    /// Envelope for a call that carries no content
    pub fn status(status_code: u16) -> Self {
        Self { status_code, content: None }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
