use serde::{Deserialize, Serialize};

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpExchange {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpExchange {
    pub fn new(status: u16, reason: &str, body: &str) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
