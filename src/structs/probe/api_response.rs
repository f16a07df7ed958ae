use serde::{Deserialize, Serialize};
use crate::structs::probe::reference::Reference;

/// A response body that passed the shape check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    pub response: ResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub content: String,
    #[serde(default)]
    pub reference: Vec<Reference>,
}
