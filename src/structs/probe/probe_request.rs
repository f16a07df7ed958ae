use serde::{Deserialize, Serialize};
use crate::structs::probe::chat_message::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    pub stream: String,

    pub messages: Vec<ChatMessage>,
}
