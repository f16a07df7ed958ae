use async_trait::async_trait;
use serde_json::Value;
use crate::enums::probe_error::ProbeError;
use crate::structs::probe::http_exchange::HttpExchange;

/// Sends one JSON POST and hands back the raw exchange.
///
/// Any status counts as a response; only failures to get one are errors,
/// and those are always [`ProbeError::Transport`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpExchange, ProbeError>;
}
