use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::enums::probe_error::ProbeError;
use crate::errors::AppResult;
use crate::structs::probe::http_exchange::HttpExchange;
use crate::traits::http_transport::HttpTransport;

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Client defaults apply: no timeout, no retries.
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpExchange, ProbeError> {
        let response = self.client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        Ok(HttpExchange::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            &text,
        ))
    }
}
