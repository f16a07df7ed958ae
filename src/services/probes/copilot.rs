use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};
use crate::config::constants::{endpoint_url, STREAM_FLAG, SYSTEM_PROMPT};
use crate::enums::endpoint_variant::EndpointVariant;
use crate::enums::probe_error::ProbeError;
use crate::helpers::json_detail::encode_detail;
use crate::services::probes::dispatch;
use crate::services::response_extractor::{extract_content, parse_body};
use crate::structs::probe::chat_message::ChatMessage;
use crate::structs::probe::http_exchange::HttpExchange;
use crate::structs::probe::probe_report::ProbeReport;
use crate::structs::probe::probe_request::ProbeRequest;
use crate::traits::http_transport::HttpTransport;
use crate::traits::probe::Probe;

#[derive(Clone)]
pub struct CopilotProbe {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl CopilotProbe {
    pub fn new(base_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
        }
    }

    pub fn build_request(prompt: &str) -> ProbeRequest {
        ProbeRequest {
            mode: None,
            stream: STREAM_FLAG.to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
        }
    }

    fn interpret(exchange: &HttpExchange) -> Result<String, ProbeError> {
        if !exchange.is_success() {
            return Err(Self::escalate(exchange));
        }

        let json = parse_body(&exchange.body)?;
        extract_content(&json).map(str::to_string)
    }

    /// Error bodies are carried as JSON; plain text gets wrapped as `{"error": text}`.
    fn escalate(exchange: &HttpExchange) -> ProbeError {
        log::warn!("❌ HTTP Error Details: {} {}", exchange.status, exchange.reason);

        let detail = match serde_json::from_str::<Value>(&exchange.body) {
            Ok(json) => {
                log::warn!("   - Response Body: {}", json);
                json
            }
            Err(_) => {
                log::warn!("   - Response Body (text): {}", exchange.body);
                json!({ "error": exchange.body })
            }
        };

        ProbeError::HttpStatus {
            status: exchange.status,
            reason: exchange.reason.clone(),
            detail: encode_detail(&detail),
        }
    }
}

#[async_trait]
impl Probe for CopilotProbe {
    fn variant(&self) -> EndpointVariant {
        EndpointVariant::Copilot
    }

    fn url(&self) -> String {
        endpoint_url(&self.base_url, EndpointVariant::Copilot.path())
    }

    async fn probe(&self, prompt: &str) -> ProbeReport {
        let request = Self::build_request(prompt);
        dispatch(self.transport.as_ref(), EndpointVariant::Copilot, self.url(), &request, Self::interpret).await
    }
}
