use std::sync::Arc;
use async_trait::async_trait;
use crate::config::constants::{endpoint_url, BLACKBOX_MODE, STREAM_FLAG, SYSTEM_PROMPT};
use crate::enums::endpoint_variant::EndpointVariant;
use crate::enums::probe_error::ProbeError;
use crate::services::probes::dispatch;
use crate::services::reference_formatter::format_references;
use crate::services::response_extractor::{extract_response, parse_body};
use crate::structs::probe::chat_message::ChatMessage;
use crate::structs::probe::http_exchange::HttpExchange;
use crate::structs::probe::probe_report::ProbeReport;
use crate::structs::probe::probe_request::ProbeRequest;
use crate::traits::http_transport::HttpTransport;
use crate::traits::id_generator::IdGenerator;
use crate::traits::probe::Probe;

#[derive(Clone)]
pub struct BlackboxProbe {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    ids: Arc<dyn IdGenerator>,
}

impl BlackboxProbe {
    pub fn new(base_url: &str, transport: Arc<dyn HttpTransport>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
            ids,
        }
    }

    /// Every message gets its own freshly drawn id.
    pub fn build_request(&self, prompt: &str) -> ProbeRequest {
        ProbeRequest {
            mode: Some(BLACKBOX_MODE.to_string()),
            stream: STREAM_FLAG.to_string(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT).with_id(self.ids.generate()),
                ChatMessage::user(prompt).with_id(self.ids.generate()),
            ],
        }
    }

    fn interpret(exchange: &HttpExchange) -> Result<String, ProbeError> {
        // Unlike copilot, a failed status is handed back as-is with the raw text.
        if !exchange.is_success() {
            log::warn!("❌ HTTP Error Details: {} {}", exchange.status, exchange.reason);
            log::warn!("📄 Response Body (text): {}", exchange.body);

            return Err(ProbeError::HttpStatusText {
                status: exchange.status,
                reason: exchange.reason.clone(),
                text: exchange.body.clone(),
            });
        }

        let json = parse_body(&exchange.body)?;
        log::debug!("📨 Full Response: {}", json);

        let parsed = extract_response(&json)?;
        let mut content = parsed.response.content;

        if !parsed.response.reference.is_empty() {
            log::info!("📚 Found {} references from blackbox model.", parsed.response.reference.len());
            content.push_str(&format_references(&parsed.response.reference));
        }

        Ok(content)
    }
}

#[async_trait]
impl Probe for BlackboxProbe {
    fn variant(&self) -> EndpointVariant {
        EndpointVariant::Blackbox
    }

    fn url(&self) -> String {
        endpoint_url(&self.base_url, EndpointVariant::Blackbox.path())
    }

    async fn probe(&self, prompt: &str) -> ProbeReport {
        let request = self.build_request(prompt);
        dispatch(self.transport.as_ref(), EndpointVariant::Blackbox, self.url(), &request, Self::interpret).await
    }
}
