use serde_json::Value;
use crate::enums::endpoint_variant::EndpointVariant;
use crate::enums::probe_error::ProbeError;
use crate::structs::probe::http_exchange::HttpExchange;

/// Everything one probe call produced, for the presentation layer to show.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub variant: EndpointVariant,
    pub url: String,
    pub request: Value,
    /// `None` when the transport failed before a response arrived.
    pub exchange: Option<HttpExchange>,
    pub result: Result<String, ProbeError>,
}

impl ProbeReport {
    pub fn rendered(&self) -> String {
        match &self.result {
            Ok(content) => content.clone(),
            Err(error) => error.render(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
