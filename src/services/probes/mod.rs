pub mod copilot;
pub mod blackbox;

use std::sync::Arc;
use serde::Serialize;
use serde_json::Value;
use crate::config::constants::ERROR_PREFIX;
use crate::enums::endpoint_variant::EndpointVariant;
use crate::enums::probe_error::ProbeError;
use crate::helpers::id_generator::RandomIdGenerator;
use crate::services::probes::blackbox::BlackboxProbe;
use crate::services::probes::copilot::CopilotProbe;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::structs::probe::http_exchange::HttpExchange;
use crate::structs::probe::probe_report::ProbeReport;
use crate::traits::http_transport::HttpTransport;
use crate::traits::probe::Probe;

pub fn build_probe(variant: EndpointVariant, base_url: &str, transport: Arc<dyn HttpTransport>) -> Box<dyn Probe> {
    match variant {
        EndpointVariant::Copilot => Box::new(CopilotProbe::new(base_url, transport)),
        EndpointVariant::Blackbox => Box::new(BlackboxProbe::new(base_url, transport, Arc::new(RandomIdGenerator))),
    }
}

/// One-shot copilot call over a fresh client. Never fails; see [`Probe::call`].
pub async fn call_copilot(base_url: &str, prompt: &str) -> String {
    call_once(EndpointVariant::Copilot, base_url, prompt).await
}

/// One-shot blackbox call over a fresh client. Never fails; see [`Probe::call`].
pub async fn call_blackbox(base_url: &str, prompt: &str) -> String {
    call_once(EndpointVariant::Blackbox, base_url, prompt).await
}

async fn call_once(variant: EndpointVariant, base_url: &str, prompt: &str) -> String {
    match ReqwestTransport::new() {
        Ok(transport) => build_probe(variant, base_url, Arc::new(transport)).call(prompt).await,
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}

/// Shared send path. `interpret` owns everything after a response arrives,
/// which is where the two endpoints differ. A request that cannot be encoded
/// is reported as malformed and never sent.
pub(crate) async fn dispatch<R, F>(
    transport: &dyn HttpTransport,
    variant: EndpointVariant,
    url: String,
    request: &R,
    interpret: F,
) -> ProbeReport
where
    R: Serialize + ?Sized,
    F: FnOnce(&HttpExchange) -> Result<String, ProbeError>,
{
    let body = match serde_json::to_value(request) {
        Ok(body) => body,
        Err(e) => {
            return ProbeReport {
                variant,
                url,
                request: Value::Null,
                exchange: None,
                result: Err(ProbeError::MalformedBody(format!("Failed to encode request body: {}", e))),
            };
        }
    };

    log::info!("🚀 Sending POST request to: {}", url);
    log::debug!("📤 Request body: {}", body);

    let exchange = match transport.post_json(&url, &body).await {
        Ok(exchange) => exchange,
        Err(e) => {
            log::error!("❌ {} request failed: {}", variant.display_name(), e);
            return ProbeReport {
                variant,
                url,
                request: body,
                exchange: None,
                result: Err(e),
            };
        }
    };

    log::info!("✅ HTTP {} {}", exchange.status, exchange.reason);

    let result = interpret(&exchange);
    match &result {
        Ok(_) => log::info!("🎉 Successfully retrieved content from {} response.", variant),
        Err(ProbeError::MissingContent) => log::warn!("⚠️ {}", ProbeError::MissingContent),
        Err(e) => log::error!("❌ Error occurred: {}", e),
    }

    ProbeReport {
        variant,
        url,
        request: body,
        exchange: Some(exchange),
        result,
    }
}
