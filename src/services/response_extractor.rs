use serde_json::Value;
use crate::config::constants::SUCCESS_CODE;
use crate::enums::probe_error::ProbeError;
use crate::structs::probe::api_response::{ApiResponse, ResponsePayload};
use crate::structs::probe::reference::Reference;

pub fn parse_body(body: &str) -> Result<Value, ProbeError> {
    serde_json::from_str(body).map_err(|e| ProbeError::MalformedBody(e.to_string()))
}

/// `response.content`, provided `code` is numerically 200 (`200.0` counts),
/// `response` is a non-empty object and `content` is a non-empty string.
pub fn extract_content(json: &Value) -> Result<&str, ProbeError> {
    if json.get("code").and_then(Value::as_f64) != Some(SUCCESS_CODE as f64) {
        return Err(ProbeError::MissingContent);
    }

    json.get("response")
        .and_then(Value::as_object)
        .filter(|response| !response.is_empty())
        .and_then(|response| response.get("content"))
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .ok_or(ProbeError::MissingContent)
}

/// `response.reference` when it is a non-empty array, otherwise nothing.
pub fn extract_references(json: &Value) -> Result<Vec<Reference>, ProbeError> {
    match json.pointer("/response/reference") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Reference::from_entry(entry)
                    .map_err(|e| ProbeError::MalformedBody(format!("reference {}: {}", index + 1, e)))
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

pub fn extract_response(json: &Value) -> Result<ApiResponse, ProbeError> {
    let content = extract_content(json)?.to_string();
    let reference = extract_references(json)?;

    Ok(ApiResponse {
        code: SUCCESS_CODE,
        response: ResponsePayload { content, reference },
    })
}
