pub mod chat_message;
pub mod probe_request;
pub mod reference;
pub mod api_response;
pub mod http_exchange;
pub mod probe_report;
