pub const DEFAULT_BASE_URL: &str = "https://api.zpi.my.id/v1/ai";
pub const COPILOT_PATH: &str = "copilot";
pub const BLACKBOX_PATH: &str = "blackbox";

pub const SYSTEM_PROMPT: &str = "You are LiberGPT. A helpful Assistant";
pub const DEFAULT_PROMPT: &str = "Hello! Can you explain what Python is in a simple way?";

/// Both endpoints expect the stream flag as the text "false", not a JSON boolean.
pub const STREAM_FLAG: &str = "false";
pub const BLACKBOX_MODE: &str = "realtime";

pub const MESSAGE_ID_LENGTH: usize = 15;

pub const SUCCESS_CODE: i64 = 200;

pub const ERROR_PREFIX: &str = "An error occurred: ";
pub const UNEXPECTED_FORMAT_MESSAGE: &str = "Unexpected response format: 'content' key not found.";
pub const REFERENCES_HEADER: &str = "\n\n**References:**\n";

/// Chat-platform message limit, used when `--chunk-size` is given without a value.
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

pub const REPORT_TITLE: &str = "LiberGPT AI API Test Script";
pub const BANNER_WIDTH: usize = 60;
pub const SECTION_WIDTH: usize = 30;

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
