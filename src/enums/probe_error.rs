use thiserror::Error;
use crate::config::constants::{ERROR_PREFIX, UNEXPECTED_FORMAT_MESSAGE};

/// Every way a single probe call can fail.
///
/// Callers branch on the variant; [`ProbeError::render`] turns it back into the
/// plain-text line the harness has always printed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status, escalated with a JSON detail (copilot).
    #[error("HTTP {status} {reason}: {detail}")]
    HttpStatus {
        status: u16,
        reason: String,
        detail: String,
    },

    /// Non-2xx status, returned with the raw body text (blackbox).
    #[error("HTTP {status} {reason}: {text}")]
    HttpStatusText {
        status: u16,
        reason: String,
        text: String,
    },

    /// A body that could not be used: an unusable 2xx response, or a request
    /// that failed to encode before sending.
    #[error("{0}")]
    MalformedBody(String),

    #[error("{}", UNEXPECTED_FORMAT_MESSAGE)]
    MissingContent,
}

impl ProbeError {
    pub fn render(&self) -> String {
        match self {
            Self::Transport(_) | Self::HttpStatus { .. } | Self::MalformedBody(_) => {
                format!("{}{}", ERROR_PREFIX, self)
            }
            Self::HttpStatusText { .. } | Self::MissingContent => self.to_string(),
        }
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::HttpStatusText { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalated_status_renders_as_error_occurred() {
        let error = ProbeError::HttpStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
            detail: r#"{"error": "server error"}"#.to_string(),
        };

        assert_eq!(
            error.render(),
            r#"An error occurred: HTTP 500 Internal Server Error: {"error": "server error"}"#
        );
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn returned_status_renders_bare() {
        let error = ProbeError::HttpStatusText {
            status: 502,
            reason: "Bad Gateway".to_string(),
            text: "upstream down".to_string(),
        };

        assert_eq!(error.render(), "HTTP 502 Bad Gateway: upstream down");
    }

    #[test]
    fn missing_content_is_not_prefixed() {
        assert_eq!(
            ProbeError::MissingContent.render(),
            "Unexpected response format: 'content' key not found."
        );
        assert_eq!(ProbeError::MissingContent.status(), None);
    }

    #[test]
    fn transport_and_malformed_are_prefixed() {
        assert_eq!(
            ProbeError::Transport("connection refused".to_string()).render(),
            "An error occurred: connection refused"
        );
        assert_eq!(
            ProbeError::MalformedBody("expected value at line 1 column 1".to_string()).render(),
            "An error occurred: expected value at line 1 column 1"
        );
    }
}
