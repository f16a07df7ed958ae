use thiserror::Error;

/// Failures of the program itself. Probe failures are never surfaced here;
/// they are reported as text and the run carries on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpClient(_) => format!("{}\n💡 Check the TLS setup of this machine", self),
            Self::Report(_) => format!("{}\n💡 Is stdout closed or redirected to a full disk?", self),
        }
    }
}

/// Result type alias for program-level operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn user_message_is_the_whole_failure_report() {
        let error = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));

        let message = error.user_message();

        assert_eq!(message.matches("Failed to write report: broken pipe").count(), 1);
        assert!(message.ends_with("💡 Is stdout closed or redirected to a full disk?"));
        assert!(!message.contains("Report("));
    }
}
