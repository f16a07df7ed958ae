use clap::Parser;
use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_CHUNK_SIZE, DEFAULT_PROMPT};
use crate::enums::endpoint_selection::EndpointSelection;

#[derive(Parser, Debug)]
#[clap(name = "libergpt-probe")]
#[clap(about = "Send a test prompt to the LiberGPT AI endpoints and report what comes back", long_about = None)]
pub struct Cli {
    #[clap(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    #[clap(short, long, value_enum, default_value_t = EndpointSelection::All)]
    pub endpoint: EndpointSelection,

    #[clap(short, long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Print the final content in parts of at most this many characters
    /// (2000 when given without a value).
    #[clap(short, long, value_name = "CHARS")]
    chunk_size: Option<Option<usize>>,
}

impl Cli {
    /// `None` when content should be printed whole.
    pub fn chunk_size(&self) -> Option<usize> {
        self.chunk_size.map(|size| size.unwrap_or(DEFAULT_CHUNK_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_fixed_demonstration() {
        let cli = Cli::parse_from(["libergpt-probe"]);

        assert_eq!(cli.prompt, DEFAULT_PROMPT);
        assert_eq!(cli.endpoint, EndpointSelection::All);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.chunk_size(), None);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "libergpt-probe",
            "--prompt", "What is Rust?",
            "--endpoint", "blackbox",
            "--base-url", "http://127.0.0.1:9000/v1/ai",
            "--chunk-size", "500",
        ]);

        assert_eq!(cli.prompt, "What is Rust?");
        assert_eq!(cli.endpoint, EndpointSelection::Blackbox);
        assert_eq!(cli.base_url, "http://127.0.0.1:9000/v1/ai");
        assert_eq!(cli.chunk_size(), Some(500));
    }

    #[test]
    fn bare_chunk_flag_uses_message_limit() {
        let cli = Cli::parse_from(["libergpt-probe", "--chunk-size"]);

        assert_eq!(cli.chunk_size(), Some(DEFAULT_CHUNK_SIZE));
        assert_eq!(cli.chunk_size(), Some(2000));
    }
}
