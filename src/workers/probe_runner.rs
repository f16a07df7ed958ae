use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use crate::errors::AppResult;
use crate::services::probes::build_probe;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::structs::cli::Cli;
use crate::structs::probe::probe_report::ProbeReport;
use crate::traits::http_transport::HttpTransport;
use crate::traits::probe::Probe;
use crate::ui::report_printer::ReportPrinter;

/// Drives the probes one after another with the same prompt.
pub struct ProbeRunner {
    prompt: String,
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRunner {
    pub fn new(prompt: &str, probes: Vec<Box<dyn Probe>>) -> Self {
        Self {
            prompt: prompt.to_string(),
            probes,
        }
    }

    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(cli, transport))
    }

    pub fn with_transport(cli: &Cli, transport: Arc<dyn HttpTransport>) -> Self {
        let probes = cli.endpoint
            .variants()
            .into_iter()
            .map(|variant| build_probe(variant, &cli.base_url, Arc::clone(&transport)))
            .collect();

        Self::new(&cli.prompt, probes)
    }

    /// Probe failures end up in the reports; only a broken output stream is an error.
    pub async fn run<W: Write>(&self, printer: &mut ReportPrinter<W>) -> AppResult<Vec<ProbeReport>> {
        let start = Instant::now();
        let mut reports = Vec::with_capacity(self.probes.len());

        printer.print_header(&self.prompt)?;

        for probe in &self.probes {
            printer.print_probe_start(probe.variant())?;
            let report = probe.probe(&self.prompt).await;
            printer.print_report(&report)?;
            reports.push(report);
        }

        printer.print_footer()?;

        let failed = reports.iter().filter(|r| !r.is_success()).count();
        log::info!(
            "⏱️  Probed {} endpoint(s) in {:.2}s, {} failed",
            reports.len(),
            start.elapsed().as_secs_f64(),
            failed
        );

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mockall::Sequence;
    use crate::enums::endpoint_variant::EndpointVariant;
    use crate::structs::probe::http_exchange::HttpExchange;
    use crate::traits::http_transport::MockHttpTransport;

    fn scripted_transport() -> MockHttpTransport {
        let mut sequence = Sequence::new();
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post_json()
            .withf(|url, _| url.ends_with("/copilot"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(HttpExchange::new(200, "OK", r#"{"code":200,"response":{"content":"from copilot"}}"#)));
        transport
            .expect_post_json()
            .withf(|url, _| url.ends_with("/blackbox"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(HttpExchange::new(500, "Internal Server Error", "server error")));
        transport
    }

    #[test]
    fn runs_copilot_then_blackbox_and_keeps_going_after_failure() {
        let cli = Cli::parse_from(["libergpt-probe", "--prompt", "ping"]);
        let runner = ProbeRunner::with_transport(&cli, Arc::new(scripted_transport()));
        let mut printer = ReportPrinter::new(Vec::new());

        let reports = tokio_test::block_on(runner.run(&mut printer)).unwrap();

        let variants: Vec<EndpointVariant> = reports.iter().map(|r| r.variant).collect();
        assert_eq!(variants, vec![EndpointVariant::Copilot, EndpointVariant::Blackbox]);
        assert_eq!(reports[0].rendered(), "from copilot");
        assert_eq!(reports[1].rendered(), "HTTP 500 Internal Server Error: server error");

        let output = String::from_utf8(printer.into_inner()).unwrap();
        let copilot_at = output.find("🤖 Testing Copilot API...").unwrap();
        let blackbox_at = output.find("🔲 Testing Blackbox API...").unwrap();
        assert!(copilot_at < blackbox_at);
        assert!(output.contains("📝 Testing with prompt: 'ping'"));
        assert!(output.trim_end().ends_with(&"=".repeat(60)));
    }

    #[test]
    fn single_endpoint_selection_sends_one_request() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post_json()
            .withf(|url, body| url == "http://127.0.0.1:1/v1/ai/blackbox" && body["messages"][1]["content"] == "ping")
            .times(1)
            .returning(|_, _| Ok(HttpExchange::new(200, "OK", r#"{"code":200,"response":{"content":"pong"}}"#)));
        let cli = Cli::parse_from([
            "libergpt-probe",
            "--prompt", "ping",
            "--endpoint", "blackbox",
            "--base-url", "http://127.0.0.1:1/v1/ai",
        ]);
        let runner = ProbeRunner::with_transport(&cli, Arc::new(transport));
        let mut printer = ReportPrinter::new(Vec::new());

        let reports = tokio_test::block_on(runner.run(&mut printer)).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].rendered(), "pong");
    }
}
