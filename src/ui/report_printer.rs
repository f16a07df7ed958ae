use std::io::{self, Write};
use serde_json::Value;
use crate::config::constants::{BANNER_WIDTH, REPORT_TITLE, SECTION_WIDTH};
use crate::enums::endpoint_variant::EndpointVariant;
use crate::helpers::message_splitter::split_message;
use crate::structs::probe::probe_report::ProbeReport;

/// Writes the human-readable run report. Knows nothing about HTTP; it only
/// renders what a [`ProbeReport`] already holds.
pub struct ReportPrinter<W: Write> {
    out: W,
    chunk_size: Option<usize>,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            chunk_size: None,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: Option<usize>) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_header(&mut self, prompt: &str) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.out, "{}", REPORT_TITLE)?;
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.out, "📝 Testing with prompt: '{}'", prompt)?;
        writeln!(self.out, "📏 Prompt length: {} characters", prompt.chars().count())?;
        writeln!(self.out)
    }

    pub fn print_probe_start(&mut self, variant: EndpointVariant) -> io::Result<()> {
        writeln!(self.out, "{} Testing {} API...", variant.emoji(), variant.display_name())?;
        writeln!(self.out, "{}", "-".repeat(SECTION_WIDTH))
    }

    pub fn print_report(&mut self, report: &ProbeReport) -> io::Result<()> {
        writeln!(self.out, "🚀 Sending POST request to: {}", report.url)?;
        writeln!(self.out, "📤 Request body: {}", pretty(&report.request))?;

        match &report.exchange {
            Some(exchange) => {
                writeln!(self.out, "✅ HTTP Response Details:")?;
                writeln!(self.out, "   - Status Code: {}", exchange.status)?;
                writeln!(self.out, "   - Status Text: {}", exchange.reason)?;
                match serde_json::from_str::<Value>(&exchange.body) {
                    Ok(json) => writeln!(self.out, "📨 Response Body: {}", pretty(&json))?,
                    Err(_) => writeln!(self.out, "📨 Response Body (text): {}", exchange.body)?,
                }
            }
            None => writeln!(self.out, "❌ No HTTP response received")?,
        }

        let rendered = report.rendered();

        writeln!(self.out)?;
        writeln!(self.out, "📄 {} API Response:", report.variant.display_name())?;
        writeln!(self.out, "{}", "-".repeat(SECTION_WIDTH))?;
        self.print_content(&rendered)?;
        writeln!(self.out, "📏 Response length: {} characters", rendered.chars().count())?;
        writeln!(self.out)
    }

    pub fn print_footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))?;
        self.out.flush()
    }

    fn print_content(&mut self, content: &str) -> io::Result<()> {
        let Some(chunk_size) = self.chunk_size else {
            return writeln!(self.out, "{}", content);
        };

        let chunks = split_message(content, chunk_size);
        let total = chunks.len();
        for (index, chunk) in chunks.iter().enumerate() {
            if total > 1 {
                writeln!(self.out, "📦 Part {}/{}:", index + 1, total)?;
            }
            writeln!(self.out, "{}", chunk)?;
        }

        Ok(())
    }
}

fn pretty(json: &Value) -> String {
    serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string())
}
