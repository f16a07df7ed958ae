use std::io;
use std::process::ExitCode;
use clap::Parser;
use libergpt_probe::config::constants::DEFAULT_LOG_FILTER;
use libergpt_probe::errors::AppResult;
use libergpt_probe::structs::cli::Cli;
use libergpt_probe::ui::report_printer::ReportPrinter;
use libergpt_probe::workers::probe_runner::ProbeRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> AppResult<()> {
    let mut printer = ReportPrinter::new(io::stdout()).with_chunk_size(cli.chunk_size());
    let runner = ProbeRunner::from_cli(cli)?;
    runner.run(&mut printer).await?;
    Ok(())
}
