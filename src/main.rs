use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Request;
use config::Config;
use mcp_inspect::commands::{self, handle_call, handle_list, handle_schema};
use mcp_inspect::inspector::Inspector;
use mcp_inspect::transport::ReloaderooTransport;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")));

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> mcp_inspect::Result<()> {
    let transport = ReloaderooTransport::new(config.inspector_command());
    let command = transport.command();
    info!(
        "Inspector: {} {:?}, server: {:?}",
        command.program, command.args, command.server
    );
    let inspector = Inspector::new(transport);

    let mut out = io::stdout();
    let mut err = io::stderr();

    match cli.command.request() {
        Request::Call(args) => handle_call(&inspector, &args, &mut out, &mut err).await,
        Request::Schema(args) => handle_schema(&inspector, &args, &mut out, &mut err).await,
        Request::List(args) => handle_list(&inspector, &args, &mut out, &mut err).await,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_server_override(std::env::var(config::SERVER_ENV).ok());

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    match run_application(&cli, &config).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            log::error!("{}", e);
            commands::report_error(&mut io::stderr(), &e).context("Failed to write error report")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
