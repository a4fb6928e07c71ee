//! CLI entry point for datafun.
//!
//! Provides subcommands to fetch the configured sources, process the fetched
//! files into reports, or do both in one go.

use anyhow::Result;
use clap::{Parser, Subcommand};
use datafun::{
    config::Settings,
    fetch::BasicClient,
    pipeline::{Format, fetch_format, process_format, run_format},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "datafun")]
#[command(about = "Fetch remote data files and write simple analytics reports", long_about = None)]
struct Cli {
    /// JSON settings file overriding the built-in pipelines
    #[arg(short, long, env = "DATAFUN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Folder for fetched artifacts
    #[arg(long, global = true)]
    fetched_dir: Option<PathBuf>,

    /// Folder for reports
    #[arg(long, global = true)]
    processed_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a source file and save it under the fetched folder
    Fetch {
        /// Format to fetch (all formats when omitted)
        #[arg(value_enum)]
        format: Option<Format>,
    },
    /// Analyze a previously fetched file and write its report
    Process {
        /// Format to process (all formats when omitted)
        #[arg(value_enum)]
        format: Option<Format>,
    },
    /// Fetch, then process
    Run {
        /// Format to run (all formats when omitted)
        #[arg(value_enum)]
        format: Option<Format>,
    },
    /// Print the effective settings as JSON
    ShowConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/datafun.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("datafun.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.fetched_dir {
        settings.fetched_dir = dir;
    }
    if let Some(dir) = cli.processed_dir {
        settings.processed_dir = dir;
    }

    let client = BasicClient::new();

    match cli.command {
        Commands::Fetch { format } => {
            for format in Format::selection(format) {
                info!(%format, "Starting fetch");
                fetch_format(&client, &settings, format).await;
            }
        }
        Commands::Process { format } => {
            for format in Format::selection(format) {
                if let Err(e) = process_format(&settings, format) {
                    error!(%format, error = %e, "Failed to write report");
                }
            }
        }
        Commands::Run { format } => {
            for format in Format::selection(format) {
                match run_format(&client, &settings, format).await {
                    Ok(report) => info!(%format, report = %report.display(), "Pipeline complete"),
                    Err(e) => error!(%format, error = %e, "Failed to write report"),
                }
            }
        }
        Commands::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
