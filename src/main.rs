//! Feedback Pulse CLI
//!
//! Drives the same cycles as the web page from a terminal:
//! - Analyze a piece of feedback
//! - Upload a feedback file
//! - Show the sentiment distribution
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedback_pulse::{
    generate_default_config, handlers, AnalysisRequest, ChartOutcome, Config, HttpFeedbackApi,
    LoggingConfig, TerminalSurface, UploadFile,
};

#[derive(Parser)]
#[command(name = "feedback-pulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Submit feedback to a sentiment server and watch the distribution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Sentiment server URL, overrides the config file
    #[arg(long, global = true)]
    pub server_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one piece of feedback
    Analyze {
        /// Feedback text
        text: String,
        /// Department the feedback is about
        #[arg(short, long, default_value = "")]
        department: String,
    },

    /// Upload a feedback file (the server decides what it accepts)
    Upload {
        /// Path to the file
        path: PathBuf,
    },

    /// Show the sentiment distribution
    Stats,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let Cli {
        command,
        config,
        server_url,
    } = Cli::parse();

    let success = match command {
        Commands::Analyze { text, department } => {
            let (api, mut surface) = connect(config, server_url)?;
            let request = AnalysisRequest::new(text, department);
            handlers::submit_feedback(&api, &mut surface, &request)
                .await
                .is_success()
        }
        Commands::Upload { path } => {
            let (api, mut surface) = connect(config, server_url)?;
            let file = UploadFile::read(&path)
                .await
                .with_context(|| format!("Failed to read {:?}", path))?;
            handlers::upload_file(&api, &mut surface, Some(&file))
                .await
                .is_success()
        }
        Commands::Stats => {
            let (api, mut surface) = connect(config, server_url)?;
            matches!(
                handlers::refresh_chart(&api, &mut surface).await,
                ChartOutcome::Drawn { .. }
            )
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Load configuration, start logging and build the client and surface
fn connect(
    config_path: Option<PathBuf>,
    server_url: Option<String>,
) -> anyhow::Result<(HttpFeedbackApi, TerminalSurface<std::io::Stdout, std::io::Stderr>)> {
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = server_url {
        config.server.base_url = url;
    }

    init_logging(&config.logging);
    tracing::debug!("Using sentiment server at {}", config.server.base_url);

    let api = HttpFeedbackApi::new(&config.server)?;
    Ok((api, TerminalSurface::stdio()))
}

/// Install the tracing subscriber. `RUST_LOG` wins over the config level.
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("feedback_pulse={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
