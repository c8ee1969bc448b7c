//! a-system binary.
//!
//! Provisions a mock service with the configured key, drives it through one
//! session and prints the transcript.
//!
//! Usage:
//!   a-system                        # Run with defaults / config from the environment
//!   a-system --config a-system.toml # Load settings from a file
//!   a-system --key 123 --json       # Fixed key, transcript as JSON
//!
//! Exit codes:
//!   0 - Session completed
//!   1 - Configuration error or the service failed unexpectedly

use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use std::io::Write;

use a_system::config::Settings;
use a_system::error::AppError;
use a_system::runner::{self, RunRequest};
use a_system::service::mock::MockService;

#[derive(Parser, Debug)]
#[command(
    name = "a-system",
    version,
    about = "Exercise the a_system service against its mock backend",
    long_about = None
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "A_SYSTEM_CONFIG")]
    config: Option<String>,

    /// Service key, overrides the configured one
    #[arg(short, long)]
    key: Option<String>,

    /// Client name presented to Hello and Auth
    #[arg(short, long)]
    name: Option<String>,

    /// Number of images to upload
    #[arg(long)]
    images: Option<u32>,

    /// Print the transcript as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::new(cli.config.as_deref())?;
    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log.level.as_str()))
        .init();

    if let Some(key) = cli.key {
        settings.service.key = Some(key);
    }
    if let Some(name) = cli.name {
        settings.service.client_name = name;
    }
    if let Some(images) = cli.images {
        settings.service.images = images;
    }
    debug!(
        "Effective settings: client {:?}, {} images",
        settings.service.client_name, settings.service.images
    );

    let service = MockService::new(settings.service_key());
    let request = RunRequest {
        name: settings.service.client_name.clone(),
        images: settings.service.images,
    };

    let transcript = runner::run(&service, &request).await?;
    info!("Mock service issued {} image ids", service.posted().await);

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &transcript)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", transcript)?;
    }
    Ok(())
}
