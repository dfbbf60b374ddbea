use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use stride_core::models::metric::RawMetricRecord;
use stride_service::config::ServiceConfig;
use stride_service::service::ReportService;
use stride_storage::s3::S3Store;

#[derive(Parser)]
#[command(name = "stride")]
#[command(
    about = "Biomechanical analysis and clinical summaries for prosthesis wearers",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print today's clinical summary, composing it if the cached one is stale
    Summary { subject: Uuid },

    /// Score one stored daily record
    Analyze { subject: Uuid, record: Uuid },

    /// Print the dashboard view with trend series
    Dashboard { subject: Uuid },

    /// Assess and store a daily reading
    Ingest {
        subject: Uuid,

        /// JSON metric reading; stdin if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging on stderr, stdout carries the result.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env()?;

    let s3 = stride_storage::client::build_client(&config.region).await;
    let store = Arc::new(S3Store::new(s3, config.bucket.clone()));

    let mut service = ReportService::from_config(&config, store.clone(), store.clone(), store);
    if let Some(narrator) = config.narrator()? {
        service = service.with_narrator(narrator);
    }

    match cli.command {
        Command::Summary { subject } => print_json(&service.summary(subject).await?.into_entry()),
        Command::Analyze { subject, record } => {
            print_json(&service.analyze_record(subject, record).await?)
        }
        Command::Dashboard { subject } => print_json(&service.dashboard(subject).await?),
        Command::Ingest { subject, file } => {
            let raw = read_reading(file)?;
            print_json(&service.ingest(subject, &raw).await?)
        }
    }
}

fn read_reading(file: Option<PathBuf>) -> eyre::Result<RawMetricRecord> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
