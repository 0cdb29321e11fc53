use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use intent_embed_core::BatchConfig;
use intent_embed_embeddings::OllamaClient;
use intent_embed_service::{BatchError, BatchReport, BatchUpdater};
use intent_embed_storage::PgIntentStore;
use tracing_subscriber::EnvFilter;

const BANNER_WIDTH: usize = 60;

/// Every setting comes from `INTENT_EMBED_*` environment variables,
/// falling back to the local development defaults.
#[derive(Parser)]
#[command(name = "intent-embed", version)]
#[command(
    about = "Generate averaged intent embeddings with Ollama and store them in PostgreSQL",
    long_about = None
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BatchConfig::from_env();
    print_banner();

    match run(&config).await {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        },
        Err(err) => {
            print_error(&err, &config);
            ExitCode::FAILURE
        },
    }
}

async fn run(config: &BatchConfig) -> Result<BatchReport> {
    tracing::info!(?config, "starting intent embedding batch");
    let client =
        OllamaClient::new(&config.service_url, &config.model_name, config.http_timeout())?;
    let store = PgIntentStore::connect_lazy(config);
    let updater = BatchUpdater::new(client, store);

    let result = updater.run().await;
    updater.shutdown().await;
    Ok(result?)
}

fn print_banner() {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Intent Embeddings Generator");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
}

fn print_report(report: &BatchReport) {
    for outcome in &report.intents {
        println!(
            "  ✓ {} (id {}): {} phrases, {} dimensions",
            outcome.intent_name, outcome.id, outcome.phrases, outcome.dimensions
        );
    }
    println!();
    println!(
        "✅ All embeddings generated and updated successfully! ({} of {} intents, {} phrases)",
        report.updated(),
        report.selected,
        report.phrases_embedded
    );
}

fn print_error(err: &anyhow::Error, config: &BatchConfig) {
    eprintln!("❌ Error: {err}");
    match err.downcast_ref::<BatchError>() {
        Some(batch) if batch.is_connect_failure() => {
            eprintln!("   Cannot connect to the embedding service");
            eprintln!("   Make sure Ollama is running: {}", config.service_url);
        },
        Some(BatchError::Database(storage)) if storage.is_connection() => {
            eprintln!("   Cannot connect to PostgreSQL at {}", config.database_label());
        },
        Some(BatchError::Database(_) | BatchError::Service(_)) => {
            eprintln!("   Transaction rolled back, no embeddings were saved");
        },
        _ => {},
    }
}
