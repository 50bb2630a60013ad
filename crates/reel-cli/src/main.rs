use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use reel_client::CompletionClient;

/// reel — terminal studio for short-video script briefs.
///
/// Fill in a structured brief (topic, goal, audience, tone, ...), send it to
/// a completion service, and read the generated two-column script without
/// leaving the terminal.
#[derive(Parser, Debug)]
#[command(name = "reel", version, about)]
struct Cli {
    /// Pre-fill the script topic (can also be typed in the TUI).
    #[arg(short, long)]
    topic: Option<String>,

    /// Base URL of the completion service (overrides the config file).
    #[arg(long)]
    service_url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Log to a file to avoid corrupting the TUI output. If the log file
    // can't be opened, silently discard logs rather than polluting the
    // alternate screen buffer.
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("reel");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("reel.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            // Fallback: discard all logs to avoid TUI corruption.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
    }

    // Load config.
    let mut config = reel_core::ReelConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        reel_core::ReelConfig::default()
    });
    if let Some(ref url) = cli.service_url {
        config.service.base_url = url.clone();
    }

    tracing::info!("Starting reel v{}", env!("CARGO_PKG_VERSION"));

    let client = Arc::new(CompletionClient::from_config(&config));

    // Start the TUI.
    let mut app = reel_tui::App::new(client, config.generation.word_target);
    if let Some(topic) = cli.topic {
        app.set_initial_topic(topic);
    }

    app.run().await?;

    tracing::info!("reel exited cleanly");
    Ok(())
}
