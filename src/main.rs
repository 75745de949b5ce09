//! Music Composer API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout, panic guard)
//!                         │
//!                         ▼
//!                     api::handlers ──▶ composer (midi placeholder, library)
//!                         │
//!     Client Response     ▼
//!     ◀────────────── JSON / HTML
//! ```
//!
//! Configuration comes from defaults, an optional TOML file (`--config`) and
//! the `PORT`, `HOST`, `DEBUG` and `LOG_LEVEL` environment variables.

use std::path::PathBuf;

use clap::Parser;

use music_composer::config;
use music_composer::observability::{self, metrics};
use music_composer::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "music-composer")]
#[command(about = "HTTP backend for the music composer", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;
    observability::init_logging(&config)?;

    tracing::info!("music-composer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        debug = config.debug,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let server = HttpServer::new(config);
    let listener = server.bind().await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
