// main.rs - Headless Game of Life: prints one generation per tick

mod playback;
mod telemetry;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use conway::PlaybackConfig;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let config = PlaybackConfig::load().context("failed to load configuration")?;
    info!(
        rows = config.rows,
        cols = config.cols,
        interval_ms = config.tick_interval().as_millis() as u64,
        "Starting playback"
    );

    let mut engine = playback::build_engine(&config)?;

    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut out = stdout.lock();

    let generations = playback::run(&mut engine, &config, &mut out, clear_screen, shutdown_signal()).await?;
    info!(generations, "Playback finished");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
