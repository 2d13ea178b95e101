//! Timer-driven stepping loop for the terminal front end.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use conway::{patterns, Grid, PlaybackConfig, SimulationEngine};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Engine initialized from the configured pattern, or randomly.
pub fn build_engine(config: &PlaybackConfig) -> Result<SimulationEngine> {
    let mut engine = match config.seed {
        Some(seed) => SimulationEngine::with_seed(seed),
        None => SimulationEngine::new(),
    };

    match &config.pattern {
        Some(name) => {
            let pattern = patterns::lookup(name)?;
            engine.initialize_with_pattern(config.rows, config.cols, pattern)?;
        }
        None => engine.initialize(config.rows, config.cols),
    }
    Ok(engine)
}

/// Writes the current generation, then advances once per tick until
/// `shutdown` resolves or `max_generations` is reached.
///
/// Returns the generation the engine stopped at.
pub async fn run<W: Write>(
    engine: &mut SimulationEngine,
    config: &PlaybackConfig,
    out: &mut W,
    clear_screen: bool,
    shutdown: impl Future<Output = ()>,
) -> Result<u64> {
    tokio::pin!(shutdown);

    let mut interval = time::interval(config.tick_interval());
    // A slow terminal delays the next generation instead of bursting.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    if let Some(grid) = engine.grid() {
        write_frame(out, engine.generation(), grid, clear_screen)?;
    }

    loop {
        if config.max_generations.is_some_and(|max| engine.generation() >= max) {
            info!(generation = engine.generation(), "Reached generation limit");
            break;
        }

        tokio::select! {
            biased;

            _ = &mut shutdown => {
                debug!(generation = engine.generation(), "Playback interrupted");
                break;
            }
            _ = interval.tick() => {
                engine.advance_generation()?;
                if let Some(grid) = engine.grid() {
                    write_frame(out, engine.generation(), grid, clear_screen)?;
                }
            }
        }
    }

    Ok(engine.generation())
}

fn write_frame<W: Write>(out: &mut W, generation: u64, grid: &Grid, clear_screen: bool) -> Result<()> {
    if clear_screen {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    writeln!(out, "Generation {} | population {}", generation, grid.population())?;
    write!(out, "{}", grid)?;
    out.flush()?;
    Ok(())
}
