//! Playback configuration shared by the front ends.
//!
//! Values come from defaults, an optional JSON file named by `CONWAY_CONFIG`,
//! then individual `CONWAY_*` environment variables, in that order.

use std::env;
use std::fs;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns;

/// Fastest playback speed; speeds run from 0 (slowest) to this value.
pub const MAX_SPEED: u8 = 2;

const SHORTEST_TICK_MS: u64 = 100;
const LONGEST_TICK_MS: u64 = 500;

/// On-screen size of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CellSize {
    pub const ALL: [CellSize; 3] = [CellSize::Small, CellSize::Medium, CellSize::Large];

    pub fn pixels(self) -> f32 {
        match self {
            CellSize::Small => 10.0,
            CellSize::Medium => 15.0,
            CellSize::Large => 20.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CellSize::Small => "Small",
            CellSize::Medium => "Medium",
            CellSize::Large => "Large",
        }
    }
}

/// Share of the window taken by the drawing canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CanvasSize {
    pub const ALL: [CanvasSize; 3] = [CanvasSize::Small, CanvasSize::Medium, CanvasSize::Large];

    pub fn fraction(self) -> f32 {
        match self {
            CanvasSize::Small => 0.3,
            CanvasSize::Medium => 0.6,
            CanvasSize::Large => 0.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CanvasSize::Small => "30%",
            CanvasSize::Medium => "60%",
            CanvasSize::Large => "90%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Playback speed, 0 (slowest) to `MAX_SPEED`
    pub speed: u8,
    pub cell_size: CellSize,
    pub canvas_size: CanvasSize,
    /// Grid height for the terminal runner
    pub rows: usize,
    /// Grid width for the terminal runner
    pub cols: usize,
    /// Seed for random initial grids; entropy when unset
    pub seed: Option<u64>,
    /// Start from a named pattern instead of a random grid
    pub pattern: Option<String>,
    /// Stop after this many generations; run until interrupted when unset
    pub max_generations: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1,
            cell_size: CellSize::default(),
            canvas_size: CanvasSize::default(),
            rows: 24,
            cols: 64,
            seed: None,
            pattern: None,
            max_generations: None,
        }
    }
}

impl PlaybackConfig {
    /// Defaults, then `CONWAY_CONFIG` JSON file, then `CONWAY_*` variables.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("CONWAY_CONFIG") {
            Ok(path) => Self::from_json(&fs::read_to_string(path)?)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies `CONWAY_*` overrides using `var` to read each variable.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = var("CONWAY_SPEED") {
            self.speed = parse_var("CONWAY_SPEED", &value)?;
        }
        if let Some(value) = var("CONWAY_ROWS") {
            self.rows = parse_var("CONWAY_ROWS", &value)?;
        }
        if let Some(value) = var("CONWAY_COLS") {
            self.cols = parse_var("CONWAY_COLS", &value)?;
        }
        if let Some(value) = var("CONWAY_SEED") {
            self.seed = Some(parse_var("CONWAY_SEED", &value)?);
        }
        if let Some(value) = var("CONWAY_PATTERN") {
            self.pattern = Some(value);
        }
        if let Some(value) = var("CONWAY_MAX_GENERATIONS") {
            self.max_generations = Some(parse_var("CONWAY_MAX_GENERATIONS", &value)?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.speed > MAX_SPEED {
            return Err(Error::Config(format!(
                "speed must be between 0 and {}, got {}",
                MAX_SPEED, self.speed
            )));
        }
        if let Some(name) = &self.pattern {
            patterns::lookup(name)?;
        }
        Ok(())
    }

    /// Delay between generations: 500 ms at speed 0 down to 100 ms at `MAX_SPEED`.
    pub fn tick_interval(&self) -> Duration {
        let speed = u64::from(self.speed.min(MAX_SPEED));
        let range = LONGEST_TICK_MS - SHORTEST_TICK_MS;
        Duration::from_millis(LONGEST_TICK_MS - speed * range / u64::from(MAX_SPEED))
    }

    /// Canvas `(width, height)` for a window of the given size.
    pub fn canvas_extent(&self, window_width: f32, window_height: f32) -> (f32, f32) {
        let fraction = self.canvas_size.fraction();
        (window_width * fraction, window_height * fraction)
    }

    /// `(rows, cols)` of whole cells that fit on a canvas.
    pub fn grid_dimensions(&self, canvas_width: f32, canvas_height: f32) -> (usize, usize) {
        let cell = self.cell_size.pixels();
        // Float-to-int casts saturate, so negative sizes give 0.
        ((canvas_height / cell).floor() as usize, (canvas_width / cell).floor() as usize)
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{}={:?} is not a valid value", name, value)))
}
