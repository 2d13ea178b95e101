// lib.rs - Conway's Game of Life simulation engine
//
// The engine owns a fixed-size grid and advances it one generation at a time.
// Rendering and timing live in the front-end crates (conway_gui, conway_term).

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use config::{CanvasSize, CellSize, PlaybackConfig};
pub use engine::SimulationEngine;
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use patterns::{Pattern, PATTERNS};
