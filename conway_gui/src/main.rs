// main.rs - Windowed Game of Life driven by the conway engine
// Rendering and controls live in ui.rs

use eframe::egui;
use egui::{Color32, Vec2};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use conway::{patterns, PlaybackConfig, SimulationEngine};

mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,conway=debug,conway_gui=debug".into()))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = PlaybackConfig::load().unwrap_or_else(|e| {
        warn!("Ignoring configuration: {}", e);
        PlaybackConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 850.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(config))),
    )
}

pub struct LifeApp {
    engine: SimulationEngine,
    pub config: PlaybackConfig,
    pub is_running: bool,
    pub last_update: Instant,
    /// Canvas size in points; frozen while running.
    pub canvas: Vec2,
    /// Window was resized mid-run; canvas catches up when the run stops.
    pub resize_pending: bool,
    /// Index into `patterns::PATTERNS`; `None` seeds a random grid.
    pub selected_pattern: Option<usize>,
    pub status: Option<String>,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl LifeApp {
    pub fn new(config: PlaybackConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => SimulationEngine::with_seed(seed),
            None => SimulationEngine::new(),
        };
        let selected_pattern = config
            .pattern
            .as_deref()
            .and_then(|name| patterns::PATTERNS.iter().position(|p| p.name.eq_ignore_ascii_case(name)));

        Self {
            engine,
            config,
            is_running: false,
            last_update: Instant::now(),
            canvas: Vec2::ZERO,
            resize_pending: false,
            selected_pattern,
            status: None,
            live_color: Color32::from_rgb(70, 130, 180), // steel blue
            dead_color: Color32::WHITE,
        }
    }

    /// Tracks the window size; while running only notes that it changed.
    pub fn window_resized(&mut self, window: Vec2) {
        let (width, height) = self.config.canvas_extent(window.x, window.y);
        let canvas = Vec2::new(width, height);
        if canvas == self.canvas {
            return;
        }
        if self.is_running {
            self.resize_pending = true;
        } else {
            self.canvas = canvas;
            self.resize_pending = false;
        }
    }

    /// Seeds a fresh grid sized to the canvas and starts stepping.
    pub fn start(&mut self) {
        let (rows, cols) = self.config.grid_dimensions(self.canvas.x, self.canvas.y);

        let seeded = match self.selected_pattern.and_then(|i| patterns::PATTERNS.get(i)) {
            Some(pattern) => self.engine.initialize_with_pattern(rows, cols, pattern),
            None => {
                self.engine.initialize(rows, cols);
                Ok(())
            }
        };

        match seeded {
            Ok(()) => {
                info!(rows, cols, speed = self.config.speed, "Simulation started");
                self.status = None;
                self.is_running = true;
                self.last_update = Instant::now();
            }
            Err(e) => {
                warn!("Cannot start: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn stop(&mut self) {
        info!(generation = self.engine.generation(), "Simulation stopped");
        self.is_running = false;
    }

    /// Advances one generation if running and a tick interval has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.config.tick_interval() {
            return false;
        }
        self.last_update = now;

        match self.engine.advance_generation() {
            Ok(_) => true,
            Err(e) => {
                warn!("Stopping: {}", e);
                self.status = Some(e.to_string());
                self.is_running = false;
                false
            }
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }
}
