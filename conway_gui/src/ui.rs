// ui.rs - Controls and grid painting for LifeApp

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Instant;

use conway::config::MAX_SPEED;
use conway::{patterns, CanvasSize, CellSize};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window_resized(ctx.screen_rect().size());

        if self.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏹ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.is_running {
                        self.stop();
                    } else {
                        self.start();
                    }
                }

                ui.separator();

                // Settings are locked while the simulation runs
                ui.add_enabled_ui(!self.is_running, |ui| {
                    ui.add(egui::Slider::new(&mut self.config.speed, 0..=MAX_SPEED).text("Speed"));

                    ui.label("Cells:");
                    egui::ComboBox::from_id_source("cell_size")
                        .selected_text(self.config.cell_size.label())
                        .show_ui(ui, |ui| {
                            for size in CellSize::ALL {
                                ui.selectable_value(&mut self.config.cell_size, size, size.label());
                            }
                        });

                    ui.label("Canvas:");
                    egui::ComboBox::from_id_source("canvas_size")
                        .selected_text(self.config.canvas_size.label())
                        .show_ui(ui, |ui| {
                            for size in CanvasSize::ALL {
                                ui.selectable_value(&mut self.config.canvas_size, size, size.label());
                            }
                        });

                    ui.label("Seed:");
                    let selected = self
                        .selected_pattern
                        .and_then(|i| patterns::PATTERNS.get(i))
                        .map_or("Random", |p| p.name);
                    egui::ComboBox::from_id_source("pattern_selector")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.selected_pattern, None, "Random");
                            for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_pattern, Some(i), pattern.name);
                            }
                        });
                });
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::RED, status.as_str());
            }

            ui.separator();

            let Some(grid) = self.engine().grid() else {
                ui.label("Press Start to seed a grid sized to the canvas.");
                return;
            };

            ui.horizontal(|ui| {
                let cells = grid.rows() * grid.cols();
                let live_cells = grid.population();
                ui.label(format!("Generation: {}", self.engine().generation()));
                ui.label(format!("Grid: {} x {}", grid.rows(), grid.cols()));
                ui.label(format!("Live cells: {}", live_cells));
                if cells > 0 {
                    ui.label(format!("Population: {:.1}%", live_cells as f32 / cells as f32 * 100.0));
                }
            });

            ui.separator();

            let cell_size = self.config.cell_size.pixels();
            let total_size = Vec2::new(grid.cols() as f32 * cell_size, grid.rows() as f32 * cell_size);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for (row, col, cell) in grid.iter() {
                if !cell.is_alive() {
                    continue;
                }
                let rect = Rect::from_min_size(
                    origin + Vec2::new(col as f32 * cell_size, row as f32 * cell_size),
                    Vec2::splat(cell_size),
                );
                painter.rect_filled(rect, 0.0, self.live_color);
            }

            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(160)));
        });

        // Keep stepping without waiting for input events
        if self.is_running {
            ctx.request_repaint_after(self.config.tick_interval());
        }
    }
}
