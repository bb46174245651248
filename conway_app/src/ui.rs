// ui.rs - egui front end: controls, grid painter, pointer input

use eframe::egui;
use egui::{Color32, Stroke};
use std::time::{Duration, Instant};

use conway::patterns;

use crate::config::AppConfig;
use crate::render;
use crate::world::World;

const GRID_LINE: Color32 = Color32::from_gray(90);

/// The eframe application. Holds the world and the display settings.
pub struct GameOfLife {
    world: World,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new(world: World, config: &AppConfig) -> Self {
        let [lr, lg, lb] = config.live_color;
        let [dr, dg, db] = config.dead_color;
        Self {
            world,
            live_color: Color32::from_rgb(lr, lg, lb),
            dead_color: Color32::from_rgb(dr, dg, db),
            selected_pattern: 0,
            random_seed: 0,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            let running = self.world.is_running();
            if ui.add_enabled(!running, egui::Button::new("▶ Start")).clicked() {
                self.world.start(now);
            }
            if ui.add_enabled(running, egui::Button::new("⏸ Stop")).clicked() {
                self.world.stop();
            }
            if ui.button("⏭ Step").clicked() {
                self.world.step();
            }
            if ui.button("⏹ Clear").clicked() {
                self.world.clear();
            }

            ui.separator();

            if ui.button("🎲 Random").clicked() {
                self.world.stop();
                self.world.randomize(self.random_seed);
                self.random_seed = self.random_seed.wrapping_add(1);
            }

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.world.stop();
                self.world.apply_pattern(self.selected_pattern);
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.world.generation()));
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.world.interval().as_millis().max(1) as f32;
            if ui
                .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                .changed()
            {
                self.world
                    .set_interval(Duration::from_millis((1000.0 / speed) as u64));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn grid(&mut self, ui: &mut egui::Ui) {
        let (width, height) = (self.world.grid().width(), self.world.grid().height());
        let cell_size = self.world.cell_size();

        let size = render::canvas_size(width, height, cell_size);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        // Toggle on press, before painting, so the change shows this frame
        if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                self.world.press_at(pos - origin);
            }
        }

        painter.rect_filled(response.rect, 0.0, self.dead_color);

        let stroke = Stroke::new(1.0, GRID_LINE);
        for line in render::grid_lines(origin, width, height, cell_size) {
            painter.line_segment(line, stroke);
        }

        for (x, y, cell) in self.world.grid().cells() {
            let color = if cell.is_alive() { self.live_color } else { self.dead_color };
            painter.rect_filled(render::cell_rect(origin, x, y, cell_size), 0.0, color);
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.world.poll(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui, now);

            ui.separator();
            ui.label("Click cells to toggle them alive/dead. Use Start/Stop to run the simulation.");
            ui.separator();

            let total = self.world.grid().width() * self.world.grid().height();
            let live_cells = self.world.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total.max(1) as f32 * 100.0
                ));
            });

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| self.grid(ui));
        });

        // Wake up for the next tick while running
        if let Some(wait) = self.world.time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
