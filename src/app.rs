/// The `egui` re-export for building native GUIs with the eframe framework.
use eframe::egui::{self, Color32, Stroke};
/// Additional 2D geometric tools from eframe, e.g. `Vec2`.
use eframe::epaint::{Rect, Vec2};
/// The `egui_plot` crate for plotting data in an egui-based app.
use egui_plot::{Bar, BarChart, Plot};

use crate::config::SimulationConfig;
use crate::container::GasContainer;
use crate::histogram::compute_bins;
use crate::particle::ParticleKind;

// ===================================================================================
// Layout constants
// ===================================================================================

const HISTOGRAM_WIDTH: f32 = 400.0;
const HISTOGRAM_HEIGHT: f32 = 250.0;
const MAX_PARTICLES: usize = 200;
const MAX_BINS: usize = 50;

// ===================================================================================
// Main Application
// ===================================================================================

/// The application state:
/// - A configuration UI (sliders, etc.) used to set up parameters
/// - The "running" flag indicating if the simulation is active
/// - The gas container, rebuilt from the config on reset
///
/// One frame of physics is advanced per UI update while running.
pub struct GasApp {
    // -------------- Config / UI --------------
    config: SimulationConfig, // user-chosen parameters
    running: bool,            // is the simulation running?
    needs_reset: bool,        // user changed parameters or requested a reset

    // -------------- Simulation Data --------------
    container: Option<GasContainer>,
    last_error: Option<String>,
}

impl GasApp {
    /// Creates the app, stopped, with the container built from `config`.
    pub fn new(config: SimulationConfig) -> Self {
        let mut app = Self {
            config,
            running: false,
            needs_reset: true,
            container: None,
            last_error: None,
        };
        app.reset_simulation();
        app
    }

    /// (Re)builds the container from the current config.
    fn reset_simulation(&mut self) {
        match self.config.build_container() {
            Ok(container) => {
                log::info!(
                    "reset: {} particles, seed {}",
                    container.particle_count(),
                    self.config.spawn.seed
                );
                self.container = Some(container);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("cannot build simulation: {}", e);
                self.container = None;
                self.last_error = Some(e.to_string());
                self.running = false;
            }
        }
        self.needs_reset = false;
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation Controls");

        // Sliders: only matter if we haven't started or we want to reset
        if !self.running {
            let spawn = &mut self.config.spawn;
            let changed = ui
                .add(egui::Slider::new(&mut spawn.particle_count, 1..=MAX_PARTICLES).text("Particles"))
                .changed()
                | ui.add(egui::Slider::new(&mut spawn.seed, 0..=10_000).text("Seed")).changed()
                | ui.add(egui::Slider::new(&mut spawn.max_velocity_component, 0.0..=20.0).text("Max Velocity"))
                    .changed();
            if changed {
                self.needs_reset = true;
            }
        } else {
            ui.label("Parameters locked while running. Stop to change.");
        }
        // Binning only affects display, so it stays adjustable.
        ui.add(egui::Slider::new(&mut self.config.histogram.bins, 1..=MAX_BINS).text("Num Bins"));

        ui.separator();

        // Start / Stop
        if self.running {
            if ui.button("Stop").clicked() {
                self.running = false;
            }
        } else {
            if ui.button("Start").clicked() {
                if self.needs_reset {
                    self.reset_simulation();
                }
                self.running = self.container.is_some();
            }
            if ui.button("Step").clicked() {
                if let Some(container) = &mut self.container {
                    container.advance_one_frame();
                }
            }
        }

        if ui.button("Reset").clicked() {
            self.reset_simulation();
            self.running = false;
        }

        if let Some(err) = &self.last_error {
            ui.colored_label(Color32::RED, err.as_str());
        }
    }

    fn histograms(&self, ui: &mut egui::Ui, container: &GasContainer) {
        for kind in ParticleKind::ALL {
            ui.label(format!("{} Particle Speed", kind.label()));

            let bars = match compute_bins(container.speeds(kind), self.config.histogram.bins, HISTOGRAM_WIDTH) {
                Ok(histogram) => {
                    // Zero-width bins happen when every speed is equal.
                    let width = if histogram.bin_size > 0.0 { histogram.bin_size } else { 1.0 };
                    histogram
                        .bins
                        .iter()
                        .enumerate()
                        .map(|(i, &count)| {
                            let centre = histogram.bin_start(i) + 0.5 * width;
                            Bar::new(centre as f64, count as f64).width(width as f64)
                        })
                        .collect()
                }
                Err(e) => {
                    log::warn!("skipping {} histogram: {}", kind.label(), e);
                    Vec::new()
                }
            };

            Plot::new(format!("{}_speed_histogram", kind.label()))
                .width(HISTOGRAM_WIDTH)
                .height(HISTOGRAM_HEIGHT)
                .x_axis_label("Speed")
                .y_axis_label("Frequency")
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars).color(kind.color()).name(kind.label()));
                });
        }
    }

    fn draw_container(ui: &egui::Ui, container: &GasContainer) {
        let painter = ui.painter();
        let rect = ui.max_rect();

        // Scale from simulation box to the drawing area:
        let scale_x = rect.width() / container.width();
        let scale_y = rect.height() / container.height();
        let scale = scale_x.min(scale_y);

        let origin = container.top_left();
        let to_screen = |p: Vec2| rect.min + (p - origin) * scale;

        painter.rect_stroke(
            Rect::from_min_max(to_screen(origin), to_screen(container.bottom_right())),
            0.0,
            Stroke::new(1.0, Color32::WHITE),
        );

        for particle in container.particles() {
            painter.circle_filled(
                to_screen(particle.position()),
                particle.radius() * scale,
                particle.color(),
            );
        }
    }
}

impl eframe::App for GasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --------------------------
        // Sidebar with configuration
        // --------------------------
        egui::SidePanel::left("config_panel").show(ctx, |ui| self.controls(ui));

        // If parameters changed while stopped, rebuild so the preview matches.
        if self.needs_reset && !self.running {
            self.reset_simulation();
        }

        if self.running {
            if let Some(container) = &mut self.container {
                container.advance_one_frame();
            }
        }

        // ------------------------------------
        // UI layout for top, right, central
        // ------------------------------------
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("2D Ideal Gas (Elastic Collisions)");
            if let Some(container) = &self.container {
                ui.label(format!(
                    "Frame {} | particles: {} | kinetic energy: {:.1}",
                    container.frame(),
                    container.particle_count(),
                    container.total_kinetic_energy()
                ));
            }
        });

        if let Some(container) = &self.container {
            egui::SidePanel::right("right_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.histograms(ui, container));
                });

            egui::CentralPanel::default().show(ctx, |ui| Self::draw_container(ui, container));
        }

        // Request another frame to keep animating (or remain static if stopped).
        ctx.request_repaint();
    }
}
