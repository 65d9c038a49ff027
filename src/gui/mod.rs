mod app;
mod config;
mod draw;

pub use app::App;
use config::Config;

/// Opens a window that plays `life` until it is closed.
///
/// The simulation pauses after `generations` updates; `E` resumes it.
pub fn run_gui(life: crate::Simulation, config: &crate::Config) -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    let app = App::new(life, config.max_fps, Some(config.generations));
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
