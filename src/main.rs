mod app;
mod color;
mod data;
mod state;
mod ui;

use app::WorldDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional positional argument: a CSV to load on startup.
    let initial_csv = std::env::args().nth(1).map(std::path::PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "World Data Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(WorldDashApp::new(initial_csv)))),
    )
}
