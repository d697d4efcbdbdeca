//! Courtside - Career Statistics Dashboard
//!
//! Desktop dashboard over a player's per-season, career and per-team CSV tables.

use anyhow::Context;
use courtside::config;
use courtside::data::DataLoader;
use courtside::gui::DashboardApp;
use courtside::session::Session;
use eframe::egui;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = config::load_config_from(&base_dir).context("failed to load configuration")?;

    let paths = config.data_paths(&base_dir);
    let tables = DataLoader::load(&paths).context("failed to load statistics tables")?;
    let session = Session::new(tables);
    info!(player = %config.player_name, "dashboard ready");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Courtside"),
        ..Default::default()
    };

    let player_name = config.player_name.clone();
    eframe::run_native(
        "Courtside",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, session, player_name)))),
    )
    .map_err(|e| {
        error!("UI error: {}", e);
        anyhow::anyhow!("failed to run dashboard window: {}", e)
    })
}

/// Log to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("courtside=info,warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
