//! Vaxboard - COVID-19 Vaccination Dashboard
//!
//! Loads the statewise vaccination CSV once, aggregates it and shows the
//! results as cards, charts, a bubble map and a region explorer.

mod charts;
mod config;
mod dashboard;
mod data;
mod geo;
mod gui;
mod stats;

use anyhow::{anyhow, Context, Result};
use config::{DashboardConfig, CONFIG_FILE};
use dashboard::Dashboard;
use data::DataLoader;
use eframe::egui;
use gui::VaccinationApp;
use log::{debug, info};
use std::path::Path;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() -> Result<()> {
    // Set RUST_LOG to `DEFAULT_LOGGING_LEVEL` if not set
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", DEFAULT_LOGGING_LEVEL);
    }
    pretty_env_logger::init_timed();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))
        .context("Failed to load dashboard configuration")?;
    debug!("config: {config:?}");

    let table = DataLoader::from_config(&config)
        .load_csv(&config.data_path)
        .with_context(|| format!("Failed to load vaccination data from {:?}", config.data_path))?;
    info!("Loaded {} vaccination rows", table.len());
    let dashboard = Dashboard::compute(&table, &config);

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("COVID Vaccination Dashboard"),
        ..Default::default()
    };

    info!("Opening dashboard window");
    eframe::run_native(
        "COVID Vaccination Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(VaccinationApp::new(cc, table, dashboard)))),
    )
    .map_err(|e| anyhow!("Dashboard window failed: {e}"))
}
