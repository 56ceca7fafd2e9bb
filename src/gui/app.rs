//! Vaccination Dashboard Main Application
//! Single scrolling page: title, charts, region explorer, footer.

use crate::dashboard::Dashboard;
use crate::data::Table;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::{Color32, RichText, ScrollArea};
use log::{debug, error};

/// Main application window.
pub struct VaccinationApp {
    table: Table,
    dashboard: Dashboard,
    chart_viewer: ChartViewer,
    control_panel: ControlPanel,
}

impl VaccinationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: Table, dashboard: Dashboard) -> Self {
        let control_panel = ControlPanel::new(dashboard.regions.clone());
        let mut app = Self {
            table,
            dashboard,
            chart_viewer: ChartViewer::new(),
            control_panel,
        };
        app.handle_region_changed();
        app
    }

    /// Re-run the selection for the newly chosen region
    fn handle_region_changed(&mut self) {
        let region = self.control_panel.selected_region.clone();
        if region.is_empty() {
            return;
        }
        match self.dashboard.explore(&self.table, &region) {
            Ok(rows) => {
                debug!("Selected {region:?}: {} rows", rows.height());
                self.control_panel.set_rows(rows);
            }
            Err(e) => {
                error!("Failed to select rows for {region:?}: {e}");
                self.control_panel.set_error(&e.to_string());
            }
        }
    }
}

impl eframe::App for VaccinationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("🇮🇳 COVID-19 Vaccination Dashboard")
                                .size(28.0)
                                .strong()
                                .color(Color32::from_rgb(100, 149, 237)),
                        );
                    });
                    ui.add_space(15.0);

                    self.chart_viewer.show(ui, &self.dashboard);

                    ui.add_space(15.0);
                    ui.separator();

                    if self.control_panel.show(ui) == ControlPanelAction::RegionChanged {
                        self.handle_region_changed();
                    }

                    ui.add_space(15.0);
                    ui.separator();
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Made with ❤️ Latesh Patel | DSBDA Project")
                                .size(11.0)
                                .color(Color32::GRAY),
                        );
                    });
                });
        });
    }
}
