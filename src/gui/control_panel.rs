//! Control Panel Widget
//! Region selector and the last-rows table under it.

use egui::{Color32, ComboBox, RichText, ScrollArea};
use polars::prelude::DataFrame;

/// Region explorer: a single-select combo over every region and the rows it selected.
pub struct ControlPanel {
    pub regions: Vec<String>,
    pub selected_region: String,
    rows: Option<DataFrame>,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            selected_region: String::new(),
            rows: None,
            status: String::new(),
        }
    }
}

impl ControlPanel {
    /// Start with the first region (alphabetically) selected.
    pub fn new(regions: Vec<String>) -> Self {
        let selected_region = regions.first().cloned().unwrap_or_default();
        Self {
            regions,
            selected_region,
            ..Self::default()
        }
    }

    pub fn set_rows(&mut self, rows: DataFrame) {
        self.rows = Some(rows);
        self.status.clear();
    }

    /// Set error status
    pub fn set_error(&mut self, error: &str) {
        self.rows = None;
        self.status = format!("Error: {error}");
    }

    /// Draw the explorer
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.label(RichText::new("🔍 Explore State-wise Data").size(18.0).strong());
        ui.add_space(5.0);

        if self.regions.is_empty() {
            ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
            return action;
        }

        ui.horizontal(|ui| {
            ui.label("Select a State:");
            ComboBox::from_id_salt("region_select")
                .width(220.0)
                .selected_text(&self.selected_region)
                .show_ui(ui, |ui| {
                    for region in &self.regions {
                        if ui
                            .selectable_label(self.selected_region == *region, region)
                            .clicked()
                            && self.selected_region != *region
                        {
                            self.selected_region = region.clone();
                            action = ControlPanelAction::RegionChanged;
                        }
                    }
                });
        });

        ui.add_space(8.0);

        if !self.status.is_empty() {
            ui.label(
                RichText::new(&self.status)
                    .size(11.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
        }

        if let Some(rows) = &self.rows {
            Self::draw_rows_table(ui, rows);
        }

        action
    }

    /// Draw every column of the selected rows
    fn draw_rows_table(ui: &mut egui::Ui, df: &DataFrame) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::horizontal().show(ui, |ui| {
                    egui::Grid::new("explore_rows")
                        .striped(true)
                        .min_col_width(60.0)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for name in df.get_column_names() {
                                ui.label(RichText::new(name.as_str()).strong().size(11.0));
                            }
                            ui.end_row();

                            for i in 0..df.height() {
                                for column in df.get_columns() {
                                    let text = column
                                        .get(i)
                                        .map(|v| {
                                            if v.is_null() {
                                                String::new()
                                            } else {
                                                v.to_string().trim_matches('"').to_string()
                                            }
                                        })
                                        .unwrap_or_default();
                                    ui.label(RichText::new(text).size(11.0));
                                }
                                ui.end_row();
                            }
                        });
                });
            });
    }
}

/// Actions triggered by the control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    RegionChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_region_is_preselected() {
        let panel = ControlPanel::new(vec!["Assam".into(), "Goa".into()]);
        assert_eq!(panel.selected_region, "Assam");

        let empty = ControlPanel::new(Vec::new());
        assert!(empty.selected_region.is_empty());
    }

    #[test]
    fn error_clears_rows() {
        let mut panel = ControlPanel::new(vec!["Goa".into()]);
        panel.set_rows(DataFrame::empty());
        assert!(panel.rows.is_some());
        panel.set_error("boom");
        assert!(panel.rows.is_none());
        assert_eq!(panel.status, "Error: boom");
    }
}
