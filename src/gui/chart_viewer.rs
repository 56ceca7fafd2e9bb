//! Chart Viewer Widget
//! Metric cards and chart sections of the dashboard page, top to bottom.

use crate::charts::{format_count, ChartPlotter, FIRST_DOSE_COLOR, SECOND_DOSE_COLOR};
use crate::dashboard::Dashboard;
use crate::data::DoseField;
use egui::{Color32, RichText};

const CARD_SPACING: f32 = 15.0;
const CARD_HEIGHT: f32 = 90.0;
const ACCENT: Color32 = Color32::from_rgb(100, 149, 237);

/// Draws everything computed by a `Dashboard` except the region explorer.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut egui::Ui, dashboard: &Dashboard) {
        Self::draw_metric_cards(ui, dashboard);
        ui.add_space(CARD_SPACING);

        let n = dashboard.top_n;
        Self::section_heading(ui, &format!("🏆 Top {n} States by Vaccination"));
        ui.columns(2, |cols| {
            cols[0].label(RichText::new(format!("Top {n} - 1st Dose")).size(14.0).strong());
            ChartPlotter::draw_ranking_chart(
                &mut cols[0],
                &dashboard.top_first_dose,
                FIRST_DOSE_COLOR,
            );
            cols[1].label(RichText::new(format!("Top {n} - 2nd Dose")).size(14.0).strong());
            ChartPlotter::draw_ranking_chart(
                &mut cols[1],
                &dashboard.top_second_dose,
                SECOND_DOSE_COLOR,
            );
        });

        Self::section_heading(ui, "👥 Gender Distribution");
        ui.label(RichText::new("Gender-wise Vaccination").size(14.0).strong());
        ChartPlotter::draw_gender_pie(ui, &dashboard.summary);

        Self::section_heading(ui, "📈 Vaccination Trend Over Time");
        ui.label(RichText::new("Dose Trend Over Time").size(14.0).strong());
        ChartPlotter::draw_trend_chart(ui, &dashboard.trend);
        if dashboard.report.unparsed_dates > 0 {
            ui.label(
                RichText::new(format!(
                    "{} rows without a readable date are not plotted",
                    format_count(dashboard.report.unparsed_dates as u64)
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        }

        Self::section_heading(ui, "🗺️ India State-wise Vaccination Map (1st Dose)");
        ChartPlotter::draw_bubble_map(ui, &dashboard.map);
    }

    fn section_heading(ui: &mut egui::Ui, text: &str) {
        ui.add_space(CARD_SPACING);
        ui.separator();
        ui.label(RichText::new(text).size(18.0).strong());
        ui.add_space(5.0);
    }

    fn draw_metric_cards(ui: &mut egui::Ui, dashboard: &Dashboard) {
        let cards = [
            ("💉", DoseField::FirstDose),
            ("💉", DoseField::SecondDose),
            ("👨", DoseField::Male),
            ("👩", DoseField::Female),
        ];

        ui.columns(cards.len(), |cols| {
            for (ui, (icon, field)) in cols.iter_mut().zip(cards) {
                Self::draw_metric_card(ui, icon, field.label(), dashboard.summary.total(field));
            }
        });
    }

    fn draw_metric_card(ui: &mut egui::Ui, icon: &str, title: &str, value: u64) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, ACCENT))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_height(CARD_HEIGHT);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(icon).size(20.0));
                    ui.label(RichText::new(title).size(14.0).strong());
                    ui.label(
                        RichText::new(format_count(value))
                            .size(22.0)
                            .strong()
                            .color(ACCENT),
                    );
                });
            });
    }
}
