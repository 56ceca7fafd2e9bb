//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::geo::MapEntry;
use crate::stats::{AggregateSummary, RankedGroup, TimeSeries};
use chrono::NaiveDate;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use std::f64::consts::{FRAC_PI_2, TAU};

pub const FIRST_DOSE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const SECOND_DOSE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const MALE_COLOR: Color32 = Color32::from_rgb(99, 110, 250);
pub const FEMALE_COLOR: Color32 = Color32::from_rgb(239, 85, 59);

/// Viridis anchor colours at 0, .25, .5, .75 and 1.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const CHART_HEIGHT: f32 = 300.0;
const MAP_HEIGHT: f32 = 600.0;
const MIN_BUBBLE: f32 = 4.0;
const MAX_BUBBLE: f32 = 28.0;

/// Group a count with thousands separators: `1234567` -> `1,234,567`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Sample the Viridis ramp at `t` (clamped to 0..=1).
pub fn viridis(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lower as f64;
    let (r0, g0, b0) = VIRIDIS[lower];
    let (r1, g1, b1) = VIRIDIS[lower + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    Color32::from_rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Marker radius proportional to area, so sqrt of the share of `max`.
pub fn bubble_radius(value: u64, max: u64) -> f32 {
    if max == 0 {
        return MIN_BUBBLE;
    }
    let share = (value as f64 / max as f64).sqrt() as f32;
    MIN_BUBBLE + (MAX_BUBBLE - MIN_BUBBLE) * share
}

/// Start/end angles (radians) of each pie slice, clockwise from 12 o'clock.
/// Empty when every value is zero.
pub fn pie_angles(values: &[u64]) -> Vec<(f64, f64)> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = FRAC_PI_2;
    values
        .iter()
        .map(|&v| {
            let end = start - v as f64 / total as f64 * TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// Closed fan polygon for one unit-circle slice.
fn slice_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((start - end).abs() / TAU) * 90.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + (end - start) * i as f64 / steps as f64;
        points.push([a.cos(), a.sin()]);
    }
    points
}

/// Trend x values are days since CE; label them back as dates.
pub fn date_axis_label(x: f64) -> String {
    if !x.is_finite() || x.fract().abs() > 1e-6 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(x as i32)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default()
}

fn date_to_x(date: NaiveDate) -> f64 {
    use chrono::Datelike;
    date.num_days_from_ce() as f64
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Horizontal bar chart of a top-N ranking, largest on top.
    pub fn draw_ranking_chart(ui: &mut egui::Ui, ranked: &RankedGroup, color: Color32) {
        if ranked.is_empty() {
            ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
            return;
        }

        let n = ranked.entries.len();
        let labels: Vec<String> = ranked.entries.iter().rev().map(|(r, _)| r.clone()).collect();
        let bars: Vec<Bar> = ranked
            .entries
            .iter()
            .enumerate()
            .map(|(i, (region, sum))| {
                Bar::new((n - 1 - i) as f64, *sum as f64)
                    .name(format!("{region}: {}", format_count(*sum)))
                    .width(0.6)
                    .fill(color)
            })
            .collect();

        Plot::new(format!("ranking_{:?}", ranked.field))
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .x_axis_label(ranked.field.label())
            .y_axis_formatter(move |mark, _range| {
                let v = mark.value;
                if v.fract().abs() > 1e-6 || v < 0.0 {
                    return String::new();
                }
                labels.get(v as usize).cloned().unwrap_or_default()
            })
            .y_axis_min_width(110.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(color)
                        .name(ranked.field.label()),
                );
            });
    }

    /// Male/female share of vaccinated individuals.
    pub fn draw_gender_pie(ui: &mut egui::Ui, summary: &AggregateSummary) {
        let split = summary.gender_split();
        let values = [split[0].1, split[1].1];
        let angles = pie_angles(&values);
        if angles.is_empty() {
            ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
            return;
        }
        let total = (values[0] + values[1]) as f64;
        let colors = [MALE_COLOR, FEMALE_COLOR];

        Plot::new("gender_pie")
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (((name, value), (start, end)), color) in
                    split.iter().zip(angles.iter()).zip(colors)
                {
                    if *value == 0 {
                        continue;
                    }
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(slice_points(*start, *end)))
                            .fill_color(color)
                            .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                            .name(*name),
                    );

                    let mid = (start + end) / 2.0;
                    let pct = *value as f64 / total * 100.0;
                    plot_ui.text(Text::new(
                        PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                        RichText::new(format!("{pct:.1}%"))
                            .color(Color32::WHITE)
                            .strong(),
                    ));
                }
            });
    }

    /// Dose-1 and dose-2 totals per update date.
    pub fn draw_trend_chart(ui: &mut egui::Ui, trend: &TimeSeries) {
        if trend.is_empty() {
            ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
            return;
        }

        let first: PlotPoints = trend
            .iter()
            .map(|p| [date_to_x(p.date), p.first_dose as f64])
            .collect();
        let second: PlotPoints = trend
            .iter()
            .map(|p| [date_to_x(p.date), p.second_dose as f64])
            .collect();

        Plot::new("dose_trend")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Date")
            .y_axis_label("Doses")
            .x_axis_formatter(|mark, _range| date_axis_label(mark.value))
            .label_formatter(|name, value| {
                let date = date_axis_label(value.x.round());
                if name.is_empty() {
                    date
                } else {
                    format!("{name}\n{date}\n{}", format_count(value.y.max(0.0) as u64))
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(first)
                        .color(FIRST_DOSE_COLOR)
                        .width(2.0)
                        .name("First Dose Administered"),
                );
                plot_ui.line(
                    Line::new(second)
                        .color(SECOND_DOSE_COLOR)
                        .width(2.0)
                        .name("Second Dose Administered"),
                );
            });
    }

    /// Bubble map of first-dose sums at each mapped region's coordinates.
    pub fn draw_bubble_map(ui: &mut egui::Ui, entries: &[MapEntry]) {
        if entries.is_empty() {
            ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
            return;
        }

        let max = entries.iter().map(|e| e.value).max().unwrap_or(0);

        Plot::new("bubble_map")
            .height(MAP_HEIGHT)
            .data_aspect(1.0)
            .allow_scroll(false)
            .include_x(68.0)
            .include_x(98.0)
            .include_y(6.0)
            .include_y(37.0)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{:.2}, {:.2}", value.y, value.x)
                } else {
                    name.to_string()
                }
            })
            .show(ui, |plot_ui| {
                for entry in entries {
                    let t = if max == 0 {
                        0.0
                    } else {
                        entry.value as f64 / max as f64
                    };
                    plot_ui.points(
                        Points::new(vec![[entry.point.lon, entry.point.lat]])
                            .radius(bubble_radius(entry.value, max))
                            .color(viridis(t).gamma_multiply(0.8))
                            .filled(true)
                            .name(format!("{}: {}", entry.region, format_count(entry.value))),
                    );
                }
            });
    }
}
