//! Dashboard pipeline: one pass from a loaded table to everything the GUI draws.

use crate::config::DashboardConfig;
use crate::data::{DataProcessor, DoseField, LoadReport, ProcessorError, Table};
use crate::geo::{GeoResolver, MapEntry};
use crate::stats::{AggregateSummary, RankedGroup, StatsCalculator, TimeSeries};
use log::info;
use polars::prelude::DataFrame;

/// Computed dashboard values. Built once per load and never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: AggregateSummary,
    pub top_first_dose: RankedGroup,
    pub top_second_dose: RankedGroup,
    pub trend: TimeSeries,
    pub map: Vec<MapEntry>,
    pub regions: Vec<String>,
    pub report: LoadReport,
    pub top_n: usize,
    pub explore_rows: usize,
}

impl Dashboard {
    pub fn compute(table: &Table, config: &DashboardConfig) -> Self {
        let summary = StatsCalculator::summary(table);
        let top_first_dose =
            StatsCalculator::top_n_by_field(table, DoseField::FirstDose, config.top_n);
        let top_second_dose =
            StatsCalculator::top_n_by_field(table, DoseField::SecondDose, config.top_n);
        let trend = StatsCalculator::time_series(table);
        let map = GeoResolver::resolve(&StatsCalculator::region_sums(
            table,
            DoseField::FirstDose,
        ));
        let regions = DataProcessor::region_names(table);

        info!(
            "Dashboard ready: {} regions, {} trend points, {} map markers",
            regions.len(),
            trend.len(),
            map.len()
        );

        Self {
            summary,
            top_first_dose,
            top_second_dose,
            trend,
            map,
            regions,
            report: table.report(),
            top_n: config.top_n,
            explore_rows: config.explore_rows,
        }
    }

    /// Rows shown in the explorer for the selected region.
    pub fn explore(&self, table: &Table, region: &str) -> Result<DataFrame, ProcessorError> {
        DataProcessor::last_rows_for_region(table, region, self.explore_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;
    use polars::df;

    fn sample_table() -> Table {
        let df = df!(
            "State" => &[Some("Kerala"), Some("Kerala"), None, Some("Atlantis"), Some("Goa")],
            "Updated On" => &["01/01/2021", "02/01/2021", "01/01/2021", "bogus", "02/01/2021"],
            "First Dose Administered" => &[100i64, 200, 999, 400, 10],
            "Second Dose Administered" => &[50i64, 80, 999, 0, 5],
            "Male(Individuals Vaccinated)" => &[70i64, 120, 999, 200, 6],
            "Female(Individuals Vaccinated)" => &[30i64, 160, 999, 200, 4]
        )
        .unwrap();
        DataLoader::default().build_table(df).unwrap()
    }

    #[test]
    fn pipeline_outputs() {
        let table = sample_table();
        let dashboard = Dashboard::compute(&table, &DashboardConfig::default());

        assert_eq!(dashboard.summary.first_dose, 710);
        assert_eq!(dashboard.summary.second_dose, 135);
        assert_eq!(dashboard.report.rows_dropped_missing_region, 1);
        assert_eq!(dashboard.report.unparsed_dates, 1);

        // Atlantis ranks but never reaches the map.
        assert_eq!(dashboard.top_first_dose.entries[0], ("Atlantis".to_string(), 400));
        assert_eq!(dashboard.top_first_dose.field, DoseField::FirstDose);
        assert_eq!(dashboard.top_second_dose.field, DoseField::SecondDose);
        let mapped: Vec<&str> = dashboard.map.iter().map(|e| e.region.as_str()).collect();
        assert_eq!(mapped, vec!["Goa", "Kerala"]);

        assert_eq!(dashboard.trend.len(), 2);
        assert_eq!(dashboard.trend[1].first_dose, 210);
        assert_eq!(dashboard.regions, vec!["Atlantis", "Goa", "Kerala"]);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let table = sample_table();
        let config = DashboardConfig::default();
        assert_eq!(
            Dashboard::compute(&table, &config),
            Dashboard::compute(&table, &config)
        );
    }

    #[test]
    fn explore_uses_configured_row_count() {
        let table = sample_table();
        let config = DashboardConfig {
            explore_rows: 1,
            ..DashboardConfig::default()
        };
        let dashboard = Dashboard::compute(&table, &config);
        let rows = dashboard.explore(&table, "Kerala").unwrap();
        assert_eq!(rows.height(), 1);
    }
}
