//! Data Processor Module
//! Region listing and the per-region row selection shown in the explorer.

use crate::data::record::Table;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles filtering operations over a loaded table.
pub struct DataProcessor;

impl DataProcessor {
    /// Distinct region names, sorted ascending.
    pub fn region_names(table: &Table) -> Vec<String> {
        let mut regions: Vec<String> = table
            .records()
            .iter()
            .map(|r| r.region.clone())
            .collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Last `n` rows of `region`, in original table order, with every source column.
    pub fn last_rows_for_region(
        table: &Table,
        region: &str,
        n: usize,
    ) -> Result<DataFrame, ProcessorError> {
        let filtered = table
            .frame()
            .clone()
            .lazy()
            .filter(col(table.region_column()).eq(lit(region)))
            .collect()?;
        Ok(filtered.tail(Some(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;
    use polars::df;

    fn table_with(regions: &[&str], doses: &[i64]) -> Table {
        let n = regions.len();
        let df = df!(
            "State" => regions,
            "Updated On" => vec!["01/01/2021"; n],
            "First Dose Administered" => doses,
            "Second Dose Administered" => vec![0i64; n],
            "Male(Individuals Vaccinated)" => vec![0i64; n],
            "Female(Individuals Vaccinated)" => vec![0i64; n]
        )
        .unwrap();
        DataLoader::default().build_table(df).unwrap()
    }

    #[test]
    fn region_names_are_sorted_and_unique() {
        let table = table_with(&["Kerala", "Goa", "Kerala", "Assam"], &[1, 2, 3, 4]);
        assert_eq!(
            DataProcessor::region_names(&table),
            vec!["Assam", "Goa", "Kerala"]
        );
    }

    #[test]
    fn selects_last_ten_rows_in_order() {
        let mut regions = Vec::new();
        let mut doses = Vec::new();
        for i in 0..15i64 {
            regions.push("Kerala");
            doses.push(i);
            regions.push("Goa");
            doses.push(100 + i);
        }
        let table = table_with(&regions, &doses);

        let rows = DataProcessor::last_rows_for_region(&table, "Kerala", 10).unwrap();
        assert_eq!(rows.height(), 10);

        let values: Vec<i64> = rows
            .column("First Dose Administered")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(values, (5..15).collect::<Vec<i64>>());
    }

    #[test]
    fn short_region_returns_all_rows() {
        let table = table_with(&["Goa", "Kerala", "Goa"], &[1, 2, 3]);
        let rows = DataProcessor::last_rows_for_region(&table, "Goa", 10).unwrap();
        assert_eq!(rows.height(), 2);

        let none = DataProcessor::last_rows_for_region(&table, "Atlantis", 10).unwrap();
        assert_eq!(none.height(), 0);
    }
}
