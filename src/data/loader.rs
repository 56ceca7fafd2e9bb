//! CSV Data Loader Module
//! Reads the statewise CSV with Polars and builds the immutable `Table`.

use crate::config::{ColumnNames, DashboardConfig};
use crate::data::record::{LoadReport, Table, VaccinationRecord};
use chrono::NaiveDate;
use log::{info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column: {0:?}")]
    MissingColumn(String),
}

/// Handles CSV file loading with Polars for high performance.
pub struct DataLoader {
    columns: ColumnNames,
    date_formats: Vec<String>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl DataLoader {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            columns: config.columns.clone(),
            date_formats: config.date_formats.clone(),
        }
    }

    /// Load a CSV file using Polars.
    pub fn load_csv(&self, file_path: &Path) -> Result<Table, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!("Read {} rows from {:?}", df.height(), file_path);
        self.build_table(df)
    }

    /// Validate columns, drop rows without a region and extract typed records.
    pub fn build_table(&self, df: DataFrame) -> Result<Table, LoaderError> {
        self.check_columns(&df)?;

        let rows_read = df.height();
        let region = self.columns.region.as_str();
        let frame = df
            .lazy()
            .with_column(col(region).cast(DataType::String))
            .filter(col(region).is_not_null().and(col(region).neq(lit(""))))
            .collect()?;

        let regions = Self::text_column(&frame, region)?;
        let dates = Self::text_column(&frame, &self.columns.updated_on)?;
        let first_dose = Self::count_column(&frame, &self.columns.first_dose)?;
        let second_dose = Self::count_column(&frame, &self.columns.second_dose)?;
        let male = Self::count_column(&frame, &self.columns.male)?;
        let female = Self::count_column(&frame, &self.columns.female)?;

        let mut unparsed_dates = 0;
        let records: Vec<VaccinationRecord> = (0..frame.height())
            .map(|i| {
                let date = dates[i]
                    .as_deref()
                    .and_then(|raw| parse_date(raw, &self.date_formats));
                if date.is_none() {
                    unparsed_dates += 1;
                }
                VaccinationRecord {
                    region: regions[i].clone().unwrap_or_default(),
                    date,
                    first_dose: first_dose[i],
                    second_dose: second_dose[i],
                    male: male[i],
                    female: female[i],
                }
            })
            .collect();

        let report = LoadReport {
            rows_read,
            rows_dropped_missing_region: rows_read - frame.height(),
            unparsed_dates,
        };
        if report.rows_dropped_missing_region > 0 {
            warn!(
                "Dropped {} rows with no {:?}",
                report.rows_dropped_missing_region, region
            );
        }
        if report.unparsed_dates > 0 {
            warn!(
                "{} rows have an unparseable {:?} and are left out of the trend",
                report.unparsed_dates, self.columns.updated_on
            );
        }
        info!("Retained {} rows", records.len());

        Ok(Table::new(frame, records, region, report))
    }

    fn check_columns(&self, df: &DataFrame) -> Result<(), LoaderError> {
        let names = df.get_column_names();
        for required in self.columns.required() {
            if !names.iter().any(|name| name.as_str() == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let cast = df.column(name)?.cast(&DataType::String)?;
        let ca = cast.str()?;
        Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
    }

    /// Null and NaN count as 0, negatives clamp to 0.
    fn count_column(df: &DataFrame, name: &str) -> Result<Vec<u64>, LoaderError> {
        let cast = df.column(name)?.cast(&DataType::Float64)?;
        let ca = cast.f64()?;
        Ok(ca
            .into_iter()
            .map(|v| match v {
                Some(x) if x.is_finite() => x.max(0.0).round() as u64,
                _ => 0,
            })
            .collect())
    }
}

/// Try each chrono format in order; the first that parses wins.
pub fn parse_date(raw: &str, formats: &[String]) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use std::fs;

    const HEADER: &str = "Updated On,State,Total Doses Administered,First Dose Administered,Second Dose Administered,Male(Individuals Vaccinated),Female(Individuals Vaccinated)";

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("vaccines.csv");
        fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
        path
    }

    #[test]
    fn loads_and_drops_rows_without_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "01/01/2021,Kerala,150,100,50,70,30\n\
             02/01/2021,Kerala,280,200,80,120,160\n\
             03/01/2021,,1000,999,1,1,1\n",
        );

        let table = DataLoader::default().load_csv(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.frame().height(), 2);
        assert_eq!(table.report().rows_read, 3);
        assert_eq!(table.report().rows_dropped_missing_region, 1);

        let first = &table.records()[0];
        assert_eq!(first.region, "Kerala");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(first.first_dose, 100);
        assert_eq!(first.female, 30);
        assert_eq!(
            table.records()[1].date,
            NaiveDate::from_ymd_opt(2021, 1, 2)
        );
    }

    #[test]
    fn bad_dates_and_blank_counts_are_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "not a date,Goa,10,10,0,5,5\n\
             16/01/2021,Goa,,,,,\n",
        );

        let table = DataLoader::default().load_csv(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].date, None);
        assert_eq!(table.report().unparsed_dates, 1);
        assert_eq!(
            table.records()[1].date,
            NaiveDate::from_ymd_opt(2021, 1, 16)
        );
        assert_eq!(table.records()[1].first_dose, 0);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataLoader::default()
            .load_csv(&dir.path().join("nope.csv"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn missing_column_is_named() {
        let df = df!(
            "State" => &["Kerala"],
            "Updated On" => &["01/01/2021"],
            "First Dose Administered" => &[1i64],
            "Second Dose Administered" => &[1i64],
            "Male(Individuals Vaccinated)" => &[1i64]
        )
        .unwrap();

        let err = DataLoader::default().build_table(df).unwrap_err();
        match err {
            LoaderError::MissingColumn(name) => {
                assert_eq!(name, "Female(Individuals Vaccinated)")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_date_tries_formats_in_order() {
        let formats = DashboardConfig::default().date_formats;
        assert_eq!(
            parse_date("02/01/2021", &formats),
            NaiveDate::from_ymd_opt(2021, 1, 2)
        );
        assert_eq!(
            parse_date("2021-03-04", &formats),
            NaiveDate::from_ymd_opt(2021, 3, 4)
        );
        assert_eq!(parse_date("  ", &formats), None);
        assert_eq!(parse_date("31/02/2021", &formats), None);
    }
}
