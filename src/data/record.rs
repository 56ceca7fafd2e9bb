//! Typed rows of the statewise vaccination table.

use chrono::NaiveDate;
use polars::prelude::DataFrame;

/// One retained CSV row. Rows without a region never become a record.
#[derive(Debug, Clone, PartialEq)]
pub struct VaccinationRecord {
    pub region: String,
    /// `None` when the update date did not parse.
    pub date: Option<NaiveDate>,
    pub first_dose: u64,
    pub second_dose: u64,
    pub male: u64,
    pub female: u64,
}

/// Count field summed by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoseField {
    FirstDose,
    SecondDose,
    Male,
    Female,
}

impl DoseField {
    pub fn value(self, record: &VaccinationRecord) -> u64 {
        match self {
            DoseField::FirstDose => record.first_dose,
            DoseField::SecondDose => record.second_dose,
            DoseField::Male => record.male,
            DoseField::Female => record.female,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DoseField::FirstDose => "1st Dose",
            DoseField::SecondDose => "2nd Dose",
            DoseField::Male => "Males",
            DoseField::Female => "Females",
        }
    }
}

/// Row counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_dropped_missing_region: usize,
    pub unparsed_dates: usize,
}

/// Loaded table: the filtered frame (all source columns) and its typed rows,
/// index-aligned. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Table {
    frame: DataFrame,
    records: Vec<VaccinationRecord>,
    region_column: String,
    report: LoadReport,
}

impl Table {
    pub fn new(
        frame: DataFrame,
        records: Vec<VaccinationRecord>,
        region_column: impl Into<String>,
        report: LoadReport,
    ) -> Self {
        Self {
            frame,
            records,
            region_column: region_column.into(),
            report,
        }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn records(&self) -> &[VaccinationRecord] {
        &self.records
    }

    pub fn region_column(&self) -> &str {
        &self.region_column
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
