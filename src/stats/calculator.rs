//! Aggregation Module
//! Scalar totals, top-N region rankings and the date-keyed dose trend.
//!
//! Every function is pure over a loaded `Table` and accepts an empty table.

use crate::data::{DoseField, Table, VaccinationRecord};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::hash::Hash;

/// Whole-table totals shown on the metric cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    pub first_dose: u64,
    pub second_dose: u64,
    pub male: u64,
    pub female: u64,
}

impl AggregateSummary {
    pub fn total(&self, field: DoseField) -> u64 {
        match field {
            DoseField::FirstDose => self.first_dose,
            DoseField::SecondDose => self.second_dose,
            DoseField::Male => self.male,
            DoseField::Female => self.female,
        }
    }

    /// Pie categories, male first.
    pub fn gender_split(&self) -> [(&'static str, u64); 2] {
        [("Male", self.male), ("Female", self.female)]
    }
}

/// Region sums for one field, sorted descending and truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGroup {
    pub field: DoseField,
    pub entries: Vec<(String, u64)>,
}

impl RankedGroup {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One point of the dose trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub first_dose: u64,
    pub second_dose: u64,
}

pub type TimeSeries = Vec<TimeSeriesPoint>;

/// Group records by `key`, summing each of `fields` per group.
///
/// Groups come out in first-seen order. Records whose key is `None` are skipped.
pub fn group_sum<'a, K, I, F, const N: usize>(
    records: I,
    key: F,
    fields: [DoseField; N],
) -> Vec<(K, [u64; N])>
where
    I: IntoIterator<Item = &'a VaccinationRecord>,
    K: Eq + Hash + Clone,
    F: Fn(&VaccinationRecord) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, [u64; N])> = Vec::new();

    for record in records {
        let Some(k) = key(record) else {
            continue;
        };
        let slot = *index.entry(k.clone()).or_insert_with(|| {
            groups.push((k, [0; N]));
            groups.len() - 1
        });
        for (sum, field) in groups[slot].1.iter_mut().zip(fields) {
            *sum += field.value(record);
        }
    }

    groups
}

/// Handles aggregate computations over a loaded table.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Sum of one field over every retained row.
    pub fn total(table: &Table, field: DoseField) -> u64 {
        table.records().iter().map(|r| field.value(r)).sum()
    }

    pub fn summary(table: &Table) -> AggregateSummary {
        AggregateSummary {
            first_dose: Self::total(table, DoseField::FirstDose),
            second_dose: Self::total(table, DoseField::SecondDose),
            male: Self::total(table, DoseField::Male),
            female: Self::total(table, DoseField::Female),
        }
    }

    /// Top `n` regions by summed `field`. Equal sums keep first-appearance order.
    pub fn top_n_by_field(table: &Table, field: DoseField, n: usize) -> RankedGroup {
        let mut entries: Vec<(String, u64)> =
            group_sum(table.records(), |r| Some(r.region.clone()), [field])
                .into_iter()
                .map(|(region, [sum])| (region, sum))
                .collect();

        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);

        RankedGroup { field, entries }
    }

    /// Sum of `field` for every region, ascending by region name.
    pub fn region_sums(table: &Table, field: DoseField) -> Vec<(String, u64)> {
        let mut sums: Vec<(String, u64)> =
            group_sum(table.records(), |r| Some(r.region.clone()), [field])
                .into_iter()
                .map(|(region, [sum])| (region, sum))
                .collect();
        sums.sort_by(|a, b| a.0.cmp(&b.0));
        sums
    }

    /// Dose-1 and dose-2 sums per date, ascending. Undated rows are excluded.
    pub fn time_series(table: &Table) -> TimeSeries {
        let mut points: TimeSeries = group_sum(
            table.records(),
            |r| r.date,
            [DoseField::FirstDose, DoseField::SecondDose],
        )
        .into_iter()
        .map(|(date, [first_dose, second_dose])| TimeSeriesPoint {
            date,
            first_dose,
            second_dose,
        })
        .collect();

        points.sort_by_key(|p| p.date);
        points
    }
}
