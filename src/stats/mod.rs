//! Stats module - Aggregate totals, rankings and trends

mod calculator;

pub use calculator::{AggregateSummary, RankedGroup, StatsCalculator, TimeSeries};
