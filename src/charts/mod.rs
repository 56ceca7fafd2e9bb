//! Charts module - Chart rendering

mod plotter;

pub use plotter::{format_count, ChartPlotter, FIRST_DOSE_COLOR, SECOND_DOSE_COLOR};
