//! Data module - CSV loading, typed records and row selection

mod loader;
mod processor;
mod record;

pub use loader::DataLoader;
pub use processor::{DataProcessor, ProcessorError};
pub use record::{DoseField, LoadReport, Table, VaccinationRecord};
