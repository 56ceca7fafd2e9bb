//! Dashboard Configuration
//! Optional `vaxboard.toml` next to the binary's working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "vaxboard.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Source column names in the statewise CSV.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnNames {
    pub region: String,
    pub updated_on: String,
    pub first_dose: String,
    pub second_dose: String,
    pub male: String,
    pub female: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            region: "State".into(),
            updated_on: "Updated On".into(),
            first_dose: "First Dose Administered".into(),
            second_dose: "Second Dose Administered".into(),
            male: "Male(Individuals Vaccinated)".into(),
            female: "Female(Individuals Vaccinated)".into(),
        }
    }
}

impl ColumnNames {
    /// Every column the loader refuses to run without.
    pub fn required(&self) -> [&str; 6] {
        [
            &self.region,
            &self.updated_on,
            &self.first_dose,
            &self.second_dose,
            &self.male,
            &self.female,
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 900.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub top_n: usize,
    pub explore_rows: usize,
    /// chrono formats tried in order for the update-date column.
    pub date_formats: Vec<String>,
    pub columns: ColumnNames,
    pub window: WindowConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("covid_vaccine_statewise.csv"),
            top_n: 5,
            explore_rows: 10,
            date_formats: vec!["%d/%m/%Y".into(), "%Y-%m-%d".into()],
            columns: ColumnNames::default(),
            window: WindowConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Read the config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.top_n, 5);
        assert_eq!(config.explore_rows, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            data_path = "data/vaccines.csv"
            top_n = 3

            [columns]
            region = "Region"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/vaccines.csv"));
        assert_eq!(config.top_n, 3);
        assert_eq!(config.explore_rows, 10);
        assert_eq!(config.columns.region, "Region");
        assert_eq!(config.columns.first_dose, "First Dose Administered");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = DashboardConfig::from_toml("top_n = \"five\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
