use std::path::PathBuf;

use thiserror::Error;

use crate::area::style::TIP_OFFSET;

pub const OPEN_ENV: &str = "CELLFILL_OPEN";
pub const ROW_HEIGHT_ENV: &str = "CELLFILL_ROW_HEIGHT";
pub const COLUMN_WIDTH_ENV: &str = "CELLFILL_COLUMN_WIDTH";
pub const MOCK_SIZE_ENV: &str = "CELLFILL_MOCK_SIZE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub open_path: Option<PathBuf>,
    pub row_height: f64,
    pub column_width: f64,
    pub header_height: f64,
    pub tip_offset: f64,
    pub mock_rows: usize,
    pub mock_columns: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            open_path: None,
            row_height: 28.0,
            column_width: 120.0,
            header_height: 32.0,
            tip_offset: TIP_OFFSET,
            mock_rows: 20,
            mock_columns: 6,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(OPEN_ENV).filter(|path| !path.trim().is_empty()) {
            config.open_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup(ROW_HEIGHT_ENV) {
            config.row_height = parse_length(ROW_HEIGHT_ENV, &value)?;
        }
        if let Some(value) = lookup(COLUMN_WIDTH_ENV) {
            config.column_width = parse_length(COLUMN_WIDTH_ENV, &value)?;
        }
        if let Some(value) = lookup(MOCK_SIZE_ENV) {
            let (rows, columns) = parse_size(&value).ok_or_else(|| ConfigError::Invalid {
                key: MOCK_SIZE_ENV,
                value: value.clone(),
            })?;
            config.mock_rows = rows;
            config.mock_columns = columns;
        }

        Ok(config)
    }
}

fn parse_length(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|length| length.is_finite() && *length > 0.0)
        .ok_or_else(|| ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
}

fn parse_size(value: &str) -> Option<(usize, usize)> {
    let (rows, columns) = value.trim().split_once(['x', 'X'])?;
    Some((rows.trim().parse().ok()?, columns.trim().parse().ok()?))
}
