//! Configuration management and validation.
//!
//! Provides explicit configuration structures for every pipeline stage:
//! artifact paths, cleaning bounds, quality-check bounds, and synthetic-data
//! generation parameters. Each stage receives its configuration section as an
//! argument, so no stage depends on process-wide mutable state.

use crate::constants::{self, artifacts, synthetic};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the BankOps processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Artifact path layout
    pub paths: PathsConfig,
    /// Cleaning transform bounds and defaults
    pub cleaning: CleaningConfig,
    /// Quality checker bounds
    pub quality: QualityCheckConfig,
    /// Synthetic data generation parameters
    pub synthetic: SyntheticConfig,
}

impl Config {
    /// Create a configuration rooted at the given base directory
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathsConfig { base: base.into() },
            cleaning: CleaningConfig::default(),
            quality: QualityCheckConfig::default(),
            synthetic: SyntheticConfig::default(),
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.cleaning.amount_min > self.cleaning.amount_max {
            return Err(Error::configuration(format!(
                "Cleaning amount bounds are inverted: {} > {}",
                self.cleaning.amount_min, self.cleaning.amount_max
            )));
        }

        if self.quality.amount_min > self.quality.amount_max {
            return Err(Error::configuration(format!(
                "Quality amount bounds are inverted: {} > {}",
                self.quality.amount_min, self.quality.amount_max
            )));
        }

        if self.quality.time_min > self.quality.time_max {
            return Err(Error::configuration(format!(
                "Quality timestamp window is inverted: {} > {}",
                self.quality.time_min, self.quality.time_max
            )));
        }

        if self.cleaning.default_country.trim().is_empty() {
            return Err(Error::configuration(
                "Default country cannot be empty".to_string(),
            ));
        }

        if self.synthetic.rows == 0 {
            return Err(Error::configuration(
                "Synthetic batch size must be at least 1 row".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base(".")
    }
}

/// Artifact path layout derived from a single base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base directory holding `data/`, `reports/`, and `sql/`
    pub base: PathBuf,
}

impl PathsConfig {
    /// Directory for raw input batches
    pub fn raw_dir(&self) -> PathBuf {
        self.base.join(artifacts::RAW_DIR)
    }

    /// Directory for the cleaned columnar dataset
    pub fn processed_dir(&self) -> PathBuf {
        self.base.join(artifacts::PROCESSED_DIR)
    }

    /// Directory for quality and KPI report exports
    pub fn reports_dir(&self) -> PathBuf {
        self.base.join(artifacts::REPORTS_DIR)
    }

    /// Raw transactions CSV path
    pub fn raw_csv(&self) -> PathBuf {
        self.raw_dir().join(artifacts::RAW_CSV)
    }

    /// Clean transactions Parquet path
    pub fn clean_parquet(&self) -> PathBuf {
        self.processed_dir().join(artifacts::CLEAN_PARQUET)
    }

    /// Relational store path
    pub fn sqlite_db(&self) -> PathBuf {
        self.base.join("data").join(artifacts::SQLITE_DB)
    }

    /// Quality report document path
    pub fn quality_report(&self) -> PathBuf {
        self.reports_dir().join(artifacts::QUALITY_REPORT)
    }

    /// Fixed analytical SQL script path
    pub fn analytics_sql(&self) -> PathBuf {
        self.base.join(artifacts::SQL_DIR).join(artifacts::ANALYTICS_SQL)
    }

    /// Create the data and report directories if they do not exist
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [self.raw_dir(), self.processed_dir(), self.reports_dir()] {
            std::fs::create_dir_all(&dir)
                .map_err(|e| Error::io(format!("Failed to create {}", dir.display()), e))?;
        }
        Ok(())
    }
}

/// Bounds and defaults applied by the cleaning transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Minimum amount retained after cleaning
    pub amount_min: f64,
    /// Maximum amount retained after cleaning
    pub amount_max: f64,
    /// Country substituted for missing values
    pub default_country: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            amount_min: 0.0,
            amount_max: constants::CLEAN_AMOUNT_MAX,
            default_country: constants::DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Bounds validated by the quality checker
///
/// The amount ceiling is intentionally looser than the cleaning transform's
/// filter bound: the checker validates arbitrary persisted input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityCheckConfig {
    /// Minimum accepted amount
    pub amount_min: f64,
    /// Maximum accepted amount
    pub amount_max: f64,
    /// Start of the accepted timestamp window, inclusive
    pub time_min: NaiveDateTime,
    /// End of the accepted timestamp window, inclusive
    pub time_max: NaiveDateTime,
}

impl Default for QualityCheckConfig {
    fn default() -> Self {
        Self {
            amount_min: constants::QC_AMOUNT_MIN,
            amount_max: constants::QC_AMOUNT_MAX,
            time_min: date_at_midnight(constants::QC_TIME_MIN),
            time_max: date_at_midnight(constants::QC_TIME_MAX),
        }
    }
}

/// Parameters for synthetic raw batch generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Number of rows to generate
    pub rows: usize,
    /// RNG seed; identical seeds yield identical batches
    pub seed: u64,
    /// Fixed reference instant; timestamps are drawn from the window ending here
    pub base_time: NaiveDateTime,
    /// Length of the timestamp window in days
    pub span_days: i64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            rows: synthetic::DEFAULT_ROWS,
            seed: synthetic::DEFAULT_SEED,
            base_time: date_at_midnight((2025, 6, 1)),
            span_days: 60,
        }
    }
}

/// Build a midnight timestamp from a (year, month, day) constant triple
fn date_at_midnight((year, month, day): (i32, u32, u32)) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("calendar constants are valid dates")
}

/// Resolve a base directory argument into a validated configuration
pub fn load_configuration(base: Option<&Path>) -> Result<Config> {
    let config = match base {
        Some(path) => Config::with_base(path),
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn paths_derive_from_base() {
        let config = Config::with_base("/tmp/bankops");
        assert_eq!(
            config.paths.raw_csv(),
            PathBuf::from("/tmp/bankops/data/raw/transactions_sample.csv")
        );
        assert_eq!(
            config.paths.clean_parquet(),
            PathBuf::from("/tmp/bankops/data/processed/transactions_clean.parquet")
        );
        assert_eq!(
            config.paths.sqlite_db(),
            PathBuf::from("/tmp/bankops/data/bank_ops.sqlite")
        );
    }

    #[test]
    fn inverted_cleaning_bounds_are_rejected() {
        let mut config = Config::default();
        config.cleaning.amount_min = 50_000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn quality_window_matches_check_bounds() {
        let config = QualityCheckConfig::default();
        assert_eq!(config.time_min.date().to_string(), "2018-01-01");
        assert_eq!(config.time_max.date().to_string(), "2030-12-31");
        assert_eq!(config.amount_max, 100_000.0);
    }

    #[test]
    fn zero_row_synthetic_config_is_rejected() {
        let mut config = Config::default();
        config.synthetic.rows = 0;
        assert!(config.validate().is_err());
    }
}
