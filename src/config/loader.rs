//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rule
//! configuration and the holiday calendars from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::calculation::{HolidayLoad, load_holiday_set};
use crate::error::{EngineError, EngineResult};
use crate::models::RawHolidayRow;

use super::types::{HolidayCalendarFile, RuleConfig};

/// Loads and provides access to the rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/nrw/
/// ├── rules.yaml          # Rates, threshold, deduction, region, target month
/// └── holidays/
///     ├── 2025.yaml       # Holiday rows, one file per year
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use duty_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nrw").unwrap();
/// println!("Region: {}", loader.rules().region);
/// println!("Holidays: {}", loader.holidays().set.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleConfig,
    holiday_rows: Vec<RawHolidayRow>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `rules.yaml` or the holiday
    ///   directory is missing, or the directory holds no `.yaml` files
    /// - [`EngineError::ConfigParseError`] if a file is not valid YAML for
    ///   its type
    /// - [`EngineError::InvalidConfig`] if the rules fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RuleConfig>(&path.join("rules.yaml"))?;
        rules.validate()?;

        let holiday_rows = Self::load_holidays(&path.join("holidays"))?;

        Ok(Self {
            rules,
            holiday_rows,
        })
    }

    /// Builds a loader from values already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the rules fail validation.
    pub fn from_parts(rules: RuleConfig, holiday_rows: Vec<RawHolidayRow>) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            holiday_rows,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file, in file name order.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<RawHolidayRow>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }
        files.sort();

        let mut rows = Vec::new();
        for file in &files {
            rows.extend(Self::load_yaml::<HolidayCalendarFile>(file)?.holidays);
        }
        Ok(rows)
    }

    /// Returns the validated rule configuration.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Returns the raw holiday rows of every region.
    pub fn holiday_rows(&self) -> &[RawHolidayRow] {
        &self.holiday_rows
    }

    /// Builds the holiday set for the configured region.
    pub fn holidays(&self) -> HolidayLoad {
        self.holidays_for(&self.rules.region)
    }

    /// Builds the holiday set for another region.
    pub fn holidays_for(&self, region: &str) -> HolidayLoad {
        load_holiday_set(&self.holiday_rows, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawCell, RawDate};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/nrw"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// Creates a scratch config directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("duty_pay_engine_tests")
            .join(format!("{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rules().region, "NRW");
        assert_eq!(loader.rules().workday_rate, Decimal::from(250));
        assert_eq!(loader.rules().weekend_rate, Decimal::from(450));
        assert_eq!(loader.rules().weekend_threshold, Decimal::TWO);
        assert_eq!(loader.rules().deduction_after_threshold, Decimal::TWO);
    }

    #[test]
    fn test_shipped_calendar_has_both_years() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let load = loader.holidays();

        assert!(load.skipped.is_empty());
        assert_eq!(load.set.len(), 22);
        assert!(load.set.contains(make_date("2025-11-01")));
        assert!(load.set.contains(make_date("2025-06-19")));
        assert!(load.set.contains(make_date("2026-04-03")));
        assert!(load.set.contains(make_date("2026-12-26")));
    }

    #[test]
    fn test_other_region_has_no_shipped_holidays() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.holidays_for("BY").set.is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_holiday_directory_returns_error() {
        let dir = scratch_dir("no_holidays");
        fs::copy("./config/nrw/rules.yaml", dir.join("rules.yaml")).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("holidays")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_holiday_directory_returns_error() {
        let dir = scratch_dir("empty_holidays");
        fs::copy("./config/nrw/rules.yaml", dir.join("rules.yaml")).unwrap();
        fs::create_dir_all(dir.join("holidays")).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no holiday files found"))
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_rules_return_parse_error() {
        let dir = scratch_dir("bad_rules");
        fs::write(dir.join("rules.yaml"), "workday_rate: [not, a, number]\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_rules_are_rejected_on_load() {
        let dir = scratch_dir("mid_month");
        fs::write(
            dir.join("rules.yaml"),
            "workday_rate: 250\nweekend_rate: 450\nweekend_threshold: 2\n\
             deduction_after_threshold: 2\nregion: NRW\ntarget_month: 2025-11-15\n",
        )
        .unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "target_month"
        ));
    }

    #[test]
    fn test_from_parts_validates() {
        let rules = RuleConfig {
            region: String::new(),
            ..RuleConfig::default()
        };
        assert!(ConfigLoader::from_parts(rules, vec![]).is_err());

        let rows = vec![RawHolidayRow {
            date: RawDate::from("25.12.2025"),
            name: Some(RawCell::from("1. Weihnachtstag")),
            region: Some(RawCell::from("NRW")),
        }];
        let loader = ConfigLoader::from_parts(RuleConfig::default(), rows).unwrap();
        assert_eq!(loader.holiday_rows().len(), 1);
        assert!(loader.holidays().set.contains(make_date("2025-12-25")));
    }
}
