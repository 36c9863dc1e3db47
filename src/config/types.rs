//! Configuration types for duty pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::RawHolidayRow;

/// The policy parameters of the strict weekend-threshold rule.
///
/// A `RuleConfig` is immutable for the duration of a calculation. Use
/// [`RuleConfig::validate`] (the loader does this) before handing it to the
/// engine; the engine assumes a valid configuration.
///
/// # Example
///
/// ```
/// use duty_pay_engine::config::RuleConfig;
/// use rust_decimal::Decimal;
///
/// let rules = RuleConfig::default();
/// assert_eq!(rules.workday_rate, Decimal::from(250));
/// assert_eq!(rules.weekend_rate, Decimal::from(450));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Amount paid per workday unit.
    pub workday_rate: Decimal,
    /// Amount paid per weekend unit after deduction.
    pub weekend_rate: Decimal,
    /// Minimum weekend units per month before anything is paid.
    pub weekend_threshold: Decimal,
    /// Weekend units deducted once the threshold is reached.
    pub deduction_after_threshold: Decimal,
    /// Region code whose holidays apply (e.g., "NRW").
    pub region: String,
    /// First day of the month being calculated.
    pub target_month: NaiveDate,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            workday_rate: Decimal::from(250),
            weekend_rate: Decimal::from(450),
            weekend_threshold: Decimal::TWO,
            deduction_after_threshold: Decimal::TWO,
            region: "NRW".to_string(),
            target_month: NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid default month"),
        }
    }
}

impl RuleConfig {
    /// Checks every field for a usable value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("workday_rate", self.workday_rate),
            ("weekend_rate", self.weekend_rate),
            ("weekend_threshold", self.weekend_threshold),
            ("deduction_after_threshold", self.deduction_after_threshold),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid_config(
                    field,
                    format!("must not be negative, got {}", value),
                ));
            }
        }

        if self.deduction_after_threshold > self.weekend_threshold {
            return Err(EngineError::invalid_config(
                "deduction_after_threshold",
                format!(
                    "{} exceeds the weekend threshold {}",
                    self.deduction_after_threshold, self.weekend_threshold
                ),
            ));
        }

        if self.region.trim().is_empty() {
            return Err(EngineError::invalid_config("region", "must not be empty"));
        }

        if self.target_month.day() != 1 {
            return Err(EngineError::invalid_config(
                "target_month",
                format!("{} is not the first day of a month", self.target_month),
            ));
        }

        Ok(())
    }

    /// Returns a validated copy calculating a different month.
    pub fn with_target_month(&self, target_month: NaiveDate) -> EngineResult<Self> {
        let rules = Self {
            target_month,
            ..self.clone()
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Returns a validated copy applying a different region's holidays.
    pub fn with_region(&self, region: &str) -> EngineResult<Self> {
        let rules = Self {
            region: region.trim().to_string(),
            ..self.clone()
        };
        rules.validate()?;
        Ok(rules)
    }
}

/// One holiday calendar file (e.g., `holidays/2025.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendarFile {
    /// The holiday rows in this file.
    pub holidays: Vec<RawHolidayRow>,
}
