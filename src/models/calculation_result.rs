//! Calculation result models for the duty pay engine.
//!
//! This module contains the per-employee [`PayoutResult`], the daily
//! [`ShareCheck`] records, the [`PayrollReport`] produced by one payroll run,
//! and the [`CalculationResult`] envelope returned by the HTTP API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of decimal places applied at the output boundary.
pub const OUTPUT_DECIMAL_PLACES: u32 = 2;

/// The finalized pay record for one employee and month.
///
/// # Example
///
/// ```
/// use duty_pay_engine::models::PayoutResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = PayoutResult {
///     employee: "Alice".to_string(),
///     workday_units: Decimal::from_str("0.333333").unwrap(),
///     weekend_friday_units: Decimal::ONE,
///     weekend_other_units: Decimal::ONE,
///     weekend_total: Decimal::TWO,
///     threshold_reached: true,
///     deduction_total: Decimal::TWO,
///     deduction_friday: Decimal::ONE,
///     deduction_other: Decimal::ONE,
///     weekend_units_paid: Decimal::ZERO,
///     workday_payout: Decimal::from_str("83.33325").unwrap(),
///     weekend_payout: Decimal::ZERO,
///     total_payout: Decimal::from_str("83.33325").unwrap(),
/// };
/// let rounded = result.rounded();
/// assert_eq!(rounded.workday_units, Decimal::from_str("0.33").unwrap());
/// assert_eq!(rounded.total_payout, Decimal::from_str("83.33").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResult {
    /// The employee this record belongs to.
    pub employee: String,
    /// Units worked on workdays.
    pub workday_units: Decimal,
    /// Weekend-class units worked on Fridays.
    pub weekend_friday_units: Decimal,
    /// Weekend-class units worked on other days.
    pub weekend_other_units: Decimal,
    /// Friday plus other weekend units.
    pub weekend_total: Decimal,
    /// Whether the weekend threshold was met.
    pub threshold_reached: bool,
    /// Units deducted in total (zero below threshold).
    pub deduction_total: Decimal,
    /// Units deducted from Friday units.
    pub deduction_friday: Decimal,
    /// Units deducted from other weekend units.
    pub deduction_other: Decimal,
    /// Weekend units paid after deduction.
    pub weekend_units_paid: Decimal,
    /// Workday units times the workday rate.
    pub workday_payout: Decimal,
    /// Paid weekend units times the weekend rate.
    pub weekend_payout: Decimal,
    /// Workday plus weekend payout.
    pub total_payout: Decimal,
}

impl PayoutResult {
    /// Returns a copy with every numeric field rounded for presentation.
    ///
    /// Rounding never feeds back into the calculation.
    pub fn rounded(&self) -> Self {
        let r = |d: Decimal| d.round_dp(OUTPUT_DECIMAL_PLACES);
        Self {
            employee: self.employee.clone(),
            workday_units: r(self.workday_units),
            weekend_friday_units: r(self.weekend_friday_units),
            weekend_other_units: r(self.weekend_other_units),
            weekend_total: r(self.weekend_total),
            threshold_reached: self.threshold_reached,
            deduction_total: r(self.deduction_total),
            deduction_friday: r(self.deduction_friday),
            deduction_other: r(self.deduction_other),
            weekend_units_paid: r(self.weekend_units_paid),
            workday_payout: r(self.workday_payout),
            weekend_payout: r(self.weekend_payout),
            total_payout: r(self.total_payout),
        }
    }
}

/// Outcome of a daily share check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The shares on the date sum to 1.0 within tolerance.
    Ok,
    /// The shares on the date do not sum to 1.0.
    Mismatch,
}

/// Sum of resolved shares on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCheck {
    /// The checked date.
    pub date: NaiveDate,
    /// Weekday name, or "holiday" / "holiday eve".
    pub day_label: String,
    /// Number of entries on the date.
    pub entries: usize,
    /// Sum of the resolved shares.
    pub share_sum: Decimal,
    /// Whether the sum is acceptable.
    pub status: CheckStatus,
}

/// A warning generated during calculation.
///
/// Warnings indicate input problems that don't stop the calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the step concerns.
    pub employee: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Everything one payroll run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The first day of the calculated month.
    pub month: NaiveDate,
    /// One record per employee, ordered by employee name.
    pub results: Vec<PayoutResult>,
    /// One record per date that carries duty entries.
    pub checks: Vec<ShareCheck>,
    /// Decision trail, one step per employee.
    pub steps: Vec<AuditStep>,
    /// Input and consistency warnings.
    pub warnings: Vec<AuditWarning>,
}

impl PayrollReport {
    /// Returns the report with every result and check rounded for
    /// presentation.
    pub fn rounded(&self) -> Self {
        Self {
            results: self.results.iter().map(PayoutResult::rounded).collect(),
            checks: self
                .checks
                .iter()
                .map(|check| ShareCheck {
                    share_sum: check.share_sum.round_dp(OUTPUT_DECIMAL_PLACES),
                    ..check.clone()
                })
                .collect(),
            ..self.clone()
        }
    }

    /// Looks up the result for an employee.
    pub fn result_for(&self, employee: &str) -> Option<&PayoutResult> {
        self.results.iter().find(|r| r.employee == employee)
    }

    /// Sum of all employees' total payouts.
    pub fn total_payout(&self) -> Decimal {
        self.results.iter().map(|r| r.total_payout).sum()
    }
}

/// The response envelope of a calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The region whose holidays were applied.
    pub region: String,
    /// The rounded payroll report.
    pub report: PayrollReport,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
