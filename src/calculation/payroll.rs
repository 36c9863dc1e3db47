//! Payroll run orchestration.
//!
//! Ties the stages together for one month: month filter, aggregation,
//! per-employee payout and the daily share checks.

use tracing::{debug, info};

use crate::config::RuleConfig;
use crate::models::{AuditWarning, DutyEntry, HolidaySet, PayrollReport, SkippedRow};

use super::{aggregate, calculate_payout, check_daily_shares, filter_to_month, share_warnings};

/// Warning code for an input row that was dropped at the boundary.
pub const SKIPPED_ROW: &str = "SKIPPED_ROW";

/// Warning code for duty entries dated outside the target month.
pub const OUTSIDE_MONTH: &str = "OUTSIDE_MONTH";

/// Runs the payroll for the rule configuration's target month.
///
/// The report holds unrounded figures; call [`PayrollReport::rounded`]
/// before presenting them. Results are ordered by employee name.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::run_payroll;
/// use duty_pay_engine::config::RuleConfig;
/// use duty_pay_engine::models::{DutyEntry, HolidaySet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
/// let entries = vec![
///     DutyEntry::derived(day(3), "Alice"),
///     DutyEntry::derived(day(4), "Alice"),
///     DutyEntry::derived(day(7), "Alice"),
///     DutyEntry::derived(day(8), "Alice"),
/// ];
///
/// let report = run_payroll(&entries, &HolidaySet::new(), &RuleConfig::default());
/// let alice = report.result_for("Alice").unwrap();
/// assert!(alice.threshold_reached);
/// assert_eq!(alice.total_payout, Decimal::from(500));
/// ```
pub fn run_payroll(entries: &[DutyEntry], holidays: &HolidaySet, rules: &RuleConfig) -> PayrollReport {
    let month_entries = filter_to_month(entries, rules.target_month);
    let dropped = entries.len() - month_entries.len();

    let mut warnings = Vec::new();
    if dropped > 0 {
        warnings.push(AuditWarning {
            code: OUTSIDE_MONTH.to_string(),
            message: format!(
                "{} duty entries fall outside {} and were not counted",
                dropped,
                rules.target_month.format("%Y-%m")
            ),
            severity: "low".to_string(),
        });
    }

    let totals = aggregate(&month_entries, holidays);

    let mut results = Vec::with_capacity(totals.len());
    let mut steps = Vec::with_capacity(totals.len());
    for (step_number, (employee, acc)) in (1u32..).zip(totals.iter()) {
        let payout = calculate_payout(employee, acc, rules, step_number);
        debug!(
            employee = %employee,
            weekend_total = %payout.result.weekend_total,
            threshold_reached = payout.result.threshold_reached,
            total_payout = %payout.result.total_payout,
            "Calculated payout"
        );
        results.push(payout.result);
        steps.push(payout.audit_step);
    }

    let checks = check_daily_shares(&month_entries, holidays);
    warnings.extend(share_warnings(&checks));

    info!(
        month = %rules.target_month.format("%Y-%m"),
        entries = month_entries.len(),
        employees = results.len(),
        warnings = warnings.len(),
        "Payroll run completed"
    );

    PayrollReport {
        month: rules.target_month,
        results,
        checks,
        steps,
        warnings,
    }
}

/// Converts rows skipped at the boundary into report warnings.
///
/// `source` names the input the rows came from (e.g., "duties").
pub fn skipped_row_warnings(source: &str, skipped: &[SkippedRow]) -> Vec<AuditWarning> {
    skipped
        .iter()
        .map(|row| AuditWarning {
            code: SKIPPED_ROW.to_string(),
            message: format!("Skipped {} row {}: {}", source, row.row, row.reason),
            severity: "medium".to_string(),
        })
        .collect()
}
