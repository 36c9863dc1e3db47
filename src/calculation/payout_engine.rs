//! Payout calculation under the strict weekend-threshold rule.
//!
//! An employee whose weekend-class units for the month stay below the
//! threshold receives nothing at all, workday units included. Once the
//! threshold is reached, a fixed number of weekend units is deducted
//! (Friday units first) and the remaining weekend units are paid at the
//! weekend rate.

use rust_decimal::Decimal;

use crate::config::RuleConfig;
use crate::models::{AuditStep, EmployeeAccumulator, PayoutResult};

/// Tolerance for comparisons of fractional units.
///
/// Shares such as 1/3 do not sum back to a whole unit exactly, so a total
/// up to 0.0001 below the threshold still counts as reaching it. The daily
/// share checks use the same tolerance around 1.0.
pub const UNIT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Decimal places of unit and amount figures in audit steps.
const AUDIT_DECIMAL_PLACES: u32 = 4;

/// A payout together with the audit step explaining it.
#[derive(Debug, Clone)]
pub struct EmployeePayout {
    /// The unrounded payout record.
    pub result: PayoutResult,
    /// The audit step recording the threshold decision.
    pub audit_step: AuditStep,
}

/// Applies the threshold and deduction policy to one employee's totals.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::payout;
/// use duty_pay_engine::config::RuleConfig;
/// use duty_pay_engine::models::EmployeeAccumulator;
/// use rust_decimal::Decimal;
///
/// // Friday + Saturday + Sunday: 3 weekend units, 2 deducted, 1 paid.
/// let totals = EmployeeAccumulator {
///     workday_units: Decimal::ZERO,
///     weekend_friday_units: Decimal::ONE,
///     weekend_other_units: Decimal::TWO,
/// };
///
/// let result = payout("Alice", &totals, &RuleConfig::default());
/// assert!(result.threshold_reached);
/// assert_eq!(result.deduction_friday, Decimal::ONE);
/// assert_eq!(result.deduction_other, Decimal::ONE);
/// assert_eq!(result.weekend_units_paid, Decimal::ONE);
/// assert_eq!(result.total_payout, Decimal::from(450));
/// ```
pub fn payout(employee: &str, totals: &EmployeeAccumulator, rules: &RuleConfig) -> PayoutResult {
    let weekend_total = totals.weekend_total();
    let threshold_reached = weekend_total >= rules.weekend_threshold - UNIT_EPSILON;

    let mut result = PayoutResult {
        employee: employee.to_string(),
        workday_units: totals.workday_units,
        weekend_friday_units: totals.weekend_friday_units,
        weekend_other_units: totals.weekend_other_units,
        weekend_total,
        threshold_reached,
        deduction_total: Decimal::ZERO,
        deduction_friday: Decimal::ZERO,
        deduction_other: Decimal::ZERO,
        weekend_units_paid: Decimal::ZERO,
        workday_payout: Decimal::ZERO,
        weekend_payout: Decimal::ZERO,
        total_payout: Decimal::ZERO,
    };

    if !threshold_reached {
        return result;
    }

    let deduction = rules.deduction_after_threshold;
    let deduction_friday = deduction.min(totals.weekend_friday_units);
    let deduction_other = (deduction - deduction_friday).max(Decimal::ZERO);
    let weekend_units_paid = (totals.weekend_friday_units - deduction_friday)
        + (totals.weekend_other_units - deduction_other);

    result.deduction_total = deduction;
    result.deduction_friday = deduction_friday;
    result.deduction_other = deduction_other;
    result.weekend_units_paid = weekend_units_paid;
    result.workday_payout = totals.workday_units * rules.workday_rate;
    result.weekend_payout = weekend_units_paid * rules.weekend_rate;
    result.total_payout = result.workday_payout + result.weekend_payout;
    result
}

/// Calculates a payout and records the decision as an audit step.
pub fn calculate_payout(
    employee: &str,
    totals: &EmployeeAccumulator,
    rules: &RuleConfig,
    step_number: u32,
) -> EmployeePayout {
    let result = payout(employee, totals, rules);

    let reasoning = if result.threshold_reached {
        format!(
            "{} weekend units reach the threshold of {}; {} deducted ({} from Friday, {} from other days), {} paid at {} plus {} workday units at {}",
            audit_figure(result.weekend_total),
            audit_figure(rules.weekend_threshold),
            audit_figure(result.deduction_total),
            audit_figure(result.deduction_friday),
            audit_figure(result.deduction_other),
            audit_figure(result.weekend_units_paid),
            audit_figure(rules.weekend_rate),
            audit_figure(result.workday_units),
            audit_figure(rules.workday_rate)
        )
    } else {
        format!(
            "{} weekend units are below the threshold of {}; the whole month is forfeited",
            audit_figure(result.weekend_total),
            audit_figure(rules.weekend_threshold)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekend_threshold".to_string(),
        rule_name: "Strict Weekend Threshold".to_string(),
        employee: employee.to_string(),
        input: serde_json::json!({
            "workday_units": audit_figure(result.workday_units),
            "weekend_friday_units": audit_figure(result.weekend_friday_units),
            "weekend_other_units": audit_figure(result.weekend_other_units),
            "weekend_threshold": audit_figure(rules.weekend_threshold),
            "deduction_after_threshold": audit_figure(rules.deduction_after_threshold)
        }),
        output: serde_json::json!({
            "threshold_reached": result.threshold_reached,
            "weekend_units_paid": audit_figure(result.weekend_units_paid),
            "total_payout": audit_figure(result.total_payout)
        }),
        reasoning,
    };

    EmployeePayout { result, audit_step }
}

fn audit_figure(value: Decimal) -> String {
    value.round_dp(AUDIT_DECIMAL_PLACES).normalize().to_string()
}
