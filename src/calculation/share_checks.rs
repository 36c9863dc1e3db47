//! Daily share consistency checks.
//!
//! The shares on every date with duty entries should add up to one full
//! duty. Mismatches are reported, never corrected.

use rust_decimal::Decimal;

use crate::models::{AuditWarning, CheckStatus, DutyEntry, HolidaySet, ShareCheck};

use super::{UNIT_EPSILON, day_label, resolve_date_groups};

/// Warning code for a date whose shares do not sum to one.
pub const SHARE_SUM_MISMATCH: &str = "SHARE_SUM_MISMATCH";

/// Checks the resolved share sum of every date, in date order.
///
/// Each check carries the date's day label so the report shows why a date
/// counted as weekend-class.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::check_daily_shares;
/// use duty_pay_engine::models::{CheckStatus, DutyEntry, HolidaySet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 7).unwrap();
/// let entries = vec![DutyEntry::explicit(date, "Alice", Decimal::new(5, 1))];
///
/// let checks = check_daily_shares(&entries, &HolidaySet::new());
/// assert_eq!(checks[0].day_label, "Friday");
/// assert_eq!(checks[0].status, CheckStatus::Mismatch);
/// ```
pub fn check_daily_shares(entries: &[DutyEntry], holidays: &HolidaySet) -> Vec<ShareCheck> {
    resolve_date_groups(entries)
        .into_iter()
        .map(|group| {
            let share_sum = group.share_sum();
            let status = if (share_sum - Decimal::ONE).abs() <= UNIT_EPSILON {
                CheckStatus::Ok
            } else {
                CheckStatus::Mismatch
            };
            ShareCheck {
                date: group.date,
                day_label: day_label(group.date, holidays),
                entries: group.shares.len(),
                share_sum,
                status,
            }
        })
        .collect()
}

/// Turns every mismatched check into a warning.
pub fn share_warnings(checks: &[ShareCheck]) -> Vec<AuditWarning> {
    checks
        .iter()
        .filter(|check| check.status == CheckStatus::Mismatch)
        .map(|check| AuditWarning {
            code: SHARE_SUM_MISMATCH.to_string(),
            message: format!(
                "Shares on {} ({}) sum to {} across {} entries instead of 1",
                check.date,
                check.day_label,
                check.share_sum.round_dp(4).normalize(),
                check.entries
            ),
            severity: "medium".to_string(),
        })
        .collect()
}
