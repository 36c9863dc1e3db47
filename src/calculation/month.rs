//! Month boundaries for a payroll run.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::DutyEntry;

/// Returns the first and last day of the month containing `month`.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_bounds(NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
/// assert_eq!(first, NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// ```
pub fn month_bounds(month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = month.with_day(1).unwrap_or(month);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Keeps the entries dated inside the month containing `month`.
pub fn filter_to_month(entries: &[DutyEntry], month: NaiveDate) -> Vec<DutyEntry> {
    let (first, last) = month_bounds(month);
    entries
        .iter()
        .filter(|entry| (first..=last).contains(&entry.date))
        .cloned()
        .collect()
}
