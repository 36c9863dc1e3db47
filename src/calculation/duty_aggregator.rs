//! Duty aggregation.
//!
//! Groups duty entries by date, resolves each entry's share and credits it
//! to the employee's workday, weekend-Friday or weekend-other bucket.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DutyEntry, EmployeeAccumulator, HolidaySet};

use super::{DayCategory, classify};

/// One employee's resolved share on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedShare<'a> {
    /// The employee name, trimmed.
    pub employee: &'a str,
    /// The explicit or derived share.
    pub share: Decimal,
}

/// All resolved shares on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup<'a> {
    /// The date of the duty.
    pub date: NaiveDate,
    /// One resolved share per entry on the date, in input order.
    pub shares: Vec<ResolvedShare<'a>>,
}

impl DateGroup<'_> {
    /// Sum of all resolved shares on the date.
    pub fn share_sum(&self) -> Decimal {
        self.shares.iter().map(|s| s.share).sum()
    }
}

/// Groups entries by date and resolves every share.
///
/// Entries without an employee are dropped before counting, so they never
/// dilute a derived share. A derived share is `1/N` where N counts every
/// remaining entry on the date, explicit ones included. Duplicate
/// (date, employee) entries stay separate and both count.
///
/// Groups are returned in ascending date order.
pub fn resolve_date_groups(entries: &[DutyEntry]) -> Vec<DateGroup<'_>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&DutyEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.has_employee()) {
        by_date.entry(entry.date).or_default().push(entry);
    }

    by_date
        .into_iter()
        .map(|(date, group)| {
            let head_count = group.len();
            let shares = group
                .into_iter()
                .map(|entry| ResolvedShare {
                    employee: entry.employee.trim(),
                    share: entry.share.resolve(head_count),
                })
                .collect();
            DateGroup { date, shares }
        })
        .collect()
}

/// Builds the per-employee unit totals.
///
/// Each date is classified once. The returned map is ordered by employee
/// name. The function holds no state, so repeated calls on the same input
/// return identical maps.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::aggregate;
/// use duty_pay_engine::models::{DutyEntry, HolidaySet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 11, 7).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
/// let entries = vec![
///     DutyEntry::derived(friday, "Alice"),
///     DutyEntry::derived(friday, "Bob"),
///     DutyEntry::derived(monday, "Alice"),
/// ];
///
/// let totals = aggregate(&entries, &HolidaySet::new());
/// assert_eq!(totals["Alice"].workday_units, Decimal::ONE);
/// assert_eq!(totals["Alice"].weekend_friday_units, Decimal::new(5, 1));
/// assert_eq!(totals["Bob"].weekend_friday_units, Decimal::new(5, 1));
/// ```
pub fn aggregate(
    entries: &[DutyEntry],
    holidays: &HolidaySet,
) -> BTreeMap<String, EmployeeAccumulator> {
    let mut totals: BTreeMap<String, EmployeeAccumulator> = BTreeMap::new();

    for group in resolve_date_groups(entries) {
        let category = classify(group.date, holidays).category();
        for resolved in group.shares {
            let acc = totals.entry(resolved.employee.to_string()).or_default();
            credit(acc, category, resolved.share);
        }
    }

    totals
}

fn credit(acc: &mut EmployeeAccumulator, category: DayCategory, share: Decimal) {
    match category {
        DayCategory::Workday => acc.workday_units += share,
        DayCategory::WeekendFriday => acc.weekend_friday_units += share,
        DayCategory::WeekendOther => acc.weekend_other_units += share,
    }
}
