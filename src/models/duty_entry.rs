//! Duty entry models.
//!
//! A duty entry records that an employee covered (part of) the duty on a
//! date. The share is either given explicitly or left for the aggregator to
//! derive by splitting the date evenly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RawCell, RawDate};

/// The fraction of a date's duty covered by one entry.
///
/// Serializes as an optional decimal: `null` or a missing field means
/// [`Share::Derived`].
///
/// # Example
///
/// ```
/// use duty_pay_engine::models::Share;
/// use rust_decimal::Decimal;
///
/// let share: Share = serde_json::from_str("\"0.5\"").unwrap();
/// assert_eq!(share, Share::Explicit(Decimal::new(5, 1)));
///
/// let share: Share = serde_json::from_str("null").unwrap();
/// assert_eq!(share, Share::Derived);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum Share {
    /// A user-provided share, used as-is.
    Explicit(Decimal),
    /// Resolved to `1/N` among the N entries on the same date.
    #[default]
    Derived,
}

impl Share {
    /// Resolves the share for a date that carries `entries_on_date` entries.
    ///
    /// Returns zero if the date has no entries, which cannot happen for an
    /// entry that is itself part of the group.
    pub fn resolve(self, entries_on_date: usize) -> Decimal {
        match self {
            Share::Explicit(value) => value,
            Share::Derived if entries_on_date == 0 => Decimal::ZERO,
            Share::Derived => Decimal::ONE / Decimal::from(entries_on_date),
        }
    }
}

impl From<Option<Decimal>> for Share {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Share::Derived, Share::Explicit)
    }
}

impl From<Share> for Option<Decimal> {
    fn from(share: Share) -> Self {
        match share {
            Share::Explicit(value) => Some(value),
            Share::Derived => None,
        }
    }
}

/// A normalized duty entry.
///
/// # Example
///
/// ```
/// use duty_pay_engine::models::{DutyEntry, Share};
/// use chrono::NaiveDate;
///
/// let entry = DutyEntry::derived(NaiveDate::from_ymd_opt(2025, 11, 7).unwrap(), "Alice");
/// assert_eq!(entry.share, Share::Derived);
/// assert!(entry.has_employee());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyEntry {
    /// The date of the duty.
    pub date: NaiveDate,
    /// The employee identifier (name).
    pub employee: String,
    /// The share of the date's duty.
    #[serde(default)]
    pub share: Share,
}

impl DutyEntry {
    /// Creates an entry whose share is derived from the date's head count.
    pub fn derived(date: NaiveDate, employee: impl Into<String>) -> Self {
        Self {
            date,
            employee: employee.into(),
            share: Share::Derived,
        }
    }

    /// Creates an entry with an explicit share.
    pub fn explicit(date: NaiveDate, employee: impl Into<String>, share: Decimal) -> Self {
        Self {
            date,
            employee: employee.into(),
            share: Share::Explicit(share),
        }
    }

    /// Returns true if the entry names an employee.
    pub fn has_employee(&self) -> bool {
        !self.employee.trim().is_empty()
    }
}

/// An unvalidated duty row from an external source.
///
/// Every field accepts any value; the normalizer decides whether the row
/// is usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDutyRow {
    /// The date-like value.
    #[serde(default)]
    pub date: RawDate,
    /// The employee name, if filled in.
    #[serde(default)]
    pub employee: Option<RawCell>,
    /// The share, if filled in. A blank cell counts as not filled in.
    #[serde(default)]
    pub share: Option<RawCell>,
}
