//! Holiday models.
//!
//! This module contains the [`HolidayDate`] record, the raw [`RawHolidayRow`]
//! shape that arrives from external sources, and the normalized
//! [`HolidaySet`] consumed by the date classifier.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::RawCell;

/// A public holiday tagged with the region it applies to.
///
/// # Example
///
/// ```
/// use duty_pay_engine::models::HolidayDate;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayDate {
///     date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
///     name: "Allerheiligen".to_string(),
///     region: "NRW".to_string(),
/// };
/// assert!(holiday.applies_to("NRW"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDate {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Allerheiligen").
    #[serde(default)]
    pub name: String,
    /// The region code the holiday applies to (e.g., "NRW").
    pub region: String,
}

impl HolidayDate {
    /// Returns true if this holiday belongs to the given region.
    pub fn applies_to(&self, region: &str) -> bool {
        self.region.trim() == region.trim()
    }
}

/// A date-like value as it appears in an external source.
///
/// Spreadsheet exports mix native dates, date-times, German `DD.MM.YYYY`
/// text and serial day numbers in the same column. The holiday loader
/// resolves all of them to a [`NaiveDate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// An empty cell (`null` or no value at all).
    #[default]
    Missing,
    /// An already-typed calendar date.
    Date(NaiveDate),
    /// A date-time; only the date part is kept.
    DateTime(NaiveDateTime),
    /// A spreadsheet serial day number (1900 date system).
    Serial(f64),
    /// Free text in one of the supported date formats.
    Text(String),
    /// Any other value; never resolves to a date.
    Unrecognized(serde_json::Value),
}

impl From<NaiveDate> for RawDate {
    fn from(date: NaiveDate) -> Self {
        RawDate::Date(date)
    }
}

impl From<&str> for RawDate {
    fn from(text: &str) -> Self {
        RawDate::Text(text.to_string())
    }
}

/// An unvalidated holiday row from an external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHolidayRow {
    /// The date-like value.
    #[serde(default)]
    pub date: RawDate,
    /// The name of the holiday, if given.
    #[serde(default)]
    pub name: Option<RawCell>,
    /// The region code the holiday applies to.
    #[serde(default)]
    pub region: Option<RawCell>,
}

/// The normalized set of holiday dates for one region.
///
/// # Example
///
/// ```
/// use duty_pay_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// let set: HolidaySet = [christmas].into_iter().collect();
/// assert!(set.contains(christmas));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from the holidays that apply to `region`.
    pub fn for_region<'a, I>(holidays: I, region: &str) -> Self
    where
        I: IntoIterator<Item = &'a HolidayDate>,
    {
        holidays
            .into_iter()
            .filter(|h| h.applies_to(region))
            .map(|h| h.date)
            .collect()
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
