//! Date classification for the weekend-threshold rule.
//!
//! A date is weekend-class when it falls on a Friday, Saturday or Sunday,
//! is a holiday, or is the day immediately before a holiday. Fridays are
//! tracked separately because the post-threshold deduction consumes Friday
//! units first.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidaySet;

/// The bucket a date's duty units are credited to.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::DayCategory;
///
/// let category = DayCategory::WeekendFriday;
/// assert!(category.is_weekend_class());
/// assert_eq!(format!("{}", category), "Weekend (Friday)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Not weekend-class; paid at the workday rate.
    Workday,
    /// A weekend-class Friday.
    WeekendFriday,
    /// Any other weekend-class day.
    WeekendOther,
}

impl DayCategory {
    /// Returns true for both weekend buckets.
    pub fn is_weekend_class(self) -> bool {
        !matches!(self, DayCategory::Workday)
    }
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Workday => write!(f, "Workday"),
            DayCategory::WeekendFriday => write!(f, "Weekend (Friday)"),
            DayCategory::WeekendOther => write!(f, "Weekend"),
        }
    }
}

/// The classification of a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayClassification {
    /// The date is in the holiday set.
    pub is_holiday: bool,
    /// The following date is in the holiday set.
    pub is_eve: bool,
    /// The date is a Friday.
    pub is_friday: bool,
    /// Friday, Saturday, Sunday, holiday or holiday eve.
    pub is_weekend_class: bool,
}

impl DayClassification {
    /// Returns the bucket the date's units belong to.
    pub fn category(&self) -> DayCategory {
        match (self.is_weekend_class, self.is_friday) {
            (false, _) => DayCategory::Workday,
            (true, true) => DayCategory::WeekendFriday,
            (true, false) => DayCategory::WeekendOther,
        }
    }
}

/// Classifies a date against a holiday set.
///
/// Total over every valid date. The last representable date has no
/// successor and is therefore never an eve.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::{classify, DayCategory};
/// use duty_pay_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// // 2025-11-01 (Allerheiligen) is a Saturday; 2025-10-31 is its eve and a Friday.
/// let holidays: HolidaySet = [NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()]
///     .into_iter()
///     .collect();
///
/// let eve = classify(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(), &holidays);
/// assert!(eve.is_eve);
/// assert_eq!(eve.category(), DayCategory::WeekendFriday);
///
/// // 2025-11-04 is a Tuesday with no nearby holiday.
/// let tuesday = classify(NaiveDate::from_ymd_opt(2025, 11, 4).unwrap(), &holidays);
/// assert_eq!(tuesday.category(), DayCategory::Workday);
/// ```
pub fn classify(date: NaiveDate, holidays: &HolidaySet) -> DayClassification {
    let weekday = date.weekday();
    let is_holiday = holidays.contains(date);
    let is_eve = date.succ_opt().is_some_and(|next| holidays.contains(next));
    let is_friday = weekday == Weekday::Fri;
    let is_weekend_day = matches!(weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun);

    DayClassification {
        is_holiday,
        is_eve,
        is_friday,
        is_weekend_class: is_weekend_day || is_holiday || is_eve,
    }
}

/// Returns a short human-readable label for a date.
///
/// Holiday and eve take precedence over the weekday name.
pub fn day_label(date: NaiveDate, holidays: &HolidaySet) -> String {
    let classification = classify(date, holidays);
    if classification.is_holiday {
        "holiday".to_string()
    } else if classification.is_eve {
        "holiday eve".to_string()
    } else {
        weekday_name(date.weekday()).to_string()
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holidays(dates: &[&str]) -> HolidaySet {
        dates.iter().map(|d| make_date(d)).collect()
    }

    // ==========================================================================
    // Weekday rules
    // ==========================================================================
    #[test]
    fn test_monday_to_thursday_are_workdays() {
        let none = HolidaySet::new();
        // 2025-11-03 is a Monday
        for day in ["2025-11-03", "2025-11-04", "2025-11-05", "2025-11-06"] {
            let c = classify(make_date(day), &none);
            assert!(!c.is_weekend_class, "{} should be a workday", day);
            assert_eq!(c.category(), DayCategory::Workday);
        }
    }

    #[test]
    fn test_friday_is_weekend_friday() {
        let c = classify(make_date("2025-11-07"), &HolidaySet::new());
        assert!(c.is_friday);
        assert!(c.is_weekend_class);
        assert_eq!(c.category(), DayCategory::WeekendFriday);
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend_other() {
        let none = HolidaySet::new();
        assert_eq!(
            classify(make_date("2025-11-08"), &none).category(),
            DayCategory::WeekendOther
        );
        assert_eq!(
            classify(make_date("2025-11-09"), &none).category(),
            DayCategory::WeekendOther
        );
    }

    // ==========================================================================
    // Holiday and eve rules
    // ==========================================================================
    #[test]
    fn test_weekday_holiday_is_weekend_class() {
        // 2025-12-25 is a Thursday
        let set = holidays(&["2025-12-25"]);
        let c = classify(make_date("2025-12-25"), &set);
        assert!(c.is_holiday);
        assert!(!c.is_friday);
        assert_eq!(c.category(), DayCategory::WeekendOther);
    }

    #[test]
    fn test_day_before_holiday_is_weekend_class() {
        // 2025-12-24 is a Wednesday, eve of Christmas
        let set = holidays(&["2025-12-25"]);
        let c = classify(make_date("2025-12-24"), &set);
        assert!(c.is_eve);
        assert!(!c.is_holiday);
        assert_eq!(c.category(), DayCategory::WeekendOther);
    }

    #[test]
    fn test_two_days_before_holiday_is_workday() {
        // 2025-12-23 is a Tuesday
        let set = holidays(&["2025-12-25"]);
        let c = classify(make_date("2025-12-23"), &set);
        assert!(!c.is_eve);
        assert_eq!(c.category(), DayCategory::Workday);
    }

    #[test]
    fn test_day_after_holiday_is_not_eve() {
        // 2025-06-10 is the Tuesday after Pfingstmontag
        let set = holidays(&["2025-06-09"]);
        let c = classify(make_date("2025-06-10"), &set);
        assert!(!c.is_eve);
        assert!(!c.is_holiday);
        assert_eq!(c.category(), DayCategory::Workday);
    }

    #[test]
    fn test_holiday_friday_counts_as_friday() {
        // 2025-04-18 (Karfreitag) is a Friday
        let set = holidays(&["2025-04-18"]);
        let c = classify(make_date("2025-04-18"), &set);
        assert!(c.is_holiday);
        assert_eq!(c.category(), DayCategory::WeekendFriday);
    }

    #[test]
    fn test_eve_across_month_boundary() {
        // 2025-10-31 is the eve of Allerheiligen on 2025-11-01
        let set = holidays(&["2025-11-01"]);
        assert!(classify(make_date("2025-10-31"), &set).is_eve);
    }

    #[test]
    fn test_eve_across_year_boundary() {
        // 2025-12-31 is a Wednesday, eve of Neujahr 2026
        let set = holidays(&["2026-01-01"]);
        let c = classify(make_date("2025-12-31"), &set);
        assert!(c.is_eve);
        assert_eq!(c.category(), DayCategory::WeekendOther);
    }

    #[test]
    fn test_max_date_is_never_eve() {
        let c = classify(NaiveDate::MAX, &HolidaySet::new());
        assert!(!c.is_eve);
    }

    // ==========================================================================
    // Labels
    // ==========================================================================
    #[test]
    fn test_day_label_prefers_holiday_then_eve() {
        let set = holidays(&["2025-12-25"]);
        assert_eq!(day_label(make_date("2025-12-25"), &set), "holiday");
        assert_eq!(day_label(make_date("2025-12-24"), &set), "holiday eve");
        assert_eq!(day_label(make_date("2025-12-27"), &set), "Saturday");
    }

    #[test]
    fn test_day_category_serialization() {
        let json = serde_json::to_string(&DayCategory::WeekendFriday).unwrap();
        assert_eq!(json, "\"weekend_friday\"");
    }

    // ==========================================================================
    // Properties
    // ==========================================================================
    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..3650).prop_map(|offset| make_date("2020-01-01") + chrono::Duration::days(offset))
    }

    proptest! {
        #[test]
        fn prop_weekend_class_iff_weekend_holiday_or_eve(
            date in any_date(),
            holiday_dates in proptest::collection::vec(any_date(), 0..20),
        ) {
            let set: HolidaySet = holiday_dates.iter().copied().collect();
            let c = classify(date, &set);
            let expected = matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
                || set.contains(date)
                || set.contains(date + chrono::Duration::days(1));
            prop_assert_eq!(c.is_weekend_class, expected);
        }

        #[test]
        fn prop_friday_flag_matches_iso_index(date in any_date()) {
            let c = classify(date, &HolidaySet::new());
            prop_assert_eq!(c.is_friday, date.weekday().num_days_from_monday() == 4);
        }
    }
}
