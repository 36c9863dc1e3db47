//! Holiday set loading.
//!
//! Turns heterogeneous holiday rows into the [`HolidaySet`] for one region.
//! Date parsing lives here too because duty rows arrive in the same mixed
//! formats.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use crate::models::{HolidayDate, HolidaySet, RawCell, RawDate, RawHolidayRow, SkippedRow};

const TEXT_DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

const TEXT_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Serial 60 is 1900-02-29 in the 1900 date system, a day that never existed.
const PHANTOM_LEAP_DAY_SERIAL: i64 = 60;

/// Largest serial accepted (9999-12-31).
const MAX_SERIAL: f64 = 2_958_465.0;

/// The outcome of loading holiday rows for one region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayLoad {
    /// Dates of the holidays that apply to the region.
    pub set: HolidaySet,
    /// Rows whose date could not be parsed.
    pub skipped: Vec<SkippedRow>,
}

/// Resolves a date-like value to a calendar date.
///
/// Returns `None` for an empty cell, text in an unsupported format, serials
/// outside the 1900 date system, and the phantom 1900-02-29.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::parse_raw_date;
/// use duty_pay_engine::models::RawDate;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 11, 1);
/// assert_eq!(parse_raw_date(&RawDate::from("01.11.2025")), expected);
/// assert_eq!(parse_raw_date(&RawDate::from(" 2025-11-01 ")), expected);
/// assert_eq!(parse_raw_date(&RawDate::Serial(45962.0)), expected);
/// assert_eq!(parse_raw_date(&RawDate::from("first of November")), None);
/// ```
pub fn parse_raw_date(raw: &RawDate) -> Option<NaiveDate> {
    match raw {
        RawDate::Date(date) => Some(*date),
        RawDate::DateTime(datetime) => Some(datetime.date()),
        RawDate::Serial(serial) => serial_to_date(*serial),
        RawDate::Text(text) => parse_date_text(text),
        RawDate::Missing | RawDate::Unrecognized(_) => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in TEXT_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in TEXT_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }

    // Spreadsheet exports sometimes write the serial as text
    text.parse::<f64>().ok().and_then(serial_to_date)
}

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_SERIAL {
        return None;
    }

    let day = serial.floor() as i64;
    let (epoch, offset) = match day {
        PHANTOM_LEAP_DAY_SERIAL => return None,
        d if d < PHANTOM_LEAP_DAY_SERIAL => (NaiveDate::from_ymd_opt(1899, 12, 31)?, d),
        d => (NaiveDate::from_ymd_opt(1899, 12, 30)?, d),
    };
    epoch.checked_add_days(Days::new(u64::try_from(offset).ok()?))
}

/// Normalizes holiday rows, keeping every region.
///
/// Returns the parsed holidays and the rows whose date or region could not
/// be read.
pub fn normalize_holiday_rows(rows: &[RawHolidayRow]) -> (Vec<HolidayDate>, Vec<SkippedRow>) {
    let mut holidays = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (row, raw) in rows.iter().enumerate() {
        match normalize_holiday_row(raw) {
            Ok(holiday) => holidays.push(holiday),
            Err(reason) => skipped.push(SkippedRow { row, reason }),
        }
    }

    (holidays, skipped)
}

fn normalize_holiday_row(raw: &RawHolidayRow) -> Result<HolidayDate, String> {
    let date = match &raw.date {
        RawDate::Missing => return Err("missing holiday date".to_string()),
        other => parse_raw_date(other)
            .ok_or_else(|| format!("unparseable holiday date {:?}", other))?,
    };

    let region = raw
        .region
        .as_ref()
        .and_then(RawCell::text)
        .ok_or_else(|| "missing holiday region".to_string())?;

    Ok(HolidayDate {
        date,
        name: raw.name.as_ref().and_then(RawCell::text).unwrap_or_default(),
        region,
    })
}

/// Builds the holiday set for `region` from raw rows.
///
/// Rows for other regions are dropped silently; rows with an unreadable
/// date or region are reported in [`HolidayLoad::skipped`].
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::load_holiday_set;
/// use duty_pay_engine::models::{RawDate, RawHolidayRow};
///
/// let rows = vec![
///     RawHolidayRow { date: RawDate::from("25.12.2025"), name: None, region: Some("NRW".into()) },
///     RawHolidayRow { date: RawDate::from("19.11.2025"), name: None, region: Some("SN".into()) },
///     RawHolidayRow { date: RawDate::from("not a date"), name: None, region: Some("NRW".into()) },
/// ];
///
/// let load = load_holiday_set(&rows, "NRW");
/// assert_eq!(load.set.len(), 1);
/// assert_eq!(load.skipped.len(), 1);
/// assert_eq!(load.skipped[0].row, 2);
/// ```
pub fn load_holiday_set(rows: &[RawHolidayRow], region: &str) -> HolidayLoad {
    let (holidays, skipped) = normalize_holiday_rows(rows);
    HolidayLoad {
        set: HolidaySet::for_region(&holidays, region),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn row(date: RawDate, region: &str) -> RawHolidayRow {
        RawHolidayRow {
            date,
            name: Some(RawCell::from("Test")),
            region: Some(RawCell::from(region)),
        }
    }

    // ==========================================================================
    // Date parsing
    // ==========================================================================
    #[test]
    fn test_parse_native_date_and_datetime() {
        let date = make_date("2025-12-25");
        assert_eq!(parse_raw_date(&RawDate::Date(date)), Some(date));

        let datetime = date.and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(parse_raw_date(&RawDate::DateTime(datetime)), Some(date));
    }

    #[test]
    fn test_parse_german_and_iso_text() {
        let expected = Some(make_date("2025-04-18"));
        assert_eq!(parse_raw_date(&RawDate::from("18.04.2025")), expected);
        assert_eq!(parse_raw_date(&RawDate::from("2025-04-18")), expected);
        assert_eq!(parse_raw_date(&RawDate::from("  18.04.2025\t")), expected);
    }

    #[test]
    fn test_parse_datetime_text_drops_time() {
        let expected = Some(make_date("2025-04-18"));
        assert_eq!(parse_raw_date(&RawDate::from("2025-04-18T00:00:00")), expected);
        assert_eq!(parse_raw_date(&RawDate::from("2025-04-18 12:30:00.250")), expected);
        assert_eq!(parse_raw_date(&RawDate::from("18.04.2025 08:15")), expected);
        assert_eq!(parse_raw_date(&RawDate::from("2025-04-18T10:00:00+02:00")), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_raw_date(&RawDate::from("")), None);
        assert_eq!(parse_raw_date(&RawDate::from("31.02.2025")), None);
        assert_eq!(parse_raw_date(&RawDate::from("Weihnachten")), None);
    }

    #[test]
    fn test_serial_dates_use_1900_system() {
        assert_eq!(parse_raw_date(&RawDate::Serial(1.0)), Some(make_date("1900-01-01")));
        assert_eq!(parse_raw_date(&RawDate::Serial(59.0)), Some(make_date("1900-02-28")));
        assert_eq!(parse_raw_date(&RawDate::Serial(61.0)), Some(make_date("1900-03-01")));
        assert_eq!(parse_raw_date(&RawDate::Serial(46016.0)), Some(make_date("2025-12-25")));
    }

    #[test]
    fn test_serial_time_fraction_is_ignored() {
        assert_eq!(parse_raw_date(&RawDate::Serial(45962.75)), Some(make_date("2025-11-01")));
    }

    #[test]
    fn test_serial_out_of_range_is_rejected() {
        assert_eq!(parse_raw_date(&RawDate::Serial(0.0)), None);
        assert_eq!(parse_raw_date(&RawDate::Serial(-3.0)), None);
        assert_eq!(parse_raw_date(&RawDate::Serial(60.0)), None);
        assert_eq!(parse_raw_date(&RawDate::Serial(f64::NAN)), None);
        assert_eq!(parse_raw_date(&RawDate::Serial(1.0e9)), None);
    }

    #[test]
    fn test_serial_written_as_text() {
        assert_eq!(parse_raw_date(&RawDate::from("45962")), Some(make_date("2025-11-01")));
    }

    // ==========================================================================
    // Loading
    // ==========================================================================
    #[test]
    fn test_load_filters_region_and_collapses_duplicates() {
        let rows = vec![
            row(RawDate::from("25.12.2025"), "NRW"),
            row(RawDate::Date(make_date("2025-12-25")), "NRW"),
            row(RawDate::from("2025-11-19"), "SN"),
            row(RawDate::Serial(45962.0), " NRW "),
        ];

        let load = load_holiday_set(&rows, "NRW");
        assert!(load.skipped.is_empty());
        assert_eq!(load.set.len(), 2);
        assert!(load.set.contains(make_date("2025-11-01")));
        assert!(!load.set.contains(make_date("2025-11-19")));
    }

    #[test]
    fn test_unparseable_rows_are_reported_not_fatal() {
        let rows = vec![
            row(RawDate::from("??"), "SN"),
            row(RawDate::from("01.01.2026"), "NRW"),
        ];

        let load = load_holiday_set(&rows, "NRW");
        assert_eq!(load.set.len(), 1);
        assert_eq!(load.skipped.len(), 1);
        assert_eq!(load.skipped[0].row, 0);
        assert!(load.skipped[0].reason.contains("??"));
    }

    #[test]
    fn test_normalize_keeps_names_and_trims_region() {
        let rows = vec![RawHolidayRow {
            date: RawDate::from("03.10.2025"),
            name: None,
            region: Some(RawCell::from(" NRW ")),
        }];

        let (holidays, skipped) = normalize_holiday_rows(&rows);
        assert!(skipped.is_empty());
        assert_eq!(holidays[0].name, "");
        assert_eq!(holidays[0].region, "NRW");
    }

    #[test]
    fn test_missing_date_or_region_is_skipped() {
        let rows = vec![
            row(RawDate::Missing, "NRW"),
            RawHolidayRow {
                date: RawDate::from("03.10.2025"),
                name: None,
                region: None,
            },
            row(RawDate::from("   "), "NRW"),
            row(RawDate::from("25.12.2025"), "NRW"),
        ];

        let load = load_holiday_set(&rows, "NRW");
        assert_eq!(load.set.len(), 1);
        let reasons: Vec<&str> = load.skipped.iter().map(|s| s.reason.as_str()).collect();
        assert_eq!(reasons[0], "missing holiday date");
        assert_eq!(reasons[1], "missing holiday region");
        assert!(reasons[2].starts_with("unparseable holiday date"));
    }

    #[test]
    fn test_unrecognized_date_value_is_rejected() {
        let raw = RawDate::Unrecognized(serde_json::json!({"year": 2025}));
        assert_eq!(parse_raw_date(&raw), None);
        assert_eq!(parse_raw_date(&RawDate::Missing), None);
    }

    #[test]
    fn test_unknown_region_gives_empty_set() {
        let rows = vec![row(RawDate::from("25.12.2025"), "NRW")];
        assert!(load_holiday_set(&rows, "BY").set.is_empty());
    }
}
