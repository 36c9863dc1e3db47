//! Duty row normalization.
//!
//! Converts raw duty rows into [`DutyEntry`] values. Invalid rows are
//! skipped and reported; they never abort a run.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::models::{DutyEntry, RawCell, RawDate, RawDutyRow, Share, SkippedRow};

use super::parse_raw_date;

/// The outcome of normalizing a batch of duty rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDuties {
    /// Rows that became duty entries, in input order.
    pub entries: Vec<DutyEntry>,
    /// Rows that were rejected.
    pub skipped: Vec<SkippedRow>,
}

/// Normalizes raw duty rows.
///
/// A row is skipped when its date is missing or cannot be parsed, its
/// employee is blank or missing, or its share is unreadable or lies outside
/// `[0, 1]`. A missing or blank share becomes [`Share::Derived`]. Employee
/// names are trimmed.
///
/// # Example
///
/// ```
/// use duty_pay_engine::calculation::normalize_duty_rows;
/// use duty_pay_engine::models::{RawDate, RawDutyRow, Share};
///
/// let rows = vec![
///     RawDutyRow { date: RawDate::from("07.11.2025"), employee: Some("Alice".into()), share: Some("".into()) },
///     RawDutyRow { date: RawDate::Missing, employee: Some("Bob".into()), share: None },
/// ];
///
/// let normalized = normalize_duty_rows(&rows);
/// assert_eq!(normalized.entries.len(), 1);
/// assert_eq!(normalized.entries[0].share, Share::Derived);
/// assert_eq!(normalized.skipped[0].row, 1);
/// ```
pub fn normalize_duty_rows(rows: &[RawDutyRow]) -> NormalizedDuties {
    let mut normalized = NormalizedDuties::default();

    for (row, raw) in rows.iter().enumerate() {
        match normalize_row(row, raw) {
            Ok(entry) => normalized.entries.push(entry),
            Err(err) => normalized.skipped.push(SkippedRow {
                row,
                reason: err.to_string(),
            }),
        }
    }

    normalized
}

fn normalize_row(row: usize, raw: &RawDutyRow) -> Result<DutyEntry, EngineError> {
    let invalid = |message: String| EngineError::InvalidDutyEntry { row, message };

    let date = match &raw.date {
        RawDate::Missing => return Err(invalid("missing date".to_string())),
        other => parse_raw_date(other)
            .ok_or_else(|| invalid(format!("unparseable date {:?}", other)))?,
    };

    let employee = raw
        .employee
        .as_ref()
        .and_then(RawCell::text)
        .ok_or_else(|| invalid("missing employee".to_string()))?;

    let share = parse_share(raw.share.as_ref()).map_err(invalid)?;

    Ok(DutyEntry {
        date,
        employee,
        share,
    })
}

fn parse_share(cell: Option<&RawCell>) -> Result<Share, String> {
    let value = match cell {
        None => return Ok(Share::Derived),
        Some(cell) if cell.is_blank() => return Ok(Share::Derived),
        Some(RawCell::Number(value)) => *value,
        Some(RawCell::Text(text)) => Decimal::from_str(text.trim())
            .map_err(|_| format!("unparseable share {:?}", text))?,
        Some(RawCell::Other(value)) => return Err(format!("unparseable share {}", value)),
    };

    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(format!("share {} is outside [0, 1]", value));
    }
    Ok(Share::Explicit(value))
}
