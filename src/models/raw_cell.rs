//! Untyped spreadsheet cells.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scalar cell as it arrives from an external source.
///
/// Deserializes from any value so that one odd cell only rejects its own
/// row, never the whole batch.
///
/// # Example
///
/// ```
/// use duty_pay_engine::models::RawCell;
///
/// let cell: RawCell = serde_json::from_str("\" Alice \"").unwrap();
/// assert_eq!(cell.text().as_deref(), Some("Alice"));
///
/// let blank: RawCell = serde_json::from_str("\"\"").unwrap();
/// assert!(blank.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// A number, or text that reads as one.
    Number(Decimal),
    /// Any other text.
    Text(String),
    /// A boolean, list or object.
    Other(serde_json::Value),
}

impl RawCell {
    /// Returns the trimmed cell text, or `None` for a blank or non-scalar cell.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            RawCell::Number(value) => value.normalize().to_string(),
            RawCell::Text(text) => text.trim().to_string(),
            RawCell::Other(_) => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    /// Returns true for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawCell::Text(text) if text.trim().is_empty())
    }
}

impl From<&str> for RawCell {
    fn from(text: &str) -> Self {
        RawCell::Text(text.to_string())
    }
}

impl From<Decimal> for RawCell {
    fn from(value: Decimal) -> Self {
        RawCell::Number(value)
    }
}
