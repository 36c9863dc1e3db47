//! Rows rejected at the input boundary.

use serde::{Deserialize, Serialize};

/// A raw input row that could not be normalized.
///
/// Skipped rows never stop a calculation; callers log them or surface them
/// as warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Zero-based position of the row in its source.
    pub row: usize,
    /// Why the row was rejected.
    pub reason: String,
}
