//! Calculation logic for the duty pay engine.
//!
//! This module contains the input boundary (holiday loading and duty row
//! normalization), date classification, duty aggregation, the payout
//! engine, the daily share checks, and the payroll run that ties them
//! together.

mod date_classifier;
mod duty_aggregator;
mod duty_normalizer;
mod holiday_loader;
mod month;
mod payout_engine;
mod payroll;
mod share_checks;

pub use date_classifier::{DayCategory, DayClassification, classify, day_label};
pub use duty_aggregator::{DateGroup, ResolvedShare, aggregate, resolve_date_groups};
pub use duty_normalizer::{NormalizedDuties, normalize_duty_rows};
pub use holiday_loader::{HolidayLoad, load_holiday_set, normalize_holiday_rows, parse_raw_date};
pub use month::{filter_to_month, month_bounds};
pub use payout_engine::{EmployeePayout, UNIT_EPSILON, calculate_payout, payout};
pub use payroll::{OUTSIDE_MONTH, SKIPPED_ROW, run_payroll, skipped_row_warnings};
pub use share_checks::{SHARE_SUM_MISMATCH, check_daily_shares, share_warnings};
