//! Core data models for the duty pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accumulator;
mod calculation_result;
mod duty_entry;
mod holiday;
mod raw_cell;
mod skipped_row;

pub use accumulator::EmployeeAccumulator;
pub use calculation_result::{
    AuditStep, AuditWarning, CalculationResult, CheckStatus, OUTPUT_DECIMAL_PLACES,
    PayoutResult, PayrollReport, ShareCheck,
};
pub use duty_entry::{DutyEntry, RawDutyRow, Share};
pub use holiday::{HolidayDate, HolidaySet, RawDate, RawHolidayRow};
pub use raw_cell::RawCell;
pub use skipped_row::SkippedRow;
