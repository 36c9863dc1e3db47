//! Duty Roster Pay Engine
//!
//! This crate computes monthly duty-roster compensation under the strict
//! weekend-threshold rule: weekend-class duty is only paid once an employee
//! reaches a monthly threshold of weekend units, a fixed deduction is then
//! taken (Friday units first), and missing the threshold forfeits the whole
//! month's payout.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
