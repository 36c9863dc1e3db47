//! Per-employee unit totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running unit totals for one employee over one month.
///
/// Built by the duty aggregator and read by the payout engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAccumulator {
    /// Units worked on workdays.
    pub workday_units: Decimal,
    /// Weekend-class units worked on Fridays.
    pub weekend_friday_units: Decimal,
    /// Weekend-class units worked on any other day.
    pub weekend_other_units: Decimal,
}

impl EmployeeAccumulator {
    /// Total weekend-class units (Friday plus other).
    ///
    /// # Example
    ///
    /// ```
    /// use duty_pay_engine::models::EmployeeAccumulator;
    /// use rust_decimal::Decimal;
    ///
    /// let acc = EmployeeAccumulator {
    ///     workday_units: Decimal::ONE,
    ///     weekend_friday_units: Decimal::ONE,
    ///     weekend_other_units: Decimal::TWO,
    /// };
    /// assert_eq!(acc.weekend_total(), Decimal::from(3));
    /// ```
    pub fn weekend_total(&self) -> Decimal {
        self.weekend_friday_units + self.weekend_other_units
    }
}
