//! Request types for the duty pay engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/holidays` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RawDutyRow, RawHolidayRow};

/// Request body for the `/calculate` endpoint.
///
/// Only `duties` is required. The other fields override the server's
/// configuration for this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The month to calculate; must be the first day of the month.
    #[serde(default)]
    pub target_month: Option<NaiveDate>,
    /// The region whose holidays apply.
    #[serde(default)]
    pub region: Option<String>,
    /// Holiday rows replacing the configured calendar.
    #[serde(default)]
    pub holidays: Option<Vec<RawHolidayRow>>,
    /// The duty rows to calculate.
    pub duties: Vec<RawDutyRow>,
}

/// Query parameters for the `/holidays` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysQuery {
    /// The region to list; defaults to the configured region.
    #[serde(default)]
    pub region: Option<String>,
}
