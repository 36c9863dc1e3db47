//! HTTP API module for the duty pay engine.
//!
//! This module provides the REST API endpoints for calculating monthly duty
//! pay and listing the configured holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, HolidaysQuery};
pub use response::{ApiError, ApiErrorResponse, HolidayListResponse};
pub use state::AppState;
