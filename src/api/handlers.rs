//! HTTP request handlers for the duty pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    load_holiday_set, normalize_duty_rows, normalize_holiday_rows, run_payroll,
    skipped_row_warnings,
};
use crate::config::RuleConfig;
use crate::error::EngineResult;
use crate::models::{CalculationResult, HolidayDate};

use super::request::{CalculationRequest, HolidaysQuery};
use super::response::{ApiError, ApiErrorResponse, HolidayListResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/holidays", get(holidays_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts duty rows and returns the rounded payroll report for the month.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let rules = match request_rules(state.config().rules(), &request) {
        Ok(rules) => rules,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected rule override"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();

    let holiday_load = match &request.holidays {
        Some(rows) => load_holiday_set(rows, &rules.region),
        None => state.config().holidays_for(&rules.region),
    };
    let duties = normalize_duty_rows(&request.duties);

    let mut report = run_payroll(&duties.entries, &holiday_load.set, &rules);
    report
        .warnings
        .extend(skipped_row_warnings("holidays", &holiday_load.skipped));
    report
        .warnings
        .extend(skipped_row_warnings("duties", &duties.skipped));

    if !duties.skipped.is_empty() || !holiday_load.skipped.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            skipped_duties = duties.skipped.len(),
            skipped_holidays = holiday_load.skipped.len(),
            "Skipped malformed input rows"
        );
    }

    let duration = start_time.elapsed();
    let result = CalculationResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        region: rules.region.clone(),
        report: report.rounded(),
        duration_us: duration.as_micros() as u64,
    };

    info!(
        correlation_id = %correlation_id,
        month = %rules.target_month,
        region = %rules.region,
        duties_count = duties.entries.len(),
        holidays_count = holiday_load.set.len(),
        total_payout = %result.report.total_payout(),
        duration_us = result.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Applies the request's month and region overrides to the configured rules.
fn request_rules(configured: &RuleConfig, request: &CalculationRequest) -> EngineResult<RuleConfig> {
    let mut rules = configured.clone();
    if let Some(month) = request.target_month {
        rules = rules.with_target_month(month)?;
    }
    if let Some(region) = request.region.as_deref() {
        rules = rules.with_region(region)?;
    }
    Ok(rules)
}

/// Handler for GET /holidays endpoint.
///
/// Lists the configured holidays of a region, with their names.
async fn holidays_handler(
    State(state): State<AppState>,
    Query(query): Query<HolidaysQuery>,
) -> Response {
    let config = state.config();
    let region = query
        .region
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(config.rules().region.as_str())
        .to_string();

    let (all, skipped) = normalize_holiday_rows(config.holiday_rows());
    let mut holidays: Vec<HolidayDate> = all.into_iter().filter(|h| h.applies_to(&region)).collect();
    holidays.sort_by_key(|h| h.date);
    holidays.dedup_by_key(|h| h.date);

    info!(region = %region, holidays_count = holidays.len(), "Listed holidays");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(HolidayListResponse {
            region,
            holidays,
            skipped,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(target_month: Option<&str>, region: Option<&str>) -> CalculationRequest {
        CalculationRequest {
            target_month: target_month.map(|m| NaiveDate::parse_from_str(m, "%Y-%m-%d").unwrap()),
            region: region.map(str::to_string),
            holidays: None,
            duties: vec![],
        }
    }

    #[test]
    fn test_request_rules_without_overrides_keeps_configuration() {
        let configured = RuleConfig::default();
        let rules = request_rules(&configured, &request(None, None)).unwrap();
        assert_eq!(rules, configured);
    }

    #[test]
    fn test_request_rules_applies_overrides() {
        let rules = request_rules(
            &RuleConfig::default(),
            &request(Some("2026-01-01"), Some(" NRW ")),
        )
        .unwrap();
        assert_eq!(rules.target_month, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(rules.region, "NRW");
    }

    #[test]
    fn test_request_rules_rejects_blank_region() {
        assert!(request_rules(&RuleConfig::default(), &request(None, Some(""))).is_err());
    }
}
