//! HTTP request handlers for the shift allocation API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::config::CompanyConfig;
use crate::models::{Employee, EmployeeInput, PeriodStats, Schedule};

use super::request::{AvailabilityRequest, GenerateScheduleRequest, ScheduleQuery};
use super::response::{ApiError, ApiErrorResponse, CompanyResponse, HealthResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/company", get(company_handler).put(update_company))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/availability", post(add_availability))
        .route(
            "/employees/:id/availability/:index",
            delete(remove_availability),
        )
        .route("/schedules", get(list_schedules).post(create_schedule))
        .route("/schedules/generate", post(generate_recurring_schedule))
        .route("/schedules/:id", get(get_schedule).delete(delete_schedule))
        .route("/schedules/:id/stats", get(schedule_stats))
        .route("/schedules/:id/send", post(send_schedule))
        .with_state(state)
}

/// Unwraps a JSON body, turning rejections into API errors.
///
/// A missing required field is a validation error; any other problem with
/// the body is reported as malformed JSON.
fn parse_body<T: DeserializeOwned>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn parse_schedule_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiErrorResponse::from(EngineError::ScheduleNotFound {
            id: raw.to_string(),
        })
    })
}

fn failed(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        employees: None,
    })
}

/// Handler for GET /ready.
///
/// Reads the employee store so a wedged lock shows up as a hung readiness check.
async fn ready_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let employees = state.employees().list().await.len();
    Json(HealthResponse {
        status: "ready".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        employees: Some(employees),
    })
}

fn company_response(config: CompanyConfig) -> CompanyResponse {
    let context = config.context_for_ai();
    CompanyResponse { config, context }
}

/// Handler for GET /company.
async fn company_handler(State(state): State<AppState>) -> Json<CompanyResponse> {
    Json(company_response(state.company().get().await))
}

/// Handler for PUT /company.
///
/// Replaces the whole profile. It is validated with the same rules as
/// `company.yaml`.
async fn update_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyConfig>, JsonRejection>,
) -> ApiResult<Json<CompanyResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Updating company profile");

    let config = parse_body(correlation_id, payload)?;
    let config = state
        .company()
        .update(config)
        .await
        .map_err(|e| failed(correlation_id, e))?;

    info!(correlation_id = %correlation_id, company = %config.company_name, "Company profile updated");
    Ok(Json(company_response(config)))
}

async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees().list().await)
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");

    let input = parse_body(correlation_id, payload)?;
    let employee = state
        .employees()
        .create(input)
        .await
        .map_err(|e| failed(correlation_id, e))?;

    info!(correlation_id = %correlation_id, employee_id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employees().get(&id).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Updating employee");

    let input = parse_body(correlation_id, payload)?;
    let employee = state
        .employees()
        .update(&id, input)
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok(Json(employee))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Deleting employee");

    state
        .employees()
        .delete(&id)
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Adding availability");

    let availability = parse_body(correlation_id, payload)?
        .into_availability()
        .map_err(|e| failed(correlation_id, e))?;
    let employee = state
        .employees()
        .add_availability(&id, availability)
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn remove_availability(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, String)>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, %index, "Removing availability");

    let index: usize = index.parse().map_err(|_| {
        ApiErrorResponse::bad_request(ApiError::validation_error(format!(
            "availability index must be a non-negative integer, got '{index}'"
        )))
    })?;
    let employee = state
        .employees()
        .remove_availability(&id, index)
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok(Json(employee))
}

async fn list_schedules(
    State(state): State<AppState>,
    query: Result<Query<ScheduleQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Schedule>>> {
    let Query(query) = query.map_err(|e| {
        ApiErrorResponse::bad_request(ApiError::validation_error(e.body_text()))
    })?;

    let schedules = match query.window() {
        Some((start, end)) => state.schedules().list_by_period(start, end).await,
        None => state.schedules().list().await,
    };
    Ok(Json(schedules))
}

async fn create_schedule(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScheduleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Schedule>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Generating schedule");

    let request = parse_body(correlation_id, payload)?;
    let schedule = state
        .schedules()
        .generate_schedule(request.period_start, request.period_end)
        .await
        .map_err(|e| failed(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        schedule_id = %schedule.id,
        assignments = schedule.assignments.len(),
        "Schedule generated"
    );
    Ok((StatusCode::CREATED, Json(schedule)))
}

async fn generate_recurring_schedule(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Schedule>)> {
    let correlation_id = Uuid::new_v4();
    let today = Utc::now().date_naive();
    info!(correlation_id = %correlation_id, %today, "Generating recurring schedule");

    let schedule = state
        .schedules()
        .generate_recurring_schedule(today, state.period_days())
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Schedule>> {
    let id = parse_schedule_id(&id)?;
    Ok(Json(state.schedules().get(id).await?))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, schedule_id = %id, "Deleting schedule");

    let id = parse_schedule_id(&id)?;
    state
        .schedules()
        .delete(id)
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn schedule_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PeriodStats>> {
    let id = parse_schedule_id(&id)?;
    let schedule = state.schedules().get(id).await?;
    Ok(Json(state.schedules().stats(&schedule)))
}

async fn send_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Schedule>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, schedule_id = %id, "Sending schedule");

    let id = parse_schedule_id(&id)?;
    let schedule = state
        .schedules()
        .send_schedule(id)
        .await
        .map_err(|e| failed(correlation_id, e))?;
    Ok(Json(schedule))
}
