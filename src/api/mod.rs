//! HTTP API module for the shift allocation service.
//!
//! This module provides the REST endpoints for managing employees,
//! generating schedules and delivering them to the webhook.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AvailabilityRequest, GenerateScheduleRequest, ScheduleQuery};
pub use response::{ApiError, ApiErrorResponse, CompanyResponse, HealthResponse};
pub use state::AppState;
