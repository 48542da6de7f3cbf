//! Response types for the shift allocation API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the small bodies of the health endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfig;
use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::InvalidConfig { .. } => (StatusCode::BAD_REQUEST, "INVALID_CONFIG"),
            EngineError::InvalidEmployee { .. } => (StatusCode::BAD_REQUEST, "INVALID_EMPLOYEE"),
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::EmployeeAlreadyExists { .. } => {
                (StatusCode::CONFLICT, "EMPLOYEE_ALREADY_EXISTS")
            }
            EngineError::InvalidAvailability { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_AVAILABILITY")
            }
            EngineError::AvailabilityNotFound { .. } => {
                (StatusCode::NOT_FOUND, "AVAILABILITY_NOT_FOUND")
            }
            EngineError::InvalidPeriod { .. } => (StatusCode::BAD_REQUEST, "INVALID_PERIOD"),
            EngineError::EmptyRoster => (StatusCode::BAD_REQUEST, "NO_ACTIVE_EMPLOYEES"),
            EngineError::ScheduleNotFound { .. } => (StatusCode::NOT_FOUND, "SCHEDULE_NOT_FOUND"),
            EngineError::ScheduleAlreadySent { .. } => {
                (StatusCode::CONFLICT, "SCHEDULE_ALREADY_SENT")
            }
            EngineError::UnknownShiftType { .. } => (StatusCode::BAD_REQUEST, "UNKNOWN_SHIFT_TYPE"),
            EngineError::WebhookError { .. } => (StatusCode::BAD_GATEWAY, "WEBHOOK_ERROR"),
        };

        let error = match error {
            EngineError::InvalidEmployee { field, .. } => ApiError::with_details(
                code,
                message,
                format!("Field '{field}' failed validation"),
            ),
            EngineError::InvalidConfig { field, .. } => ApiError::with_details(
                code,
                message,
                format!("Field '{field}' failed validation"),
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiError::with_details(code, "Configuration error", message)
            }
            _ => ApiError::new(code, message),
        };

        ApiErrorResponse { status, error }
    }
}

/// Body of `GET /health` and `GET /ready`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `ready`.
    pub status: String,
    /// Response time, RFC 3339.
    pub timestamp: String,
    /// Number of stored employees, present on readiness checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<usize>,
}

/// Body of `GET /company`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    /// The configured profile.
    pub config: CompanyConfig,
    /// The profile rendered as text.
    pub context: String,
}
