//! Error types for the shift allocation engine.
//!
//! The allocation core itself never fails; these errors come from the
//! boundaries around it: configuration loading, the employee and schedule
//! services, webhook delivery and the HTTP layer.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift allocation engine.
///
/// # Example
///
/// ```
/// use shift_allocator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, dotted from the file root.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Another employee already uses this email address.
    #[error("An employee with email '{email}' already exists")]
    EmployeeAlreadyExists {
        /// The conflicting (normalized) email.
        email: String,
    },

    /// An availability entry was rejected before being stored.
    #[error("Invalid availability: {message}")]
    InvalidAvailability {
        /// A description of the problem.
        message: String,
    },

    /// An availability index was out of range for the employee.
    #[error("Availability entry {index} not found for employee {employee_id}")]
    AvailabilityNotFound {
        /// The employee whose entries were searched.
        employee_id: String,
        /// The requested position.
        index: usize,
    },

    /// The requested schedule period ends before it starts.
    #[error("Invalid schedule period: end {end} is before start {start}")]
    InvalidPeriod {
        /// Period start.
        start: NaiveDate,
        /// Period end.
        end: NaiveDate,
    },

    /// There are no active employees to allocate shifts to.
    #[error("No active employees found")]
    EmptyRoster,

    /// No schedule exists with the given identifier.
    #[error("Schedule not found: {id}")]
    ScheduleNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The schedule was already delivered to the webhook.
    #[error("Schedule {id} has already been sent")]
    ScheduleAlreadySent {
        /// The schedule identifier.
        id: String,
    },

    /// A shift-type label is not part of the catalog.
    #[error("Unknown shift type: {label}")]
    UnknownShiftType {
        /// The label that failed to parse.
        label: String,
    },

    /// Delivering a schedule to the webhook failed.
    #[error("Webhook delivery failed: {message}")]
    WebhookError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
