//! Request types for the shift allocation API.
//!
//! Employee bodies deserialize straight into [`crate::models::EmployeeInput`].
//! Availability bodies keep shift types as raw labels so an unknown label
//! is reported as such rather than as a generic JSON error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Availability, AvailabilityKind, ShiftType};

/// Request body for `POST /employees/:id/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// First day covered (inclusive).
    pub start_date: NaiveDate,
    /// Last day covered (inclusive).
    pub end_date: NaiveDate,
    /// Available, unavailable or preferred.
    #[serde(rename = "type")]
    pub kind: AvailabilityKind,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Shift-type labels; empty means all.
    #[serde(default)]
    pub shift_types: Vec<String>,
}

impl AvailabilityRequest {
    /// Parses the shift labels, failing with `UnknownShiftType` on the
    /// first label outside the catalog.
    pub fn into_availability(self) -> EngineResult<Availability> {
        let shift_types = self
            .shift_types
            .iter()
            .map(|label| label.parse::<ShiftType>())
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Availability {
            start_date: self.start_date,
            end_date: self.end_date,
            kind: self.kind,
            reason: self.reason,
            shift_types,
        })
    }
}

/// Request body for `POST /schedules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
}

/// Query string for `GET /schedules`.
///
/// With both bounds only overlapping schedules are listed. A single bound
/// is treated as a one-day window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// Window start.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Window end.
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl ScheduleQuery {
    /// The window to filter by, if any bound was given.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            (Some(day), None) | (None, Some(day)) => Some((day, day)),
            (None, None) => None,
        }
    }
}
