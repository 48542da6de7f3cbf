//! Core data models for the shift allocation engine.

mod employee;
mod schedule;
mod shift;
mod stats;

pub use employee::{
    Availability, AvailabilityKind, Employee, EmployeeInput, MAX_EMAIL_LENGTH, MAX_MONTHLY_HOURS,
    MAX_NAME_LENGTH,
};
pub use schedule::{PeriodAllocationResult, Schedule, ScheduleStatus};
pub use shift::{SHIFT_CATALOG, ShiftAssignment, ShiftDefinition, ShiftType, shift_definition};
pub use stats::{EmployeeShiftStats, PeriodStats};
