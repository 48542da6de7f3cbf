//! Derived statistics over an assignment list.
//!
//! These are never persisted; they are recomputed on demand by
//! [`crate::allocation::employee_stats`] and
//! [`crate::allocation::period_stats`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ShiftType;

/// Per-employee totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeShiftStats {
    /// The employee these totals belong to.
    pub employee_id: String,
    /// Sum of assignment hours.
    pub total_hours: f64,
    /// Number of assignments.
    pub total_shifts: usize,
    /// Assignment count per shift type.
    pub shift_types: BTreeMap<ShiftType, usize>,
}

impl EmployeeShiftStats {
    /// Zeroed totals for `employee_id`.
    pub fn empty(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            total_hours: 0.0,
            total_shifts: 0,
            shift_types: BTreeMap::new(),
        }
    }
}

/// Period-level totals for a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Employees in the roster snapshot.
    pub total_employees: usize,
    /// Assignments in the schedule.
    pub total_assignments: usize,
    /// Hours summed over the roster's employees.
    pub total_hours: f64,
    /// Per-employee totals keyed by employee id.
    pub employee_stats: BTreeMap<String, EmployeeShiftStats>,
    /// Assignment count per shift type across the roster.
    pub shift_distribution: BTreeMap<ShiftType, usize>,
}
