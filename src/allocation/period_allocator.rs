//! Allocation of a whole period, one workday at a time.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::models::{Employee, PeriodAllocationResult};

use super::calendar::{count_workdays, days_in_period, is_workday};
use super::day_allocator::{AllocationState, allocate_day};
use super::targets::calculate_targets;

/// Allocates shifts for every workday in `[start, end]`.
///
/// Days are walked in chronological order. Each workday sees the hours
/// assigned on the days before it, so employees who have fallen furthest
/// behind their target rank first.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::allocate_period;
/// use shift_allocator::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee: Employee = serde_json::from_str(r#"{
///     "id": "emp1", "name": "John Doe", "email": "john@example.com",
///     "role": "Developer", "monthly_hours": 160
/// }"#).unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
/// let result = allocate_period(&[employee], start, end);
///
/// assert_eq!(result.assignments.len(), 8);
/// assert_eq!(result.employees.len(), 1);
/// ```
pub fn allocate_period(
    employees: &[Employee],
    start: NaiveDate,
    end: NaiveDate,
) -> PeriodAllocationResult {
    allocate_period_with_state(employees, start, end).0
}

/// Like [`allocate_period`], also returning the final [`AllocationState`].
pub fn allocate_period_with_state(
    employees: &[Employee],
    start: NaiveDate,
    end: NaiveDate,
) -> (PeriodAllocationResult, AllocationState) {
    let mut state = AllocationState::new(employees);
    let mut assignments = Vec::new();

    let workdays = count_workdays(start, end);
    if workdays == 0 {
        warn!(%start, %end, "No workdays in period");
        let result = PeriodAllocationResult {
            assignments,
            employees: employees.to_vec(),
        };
        return (result, state);
    }

    let targets = calculate_targets(employees, start, end);
    debug!(
        %start,
        %end,
        employees = employees.len(),
        workdays,
        "Allocating period"
    );

    for date in days_in_period(start, end).filter(|d| is_workday(*d)) {
        assignments.extend(allocate_day(employees, date, &targets, &mut state));
    }

    info!(
        %start,
        %end,
        assignments = assignments.len(),
        total_hours = state.total_hours(),
        "Period allocated"
    );

    let result = PeriodAllocationResult {
        assignments,
        employees: employees.to_vec(),
    };
    (result, state)
}
