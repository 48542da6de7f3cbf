//! Per-employee target hours for a period.
//!
//! Targets prorate each employee's monthly hours by the period length
//! relative to a nominal 30-day month. The length is `end - start` in days,
//! so a single-day period has a target of zero.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::Employee;

/// Length of the nominal month used for prorating, in days.
pub const NOMINAL_MONTH_DAYS: f64 = 30.0;

/// Returns the fraction of a nominal month covered by `[start, end]`.
///
/// Negative when `end < start`.
pub fn month_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / NOMINAL_MONTH_DAYS
}

/// Computes the target hours owed by each employee over the period.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::calculate_targets;
/// use shift_allocator::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee: Employee = serde_json::from_str(r#"{
///     "id": "emp1", "name": "John Doe", "email": "john@example.com",
///     "role": "Developer", "monthly_hours": 150
/// }"#).unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
/// let targets = calculate_targets(&[employee], start, end);
///
/// assert_eq!(targets["emp1"], 75.0);
/// ```
pub fn calculate_targets(
    employees: &[Employee],
    start: NaiveDate,
    end: NaiveDate,
) -> HashMap<String, f64> {
    let fraction = month_fraction(start, end);
    employees
        .iter()
        .map(|emp| (emp.id.clone(), f64::from(emp.monthly_hours) * fraction))
        .collect()
}
