//! Availability resolution for a single employee, date and shift type.
//!
//! An entry matches when its inclusive date range contains the date and its
//! shift-type scope is empty or contains the shift type. All matching entries
//! are considered; their order is irrelevant.
//!
//! The two checks are independent. An employee may be both unavailable and
//! preferred for the same slot. Entries whose end date precedes their start
//! date never match and are therefore inert.

use chrono::NaiveDate;

use crate::models::{AvailabilityKind, Employee, ShiftType};

/// Returns true unless a matching entry marks the employee unavailable.
///
/// `available` and `preferred` entries never restrict availability.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::is_available;
/// use shift_allocator::models::{Availability, AvailabilityKind, Employee, ShiftType};
/// use chrono::NaiveDate;
///
/// let mut employee: Employee = serde_json::from_str(r#"{
///     "id": "emp1", "name": "John Doe", "email": "john@example.com",
///     "role": "Developer", "monthly_hours": 160
/// }"#).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert!(is_available(&employee, monday, ShiftType::FullDay));
///
/// employee.availability.push(Availability {
///     start_date: monday,
///     end_date: monday,
///     kind: AvailabilityKind::Unavailable,
///     reason: None,
///     shift_types: vec![],
/// });
/// assert!(!is_available(&employee, monday, ShiftType::FullDay));
/// ```
pub fn is_available(employee: &Employee, date: NaiveDate, shift_type: ShiftType) -> bool {
    !employee
        .availability
        .iter()
        .filter(|entry| entry.matches(date, shift_type))
        .any(|entry| entry.kind == AvailabilityKind::Unavailable)
}

/// Returns 1 if any matching entry is `preferred`, otherwise 0.
///
/// Several preferred entries do not stack.
pub fn preference_weight(employee: &Employee, date: NaiveDate, shift_type: ShiftType) -> u8 {
    let preferred = employee
        .availability
        .iter()
        .filter(|entry| entry.matches(date, shift_type))
        .any(|entry| entry.kind == AvailabilityKind::Preferred);
    u8::from(preferred)
}
