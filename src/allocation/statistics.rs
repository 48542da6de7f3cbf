//! Aggregation of assignment lists into per-employee and period totals.

use crate::models::{Employee, EmployeeShiftStats, PeriodStats, ShiftAssignment};

/// Totals the assignments belonging to `employee_id`.
///
/// Assignments for other employees are ignored.
pub fn employee_stats(employee_id: &str, assignments: &[ShiftAssignment]) -> EmployeeShiftStats {
    let mut stats = EmployeeShiftStats::empty(employee_id);
    for assignment in assignments.iter().filter(|a| a.employee_id == employee_id) {
        stats.total_hours += assignment.hours;
        stats.total_shifts += 1;
        *stats.shift_types.entry(assignment.shift_type).or_insert(0) += 1;
    }
    stats
}

/// Summarizes a schedule over its roster.
///
/// `total_assignments` counts every assignment. Hours and the shift
/// distribution only include employees present in `employees`.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::{allocate_period, period_stats};
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
/// let stats = period_stats(&result.employees, &result.assignments);
///
/// assert_eq!(stats.total_employees, 1);
/// assert_eq!(stats.total_hours, 64.0);
/// ```
pub fn period_stats(employees: &[Employee], assignments: &[ShiftAssignment]) -> PeriodStats {
    let mut stats = PeriodStats {
        total_employees: employees.len(),
        total_assignments: assignments.len(),
        total_hours: 0.0,
        employee_stats: Default::default(),
        shift_distribution: Default::default(),
    };

    for emp in employees {
        let per_employee = employee_stats(&emp.id, assignments);
        stats.total_hours += per_employee.total_hours;
        for (shift_type, count) in &per_employee.shift_types {
            *stats.shift_distribution.entry(*shift_type).or_insert(0) += count;
        }
        stats.employee_stats.insert(emp.id.clone(), per_employee);
    }

    stats
}
