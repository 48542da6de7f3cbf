//! Greedy allocation of shifts for a single workday.
//!
//! Candidates are the available employees who still owe hours. They are
//! ranked by the percentage of their target still outstanding plus a flat
//! bonus for a matching preference, and the top [`DAILY_SHIFT_CAP`] each
//! receive one [`ALLOCATION_SHIFT_TYPE`] shift.
//!
//! The allocator knows nothing about other days. Fairness across a period
//! comes only from the [`AllocationState`] the caller threads through.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Employee, ShiftAssignment, ShiftType};

use super::availability::{is_available, preference_weight};

/// The shift type every allocated shift uses.
pub const ALLOCATION_SHIFT_TYPE: ShiftType = ShiftType::FullDay;

/// Maximum number of shifts assigned on one day.
pub const DAILY_SHIFT_CAP: usize = 3;

/// Score added when the employee prefers the slot.
pub const PREFERENCE_BONUS: f64 = 10.0;

/// Hours assigned so far in one allocation run, keyed by employee id.
///
/// Owned by a single period allocation and discarded afterward; nothing
/// carries over between periods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationState {
    assigned_hours: HashMap<String, f64>,
}

impl AllocationState {
    /// Starts every employee on the roster at zero hours.
    pub fn new(employees: &[Employee]) -> Self {
        Self {
            assigned_hours: employees.iter().map(|e| (e.id.clone(), 0.0)).collect(),
        }
    }

    /// Hours assigned to `employee_id` so far. Unknown ids have zero.
    pub fn assigned_hours(&self, employee_id: &str) -> f64 {
        self.assigned_hours.get(employee_id).copied().unwrap_or(0.0)
    }

    /// Adds `hours` to the running total for `employee_id`.
    pub fn add_hours(&mut self, employee_id: &str, hours: f64) {
        *self
            .assigned_hours
            .entry(employee_id.to_string())
            .or_insert(0.0) += hours;
    }

    /// Sum of all assigned hours.
    pub fn total_hours(&self) -> f64 {
        self.assigned_hours.values().sum()
    }
}

/// Computes an employee's ranking score.
///
/// `needed / target * 100` plus [`PREFERENCE_BONUS`] per preference point.
/// A non-positive target contributes 0 instead of dividing by zero.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::ranking_score;
///
/// assert_eq!(ranking_score(80.0, 40.0, 0), 50.0);
/// assert_eq!(ranking_score(80.0, 40.0, 1), 60.0);
/// assert_eq!(ranking_score(0.0, 8.0, 0), 0.0);
/// ```
pub fn ranking_score(target: f64, needed: f64, preference: u8) -> f64 {
    let percent_needed = if target > 0.0 {
        (needed / target) * 100.0
    } else {
        0.0
    };
    percent_needed + f64::from(preference) * PREFERENCE_BONUS
}

#[derive(Debug)]
struct Candidate<'a> {
    employee: &'a Employee,
    hours_needed: f64,
    score: f64,
}

/// Assigns shifts for one date and records the hours in `state`.
///
/// Employees without an entry in `targets` are treated as owing nothing.
/// Equal scores are ordered by employee id ascending.
pub fn allocate_day(
    employees: &[Employee],
    date: NaiveDate,
    targets: &HashMap<String, f64>,
    state: &mut AllocationState,
) -> Vec<ShiftAssignment> {
    let shift_type = ALLOCATION_SHIFT_TYPE;
    let mut candidates: Vec<Candidate<'_>> = Vec::new();

    for emp in employees {
        if !is_available(emp, date, shift_type) {
            debug!(employee = %emp.name, %date, "Employee unavailable, skipping");
            continue;
        }

        let target = targets.get(&emp.id).copied().unwrap_or(0.0);
        let needed = target - state.assigned_hours(&emp.id);
        if needed <= 0.0 {
            continue;
        }

        let preference = preference_weight(emp, date, shift_type);
        candidates.push(Candidate {
            employee: emp,
            hours_needed: needed,
            score: ranking_score(target, needed, preference),
        });
    }

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.employee.id.cmp(&b.employee.id))
    });

    let definition = shift_type.definition();
    candidates
        .iter()
        .take(DAILY_SHIFT_CAP)
        .map(|candidate| {
            let emp = candidate.employee;
            debug!(
                employee = %emp.name,
                %date,
                hours_needed = candidate.hours_needed,
                score = candidate.score,
                "Assigning shift"
            );
            state.add_hours(&emp.id, definition.hours);
            ShiftAssignment::new(emp.id.clone(), emp.name.clone(), date, definition)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, AvailabilityKind};

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            email: format!("{id}@example.com"),
            role: "Staff".to_string(),
            role_description: String::new(),
            monthly_hours: 160,
            active: true,
            availability: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn whole_day(kind: AvailabilityKind) -> Availability {
        Availability {
            start_date: monday(),
            end_date: monday(),
            kind,
            reason: None,
            shift_types: vec![],
        }
    }

    fn uniform_targets(employees: &[Employee], hours: f64) -> HashMap<String, f64> {
        employees.iter().map(|e| (e.id.clone(), hours)).collect()
    }

    fn assigned_ids(assignments: &[ShiftAssignment]) -> Vec<&str> {
        assignments.iter().map(|a| a.employee_id.as_str()).collect()
    }

    #[test]
    fn test_two_employees_each_get_a_full_day() {
        let roster = vec![employee("A"), employee("B")];
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assigned_ids(&assignments), vec!["A", "B"]);
        for assignment in &assignments {
            assert_eq!(assignment.shift_type, ShiftType::FullDay);
            assert_eq!(assignment.start_time, "09:00");
            assert_eq!(assignment.end_time, "17:00");
            assert_eq!(assignment.hours, 8.0);
            assert_eq!(assignment.date, monday());
        }
        assert_eq!(state.assigned_hours("A"), 8.0);
        assert_eq!(state.assigned_hours("B"), 8.0);
    }

    #[test]
    fn test_daily_cap_limits_assignments() {
        let roster: Vec<_> = ["a", "b", "c", "d", "e"].into_iter().map(employee).collect();
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assignments.len(), DAILY_SHIFT_CAP);
        assert_eq!(state.assigned_hours("d"), 0.0);
        assert_eq!(state.assigned_hours("e"), 0.0);
    }

    #[test]
    fn test_ties_break_by_id_regardless_of_roster_order() {
        let roster: Vec<_> = ["d", "c", "b", "a"].into_iter().map(employee).collect();
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assigned_ids(&assignments), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_higher_outstanding_share_ranks_first() {
        let roster: Vec<_> = ["a", "b", "c", "d"].into_iter().map(employee).collect();
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);
        state.add_hours("a", 40.0);
        state.add_hours("b", 16.0);
        state.add_hours("c", 8.0);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assigned_ids(&assignments), vec!["d", "c", "b"]);
        assert_eq!(state.assigned_hours("a"), 40.0);
    }

    #[test]
    fn test_preference_bonus_lifts_candidate() {
        let mut roster: Vec<_> = ["a", "b", "c", "d"].into_iter().map(employee).collect();
        roster[3].availability.push(whole_day(AvailabilityKind::Preferred));
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assigned_ids(&assignments), vec!["d", "a", "b"]);
    }

    #[test]
    fn test_unavailable_employee_is_skipped() {
        let mut roster = vec![employee("a"), employee("b")];
        roster[0].availability.push(whole_day(AvailabilityKind::Unavailable));
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assigned_ids(&assignments), vec!["b"]);
        assert_eq!(state.assigned_hours("a"), 0.0);
    }

    #[test]
    fn test_unavailable_and_preferred_is_still_skipped() {
        let mut roster = vec![employee("a")];
        roster[0].availability.push(whole_day(AvailabilityKind::Unavailable));
        roster[0].availability.push(whole_day(AvailabilityKind::Preferred));
        let targets = uniform_targets(&roster, 80.0);
        let mut state = AllocationState::new(&roster);

        assert!(allocate_day(&roster, monday(), &targets, &mut state).is_empty());
    }

    #[test]
    fn test_employees_with_met_targets_are_skipped() {
        let roster = vec![employee("a"), employee("b")];
        let targets = uniform_targets(&roster, 16.0);
        let mut state = AllocationState::new(&roster);
        state.add_hours("a", 16.0);

        let assignments = allocate_day(&roster, monday(), &targets, &mut state);

        assert_eq!(assigned_ids(&assignments), vec!["b"]);
    }

    #[test]
    fn test_zero_target_yields_nothing() {
        let roster = vec![employee("a")];
        let targets = uniform_targets(&roster, 0.0);
        let mut state = AllocationState::new(&roster);

        assert!(allocate_day(&roster, monday(), &targets, &mut state).is_empty());
    }

    #[test]
    fn test_missing_target_counts_as_zero() {
        let roster = vec![employee("a")];
        let mut state = AllocationState::new(&roster);

        assert!(allocate_day(&roster, monday(), &HashMap::new(), &mut state).is_empty());
    }

    #[test]
    fn test_ranking_score_guards_zero_target() {
        assert_eq!(ranking_score(0.0, 0.0, 0), 0.0);
        assert_eq!(ranking_score(0.0, 8.0, 1), PREFERENCE_BONUS);
        assert_eq!(ranking_score(-4.0, 8.0, 0), 0.0);
    }

    #[test]
    fn test_state_tracks_unknown_ids() {
        let mut state = AllocationState::default();
        assert_eq!(state.assigned_hours("ghost"), 0.0);
        state.add_hours("ghost", 8.0);
        state.add_hours("ghost", 8.0);
        assert_eq!(state.assigned_hours("ghost"), 16.0);
        assert_eq!(state.total_hours(), 16.0);
    }
}
