//! JSON body delivered to the schedule webhook.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::allocation::period_stats;
use crate::models::{Schedule, ShiftAssignment};

/// One roster entry with the totals assigned in the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEmployee {
    /// Employee id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Job role.
    pub role: String,
    /// Longer role description.
    pub role_description: String,
    /// Monthly hours target.
    pub monthly_hours: u32,
    /// Hours assigned in the schedule.
    pub assigned_hours: f64,
    /// Shifts assigned in the schedule.
    pub assigned_shifts: usize,
}

/// A schedule as delivered to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayload {
    /// Schedule id.
    pub schedule_id: String,
    /// Period start as RFC 3339, midnight UTC.
    pub period_start: String,
    /// Period end as RFC 3339, midnight UTC.
    pub period_end: String,
    /// Roster snapshot with per-employee totals.
    pub employees: Vec<WebhookEmployee>,
    /// Every assignment in the schedule.
    pub assignments: Vec<ShiftAssignment>,
    /// Number of assignments.
    pub total_shifts: usize,
    /// Hours over the roster.
    pub total_hours: f64,
    /// When the payload was built, RFC 3339.
    pub generated_at: String,
}

fn rfc3339_midnight(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc3339()
}

impl SchedulePayload {
    /// Builds the payload for `schedule`, stamped with `generated_at`.
    pub fn from_schedule(schedule: &Schedule, generated_at: DateTime<Utc>) -> Self {
        let stats = period_stats(&schedule.employees, &schedule.assignments);

        let employees = schedule
            .employees
            .iter()
            .map(|emp| {
                let (assigned_hours, assigned_shifts) = stats
                    .employee_stats
                    .get(&emp.id)
                    .map(|s| (s.total_hours, s.total_shifts))
                    .unwrap_or_default();
                WebhookEmployee {
                    id: emp.id.clone(),
                    name: emp.name.clone(),
                    email: emp.email.clone(),
                    role: emp.role.clone(),
                    role_description: emp.role_description.clone(),
                    monthly_hours: emp.monthly_hours,
                    assigned_hours,
                    assigned_shifts,
                }
            })
            .collect();

        Self {
            schedule_id: schedule.id.to_string(),
            period_start: rfc3339_midnight(schedule.period_start),
            period_end: rfc3339_midnight(schedule.period_end),
            employees,
            assignments: schedule.assignments.clone(),
            total_shifts: stats.total_assignments,
            total_hours: stats.total_hours,
            generated_at: generated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate_period;
    use crate::models::Employee;

    fn employee(id: &str, monthly_hours: u32) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            email: format!("{id}@example.com"),
            role: "Staff".to_string(),
            role_description: "Front desk".to_string(),
            monthly_hours,
            active: true,
            availability: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn schedule() -> Schedule {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let roster = vec![employee("emp1", 160), employee("emp2", 80)];
        Schedule::draft(start, end, allocate_period(&roster, start, end))
    }

    #[test]
    fn test_payload_totals_match_schedule() {
        let schedule = schedule();
        let payload = SchedulePayload::from_schedule(&schedule, Utc::now());

        assert_eq!(payload.schedule_id, schedule.id.to_string());
        assert_eq!(payload.total_shifts, schedule.assignments.len());
        assert_eq!(payload.assignments, schedule.assignments);

        let summed: f64 = payload.employees.iter().map(|e| e.assigned_hours).sum();
        assert_eq!(payload.total_hours, summed);
        let shifts: usize = payload.employees.iter().map(|e| e.assigned_shifts).sum();
        assert_eq!(shifts, payload.total_shifts);
    }

    #[test]
    fn test_payload_dates_are_rfc3339() {
        let payload = SchedulePayload::from_schedule(&schedule(), Utc::now());
        assert_eq!(payload.period_start, "2025-01-06T00:00:00+00:00");
        assert_eq!(payload.period_end, "2025-01-17T00:00:00+00:00");
        assert!(DateTime::parse_from_rfc3339(&payload.generated_at).is_ok());
    }

    #[test]
    fn test_payload_employee_fields() {
        let payload = SchedulePayload::from_schedule(&schedule(), Utc::now());
        let first = &payload.employees[0];

        assert_eq!(first.id, "emp1");
        assert_eq!(first.email, "emp1@example.com");
        assert_eq!(first.role_description, "Front desk");
        assert_eq!(first.monthly_hours, 160);
        assert_eq!(first.assigned_shifts, 8);
        assert_eq!(first.assigned_hours, 64.0);
    }

    #[test]
    fn test_payload_serializes_wire_names() {
        let payload = SchedulePayload::from_schedule(&schedule(), Utc::now());
        let json = serde_json::to_value(&payload).unwrap();

        for key in [
            "schedule_id",
            "period_start",
            "period_end",
            "employees",
            "assignments",
            "total_shifts",
            "total_hours",
            "generated_at",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["assignments"][0]["shift_type"], "full_day");
    }
}
