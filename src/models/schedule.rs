//! Schedule entity and allocation result.
//!
//! A [`Schedule`] is what the surrounding service persists after running the
//! allocator: the period, a snapshot of the roster used and the assignments
//! produced, plus delivery bookkeeping.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Employee, ShiftAssignment};

/// Lifecycle of a generated schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Generated, not yet delivered.
    Draft,
    /// Delivered to the webhook.
    Sent,
    /// The period has been worked.
    Completed,
}

/// The output of one period allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAllocationResult {
    /// Assignments in chronological order, then allocation order within a day.
    pub assignments: Vec<ShiftAssignment>,
    /// The roster the allocation ran over.
    pub employees: Vec<Employee>,
}

/// A persisted schedule for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique identifier.
    pub id: Uuid,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Roster snapshot at generation time.
    pub employees: Vec<Employee>,
    /// The allocated shifts.
    pub assignments: Vec<ShiftAssignment>,
    /// Current lifecycle state.
    pub status: ScheduleStatus,
    /// Whether the schedule was delivered to the webhook.
    pub sent_to_webhook: bool,
    /// When the schedule was delivered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Creates a draft schedule from an allocation result.
    pub fn draft(
        period_start: NaiveDate,
        period_end: NaiveDate,
        result: PeriodAllocationResult,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            period_start,
            period_end,
            employees: result.employees,
            assignments: result.assignments,
            status: ScheduleStatus::Draft,
            sent_to_webhook: false,
            sent_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the schedule's period shares at least one day with
    /// `[start, end]`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_allocator::models::{PeriodAllocationResult, Schedule};
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
    /// let schedule = Schedule::draft(
    ///     d(6),
    ///     d(17),
    ///     PeriodAllocationResult { assignments: vec![], employees: vec![] },
    /// );
    ///
    /// assert!(schedule.overlaps(d(17), d(20)));
    /// assert!(!schedule.overlaps(d(18), d(20)));
    /// ```
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.period_start <= end && start <= self.period_end
    }

    /// Records delivery to the webhook.
    pub fn mark_sent(&mut self, at: DateTime<Utc>) {
        self.status = ScheduleStatus::Sent;
        self.sent_to_webhook = true;
        self.sent_at = Some(at);
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> PeriodAllocationResult {
        PeriodAllocationResult {
            assignments: vec![],
            employees: vec![],
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_draft_is_unsent() {
        let schedule = Schedule::draft(date(6), date(17), empty_result());
        assert_eq!(schedule.status, ScheduleStatus::Draft);
        assert!(!schedule.sent_to_webhook);
        assert!(schedule.sent_at.is_none());
        assert_eq!(schedule.created_at, schedule.updated_at);
    }

    #[test]
    fn test_mark_sent_updates_bookkeeping() {
        let mut schedule = Schedule::draft(date(6), date(17), empty_result());
        let at = Utc::now();
        schedule.mark_sent(at);

        assert_eq!(schedule.status, ScheduleStatus::Sent);
        assert!(schedule.sent_to_webhook);
        assert_eq!(schedule.sent_at, Some(at));
    }

    #[test]
    fn test_overlaps_is_inclusive() {
        let schedule = Schedule::draft(date(6), date(17), empty_result());
        assert!(schedule.overlaps(date(1), date(6)));
        assert!(schedule.overlaps(date(10), date(12)));
        assert!(schedule.overlaps(date(1), date(31)));
        assert!(!schedule.overlaps(date(1), date(5)));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ScheduleStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
