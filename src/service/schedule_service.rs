//! Schedule generation, statistics and delivery.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::allocation::{allocate_period, period_stats};
use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodStats, Schedule};
use crate::store::{EmployeeStore, ScheduleStore};
use crate::webhook::{SchedulePayload, ScheduleWebhook};

/// Runs the allocator over the active roster and manages the results.
#[derive(Clone)]
pub struct ScheduleService {
    employees: Arc<EmployeeStore>,
    schedules: Arc<ScheduleStore>,
    webhook: Arc<dyn ScheduleWebhook>,
}

impl std::fmt::Debug for ScheduleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleService").finish_non_exhaustive()
    }
}

impl ScheduleService {
    /// Creates a service over the two stores, delivering through `webhook`.
    pub fn new(
        employees: Arc<EmployeeStore>,
        schedules: Arc<ScheduleStore>,
        webhook: Arc<dyn ScheduleWebhook>,
    ) -> Self {
        Self {
            employees,
            schedules,
            webhook,
        }
    }

    /// Allocates `[start, end]` over the active employees and stores a draft.
    ///
    /// Fails with `InvalidPeriod` if `end < start` and with `EmptyRoster`
    /// if nobody is active.
    pub async fn generate_schedule(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Schedule> {
        if end < start {
            return Err(EngineError::InvalidPeriod { start, end });
        }

        let roster = self.employees.list_active().await;
        if roster.is_empty() {
            return Err(EngineError::EmptyRoster);
        }

        let result = allocate_period(&roster, start, end);
        let schedule = self.schedules.create(start, end, result).await;
        info!(
            schedule_id = %schedule.id,
            %start,
            %end,
            assignments = schedule.assignments.len(),
            "Schedule generated"
        );
        Ok(schedule)
    }

    /// Generates a schedule for `[today, today + period_days]`.
    pub async fn generate_recurring_schedule(
        &self,
        today: NaiveDate,
        period_days: u32,
    ) -> EngineResult<Schedule> {
        let end = today
            .checked_add_days(Days::new(u64::from(period_days)))
            .ok_or(EngineError::InvalidPeriod { start: today, end: today })?;
        self.generate_schedule(today, end).await
    }

    /// Aggregates a schedule over its roster snapshot.
    pub fn stats(&self, schedule: &Schedule) -> PeriodStats {
        period_stats(&schedule.employees, &schedule.assignments)
    }

    /// Delivers a draft schedule to the webhook and marks it sent.
    ///
    /// Fails with `ScheduleAlreadySent` if it was delivered before. A failed
    /// delivery leaves the schedule unsent.
    pub async fn send_schedule(&self, id: Uuid) -> EngineResult<Schedule> {
        let schedule = self.schedules.get(id).await?;
        if schedule.sent_to_webhook {
            return Err(EngineError::ScheduleAlreadySent { id: id.to_string() });
        }

        let payload = SchedulePayload::from_schedule(&schedule, Utc::now());
        self.webhook.send(&payload).await?;

        let schedule = self.schedules.mark_sent(id).await?;
        info!(schedule_id = %id, total_shifts = payload.total_shifts, "Schedule sent");
        Ok(schedule)
    }

    /// Fetches one schedule.
    pub async fn get(&self, id: Uuid) -> EngineResult<Schedule> {
        self.schedules.get(id).await
    }

    /// All schedules, newest first.
    pub async fn list(&self) -> Vec<Schedule> {
        self.schedules.list().await
    }

    /// Schedules overlapping `[start, end]`, newest first.
    pub async fn list_by_period(&self, start: NaiveDate, end: NaiveDate) -> Vec<Schedule> {
        self.schedules.list_by_period(start, end).await
    }

    /// Removes a schedule.
    pub async fn delete(&self, id: Uuid) -> EngineResult<()> {
        self.schedules.delete(id).await?;
        info!(schedule_id = %id, "Schedule deleted");
        Ok(())
    }
}
