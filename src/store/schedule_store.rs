//! In-memory schedule persistence.

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodAllocationResult, Schedule};

fn not_found(id: Uuid) -> EngineError {
    EngineError::ScheduleNotFound { id: id.to_string() }
}

/// Schedules in creation order behind an async lock.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    schedules: RwLock<Vec<Schedule>>,
}

impl ScheduleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new draft schedule for the period.
    pub async fn create(
        &self,
        period_start: NaiveDate,
        period_end: NaiveDate,
        result: PeriodAllocationResult,
    ) -> Schedule {
        let schedule = Schedule::draft(period_start, period_end, result);
        self.schedules.write().await.push(schedule.clone());
        schedule
    }

    /// Looks up a schedule by id.
    pub async fn get(&self, id: Uuid) -> EngineResult<Schedule> {
        self.schedules
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// All schedules, newest first.
    pub async fn list(&self) -> Vec<Schedule> {
        self.schedules.read().await.iter().rev().cloned().collect()
    }

    /// Schedules whose period overlaps `[start, end]`, newest first.
    pub async fn list_by_period(&self, start: NaiveDate, end: NaiveDate) -> Vec<Schedule> {
        self.schedules
            .read()
            .await
            .iter()
            .rev()
            .filter(|s| s.overlaps(start, end))
            .cloned()
            .collect()
    }

    /// Removes a schedule.
    pub async fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut schedules = self.schedules.write().await;
        let index = schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;
        schedules.remove(index);
        Ok(())
    }

    /// Records webhook delivery of a schedule.
    pub async fn mark_sent(&self, id: Uuid) -> EngineResult<Schedule> {
        let mut schedules = self.schedules.write().await;
        let schedule = schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;
        schedule.mark_sent(Utc::now());
        Ok(schedule.clone())
    }
}
