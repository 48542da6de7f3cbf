//! Recurring generate-and-send cycle.
//!
//! Every `interval_days` the trigger generates a schedule for
//! `[today, today + period_days]` and delivers it. The first cycle runs one
//! interval after [`PeriodicTrigger::start`]; use
//! [`PeriodicTrigger::run_now`] for an immediate one.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::config::TriggerConfig;
use crate::error::EngineResult;
use crate::models::Schedule;
use crate::service::ScheduleService;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Drives [`ScheduleService`] on a fixed interval.
#[derive(Debug)]
pub struct PeriodicTrigger {
    service: ScheduleService,
    interval: Duration,
    period_days: u32,
    cycle: Mutex<()>,
    shutdown: watch::Sender<bool>,
}

impl PeriodicTrigger {
    /// Creates a stopped trigger.
    pub fn new(service: ScheduleService, config: &TriggerConfig) -> Arc<Self> {
        let (shutdown, _) = watch::channel(false);
        Arc::new(Self {
            service,
            interval: Duration::from_secs(u64::from(config.interval_days) * SECONDS_PER_DAY),
            period_days: config.period_days,
            cycle: Mutex::new(()),
            shutdown,
        })
    }

    /// Spawns the interval loop.
    ///
    /// The loop runs until [`PeriodicTrigger::shutdown`] is called. A failed
    /// cycle is logged and the loop carries on.
    pub fn start(self: &Arc<Self>) -> JoinHandle<()> {
        let trigger = Arc::clone(self);
        let mut stop = self.shutdown.subscribe();

        tokio::spawn(async move {
            let mut ticker = interval(trigger.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            ticker.tick().await;

            info!(
                interval_days = trigger.interval.as_secs() / SECONDS_PER_DAY,
                period_days = trigger.period_days,
                "Periodic trigger started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = trigger.run_now().await {
                            error!(error = %e, "Scheduled cycle failed");
                        }
                    }
                    _ = stop.changed() => break,
                }
            }

            info!("Periodic trigger stopped");
        })
    }

    /// Runs one generate-and-send cycle now.
    ///
    /// Waits for any cycle already in progress to finish first.
    pub async fn run_now(&self) -> EngineResult<Schedule> {
        let _guard = self.cycle.lock().await;

        let today = Utc::now().date_naive();
        info!(%today, period_days = self.period_days, "Starting schedule cycle");

        let schedule = self
            .service
            .generate_recurring_schedule(today, self.period_days)
            .await?;
        let schedule = self.service.send_schedule(schedule.id).await?;

        info!(schedule_id = %schedule.id, "Schedule cycle complete");
        Ok(schedule)
    }

    /// Stops the interval loop after its current cycle.
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }
}
