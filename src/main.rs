//! Shift allocator server.
//!
//! Usage: `shift-allocator [CONFIG_DIR]`. Without an argument the directory
//! comes from `SHIFT_ALLOCATOR_CONFIG`, falling back to `./config/default`.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shift_allocator::api::{AppState, create_router};
use shift_allocator::config::ConfigLoader;
use shift_allocator::service::{EmployeeService, ScheduleService};
use shift_allocator::store::{EmployeeStore, ScheduleStore};
use shift_allocator::trigger::PeriodicTrigger;
use shift_allocator::webhook::HttpWebhook;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

fn config_dir() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SHIFT_ALLOCATOR_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let dir = config_dir();
    let (service_config, company) = ConfigLoader::load(&dir)?.into_parts();

    init_tracing(&service_config.logging.level);
    info!(config_dir = %dir, company = %company.company_name, "Configuration loaded");

    let employee_store = Arc::new(EmployeeStore::new());
    let schedule_store = Arc::new(ScheduleStore::new());
    let webhook = Arc::new(HttpWebhook::new(&service_config.webhook)?);
    info!(url = %webhook.url(), "Webhook configured");

    let employees = EmployeeService::new(employee_store.clone());
    let schedules = ScheduleService::new(employee_store, schedule_store, webhook);

    let trigger = if service_config.trigger.enabled {
        let trigger = PeriodicTrigger::new(schedules.clone(), &service_config.trigger);
        let handle = trigger.start();
        Some((trigger, handle))
    } else {
        info!("Periodic trigger disabled");
        None
    };

    let state = AppState::new(
        employees,
        schedules,
        company,
        service_config.trigger.period_days,
    );
    let router = create_router(state);

    let addr = format!("{}:{}", service_config.server.host, service_config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some((trigger, handle)) = trigger {
        trigger.shutdown();
        if let Err(e) = handle.await {
            warn!(error = %e, "Trigger task ended abnormally");
        }
    }

    info!("Server stopped");
    Ok(())
}
