//! Configuration loading and management for the shift allocation service.
//!
//! This module loads the service settings (listener, webhook, trigger,
//! logging) and the company profile from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_allocator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded company: {}", config.company().company_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyConfig, LoggingConfig, SchedulingPolicies, ServerConfig, ServiceConfig,
    ShiftRequirement, TriggerConfig, WebhookConfig, WorkingHours,
};
