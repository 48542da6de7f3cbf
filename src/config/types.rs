//! Configuration types for the shift allocation service.
//!
//! These are deserialized from the YAML files in a configuration directory
//! and validated by [`super::ConfigLoader`] before use.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftType;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Where generated schedules are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Endpoint receiving the schedule payload.
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Settings for the recurring generate-and-send cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Whether the binary starts the trigger.
    #[serde(default)]
    pub enabled: bool,
    /// Days between cycles.
    #[serde(default = "default_days")]
    pub interval_days: u32,
    /// Length of each generated period, counted from the cycle date.
    #[serde(default = "default_days")]
    pub period_days: u32,
}

fn default_days() -> u32 {
    14
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_days: default_days(),
            period_days: default_days(),
        }
    }
}

/// Log filter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, e.g. `info` or `shift_allocator=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Contents of `service.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Schedule delivery.
    pub webhook: WebhookConfig,
    /// Recurring cycle.
    #[serde(default)]
    pub trigger: TriggerConfig,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Checks values serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.server.port == 0 {
            return Err(invalid("server.port", "must be non-zero"));
        }
        if self.webhook.url.trim().is_empty() {
            return Err(invalid("webhook.url", "is required"));
        }
        if self.trigger.interval_days == 0 {
            return Err(invalid("trigger.interval_days", "must be at least 1"));
        }
        if self.trigger.period_days == 0 {
            return Err(invalid("trigger.period_days", "must be at least 1"));
        }
        Ok(())
    }
}

/// When the company operates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Operating days, 0 = Sunday through 6 = Saturday.
    pub working_days: Vec<u8>,
    /// Opening time, e.g. "09:00".
    pub open_time: String,
    /// Closing time, e.g. "17:00".
    pub close_time: String,
    /// IANA timezone name.
    #[serde(default)]
    pub timezone: String,
}

/// Staffing wanted for one shift type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequirement {
    /// The shift this requirement applies to.
    pub shift_type: ShiftType,
    /// Minimum staff.
    pub min_employees: u32,
    /// Maximum staff.
    pub max_employees: u32,
    /// Skills at least one assignee should have.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// Company scheduling rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPolicies {
    /// Maximum consecutive work days.
    pub max_consecutive_days: u32,
    /// Minimum rest between shifts, in hours.
    pub min_rest_hours: u32,
    /// Whether overtime may be scheduled.
    pub allow_overtime: bool,
    /// Monthly overtime ceiling in hours.
    pub max_overtime_hours: u32,
    /// Whether weekend shifts need employee consent.
    pub weekend_consent_required: bool,
    /// Whether shifts should be spread evenly.
    pub fair_distribution: bool,
}

/// Contents of `company.yaml`.
///
/// The allocator does not read this; it describes the business for the
/// downstream consumer of delivered schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Company name.
    pub company_name: String,
    /// Operating days and hours.
    pub working_hours: WorkingHours,
    /// Staffing per shift type.
    pub shift_requirements: Vec<ShiftRequirement>,
    /// Scheduling rules.
    #[serde(default)]
    pub scheduling_policies: SchedulingPolicies,
    /// Extra free-text instructions.
    #[serde(default)]
    pub ai_context: String,
}

impl CompanyConfig {
    /// Checks values serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(invalid("company_name", "is required"));
        }

        let hours = &self.working_hours;
        if hours.open_time.trim().is_empty() {
            return Err(invalid("working_hours.open_time", "is required"));
        }
        if hours.close_time.trim().is_empty() {
            return Err(invalid("working_hours.close_time", "is required"));
        }
        if hours.working_days.is_empty() {
            return Err(invalid("working_hours.working_days", "must not be empty"));
        }
        if let Some(day) = hours.working_days.iter().find(|d| usize::from(**d) >= DAY_NAMES.len()) {
            return Err(EngineError::InvalidConfig {
                field: "working_hours.working_days".to_string(),
                message: format!("{day} is not a day of the week (0-6)"),
            });
        }

        if self.shift_requirements.is_empty() {
            return Err(invalid("shift_requirements", "must not be empty"));
        }
        for req in &self.shift_requirements {
            if req.max_employees < req.min_employees {
                return Err(EngineError::InvalidConfig {
                    field: "shift_requirements".to_string(),
                    message: format!(
                        "{}: max_employees {} is below min_employees {}",
                        req.shift_type, req.max_employees, req.min_employees
                    ),
                });
            }
        }

        Ok(())
    }

    /// Renders the configuration as plain text for the schedule consumer.
    pub fn context_for_ai(&self) -> String {
        let mut out = format!("Company: {}\n\n", self.company_name);

        let days: Vec<&str> = self
            .working_hours
            .working_days
            .iter()
            .filter_map(|d| DAY_NAMES.get(usize::from(*d)).copied())
            .collect();
        out.push_str("Working Hours:\n");
        out.push_str(&format!("- Days: {}\n", days.join(", ")));
        out.push_str(&format!(
            "- Hours: {} - {}\n",
            self.working_hours.open_time, self.working_hours.close_time
        ));
        out.push_str(&format!("- Timezone: {}\n\n", self.working_hours.timezone));

        out.push_str("Shift Requirements:\n");
        for req in &self.shift_requirements {
            out.push_str(&format!("- {}: {}", req.shift_type, req.description));
            if req.min_employees > 0 {
                out.push_str(&format!(" (Min: {} employees)", req.min_employees));
            }
            out.push('\n');
        }
        out.push('\n');

        let policies = &self.scheduling_policies;
        out.push_str("Scheduling Policies:\n");
        out.push_str(&format!(
            "- Maximum consecutive work days: {}\n",
            policies.max_consecutive_days
        ));
        out.push_str(&format!(
            "- Minimum rest hours between shifts: {}h\n",
            policies.min_rest_hours
        ));
        if policies.fair_distribution {
            out.push_str("- Fair distribution of shifts across all employees\n");
        }
        if policies.weekend_consent_required {
            out.push_str("- Weekend shifts require employee consent\n");
        }
        out.push('\n');

        if !self.ai_context.is_empty() {
            out.push_str(&format!("Additional Instructions:\n{}\n", self.ai_context));
        }

        out
    }
}
