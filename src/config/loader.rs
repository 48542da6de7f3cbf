//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! and company configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CompanyConfig, ServiceConfig};

/// Loads and provides access to the service and company configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── service.yaml   # Listener, webhook, trigger and logging
/// └── company.yaml   # Company profile and shift requirements
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_allocator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Delivering to {}", loader.service().webhook.url);
/// # Ok::<(), shift_allocator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    service: ServiceConfig,
    company: CompanyConfig,
}

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// Fails with `ConfigNotFound` if a file is missing, `ConfigParseError`
    /// if it is not valid YAML for its type, or `InvalidConfig` if a value
    /// is out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;
        service.validate()?;

        let company = Self::load_yaml::<CompanyConfig>(&path.join("company.yaml"))?;
        company.validate()?;

        Ok(Self { service, company })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns the company configuration.
    pub fn company(&self) -> &CompanyConfig {
        &self.company
    }

    /// Splits the loader into its two parts.
    pub fn into_parts(self) -> (ServiceConfig, CompanyConfig) {
        (self.service, self.company)
    }
}
