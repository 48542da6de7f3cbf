//! In-memory company profile.

use tokio::sync::RwLock;

use crate::config::CompanyConfig;
use crate::error::EngineResult;

/// The current company profile, seeded from `company.yaml`.
#[derive(Debug)]
pub struct CompanyStore {
    config: RwLock<CompanyConfig>,
}

impl CompanyStore {
    /// Creates a store holding `config`.
    pub fn new(config: CompanyConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// A copy of the current profile.
    pub async fn get(&self) -> CompanyConfig {
        self.config.read().await.clone()
    }

    /// Validates `config` and replaces the current profile with it.
    ///
    /// An invalid profile is rejected with `InvalidConfig` and the stored
    /// one is kept.
    pub async fn update(&self, config: CompanyConfig) -> EngineResult<CompanyConfig> {
        config.validate()?;
        *self.config.write().await = config.clone();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;

    fn default_company() -> CompanyConfig {
        ConfigLoader::load("./config/default").unwrap().company().clone()
    }

    #[tokio::test]
    async fn test_update_replaces_profile() {
        let store = CompanyStore::new(default_company());
        let mut changed = default_company();
        changed.company_name = "Renamed AS".to_string();
        changed.working_hours.working_days = vec![1, 2, 3];

        store.update(changed).await.unwrap();

        let current = store.get().await;
        assert_eq!(current.company_name, "Renamed AS");
        assert_eq!(current.working_hours.working_days, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_invalid_update_keeps_profile() {
        let store = CompanyStore::new(default_company());
        let mut changed = default_company();
        changed.working_hours.working_days = vec![7];

        let result = store.update(changed).await;

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { field, .. }) if field == "working_hours.working_days"
        ));
        assert_eq!(store.get().await.working_hours.working_days, vec![1, 2, 3, 4, 5]);
    }
}
