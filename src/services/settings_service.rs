use crate::models::{NewSetting, ServiceError, SiteSetting};
use crate::repositories::SettingsRepository;
use std::sync::Arc;

pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_setting(&self, key: &str) -> Result<Option<SiteSetting>, ServiceError> {
        self.repository.find_by_key(key).await
    }

    pub async fn get_settings_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<SiteSetting>, ServiceError> {
        self.repository.find_by_category(category).await
    }

    pub async fn get_all_settings(&self) -> Result<Vec<SiteSetting>, ServiceError> {
        self.repository.find_all().await
    }

    pub async fn save_setting(&self, setting: NewSetting) -> Result<SiteSetting, ServiceError> {
        let saved = self.repository.upsert(setting).await?;
        tracing::info!(key = %saved.key, category = %saved.category, "Saved setting");
        Ok(saved)
    }
}
