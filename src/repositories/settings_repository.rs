use crate::models::{NewSetting, ServiceError, SiteSetting};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_by_key(&self, key: &str) -> Result<Option<SiteSetting>, ServiceError>;
    /// Ordered by key.
    async fn find_by_category(&self, category: &str) -> Result<Vec<SiteSetting>, ServiceError>;
    /// Ordered by category, then key.
    async fn find_all(&self) -> Result<Vec<SiteSetting>, ServiceError>;
    /// Insert the setting, or overwrite the existing row with the same key.
    async fn upsert(&self, setting: NewSetting) -> Result<SiteSetting, ServiceError>;
}

pub struct SqliteSettingsRepository {
    pool: SqlitePool,
}

impl SqliteSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<SiteSetting>, ServiceError> {
        let setting = sqlx::query_as::<_, SiteSetting>(
            r#"SELECT id, key, value, description, category, "type", updated_at
               FROM site_settings WHERE key = ?"#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(setting)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<SiteSetting>, ServiceError> {
        let settings = sqlx::query_as::<_, SiteSetting>(
            r#"SELECT id, key, value, description, category, "type", updated_at
               FROM site_settings WHERE category = ? ORDER BY key ASC"#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn find_all(&self) -> Result<Vec<SiteSetting>, ServiceError> {
        let settings = sqlx::query_as::<_, SiteSetting>(
            r#"SELECT id, key, value, description, category, "type", updated_at
               FROM site_settings ORDER BY category ASC, key ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn upsert(&self, setting: NewSetting) -> Result<SiteSetting, ServiceError> {
        // Single statement, so two writers on the same key cannot both insert.
        let saved = sqlx::query_as::<_, SiteSetting>(
            r#"INSERT INTO site_settings (key, value, description, category, "type", updated_at)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT(key) DO UPDATE SET
                   value = excluded.value,
                   description = excluded.description,
                   category = excluded.category,
                   "type" = excluded."type",
                   updated_at = excluded.updated_at
               RETURNING id, key, value, description, category, "type", updated_at"#,
        )
        .bind(setting.key)
        .bind(setting.value)
        .bind(setting.description)
        .bind(setting.category)
        .bind(setting.setting_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
