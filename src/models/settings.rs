use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FieldError, Validator};

/// Database entity representing a site setting, keyed by `key`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: String,
    /// How `value` should be read by consumers (text, number, boolean, json, ...)
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub setting_type: String,
    pub updated_at: DateTime<Utc>,
}

/// Body of `PUT /api/admin/settings/{key}`; the key comes from the path.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SettingForm {
    pub value: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub setting_type: Option<String>,
    pub description: Option<String>,
}

/// Validated setting write
#[derive(Debug, Clone)]
pub struct NewSetting {
    pub key: String,
    pub value: Option<String>,
    pub description: String,
    pub category: String,
    pub setting_type: String,
}

impl NewSetting {
    pub const DEFAULT_TYPE: &'static str = "text";

    pub fn new(key: &str, value: Option<&str>, category: &str, setting_type: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.map(str::to_string),
            description: String::new(),
            category: category.to_string(),
            setting_type: setting_type.to_string(),
        }
    }
}

impl SettingForm {
    pub fn into_new(self, key: String) -> Result<NewSetting, Vec<FieldError>> {
        let mut v = Validator::new();

        let key = v.required("key", Some(key), 1, "Key is required");
        let category = v.required("category", self.category, 1, "Category is required");
        let setting_type = v.required(
            "type",
            Some(
                self.setting_type
                    .unwrap_or_else(|| NewSetting::DEFAULT_TYPE.to_string()),
            ),
            1,
            "Type must not be empty",
        );

        v.finish(NewSetting {
            key,
            value: self.value,
            description: self.description.unwrap_or_default(),
            category,
            setting_type,
        })
    }
}
