use axum::Json;
use serde::{Deserialize, Serialize};

use crate::handlers::timestamp;
use crate::locale::Locale;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub is_default: bool,
}

impl From<Locale> for LanguageInfo {
    fn from(locale: Locale) -> Self {
        let config = locale.config();
        Self {
            code: config.code.to_string(),
            name: config.name.to_string(),
            native_name: config.native_name.to_string(),
            is_default: config.is_default,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub default: String,
    pub timestamp: String,
}

/// Locales that have content, in registration order.
pub async fn languages_handler() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: Locale::all().map(LanguageInfo::from).collect(),
        default: Locale::default_locale().code().to_string(),
        timestamp: timestamp(),
    })
}
