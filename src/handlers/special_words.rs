use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::handlers::timestamp;
use crate::locale::Locale;
use crate::params::{bounded_count, one_of, QueryParams, RawQuery};
use crate::state::AppState;
use crate::words::ALL_CATEGORY;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialWordsResponse {
    pub words: Vec<String>,
    pub count: usize,
    pub category: String,
    pub available_categories: Vec<String>,
    pub score_multiplier: f64,
    pub language: String,
    pub timestamp: String,
}

pub async fn special_words_handler(
    State(state): State<Arc<AppState>>,
    query: RawQuery,
) -> Result<Json<SpecialWordsResponse>, ApiError> {
    let params = QueryParams::from_query(query)?;
    let count = bounded_count(params.get("count"), "count", 8, 1..=25)?;
    let locale = Locale::resolve(params.get("language"));
    let content = state.catalog.get(locale);

    let categories = content.category_names();
    let valid: Vec<&str> = std::iter::once(ALL_CATEGORY)
        .chain(categories.iter().copied())
        .collect();
    let category = one_of(params.get("category"), ALL_CATEGORY, &valid, || {
        format!(
            "Invalid category parameter. Must be one of: {}.",
            valid.join(", ")
        )
    })?;

    let words = content
        .random_special_words(&mut rand::thread_rng(), count, category)
        .unwrap_or_default();

    Ok(Json(SpecialWordsResponse {
        count: words.len(),
        words,
        category: category.to_string(),
        available_categories: categories.iter().map(|c| c.to_string()).collect(),
        score_multiplier: content.score_multiplier(),
        language: locale.code().to_string(),
        timestamp: timestamp(),
    }))
}
