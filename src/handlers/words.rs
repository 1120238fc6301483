use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::handlers::timestamp;
use crate::locale::Locale;
use crate::params::{bounded_count, QueryParams, RawQuery};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
    pub count: usize,
    pub language: String,
    pub timestamp: String,
}

pub async fn words_handler(
    State(state): State<Arc<AppState>>,
    query: RawQuery,
) -> Result<Json<WordsResponse>, ApiError> {
    let params = QueryParams::from_query(query)?;
    let count = bounded_count(params.get("count"), "count", 10, 1..=50)?;
    let locale = Locale::resolve(params.get("language"));

    let words = state
        .catalog
        .get(locale)
        .random_words(&mut rand::thread_rng(), count);

    Ok(Json(WordsResponse {
        count: words.len(),
        words,
        language: locale.code().to_string(),
        timestamp: timestamp(),
    }))
}
