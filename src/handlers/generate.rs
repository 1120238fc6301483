use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::generator::{BatchStatistics, GeneratedContent, SentenceGenerator};
use crate::handlers::timestamp;
use crate::locale::Locale;
use crate::params::{bounded_count, QueryParams, RawQuery};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub sentences: Vec<String>,
    pub generated_content: Vec<GeneratedContent>,
    pub special_words: Vec<String>,
    /// Whole name pool, so clients can recognise names while scoring
    pub person_names: Vec<String>,
    pub statistics: BatchStatistics,
    pub language: String,
    pub timestamp: String,
}

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    query: RawQuery,
) -> Result<Json<GenerateResponse>, ApiError> {
    let params = QueryParams::from_query(query)?;
    let count = bounded_count(params.get("count"), "count", 5, 1..=20)?;
    let words_per_sentence = bounded_count(
        params.get("wordsPerSentence"),
        "wordsPerSentence",
        12,
        5..=25,
    )?;
    let locale = Locale::resolve(params.get("language"));

    let pool = state.catalog.get(locale).sentence_pool();
    let batch = SentenceGenerator::new(pool).generate_batch(
        &mut rand::thread_rng(),
        count,
        words_per_sentence,
    );

    debug!(
        "Generated {} sentences of {} words ({})",
        count, words_per_sentence, locale
    );

    Ok(Json(GenerateResponse {
        sentences: batch
            .generated_content
            .iter()
            .map(|content| content.sentence.clone())
            .collect(),
        generated_content: batch.generated_content,
        special_words: batch.special_words,
        person_names: pool.names().to_vec(),
        statistics: batch.statistics,
        language: locale.code().to_string(),
        timestamp: timestamp(),
    }))
}
