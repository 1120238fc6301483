use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::handlers::timestamp;
use crate::locale::Locale;
use crate::params::{bounded_count, one_of, QueryParams, RawQuery};
use crate::state::AppState;
use crate::words::NameFormat;

#[derive(Debug, Serialize, Deserialize)]
pub struct NamesResponse {
    pub names: Vec<String>,
    pub count: usize,
    pub format: String,
    pub language: String,
    pub timestamp: String,
}

pub async fn names_handler(
    State(state): State<Arc<AppState>>,
    query: RawQuery,
) -> Result<Json<NamesResponse>, ApiError> {
    let params = QueryParams::from_query(query)?;
    let count = bounded_count(params.get("count"), "count", 5, 1..=20)?;
    let allowed = NameFormat::ALL.map(|f| f.as_str());
    let format = one_of(params.get("format"), "full", &allowed, || {
        r#"Invalid format parameter. Must be "full", "first", or "last"."#.to_string()
    })?;
    let format = NameFormat::parse(format).unwrap_or(NameFormat::Full);
    let locale = Locale::resolve(params.get("language"));

    let names = state
        .catalog
        .get(locale)
        .random_names(&mut rand::thread_rng(), count, format);

    Ok(Json(NamesResponse {
        count: names.len(),
        names,
        format: format.as_str().to_string(),
        language: locale.code().to_string(),
        timestamp: timestamp(),
    }))
}
