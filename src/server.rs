use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    generate_handler, health_handler, languages_handler, names_handler, special_words_handler,
    words_handler,
};
use crate::state::AppState;

/// Build the application router with every endpoint mounted.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/generate", get(generate_handler))
        .route("/api/names", get(names_handler))
        .route("/api/special-words", get(special_words_handler))
        .route("/api/words", get(words_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
