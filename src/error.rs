use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A query parameter is non-numeric, out of range, or not an allowed value
    #[error("{0}")]
    Validation(String),
}

/// JSON body for every error response: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        tracing::debug!("Rejected request: {}", body.error);
        (status, Json(body)).into_response()
    }
}

/// Problems with the content of a single locale's word lists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("word list '{0}' is empty")]
    EmptyList(String),

    #[error("special-word category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("special-word category name '{0}' is reserved")]
    ReservedCategory(String),
}

/// Startup failures while building the word catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read word pools from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word pools for '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid word pools for '{locale}': {source}")]
    Invalid {
        locale: String,
        #[source]
        source: ContentError,
    },

    #[error("no word pools available for locale '{locale}'")]
    Missing { locale: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_is_verbatim() {
        let err = ApiError::Validation("Invalid count parameter.".to_string());
        assert_eq!(err.to_string(), "Invalid count parameter.");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let response = ApiError::Validation("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "bad".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "bad" }));
    }

    #[test]
    fn test_catalog_error_names_locale() {
        let err = CatalogError::Invalid {
            locale: "id".to_string(),
            source: ContentError::EmptyList("words".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid word pools for 'id': word list 'words' is empty"
        );
    }
}
