use crate::words::WordCatalog;

// Shared, read-only application state
pub struct AppState {
    pub catalog: WordCatalog,
}

impl AppState {
    pub fn new(catalog: WordCatalog) -> Self {
        Self { catalog }
    }
}
