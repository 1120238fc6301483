mod generate;
mod health;
mod languages;
mod names;
mod special_words;
mod words;

pub use generate::{generate_handler, GenerateResponse};
pub use health::health_handler;
pub use languages::{languages_handler, LanguageInfo, LanguagesResponse};
pub use names::{names_handler, NamesResponse};
pub use special_words::{special_words_handler, SpecialWordsResponse};
pub use words::{words_handler, WordsResponse};

use chrono::{SecondsFormat, Utc};

/// ISO-8601 UTC instant with millisecond precision, e.g. `2026-10-16T08:00:00.000Z`
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
