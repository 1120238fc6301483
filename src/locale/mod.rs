//! Locale support.
//!
//! - `registry`: the supported locales and which one is the default
//! - `language`: the validated `Locale` type and the fallback rule used by
//!   every endpoint's `language` parameter
//!
//! ```rust,ignore
//! use crate::locale::Locale;
//!
//! let locale = Locale::resolve(Some("id"));
//! let fallback = Locale::resolve(Some("xx")); // default locale
//! ```

mod language;
mod registry;

pub use language::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
