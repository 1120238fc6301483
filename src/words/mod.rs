//! Per-locale word content.
//!
//! - `pool`: the three sentence pools (common, names, special)
//! - `catalog`: everything a locale serves, loaded once at startup from the
//!   embedded JSON resources or an override directory

mod catalog;
mod pool;

pub use catalog::{LocaleContent, NameFormat, WordCatalog, ALL_CATEGORY};
pub use pool::{TokenKind, WordPool};
