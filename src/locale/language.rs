//! `Locale`: a language code validated against the registry.

use crate::locale::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use tracing::warn;

/// A locale known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const INDONESIAN: Locale = Locale { code: "id" };

    /// Create a Locale from an exact language code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Every registered locale, in registration order.
    pub fn all() -> impl Iterator<Item = Locale> {
        LocaleRegistry::get()
            .locales()
            .iter()
            .map(|config| Locale { code: config.code })
    }

    /// The locale that unknown language codes fall back to.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// Resolve a requested language, falling back to the default locale.
    ///
    /// The request value is trimmed and lowercased first. An absent or empty
    /// value silently selects the default; an unknown one is logged.
    pub fn resolve(requested: Option<&str>) -> Locale {
        let code = match requested.map(str::trim) {
            Some(code) if !code.is_empty() => code.to_lowercase(),
            _ => return Locale::default_locale(),
        };

        match Locale::from_code(&code) {
            Ok(locale) => locale,
            Err(e) => {
                let fallback = Locale::default_locale();
                warn!("{}, falling back to '{}'", e, fallback.code());
                fallback
            }
        }
    }

    /// The ISO 639-1 code (e.g., "en").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Locale built through `from_code`, `resolve` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
