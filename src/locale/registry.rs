//! Locale registry: single source of truth for the locales that have content.
//!
//! The registry is a process-wide singleton initialized with `OnceLock` on
//! first access and immutable afterwards.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "id")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Indonesian")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "Bahasa Indonesia")
    pub native_name: &'static str,

    /// Whether unknown language codes fall back to this locale (exactly one)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: registered_locales(),
        })
    }

    /// Locale configuration by exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Every locale, in registration order.
    pub fn locales(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The fallback locale.
    ///
    /// # Panics
    /// Panics if zero or several locales are flagged as default, which is a
    /// programming error in `registered_locales`.
    pub fn default_locale(&self) -> &LocaleConfig {
        let mut defaults = self.locales.iter().filter(|locale| locale.is_default);

        match (defaults.next(), defaults.next()) {
            (Some(locale), None) => locale,
            (None, _) => panic!("No default locale found in registry"),
            (Some(_), Some(_)) => panic!("Multiple default locales found in registry"),
        }
    }
}

fn registered_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LocaleConfig {
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
            is_default: false,
        },
    ]
}
