use crate::error::{CatalogError, ContentError};
use crate::locale::Locale;
use crate::words::pool::{pick_from, WordPool};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Pseudo-category selecting the whole special-word list.
pub const ALL_CATEGORY: &str = "all";

/// How the names endpoint renders each generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFormat {
    Full,
    First,
    Last,
}

impl NameFormat {
    pub const ALL: [NameFormat; 3] = [NameFormat::Full, NameFormat::First, NameFormat::Last];

    pub fn parse(value: &str) -> Option<NameFormat> {
        match value {
            "full" => Some(NameFormat::Full),
            "first" => Some(NameFormat::First),
            "last" => Some(NameFormat::Last),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NameFormat::Full => "full",
            NameFormat::First => "first",
            NameFormat::Last => "last",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct NameLists {
    first: Vec<String>,
    last: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SpecialCategory {
    name: String,
    words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpecialWords {
    all: Vec<String>,
    #[serde(default)]
    categories: Vec<SpecialCategory>,
    score_multiplier: f64,
}

/// Everything one locale serves: sentence pools, plain words, names and
/// special-word categories.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleContent {
    sentence: WordPool,
    words: Vec<String>,
    names: NameLists,
    special_words: SpecialWords,
}

impl LocaleContent {
    /// Parse and validate one locale's JSON document.
    pub fn from_json(locale: &str, json: &str) -> Result<Self, CatalogError> {
        let content: LocaleContent =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                locale: locale.to_string(),
                source,
            })?;

        content.validate().map_err(|source| CatalogError::Invalid {
            locale: locale.to_string(),
            source,
        })?;

        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let lists = [
            ("words", &self.words),
            ("names.first", &self.names.first),
            ("names.last", &self.names.last),
            ("specialWords.all", &self.special_words.all),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(ContentError::EmptyList(name.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for category in &self.special_words.categories {
            if category.name == ALL_CATEGORY {
                return Err(ContentError::ReservedCategory(category.name.clone()));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ContentError::DuplicateCategory(category.name.clone()));
            }
            if category.words.is_empty() {
                return Err(ContentError::EmptyList(format!(
                    "specialWords.categories.{}",
                    category.name
                )));
            }
        }

        Ok(())
    }

    pub fn sentence_pool(&self) -> &WordPool {
        &self.sentence
    }

    pub fn word_pool(&self) -> &[String] {
        &self.words
    }

    pub fn score_multiplier(&self) -> f64 {
        self.special_words.score_multiplier
    }

    /// Category names in declaration order, without the `all` pseudo-category.
    pub fn category_names(&self) -> Vec<&str> {
        self.special_words
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    /// The words behind a category, `all` included.
    pub fn category_pool(&self, category: &str) -> Option<&[String]> {
        if category == ALL_CATEGORY {
            return Some(&self.special_words.all);
        }
        self.special_words
            .categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.words.as_slice())
    }

    /// `count` uniform draws, with replacement, from the plain word pool.
    pub fn random_words<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count)
            .map(|_| pick_from(rng, &self.words).to_string())
            .collect()
    }

    /// `count` names; first and last are drawn independently for each one.
    pub fn random_names<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        format: NameFormat,
    ) -> Vec<String> {
        (0..count)
            .map(|_| {
                let first = pick_from(rng, &self.names.first);
                let last = pick_from(rng, &self.names.last);
                match format {
                    NameFormat::Full => format!("{} {}", first, last),
                    NameFormat::First => first.to_string(),
                    NameFormat::Last => last.to_string(),
                }
            })
            .collect()
    }

    /// Up to `count` special words from a category, never reusing a position
    /// of the category list. Returns `None` for an unknown category.
    pub fn random_special_words<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        category: &str,
    ) -> Option<Vec<String>> {
        let pool = self.category_pool(category)?;
        let amount = count.min(pool.len());

        Some(
            index::sample(rng, pool.len(), amount)
                .into_iter()
                .map(|i| pool[i].clone())
                .collect(),
        )
    }
}

/// Content compiled into the binary, keyed by locale code.
fn embedded_json(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some(include_str!("../../data/en.json")),
        "id" => Some(include_str!("../../data/id.json")),
        _ => None,
    }
}

/// Per-locale content for every registered locale, loaded once at startup.
#[derive(Debug)]
pub struct WordCatalog {
    default: LocaleContent,
    others: HashMap<Locale, LocaleContent>,
}

impl WordCatalog {
    /// Load the embedded content only.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::load(None)
    }

    /// Load every registered locale.
    ///
    /// When `dir` is set, `<dir>/<code>.json` replaces the embedded content
    /// for that locale. A locale without an override file keeps the embedded
    /// content.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        let mut locales = HashMap::new();

        for locale in Locale::all() {
            let code = locale.code();
            let override_path = dir.map(|d| d.join(format!("{}.json", code)));

            let content = match override_path {
                Some(path) if path.exists() => {
                    let json = std::fs::read_to_string(&path).map_err(|source| {
                        CatalogError::Io {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    info!("Loaded word pools for '{}' from {}", code, path.display());
                    LocaleContent::from_json(code, &json)?
                }
                _ => {
                    let json = embedded_json(code).ok_or_else(|| CatalogError::Missing {
                        locale: code.to_string(),
                    })?;
                    LocaleContent::from_json(code, json)?
                }
            };

            info!(
                "Word pools for '{}': {} common, {} names, {} special, {} words, {} categories",
                code,
                content.sentence.common().len(),
                content.sentence.names().len(),
                content.sentence.special().len(),
                content.words.len(),
                content.special_words.categories.len()
            );

            locales.insert(locale, content);
        }

        Self::from_locales(locales)
    }

    /// Requires content for the default locale, which backs every lookup.
    fn from_locales(mut locales: HashMap<Locale, LocaleContent>) -> Result<Self, CatalogError> {
        let default_locale = Locale::default_locale();
        let default = locales
            .remove(&default_locale)
            .ok_or_else(|| CatalogError::Missing {
                locale: default_locale.code().to_string(),
            })?;

        Ok(Self {
            default,
            others: locales,
        })
    }

    /// Content for a locale; locales without content use the default locale.
    pub fn get(&self, locale: Locale) -> &LocaleContent {
        self.others.get(&locale).unwrap_or(&self.default)
    }

    /// Number of locales with their own content, the default included.
    pub fn locale_count(&self) -> usize {
        self.others.len() + 1
    }
}
