use crate::error::ContentError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

/// The three token categories a generated sentence mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Common,
    Name,
    Special,
}

/// Sentence word pools for one locale.
///
/// Every list is guaranteed non-empty, both when built with [`WordPool::new`]
/// and when deserialized.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawWordPool")]
pub struct WordPool {
    common: Vec<String>,
    names: Vec<String>,
    special: Vec<String>,
}

#[derive(Deserialize)]
struct RawWordPool {
    common: Vec<String>,
    names: Vec<String>,
    special: Vec<String>,
}

impl TryFrom<RawWordPool> for WordPool {
    type Error = ContentError;

    fn try_from(raw: RawWordPool) -> Result<Self, Self::Error> {
        WordPool::new(raw.common, raw.names, raw.special)
    }
}

impl WordPool {
    pub fn new(
        common: Vec<String>,
        names: Vec<String>,
        special: Vec<String>,
    ) -> Result<Self, ContentError> {
        for (list, words) in [("common", &common), ("names", &names), ("special", &special)] {
            if words.is_empty() {
                return Err(ContentError::EmptyList(list.to_string()));
            }
        }

        Ok(Self {
            common,
            names,
            special,
        })
    }

    pub fn common(&self) -> &[String] {
        &self.common
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn special(&self) -> &[String] {
        &self.special
    }

    pub fn list(&self, kind: TokenKind) -> &[String] {
        match kind {
            TokenKind::Common => &self.common,
            TokenKind::Name => &self.names,
            TokenKind::Special => &self.special,
        }
    }

    /// Uniform draw, with replacement, from one category.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, kind: TokenKind) -> &str {
        pick_from(rng, self.list(kind))
    }
}

/// Uniform draw from a list that construction already proved non-empty.
pub(crate) fn pick_from<'a, R: Rng + ?Sized>(rng: &mut R, words: &'a [String]) -> &'a str {
    words
        .choose(rng)
        .map(String::as_str)
        .expect("word lists are validated as non-empty")
}
