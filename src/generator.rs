//! Sentence generation for typing practice.
//!
//! A sentence mixes common words, person names and special words. Each
//! sentence has a per-category quota computed from its length; names are
//! hard-guaranteed by forced placement at the end of the sentence, special
//! words are best-effort.

use crate::words::{TokenKind, WordPool};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tunable draw probabilities.
///
/// Only the thresholds are policy; the priority order (special before name,
/// common as fallback) and the quota caps are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentencePolicy {
    /// A random draw below this picks a special word while its quota is unmet
    pub special_probability: f64,
    /// A random draw below this picks a name while its quota is unmet
    pub name_probability: f64,
    /// Probability of ending with '.'; '!' and '?' share the rest evenly
    pub period_probability: f64,
}

impl Default for SentencePolicy {
    fn default() -> Self {
        Self {
            special_probability: 0.25,
            name_probability: 0.30,
            period_probability: 0.7,
        }
    }
}

/// Target number of names and special words for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotas {
    pub names: usize,
    pub special: usize,
}

impl Quotas {
    /// `special = min(floor(n * 0.2) + 1, 3)`, `names = max(1, min(floor(n * 0.15), 2))`
    pub fn for_word_count(word_count: usize) -> Self {
        let special = (word_count * 2 / 10 + 1).min(3);
        let names = (word_count * 15 / 100).min(2).max(1);
        Self { names, special }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    pub common_word_count: usize,
    pub name_count: usize,
    pub special_word_count: usize,
    pub total_words: usize,
}

/// One generated sentence with its tokens and per-category counts.
///
/// `words` and `special_words` hold tokens exactly as drawn from the pool;
/// only `sentence` is capitalized and punctuated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub sentence: String,
    pub words: Vec<String>,
    pub special_words: Vec<String>,
    pub metadata: ContentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatistics {
    pub total_sentences: usize,
    pub average_words_per_sentence: f64,
    pub total_special_words: usize,
}

/// Several sentences plus the distinct special words they used.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceBatch {
    pub generated_content: Vec<GeneratedContent>,
    /// Distinct special words, in order of first appearance
    pub special_words: Vec<String>,
    pub statistics: BatchStatistics,
}

pub struct SentenceGenerator<'a> {
    pool: &'a WordPool,
    policy: SentencePolicy,
}

impl<'a> SentenceGenerator<'a> {
    pub fn new(pool: &'a WordPool) -> Self {
        Self::with_policy(pool, SentencePolicy::default())
    }

    pub fn with_policy(pool: &'a WordPool, policy: SentencePolicy) -> Self {
        Self { pool, policy }
    }

    /// Generate one sentence of exactly `word_count` tokens.
    ///
    /// # Panics
    /// Panics if `word_count` is 0.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, word_count: usize) -> GeneratedContent {
        assert!(word_count >= 1, "word_count must be >= 1");

        let quotas = Quotas::for_word_count(word_count);
        let mut words = Vec::with_capacity(word_count);
        let mut special_words = Vec::new();
        let mut metadata = ContentMetadata::default();

        for i in 0..word_count {
            let remaining = word_count - i;
            let kind = self.next_kind(rng, &quotas, &metadata, remaining);
            let word = self.pool.pick(rng, kind).to_string();

            match kind {
                TokenKind::Common => metadata.common_word_count += 1,
                TokenKind::Name => metadata.name_count += 1,
                TokenKind::Special => {
                    metadata.special_word_count += 1;
                    special_words.push(word.clone());
                }
            }
            words.push(word);
        }
        metadata.total_words = words.len();

        let mut sentence = words.join(" ");
        if let Some(first) = words.first() {
            sentence.replace_range(..first.len(), &capitalize_first(first));
        }
        sentence.push(self.terminal_punctuation(rng));

        GeneratedContent {
            sentence,
            words,
            special_words,
            metadata,
        }
    }

    /// Generate `count` sentences of `word_count` tokens each.
    pub fn generate_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        word_count: usize,
    ) -> SentenceBatch {
        let generated_content: Vec<GeneratedContent> =
            (0..count).map(|_| self.generate(rng, word_count)).collect();

        let special_words: Vec<String> = {
            let mut seen = HashSet::new();
            generated_content
                .iter()
                .flat_map(|content| content.special_words.iter())
                .filter(|word| seen.insert(word.as_str()))
                .cloned()
                .collect()
        };

        let total_words: usize = generated_content
            .iter()
            .map(|content| content.metadata.total_words)
            .sum();
        let average_words_per_sentence = if generated_content.is_empty() {
            0.0
        } else {
            total_words as f64 / generated_content.len() as f64
        };

        let statistics = BatchStatistics {
            total_sentences: generated_content.len(),
            average_words_per_sentence,
            total_special_words: special_words.len(),
        };

        SentenceBatch {
            generated_content,
            special_words,
            statistics,
        }
    }

    fn next_kind<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        quotas: &Quotas,
        so_far: &ContentMetadata,
        remaining: usize,
    ) -> TokenKind {
        let names_needed = quotas.names.saturating_sub(so_far.name_count);
        let special_needed = quotas.special.saturating_sub(so_far.special_word_count);

        // Forced placement; names win when both quotas are at risk
        if names_needed > 0 && names_needed >= remaining {
            return TokenKind::Name;
        }
        if special_needed > 0 && special_needed >= remaining && so_far.name_count >= 1 {
            return TokenKind::Special;
        }

        let draw: f64 = rng.gen();
        if special_needed > 0 && draw < self.policy.special_probability {
            TokenKind::Special
        } else if names_needed > 0 && draw < self.policy.name_probability {
            TokenKind::Name
        } else {
            TokenKind::Common
        }
    }

    fn terminal_punctuation<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        if rng.gen::<f64>() < self.policy.period_probability {
            '.'
        } else if rng.gen::<f64>() < 0.5 {
            '!'
        } else {
            '?'
        }
    }
}

/// Uppercase the first character, leaving the rest of the word untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn test_pool() -> WordPool {
        WordPool::new(
            strings(&["the", "and", "walk", "open"]),
            strings(&["Light Yagami", "Misa Amane"]),
            strings(&["kira", "shinigami", "task force"]),
        )
        .expect("valid pool")
    }

    fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|n| it.any(|h| h == n))
    }

    // ==================== Quota Tests ====================

    #[test]
    fn test_quotas_small_sentences() {
        assert_eq!(Quotas::for_word_count(1), Quotas { names: 1, special: 1 });
        assert_eq!(Quotas::for_word_count(5), Quotas { names: 1, special: 2 });
        assert_eq!(Quotas::for_word_count(12), Quotas { names: 1, special: 3 });
    }

    #[test]
    fn test_quotas_are_capped() {
        assert_eq!(Quotas::for_word_count(14), Quotas { names: 2, special: 3 });
        assert_eq!(Quotas::for_word_count(25), Quotas { names: 2, special: 3 });
        assert_eq!(Quotas::for_word_count(1000), Quotas { names: 2, special: 3 });
    }

    // ==================== Forced Placement Tests ====================

    #[test]
    fn test_name_forced_into_last_slot() {
        let pool = test_pool();
        let never = SentencePolicy {
            special_probability: 0.0,
            name_probability: 0.0,
            period_probability: 0.7,
        };
        let generator = SentenceGenerator::with_policy(&pool, never);
        let mut rng = StdRng::seed_from_u64(11);

        let content = generator.generate(&mut rng, 5);

        assert_eq!(content.metadata.name_count, 1);
        assert!(pool.names().contains(&content.words[4]));
        // Special rescue never triggers before the name quota is met
        assert_eq!(content.metadata.special_word_count, 0);
        assert_eq!(content.metadata.common_word_count, 4);
    }

    #[test]
    fn test_special_rescue_after_names_met() {
        let pool = test_pool();
        let names_first = SentencePolicy {
            special_probability: 0.0,
            name_probability: 1.0,
            period_probability: 0.7,
        };
        let generator = SentenceGenerator::with_policy(&pool, names_first);
        let mut rng = StdRng::seed_from_u64(12);

        // names quota 1, special quota 3
        let content = generator.generate(&mut rng, 10);

        assert!(pool.names().contains(&content.words[0]));
        assert_eq!(content.metadata.name_count, 1);
        assert_eq!(content.metadata.common_word_count, 6);
        assert_eq!(content.metadata.special_word_count, 3);
        assert_eq!(content.special_words, content.words[7..].to_vec());
    }

    #[test]
    fn test_single_word_sentence_is_a_name() {
        let pool = test_pool();
        let generator = SentenceGenerator::new(&pool);
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..20 {
            let content = generator.generate(&mut rng, 1);
            assert_eq!(content.metadata.name_count, 1);
            assert_eq!(content.metadata.total_words, 1);
        }
    }

    #[test]
    #[should_panic(expected = "word_count must be >= 1")]
    fn test_zero_words_panics() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(0);
        SentenceGenerator::new(&pool).generate(&mut rng, 0);
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("the"), "The");
        assert_eq!(capitalize_first("task force"), "Task force");
        assert_eq!(capitalize_first("Light"), "Light");
        assert_eq!(capitalize_first("ébène"), "Ébène");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_words_are_reported_uncapitalized() {
        let pool = WordPool::new(
            strings(&["walk"]),
            strings(&["rem"]),
            strings(&["kira"]),
        )
        .unwrap();
        let generator = SentenceGenerator::new(&pool);
        let mut rng = StdRng::seed_from_u64(14);

        for _ in 0..50 {
            let content = generator.generate(&mut rng, 5);
            let first = &content.words[0];
            assert!(first.chars().next().unwrap().is_lowercase());
            assert!(content.sentence.starts_with(&capitalize_first(first)));
        }
    }

    #[test]
    fn test_sentence_is_joined_tokens_plus_punctuation() {
        let pool = test_pool();
        let generator = SentenceGenerator::new(&pool);
        let mut rng = StdRng::seed_from_u64(15);

        let content = generator.generate(&mut rng, 12);
        let body = &content.sentence[..content.sentence.len() - 1];

        assert_eq!(body.to_lowercase(), content.words.join(" ").to_lowercase());
        assert!(!body.contains("  "));
    }

    #[test]
    fn test_punctuation_distribution() {
        let pool = test_pool();
        let generator = SentenceGenerator::new(&pool);
        let mut rng = StdRng::seed_from_u64(16);
        let (mut periods, mut bangs, mut questions) = (0, 0, 0);

        for _ in 0..2000 {
            match generator.generate(&mut rng, 5).sentence.chars().last() {
                Some('.') => periods += 1,
                Some('!') => bangs += 1,
                Some('?') => questions += 1,
                other => panic!("unexpected ending: {:?}", other),
            }
        }

        assert!((1250..1550).contains(&periods), "periods: {}", periods);
        assert!((200..400).contains(&bangs), "bangs: {}", bangs);
        assert!((200..400).contains(&questions), "questions: {}", questions);
    }

    // ==================== Batch Tests ====================

    #[test]
    fn test_batch_dedupes_special_words_in_order() {
        let pool = test_pool();
        let generator = SentenceGenerator::new(&pool);
        let mut rng = StdRng::seed_from_u64(17);

        let batch = generator.generate_batch(&mut rng, 20, 25);

        assert_eq!(batch.generated_content.len(), 20);
        let unique: HashSet<_> = batch.special_words.iter().collect();
        assert_eq!(unique.len(), batch.special_words.len());

        let mut expected = Vec::new();
        for word in batch
            .generated_content
            .iter()
            .flat_map(|c| c.special_words.iter())
        {
            if !expected.contains(word) {
                expected.push(word.clone());
            }
        }
        assert_eq!(batch.special_words, expected);
        assert_eq!(batch.statistics.total_special_words, expected.len());
    }

    #[test]
    fn test_batch_statistics() {
        let pool = test_pool();
        let generator = SentenceGenerator::new(&pool);
        let mut rng = StdRng::seed_from_u64(18);

        let batch = generator.generate_batch(&mut rng, 3, 7);

        assert_eq!(batch.statistics.total_sentences, 3);
        assert_eq!(batch.statistics.average_words_per_sentence, 7.0);
    }

    #[test]
    fn test_empty_batch() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(19);
        let batch = SentenceGenerator::new(&pool).generate_batch(&mut rng, 0, 7);

        assert!(batch.generated_content.is_empty());
        assert_eq!(batch.statistics.average_words_per_sentence, 0.0);
    }

    #[test]
    fn test_generated_content_serializes_camel_case() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(20);
        let content = SentenceGenerator::new(&pool).generate(&mut rng, 5);

        let json = serde_json::to_value(&content).unwrap();
        assert!(json["specialWords"].is_array());
        assert_eq!(json["metadata"]["totalWords"], 5);
        assert!(json["metadata"]["commonWordCount"].is_number());
        assert!(json["metadata"]["nameCount"].is_number());
        assert!(json["metadata"]["specialWordCount"].is_number());
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_sentence_invariants(seed in any::<u64>(), word_count in 1usize..60) {
            let pool = test_pool();
            let generator = SentenceGenerator::new(&pool);
            let mut rng = StdRng::seed_from_u64(seed);

            let content = generator.generate(&mut rng, word_count);
            let meta = &content.metadata;
            let quotas = Quotas::for_word_count(word_count);

            prop_assert_eq!(content.words.len(), word_count);
            prop_assert_eq!(meta.total_words, word_count);
            prop_assert_eq!(
                meta.common_word_count + meta.name_count + meta.special_word_count,
                word_count
            );
            prop_assert!(meta.name_count >= 1);
            prop_assert!(meta.name_count <= quotas.names);
            prop_assert!(meta.special_word_count <= quotas.special);
            prop_assert_eq!(content.special_words.len(), meta.special_word_count);
            prop_assert!(is_subsequence(&content.special_words, &content.words));

            let last = content.sentence.chars().last().unwrap();
            prop_assert!(matches!(last, '.' | '!' | '?'));
            let first = content.sentence.chars().next().unwrap();
            prop_assert!(!first.is_alphabetic() || first.is_uppercase());
        }

        #[test]
        fn prop_tokens_come_from_their_pool(seed in any::<u64>(), word_count in 5usize..26) {
            let pool = test_pool();
            let generator = SentenceGenerator::new(&pool);
            let mut rng = StdRng::seed_from_u64(seed);

            let content = generator.generate(&mut rng, word_count);
            let names = content.words.iter().filter(|w| pool.names().contains(*w)).count();
            let commons = content.words.iter().filter(|w| pool.common().contains(*w)).count();

            prop_assert_eq!(names, content.metadata.name_count);
            prop_assert_eq!(commons, content.metadata.common_word_count);
            prop_assert!(content.special_words.iter().all(|w| pool.special().contains(w)));
        }
    }
}
