//! Whitespace tokenization with stopword filtering and plural folding.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use super::Lexicon;
use crate::Candidate;

/// Anything that is not a word character, whitespace or hyphen.
///
/// `\w` and `\s` are Unicode classes, so accented and non-Latin letters stay
/// inside their tokens.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("non-word regex"));

/// Runs of two or more hyphens.
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen regex"));

/// Extracts canonical keys from non-CJK text.
#[derive(Debug, Clone, Copy)]
pub struct GenericExtractor<'a> {
    /// Stopwords and normalization rules.
    lexicon: &'a Lexicon,
}

impl<'a> GenericExtractor<'a> {
    /// Creates an extractor over a lexicon.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Extracts keys in first-occurrence order, each at most once.
    ///
    /// Tokens are lowercased, so the surface form of each candidate is its key.
    pub fn extract(&self, text: &str) -> Vec<Candidate> {
        let lower = text.to_lowercase();
        let cleaned = NON_WORD.replace_all(&lower, " ");
        let cleaned = HYPHEN_RUN.replace_all(&cleaned, "-");

        let stopwords = &self.lexicon.stopwords;
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for token in cleaned.split_whitespace() {
            if stopwords.rejects(token) {
                continue;
            }
            let key = self.lexicon.normalizer.normalize(token);
            if stopwords.rejects(&key) {
                continue;
            }
            if seen.insert(key.clone()) {
                candidates.push(Candidate::from_key(key));
            }
        }

        candidates
    }
}
