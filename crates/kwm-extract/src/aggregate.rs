//! Weighted score aggregation across page fields.
//!
//! Each field adds its weight once to every distinct key it contains, no
//! matter how often the key repeats inside the field. Alongside the score the
//! aggregator tracks a representative surface form per key: the longest form
//! seen so far, or the first one on equal length. Fields must therefore be
//! added in a fixed order for the output to be reproducible.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use tracing::{debug, warn};

use crate::{
    Candidate, Field,
    extract::{Lexicon, extract_candidates},
    tagger::NounTagger,
    term::is_better_form,
};

/// Accumulated scores and representative forms for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    /// Canonical key to accumulated score.
    scores: HashMap<String, u32>,
    /// Canonical key to representative surface form.
    forms: HashMap<String, String>,
}

impl ScoreTable {
    /// Returns the score for a key.
    pub fn score(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    /// Returns the representative form for a key.
    pub fn form(&self, key: &str) -> Option<&str> {
        self.forms.get(key).map(String::as_str)
    }

    /// Iterates over `(key, score)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if no key has been scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Adds `weight` to a key and offers a surface form for it.
    fn add(&mut self, candidate: Candidate, weight: u32) {
        let score = self.scores.entry(candidate.key.clone()).or_insert(0);
        *score = score.saturating_add(weight);
        self.offer_form(candidate);
    }

    /// Replaces the stored form if the candidate's form is strictly longer.
    fn offer_form(&mut self, candidate: Candidate) {
        match self.forms.entry(candidate.key) {
            Entry::Vacant(e) => {
                e.insert(candidate.surface);
            }
            Entry::Occupied(mut e) => {
                if is_better_form(&candidate.surface, e.get()) {
                    e.insert(candidate.surface);
                }
            }
        }
    }
}

/// Folds field text into a [`ScoreTable`].
pub struct ScoreAggregator<'a> {
    /// Stopwords and normalization rules.
    lexicon: &'a Lexicon,
    /// Tagger for CJK text.
    tagger: &'a dyn NounTagger,
    /// Scores collected so far.
    table: ScoreTable,
}

impl<'a> ScoreAggregator<'a> {
    /// Creates an empty aggregator.
    pub fn new(lexicon: &'a Lexicon, tagger: &'a dyn NounTagger) -> Self {
        Self {
            lexicon,
            tagger,
            table: ScoreTable::default(),
        }
    }

    /// Adds one field, made of one or more text fragments.
    ///
    /// Blank fragments are skipped. A fragment whose tagger is unavailable is
    /// logged and skipped; the rest of the field still counts. Keys are
    /// deduplicated across all fragments of the field. Returns the number of
    /// distinct keys the field contributed.
    pub fn add_field<'t, I>(&mut self, field: Field, weight: u32, texts: I) -> usize
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut candidates = Vec::new();
        for text in texts {
            if text.trim().is_empty() {
                continue;
            }
            match extract_candidates(text, self.lexicon, self.tagger) {
                Ok(found) => candidates.extend(found),
                Err(e) => warn!(%field, error = %e, "skipping text"),
            }
        }
        let added = self.add_candidates(weight, candidates);
        debug!(%field, weight, keys = added, "aggregated field");
        added
    }

    /// Adds pre-extracted candidates as one field.
    ///
    /// The weight is added once per distinct key; every candidate is still
    /// offered as a representative form. Returns the number of distinct keys.
    pub fn add_candidates<I>(&mut self, weight: u32, candidates: I) -> usize
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut seen = HashSet::new();
        for candidate in candidates {
            if seen.insert(candidate.key.clone()) {
                self.table.add(candidate, weight);
            } else {
                self.table.offer_form(candidate);
            }
        }
        seen.len()
    }

    /// Returns the scores collected so far.
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Consumes the aggregator, returning its scores.
    pub fn finish(self) -> ScoreTable {
        self.table
    }
}
