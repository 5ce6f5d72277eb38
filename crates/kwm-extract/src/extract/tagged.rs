//! Noun selection over tagger output.

use std::collections::HashMap;

use crate::{
    Candidate,
    script::{is_cjk, is_han},
    tagger::{NounTagger, TaggedToken, TaggerError},
    term::is_better_form,
};

/// Extracts noun keywords from CJK text through a tagger.
#[derive(Clone, Copy)]
pub struct TaggedNounExtractor<'a> {
    /// Backend that segments and tags the text.
    tagger: &'a dyn NounTagger,
}

impl<'a> TaggedNounExtractor<'a> {
    /// Creates an extractor over a tagger.
    pub fn new(tagger: &'a dyn NounTagger) -> Self {
        Self { tagger }
    }

    /// Tags the text and selects noun candidates.
    pub fn extract(&self, text: &str) -> Result<Vec<Candidate>, TaggerError> {
        let tokens = self.tagger.tag(text)?;
        Ok(select_nouns(&tokens))
    }
}

/// Keeps noun-like tokens, keyed by their lowercase form.
///
/// Each key appears once, in first-occurrence order, carrying the longest
/// surface form seen for it.
pub fn select_nouns(tokens: &[TaggedToken]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        if !token.pos.is_noun_like() || !is_keyword_surface(&token.surface) {
            continue;
        }
        let surface = token.surface.as_str();
        let key = surface.to_lowercase();
        match index.get(&key) {
            Some(&i) => {
                if is_better_form(surface, &candidates[i].surface) {
                    candidates[i].surface = surface.to_string();
                }
            }
            None => {
                index.insert(key.clone(), candidates.len());
                candidates.push(Candidate::new(key, surface));
            }
        }
    }

    candidates
}

/// Rejects empty, symbol-only and single non-ideograph surfaces.
fn is_keyword_surface(surface: &str) -> bool {
    let mut chars = surface.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(c), None) => is_han(c),
        _ => !is_symbol_only(surface),
    }
}

/// Returns true if no character is a letter, digit or CJK character.
fn is_symbol_only(surface: &str) -> bool {
    !surface.chars().any(|c| c.is_alphanumeric() || is_cjk(c))
}
