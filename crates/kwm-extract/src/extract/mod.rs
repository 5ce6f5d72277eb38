//! Candidate extraction for one piece of field text.
//!
//! Two extractors exist:
//!
//! - [`GenericExtractor`] tokenizes on whitespace, filters stopwords and folds
//!   plurals. It handles Latin script and anything else that is not CJK.
//! - [`TaggedNounExtractor`] delegates word segmentation to a [`NounTagger`]
//!   and keeps noun-like tokens.
//!
//! [`extract_candidates`] picks one of them with [`select_extractor`].

mod generic;
mod tagged;

pub use generic::GenericExtractor;
pub use tagged::TaggedNounExtractor;

use crate::{
    Candidate, Normalizer, Stopwords,
    script::{ExtractorKind, select_extractor},
    tagger::{NounTagger, TaggerError},
};

/// Stopwords and normalization rules for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Words that never become keywords.
    pub stopwords: Stopwords,
    /// Plural folding rules.
    pub normalizer: Normalizer,
}

impl Lexicon {
    /// Creates a lexicon from its parts.
    pub fn new(stopwords: Stopwords, normalizer: Normalizer) -> Self {
        Self {
            stopwords,
            normalizer,
        }
    }
}

/// Extracts deduplicated candidates from text, routing CJK text to the tagger.
///
/// Generic extraction never fails. Tagged extraction fails only when the
/// tagger is unavailable.
pub fn extract_candidates(
    text: &str,
    lexicon: &Lexicon,
    tagger: &dyn NounTagger,
) -> Result<Vec<Candidate>, TaggerError> {
    match select_extractor(text) {
        ExtractorKind::Generic => Ok(GenericExtractor::new(lexicon).extract(text)),
        ExtractorKind::TaggedNoun => TaggedNounExtractor::new(tagger).extract(text),
    }
}
