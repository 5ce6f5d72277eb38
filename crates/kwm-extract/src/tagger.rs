//! Part-of-speech tagging capability for CJK text.
//!
//! Keyword extraction for Japanese and Chinese text needs a morphological
//! analyzer to find word boundaries. The analyzer is abstracted behind
//! [`NounTagger`] so any backend can be plugged in without touching the
//! filtering and deduplication logic in the tagged-noun extractor.

use std::mem;

use thiserror::Error;

use crate::script::{is_han, is_hiragana, is_katakana};

/// Prolonged sound mark, which extends Katakana words.
const PROLONGED_SOUND_MARK: char = 'ー';

/// Part of speech assigned to a token by a tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    /// General noun.
    CommonNoun,
    /// Proper noun (names, places, products).
    ProperNoun,
    /// Noun that forms a verb with "suru".
    VerbalNoun,
    /// Stem of an adjectival noun.
    AdjectivalNounStem,
    /// Particle or auxiliary.
    Particle,
    /// Punctuation and symbols.
    Symbol,
    /// Any other tag, carrying the backend's label.
    Other(String),
}

impl PartOfSpeech {
    /// Returns true for tags that can form a keyword.
    pub fn is_noun_like(&self) -> bool {
        matches!(
            self,
            Self::CommonNoun | Self::ProperNoun | Self::VerbalNoun | Self::AdjectivalNounStem
        )
    }
}

/// A surface form with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Token text as it appears in the input.
    pub surface: String,
    /// Assigned part of speech.
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    /// Creates a tagged token.
    pub fn new(surface: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            pos,
        }
    }
}

/// Errors raised by a tagging backend.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// The backend could not be initialized or is disabled.
    #[error("tokenizer unavailable: {reason}")]
    Unavailable {
        /// Why the backend is unavailable.
        reason: String,
    },
}

/// A morphological analyzer that tags tokens with parts of speech.
pub trait NounTagger {
    /// Splits text into tagged tokens.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

/// A tagger that is never available.
///
/// Used when CJK extraction is turned off; fields routed to the tagged path
/// contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTagger;

impl NounTagger for DisabledTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Err(TaggerError::Unavailable {
            reason: "CJK tagging is disabled".to_string(),
        })
    }
}

/// Script class of a character, used to split text into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptClass {
    /// Han ideographs.
    Han,
    /// Katakana and the prolonged sound mark.
    Katakana,
    /// Hiragana.
    Hiragana,
    /// Letters and digits of other scripts.
    Alphanumeric,
    /// Whitespace, which separates runs without forming tokens.
    Space,
    /// Everything else.
    Symbol,
}

impl ScriptClass {
    /// Classifies a character.
    fn of(c: char) -> Self {
        if is_han(c) {
            Self::Han
        } else if is_katakana(c) || c == PROLONGED_SOUND_MARK {
            Self::Katakana
        } else if is_hiragana(c) {
            Self::Hiragana
        } else if c.is_alphanumeric() || c == '_' || c == '-' {
            Self::Alphanumeric
        } else if c.is_whitespace() {
            Self::Space
        } else {
            Self::Symbol
        }
    }

    /// Part of speech for a run of this class.
    fn pos(self) -> PartOfSpeech {
        match self {
            Self::Han | Self::Katakana => PartOfSpeech::CommonNoun,
            Self::Alphanumeric => PartOfSpeech::ProperNoun,
            Self::Hiragana => PartOfSpeech::Particle,
            Self::Space | Self::Symbol => PartOfSpeech::Symbol,
        }
    }
}

/// A dictionary-free tagger that splits text at script boundaries.
///
/// Han and Katakana runs become common nouns, Latin and digit runs proper
/// nouns, and Hiragana runs particles. Japanese writes content words in
/// Kanji and Katakana and grammatical words in Hiragana, so script runs are a
/// usable approximation of noun phrases when no dictionary is installed.
///
/// Compound nouns written in more than one script come out as separate
/// nouns: "東京タワー" yields "東京" and "タワー", never the whole compound.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRunTagger;

impl NounTagger for ScriptRunTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut run_class: Option<ScriptClass> = None;

        for c in text.chars() {
            let class = ScriptClass::of(c);
            if run_class != Some(class) {
                flush_run(&mut tokens, &mut run, run_class);
                run_class = Some(class);
            }
            run.push(c);
        }
        flush_run(&mut tokens, &mut run, run_class);

        Ok(tokens)
    }
}

/// Emits the pending run as a token, skipping whitespace.
fn flush_run(tokens: &mut Vec<TaggedToken>, run: &mut String, class: Option<ScriptClass>) {
    if run.is_empty() {
        return;
    }
    let surface = mem::take(run);
    if let Some(class) = class
        && class != ScriptClass::Space
    {
        tokens.push(TaggedToken::new(surface, class.pos()));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn surfaces(tokens: &[TaggedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.surface.as_str()).collect()
    }

    #[test]
    fn splits_at_script_boundaries() {
        let tokens = ScriptRunTagger.tag("東京タワーの夜景").unwrap();
        assert_eq!(surfaces(&tokens), vec!["東京", "タワー", "の", "夜景"]);
        assert_eq!(tokens[0].pos, PartOfSpeech::CommonNoun);
        assert_eq!(tokens[1].pos, PartOfSpeech::CommonNoun);
        assert_eq!(tokens[2].pos, PartOfSpeech::Particle);
    }

    #[test]
    fn mixed_script_compounds_are_split() {
        let tokens = ScriptRunTagger.tag("東京タワー").unwrap();
        assert_eq!(surfaces(&tokens), vec!["東京", "タワー"]);
        let tokens = ScriptRunTagger.tag("ラーメン屋").unwrap();
        assert_eq!(surfaces(&tokens), vec!["ラーメン", "屋"]);
        assert!(tokens.iter().all(|t| t.pos.is_noun_like()));
    }

    #[test]
    fn latin_runs_are_proper_nouns() {
        let tokens = ScriptRunTagger.tag("Rust入門 2024年版").unwrap();
        assert_eq!(surfaces(&tokens), vec!["Rust", "入門", "2024", "年版"]);
        assert_eq!(tokens[0].pos, PartOfSpeech::ProperNoun);
        assert_eq!(tokens[2].pos, PartOfSpeech::ProperNoun);
    }

    #[test]
    fn symbols_are_tagged_and_spaces_dropped() {
        let tokens = ScriptRunTagger.tag("「検索」 エンジン").unwrap();
        assert_eq!(surfaces(&tokens), vec!["「", "検索", "」", "エンジン"]);
        assert_eq!(tokens[0].pos, PartOfSpeech::Symbol);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(ScriptRunTagger.tag("").unwrap().is_empty());
        assert!(ScriptRunTagger.tag("   ").unwrap().is_empty());
    }

    #[test]
    fn disabled_tagger_is_unavailable() {
        let err = DisabledTagger.tag("東京").unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn noun_like_tags() {
        assert!(PartOfSpeech::CommonNoun.is_noun_like());
        assert!(PartOfSpeech::ProperNoun.is_noun_like());
        assert!(PartOfSpeech::VerbalNoun.is_noun_like());
        assert!(PartOfSpeech::AdjectivalNounStem.is_noun_like());
        assert!(!PartOfSpeech::Particle.is_noun_like());
        assert!(!PartOfSpeech::Other("動詞".into()).is_noun_like());
    }
}
