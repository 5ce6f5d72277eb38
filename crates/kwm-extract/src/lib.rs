//! Weighted keyword extraction for a single web page.
//!
//! A page contributes text through four fields (title, meta keywords,
//! description, headings), each with an integer weight. For every field:
//!
//! 1. **Routing**: text containing CJK characters goes to the tagged-noun
//!    extractor, everything else to the generic token extractor
//! 2. **Extraction**: candidates are filtered against [`Stopwords`] and folded
//!    to a canonical key by the [`Normalizer`]
//! 3. **Aggregation**: each distinct key gains the field's weight once
//!
//! The [`rank_keywords`] step then orders keys by total score and resolves
//! each to its longest surface form.
//!
//! ## Tagging
//!
//! Word segmentation for CJK text is abstracted behind [`NounTagger`]. The
//! built-in [`ScriptRunTagger`] needs no dictionary; it splits text at script
//! boundaries. Compounds that mix scripts are therefore split too:
//! "東京タワー" is keyed as "東京" and "タワー", not as one noun. Plug in a
//! dictionary-backed [`NounTagger`] to keep such compounds whole.

#![warn(missing_docs)]

mod aggregate;
mod analyze;
mod extract;
mod normalize;
mod rank;
mod script;
mod stopwords;
mod tagger;
mod term;

pub use aggregate::{ScoreAggregator, ScoreTable};
pub use analyze::{FieldSummary, KeywordAnalyzer, KeywordReport, PageFields};
pub use extract::{GenericExtractor, Lexicon, TaggedNounExtractor, extract_candidates};
pub use normalize::Normalizer;
pub use rank::{RankedKeyword, rank_keywords};
pub use script::{ExtractorKind, contains_cjk, is_cjk, select_extractor};
pub use stopwords::Stopwords;
pub use tagger::{
    DisabledTagger, NounTagger, PartOfSpeech, ScriptRunTagger, TaggedToken, TaggerError,
};
pub use term::{Candidate, Field, FieldWeights};
