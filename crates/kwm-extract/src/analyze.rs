//! Main keyword analysis API.
//!
//! [`KeywordAnalyzer`] runs the whole pipeline over the text of one page:
//!
//! 1. Each field is routed to the generic or tagged extractor
//! 2. Field keys are deduplicated and weighted into a score table
//! 3. The table is ranked and truncated
//!
//! A fresh score table is built per call; the analyzer holds no page state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Field, FieldWeights, Lexicon, RankedKeyword, ScoreAggregator, rank_keywords,
    tagger::{NounTagger, ScriptRunTagger},
};

/// Text of one page, shaped per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFields {
    /// Document title.
    pub title: Option<String>,
    /// Individual meta keyword phrases, already split and deduplicated.
    pub meta_keywords: Vec<String>,
    /// Page description.
    pub description: Option<String>,
    /// Heading text, each heading repeated for emphasis.
    pub main_content: Option<String>,
}

impl PageFields {
    /// Returns the text fragments of a field.
    pub fn texts(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Title => self.title.as_deref().into_iter().collect(),
            Field::MetaKeyword => self.meta_keywords.iter().map(String::as_str).collect(),
            Field::Description => self.description.as_deref().into_iter().collect(),
            Field::MainContent => self.main_content.as_deref().into_iter().collect(),
        }
    }

    /// Returns true if every field is absent or blank.
    pub fn is_empty(&self) -> bool {
        Field::ALL
            .iter()
            .all(|f| self.texts(*f).iter().all(|t| t.trim().is_empty()))
    }
}

/// Contribution of one field to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    /// The field.
    pub field: Field,
    /// Weight applied to each of its keys.
    pub weight: u32,
    /// Number of distinct keys it contained.
    pub keys: usize,
}

/// Result of analyzing one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordReport {
    /// Ranked keywords, highest score first.
    pub keywords: Vec<RankedKeyword>,
    /// Per-field contributions, in aggregation order.
    pub fields: Vec<FieldSummary>,
    /// Distinct keys found before the limit was applied.
    pub total_keys: usize,
}

impl KeywordReport {
    /// Returns true if no keyword was found.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Weighted multi-field keyword extractor.
pub struct KeywordAnalyzer {
    /// Stopwords and normalization rules.
    lexicon: Lexicon,
    /// Per-field weights.
    weights: FieldWeights,
    /// Backend for CJK text.
    tagger: Box<dyn NounTagger>,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(
            Lexicon::default(),
            FieldWeights::default(),
            Box::new(ScriptRunTagger),
        )
    }
}

impl KeywordAnalyzer {
    /// Creates an analyzer.
    pub fn new(lexicon: Lexicon, weights: FieldWeights, tagger: Box<dyn NounTagger>) -> Self {
        Self {
            lexicon,
            weights,
            tagger,
        }
    }

    /// Extracts and ranks keywords from page fields.
    ///
    /// Fields are aggregated in [`Field::ALL`] order. A `limit` of zero keeps
    /// every keyword.
    pub fn analyze(&self, page: &PageFields, limit: usize) -> KeywordReport {
        let mut aggregator = ScoreAggregator::new(&self.lexicon, self.tagger.as_ref());
        let mut fields = Vec::with_capacity(Field::ALL.len());

        for field in Field::ALL {
            let weight = self.weights.get(field);
            let keys = aggregator.add_field(field, weight, page.texts(field));
            fields.push(FieldSummary {
                field,
                weight,
                keys,
            });
        }

        let table = aggregator.finish();
        let keywords = rank_keywords(&table, limit);
        debug!(
            total = table.len(),
            returned = keywords.len(),
            limit,
            "ranked keywords"
        );

        KeywordReport {
            keywords,
            fields,
            total_keys: table.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Normalizer, Stopwords, tagger::DisabledTagger};

    fn page(title: &str, meta: &[&str]) -> PageFields {
        PageFields {
            title: Some(title.to_string()),
            meta_keywords: meta.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn title_and_meta_keywords_rank_together() {
        let analyzer = KeywordAnalyzer::default();
        let report = analyzer.analyze(&page("The Quick Brown Fox", &["fox", "jumping"]), 0);

        let got: Vec<_> = report
            .keywords
            .iter()
            .map(|k| (k.keyword.as_str(), k.score))
            .collect();
        assert_eq!(
            got,
            vec![("fox", 13), ("jumping", 8), ("brown", 5), ("quick", 5)]
        );
        assert_eq!(report.total_keys, 4);
    }

    #[test]
    fn field_summaries_follow_aggregation_order() {
        let analyzer = KeywordAnalyzer::default();
        let report = analyzer.analyze(&page("Go Go", &[]), 0);
        let fields: Vec<_> = report.fields.iter().map(|f| (f.field, f.keys)).collect();
        assert_eq!(
            fields,
            vec![
                (Field::Title, 1),
                (Field::MetaKeyword, 0),
                (Field::Description, 0),
                (Field::MainContent, 0),
            ]
        );
        assert_eq!(report.keywords, vec![RankedKeyword::new("go", 5)]);
    }

    #[test]
    fn limit_applies_after_ranking() {
        let analyzer = KeywordAnalyzer::default();
        let report = analyzer.analyze(&page("The Quick Brown Fox", &["fox", "jumping"]), 2);
        assert_eq!(report.keywords.len(), 2);
        assert_eq!(report.keywords[0].keyword, "fox");
        assert_eq!(report.total_keys, 4);
    }

    #[test]
    fn all_fields_contribute() {
        let analyzer = KeywordAnalyzer::default();
        let page = PageFields {
            title: Some("Rust Tutorial".into()),
            meta_keywords: vec!["rust".into()],
            description: Some("A tutorial for Rust".into()),
            main_content: Some("Ownership Ownership Ownership".into()),
        };
        let report = analyzer.analyze(&page, 0);
        assert_eq!(report.keywords[0], RankedKeyword::new("rust", 16));
        assert_eq!(report.keywords[1], RankedKeyword::new("tutorial", 8));
        assert_eq!(report.keywords[2], RankedKeyword::new("ownership", 1));
    }

    #[test]
    fn custom_weights_and_lexicon() {
        let weights = FieldWeights {
            title: 1,
            meta_keyword: 1,
            description: 1,
            main_content: 10,
        };
        let lexicon = Lexicon::new(Stopwords::from_words(["fox"]), Normalizer::new());
        let analyzer = KeywordAnalyzer::new(lexicon, weights, Box::new(DisabledTagger));
        let page = PageFields {
            title: Some("Fox Den".into()),
            main_content: Some("Den den den".into()),
            ..Default::default()
        };
        let report = analyzer.analyze(&page, 0);
        assert_eq!(report.keywords, vec![RankedKeyword::new("den", 11)]);
    }

    #[test]
    fn cjk_title_uses_tagger_surface_forms() {
        let analyzer = KeywordAnalyzer::default();
        let report = analyzer.analyze(&page("東京タワーの夜景", &["東京", "Tokyo"]), 0);
        let got: Vec<_> = report
            .keywords
            .iter()
            .map(|k| (k.keyword.as_str(), k.score))
            .collect();
        assert_eq!(
            got,
            vec![("東京", 13), ("tokyo", 8), ("タワー", 5), ("夜景", 5)]
        );
    }

    #[test]
    fn empty_page_yields_empty_report() {
        let analyzer = KeywordAnalyzer::default();
        let fields = PageFields::default();
        assert!(fields.is_empty());
        let report = analyzer.analyze(&fields, 20);
        assert!(report.is_empty());
        assert_eq!(report.total_keys, 0);
    }
}
