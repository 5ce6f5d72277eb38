//! Keyword ranking.
//!
//! Keys are ordered by descending score. Ties are broken by the ascending
//! representative form, then by key, so that the same page always produces
//! the same list.

use serde::Serialize;

use crate::ScoreTable;

/// A keyword in its display form with its aggregate score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedKeyword {
    /// Representative surface form.
    pub keyword: String,
    /// Sum of the weights of every field containing the keyword.
    pub score: u32,
}

impl RankedKeyword {
    /// Creates a ranked keyword.
    pub fn new(keyword: impl Into<String>, score: u32) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }
}

/// Ranks every key in the table.
///
/// Keys without a stored form fall back to the key itself. A `limit` of zero
/// returns every keyword.
pub fn rank_keywords(table: &ScoreTable, limit: usize) -> Vec<RankedKeyword> {
    let mut entries: Vec<(&str, &str, u32)> = table
        .iter()
        .map(|(key, score)| (key, table.form(key).unwrap_or(key), score))
        .collect();

    entries.sort_by(|a, b| {
        b.2.cmp(&a.2)
            .then_with(|| a.1.cmp(b.1))
            .then_with(|| a.0.cmp(b.0))
    });

    if limit > 0 {
        entries.truncate(limit);
    }

    entries
        .into_iter()
        .map(|(_, form, score)| RankedKeyword::new(form, score))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Candidate, Lexicon, ScoreAggregator, tagger::ScriptRunTagger};

    fn table(entries: &[(&str, &str, u32)]) -> ScoreTable {
        let lexicon = Lexicon::default();
        let mut agg = ScoreAggregator::new(&lexicon, &ScriptRunTagger);
        for (key, surface, score) in entries {
            agg.add_candidates(*score, [Candidate::new(*key, *surface)]);
        }
        agg.finish()
    }

    fn words(ranked: &[RankedKeyword]) -> Vec<&str> {
        ranked.iter().map(|r| r.keyword.as_str()).collect()
    }

    #[test]
    fn sorts_by_score_descending() {
        let t = table(&[("low", "low", 1), ("high", "high", 9), ("mid", "mid", 4)]);
        let ranked = rank_keywords(&t, 0);
        assert_eq!(words(&ranked), vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].score, 9);
    }

    #[test]
    fn ties_break_on_form() {
        let t = table(&[("quick", "quick", 5), ("brown", "brown", 5), ("fox", "fox", 13)]);
        let ranked = rank_keywords(&t, 0);
        assert_eq!(words(&ranked), vec!["fox", "brown", "quick"]);
    }

    #[test]
    fn ties_use_representative_form_not_key() {
        let t = table(&[("zeta", "Alpha", 2), ("alpha", "beta", 2)]);
        assert_eq!(words(&rank_keywords(&t, 0)), vec!["Alpha", "beta"]);
    }

    #[test]
    fn limit_truncates() {
        let t = table(&[("a1", "a1", 3), ("b1", "b1", 2), ("c1", "c1", 1)]);
        assert_eq!(rank_keywords(&t, 2).len(), 2);
        assert_eq!(words(&rank_keywords(&t, 2)), vec!["a1", "b1"]);
        assert_eq!(rank_keywords(&t, 0).len(), 3);
        assert_eq!(rank_keywords(&t, 10).len(), 3);
    }

    #[test]
    fn empty_table_ranks_empty() {
        assert!(rank_keywords(&ScoreTable::default(), 5).is_empty());
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_string(&RankedKeyword::new("fox", 13)).unwrap();
        assert_eq!(json, r#"{"keyword":"fox","score":13}"#);
    }
}
