//! Stopword filtering for keyword candidates.
//!
//! The default set is a closed list of English function words (articles,
//! auxiliaries, pronouns) and filler terms that carry no topical signal on a
//! web page. Callers can extend it with their own words or with the Stopwords
//! ISO English list from the `stop-words` crate.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// The literal token produced by a run of hyphens after cleanup.
const HYPHEN: &str = "-";

/// An immutable-after-construction stopword filter.
///
/// All words are stored lowercase. Lookups expect lowercase input; the
/// extractors lowercase text before tokenizing.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercase stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter with the default English function words and fillers.
    pub fn new() -> Self {
        Self::from_words(ENGLISH_FUNCTION_WORDS.iter().chain(FILLER_WORDS))
    }

    /// Creates a filter from an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self {
            words: HashSet::new(),
        };
        stopwords.extend(words);
        stopwords
    }

    /// Adds words to the filter, lowercasing each one.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Adds the Stopwords ISO English list.
    pub fn with_iso_english(mut self) -> Self {
        self.extend(stop_words::get(LANGUAGE::English));
        self
    }

    /// Checks if a word is in the stopword list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Checks if a token can never be a keyword.
    ///
    /// Rejects listed stopwords, tokens of at most one character, and the
    /// bare hyphen regardless of list membership.
    pub fn rejects(&self, word: &str) -> bool {
        word == HYPHEN || word.chars().count() <= 1 || self.contains(word)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Articles, auxiliaries, pronouns, prepositions and conjunctions.
static ENGLISH_FUNCTION_WORDS: &[&str] = &[
    "the", "is", "are", "was", "were", "be", "been", "being", "am", "i", "you", "he", "she", "it",
    "we", "they", "of", "and", "or", "to", "in", "that", "have", "has", "had", "with", "for", "on",
    "at", "by", "an", "a", "as", "from", "but", "not", "this", "which", "will", "would", "can",
    "could", "should", "do", "does", "did", "so", "if", "about", "into", "than", "then", "them",
    "their", "there", "these", "those", "such", "also", "just", "up", "out", "over", "after",
    "before", "between", "because", "while", "where", "when", "who", "whom", "what", "how", "why",
    "all", "any", "each", "few", "more", "most", "other", "some", "no", "nor", "only", "own",
    "same", "too", "very", "s", "t", "don", "now", "here", "my", "your", "his", "her", "its",
    "our", "mine", "yours", "hers", "ours", "theirs",
];

/// Vague nouns, adverbs and interjections that rarely describe a page topic.
static FILLER_WORDS: &[&str] = &[
    // Indefinite nouns and pronouns
    "thing", "things", "something", "anything", "everything", "nothing", "anyone", "someone",
    "everyone", "none", "one", "ones", "another", "others",
    // Frequency and hedging adverbs
    "again", "always", "never", "sometimes", "often", "maybe", "perhaps", "really", "quite",
    "even", "still", "yet", "already", "soon", "today", "tomorrow", "yesterday",
    // Generic container nouns
    "lot", "lots", "bit", "bits", "kind", "kinds", "type", "types", "way", "ways", "part",
    "parts", "place", "places", "area", "areas", "case", "cases", "example", "examples", "etc",
    // Interjections
    "well", "oh", "hey", "hi", "hello", "hmm", "uh", "um", "ah", "like", "okay", "ok", "alright",
    "right", "yeah", "nope", "yep", "huh", "hurray", "oops", "wow", "gee", "gosh", "whoa",
];
