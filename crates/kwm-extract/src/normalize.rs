//! Lexical normalization of candidate tokens.
//!
//! Folds inflected English forms onto a canonical key so that "cities" and
//! "city" aggregate together. Known exceptions are consulted before any
//! suffix stripping:
//!
//! 1. Invariant words ("series", "news") are returned as-is.
//! 2. Irregular plurals ("children", "mice") map through a dictionary.
//! 3. Otherwise `-ies` becomes `-y`, then `-es` and `-s` are stripped.
//!
//! The suffix rules are a heuristic. Singular words ending in "s" are
//! stripped too ("business" becomes "busines") unless listed as invariant.

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

/// Folds lowercase tokens to their canonical singular key.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Words whose singular and plural coincide.
    invariant: HashSet<String>,
    /// Irregular plural to singular mappings.
    plurals: HashMap<String, String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Creates a normalizer with the default invariant words and plural dictionary.
    pub fn new() -> Self {
        let mut normalizer = Self::empty();
        normalizer.add_invariant(INVARIANT_WORDS);
        normalizer.add_plurals(IRREGULAR_PLURALS.iter().copied());
        normalizer
    }

    /// Creates a normalizer with no exceptions, relying on suffix rules only.
    pub fn empty() -> Self {
        Self {
            invariant: HashSet::new(),
            plurals: HashMap::new(),
        }
    }

    /// Adds invariant words.
    pub fn add_invariant<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.invariant
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Adds plural to singular mappings, overriding existing entries.
    pub fn add_plurals<I, P, S>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<str>,
        S: AsRef<str>,
    {
        self.plurals.extend(pairs.into_iter().map(|(plural, singular)| {
            (
                plural.as_ref().to_lowercase(),
                singular.as_ref().to_lowercase(),
            )
        }));
    }

    /// Folds a lowercase word to its canonical key.
    pub fn normalize(&self, word: &str) -> String {
        if self.invariant.contains(word) {
            return word.to_string();
        }
        if let Some(singular) = self.plurals.get(word) {
            return singular.clone();
        }
        strip_plural_suffix(word).into_owned()
    }
}

/// Applies the `-ies`, `-es`, `-s` heuristics in that order.
///
/// Lengths are byte lengths; all suffixes are ASCII so slicing is safe.
fn strip_plural_suffix(word: &str) -> Cow<'_, str> {
    if word.len() > 3
        && let Some(stem) = word.strip_suffix("ies")
    {
        return format!("{stem}y").into();
    }
    if word.len() > 2
        && let Some(stem) = word.strip_suffix("es")
    {
        return stem.into();
    }
    if word.len() > 1
        && let Some(stem) = word.strip_suffix('s')
    {
        return stem.into();
    }
    word.into()
}

/// Mass nouns and words ending in "s" that are not plurals.
static INVARIANT_WORDS: &[&str] = &[
    "series",
    "species",
    "deer",
    "fish",
    "sheep",
    "moose",
    "aircraft",
    "news",
    "information",
    "equipment",
    "furniture",
    "rice",
    "sugar",
    "water",
    "oil",
    "advice",
    "knowledge",
    "research",
    "data",
];

/// Irregular and frequent plural forms.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("people", "person"),
    ("oxen", "ox"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("sequences", "sequence"),
    ("trees", "tree"),
    ("cars", "car"),
    ("hospitals", "hospital"),
    ("books", "book"),
    ("phones", "phone"),
    ("houses", "house"),
    ("homes", "home"),
    ("schools", "school"),
    ("games", "game"),
    ("names", "name"),
    ("words", "word"),
    ("times", "time"),
    ("years", "year"),
    ("days", "day"),
    ("weeks", "week"),
    ("months", "month"),
    ("hours", "hour"),
    ("minutes", "minute"),
    ("seconds", "second"),
    ("businesses", "business"),
    ("companies", "company"),
    ("products", "product"),
    ("services", "service"),
    ("customers", "customer"),
    ("users", "user"),
    ("applications", "application"),
    ("systems", "system"),
    ("files", "file"),
    ("databases", "database"),
    ("servers", "server"),
    ("networks", "network"),
    ("devices", "device"),
    ("computers", "computer"),
    ("technologies", "technology"),
    ("industries", "industry"),
    ("markets", "market"),
    ("countries", "country"),
    ("cities", "city"),
    ("universities", "university"),
    ("colleges", "college"),
    ("students", "student"),
    ("teachers", "teacher"),
    ("doctors", "doctor"),
    ("patients", "patient"),
    ("engineers", "engineer"),
    ("scientists", "scientist"),
    ("researchers", "researcher"),
    ("developers", "developer"),
    ("designers", "designer"),
    ("artists", "artist"),
    ("writers", "writer"),
    ("readers", "reader"),
    ("viewers", "viewer"),
    ("listeners", "listener"),
    ("speakers", "speaker"),
    ("managers", "manager"),
    ("leaders", "leader"),
    ("employees", "employee"),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invariant_words_unchanged() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("series"), "series");
        assert_eq!(n.normalize("news"), "news");
        assert_eq!(n.normalize("species"), "species");
        assert_eq!(n.normalize("data"), "data");
    }

    #[test]
    fn irregular_plurals_use_dictionary() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("children"), "child");
        assert_eq!(n.normalize("mice"), "mouse");
        assert_eq!(n.normalize("people"), "person");
        assert_eq!(n.normalize("leaves"), "leaf");
        assert_eq!(n.normalize("houses"), "house");
    }

    #[test]
    fn dictionary_wins_over_suffix_rules() {
        let n = Normalizer::new();
        // Suffix rules alone would produce "leav" and "hous".
        assert_eq!(n.normalize("leaves"), "leaf");
        assert_eq!(n.normalize("houses"), "house");
        assert_eq!(n.normalize("businesses"), "business");
        assert_eq!(n.normalize("series"), "series");
    }

    #[test]
    fn ies_becomes_y() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("libraries"), "library");
        assert_eq!(n.normalize("policies"), "policy");
    }

    #[test]
    fn ies_needs_more_than_three_chars() {
        let n = Normalizer::empty();
        // "ies" itself falls through to the "-es" rule.
        assert_eq!(n.normalize("ies"), "i");
    }

    #[test]
    fn es_and_s_are_stripped() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("boxes"), "box");
        assert_eq!(n.normalize("apis"), "api");
        assert_eq!(n.normalize("foxes"), "fox");
        assert_eq!(n.normalize("dogs"), "dog");
    }

    #[test]
    fn short_words_keep_their_suffix() {
        let n = Normalizer::empty();
        assert_eq!(n.normalize("s"), "s");
        assert_eq!(n.normalize("es"), "e");
        assert_eq!(n.normalize("go"), "go");
    }

    #[test]
    fn over_strips_non_plural_s_words() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("class"), "clas");
        assert_eq!(n.normalize("bus"), "bu");
    }

    #[test]
    fn dictionary_singulars_still_take_suffix_rules() {
        let n = Normalizer::new();
        // "business" is only a dictionary value, not a key.
        assert_eq!(n.normalize("businesses"), "business");
        assert_eq!(n.normalize("business"), "busines");
    }

    #[test]
    fn exception_keys_are_fixed_points() {
        let n = Normalizer::new();
        for (plural, singular) in IRREGULAR_PLURALS {
            if singular.ends_with('s') {
                continue;
            }
            let once = n.normalize(plural);
            assert_eq!(n.normalize(&once), once, "not idempotent for {plural}");
        }
        for word in INVARIANT_WORDS {
            assert_eq!(n.normalize(word), *word);
        }
    }

    #[test]
    fn idempotent_on_regular_plurals() {
        let n = Normalizer::new();
        for word in ["cities", "apis", "cars", "dogs", "foxes", "keyword", "rust"] {
            let once = n.normalize(word);
            assert_eq!(n.normalize(&once), once, "not idempotent for {word}");
        }
    }

    #[test]
    fn custom_plurals_override() {
        let mut n = Normalizer::empty();
        n.add_plurals([("cacti", "cactus")]);
        n.add_invariant(["Lens"]);
        assert_eq!(n.normalize("cacti"), "cactus");
        // The singular is not protected; only keys and invariants are.
        assert_eq!(n.normalize("cactus"), "cactu");
        assert_eq!(n.normalize("lens"), "lens");
        assert_eq!(n.normalize("cactuses"), "cactus");
    }
}
