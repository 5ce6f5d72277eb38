//! Field and candidate types.
//!
//! A page contributes text through four fields. Each field carries an integer
//! weight that is added once to every distinct keyword the field contains.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The page location a keyword candidate was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The document `<title>`.
    Title,
    /// The `keywords` and `og:keywords` meta tags.
    MetaKeyword,
    /// The longer of the `description` and `og:description` meta tags.
    Description,
    /// Heading text (h1, h2, h3).
    MainContent,
}

impl Field {
    /// All fields in aggregation order.
    ///
    /// Order matters: on equal-length surface forms the first field to supply
    /// a key keeps its form.
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::MetaKeyword,
        Self::Description,
        Self::MainContent,
    ];

    /// Returns the default weight for this field.
    ///
    /// Meta keywords are deliberate author choices and weigh the most; heading
    /// text is already amplified by repetition and weighs the least.
    pub fn default_weight(self) -> u32 {
        match self {
            Self::Title => 5,
            Self::MetaKeyword => 8,
            Self::Description => 3,
            Self::MainContent => 1,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::MetaKeyword => write!(f, "meta_keyword"),
            Self::Description => write!(f, "description"),
            Self::MainContent => write!(f, "main_content"),
        }
    }
}

/// Integer weights per field, fixed for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWeights {
    /// Weight for title keywords.
    pub title: u32,
    /// Weight for meta keywords.
    pub meta_keyword: u32,
    /// Weight for description keywords.
    pub description: u32,
    /// Weight for heading keywords.
    pub main_content: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: Field::Title.default_weight(),
            meta_keyword: Field::MetaKeyword.default_weight(),
            description: Field::Description.default_weight(),
            main_content: Field::MainContent.default_weight(),
        }
    }
}

impl FieldWeights {
    /// Returns the weight for a field.
    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Title => self.title,
            Field::MetaKeyword => self.meta_keyword,
            Field::Description => self.description,
            Field::MainContent => self.main_content,
        }
    }
}

/// A keyword candidate: its canonical key and the surface form it was seen as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Lowercase canonical key used for aggregation.
    pub key: String,
    /// Display form of the keyword.
    pub surface: String,
}

impl Candidate {
    /// Creates a candidate whose display form is the key itself.
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            surface: key.clone(),
            key,
        }
    }

    /// Creates a candidate with a distinct surface form.
    pub fn new(key: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            surface: surface.into(),
        }
    }
}

/// Returns true if `candidate` should replace `current` as a representative form.
///
/// Longer forms win; equal lengths keep the form seen first.
pub fn is_better_form(candidate: &str, current: &str) -> bool {
    candidate.chars().count() > current.chars().count()
}
