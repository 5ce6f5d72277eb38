//! HTML field collection.
//!
//! Turns a parsed document into the four weighted text fields:
//!
//! - **Title**: the first `<title>`
//! - **Meta keywords**: `keywords` and `og:keywords`, split on `,` and `;`
//! - **Description**: the longer of `description` and `og:description`
//! - **Main content**: h1, then h2, then h3 text, each heading repeated
//!   three times

use std::collections::{BTreeMap, HashSet};

use kwm_extract::PageFields;
use scraper::{Html, Selector};
use tracing::debug;

use crate::PageError;

/// `<meta name=...>` values that are collected.
const META_NAMES: &[&str] = &["description", "pubdate", "keywords"];

/// `<meta property=...>` values that are collected.
const META_PROPERTIES: &[&str] = &["og:description", "og:site_name", "og:keywords"];

/// Heading levels in the order their text is concatenated.
const HEADING_LEVELS: &[&str] = &["h1", "h2", "h3"];

/// How many times each heading is repeated in the main content.
const HEADING_REPEAT: usize = 3;

/// A parsed HTML page.
pub struct PageDocument {
    /// Parsed DOM.
    html: Html,
}

impl PageDocument {
    /// Parses an HTML document. Malformed markup is recovered, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the first `<title>` with whitespace collapsed, if non-empty.
    pub fn title(&self) -> Result<Option<String>, PageError> {
        let selector = selector("title")?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty()))
    }

    /// Returns the collected meta tags keyed by lowercase name or property.
    ///
    /// When a tag appears more than once the last value wins.
    pub fn meta_tags(&self) -> Result<BTreeMap<String, String>, PageError> {
        let selector = selector("meta")?;
        let mut tags = BTreeMap::new();

        for el in self.html.select(&selector) {
            let meta = el.value();
            let Some(content) = meta.attr("content") else {
                continue;
            };
            for (attr, targets) in [("name", META_NAMES), ("property", META_PROPERTIES)] {
                if let Some(key) = meta.attr(attr).map(str::to_lowercase)
                    && targets.contains(&key.as_str())
                {
                    tags.insert(key, content.to_string());
                }
            }
        }

        Ok(tags)
    }

    /// Returns non-empty heading texts: all h1s, then h2s, then h3s.
    pub fn headings(&self) -> Result<Vec<String>, PageError> {
        let mut headings = Vec::new();
        for level in HEADING_LEVELS {
            let selector = selector(level)?;
            headings.extend(
                self.html
                    .select(&selector)
                    .map(|el| collapse_whitespace(&el.text().collect::<String>()))
                    .filter(|t| !t.is_empty()),
            );
        }
        Ok(headings)
    }

    /// Collects the weighted fields for keyword analysis.
    pub fn fields(&self) -> Result<PageFields, PageError> {
        let meta = self.meta_tags()?;
        let headings = self.headings()?;
        let fields = PageFields {
            title: self.title()?,
            meta_keywords: meta_keywords(&meta),
            description: description(&meta),
            main_content: main_content(&headings),
        };
        debug!(
            title = fields.title.is_some(),
            meta_keywords = fields.meta_keywords.len(),
            description = fields.description.is_some(),
            headings = headings.len(),
            "collected page fields"
        );
        Ok(fields)
    }
}

/// Compiles a CSS selector.
fn selector(css: &str) -> Result<Selector, PageError> {
    Selector::parse(css).map_err(|e| PageError::Parse {
        selector: css.to_string(),
        message: format!("{e:?}"),
    })
}

/// Collapses runs of whitespace into single spaces and trims.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits `keywords` and `og:keywords` into unique, trimmed phrases.
///
/// Phrases keep the order they first appear in, `keywords` before
/// `og:keywords`.
pub fn meta_keywords(meta: &BTreeMap<String, String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ["keywords", "og:keywords"]
        .iter()
        .filter_map(|key| meta.get(*key))
        .flat_map(|value| value.split([',', ';']))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty() && seen.insert(phrase.to_string()))
        .map(str::to_string)
        .collect()
}

/// Picks `og:description` only when it has strictly more characters than
/// `description`.
pub fn description(meta: &BTreeMap<String, String>) -> Option<String> {
    let plain = meta.get("description").filter(|d| !d.trim().is_empty());
    let og = meta.get("og:description").filter(|d| !d.trim().is_empty());
    match (plain, og) {
        (Some(plain), Some(og)) if og.chars().count() > plain.chars().count() => Some(og.clone()),
        (Some(plain), _) => Some(plain.clone()),
        (None, og) => og.cloned(),
    }
}

/// Repeats each heading three times and joins everything with spaces.
pub fn main_content(headings: &[String]) -> Option<String> {
    if headings.is_empty() {
        return None;
    }
    let repeated: Vec<&str> = headings
        .iter()
        .flat_map(|h| [h.as_str(); HEADING_REPEAT])
        .collect();
    Some(repeated.join(" "))
}
