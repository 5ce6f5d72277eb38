//! Configuration file parsing.
//!
//! Parses individual `.kwm.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, TaggerChoice};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, `~/.kwm.toml` is not loaded alongside this file.
    pub root: Option<bool>,
    /// Fetch settings section.
    pub fetch: Option<RawFetchSettings>,
    /// Field weights section.
    pub weights: Option<RawWeightSettings>,
    /// Keyword settings section.
    pub keywords: Option<RawKeywordSettings>,
}

/// Raw fetch settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawFetchSettings {
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// Raw field weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawWeightSettings {
    /// Title weight.
    pub title: Option<u32>,
    /// Meta keyword weight.
    pub meta_keyword: Option<u32>,
    /// Description weight.
    pub description: Option<u32>,
    /// Heading weight.
    pub main_content: Option<u32>,
}

/// Raw keyword settings.
///
/// Word lists accept either a single string or an array of strings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawKeywordSettings {
    /// Maximum keywords to report (0 = all).
    pub limit: Option<usize>,
    /// Extra stopwords.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stopwords: Option<Vec<String>>,
    /// Whether to add the Stopwords ISO English list.
    pub iso_stopwords: Option<bool>,
    /// Extra invariant words.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub invariant: Option<Vec<String>>,
    /// Extra plural to singular mappings.
    pub plurals: Option<BTreeMap<String, String>>,
    /// Backend for CJK text.
    pub tagger: Option<TaggerChoice>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// A root project config shuts out the home config. Returns false if the file
/// cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
