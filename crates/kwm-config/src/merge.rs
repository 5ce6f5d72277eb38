//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and rejecting out-of-range values.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, FetchSettings, KeywordSettings, WeightSettings,
    parse::{RawConfig, RawFetchSettings, RawKeywordSettings, RawWeightSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (the project file),
/// lowest precedence last (the home file).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Word lists: union of every file, lowest precedence first, duplicates dropped
/// - Plurals: merged by key, first definition for each key wins
///
/// A zero weight or zero timeout in any file is an error.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut fetch = FetchSettings::default();
    let mut weights = WeightSettings::default();
    let mut keywords = KeywordSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.fetch {
            apply_raw_fetch(&mut fetch, raw, &parsed.path)?;
        }
        if let Some(ref raw) = parsed.config.weights {
            apply_raw_weights(&mut weights, raw, &parsed.path)?;
        }
        if let Some(ref raw) = parsed.config.keywords {
            apply_raw_keywords(&mut keywords, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        fetch,
        weights,
        keywords,
        config_root,
        sources: configs.iter().map(|c| c.path.clone()).collect(),
    })
}

/// Applies raw fetch settings to result, overwriting any present values.
fn apply_raw_fetch(
    result: &mut FetchSettings,
    raw: &RawFetchSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.timeout_secs {
        if v == 0 {
            return Err(ConfigError::InvalidTimeout {
                path: path.to_path_buf(),
            });
        }
        result.timeout_secs = v;
    }
    if let Some(ref v) = raw.user_agent {
        result.user_agent = v.clone();
    }
    Ok(())
}

/// Applies raw weights to result, rejecting zero.
fn apply_raw_weights(
    result: &mut WeightSettings,
    raw: &RawWeightSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    let slots = [
        ("title", raw.title, &mut result.title),
        ("meta_keyword", raw.meta_keyword, &mut result.meta_keyword),
        ("description", raw.description, &mut result.description),
        ("main_content", raw.main_content, &mut result.main_content),
    ];
    for (field, value, slot) in slots {
        match value {
            Some(0) => {
                return Err(ConfigError::InvalidWeight {
                    field,
                    path: path.to_path_buf(),
                });
            }
            Some(v) => *slot = v,
            None => {}
        }
    }
    Ok(())
}

/// Applies raw keyword settings to result.
fn apply_raw_keywords(result: &mut KeywordSettings, raw: &RawKeywordSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.iso_stopwords {
        result.iso_stopwords = v;
    }
    if let Some(v) = raw.tagger {
        result.tagger = v;
    }
    if let Some(ref words) = raw.stopwords {
        union_words(&mut result.stopwords, words);
    }
    if let Some(ref words) = raw.invariant {
        union_words(&mut result.invariant, words);
    }
    if let Some(ref plurals) = raw.plurals {
        for (plural, singular) in plurals {
            result.plurals.insert(plural.clone(), singular.clone());
        }
    }
}

/// Appends words not already present.
fn union_words(result: &mut Vec<String>, words: &[String]) {
    for word in words {
        if !result.contains(word) {
            result.push(word.clone());
        }
    }
}
