//! Configuration system for kwm.
//!
//! kwm uses TOML configuration files named `.kwm.toml`. The nearest one at or above the
//! working directory is the project config. `~/.kwm.toml` supplies anything the project config
//! leaves unset, unless the project config sets `root = true`.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
mod validate;

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, ConfigLocations, home_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawFetchSettings, RawKeywordSettings, RawWeightSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// User-Agent sent when fetching pages.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; KeywordBot/1.0)";

/// Top-level merged configuration for kwm.
///
/// This represents the fully resolved configuration after merging all discovered `.kwm.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Page fetching settings.
    pub fetch: FetchSettings,
    /// Per-field keyword weights.
    pub weights: WeightSettings,
    /// Keyword extraction settings.
    pub keywords: KeywordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads the project and home configuration that apply to `cwd`.
    ///
    /// Project settings win over home settings. Returns `Ok(Config::default())` if neither
    /// file exists.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&ConfigLocations::discover(cwd).files())
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An empty User-Agent
    /// - Invariant words or plural targets that are also stopwords
    /// - Plural entries that map a word onto itself
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.kwm.toml` file, making it easy to see the
    /// effective configuration.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            fetch: &self.fetch,
            weights: &self.weights,
            keywords: &self.keywords,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Settings for fetching pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Integer weight added to a keyword for each field it appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeightSettings {
    /// Weight of the `<title>` element.
    pub title: u32,
    /// Weight of the `keywords` and `og:keywords` meta tags.
    pub meta_keyword: u32,
    /// Weight of the page description.
    pub description: u32,
    /// Weight of h1-h3 heading text.
    pub main_content: u32,
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            title: 5,
            meta_keyword: 8,
            description: 3,
            main_content: 1,
        }
    }
}

impl WeightSettings {
    /// Returns `(name, weight)` pairs in field order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("title", self.title),
            ("meta_keyword", self.meta_keyword),
            ("description", self.description),
            ("main_content", self.main_content),
        ]
    }
}

/// Which backend tags CJK text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaggerChoice {
    /// Split CJK text at script boundaries.
    #[default]
    Script,
    /// Skip CJK text entirely.
    #[serde(rename = "none")]
    Disabled,
}

impl fmt::Display for TaggerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script => write!(f, "script"),
            Self::Disabled => write!(f, "none"),
        }
    }
}

/// Keyword extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Maximum keywords to report (0 = all).
    pub limit: usize,
    /// Extra stopwords added to the built-in list.
    pub stopwords: Vec<String>,
    /// Whether to add the Stopwords ISO English list.
    pub iso_stopwords: bool,
    /// Extra words whose singular and plural coincide.
    pub invariant: Vec<String>,
    /// Backend for CJK text.
    pub tagger: TaggerChoice,
    /// Extra plural to singular mappings (sorted for deterministic output).
    pub plurals: BTreeMap<String, String>,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            limit: 20,
            stopwords: Vec::new(),
            iso_stopwords: false,
            invariant: Vec::new(),
            tagger: TaggerChoice::default(),
            plurals: BTreeMap::new(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Page fetching settings.
    fetch: &'a FetchSettings,
    /// Per-field weights.
    weights: &'a WeightSettings,
    /// Keyword extraction settings.
    keywords: &'a KeywordSettings,
}
