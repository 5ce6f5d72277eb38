//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use kwm_config::{Config, FetchSettings, TaggerChoice};
use kwm_extract::{
    DisabledTagger, FieldWeights, KeywordAnalyzer, Lexicon, Normalizer, NounTagger,
    ScriptRunTagger, Stopwords,
};
use tracing::warn;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    ///
    /// Configuration warnings are logged but do not stop the command.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        for warning in config.validate() {
            warn!("{warning}");
        }
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds a keyword analyzer from the configuration.
    pub fn analyzer(&self) -> KeywordAnalyzer {
        build_analyzer(&self.config)
    }

    /// Returns fetch settings with an optional timeout override applied.
    pub fn fetch_settings(&self, timeout_override: Option<u64>) -> FetchSettings {
        let mut settings = self.config.fetch.clone();
        if let Some(timeout) = timeout_override {
            settings.timeout_secs = timeout;
        }
        settings
    }

    /// Returns the keyword limit, preferring the CLI override.
    pub fn limit(&self, limit_override: Option<usize>) -> usize {
        limit_override.unwrap_or(self.config.keywords.limit)
    }
}

/// Builds a keyword analyzer whose dictionaries extend the built-in ones.
pub fn build_analyzer(config: &Config) -> KeywordAnalyzer {
    let keywords = &config.keywords;

    let mut stopwords = Stopwords::new();
    if keywords.iso_stopwords {
        stopwords = stopwords.with_iso_english();
    }
    stopwords.extend(&keywords.stopwords);

    let mut normalizer = Normalizer::new();
    normalizer.add_invariant(&keywords.invariant);
    normalizer.add_plurals(&keywords.plurals);

    let weights = FieldWeights {
        title: config.weights.title,
        meta_keyword: config.weights.meta_keyword,
        description: config.weights.description,
        main_content: config.weights.main_content,
    };

    let tagger: Box<dyn NounTagger> = match keywords.tagger {
        TaggerChoice::Script => Box::new(ScriptRunTagger),
        TaggerChoice::Disabled => Box::new(DisabledTagger),
    };

    KeywordAnalyzer::new(Lexicon::new(stopwords, normalizer), weights, tagger)
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
