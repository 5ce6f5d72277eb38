//! Configuration validation.
//!
//! Reports settings that load fine but are unlikely to do what the user wants.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The User-Agent header is blank.
    EmptyUserAgent,
    /// A plural maps onto a configured stopword, so it can never be reported.
    PluralTargetIsStopword {
        /// The plural form.
        plural: String,
        /// The singular it folds to.
        singular: String,
    },
    /// A word is listed both as invariant and as a stopword.
    InvariantIsStopword {
        /// The word.
        word: String,
    },
    /// A plural entry maps a word onto itself.
    IdentityPlural {
        /// The word.
        word: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserAgent => write!(f, "fetch.user_agent is empty"),
            Self::PluralTargetIsStopword { plural, singular } => write!(
                f,
                "plural '{plural}' folds to stopword '{singular}' and will never be reported"
            ),
            Self::InvariantIsStopword { word } => {
                write!(f, "'{word}' is both invariant and a stopword")
            }
            Self::IdentityPlural { word } => {
                write!(f, "plural entry '{word}' maps to itself")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let keywords = &config.keywords;
    let is_stopword = |w: &str| keywords.stopwords.iter().any(|s| s.eq_ignore_ascii_case(w));

    if config.fetch.user_agent.trim().is_empty() {
        warnings.push(ConfigWarning::EmptyUserAgent);
    }

    for word in &keywords.invariant {
        if is_stopword(word) {
            warnings.push(ConfigWarning::InvariantIsStopword { word: word.clone() });
        }
    }

    for (plural, singular) in &keywords.plurals {
        if plural == singular {
            warnings.push(ConfigWarning::IdentityPlural {
                word: plural.clone(),
            });
        } else if is_stopword(singular) {
            warnings.push(ConfigWarning::PluralTargetIsStopword {
                plural: plural.clone(),
                singular: singular.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_warnings() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".into();
        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::EmptyUserAgent]
        );
    }

    #[test]
    fn test_plural_target_stopword() {
        let mut config = Config::default();
        config.keywords.stopwords = vec!["Cactus".into()];
        config
            .keywords
            .plurals
            .insert("cacti".into(), "cactus".into());
        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![ConfigWarning::PluralTargetIsStopword {
                plural: "cacti".into(),
                singular: "cactus".into(),
            }]
        );
        assert!(warnings[0].to_string().contains("never be reported"));
    }

    #[test]
    fn test_invariant_stopword_and_identity_plural() {
        let mut config = Config::default();
        config.keywords.stopwords = vec!["lens".into()];
        config.keywords.invariant = vec!["lens".into()];
        config.keywords.plurals.insert("sheep".into(), "sheep".into());
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.contains(&ConfigWarning::InvariantIsStopword {
            word: "lens".into()
        }));
        assert!(warnings.contains(&ConfigWarning::IdentityPlural {
            word: "sheep".into()
        }));
    }
}
