//! Rule-table errors
//!
//! Syllabification itself cannot fail; everything here is raised while a
//! rule set is parsed and validated.

use thiserror::Error;

/// Errors building a [`RuleSet`](crate::rules::RuleSet)
#[derive(Debug, Error)]
pub enum RulesError {
    /// TOML parsing failed
    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rule file could not be read
    #[error("failed to read rules from {path}: {source}")]
    Io {
        /// Path of the rule file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A prefix entry is empty, unknown, or not consonant-final
    #[error("invalid prefix '{prefix}': {reason}")]
    InvalidPrefix {
        /// Offending prefix text
        prefix: String,
        /// What is wrong with it
        reason: String,
    },

    /// The same catalogue entry was produced twice
    #[error("prefix '{0}' appears more than once in the catalogue")]
    DuplicatePrefix(String),

    /// Two entries can match one word start without being stacked forms of each other
    #[error("prefixes '{shorter}' and '{longer}' can both match a word but are not nested")]
    AmbiguousPrefixes {
        /// The entry that is a string prefix of the other
        shorter: String,
        /// The entry that starts with `shorter`
        longer: String,
    },

    /// A keep-together or split cluster is malformed
    #[error("invalid cluster '{cluster}': {reason}")]
    InvalidCluster {
        /// Offending cluster text
        cluster: String,
        /// What is wrong with it
        reason: String,
    },

    /// A loanword spelling entry is malformed
    #[error("invalid spelling for '{letter}': {reason}")]
    InvalidSpelling {
        /// Letter being rewritten
        letter: char,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for rule loading
pub type Result<T> = std::result::Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_prefix_display() {
        let err = RulesError::AmbiguousPrefixes {
            shorter: "раз".to_string(),
            longer: "разд".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "prefixes 'раз' and 'разд' can both match a word but are not nested"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = RulesError::Io {
            path: "missing.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.toml"));
        assert!(err.source().is_some());
    }
}
