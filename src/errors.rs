//! Error types for the typography engine
//!
//! Only configuration-time operations surface errors. `Typograf::execute`
//! never fails: rule failures are isolated per rule and reported through
//! `tracing`, masking and entity conversion degrade to leaving text unchanged.

use thiserror::Error;

/// Result type alias for typograf operations
pub type TypografResult<T> = Result<T, TypografError>;

/// Error types for registry, options and processor configuration
#[derive(Debug, Error)]
pub enum TypografError {
    /// A safe tag start/end pair did not compile into a matcher
    #[error("Malformed safe tag pattern '{start}' ... '{end}': {source}")]
    MalformedSafeTagPattern {
        start: String,
        end: String,
        #[source]
        source: regex::Error,
    },

    /// Registration attempted after the registry was frozen
    #[error("Rule registry is frozen, registration rejected")]
    RegistryFrozen,

    /// Rule name is not of the form `<scope>/<...>`
    #[error("Invalid rule name '{0}': expected '<scope>/<category>/<id>'")]
    InvalidRuleName(String),

    /// Settings schema declared by a rule is inconsistent
    #[error("Invalid settings schema for rule '{rule}': {reason}")]
    InvalidSettingsSchema { rule: String, reason: String },

    /// Setting key not declared by any rule of that name
    #[error("Rule '{rule}' has no setting '{key}'")]
    UnknownSetting { rule: String, key: String },

    /// Setting value does not match the declared type
    #[error("Setting '{key}' of rule '{rule}' expects {expected}, got {found}")]
    SettingTypeMismatch {
        rule: String,
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Language code is empty or contains a path separator
    #[error("Invalid language '{0}'")]
    InvalidLanguage(String),

    /// Output mode string is not one of default, name, digit
    #[error("Invalid output mode '{0}': expected 'default', 'name' or 'digit'")]
    InvalidOutputMode(String),

    /// Processor options could not be deserialized
    #[error("Invalid processor options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// A rule handler failed; built for diagnostics, never returned by `execute`
    #[error("Rule '{rule}' failed: {reason}")]
    RuleHandlerFailure { rule: String, reason: String },
}

impl TypografError {
    /// Check if the error came from caller-supplied configuration rather than
    /// from registry misuse
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TypografError::MalformedSafeTagPattern { .. }
                | TypografError::UnknownSetting { .. }
                | TypografError::SettingTypeMismatch { .. }
                | TypografError::InvalidLanguage(_)
                | TypografError::InvalidOutputMode(_)
                | TypografError::InvalidOptions(_)
        )
    }
}
