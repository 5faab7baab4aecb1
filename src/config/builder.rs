//! Fluent builder and loaders for `ProcessorOptions`

use crate::errors::{TypografError, TypografResult};

use super::types::{OutputMode, ProcessorOptions};

/// Check a language code: non-empty, no path separator, no glob, no spaces
///
/// # Errors
///
/// `InvalidLanguage` describing the offending code.
pub fn validate_language(language: &str) -> TypografResult<()> {
    let valid = !language.is_empty()
        && !language
            .chars()
            .any(|c| c == '/' || c == '*' || c.is_whitespace());
    if valid {
        Ok(())
    } else {
        Err(TypografError::InvalidLanguage(language.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessorOptionsBuilder {
    options: ProcessorOptions,
}

impl ProcessorOptions {
    /// Create a builder for configuring `ProcessorOptions` with a fluent interface
    #[must_use]
    pub fn builder() -> ProcessorOptionsBuilder {
        ProcessorOptionsBuilder::default()
    }

    /// Load options from JSON, e.g. `{"language":"ru","mode":"name"}`
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// `InvalidOptions` for malformed JSON or an unknown mode,
    /// `InvalidLanguage` for an unusable language code.
    pub fn from_json(json: &str) -> TypografResult<Self> {
        let options: ProcessorOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check the options the same way `build()` does
    ///
    /// # Errors
    ///
    /// `InvalidLanguage` for an unusable language code.
    pub fn validate(&self) -> TypografResult<()> {
        validate_language(&self.language)
    }
}

impl ProcessorOptionsBuilder {
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.options.language = language.into();
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Enable a rule name or glob at construction
    #[must_use]
    pub fn enable(mut self, pattern: impl Into<String>) -> Self {
        self.options.enable.push(pattern.into());
        self
    }

    /// Disable a rule name or glob at construction
    #[must_use]
    pub fn disable(mut self, pattern: impl Into<String>) -> Self {
        self.options.disable.push(pattern.into());
        self
    }

    /// # Errors
    ///
    /// `InvalidLanguage` for an unusable language code.
    pub fn build(self) -> TypografResult<ProcessorOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = ProcessorOptions::builder().build().expect("valid");
        assert_eq!(options, ProcessorOptions::default());
        assert_eq!(options.language(), "common");
        assert_eq!(options.mode(), OutputMode::Default);
    }

    #[test]
    fn test_builder_rejects_bad_language() {
        for bad in ["", "ru/x", "r u", "*"] {
            let err = ProcessorOptions::builder()
                .language(bad)
                .build()
                .expect_err("invalid language");
            assert!(matches!(err, TypografError::InvalidLanguage(_)));
        }
    }

    #[test]
    fn test_from_json() {
        let options = ProcessorOptions::from_json(
            r#"{"language":"ru","mode":"digit","disable":["ru/nbsp/*"]}"#,
        )
        .expect("valid json");
        assert_eq!(options.language(), "ru");
        assert_eq!(options.mode(), OutputMode::Digit);
        assert_eq!(options.disable(), ["ru/nbsp/*".to_string()]);
        assert!(options.enable().is_empty());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            ProcessorOptions::from_json(r#"{"mode":"html"}"#),
            Err(TypografError::InvalidOptions(_))
        ));
        assert!(matches!(
            ProcessorOptions::from_json(r#"{"language":""}"#),
            Err(TypografError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_output_mode_parse() {
        assert_eq!("NAME".parse::<OutputMode>().ok(), Some(OutputMode::Name));
        assert_eq!("".parse::<OutputMode>().ok(), Some(OutputMode::Default));
        assert!(matches!(
            "html".parse::<OutputMode>(),
            Err(TypografError::InvalidOutputMode(_))
        ));
    }
}
