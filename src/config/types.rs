//! Core configuration types for processor instances
//!
//! `ProcessorOptions` carries what an instance starts with; `ExecuteOverrides`
//! replaces parts of it for a single `execute_with` call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TypografError;
use crate::utils::DEFAULT_LANGUAGE;

/// How characters with a named reference are written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain Unicode characters
    #[default]
    Default,
    /// Named references such as `&nbsp;`
    Name,
    /// Decimal references such as `&#160;`
    Digit,
}

impl OutputMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Default => "default",
            OutputMode::Name => "name",
            OutputMode::Digit => "digit",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = TypografError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(OutputMode::Default),
            "name" => Ok(OutputMode::Name),
            "digit" => Ok(OutputMode::Digit),
            _ => Err(TypografError::InvalidOutputMode(s.to_string())),
        }
    }
}

/// Initial state of a `Typograf` instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorOptions {
    /// Active language; `common` runs only language-neutral rules
    pub(crate) language: String,
    pub(crate) mode: OutputMode,
    /// Rule names or globs enabled on top of the registry defaults
    pub(crate) enable: Vec<String>,
    /// Rule names or globs disabled after `enable` is applied
    pub(crate) disable: Vec<String>,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            mode: OutputMode::Default,
            enable: Vec::new(),
            disable: Vec::new(),
        }
    }
}

/// Per-call replacements for the instance language and output mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecuteOverrides {
    pub language: Option<String>,
    pub mode: Option<OutputMode>,
}

impl ExecuteOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = Some(mode);
        self
    }
}
