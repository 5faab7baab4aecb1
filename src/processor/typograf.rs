//! Processor instance: per-caller rule state over a shared registry

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::pipeline::Pipeline;
use crate::config::{ExecuteOverrides, OutputMode, ProcessorOptions, validate_language};
use crate::errors::{TypografError, TypografResult};
use crate::registry::data_store::{compose_letters, letter_key};
use crate::registry::{ConfigurationStore, DataValue, RuleRegistry, RuleSettings, SettingValue};
use crate::safe_tags::{SafeTag, default_safe_tags};
use crate::utils::COMMON_SCOPE;

/// Typography processor.
///
/// Enabled flags, settings, safe tags and the data overlay are owned by the
/// instance and seeded from the registry at construction. `execute` takes
/// `&self`, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Typograf {
    registry: Arc<RuleRegistry>,
    language: String,
    mode: OutputMode,
    enabled: HashMap<String, bool>,
    settings: HashMap<String, RuleSettings>,
    safe_tags: Vec<SafeTag>,
    data: ConfigurationStore,
}

impl Typograf {
    /// Create an instance over `registry`
    ///
    /// # Errors
    ///
    /// `InvalidLanguage` if the options name an unusable language.
    pub fn new(registry: Arc<RuleRegistry>, options: ProcessorOptions) -> TypografResult<Self> {
        options.validate()?;

        let mut typograf = Self {
            enabled: registry.default_enabled().clone(),
            settings: registry.default_settings().clone(),
            registry,
            language: options.language().to_string(),
            mode: options.mode(),
            safe_tags: default_safe_tags(),
            data: ConfigurationStore::new(),
        };

        typograf.enable_all(options.enable());
        typograf.disable_all(options.disable());
        Ok(typograf)
    }

    /// Create an instance over the shared built-in catalog
    ///
    /// # Errors
    ///
    /// Same as [`Typograf::new`].
    pub fn with_defaults(options: ProcessorOptions) -> TypografResult<Self> {
        Self::new(RuleRegistry::shared_default(), options)
    }

    /// Typeset `text` with the instance language and output mode
    #[must_use]
    pub fn execute(&self, text: &str) -> String {
        self.execute_with(text, &ExecuteOverrides::default())
    }

    /// Typeset `text`, overriding language and/or mode for this call only
    #[must_use]
    pub fn execute_with(&self, text: &str, overrides: &ExecuteOverrides) -> String {
        let language = overrides.language.as_deref().unwrap_or(&self.language);
        let mode = overrides.mode.unwrap_or(self.mode);

        let pipeline = Pipeline {
            registry: &self.registry,
            enabled: &self.enabled,
            settings: &self.settings,
            overlay: &self.data,
            safe_tags: &self.safe_tags,
        };
        pipeline.run(text, language, mode)
    }

    /// Enable a rule by exact name or `*` glob
    pub fn enable(&mut self, pattern: &str) -> &mut Self {
        self.set_enabled(pattern, true);
        self
    }

    /// Disable a rule by exact name or `*` glob
    pub fn disable(&mut self, pattern: &str) -> &mut Self {
        self.set_enabled(pattern, false);
        self
    }

    pub fn enable_all<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.set_enabled(pattern.as_ref(), true);
        }
        self
    }

    pub fn disable_all<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.set_enabled(pattern.as_ref(), false);
        }
        self
    }

    fn set_enabled(&mut self, pattern: &str, enabled: bool) {
        let names = self.registry.resolve(pattern);
        if names.is_empty() {
            debug!(pattern, enabled, "no rule matches, ignoring");
            return;
        }
        for name in names {
            self.enabled.insert(name, enabled);
        }
    }

    #[must_use]
    pub fn enabled(&self, name: &str) -> bool {
        self.enabled.get(name).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn disabled(&self, name: &str) -> bool {
        !self.enabled(name)
    }

    #[must_use]
    pub fn setting(&self, rule: &str, key: &str) -> Option<&SettingValue> {
        self.settings.get(rule).and_then(|s| s.get(key))
    }

    /// Change a declared setting of a rule
    ///
    /// # Errors
    ///
    /// `UnknownSetting` if no rule of that name declares `key`,
    /// `SettingTypeMismatch` if `value` differs in type from the default.
    pub fn set_setting(
        &mut self,
        rule: &str,
        key: &str,
        value: impl Into<SettingValue>,
    ) -> TypografResult<&mut Self> {
        let value = value.into();
        let Some(declared) = self.registry.setting_schema(rule, key) else {
            return Err(TypografError::UnknownSetting {
                rule: rule.to_string(),
                key: key.to_string(),
            });
        };

        if !declared.same_type(&value) {
            return Err(TypografError::SettingTypeMismatch {
                rule: rule.to_string(),
                key: key.to_string(),
                expected: declared.type_name(),
                found: value.type_name(),
            });
        }

        self.settings
            .entry(rule.to_string())
            .or_default()
            .insert(key, value);
        Ok(self)
    }

    /// Protect spans between `start` and `end` (regex fragments)
    ///
    /// # Errors
    ///
    /// `MalformedSafeTagPattern` if the pair does not compile.
    pub fn add_safe_tag(&mut self, start: &str, end: &str) -> TypografResult<&mut Self> {
        self.safe_tags.push(SafeTag::new(start, end)?);
        Ok(self)
    }

    #[must_use]
    pub fn safe_tags(&self) -> &[SafeTag] {
        &self.safe_tags
    }

    /// Data entry from the instance overlay, else from the registry
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&DataValue> {
        self.data.get(key).or_else(|| self.registry.data().get(key))
    }

    /// Override a data entry for this instance only
    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<DataValue>) -> &mut Self {
        self.data.set(key, value);
        self
    }

    /// Letter class of the instance language
    #[must_use]
    pub fn letters(&self) -> String {
        let text = |key: &str| self.data(key).and_then(DataValue::as_text);
        compose_letters(
            text(&letter_key(COMMON_SCOPE)),
            text(&letter_key(&self.language)),
            Some(&self.language),
        )
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// # Errors
    ///
    /// `InvalidLanguage` for an unusable language code.
    pub fn set_language(&mut self, language: &str) -> TypografResult<&mut Self> {
        validate_language(language)?;
        self.language = language.to_string();
        Ok(self)
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: OutputMode) -> &mut Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }
}
