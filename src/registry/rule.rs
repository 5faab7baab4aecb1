//! Rule definitions and the context handed to rule handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::data_store::{ConfigurationStore, DataValue, compose_letters, letter_key};
use super::settings::{RuleSettings, SettingValue};
use crate::errors::{TypografError, TypografResult};
use crate::utils::COMMON_SCOPE;

/// Execution phase of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    /// Before masking and entity decoding, on raw input
    Start,
    /// On masked, entity-decoded text
    #[default]
    Default,
    /// After unmasking, on final output
    End,
}

impl Queue {
    pub const ALL: [Queue; 3] = [Queue::Start, Queue::Default, Queue::End];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Queue::Start => "start",
            Queue::Default => "default",
            Queue::End => "end",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Queue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Queue::Start),
            "default" | "" => Ok(Queue::Default),
            "end" => Ok(Queue::End),
            other => Err(format!("unknown queue '{other}'")),
        }
    }
}

/// Handler signature: `(text, own settings, context) -> text`
pub type RuleHandler =
    Arc<dyn Fn(&str, &RuleSettings, &RuleContext<'_>) -> anyhow::Result<String> + Send + Sync>;

/// A named, independently toggled text transformation
#[derive(Clone)]
pub struct Rule {
    name: String,
    priority: i32,
    queue: Queue,
    enabled_by_default: bool,
    settings: Vec<(String, SettingValue)>,
    handler: RuleHandler,
}

impl Rule {
    /// Create a rule with priority 0, default queue, enabled, no settings
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str, &RuleSettings, &RuleContext<'_>) -> anyhow::Result<String>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            priority: 0,
            queue: Queue::Default,
            enabled_by_default: true,
            settings: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn queue(mut self, queue: Queue) -> Self {
        self.queue = queue;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled_by_default = enabled;
        self
    }

    /// Shorthand for `.enabled(false)`
    #[must_use]
    pub fn disabled(self) -> Self {
        self.enabled(false)
    }

    /// Declare a setting and its default value
    #[must_use]
    pub fn setting(mut self, key: impl Into<String>, default: impl Into<SettingValue>) -> Self {
        self.settings.push((key.into(), default.into()));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language scope: the first `/`-separated segment of the name
    #[must_use]
    pub fn scope(&self) -> &str {
        self.name.split('/').next().unwrap_or_default()
    }

    #[must_use]
    pub fn sort_index(&self) -> i32 {
        self.priority
    }

    #[must_use]
    pub fn execution_queue(&self) -> Queue {
        self.queue
    }

    #[must_use]
    pub fn enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    #[must_use]
    pub fn settings_schema(&self) -> &[(String, SettingValue)] {
        &self.settings
    }

    /// Whether the rule runs for `language`
    #[must_use]
    pub fn applies_to(&self, language: &str) -> bool {
        let scope = self.scope();
        scope == COMMON_SCOPE || scope == language
    }

    /// Run the handler
    ///
    /// # Errors
    ///
    /// Whatever the handler returns.
    pub fn apply(
        &self,
        text: &str,
        settings: &RuleSettings,
        context: &RuleContext<'_>,
    ) -> anyhow::Result<String> {
        (self.handler)(text, settings, context)
    }

    /// Check name shape and settings declaration
    pub(crate) fn validate(&self) -> TypografResult<()> {
        let name = self.name.as_str();
        if !name.contains('/')
            || name.split('/').any(str::is_empty)
            || name.contains('*')
            || name.chars().any(char::is_whitespace)
        {
            return Err(TypografError::InvalidRuleName(self.name.clone()));
        }

        for (i, (key, _)) in self.settings.iter().enumerate() {
            if key.is_empty() {
                return Err(TypografError::InvalidSettingsSchema {
                    rule: self.name.clone(),
                    reason: "empty setting key".to_string(),
                });
            }
            if self.settings[..i].iter().any(|(k, _)| k == key) {
                return Err(TypografError::InvalidSettingsSchema {
                    rule: self.name.clone(),
                    reason: format!("setting '{key}' declared twice"),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("queue", &self.queue)
            .field("enabled_by_default", &self.enabled_by_default)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Read-only view handed to a handler for one `execute()` call
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    language: &'a str,
    store: &'a ConfigurationStore,
    overlay: Option<&'a ConfigurationStore>,
    settings: &'a HashMap<String, RuleSettings>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn new(
        language: &'a str,
        store: &'a ConfigurationStore,
        settings: &'a HashMap<String, RuleSettings>,
    ) -> Self {
        Self {
            language,
            store,
            overlay: None,
            settings,
        }
    }

    /// Layer per-instance data over the registry's store
    #[must_use]
    pub fn with_overlay(mut self, overlay: &'a ConfigurationStore) -> Self {
        self.overlay = Some(overlay);
        self
    }

    #[must_use]
    pub fn language(&self) -> &'a str {
        self.language
    }

    #[must_use]
    pub fn data(&self, key: &str) -> Option<&'a DataValue> {
        self.overlay
            .and_then(|o| o.get(key))
            .or_else(|| self.store.get(key))
    }

    #[must_use]
    pub fn data_text(&self, key: &str) -> Option<&'a str> {
        self.data(key).and_then(DataValue::as_text)
    }

    #[must_use]
    pub fn data_list(&self, key: &str) -> Option<&'a [String]> {
        self.data(key).and_then(DataValue::as_list)
    }

    /// Letter class of the active language
    #[must_use]
    pub fn letters(&self) -> String {
        compose_letters(
            self.data_text(&letter_key(COMMON_SCOPE)),
            self.data_text(&letter_key(self.language)),
            Some(self.language),
        )
    }

    /// Current value of any rule's setting
    #[must_use]
    pub fn setting(&self, rule: &str, key: &str) -> Option<&'a SettingValue> {
        self.settings.get(rule).and_then(|s| s.get(key))
    }

    #[must_use]
    pub fn setting_text(&self, rule: &str, key: &str) -> Option<&'a str> {
        self.setting(rule, key).and_then(SettingValue::as_text)
    }
}

impl fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("language", &self.language)
            .field("has_overlay", &self.overlay.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
        Ok(text.to_string())
    }

    #[test]
    fn test_defaults() {
        let rule = Rule::new("common/space/trimLeft", noop);
        assert_eq!(rule.scope(), "common");
        assert_eq!(rule.sort_index(), 0);
        assert_eq!(rule.execution_queue(), Queue::Default);
        assert!(rule.enabled_by_default());
        assert!(rule.settings_schema().is_empty());
    }

    #[test]
    fn test_applies_to() {
        let common = Rule::new("common/x", noop);
        let ru = Rule::new("ru/dash/main", noop);
        assert!(common.applies_to("ru"));
        assert!(common.applies_to("en"));
        assert!(ru.applies_to("ru"));
        assert!(!ru.applies_to("en"));
        assert!(!ru.applies_to("common"));
    }

    #[test]
    fn test_validate_names() {
        assert!(Rule::new("ru/dash/main", noop).validate().is_ok());
        assert!(Rule::new("nodelimiter", noop).validate().is_err());
        assert!(Rule::new("ru//main", noop).validate().is_err());
        assert!(Rule::new("ru/*", noop).validate().is_err());
        assert!(Rule::new("/x", noop).validate().is_err());
    }

    #[test]
    fn test_validate_settings_schema() {
        let dup = Rule::new("ru/x", noop).setting("a", 1).setting("a", 2);
        assert!(matches!(
            dup.validate(),
            Err(TypografError::InvalidSettingsSchema { .. })
        ));

        let empty = Rule::new("ru/x", noop).setting("", 1);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_queue_parse() {
        assert_eq!("start".parse::<Queue>(), Ok(Queue::Start));
        assert_eq!("".parse::<Queue>(), Ok(Queue::Default));
        assert!("later".parse::<Queue>().is_err());
    }

    #[test]
    fn test_context_letters_and_overlay() {
        let mut store = ConfigurationStore::new();
        store.set("common/letter", "a-z");
        store.set("ru/letter", "а-яё");
        let mut overlay = ConfigurationStore::new();
        overlay.set("ru/letter", "а-яёѣ");
        let settings = HashMap::new();

        let ctx = RuleContext::new("ru", &store, &settings);
        assert_eq!(ctx.letters(), "a-zа-яё");

        let ctx = ctx.with_overlay(&overlay);
        assert_eq!(ctx.letters(), "a-zа-яёѣ");
        assert_eq!(ctx.data_text("common/letter"), Some("a-z"));
    }
}
