//! Ordered rule catalog shared by processor instances

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::debug;

use super::data_store::{ConfigurationStore, DataValue};
use super::glob::GlobMatcher;
use super::rule::{Queue, Rule};
use super::settings::{RuleSettings, SettingValue};
use crate::errors::{TypografError, TypografResult};

static SHARED_DEFAULT: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| {
    RuleRegistry::with_defaults()
        .expect("built-in rule catalog is valid")
        .freeze()
});

/// Catalog of main and inner rules plus the language data they read.
///
/// Rules are kept sorted by priority at insertion time; equal priorities keep
/// registration order. Once frozen into an `Arc` the registry is immutable.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    inner_rules: Vec<Rule>,
    data: ConfigurationStore,
    frozen: bool,
    /// Enabled default per main rule name (last registration wins)
    defaults: HashMap<String, bool>,
    /// Merged settings schema per rule name
    schemas: HashMap<String, RuleSettings>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the built-in rule catalog and language data
    ///
    /// # Errors
    ///
    /// Fails only if a built-in rule definition is invalid.
    pub fn with_defaults() -> TypografResult<Self> {
        let mut registry = Self::new();
        crate::rules::register_defaults(&mut registry)?;
        Ok(registry)
    }

    /// Lazily built, frozen copy of the default registry
    #[must_use]
    pub fn shared_default() -> Arc<RuleRegistry> {
        Arc::clone(&SHARED_DEFAULT)
    }

    /// Add a main rule
    ///
    /// # Errors
    ///
    /// `RegistryFrozen`, `InvalidRuleName` or `InvalidSettingsSchema`.
    pub fn register(&mut self, rule: Rule) -> TypografResult<()> {
        self.check_insertable(&rule)?;
        self.defaults
            .insert(rule.name().to_string(), rule.enabled_by_default());
        self.merge_schema(&rule);
        insert_sorted(&mut self.rules, rule);
        Ok(())
    }

    /// Add an inner rule
    ///
    /// Inner rules share enable flags with the main rule of the same name; a
    /// default is seeded only if no main rule of that name exists yet.
    ///
    /// # Errors
    ///
    /// Same as [`RuleRegistry::register`].
    pub fn register_inner(&mut self, rule: Rule) -> TypografResult<()> {
        self.check_insertable(&rule)?;
        self.defaults
            .entry(rule.name().to_string())
            .or_insert(rule.enabled_by_default());
        self.merge_schema(&rule);
        insert_sorted(&mut self.inner_rules, rule);
        Ok(())
    }

    /// Add or replace a language data entry
    ///
    /// # Errors
    ///
    /// `RegistryFrozen` once frozen.
    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<DataValue>) -> TypografResult<()> {
        if self.frozen {
            return Err(TypografError::RegistryFrozen);
        }
        self.data.set(key, value);
        Ok(())
    }

    /// Seal the catalog and share it
    #[must_use]
    pub fn freeze(mut self) -> Arc<RuleRegistry> {
        self.frozen = true;
        debug!(
            rules = self.rules.len(),
            inner_rules = self.inner_rules.len(),
            "rule registry frozen"
        );
        Arc::new(self)
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Main rules of `queue` applicable to `language`, in execution order
    pub fn rules_for<'a>(&'a self, language: &'a str, queue: Queue) -> impl Iterator<Item = &'a Rule> + 'a {
        filter_rules(&self.rules, language, queue)
    }

    /// Inner rules of `queue` applicable to `language`, in execution order
    pub fn inner_rules_for<'a>(
        &'a self,
        language: &'a str,
        queue: Queue,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        filter_rules(&self.inner_rules, language, queue)
    }

    /// Distinct rule names (main and inner) matched by an exact name or glob
    #[must_use]
    pub fn resolve(&self, pattern: &str) -> Vec<String> {
        if !GlobMatcher::is_glob(pattern) {
            return if self.contains(pattern) {
                vec![pattern.to_string()]
            } else {
                Vec::new()
            };
        }

        let glob = GlobMatcher::new(pattern);
        self.rule_names()
            .into_iter()
            .filter(|name| glob.matches(name))
            .collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// Distinct names of all rules, sorted
    #[must_use]
    pub fn rule_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.defaults.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered main rules, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn data(&self) -> &ConfigurationStore {
        &self.data
    }

    /// Default enabled flag per rule name
    #[must_use]
    pub fn default_enabled(&self) -> &HashMap<String, bool> {
        &self.defaults
    }

    /// Declared settings with their defaults, per rule name
    #[must_use]
    pub fn default_settings(&self) -> &HashMap<String, RuleSettings> {
        &self.schemas
    }

    /// Declared default of one setting
    #[must_use]
    pub fn setting_schema(&self, rule: &str, key: &str) -> Option<&SettingValue> {
        self.schemas.get(rule).and_then(|s| s.get(key))
    }

    fn check_insertable(&self, rule: &Rule) -> TypografResult<()> {
        if self.frozen {
            return Err(TypografError::RegistryFrozen);
        }
        rule.validate()?;

        // A redeclared key must keep its type across same-named rules
        if let Some(existing) = self.schemas.get(rule.name()) {
            for (key, value) in rule.settings_schema() {
                let Some(prev) = existing.get(key) else {
                    continue;
                };
                if !prev.same_type(value) {
                    return Err(TypografError::InvalidSettingsSchema {
                        rule: rule.name().to_string(),
                        reason: format!(
                            "setting '{key}' redeclared as {} (was {})",
                            value.type_name(),
                            prev.type_name()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    fn merge_schema(&mut self, rule: &Rule) {
        let schema = self.schemas.entry(rule.name().to_string()).or_default();
        for (key, value) in rule.settings_schema() {
            if !schema.contains(key) {
                schema.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Insert after every rule of equal or lower priority
fn insert_sorted(list: &mut Vec<Rule>, rule: Rule) {
    let at = list.partition_point(|r| r.sort_index() <= rule.sort_index());
    list.insert(at, rule);
}

fn filter_rules<'a>(
    list: &'a [Rule],
    language: &'a str,
    queue: Queue,
) -> impl Iterator<Item = &'a Rule> + 'a {
    list.iter()
        .filter(move |r| r.execution_queue() == queue && r.applies_to(language))
}
