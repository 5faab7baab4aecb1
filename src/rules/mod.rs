//! Built-in rule catalog
//!
//! Rules are grouped by scope (`common`, `ru`) and category, one file per
//! category. Every rule goes through the same `Rule` contract that callers
//! use for their own rules.

mod common;
mod data;
mod ru;

use anyhow::anyhow;

use crate::errors::TypografResult;
use crate::registry::{RuleContext, RuleRegistry, RuleSettings};

/// Register the built-in language data and every built-in rule
///
/// # Errors
///
/// Fails only if a definition is invalid or `registry` is frozen.
pub fn register_defaults(registry: &mut RuleRegistry) -> TypografResult<()> {
    data::register(registry)?;
    // Language rules win priority ties: `ru/dash/main` must see ` - мы.`
    // before `common/nbsp/beforeShortLastWord` glues the last word (both 620)
    ru::register(registry)?;
    common::register(registry)?;
    Ok(())
}

/// Text data entry the handler cannot work without
fn required_text<'a>(ctx: &RuleContext<'a>, key: &str) -> anyhow::Result<&'a str> {
    ctx.data_text(key)
        .ok_or_else(|| anyhow!("missing text data entry '{key}'"))
}

/// List data entry joined into a regex alternation body
fn required_alternation(ctx: &RuleContext<'_>, key: &str) -> anyhow::Result<String> {
    ctx.data_list(key)
        .map(|items| items.join("|"))
        .ok_or_else(|| anyhow!("missing list data entry '{key}'"))
}

fn own_text<'a>(settings: &'a RuleSettings, key: &str) -> anyhow::Result<&'a str> {
    settings
        .text(key)
        .ok_or_else(|| anyhow!("setting '{key}' is not text"))
}

fn own_number(settings: &RuleSettings, key: &str) -> anyhow::Result<i64> {
    settings
        .number(key)
        .ok_or_else(|| anyhow!("setting '{key}' is not a number"))
}

/// Text setting of another rule, e.g. the interval dash of `ru/dash/main`
fn shared_text<'a>(ctx: &RuleContext<'a>, rule: &str, key: &str) -> anyhow::Result<&'a str> {
    ctx.setting_text(rule, key)
        .ok_or_else(|| anyhow!("setting '{key}' of rule '{rule}' is not available"))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Run a single built-in rule the way the pipeline would

    use std::collections::HashMap;

    use crate::registry::{RuleContext, RuleRegistry, RuleSettings};

    /// Apply every main rule named `name` to `text` with default settings
    pub(crate) fn apply(name: &str, language: &str, text: &str) -> String {
        let registry = RuleRegistry::with_defaults().expect("built-in catalog is valid");
        apply_with(&registry, registry.default_settings(), name, language, text)
    }

    pub(crate) fn apply_with(
        registry: &RuleRegistry,
        settings: &HashMap<String, RuleSettings>,
        name: &str,
        language: &str,
        text: &str,
    ) -> String {
        let ctx = RuleContext::new(language, registry.data(), settings);
        let empty = RuleSettings::new();
        let own = settings.get(name).unwrap_or(&empty);

        let mut text = text.to_string();
        let mut found = false;
        for queue in crate::registry::Queue::ALL {
            for rule in registry.rules_for(language, queue) {
                if rule.name() == name {
                    found = true;
                    text = rule.apply(&text, own, &ctx).expect("rule succeeds");
                }
            }
        }
        assert!(found, "rule '{name}' not registered for '{language}'");
        text
    }

    /// Apply the inner rule named `name`
    pub(crate) fn apply_inner(name: &str, language: &str, text: &str) -> String {
        let registry = RuleRegistry::with_defaults().expect("built-in catalog is valid");
        let settings = registry.default_settings();
        let ctx = RuleContext::new(language, registry.data(), settings);
        let empty = RuleSettings::new();

        let mut text = text.to_string();
        for queue in crate::registry::Queue::ALL {
            for rule in registry.inner_rules_for(language, queue) {
                if rule.name() == name {
                    text = rule.apply(&text, &empty, &ctx).expect("rule succeeds");
                }
            }
        }
        text
    }
}
