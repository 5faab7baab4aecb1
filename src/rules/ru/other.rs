//! Stress marks written as capital vowels: `мОре` → `мо́ре`

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{ACCENT, replace_all};

static STRESSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([а-яё])([АЕЁИОУЫЭЮЯ])([^А-ЯЁA-Za-z0-9_]|$)").expect("STRESSED regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/other/accent", accent).priority(560).disabled())?;
    Ok(())
}

/// A capital vowel right after a lowercase letter marks the stress
fn accent(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&STRESSED, text, |caps: &Captures<'_>| {
        format!(
            "{}{}{ACCENT}{}",
            &caps[1],
            caps[2].to_lowercase(),
            &caps[3]
        )
    }))
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::apply;

    #[test]
    fn test_accent() {
        let rule = "ru/other/accent";
        assert_eq!(apply(rule, "ru", "Ко мнЕ"), "Ко мне\u{301}");
        assert_eq!(apply(rule, "ru", "дорогА, домА"), "дорога\u{301}, дома\u{301}");
        assert_eq!(apply(rule, "ru", "мОре"), "мо\u{301}ре");
        assert_eq!(apply(rule, "ru", "СССР"), "СССР");
    }
}
