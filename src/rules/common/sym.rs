//! Symbol substitutions: ©, ®, ™, arrows, degrees

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{replace_all, try_replace_all};

static REGISTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(r\)").expect("REGISTERED regex is valid"));

/// Latin `c` or Cyrillic `с`
static COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(copyright )?\((c|с)\)").expect("COPYRIGHT regex is valid")
});

static TRADEMARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(tm\)").expect("TRADEMARK regex is valid"));

/// `C`/`F` after a number, not followed by a word character
static DEGREES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)( |\x{A0})?(C|F)([^A-Za-z0-9_]|$)").expect("DEGREES regex is valid")
});

static RIGHT_ARROW: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(^|[^-])->(?!>)").expect("RIGHT_ARROW regex is valid")
});

static LEFT_ARROW: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(^|[^<])<-(?!-)").expect("LEFT_ARROW regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("common/sym/copy", copy).priority(10))?;
    registry.register(Rule::new("common/sym/cf", cf).priority(1020))?;
    registry.register(Rule::new("common/sym/arrow", arrow).priority(1130))?;
    Ok(())
}

fn copy(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&REGISTERED, text, "®");
    let text = replace_all(&COPYRIGHT, &text, "©");
    Ok(replace_all(&TRADEMARK, &text, "™"))
}

fn cf(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&DEGREES, text, "${1}\u{2009}°${3}${4}"))
}

fn arrow(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = try_replace_all(&RIGHT_ARROW, text, "${1}→")?;
    try_replace_all(&LEFT_ARROW, &text, "${1}←")
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::apply;

    #[test]
    fn test_copy() {
        let rule = "common/sym/copy";
        assert_eq!(apply(rule, "common", "(c)"), "©");
        assert_eq!(apply(rule, "common", "(С)"), "©");
        assert_eq!(apply(rule, "common", "Copyright (C) 2014"), "© 2014");
        assert_eq!(apply(rule, "common", "(r)"), "®");
        assert_eq!(apply(rule, "common", "(TM)"), "™");
    }

    #[test]
    fn test_cf() {
        let rule = "common/sym/cf";
        assert_eq!(apply(rule, "common", " 200 C"), " 200\u{2009}°C");
        assert_eq!(apply(rule, "common", " 200 C."), " 200\u{2009}°C.");
        assert_eq!(apply(rule, "common", " 200 F"), " 200\u{2009}°F");
        assert_eq!(apply(rule, "common", " 20d C"), " 20d C");
        assert_eq!(apply(rule, "common", " 20 C1"), " 20 C1");
    }

    #[test]
    fn test_arrow() {
        let rule = "common/sym/arrow";
        assert_eq!(apply(rule, "common", "20 + 10 -> 30"), "20 + 10 → 30");
        assert_eq!(apply(rule, "common", "20 + 10 <- 30"), "20 + 10 ← 30");
        assert_eq!(apply(rule, "common", "<-"), "←");
        assert_eq!(apply(rule, "common", "->"), "→");
        assert_eq!(apply(rule, "common", "-->"), "-->");
        assert_eq!(apply(rule, "common", "->>"), "->>");
    }
}
