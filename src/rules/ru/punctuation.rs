//! Russian quotation marks, including nested quotes
//!
//! Straight and foreign quotes become `«…»`. A quote nested inside another
//! becomes `„…“` unless both levels are configured with the same pair, in
//! which case doubled marks collapse into one.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::super::own_text;
use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{TOKEN_PATTERN, cached_regex, replace_all};

const LETTER: &str = r"[A-Za-z0-9_а-яёА-ЯЁ\x{301}]";

/// Masked markup may sit between a quote and its word
static TAG: LazyLock<String> = LazyLock::new(|| format!("(?:^|{TOKEN_PATTERN})*"));

static OPENING: LazyLock<Regex> = LazyLock::new(|| {
    let tag = TAG.as_str();
    let phrase_left = format!(r"(?:…|{LETTER}|\n)");
    Regex::new(&format!(r#"({tag})?(«|„|“|")({tag}{phrase_left}{tag})"#))
        .expect("OPENING regex is valid")
});

static CLOSING: LazyLock<Regex> = LazyLock::new(|| {
    let tag = TAG.as_str();
    let phrase_right = format!(r"(?:{LETTER}|[)!?.:;#*,])*");
    Regex::new(&format!(r#"({tag}{phrase_right}{tag})(»|”|“|")({phrase_right})"#))
        .expect("CLOSING regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(
        Rule::new("ru/punctuation/quot", quot)
            .priority(700)
            .setting("lquot", '«')
            .setting("rquot", '»')
            .setting("lquot2", '„')
            .setting("rquot2", '“'),
    )?;
    Ok(())
}

/// A configured quote: raw text for output, escaped text for patterns
struct Mark<'a> {
    raw: &'a str,
    re: String,
}

impl<'a> Mark<'a> {
    fn from_setting(settings: &'a RuleSettings, key: &str) -> anyhow::Result<Self> {
        let raw = own_text(settings, key)?;
        Ok(Self {
            raw,
            re: regex::escape(raw),
        })
    }
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

fn quot(text: &str, settings: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let lquot = Mark::from_setting(settings, "lquot")?;
    let rquot = Mark::from_setting(settings, "rquot")?;
    let lquot2 = Mark::from_setting(settings, "lquot2")?;
    let rquot2 = Mark::from_setting(settings, "rquot2")?;

    let reversed = cached_regex(&format!(r"(^|[A-Za-z0-9_]|\s){}{}", rquot.re, lquot.re))?;

    let text = replace_all(&OPENING, text, |caps: &Captures<'_>| {
        format!("{}{}{}", group(caps, 1), lquot.raw, group(caps, 3))
    });
    let text = replace_all(&CLOSING, &text, |caps: &Captures<'_>| {
        format!("{}{}{}", group(caps, 1), rquot.raw, group(caps, 3))
    });
    // `»«` at the very start means two opening quotes
    let text = replace_all(&reversed, &text, |caps: &Captures<'_>| {
        format!("{}{}{}", group(caps, 1), lquot.raw, lquot.raw)
    });

    if lquot.raw == lquot2.raw && rquot.raw == rquot2.raw {
        let double_open = cached_regex(&format!("{}{}", lquot.re, lquot.re))?;
        let double_close = cached_regex(&format!("{}{}", rquot.re, rquot.re))?;
        let text = replace_all(&double_open, &text, regex::NoExpand(lquot.raw));
        return Ok(replace_all(&double_close, &text, regex::NoExpand(rquot.raw)));
    }

    let nested = cached_regex(&format!(
        "({l})([^{r}]*?){l}(.*?){r}([^{l}]*?)({r})",
        l = lquot.re,
        r = rquot.re
    ))?;
    let nested_open = cached_regex(&format!("({})(.*?){}(.*?)({})", lquot2.re, lquot.re, rquot2.re))?;
    let nested_close = cached_regex(&format!("({})(.*?){}(.*?)({})", lquot2.re, rquot.re, rquot2.re))?;

    let text = replace_all(&nested, &text, |caps: &Captures<'_>| {
        format!(
            "{}{}{}{}{}{}{}",
            &caps[1], &caps[2], lquot2.raw, &caps[3], rquot2.raw, &caps[4], &caps[5]
        )
    });
    let text = replace_all(&nested_open, &text, |caps: &Captures<'_>| {
        format!("{}{}{}{}{}", &caps[1], &caps[2], lquot2.raw, &caps[3], &caps[4])
    });
    Ok(replace_all(&nested_close, &text, |caps: &Captures<'_>| {
        format!("{}{}{}{}{}", &caps[1], &caps[2], rquot2.raw, &caps[3], &caps[4])
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::registry::{RuleRegistry, RuleSettings};
    use crate::rules::testing::{apply, apply_with};
    use crate::safe_tags::encode_token;

    const RULE: &str = "ru/punctuation/quot";

    #[test]
    fn test_straight_quotes() {
        assert_eq!(apply(RULE, "ru", "\"Пример\""), "«Пример»");
        assert_eq!(apply(RULE, "ru", "ОАО \"Пример\""), "ОАО «Пример»");
        assert_eq!(
            apply(
                RULE,
                "ru",
                "Вот у вас \"Мой спутник\" – это не сочинение, это хорошо, потому что не выдумано."
            ),
            "Вот у вас «Мой спутник» – это не сочинение, это хорошо, потому что не выдумано."
        );
    }

    #[test]
    fn test_nested_quotes() {
        assert_eq!(
            apply(RULE, "ru", "««Цыганы» мои не продаются вовсе»"),
            "«„Цыганы“ мои не продаются вовсе»"
        );
    }

    #[test]
    fn test_quotes_around_masked_markup() {
        let open = encode_token(0);
        let close = encode_token(1);
        let input = format!("{open}\"текст\"{close}");
        assert_eq!(apply(RULE, "ru", &input), format!("{open}«текст»{close}"));
    }

    #[test]
    fn test_same_pair_collapses_doubles() {
        let registry = RuleRegistry::with_defaults().expect("valid");
        let mut settings: HashMap<String, RuleSettings> = registry.default_settings().clone();
        let own = settings.get_mut(RULE).expect("registered");
        own.insert("lquot2", "«");
        own.insert("rquot2", "»");

        assert_eq!(
            apply_with(&registry, &settings, RULE, "ru", "««Энергия» Синергия»"),
            "«Энергия» Синергия»"
        );
    }

    #[test]
    fn test_custom_marks_are_literal() {
        let registry = RuleRegistry::with_defaults().expect("valid");
        let mut settings: HashMap<String, RuleSettings> = registry.default_settings().clone();
        let own = settings.get_mut(RULE).expect("registered");
        own.insert("lquot", "$1");
        own.insert("rquot", "$2");

        assert_eq!(apply_with(&registry, &settings, RULE, "ru", "\"a\""), "$1a$2");
    }
}
