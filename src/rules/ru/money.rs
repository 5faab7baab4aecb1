//! Currency signs after the amount, glued with a no-break space

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{replace_all, replace_first, try_replace_all, try_replace_first};

static DOLLAR_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9]{2,})\$ ?([0-9.,]+)").expect("DOLLAR_BEFORE regex is valid")
});

static DOLLAR_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9.,]+) ?\$").expect("DOLLAR_AFTER regex is valid")
});

static EURO_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9]{2,})€ ?([0-9.]+)").expect("EURO_BEFORE regex is valid")
});

static EURO_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9.,]+) ?€").expect("EURO_AFTER regex is valid")
});

/// Whole text is an amount: `100 руб.`
static RUBLE_ONLY: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"^([0-9]+)( |\x{A0})?(р|руб)\.$").expect("RUBLE_ONLY regex is valid")
});

static RUBLE_BEFORE_PUNCT: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"([0-9]+)( |\x{A0})?(р|руб)\.(?=[!?,:;])")
        .expect("RUBLE_BEFORE_PUNCT regex is valid")
});

/// The abbreviation dot also ended the sentence
static RUBLE_BEFORE_SENTENCE: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"([0-9]+)( |\x{A0})?(р|руб)\.(?=\s+[А-ЯЁ])")
        .expect("RUBLE_BEFORE_SENTENCE regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/money/dollar", dollar).priority(1140))?;
    registry.register(Rule::new("ru/money/euro", euro).priority(1140))?;
    registry.register(Rule::new("ru/money/ruble", ruble).priority(1145).disabled())?;
    Ok(())
}

/// `$2` → `2 $`; the trailing form is fixed at its first occurrence only
fn dollar(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&DOLLAR_BEFORE, text, "${1}${2}\u{A0}$$");
    Ok(replace_first(&DOLLAR_AFTER, &text, "${1}${2}\u{A0}$$"))
}

fn euro(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&EURO_BEFORE, text, "${1}${2}\u{A0}€");
    Ok(replace_first(&EURO_AFTER, &text, "${1}${2}\u{A0}€"))
}

/// `100 руб.` → `100 ₽`
fn ruble(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = try_replace_first(&RUBLE_ONLY, text, "${1}\u{A0}₽")?;
    let text = try_replace_all(&RUBLE_BEFORE_PUNCT, &text, "${1}\u{A0}₽")?;
    try_replace_all(&RUBLE_BEFORE_SENTENCE, &text, "${1}\u{A0}₽.")
}
