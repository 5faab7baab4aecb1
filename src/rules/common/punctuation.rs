//! Punctuation normalization

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{replace_all, replace_first};

static THREE_DOTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^.])\.{3,4}([^.]|$)").expect("THREE_DOTS regex is valid")
});

static DOUBLE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(,|:|;|\?){2,}").expect("DOUBLE_PUNCTUATION regex is valid"));

static EXCLAMATION_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^!])!\?([^?]|$)").expect("EXCLAMATION_QUESTION regex is valid")
});

static TWO_EXCLAMATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^!])!{2}($|[^!])").expect("TWO_EXCLAMATIONS regex is valid")
});

static FOUR_EXCLAMATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^!])!{4}($|[^!])").expect("FOUR_EXCLAMATIONS regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("common/punctuation/hellip", hellip).priority(20))?;
    registry.register(
        Rule::new("common/punctuation/delDoublePunctuation", del_double_punctuation)
            .priority(580),
    )?;
    registry.register(
        Rule::new("common/punctuation/exclamationQuestion", exclamation_question)
            .priority(1140),
    )?;
    registry.register(Rule::new("common/punctuation/exclamation", exclamation).priority(1150))?;
    Ok(())
}

fn hellip(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&THREE_DOTS, text, "${1}…${2}"))
}

fn del_double_punctuation(
    text: &str,
    _: &RuleSettings,
    _: &RuleContext<'_>,
) -> anyhow::Result<String> {
    Ok(replace_all(&DOUBLE_PUNCTUATION, text, "${1}"))
}

fn exclamation_question(
    text: &str,
    _: &RuleSettings,
    _: &RuleContext<'_>,
) -> anyhow::Result<String> {
    Ok(replace_all(&EXCLAMATION_QUESTION, text, "${1}?!${2}"))
}

/// Only the first `!!` and the first `!!!!` are fixed
fn exclamation(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_first(&TWO_EXCLAMATIONS, text, "${1}!${2}");
    Ok(replace_first(&FOUR_EXCLAMATIONS, &text, "${1}!!!${2}"))
}
