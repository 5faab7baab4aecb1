//! Hyphens in compound words and dashes between words, months, centuries

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::super::{own_text, required_alternation, required_text, shared_text};
use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{NBSP, cached_regex, replace_all};

const MAIN_RULE: &str = "ru/dash/main";

/// Any hyphen or dash typed as a separator
const DASHES: &str = "(-|--|–|—)";

static BETWEEN_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"( |\x{{A0}}){DASHES}( |\n)")).expect("BETWEEN_WORDS regex is valid")
});

static LINE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(^|\n){DASHES}( |\x{{A0}})")).expect("LINE_START regex is valid")
});

static CENTURIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(X|I|V)(?: |\x{{A0}})?{DASHES}(?: |\x{{A0}})?(X|I|V)"))
        .expect("CENTURIES regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/dash/to", to).priority(30))?;
    registry.register(Rule::new("ru/dash/izza", izza).priority(33))?;
    registry.register(Rule::new("ru/dash/izpod", izpod).priority(35))?;
    registry.register(Rule::new("ru/dash/koe", koe).priority(38))?;
    registry.register(Rule::new("ru/dash/taki", taki).priority(39))?;
    registry.register(Rule::new("ru/dash/weekday", weekday).priority(600))?;
    registry.register(Rule::new("ru/dash/month", month).priority(610))?;
    registry.register(
        Rule::new(MAIN_RULE, main)
            .priority(620)
            .setting("dash", '\u{2014}')
            .setting("dashInterval", '\u{2014}'),
    )?;
    Ok(())
}

/// `кто то` → `кто-то`
fn to(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let after = required_text(ctx, "ru/dashAfter")?;
    let re = cached_regex(&format!("( | ?- ?)(то|либо|нибудь|ка|де|кась){after}"))?;
    Ok(replace_all(&re, text, "-${2}${3}"))
}

fn izza(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    hyphenate_iz(text, ctx, "за")
}

fn izpod(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    hyphenate_iz(text, ctx, "под")
}

/// `из за` → `из-за`, keeping the case of the first letter
fn hyphenate_iz(text: &str, ctx: &RuleContext<'_>, second: &str) -> anyhow::Result<String> {
    let before = required_text(ctx, "ru/dashBefore")?;
    let after = required_text(ctx, "ru/dashAfter")?;
    let re = cached_regex(&format!("{before}(И|и)з {second}{after}"))?;
    Ok(replace_all(&re, text, format!("${{1}}${{2}}з-{second}${{3}}").as_str()))
}

/// `кое как` → `кое-как`, `кой какой` → `кой-какой`
fn koe(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let before = required_text(ctx, "ru/dashBefore")?;
    let after = required_text(ctx, "ru/dashAfter")?;
    let re = cached_regex(&format!(r"{before}([Кк]о[ей])\s([а-яё]{{3,}}){after}"))?;
    Ok(replace_all(&re, text, "${1}${2}-${3}${4}"))
}

fn taki(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let after = required_text(ctx, "ru/dashAfter")?;
    let re = cached_regex(&format!(
        r"(верно|довольно|опять|прямо|так|вс[её]|действительно|неужели)\s(таки){after}"
    ))?;
    Ok(replace_all(&re, text, "${1}-${2}${3}"))
}

fn weekday(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    interval_between(text, ctx, "ru/weekday")
}

fn month(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    interval_between(text, ctx, "ru/month")
}

/// `Март-декабрь` → `Март—декабрь` using the interval dash of `ru/dash/main`
fn interval_between(text: &str, ctx: &RuleContext<'_>, data_key: &str) -> anyhow::Result<String> {
    let words = required_alternation(ctx, data_key)?;
    let dash = shared_text(ctx, MAIN_RULE, "dashInterval")?;
    let re = cached_regex(&format!("(?i)({words}) ?(-|—) ?({words})"))?;
    Ok(replace_all(&re, text, |caps: &Captures<'_>| {
        format!("{}{dash}{}", &caps[1], &caps[3])
    }))
}

/// Word dash with a no-break space before it, line-leading dash with one
/// after it, and a tight dash between Roman numerals
fn main(text: &str, settings: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let dash = own_text(settings, "dash")?;
    let interval = own_text(settings, "dashInterval")?;

    let text = replace_all(&BETWEEN_WORDS, text, |caps: &Captures<'_>| {
        format!("{NBSP}{dash}{}", &caps[3])
    });
    let text = replace_all(&LINE_START, &text, |caps: &Captures<'_>| {
        format!("{}{dash}{NBSP}", &caps[1])
    });
    Ok(replace_all(&CENTURIES, &text, |caps: &Captures<'_>| {
        format!("{}{interval}{}", &caps[1], &caps[3])
    }))
}
