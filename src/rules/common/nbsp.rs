//! No-break spaces around short words, numbers and marks

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::super::own_number;
use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{cached_regex, replace_all, try_replace_first};

static SECTION_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"§ ?([0-9]|I|V|X)").expect("SECTION_MARK regex is valid"));

static DPI: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"([0-9]) ?(lpi|dpi)(?![A-Za-z0-9_])").expect("DPI regex is valid")
});

static NOWRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<nowrap>)(.*?)(</nowrap>)").expect("NOWRAP regex is valid")
});

static NOBR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<nobr>)(.*?)(</nobr>)").expect("NOBR regex is valid"));

static INNER_NBSP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\x{A0}])\x{A0}([^\x{A0}])").expect("INNER_NBSP regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(
        Rule::new("common/nbsp/afterShortWord", after_short_word)
            .priority(590)
            .setting("lengthShortWord", 2),
    )?;
    registry.register(Rule::new("common/nbsp/afterPara", after_para).priority(610))?;
    registry.register(Rule::new("common/nbsp/afterNumber", after_number).priority(615))?;
    registry.register(
        Rule::new("common/nbsp/beforeShortLastWord", before_short_last_word)
            .priority(620)
            .setting("lengthLastWord", 3),
    )?;
    registry.register(Rule::new("common/nbsp/dpi", dpi).priority(1150))?;
    registry.register(Rule::new("common/nbsp/nowrap", nowrap).priority(1400))?;
    Ok(())
}

/// Glue a word of at most `lengthShortWord` letters to the next word.
///
/// Runs twice because a match consumes the space the next short word
/// would start from.
fn after_short_word(
    text: &str,
    settings: &RuleSettings,
    ctx: &RuleContext<'_>,
) -> anyhow::Result<String> {
    let len = own_number(settings, "lengthShortWord")?;
    if len <= 0 {
        return Ok(text.to_string());
    }

    let re = cached_regex(&format!(
        r"(?i)(^| |\x{{A0}})([{letters}]{{1,{len}}})(\.?) ",
        letters = ctx.letters()
    ))?;
    let text = replace_all(&re, text, "${1}${2}${3}\u{A0}");
    Ok(replace_all(&re, &text, "${1}${2}${3}\u{A0}"))
}

fn after_para(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&SECTION_MARK, text, "§\u{A0}${1}"))
}

fn after_number(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let re = cached_regex(&format!(
        r"(?i)(^|[^0-9])([0-9]{{1,5}}) ([{letters}]{{2,}})",
        letters = ctx.letters()
    ))?;
    Ok(replace_all(&re, text, "${1}${2}\u{A0}${3}"))
}

fn before_short_last_word(
    text: &str,
    settings: &RuleSettings,
    ctx: &RuleContext<'_>,
) -> anyhow::Result<String> {
    let len = own_number(settings, "lengthLastWord")?;
    if len <= 0 {
        return Ok(text.to_string());
    }

    let re = cached_regex(&format!(
        r"(?i) ([{letters}]{{1,{len}}})(\.|\?|:|!|,)",
        letters = ctx.letters()
    ))?;
    Ok(replace_all(&re, text, "\u{A0}${1}${2}"))
}

/// First occurrence only
fn dpi(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    try_replace_first(&DPI, text, "${1}\u{A0}${2}")
}

/// Inside `<nowrap>`/`<nobr>` single no-break spaces become plain spaces
fn nowrap(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&NOWRAP, text, unbreak);
    Ok(replace_all(&NOBR, &text, unbreak))
}

fn unbreak(caps: &Captures<'_>) -> String {
    format!(
        "{}{}{}",
        &caps[1],
        replace_all(&INNER_NBSP, &caps[2], "${1} ${2}"),
        &caps[3]
    )
}
