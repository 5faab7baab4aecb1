//! Optical alignment: hanging quotes, brackets and commas
//!
//! The default-queue rules wrap the punctuation and the space before it in
//! `typograf-oa-*` spans so a stylesheet can pull them into the margin. The
//! start-queue inner rules strip spans left by an earlier run, so processing
//! already aligned text does not nest them.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::super::shared_text;
use crate::errors::TypografResult;
use crate::registry::{Queue, Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{cached_regex, replace_all};

const QUOT_RULE: &str = "ru/punctuation/quot";

static SPACE_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"( |\x{A0})\(").expect("SPACE_BRACKET regex is valid")
});

static LINE_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\n)\(").expect("LINE_BRACKET regex is valid"));

static WORD_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([а-яёa-z0-9\x{301}]+), ").expect("WORD_COMMA regex is valid")
});

static QUOT_SPANS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="typograf-oa-(sp-lquot|lquot|n-lquot)">(.*?)</span>"#)
        .expect("QUOT_SPANS regex is valid")
});

static BRACKET_SPANS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="typograf-oa-(sp-lbracket|lbracket|n-lbracket)">(.*?)</span>"#)
        .expect("BRACKET_SPANS regex is valid")
});

static COMMA_SPANS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="typograf-oa-(comma|comma-sp)">(.*?)</span>"#)
        .expect("COMMA_SPANS regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/optalign/quot", quot).priority(1000).disabled())?;
    registry.register(Rule::new("ru/optalign/bracket", bracket).priority(1001).disabled())?;
    registry.register(Rule::new("ru/optalign/comma", comma).priority(1002).disabled())?;

    registry.register_inner(
        Rule::new("ru/optalign/quot", |text: &str, _: &RuleSettings, _: &RuleContext<'_>| {
            Ok(strip_spans(&QUOT_SPANS, text))
        })
        .queue(Queue::Start),
    )?;
    registry.register_inner(
        Rule::new("ru/optalign/bracket", |text: &str, _: &RuleSettings, _: &RuleContext<'_>| {
            Ok(strip_spans(&BRACKET_SPANS, text))
        })
        .queue(Queue::Start),
    )?;
    registry.register_inner(
        Rule::new("ru/optalign/comma", |text: &str, _: &RuleSettings, _: &RuleContext<'_>| {
            Ok(strip_spans(&COMMA_SPANS, text))
        })
        .queue(Queue::Start),
    )?;
    Ok(())
}

fn strip_spans(re: &Regex, text: &str) -> String {
    replace_all(re, text, "${2}")
}

/// Uses the opening quotes configured on `ru/punctuation/quot`
fn quot(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let lquot = regex::escape(shared_text(ctx, QUOT_RULE, "lquot")?);
    let lquot2 = regex::escape(shared_text(ctx, QUOT_RULE, "lquot2")?);
    let quotes = format!("({lquot}|{lquot2})");

    let after_word = cached_regex(&format!(r"(?i)([a-zа-яё\-\x{{301}}]{{3,}})( |\x{{A0}})({quotes})"))?;
    let line_start = cached_regex(&format!(r"(^|\n){quotes}"))?;

    let text = replace_all(&after_word, text, |caps: &Captures<'_>| {
        format!(
            r#"{}<span class="typograf-oa-sp-lquot">{}</span><span class="typograf-oa-lquot">{}</span>"#,
            &caps[1], &caps[2], &caps[3]
        )
    });
    Ok(replace_all(&line_start, &text, |caps: &Captures<'_>| {
        format!(r#"{}<span class="typograf-oa-n-lquot">{}</span>"#, &caps[1], &caps[2])
    }))
}

fn bracket(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(
        &SPACE_BRACKET,
        text,
        r#"<span class="typograf-oa-sp-lbracket">${1}</span><span class="typograf-oa-lbracket">(</span>"#,
    );
    Ok(replace_all(
        &LINE_BRACKET,
        &text,
        r#"${1}<span class="typograf-oa-n-lbracket">(</span>"#,
    ))
}

fn comma(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(
        &WORD_COMMA,
        text,
        r#"${1}<span class="typograf-oa-comma">,</span><span class="typograf-oa-comma-sp"> </span>"#,
    ))
}
