//! Markup producing and stripping rules

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Queue, Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{replace_all, replace_first};

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+>").expect("TAG regex is valid"));

static MAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^|[\s;(])([A-Za-z0-9_\-.]{2,})@([A-Za-z0-9_\-.]{2,})\.([a-z]{2,6})([)\s.,!?]|$)",
    )
    .expect("MAIL regex is valid")
});

/// The `+-=` range is kept as is: it spans `+ , - . / 0-9 : ; <` and `=`
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(http|https|ftp|telnet|news|gopher|file|wais)://([a-zA-Z0-9/\n+-=%&:_.~?]+[a-zA-Z0-9#+]*)",
    )
    .expect("URL regex is valid")
});

static WWW_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^www\.").expect("WWW_PREFIX regex is valid"));

static BARE_HOST_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)/$").expect("BARE_HOST_SLASH regex is valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n").expect("PARAGRAPH_BREAK regex is valid"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^>])\n").expect("LINE_BREAK regex is valid"));

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(
        Rule::new("common/html/stripTags", strip_tags)
            .priority(100)
            .queue(Queue::End)
            .disabled(),
    )?;
    registry.register(
        Rule::new("common/html/escape", escape)
            .priority(110)
            .queue(Queue::End)
            .disabled(),
    )?;
    registry.register(Rule::new("common/html/mail", mail).priority(2000))?;
    registry.register(Rule::new("common/html/url", url).priority(2010))?;
    registry.register(Rule::new("common/html/nbr", nbr).priority(2020).disabled())?;
    registry.register(Rule::new("common/html/pbr", pbr).priority(2030).disabled())?;
    Ok(())
}

fn strip_tags(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&TAG, text, ""))
}

fn escape(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(html_escape::encode_safe(text).into_owned())
}

fn mail(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(
        &MAIL,
        text,
        r#"${1}<a href="mailto:${2}@${3}.${4}">${2}@${3}.${4}</a>${5}"#,
    ))
}

fn url(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&URL, text, link))
}

/// `http` links show the address without scheme, `www.` or a lone trailing
/// slash; other schemes show the full address
fn link(caps: &Captures<'_>) -> String {
    let scheme = &caps[1];
    let address = &caps[2];
    let full = format!("{scheme}://{address}");

    if scheme == "http" {
        let shown = replace_first(&WWW_PREFIX, address, "");
        let shown = replace_first(&BARE_HOST_SLASH, &shown, "${1}");
        format!(r#"<a href="{full}">{shown}</a>"#)
    } else {
        format!(r#"<a href="{full}">{full}</a>"#)
    }
}

/// Skipped when the text already has `<br` somewhere
fn nbr(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    if text.contains("<br") {
        return Ok(text.to_string());
    }
    Ok(text.replace('\n', "<br/>\n"))
}

fn pbr(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    if !text.contains('\n') {
        return Ok(format!("<p>{text}</p>"));
    }

    let paragraphs = format!("<p>{}</p>", replace_all(&PARAGRAPH_BREAK, text, "</p>\n<p>"));
    Ok(replace_all(&LINE_BREAK, &paragraphs, "${1}<br/>\n"))
}
