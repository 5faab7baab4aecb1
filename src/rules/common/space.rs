//! Whitespace cleanup

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{replace_all, try_replace_all};

static LEADING_BLANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]+").expect("LEADING_BLANKS regex is valid"));

static TRAILING_BLANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("TRAILING_BLANKS regex is valid"));

/// A run of two or more blanks between two visible characters
static REPEAT_SPACE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?<=[^\n \t])( |\t){2,}(?=[^\n \t])")
        .expect("REPEAT_SPACE regex is valid")
});

static REPEAT_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("REPEAT_NEWLINE regex is valid"));

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" (!|;|,|\?|\.|:)").expect("SPACE_BEFORE_PUNCTUATION regex is valid")
});

static SPACE_AFTER_OPEN_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\( ").expect("SPACE_AFTER_OPEN_PAREN regex is valid"));

static GLUED_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\s(\x{F0000}])\(").expect("GLUED_OPEN_PAREN regex is valid")
});

static SPACE_BEFORE_CLOSE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \)").expect("SPACE_BEFORE_CLOSE_PAREN regex is valid"));

static GLUED_CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\)([^!;,?.:\s)\x{F0000}])").expect("GLUED_CLOSE_PAREN regex is valid")
});

/// Masking tokens, closing quotes and brackets never get a space before them
static AFTER_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(!|;|\?)([^ \x{A0}\x{F0000}\n\t!;?\[)\]"'»“”])"#)
        .expect("AFTER_TERMINAL regex is valid")
});

/// `\D` is spelled `[^0-9]`: only ASCII digits guard decimals like `1,5`
static AFTER_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^0-9])(,|:)([^ \x{A0}\x{F0000}\n\t,.?:/)\]"'»“”])"#)
        .expect("AFTER_SEPARATOR regex is valid")
});

static SPACE_BEFORE_PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9])( |\x{A0})(%|‰|‱)").expect("SPACE_BEFORE_PERCENT regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(
        Rule::new("common/space/delLeadingBlanks", del_leading_blanks)
            .priority(504)
            .disabled(),
    )?;
    registry.register(Rule::new("common/space/delTrailingBlanks", del_trailing_blanks).priority(505))?;
    registry.register(Rule::new("common/space/replaceTab", replace_tab).priority(510))?;
    registry.register(Rule::new("common/space/trimLeft", trim_left).priority(530))?;
    registry.register(Rule::new("common/space/trimRight", trim_right).priority(535))?;
    registry.register(Rule::new("common/space/delRepeatSpace", del_repeat_space).priority(540))?;
    registry.register(Rule::new("common/space/delRepeatN", del_repeat_n).priority(545))?;
    registry.register(
        Rule::new("common/space/delBeforePunctuation", del_before_punctuation).priority(550),
    )?;
    registry.register(
        Rule::new("common/space/afterPunctuation", after_punctuation).priority(560),
    )?;
    registry.register(
        Rule::new("common/space/delBeforePercent", del_before_percent).priority(600),
    )?;
    Ok(())
}

fn del_leading_blanks(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&LEADING_BLANKS, text, "\n"))
}

fn del_trailing_blanks(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&TRAILING_BLANKS, text, "\n"))
}

fn replace_tab(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(text.replace('\t', " "))
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_left(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(text.trim_start_matches(is_trimmable).to_string())
}

fn trim_right(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(text.trim_end_matches(is_trimmable).to_string())
}

fn del_repeat_space(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    try_replace_all(&REPEAT_SPACE, text, "$1")
}

fn del_repeat_n(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&REPEAT_NEWLINE, text, "\n\n"))
}

fn del_before_punctuation(
    text: &str,
    _: &RuleSettings,
    _: &RuleContext<'_>,
) -> anyhow::Result<String> {
    let text = replace_all(&SPACE_BEFORE_PUNCTUATION, text, "${1}");
    let text = replace_all(&SPACE_AFTER_OPEN_PAREN, &text, "(");
    let text = replace_all(&GLUED_OPEN_PAREN, &text, "${1} (");
    let text = replace_all(&SPACE_BEFORE_CLOSE_PAREN, &text, ")");
    Ok(replace_all(&GLUED_CLOSE_PAREN, &text, ") ${1}"))
}

fn after_punctuation(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&AFTER_TERMINAL, text, "${1} ${2}");
    Ok(replace_all(&AFTER_SEPARATOR, &text, "${1}${2} ${3}"))
}

fn del_before_percent(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&SPACE_BEFORE_PERCENT, text, "${1}${3}"))
}
