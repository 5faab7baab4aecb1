//! Byte order mark removal and repeated words

use crate::errors::TypografResult;
use crate::registry::{Queue, Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{ACCENT, cached_fancy_regex, try_replace_all};

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(
        Rule::new("common/other/delBOM", del_bom)
            .priority(-1)
            .queue(Queue::Start),
    )?;
    registry.register(
        Rule::new("common/other/repeatWord", repeat_word)
            .priority(1200)
            .disabled(),
    )?;
    Ok(())
}

fn del_bom(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(text.strip_prefix('\u{FEFF}').unwrap_or(text).to_string())
}

/// `word word,` → `word,`
fn repeat_word(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let re = cached_fancy_regex(&format!(
        r"(?i)([{letters}{ACCENT}]+) \1([;:,.?! \n])",
        letters = ctx.letters()
    ))?;
    try_replace_all(&re, text, "${1}${2}")
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::apply;

    #[test]
    fn test_del_bom() {
        assert_eq!(apply("common/other/delBOM", "common", "\u{FEFF}abc"), "abc");
        assert_eq!(apply("common/other/delBOM", "common", "a\u{FEFF}bc"), "a\u{FEFF}bc");
    }

    #[test]
    fn test_repeat_word() {
        let rule = "common/other/repeatWord";
        assert_eq!(apply(rule, "ru", "Я шёл шёл домой"), "Я шёл домой");
        assert_eq!(apply(rule, "common", "the the end."), "the end.");
        assert_eq!(apply(rule, "common", "the then"), "the then");
    }
}
