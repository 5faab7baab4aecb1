//! Short ordinal suffixes: `1-ый` → `1-й`

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::replace_all;

/// Long suffix pattern and its replacement, applied in order
static ORDINALS: LazyLock<[(Regex, &'static str); 8]> = LazyLock::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("ORDINALS regex is valid");
    [
        (re(r"([0-9])-(ый|ой)([^а-яё]|$)"), "${1}-й${3}"),
        (re(r"([0-9])-ая([^а-яё]|$)"), "${1}-я${2}"),
        (re(r"([0-9])-(ое|ые)([^а-яё]|$)"), "${1}-е${3}"),
        (re(r"([0-9])-(ым|ом)([^а-яё]|$)"), "${1}-м${3}"),
        (re(r"([0-9])-ых([^а-яё]|$)"), "${1}-х${2}"),
        (re(r"([0-9])-ого([^а-яё]|$)"), "${1}-го${2}"),
        (re(r"([0-9])-ому([^а-яё]|$)"), "${1}-му${2}"),
        (re(r"([0-9])-ыми([^а-яё]|$)"), "${1}-ми${2}"),
    ]
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/number/ordinals", ordinals).priority(1300))?;
    Ok(())
}

fn ordinals(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(ORDINALS
        .iter()
        .fold(text.to_string(), |acc, (re, rep)| replace_all(re, &acc, *rep)))
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::apply;

    #[test]
    fn test_ordinals() {
        let rule = "ru/number/ordinals";
        assert_eq!(apply(rule, "ru", "1-ый"), "1-й");
        assert_eq!(apply(rule, "ru", "2-ой раз"), "2-й раз");
        assert_eq!(apply(rule, "ru", "3-ая"), "3-я");
        assert_eq!(apply(rule, "ru", "5-ое, 6-ые"), "5-е, 6-е");
        assert_eq!(apply(rule, "ru", "7-ым"), "7-м");
        assert_eq!(apply(rule, "ru", "8-ых."), "8-х.");
        assert_eq!(apply(rule, "ru", "9-ого"), "9-го");
        assert_eq!(apply(rule, "ru", "10-ому"), "10-му");
        assert_eq!(apply(rule, "ru", "11-ыми"), "11-ми");
    }

    #[test]
    fn test_ordinals_leave_words() {
        assert_eq!(apply("ru/number/ordinals", "ru", "1-ыйх"), "1-ыйх");
    }
}
