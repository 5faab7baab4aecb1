//! Numeric notation: ±, ×, vulgar fractions

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::replace_all;

static PLUS_MINUS_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^| |>|\x{A0})\+-([0-9])").expect("PLUS_MINUS_NUMBER regex is valid")
});

static PLUS_MINUS_ALONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^\s*)\+-(\s*$)").expect("PLUS_MINUS_ALONE regex is valid"));

/// Latin `x` or Cyrillic `х`, optionally padded by a plain or no-break space
static TIMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9])[ \x{A0}]?[xх][ \x{A0}]?([0-9])").expect("TIMES regex is valid")
});

static FRACTIONS: LazyLock<[(Regex, &'static str); 3]> = LazyLock::new(|| {
    let fraction = |numerator: u8, denominator: u8| {
        Regex::new(&format!(r"(^|[^0-9]){numerator}/{denominator}([^0-9]|$)"))
            .expect("FRACTIONS regex is valid")
    };
    [
        (fraction(1, 2), "${1}½${2}"),
        (fraction(1, 4), "${1}¼${2}"),
        (fraction(3, 4), "${1}¾${2}"),
    ]
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("common/number/plusMinus", plus_minus).priority(1010))?;
    registry.register(Rule::new("common/number/times", times).priority(1050))?;
    registry.register(Rule::new("common/number/fraction", fraction).priority(1120))?;
    Ok(())
}

fn plus_minus(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&PLUS_MINUS_NUMBER, text, "${1}±${2}");
    Ok(replace_all(&PLUS_MINUS_ALONE, &text, "${1}±${2}"))
}

fn times(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&TIMES, text, "${1}×${2}"))
}

fn fraction(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(FRACTIONS
        .iter()
        .fold(text.to_string(), |acc, (re, rep)| replace_all(re, &acc, *rep)))
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::apply;

    #[test]
    fn test_plus_minus() {
        let rule = "common/number/plusMinus";
        assert_eq!(apply(rule, "common", "+-"), "±");
        assert_eq!(apply(rule, "common", "+-100"), "±100");
        assert_eq!(apply(rule, "common", "a +-5"), "a ±5");
        assert_eq!(apply(rule, "common", "a+-5"), "a+-5");
    }

    #[test]
    fn test_times() {
        let rule = "common/number/times";
        assert_eq!(apply(rule, "common", "100 x 2"), "100×2");
        assert_eq!(apply(rule, "ru", "Пример: 30x3=90"), "Пример: 30×3=90");
        assert_eq!(apply(rule, "ru", "10 х\u{A0}20"), "10×20");
    }

    #[test]
    fn test_fraction() {
        let rule = "common/number/fraction";
        assert_eq!(apply(rule, "common", "1/2"), "½");
        assert_eq!(apply(rule, "common", "1/4"), "¼");
        assert_eq!(apply(rule, "common", "3/4 cup"), "¾ cup");
        assert_eq!(apply(rule, "common", "11/22"), "11/22");
    }
}
