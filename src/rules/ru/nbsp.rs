//! No-break spaces specific to Russian text

use regex::Regex;
use std::sync::LazyLock;

use super::super::required_alternation;
use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{cached_regex, replace_all};

static PARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" (ли|ль|же|ж|бы|б)([^а-яёА-ЯЁ])").expect("PARTICLE regex is valid")
});

static NUMBER_SIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"№ ?([0-9]|п/п)").expect("NUMBER_SIGN regex is valid"));

static PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" (стр|гл|рис|илл)\.").expect("PAGE regex is valid"));

static SQUARE_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9]+) ?(км|м|дм|см|мм)2([^0-9]|$)")
        .expect("SQUARE_UNIT regex is valid")
});

static CUBIC_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9]+) ?(км|м|дм|см|мм)3([^0-9]|$)")
        .expect("CUBIC_UNIT regex is valid")
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9]{1,4}) ?г(од| |,|;|\.|\n|$)").expect("YEAR regex is valid")
});

static YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[0-9]) ?г\. ?г\.").expect("YEARS regex is valid"));

static CENTURY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]|V|I|X) ?в(в)?( |,|;|\n|$)").expect("CENTURY regex is valid")
});

static CENTURIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]|[IVX]) ?в\.? ?в\.").expect("CENTURIES regex is valid")
});

static COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^a-zа-яёA-ZА-ЯЁ])(ООО|ОАО|ЗАО|НИИ|ПБОЮЛ) ").expect("COMPANY regex is valid")
});

static BUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",?( |\x{A0}|\n)(а|но)( |\x{A0}|\n)").expect("BUT regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/nbsp/beforeParticle", before_particle).priority(570))?;
    registry.register(Rule::new("ru/nbsp/afterNumberSign", after_number_sign).priority(610))?;
    registry.register(Rule::new("ru/nbsp/page", page).priority(610))?;
    registry.register(Rule::new("ru/nbsp/m", m).priority(1030))?;
    registry.register(Rule::new("ru/nbsp/xxxx", xxxx).priority(1060))?;
    registry.register(Rule::new("ru/nbsp/yy", yy).priority(1080))?;
    registry.register(Rule::new("ru/nbsp/cc", cc).priority(1090))?;
    registry.register(Rule::new("ru/nbsp/ooo", ooo).priority(1100))?;
    registry.register(Rule::new("ru/nbsp/dayMonth", day_month).priority(1105))?;
    registry.register(Rule::new("ru/nbsp/but", but).priority(1110))?;
    Ok(())
}

/// Glue a particle (`ли`, `же`, `бы`) to the preceding word
fn before_particle(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&PARTICLE, text, "\u{A0}${1}${2}"))
}

fn after_number_sign(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&NUMBER_SIGN, text, "№\u{A0}${1}"))
}

fn page(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&PAGE, text, "\u{A0}${1}."))
}

/// `2 м2` → `2 м²`, `20 м3` → `20 м³`
fn m(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&SQUARE_UNIT, text, "${1}${2}\u{A0}${3}²${4}");
    Ok(replace_all(&CUBIC_UNIT, &text, "${1}${2}\u{A0}${3}³${4}"))
}

/// `2012 г.`
fn xxxx(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&YEAR, text, "${1}${2}\u{A0}г${3}"))
}

/// `2012-2015 г. г.` → `2012-2015 гг.`
fn yy(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&YEARS, text, "${1}\u{A0}гг."))
}

/// `XX в` → `XX в.`, `XIX в. в.` → `XIX вв.`
fn cc(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&CENTURY, text, "${1}\u{A0}в${2}.${3}");
    Ok(replace_all(&CENTURIES, &text, "${1}\u{A0}вв."))
}

fn ooo(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&COMPANY, text, "${1}${2}\u{A0}"))
}

/// Day number and abbreviated month
fn day_month(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let months = required_alternation(ctx, "ru/shortMonth")?;
    let re = cached_regex(&format!("(?i)([0-9]{{1,2}}) ({months})"))?;
    Ok(replace_all(&re, text, "${1}\u{A0}${2}"))
}

/// Comma before a standalone `а` or `но`
fn but(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    Ok(replace_all(&BUT, text, ",${1}${2}${3}"))
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::apply;

    #[test]
    fn test_before_particle() {
        let rule = "ru/nbsp/beforeParticle";
        assert_eq!(apply(rule, "ru", "Может ли быть?"), "Может\u{A0}ли быть?");
        assert_eq!(apply(rule, "ru", "Может же быть?"), "Может\u{A0}же быть?");
        assert_eq!(apply(rule, "ru", "Может лишь"), "Может лишь");
    }

    #[test]
    fn test_after_number_sign() {
        let rule = "ru/nbsp/afterNumberSign";
        assert_eq!(apply(rule, "ru", " № 123"), " №\u{A0}123");
        assert_eq!(apply(rule, "ru", " №123"), " №\u{A0}123");
        assert_eq!(apply(rule, "ru", "№ п/п"), "№\u{A0}п/п");
    }

    #[test]
    fn test_page() {
        assert_eq!(apply("ru/nbsp/page", "ru", "см. стр. 5"), "см.\u{A0}стр. 5");
    }

    #[test]
    fn test_m() {
        let rule = "ru/nbsp/m";
        assert_eq!(apply(rule, "ru", " 2 м2 "), " 2\u{A0}м² ");
        assert_eq!(apply(rule, "ru", " 2.0 м2 "), " 2.0\u{A0}м² ");
        assert_eq!(apply(rule, "ru", " dd м2 "), " dd м2 ");
        assert_eq!(apply(rule, "ru", " 20 м3 "), " 20\u{A0}м³ ");
        assert_eq!(apply(rule, "ru", "5км2"), "5\u{A0}км²");
    }

    #[test]
    fn test_years() {
        assert_eq!(apply("ru/nbsp/xxxx", "ru", "2012 г."), "2012\u{A0}г.");
        assert_eq!(apply("ru/nbsp/xxxx", "ru", " (2012 г.) "), " (2012\u{A0}г.) ");
        assert_eq!(apply("ru/nbsp/yy", "ru", "2012-2015 г. г. "), "2012-2015\u{A0}гг. ");
        assert_eq!(apply("ru/nbsp/yy", "ru", "2012-2015г.г. "), "2012-2015\u{A0}гг. ");
    }

    #[test]
    fn test_cc() {
        let rule = "ru/nbsp/cc";
        assert_eq!(apply(rule, "ru", "XX в"), "XX\u{A0}в.");
        assert_eq!(apply(rule, "ru", "XIX в. в."), "XIX\u{A0}вв.");
        assert_eq!(apply(rule, "ru", "XX вв."), "XX\u{A0}вв.");
        assert_eq!(apply(rule, "ru", "в лесу"), "в лесу");
    }

    #[test]
    fn test_ooo() {
        let rule = "ru/nbsp/ooo";
        assert_eq!(apply(rule, "ru", "ООО \"Пример\""), "ООО\u{A0}\"Пример\"");
        assert_eq!(apply(rule, "ru", "ОАО \"Пример\""), "ОАО\u{A0}\"Пример\"");
        assert_eq!(apply(rule, "ru", "НЕООО тест"), "НЕООО тест");
    }

    #[test]
    fn test_day_month() {
        let rule = "ru/nbsp/dayMonth";
        assert_eq!(apply(rule, "ru", "1 янв"), "1\u{A0}янв");
        assert_eq!(apply(rule, "ru", "12 Мая"), "12\u{A0}Мая");
    }

    #[test]
    fn test_but() {
        let rule = "ru/nbsp/but";
        assert_eq!(
            apply(rule, "ru", "Его лодка скользнула вниз но бедняга держался по-прежнему стойко."),
            "Его лодка скользнула вниз, но бедняга держался по-прежнему стойко."
        );
        assert_eq!(apply(rule, "ru", "Я пошёл домой а он остался."), "Я пошёл домой, а он остался.");
        assert_eq!(apply(rule, "ru", "домой, а он"), "домой, а он");
    }
}
