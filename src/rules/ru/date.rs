//! Numeric dates to `dd.mm.yyyy`, lowercase month and weekday names

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::super::required_alternation;
use crate::errors::TypografResult;
use crate::registry::{Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::utils::{cached_regex, replace_all};

/// `2010-02-01`, `2010.02.01`, `2010/02/01`
static YEAR_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9]{4})(-|\.|/)([0-9]{2})(-|\.|/)([0-9]{2})([^0-9]|$)")
        .expect("YEAR_FIRST regex is valid")
});

/// `11/22/2010`, `11-22-2010`
static YEAR_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])([0-9]{2})(-|/)([0-9]{2})(-|/)([0-9]{4})([^0-9]|$)")
        .expect("YEAR_LAST regex is valid")
});

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.register(Rule::new("ru/date/main", main).priority(1300))?;
    registry.register(Rule::new("ru/date/weekday", weekday).priority(1310))?;
    Ok(())
}

fn main(text: &str, _: &RuleSettings, _: &RuleContext<'_>) -> anyhow::Result<String> {
    let text = replace_all(&YEAR_FIRST, text, "${1}${6}.${4}.${2}${7}");
    Ok(replace_all(&YEAR_LAST, &text, "${1}${4}.${2}.${6}${7}"))
}

/// `5 Мая, Среда` → `5 мая, среда`
fn weekday(text: &str, _: &RuleSettings, ctx: &RuleContext<'_>) -> anyhow::Result<String> {
    let month_case = required_alternation(ctx, "ru/monthCase")?;
    let weekday = required_alternation(ctx, "ru/weekday")?;
    let re = cached_regex(&format!(
        r"(?i)([0-9])( |\x{{A0}})({month_case}),( |\x{{A0}})({weekday})"
    ))?;

    Ok(replace_all(&re, text, |caps: &Captures<'_>| {
        format!(
            "{}{}{},{}{}",
            &caps[1],
            &caps[2],
            caps[3].to_lowercase(),
            &caps[4],
            caps[5].to_lowercase()
        )
    }))
}
