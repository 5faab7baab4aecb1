//! Built-in language data: letter classes, calendar words, dash context

use crate::errors::TypografResult;
use crate::registry::RuleRegistry;

const RU_MONTH: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

const RU_MONTH_CASE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// Regex fragments; `ма[ейя]` covers the short forms of May
const RU_SHORT_MONTH: [&str; 12] = [
    "янв", "фев", "мар", "апр", "ма[ейя]", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

const RU_WEEKDAY: [&str; 7] = [
    "понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье",
];

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    registry.set_data("common/letter", "a-z")?;
    registry.set_data("en/letter", "a-z")?;
    registry.set_data("ru/letter", "а-яё")?;

    registry.set_data("ru/month", RU_MONTH)?;
    registry.set_data("ru/monthCase", RU_MONTH_CASE)?;
    registry.set_data("ru/shortMonth", RU_SHORT_MONTH)?;
    registry.set_data("ru/weekday", RU_WEEKDAY)?;

    // Context around a word that may take a hyphen
    registry.set_data("ru/dashBefore", r"(^| |\n)")?;
    registry.set_data("ru/dashAfter", r"( |,|\.|\?|:|!|$)")?;

    Ok(())
}
