//! Russian rules

mod dash;
mod date;
mod money;
mod nbsp;
mod number;
mod optalign;
mod other;
mod punctuation;

use crate::errors::TypografResult;
use crate::registry::RuleRegistry;

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    dash::register(registry)?;
    date::register(registry)?;
    money::register(registry)?;
    nbsp::register(registry)?;
    number::register(registry)?;
    optalign::register(registry)?;
    other::register(registry)?;
    punctuation::register(registry)?;
    Ok(())
}
