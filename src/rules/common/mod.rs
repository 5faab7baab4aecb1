//! Language-neutral rules

mod html;
mod nbsp;
mod number;
mod other;
mod punctuation;
mod space;
mod sym;

use crate::errors::TypografResult;
use crate::registry::RuleRegistry;

pub(super) fn register(registry: &mut RuleRegistry) -> TypografResult<()> {
    html::register(registry)?;
    nbsp::register(registry)?;
    number::register(registry)?;
    other::register(registry)?;
    punctuation::register(registry)?;
    space::register(registry)?;
    sym::register(registry)?;
    Ok(())
}
