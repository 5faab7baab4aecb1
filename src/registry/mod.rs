//! Rule catalog: rule definitions, typed settings, glob resolution and the
//! language data table

pub mod catalog;
pub mod data_store;
pub mod glob;
pub mod rule;
pub mod settings;

pub use catalog::RuleRegistry;
pub use data_store::{ConfigurationStore, DataValue};
pub use glob::GlobMatcher;
pub use rule::{Queue, Rule, RuleContext, RuleHandler};
pub use settings::{RuleSettings, SettingValue};
