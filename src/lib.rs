//! Typography normalization for plain text and HTML
//!
//! A [`Typograf`] runs a language-scoped catalog of [`Rule`]s over text in a
//! fixed order: quotes, dashes, no-break spaces, units, entities. Markup is
//! masked while rules run so tags, scripts and code blocks come out exactly
//! as they went in.
//!
//! ```
//! use kodegen_tools_typograf::{ProcessorOptions, Typograf};
//!
//! let options = ProcessorOptions::builder().language("ru").build().expect("valid options");
//! let typograf = Typograf::with_defaults(options).expect("valid options");
//! assert_eq!(typograf.execute("\"Пример\""), "«Пример»");
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod processor;
pub mod registry;
pub mod rules;
pub mod safe_tags;
pub mod utils;

pub use config::{ExecuteOverrides, OutputMode, ProcessorOptions, ProcessorOptionsBuilder};
pub use entities::{decode_entities, encode_entities};
pub use errors::{TypografError, TypografResult};
pub use processor::Typograf;
pub use registry::{
    ConfigurationStore, DataValue, GlobMatcher, Queue, Rule, RuleContext, RuleHandler,
    RuleRegistry, RuleSettings, SettingValue,
};
pub use rules::register_defaults;
pub use safe_tags::{MaskingContext, SafeRegionMasker, SafeTag, default_safe_tags};
