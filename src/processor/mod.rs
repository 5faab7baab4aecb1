//! Execution pipeline and the processor instance

pub mod pipeline;
pub mod typograf;

pub use pipeline::{contains_markup, normalize_line_endings};
pub use typograf::Typograf;
