//! Markup protection: safe tag definitions and the span masker

pub mod masker;
pub mod tag;

pub use masker::{MaskingContext, SafeRegionMasker, contains_token, encode_token};
pub use tag::{SafeTag, default_safe_tags};
