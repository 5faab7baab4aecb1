pub mod constants;
pub mod regex_cache;
pub mod string_utils;

pub use constants::*;
pub use regex_cache::{cached_fancy_regex, cached_regex};
pub use string_utils::{replace_all, replace_first, try_replace_all, try_replace_first};
