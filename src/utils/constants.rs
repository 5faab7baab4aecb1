//! Shared constants for the typography engine
//!
//! Default values and reserved code points used across the codebase to
//! ensure consistency and avoid magic numbers.

/// Language used when neither the instance nor the call names one.
///
/// Rules scoped `common` always run; rules of any other scope run only when
/// the active language equals their scope.
pub const DEFAULT_LANGUAGE: &str = "common";

/// Scope of rules that run for every language
pub const COMMON_SCOPE: &str = "common";

/// Delimiter of a masking placeholder token.
///
/// First code point of Supplementary Private Use Area-A. Chosen because it is
/// neither a letter, digit, space nor punctuation, so no rule pattern can
/// match across or inside a token.
pub const TOKEN_DELIMITER: char = '\u{F0000}';

/// First private-use "digit" used to spell a token id in hexadecimal.
///
/// Id digit `d` (0..=15) is written as `TOKEN_DIGIT_BASE + d`.
pub const TOKEN_DIGIT_BASE: u32 = 0xF0010;

/// Number of named character references in the built-in entity table
pub const ENTITY_COUNT: usize = 248;

/// No-break space (U+00A0), the most common character inserted by rules
pub const NBSP: char = '\u{00A0}';

/// Thin space (U+2009)
pub const THIN_SPACE: char = '\u{2009}';

/// Combining acute accent (U+0301) used for stress marks
pub const ACCENT: char = '\u{0301}';

/// Regex fragment matching one whole masking token, without capture groups
pub const TOKEN_PATTERN: &str = r"\x{F0000}[\x{F0010}-\x{F001F}]+\x{F0000}";

/// Distinct dynamic patterns kept compiled (letter classes × languages × settings)
pub const REGEX_CACHE_CAPACITY: usize = 256;
