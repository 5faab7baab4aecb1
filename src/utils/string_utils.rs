//! Regex replacement helpers shared by rule handlers
//!
//! Rule bodies chain many replacements over owned `String`s. These helpers
//! hide the `Cow` juggling and give the `fancy_regex` variants (lookaround,
//! backreferences) a fallible signature, so a runtime backtracking error
//! surfaces as a rule failure instead of a panic.

use regex::{Regex, Replacer};

/// Replace every non-overlapping match, left to right.
#[inline]
pub fn replace_all<R: Replacer>(re: &Regex, text: &str, rep: R) -> String {
    re.replace_all(text, rep).into_owned()
}

/// Replace only the first match.
#[inline]
pub fn replace_first<R: Replacer>(re: &Regex, text: &str, rep: R) -> String {
    re.replace(text, rep).into_owned()
}

/// Replace every match of a backtracking regex.
///
/// # Errors
///
/// Returns an error if the regex engine hits its backtrack limit.
#[inline]
pub fn try_replace_all<R: fancy_regex::Replacer>(
    re: &fancy_regex::Regex,
    text: &str,
    rep: R,
) -> anyhow::Result<String> {
    Ok(re.try_replacen(text, 0, rep)?.into_owned())
}

/// Replace the first match of a backtracking regex.
///
/// # Errors
///
/// Returns an error if the regex engine hits its backtrack limit.
#[inline]
pub fn try_replace_first<R: fancy_regex::Replacer>(
    re: &fancy_regex::Regex,
    text: &str,
    rep: R,
) -> anyhow::Result<String> {
    Ok(re.try_replacen(text, 1, rep)?.into_owned())
}
