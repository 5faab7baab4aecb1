//! Character reference decoding and output-mode encoding

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::table::{entity_by_char, entity_by_name};
use crate::config::OutputMode;

static DECIMAL_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#([0-9]{1,6});").expect("DECIMAL_REFERENCE regex is valid")
});

static HEX_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&#x([0-9a-f]{1,6});").expect("HEX_REFERENCE regex is valid")
});

static NAMED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&([A-Za-z][A-Za-z0-9]*);").expect("NAMED_REFERENCE regex is valid")
});

static NAMED_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[A-Za-z]").expect("NAMED_HINT regex is valid"));

/// Turn numeric and known named references into characters.
///
/// Numeric references to invalid scalar values stay as written. Unknown
/// names stay as written.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut result = text.to_string();

    if result.contains("&#") {
        result = decode_numeric(&DECIMAL_REFERENCE, &result, 10);
        result = decode_numeric(&HEX_REFERENCE, &result, 16);
    }

    if NAMED_HINT.is_match(&result) {
        result = NAMED_REFERENCE
            .replace_all(&result, |caps: &Captures| {
                entity_by_name(&caps[1])
                    .map_or_else(|| caps[0].to_string(), |e| e.codepoint.to_string())
            })
            .into_owned();
    }

    result
}

fn decode_numeric(re: &Regex, text: &str, radix: u32) -> String {
    re.replace_all(text, |caps: &Captures| {
        u32::from_str_radix(&caps[1], radix)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), |c| c.to_string())
    })
    .into_owned()
}

/// Write table characters in the representation `mode` asks for
#[must_use]
pub fn encode_entities(text: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Default => text.to_string(),
        OutputMode::Name | OutputMode::Digit => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match entity_by_char(c) {
                    Some(entity) if mode == OutputMode::Name => out.push_str(&entity.named()),
                    Some(entity) => out.push_str(&entity.numeric()),
                    None => out.push(c),
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode_entities("a&#160;b"), "a\u{00A0}b");
        assert_eq!(decode_entities("&#x2014;&#X2014;&#xAb;"), "——«");
        assert_eq!(decode_entities("&#1234567;"), "&#1234567;");
    }

    #[test]
    fn test_invalid_code_points_kept() {
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
    }

    #[test]
    fn test_decode_named() {
        assert_eq!(decode_entities("&laquo;x&raquo;"), "«x»");
        assert_eq!(decode_entities("&frac12; &sup2;"), "½ ²");
        assert_eq!(decode_entities("&unknown; &amp;"), "&unknown; &amp;");
        assert_eq!(decode_entities("&NBSP;"), "&NBSP;");
    }

    #[test]
    fn test_numeric_then_named() {
        assert_eq!(decode_entities("&#38;nbsp;"), "\u{00A0}");
    }

    #[test]
    fn test_encode_modes() {
        let text = "a\u{00A0}—b";
        assert_eq!(encode_entities(text, OutputMode::Default), text);
        assert_eq!(encode_entities(text, OutputMode::Name), "a&nbsp;&mdash;b");
        assert_eq!(encode_entities(text, OutputMode::Digit), "a&#160;&#8212;b");
    }
}
