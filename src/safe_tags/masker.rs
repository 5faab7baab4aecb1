//! Placeholder masking of protected markup spans
//!
//! Each protected span is swapped for a token built from private-use code
//! points: `U+F0000`, the span id in hexadecimal spelled with the "digits"
//! `U+F0010..=U+F001F`, then `U+F0000` again. No rule pattern can match a
//! letter, digit, space or punctuation character inside a token.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::tag::SafeTag;
use crate::utils::{TOKEN_DELIMITER, TOKEN_DIGIT_BASE};

/// Any tag left after the safe tags are hidden
static GENERIC_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<[a-z/][^>]*?>").expect("GENERIC_TAG regex is valid")
});

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{F0000}([\x{F0010}-\x{F001F}]+)\x{F0000}").expect("TOKEN regex is valid")
});

/// Spans hidden during one `execute()` call, indexed by token id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskingContext {
    spans: Vec<String>,
}

impl MaskingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a span and return its token
    pub fn hide(&mut self, span: &str) -> String {
        let id = self.spans.len();
        self.spans.push(span.to_string());
        encode_token(id)
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&str> {
        self.spans.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Hides and restores the spans matched by a list of safe tags
#[derive(Debug, Clone, Copy)]
pub struct SafeRegionMasker<'a> {
    tags: &'a [SafeTag],
}

impl<'a> SafeRegionMasker<'a> {
    #[must_use]
    pub fn new(tags: &'a [SafeTag]) -> Self {
        Self { tags }
    }

    /// Replace every safe span, then every remaining tag, with a token
    #[must_use]
    pub fn mask(&self, text: &str) -> (String, MaskingContext) {
        let mut ctx = MaskingContext::new();
        let mut masked = text.to_string();

        for tag in self.tags {
            if tag.matcher().is_match(&masked) {
                masked = tag
                    .matcher()
                    .replace_all(&masked, |caps: &Captures| match &caps[0] {
                        "" => String::new(),
                        span => ctx.hide(span),
                    })
                    .into_owned();
            }
        }

        let masked = GENERIC_TAG
            .replace_all(&masked, |caps: &Captures| ctx.hide(&caps[0]))
            .into_owned();

        debug!(spans = ctx.len(), "masked protected regions");
        (masked, ctx)
    }

    /// Put hidden spans back.
    ///
    /// A restored span may contain tokens of spans hidden before it, so
    /// restoration repeats once per safe tag plus once for generic tags,
    /// stopping as soon as no token is left.
    #[must_use]
    pub fn unmask(&self, text: &str, ctx: &MaskingContext) -> String {
        let mut result = text.to_string();
        if ctx.is_empty() {
            return result;
        }

        for _ in 0..=self.tags.len() {
            if !TOKEN.is_match(&result) {
                return result;
            }
            result = TOKEN
                .replace_all(&result, |caps: &Captures| {
                    decode_token_id(&caps[1])
                        .and_then(|id| ctx.get(id))
                        .map_or_else(|| caps[0].to_string(), str::to_string)
                })
                .into_owned();
        }

        if TOKEN.is_match(&result) {
            warn!("unresolved masking tokens left in output");
        }
        result
    }
}

/// Whether `text` contains anything that looks like a masking token
#[must_use]
pub fn contains_token(text: &str) -> bool {
    TOKEN.is_match(text)
}

/// Spell `id` as a token
#[must_use]
pub fn encode_token(id: usize) -> String {
    let mut token = String::new();
    token.push(TOKEN_DELIMITER);
    for digit in format!("{id:x}").chars() {
        let value = digit.to_digit(16).unwrap_or_default();
        token.push(char::from_u32(TOKEN_DIGIT_BASE + value).unwrap_or(TOKEN_DELIMITER));
    }
    token.push(TOKEN_DELIMITER);
    token
}

/// Read the id back from the digit run of a token
fn decode_token_id(digits: &str) -> Option<usize> {
    digits.chars().try_fold(0usize, |acc, c| {
        let value = (c as u32).checked_sub(TOKEN_DIGIT_BASE)?;
        if value >= 16 {
            return None;
        }
        acc.checked_mul(16)?.checked_add(value as usize)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe_tags::default_safe_tags;

    #[test]
    fn test_token_shape() {
        let token = encode_token(0x1a);
        let chars: Vec<char> = token.chars().collect();
        assert_eq!(
            chars,
            vec!['\u{F0000}', '\u{F0011}', '\u{F001A}', '\u{F0000}']
        );
        assert!(!token.chars().any(|c| c.is_alphanumeric() || c.is_whitespace()));
        assert!(contains_token(&token));
    }

    #[test]
    fn test_token_id_round_trip() {
        for id in [0usize, 1, 15, 16, 255, 4096, 123_456] {
            let token = encode_token(id);
            let digits: String = token.chars().filter(|c| *c != TOKEN_DELIMITER).collect();
            assert_eq!(decode_token_id(&digits), Some(id));
        }
        assert_eq!(decode_token_id("a"), None);
    }

    #[test]
    fn test_mask_hides_script_body() {
        let tags = default_safe_tags();
        let masker = SafeRegionMasker::new(&tags);
        let input = "x  <script>a  b</script>  y";
        let (masked, ctx) = masker.mask(input);

        assert_eq!(ctx.len(), 1);
        assert!(!masked.contains("script"));
        assert!(masked.starts_with("x  "));
        assert_eq!(masker.unmask(&masked, &ctx), input);
    }

    #[test]
    fn test_generic_tags_masked() {
        let tags = default_safe_tags();
        let masker = SafeRegionMasker::new(&tags);
        let (masked, ctx) = masker.mask("<p class=\"a\">text</p>");
        assert_eq!(ctx.len(), 2);
        assert!(masked.contains("text"));
        assert!(!masked.contains('<'));
    }

    #[test]
    fn test_nested_restoration() {
        let tags = default_safe_tags();
        let masker = SafeRegionMasker::new(&tags);
        let input = "<pre><code>  a </code></pre>";
        let (masked, ctx) = masker.mask(input);

        // code is hidden first, then pre wraps its token
        assert_eq!(ctx.len(), 2);
        assert_eq!(masker.unmask(&masked, &ctx), input);
    }

    #[test]
    fn test_zero_width_matches_are_not_hidden() {
        // Cannot match "" on its own, but matches empty at word boundaries
        let tags = vec![SafeTag::new(r"\b", "").expect("valid pair")];
        let masker = SafeRegionMasker::new(&tags);
        let (masked, ctx) = masker.mask("a b");
        assert!(ctx.is_empty());
        assert_eq!(masked, "a b");
    }

    #[test]
    fn test_unknown_id_left_in_place() {
        let tags = default_safe_tags();
        let masker = SafeRegionMasker::new(&tags);
        let mut ctx = MaskingContext::new();
        let known = ctx.hide("<b>");
        let unknown = encode_token(7);
        let text = format!("{known}{unknown}");
        assert_eq!(masker.unmask(&text, &ctx), format!("<b>{unknown}"));
    }
}
