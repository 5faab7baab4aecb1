//! Safe tag definitions: start/end pattern pairs whose spans are hidden from
//! rules

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{TypografError, TypografResult};

/// Elements whose content is never touched
const SAFE_ELEMENTS: [&str; 8] = [
    "code", "kbd", "object", "pre", "samp", "script", "style", "var",
];

/// Markup-level constructs hidden before the element list
const SAFE_CONSTRUCTS: [(&str, &str); 5] = [
    ("<!--", "-->"),
    ("<!ENTITY", ">"),
    ("<!DOCTYPE", ">"),
    (r"<\?xml", r"\?>"),
    (r"<!\[CDATA\[", r"\]\]>"),
];

static DEFAULT_SAFE_TAGS: LazyLock<Vec<SafeTag>> = LazyLock::new(|| {
    let constructs = SAFE_CONSTRUCTS
        .iter()
        .map(|(start, end)| ((*start).to_string(), (*end).to_string()));
    let elements = SAFE_ELEMENTS
        .iter()
        .map(|tag| (format!(r"<{tag}(\s[^>]*?)?>"), format!("</{tag}>")));

    constructs
        .chain(elements)
        .map(|(start, end)| SafeTag::new(&start, &end).expect("built-in safe tag regex is valid"))
        .collect()
});

/// A start/end regex pair, compiled into one case-insensitive lazy matcher
#[derive(Debug, Clone)]
pub struct SafeTag {
    start: String,
    end: String,
    matcher: Regex,
}

impl SafeTag {
    /// Compile `start ... end` where the middle may span lines
    ///
    /// Each half is compiled on its own first so that unbalanced groups in
    /// one half cannot be closed by the other.
    ///
    /// # Errors
    ///
    /// `MalformedSafeTagPattern` if either half is not a valid regex, or if
    /// the combined matcher accepts the empty string.
    pub fn new(start: &str, end: &str) -> TypografResult<Self> {
        let malformed = |source: regex::Error| TypografError::MalformedSafeTagPattern {
            start: start.to_string(),
            end: end.to_string(),
            source,
        };

        Regex::new(start).map_err(malformed)?;
        Regex::new(end).map_err(malformed)?;
        let matcher =
            Regex::new(&format!("(?i)(?:{start})(?s:.*?)(?:{end})")).map_err(malformed)?;

        // A span that can be empty would put a token between every character
        if matcher.is_match("") {
            return Err(malformed(regex::Error::Syntax(
                "safe tag matches the empty string".to_string(),
            )));
        }

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            matcher,
        })
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    #[must_use]
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

/// The built-in safe tags, in masking order
#[must_use]
pub fn default_safe_tags() -> Vec<SafeTag> {
    DEFAULT_SAFE_TAGS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let tags = default_safe_tags();
        assert_eq!(tags.len(), 13);
        assert_eq!(tags[0].start(), "<!--");
        assert_eq!(tags[12].end(), "</var>");
    }

    #[test]
    fn test_element_matcher_spans_lines_case_insensitive() {
        let tags = default_safe_tags();
        let pre = tags
            .iter()
            .find(|t| t.end() == "</pre>")
            .expect("pre tag present");
        let m = pre
            .matcher()
            .find("a <PRE class=\"x\">1\n  2</pre> b")
            .expect("matches");
        assert_eq!(m.as_str(), "<PRE class=\"x\">1\n  2</pre>");

        // <prefix> is not <pre>
        assert!(pre.matcher().find("<prefix>x</pre>").is_none());
    }

    #[test]
    fn test_non_greedy() {
        let tag = SafeTag::new("<!--", "-->").expect("valid");
        let m = tag.matcher().find("<!-- a --> b <!-- c -->").expect("matches");
        assert_eq!(m.as_str(), "<!-- a -->");
    }

    #[test]
    fn test_malformed_pattern() {
        let err = SafeTag::new("<(", ">").expect_err("unbalanced group");
        assert!(matches!(err, TypografError::MalformedSafeTagPattern { .. }));
    }

    #[test]
    fn test_halves_cannot_balance_each_other() {
        for (start, end) in [("(", ")"), ("<x", "a)|(b"), ("[", "]")] {
            let err = SafeTag::new(start, end).expect_err("half is not a regex on its own");
            assert!(matches!(err, TypografError::MalformedSafeTagPattern { .. }));
        }
    }

    #[test]
    fn test_empty_match_rejected() {
        for (start, end) in [("", ""), ("a*", "b*"), ("(?:<x>)?", "")] {
            let err = SafeTag::new(start, end).expect_err("matches the empty string");
            assert!(matches!(err, TypografError::MalformedSafeTagPattern { .. }));
        }
    }
}
