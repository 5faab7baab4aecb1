//! Glob matching for rule names
//!
//! `*` matches any (possibly empty) substring, every other character matches
//! itself, and the pattern is anchored to the whole name: `ru/*` matches
//! `ru/dash/main` but `dash/*` does not.
//!
//! Implemented directly on string segments rather than by translating to a
//! regex, so `.`, `(` or `?` in a pattern are plain characters.

/// A compiled rule-name glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobMatcher {
    pattern: String,
    /// Pattern split on `*`; always at least one element
    segments: Vec<String>,
}

impl GlobMatcher {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            segments: pattern.split('*').map(str::to_string).collect(),
        }
    }

    /// Whether `pattern` contains a wildcard at all
    #[must_use]
    pub fn is_glob(pattern: &str) -> bool {
        pattern.contains('*')
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test `name` against the whole pattern
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let (first, rest) = match self.segments.split_first() {
            Some(split) => split,
            None => return name.is_empty(),
        };

        // No wildcard: exact comparison
        let Some((last, middle)) = rest.split_last() else {
            return name == first;
        };

        if name.len() < first.len() + last.len()
            || !name.starts_with(first.as_str())
            || !name.ends_with(last.as_str())
        {
            return false;
        }

        // Middle segments must appear in order inside the unanchored window.
        // Leftmost placement is optimal when the only wildcard is `*`.
        let mut window = &name[first.len()..name.len() - last.len()];
        for segment in middle {
            match window.find(segment.as_str()) {
                Some(pos) => window = &window[pos + segment.len()..],
                None => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern() {
        let glob = GlobMatcher::new("ru/dash/main");
        assert!(glob.matches("ru/dash/main"));
        assert!(!glob.matches("ru/dash/mainx"));
        assert!(!GlobMatcher::is_glob("ru/dash/main"));
    }

    #[test]
    fn test_prefix_star() {
        let glob = GlobMatcher::new("ru/*");
        assert!(glob.matches("ru/dash/main"));
        assert!(glob.matches("ru/"));
        assert!(!glob.matches("common/ru/x"));
    }

    #[test]
    fn test_anchored_to_full_name() {
        let glob = GlobMatcher::new("dash/*");
        assert!(!glob.matches("ru/dash/main"));

        let glob = GlobMatcher::new("*/dash/*");
        assert!(glob.matches("ru/dash/main"));
        assert!(!glob.matches("ru/nbsp/main"));
    }

    #[test]
    fn test_middle_segments_in_order() {
        let glob = GlobMatcher::new("common/*/del*");
        assert!(glob.matches("common/space/delRepeatSpace"));
        assert!(glob.matches("common/punctuation/delDoublePunctuation"));
        assert!(!glob.matches("common/space/trimLeft"));
    }

    #[test]
    fn test_prefix_and_suffix_do_not_overlap() {
        let glob = GlobMatcher::new("ab*ba");
        assert!(!glob.matches("aba"));
        assert!(glob.matches("abba"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let glob = GlobMatcher::new("a.b*");
        assert!(glob.matches("a.bc"));
        assert!(!glob.matches("axbc"));
    }

    #[test]
    fn test_lone_star_matches_everything() {
        let glob = GlobMatcher::new("*");
        assert!(glob.matches(""));
        assert!(glob.matches("common/sym/copy"));
    }
}
