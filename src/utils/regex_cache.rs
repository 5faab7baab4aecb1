//! Compiled-pattern cache for rule handlers
//!
//! Handlers whose pattern is spliced together from settings or language
//! data (letter classes, month names, quote marks) cannot use a `LazyLock`
//! static. They look the pattern up here instead, so a given pattern string
//! is compiled once per process rather than once per `execute()` call.

use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::{Arc, LazyLock};

use super::constants::REGEX_CACHE_CAPACITY;

static REGEX_CACHE: LazyLock<Mutex<LruCache<String, Arc<Regex>>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(capacity())));

static FANCY_REGEX_CACHE: LazyLock<Mutex<LruCache<String, Arc<fancy_regex::Regex>>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(capacity())));

fn capacity() -> NonZeroUsize {
    NonZeroUsize::new(REGEX_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}

/// Compile `pattern`, or reuse the matcher compiled for it earlier
///
/// # Errors
///
/// Returns the compile error; failures are not cached.
pub fn cached_regex(pattern: &str) -> Result<Arc<Regex>, regex::Error> {
    if let Some(re) = REGEX_CACHE.lock().get(pattern) {
        return Ok(Arc::clone(re));
    }

    // Compile outside the lock; a racing thread at worst compiles it twice
    let re = Arc::new(Regex::new(pattern)?);
    REGEX_CACHE.lock().put(pattern.to_string(), Arc::clone(&re));
    Ok(re)
}

/// [`cached_regex`] for backtracking patterns
///
/// # Errors
///
/// Returns the compile error; failures are not cached.
pub fn cached_fancy_regex(pattern: &str) -> Result<Arc<fancy_regex::Regex>, fancy_regex::Error> {
    if let Some(re) = FANCY_REGEX_CACHE.lock().get(pattern) {
        return Ok(Arc::clone(re));
    }

    let re = Arc::new(fancy_regex::Regex::new(pattern)?);
    FANCY_REGEX_CACHE.lock().put(pattern.to_string(), Arc::clone(&re));
    Ok(re)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pattern_shares_matcher() {
        let a = cached_regex(r"cache-test-[0-9]+").expect("valid");
        let b = cached_regex(r"cache-test-[0-9]+").expect("valid");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_match("cache-test-42"));
    }

    #[test]
    fn test_distinct_patterns_are_distinct() {
        let a = cached_regex(r"cache-distinct-a").expect("valid");
        let b = cached_regex(r"cache-distinct-b").expect("valid");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_invalid_pattern_is_an_error_every_time() {
        assert!(cached_regex("cache-bad-(").is_err());
        assert!(cached_regex("cache-bad-(").is_err());
        assert!(cached_fancy_regex(r"cache-bad-(?<=").is_err());
    }

    #[test]
    fn test_fancy_backreference() {
        let a = cached_fancy_regex(r"(cache\w+) \1").expect("valid");
        let b = cached_fancy_regex(r"(cache\w+) \1").expect("valid");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_match("cachex cachex").expect("no backtrack limit"));
    }
}
