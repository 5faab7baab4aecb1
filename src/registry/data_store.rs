//! Language-scoped data table used by rule handlers
//!
//! Entries are addressed by `"<lang>/<field>"` keys, e.g. `ru/month` or
//! `common/letter`. Letter classes are stored as regex character-class
//! bodies (`a-z`, `а-яё`) so handlers can splice them into `[...]`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::COMMON_SCOPE;

/// A data entry: a single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Text(String),
    List(Vec<String>),
}

impl DataValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            DataValue::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DataValue::List(items) => Some(items),
            DataValue::Text(_) => None,
        }
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl From<Vec<String>> for DataValue {
    fn from(value: Vec<String>) -> Self {
        DataValue::List(value)
    }
}

impl From<&[&str]> for DataValue {
    fn from(value: &[&str]) -> Self {
        DataValue::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DataValue {
    fn from(value: [&str; N]) -> Self {
        DataValue::from(&value[..])
    }
}

/// Key/value table of language data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationStore {
    entries: HashMap<String, DataValue>,
}

impl ConfigurationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(DataValue::as_text)
    }

    #[must_use]
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(DataValue::as_list)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<DataValue>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Letter class for `lang`, for use inside a regex character class
    #[must_use]
    pub fn letters(&self, lang: Option<&str>) -> String {
        let lang_letters = lang.and_then(|l| self.text(&letter_key(l)));
        compose_letters(self.text(&letter_key(COMMON_SCOPE)), lang_letters, lang)
    }
}

/// Key of the letter class of `lang`
#[must_use]
pub fn letter_key(lang: &str) -> String {
    format!("{lang}/letter")
}

/// Combine the common letter class with a language's own class.
///
/// The common class alone is returned when no language is set, when the
/// language is `common`, or when both classes are identical; a missing
/// language class contributes nothing.
#[must_use]
pub fn compose_letters(common: Option<&str>, lang_letters: Option<&str>, lang: Option<&str>) -> String {
    let common = common.unwrap_or_default();
    match (lang, lang_letters) {
        (None, _) => common.to_string(),
        (Some(l), _) if l == COMMON_SCOPE => common.to_string(),
        (Some(_), Some(own)) if own != common => format!("{common}{own}"),
        _ => common.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ConfigurationStore {
        let mut store = ConfigurationStore::new();
        store.set("common/letter", "a-z");
        store.set("en/letter", "a-z");
        store.set("ru/letter", "а-яё");
        store.set("ru/weekday", ["понедельник", "вторник"]);
        store
    }

    #[test]
    fn test_letters() {
        let store = store();
        assert_eq!(store.letters(None), "a-z");
        assert_eq!(store.letters(Some("common")), "a-z");
        assert_eq!(store.letters(Some("en")), "a-z");
        assert_eq!(store.letters(Some("ru")), "a-zа-яё");
        assert_eq!(store.letters(Some("de")), "a-z");
    }

    #[test]
    fn test_typed_access() {
        let store = store();
        assert_eq!(store.text("ru/letter"), Some("а-яё"));
        assert_eq!(store.list("ru/letter"), None);
        assert_eq!(
            store.list("ru/weekday").map(<[String]>::len),
            Some(2)
        );
        assert!(store.get("ru/month").is_none());
    }
}
