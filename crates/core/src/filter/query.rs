//! Query string parsing and patching.

use std::borrow::Cow;

/// Ordered query parameters.
///
/// Keeps parameters it does not know about so that filter writes never
/// drop unrelated state from a shared link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing the first occurrence in place and dropping any
    /// later duplicates.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Remove every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode(component: &str) -> String {
    let spaced: Cow<'_, str> = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Changes to apply to the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPatch {
    pub set: Vec<(String, String)>,
    pub remove: Vec<String>,
}

impl UrlPatch {
    pub fn set(key: &str, value: impl Into<String>) -> Self {
        Self {
            set: vec![(key.to_string(), value.into())],
            remove: Vec::new(),
        }
    }

    pub fn remove(key: &str) -> Self {
        Self {
            set: Vec::new(),
            remove: vec![key.to_string()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.remove.is_empty()
    }

    pub fn apply(&self, params: &mut QueryParams) {
        for key in &self.remove {
            params.remove(key);
        }
        for (key, value) in &self.set {
            params.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_question_mark() {
        let a = QueryParams::parse("?cat=cat-drama&price=9");
        let b = QueryParams::parse("cat=cat-drama&price=9");
        assert_eq!(a, b);
        assert_eq!(a.get("cat"), Some("cat-drama"));
        assert_eq!(a.get("price"), Some("9"));
        assert_eq!(a.get("q"), None);
    }

    #[test]
    fn test_parse_decodes_percent_and_plus() {
        let params = QueryParams::parse("q=a+vida+%C3%A9+sonho&flag");
        assert_eq!(params.get("q"), Some("a vida é sonho"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert!(QueryParams::parse("&&").is_empty());
    }

    #[test]
    fn test_set_replaces_first_and_drops_duplicates() {
        let mut params = QueryParams::parse("cat=a&utm=x&cat=b");
        params.set("cat", "c");
        assert_eq!(params.to_query_string(), "cat=c&utm=x");

        params.set("price", "9");
        assert_eq!(params.to_query_string(), "cat=c&utm=x&price=9");
    }

    #[test]
    fn test_remove_keeps_unrelated_params() {
        let mut params = QueryParams::parse("utm=x&cat=a&price=9");
        params.remove("cat");
        assert_eq!(params.to_query_string(), "utm=x&price=9");
    }

    #[test]
    fn test_serialization_encodes_values() {
        let mut params = QueryParams::new();
        params.set("q", "a vida é sonho");
        let raw = params.to_query_string();
        assert_eq!(raw, "q=a%20vida%20%C3%A9%20sonho");
        assert_eq!(QueryParams::parse(&raw).get("q"), Some("a vida é sonho"));
    }

    #[test]
    fn test_patch_apply() {
        let mut params = QueryParams::parse("cat=a&price=9");
        UrlPatch::remove("price").apply(&mut params);
        UrlPatch::set("cat", "b").apply(&mut params);
        assert_eq!(params.to_query_string(), "cat=b");
        assert!(UrlPatch::default().is_empty());
    }
}
