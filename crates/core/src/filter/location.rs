//! Browser location abstraction.

/// The current URL plus the two ways of changing it.
///
/// Filter toggles go through [`Location::replace_query`] so they never add
/// back-button entries; [`Location::push`] is for moving between pages.
pub trait Location {
    fn path(&self) -> &str;

    /// Raw query string, without the leading `?`.
    fn query(&self) -> &str;

    /// Rewrite the query string of the current history entry.
    fn replace_query(&mut self, query: &str);

    /// Navigate to a new history entry.
    fn push(&mut self, path: &str, query: &str);
}

/// In-memory history stack.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<(String, String)>,
    cursor: usize,
}

impl MemoryLocation {
    /// Start at `url` (`/movies?cat=cat-drama`).
    pub fn new(url: &str) -> Self {
        Self {
            entries: vec![split_url(url)],
            cursor: 0,
        }
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Step back like the browser button. Returns false at the first entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward again after [`MemoryLocation::back`].
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Path plus `?query` when there is one.
    pub fn href(&self) -> String {
        let (path, query) = &self.entries[self.cursor];
        if query.is_empty() {
            path.clone()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

impl Location for MemoryLocation {
    fn path(&self) -> &str {
        &self.entries[self.cursor].0
    }

    fn query(&self) -> &str {
        &self.entries[self.cursor].1
    }

    fn replace_query(&mut self, query: &str) {
        self.entries[self.cursor].1 = query.to_string();
    }

    fn push(&mut self, path: &str, query: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push((path.to_string(), query.to_string()));
        self.cursor = self.entries.len() - 1;
    }
}

fn split_url(url: &str) -> (String, String) {
    match url.split_once('?') {
        Some((path, query)) => (path.to_string(), query.to_string()),
        None => (url.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_path_and_query() {
        let location = MemoryLocation::new("/movies?cat=cat-drama");
        assert_eq!(location.path(), "/movies");
        assert_eq!(location.query(), "cat=cat-drama");
        assert_eq!(location.href(), "/movies?cat=cat-drama");
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut location = MemoryLocation::new("/movies");
        location.replace_query("cat=a");
        location.replace_query("cat=b");
        assert_eq!(location.history_len(), 1);
        assert_eq!(location.href(), "/movies?cat=b");
    }

    #[test]
    fn test_push_and_back() {
        let mut location = MemoryLocation::new("/");
        location.push("/movies", "price=9");
        assert_eq!(location.history_len(), 2);
        assert!(location.back());
        assert_eq!(location.href(), "/");
        assert!(!location.back());
        assert!(location.forward());
        assert_eq!(location.href(), "/movies?price=9");
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let mut location = MemoryLocation::new("/");
        location.push("/movies", "");
        location.push("/search", "q=x");
        location.back();
        location.push("/prices", "");
        assert_eq!(location.history_len(), 3);
        assert!(!location.forward());
    }
}
