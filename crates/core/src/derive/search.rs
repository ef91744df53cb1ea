//! Free-text title search.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::catalog::Movie;

/// Hard cap on search results.
pub const SEARCH_RESULT_LIMIT: usize = 30;

/// Result of a title search.
///
/// `Idle` means nothing was typed yet, which the UI shows differently from
/// a query with no hits (`Matches` with an empty list).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    Idle,
    Matches(Vec<&'a Movie>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchOutcome::Idle)
    }

    pub fn matches(&self) -> &[&'a Movie] {
        match self {
            SearchOutcome::Idle => &[],
            SearchOutcome::Matches(movies) => movies,
        }
    }
}

/// Lower-case, decompose (NFD), drop combining marks and trim.
pub fn normalize_for_search(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Diacritic- and case-insensitive substring match on titles.
pub fn search<'a>(movies: &[&'a Movie], query: &str) -> SearchOutcome<'a> {
    let needle = normalize_for_search(query);
    if needle.is_empty() {
        return SearchOutcome::Idle;
    }

    let hits = movies
        .iter()
        .copied()
        .filter(|m| normalize_for_search(&m.title).contains(&needle))
        .take(SEARCH_RESULT_LIMIT)
        .collect();

    SearchOutcome::Matches(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::movie;

    #[test]
    fn test_normalize_strips_diacritics_and_case() {
        assert_eq!(normalize_for_search("  A Vida É Sonho "), "a vida e sonho");
        assert_eq!(normalize_for_search("Ação"), "acao");
        assert_eq!(normalize_for_search("Ode Marítima"), "ode maritima");
    }

    #[test]
    fn test_search_matches_without_accents() {
        let m = movie("m-016", "A vida é sonho");
        let other = movie("m-020", "Ode maritima");
        let outcome = search(&[&m, &other], "sonho");
        assert_eq!(outcome.matches().len(), 1);
        assert_eq!(outcome.matches()[0].id, "m-016");

        let outcome = search(&[&m, &other], "VIDA E");
        assert_eq!(outcome.matches().len(), 1);
    }

    #[test]
    fn test_accented_query_matches_plain_title() {
        let m = movie("m-020", "Ode maritima");
        assert_eq!(search(&[&m], "Marítima").matches().len(), 1);
    }

    #[test]
    fn test_blank_query_is_idle_not_empty() {
        let m = movie("m-1", "Ode maritima");
        assert!(search(&[&m], "").is_idle());
        assert!(search(&[&m], "   ").is_idle());

        let none = search(&[&m], "hamlet");
        assert!(!none.is_idle());
        assert!(none.matches().is_empty());
    }

    #[test]
    fn test_results_capped() {
        let movies: Vec<Movie> = (0..40)
            .map(|i| movie(&format!("m-{}", i), &format!("Sonho {}", i)))
            .collect();
        let refs: Vec<&Movie> = movies.iter().collect();

        let outcome = search(&refs, "sonho");
        assert_eq!(outcome.matches().len(), SEARCH_RESULT_LIMIT);
        assert_eq!(outcome.matches()[0].id, "m-0");
    }
}
