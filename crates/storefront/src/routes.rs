//! Storefront paths.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` and `/movies`, the filterable catalog.
    Catalog,
    /// `/movies/<id>`
    Movie(String),
    Search,
    /// `/prices`, the price summary.
    Prices,
    /// `/trailers`, the trailer showcase.
    Trailers,
    Dashboard,
    AdminDashboard,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/movies" => Route::Catalog,
            "/search" => Route::Search,
            "/prices" => Route::Prices,
            "/trailers" => Route::Trailers,
            "/dashboard" => Route::Dashboard,
            "/dashboard/admin" => Route::AdminDashboard,
            _ => match trimmed.strip_prefix("/movies/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Movie(
                    urlencoding::decode(id)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| id.to_string()),
                ),
                _ => Route::NotFound,
            },
        }
    }
}

/// Split `href` into path and query.
pub fn split_href(href: &str) -> (&str, &str) {
    href.split_once('?').unwrap_or((href, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Catalog);
        assert_eq!(Route::parse("/movies"), Route::Catalog);
        assert_eq!(Route::parse("/movies/"), Route::Catalog);
        assert_eq!(Route::parse("/movies/m-016"), Route::Movie("m-016".to_string()));
        assert_eq!(Route::parse("/movies/a%20b"), Route::Movie("a b".to_string()));
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("/prices"), Route::Prices);
        assert_eq!(Route::parse("/trailers/"), Route::Trailers);
        assert_eq!(Route::parse("/dashboard/admin"), Route::AdminDashboard);
        assert_eq!(Route::parse("/movies/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/elsewhere"), Route::NotFound);
    }

    #[test]
    fn test_split_href() {
        assert_eq!(split_href("/movies?cat=x"), ("/movies", "cat=x"));
        assert_eq!(split_href("/prices"), ("/prices", ""));
    }
}
