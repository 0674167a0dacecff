//! Page routes: the listing at `/` and detail pages at `/pokemon/{id}`.

use serde::Serialize;
use std::fmt;

/// A resolved page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Route {
    /// The searchable listing, optionally with a query from `?q=`
    Listing { query: Option<String> },
    /// A single entry's detail page
    Detail { id: u32 },
    /// Nothing lives at this path
    NotFound { path: String },
}

impl Route {
    /// Resolve a path. Anything unrecognized, including non-positive or
    /// non-numeric ids, resolves to [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let raw = path.trim();
        let (location, query_string) = match raw.split_once('?') {
            Some((location, qs)) => (location, Some(qs)),
            None => (raw, None),
        };

        let segments: Vec<&str> = location.split('/').filter(|s| !s.is_empty()).collect();
        let not_found = || Self::NotFound {
            path: raw.to_string(),
        };

        if !location.starts_with('/') {
            return not_found();
        }

        match segments.as_slice() {
            [] => Self::Listing {
                query: query_string.and_then(listing_query),
            },
            ["pokemon", id] => match id.parse::<u32>() {
                Ok(id) if id > 0 => Self::Detail { id },
                _ => not_found(),
            },
            _ => not_found(),
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Listing { query: None } => "/".to_string(),
            Self::Listing { query: Some(q) } => format!("/?q={q}"),
            Self::Detail { id } => format!("/pokemon/{id}"),
            Self::NotFound { path } => path.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Value of `q` in a query string, with `+` read as a space.
fn listing_query(query_string: &str) -> Option<String> {
    query_string
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "q")
        .map(|(_, value)| value.replace('+', " "))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_listing() {
        assert_eq!(Route::parse("/"), Route::Listing { query: None });
        assert_eq!(Route::parse("  /  "), Route::Listing { query: None });
    }

    #[test]
    fn test_listing_query() {
        assert_eq!(
            Route::parse("/?q=char"),
            Route::Listing {
                query: Some("char".to_string())
            }
        );
        assert_eq!(Route::parse("/?q="), Route::Listing { query: None });
        assert_eq!(
            Route::parse("/?page=2&q=mr+mime"),
            Route::Listing {
                query: Some("mr mime".to_string())
            }
        );
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(Route::parse("/pokemon/25"), Route::Detail { id: 25 });
        assert_eq!(Route::parse("/pokemon/151/"), Route::Detail { id: 151 });
    }

    #[test]
    fn test_bad_ids_are_not_found() {
        assert!(Route::parse("/pokemon/0").is_not_found());
        assert!(Route::parse("/pokemon/-4").is_not_found());
        assert!(Route::parse("/pokemon/pikachu").is_not_found());
        assert!(Route::parse("/pokemon").is_not_found());
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert!(Route::parse("/items/1").is_not_found());
        assert!(Route::parse("pokemon/1").is_not_found());
        assert!(Route::parse("").is_not_found());
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/pokemon/7"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }
}
