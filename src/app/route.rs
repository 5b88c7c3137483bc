// SPDX-License-Identifier: MPL-2.0
//! In-app navigation locations.
//!
//! Two locations exist: the home listing (`/`) and a movie detail
//! (`/movies/:id`). The detail id is kept as the raw path segment; it is
//! matched against catalog ids by string comparison.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Movie(String),
}

impl Route {
    /// Parses a path such as `/`, `movies/42` or `/movies/42/`.
    ///
    /// Returns `None` for paths that address neither location.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Home);
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("movies"), Some(id), None) if !id.is_empty() => {
                Some(Route::Movie(id.to_string()))
            }
            _ => None,
        }
    }

    pub fn movie(id: i64) -> Self {
        Route::Movie(id.to_string())
    }

    /// The `:id` parameter, when this route addresses a movie.
    pub fn movie_id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::Movie(id) => Some(id),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Movie(id) => format!("/movies/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_empty_paths_are_home() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("  "), Some(Route::Home));
    }

    #[test]
    fn movie_paths_carry_the_raw_id() {
        assert_eq!(Route::parse("movies/42"), Some(Route::movie(42)));
        assert_eq!(Route::parse("/movies/42/"), Some(Route::movie(42)));
        assert_eq!(
            Route::parse("/movies/abc"),
            Some(Route::Movie("abc".to_string()))
        );
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Route::parse("/movies"), None);
        assert_eq!(Route::parse("/movies/1/cast"), None);
        assert_eq!(Route::parse("/tv/1"), None);
    }

    #[test]
    fn movie_id_is_optional() {
        assert_eq!(Route::Home.movie_id(), None);
        assert_eq!(Route::movie(7).movie_id(), Some("7"));
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Home, Route::movie(550)] {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
        }
        assert_eq!(Route::movie(550).to_string(), "/movies/550");
    }
}
