// SPDX-License-Identifier: MPL-2.0
//! Resolution of the movie addressed by the current route.

use crate::catalog::{CatalogPage, Movie};

/// Finds the movie whose id equals `route_movie_id`.
///
/// Absent inputs and unmatched ids all resolve to `None`; a route can point
/// at a movie before the catalog has arrived.
pub fn resolve<'a>(
    route_movie_id: Option<&str>,
    catalog: Option<&'a CatalogPage>,
) -> Option<&'a Movie> {
    let id = route_movie_id?;
    catalog?.results.iter().find(|movie| movie.matches_id(id))
}
