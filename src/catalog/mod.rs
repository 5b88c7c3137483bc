// SPDX-License-Identifier: MPL-2.0
//! Movie catalog data and the adapters that fetch it.
//!
//! - [`Movie`] / [`CatalogPage`]: the payload of the "now playing" endpoint,
//!   kept exactly as received.
//! - [`client`]: the HTTP client for the catalog endpoint.
//! - [`image_path`]: URL construction for backdrop and poster artwork.
//! - [`artwork`]: background loading and caching of artwork images.

pub mod artwork;
pub mod client;
pub mod image_path;

pub use client::MovieCatalogClient;
pub use image_path::ImageSize;

use chrono::NaiveDate;
use serde::Deserialize;

/// A single movie record from the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    /// Backdrop path, or an empty string when the catalog has none.
    pub fn backdrop(&self) -> &str {
        self.backdrop_path.as_deref().unwrap_or("")
    }

    /// Parsed release date. Missing or malformed dates yield `None`.
    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    /// Whether this movie is addressed by the given route identifier.
    ///
    /// Route identifiers are compared as strings, so `"042"` does not match
    /// a movie with id `42`.
    pub fn matches_id(&self, route_id: &str) -> bool {
        self.id.to_string() == route_id
    }
}

/// One fetched page of the "now playing" listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogPage {
    #[serde(default = "first_page")]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl CatalogPage {
    /// The movie featured in the banner: the first record of the page.
    pub fn featured(&self) -> Option<&Movie> {
        self.results.first()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Parses a raw JSON response body.
    pub fn from_json(body: &[u8]) -> std::result::Result<Self, crate::error::FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}
