// SPDX-License-Identifier: MPL-2.0
//! Artwork URL construction.

use std::fmt;

/// Default image CDN base for catalog artwork.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// URL returned for records without artwork.
///
/// It is the empty `data:` URL; artwork loaders recognise it and never send
/// it over the network.
pub const PLACEHOLDER_IMAGE_URL: &str = "data:,";

/// Rendition sizes offered by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    W300,
    W500,
    W780,
    W1280,
    #[default]
    Original,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds fully qualified artwork URLs from catalog-relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePathBuilder {
    base_url: String,
}

impl Default for ImagePathBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImagePathBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins base, size segment and path. An empty path yields
    /// [`PLACEHOLDER_IMAGE_URL`].
    pub fn build(&self, path: &str, size: ImageSize) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return PLACEHOLDER_IMAGE_URL.to_string();
        }
        format!("{}/{}/{}", self.base_url, size, path)
    }
}

/// Whether `url` is the placeholder produced for missing artwork.
pub fn is_placeholder(url: &str) -> bool {
    url == PLACEHOLDER_IMAGE_URL
}
