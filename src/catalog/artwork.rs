// SPDX-License-Identifier: MPL-2.0
//! Background loading and caching of artwork images.
//!
//! # Design
//!
//! - **URL-keyed**: entries are indexed by the fully built artwork URL
//! - **LRU eviction**: least recently requested images are dropped first
//! - **Single flight**: a URL already loading or loaded is never re-requested
//! - **Placeholder aware**: the placeholder URL is never fetched
//!
//! Decoding is left to the image widget; the cache stores encoded bytes
//! wrapped in an [`image::Handle`].

use super::image_path::is_placeholder;
use crate::error::FetchError;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of artwork images kept in memory.
pub const DEFAULT_ARTWORK_CAPACITY: usize = 48;

/// Lifecycle of one artwork entry.
#[derive(Debug, Clone)]
pub enum ArtworkState {
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Bounded cache of artwork handles keyed by URL.
#[derive(Debug)]
pub struct ArtworkCache {
    entries: LruCache<String, ArtworkState>,
}

impl Default for ArtworkCache {
    fn default() -> Self {
        Self::new(DEFAULT_ARTWORK_CAPACITY)
    }
}

impl ArtworkCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading and reports whether a download must start.
    ///
    /// Returns `false` for the placeholder URL and for URLs that are already
    /// loading, loaded, or failed.
    pub fn request(&mut self, url: &str) -> bool {
        if is_placeholder(url) {
            return false;
        }
        if self.entries.get(url).is_some() {
            return false;
        }
        self.entries.put(url.to_string(), ArtworkState::Loading);
        true
    }

    /// Records the outcome of a download started by [`request`](Self::request).
    pub fn resolve(&mut self, url: String, result: Result<image::Handle, FetchError>) {
        let state = match result {
            Ok(handle) => ArtworkState::Ready(handle),
            Err(err) => {
                log::debug!("artwork {url} unavailable: {err}");
                ArtworkState::Failed
            }
        };
        self.entries.put(url, state);
    }

    /// Returns the loaded handle for `url` without touching recency.
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.peek(url) {
            Some(ArtworkState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn state(&self, url: &str) -> Option<&ArtworkState> {
        self.entries.peek(url)
    }

    pub fn is_loading(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, state)| matches!(state, ArtworkState::Loading))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Downloads one artwork image.
pub async fn download(http: reqwest::Client, url: String) -> Result<image::Handle, FetchError> {
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let bytes = response.bytes().await?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::image_path::PLACEHOLDER_IMAGE_URL;

    fn handle() -> image::Handle {
        image::Handle::from_bytes(vec![0_u8; 4])
    }

    #[test]
    fn placeholder_is_never_requested() {
        let mut cache = ArtworkCache::default();
        assert!(!cache.request(PLACEHOLDER_IMAGE_URL));
        assert!(cache.is_empty());
    }

    #[test]
    fn url_is_requested_only_once() {
        let mut cache = ArtworkCache::default();
        assert!(cache.request("https://img.test/a.jpg"));
        assert!(!cache.request("https://img.test/a.jpg"));
        assert!(cache.is_loading());
    }

    #[test]
    fn resolved_handle_is_available() {
        let mut cache = ArtworkCache::default();
        cache.request("u");
        cache.resolve("u".to_string(), Ok(handle()));
        assert!(cache.handle("u").is_some());
        assert!(!cache.is_loading());
    }

    #[test]
    fn failures_are_remembered_and_not_retried() {
        let mut cache = ArtworkCache::default();
        cache.request("u");
        cache.resolve("u".to_string(), Err(FetchError::Status(404)));
        assert!(matches!(cache.state("u"), Some(ArtworkState::Failed)));
        assert!(cache.handle("u").is_none());
        assert!(!cache.request("u"));
    }

    #[test]
    fn least_recently_requested_entry_is_evicted() {
        let mut cache = ArtworkCache::new(2);
        cache.request("a");
        cache.request("b");
        cache.request("c");
        assert_eq!(cache.len(), 2);
        assert!(cache.state("a").is_none());
        assert!(cache.request("a"));
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut cache = ArtworkCache::new(0);
        cache.request("a");
        assert_eq!(cache.len(), 1);
    }
}
