// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Catalog**: Endpoint locations and query defaults
//! - **Slider**: Page size and slide transition bounds

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Base URL of the catalog REST API.
pub const DEFAULT_API_BASE_URL: &str = crate::catalog::client::DEFAULT_API_BASE_URL;

/// Base URL artwork paths are appended to.
pub const DEFAULT_IMAGE_BASE_URL: &str = crate::catalog::image_path::DEFAULT_IMAGE_BASE_URL;

/// Language sent with catalog queries.
pub const DEFAULT_CATALOG_LANGUAGE: &str = "en-US";

/// Listing page requested on startup.
pub const DEFAULT_CATALOG_PAGE: u32 = 1;

/// Environment variable holding the catalog API key.
pub const ENV_API_KEY: &str = "NOW_SHOWING_API_KEY";

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Tiles per slider window.
pub const DEFAULT_PAGE_SIZE: usize = crate::ui::home::DEFAULT_PAGE_SIZE;

/// Minimum tiles per slider window.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum tiles per slider window: one full row.
pub const MAX_PAGE_SIZE: usize = crate::ui::design_tokens::sizing::SLIDER_COLUMNS;

/// Duration of one slide transition (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 1000;

/// Minimum slide transition duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 100;

/// Maximum slide transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5000;

const _: () = {
    assert!(MIN_PAGE_SIZE <= DEFAULT_PAGE_SIZE && DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    assert!(MIN_TRANSITION_MS <= DEFAULT_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
};
