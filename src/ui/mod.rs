// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The UI follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Featured banner, paged slider and detail overlay
//!
//! # Shared Infrastructure
//!
//! - [`motion`] - Animation variants and tweens
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and the home theme

pub mod design_tokens;
pub mod home;
pub mod motion;
pub mod styles;
pub mod theming;
pub mod widgets;
