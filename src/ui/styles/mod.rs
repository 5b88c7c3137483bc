// SPDX-License-Identifier: MPL-2.0
//! Widget styles shared by the home screen views.

pub mod container;

pub use container::{caption, gradient, panel, scrim, surface, tile_placeholder};
