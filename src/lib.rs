// SPDX-License-Identifier: MPL-2.0
//! `now_showing` is a desktop browser for the movies currently in theaters,
//! built with the Iced GUI framework.
//!
//! A single home screen features the first movie of the catalog in a
//! full-window banner, pages through the rest in an animated slider, and
//! shows a detail overlay for `/movies/:id`.

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
