// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Route;
use crate::error::FetchError;
use crate::ui::home;
use iced::widget::image;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    /// Change the current location (`/` or `/movies/:id`).
    Navigate(Route),
    /// Result of one artwork download.
    ArtworkLoaded {
        url: String,
        result: Result<image::Handle, FetchError>,
    },
    WindowResized(Size),
    Tick(Instant), // Animation frame
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NOW_SHOWING_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog API key.
    /// Takes precedence over `NOW_SHOWING_API_KEY` and the config file.
    pub api_key: Option<String>,
    /// Optional initial location, e.g. `/movies/42`.
    pub route: Option<String>,
}
