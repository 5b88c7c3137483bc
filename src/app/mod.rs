// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the home screen, the router, localization
//! and the artwork cache, and turns home [`Effect`](crate::ui::home::Effect)s
//! into navigation and background downloads.

pub mod config;
mod message;
pub mod paths;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::catalog::artwork::ArtworkCache;
use crate::catalog::image_path::ImagePathBuilder;
use crate::catalog::MovieCatalogClient;
use crate::i18n::fluent::I18n;
use crate::ui::home;
use crate::ui::theming::HomeTheme;
use iced::{window, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    route: Route,
    home: home::State,
    artwork: ArtworkCache,
    /// `None` when the HTTP client could not be built; the home screen then
    /// stays on its loader.
    client: Option<MovieCatalogClient>,
    theme: HomeTheme,
    window_size: Size,
    /// Time of the last animation frame.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("loading", &self.home.is_loading())
            .field("artwork", &self.artwork.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            route: Route::Home,
            home: home::State::default(),
            artwork: ArtworkCache::default(),
            client: None,
            theme: HomeTheme::default(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Loads the configuration, builds the catalog client and starts the
    /// one catalog fetch of this session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let catalog = &config.catalog;
        let api_key = catalog.resolve_api_key(flags.api_key.clone());
        let client = match MovieCatalogClient::new(catalog.api_base_url.clone(), api_key) {
            Ok(client) => Some(
                client
                    .language(catalog.language.clone())
                    .region(catalog.region.clone())
                    .page(catalog.page),
            ),
            Err(err) => {
                log::error!("catalog client unavailable: {err}");
                None
            }
        };

        let home = home::State::new(home::Settings {
            page_size: config.slider.page_size(),
            transition: config.slider.transition(),
            image_paths: ImagePathBuilder::new(catalog.image_base_url.clone()),
        });

        let route = flags
            .route
            .as_deref()
            .map(|raw| {
                Route::parse(raw).unwrap_or_else(|| {
                    log::warn!("unknown route {raw:?}, opening home");
                    Route::Home
                })
            })
            .unwrap_or_default();

        let mut app = App {
            i18n,
            route,
            home,
            client,
            theme: HomeTheme::new(config.general.theme_mode),
            ..Self::default()
        };

        let task = app.start_fetch();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.home.overlay(&self.route) {
            home::Overlay::Visible(Some(movie)) => format!("{} - {app_name}", movie.title),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.home.is_animating(Instant::now())),
        ])
    }
}
