// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{App, Message, Route};
use crate::catalog::artwork;
use crate::ui::home;
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => {
                if let home::Message::CatalogLoaded(Err(err)) = &message {
                    log::warn!("{} ({err})", self.i18n.tr(err.i18n_key()));
                }
                // Tiles sit under the scrim while a detail is open.
                if matches!(message, home::Message::TileHovered(_))
                    && self.route.movie_id().is_some()
                {
                    return Task::none();
                }
                let (effect, task) = self.home.handle_message(message);
                Task::batch([task.map(Message::Home), self.apply_effect(effect)])
            }
            Message::Navigate(route) => self.navigate(route),
            Message::ArtworkLoaded { url, result } => {
                self.artwork.resolve(url, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                let (_, task) = self.home.handle_message(home::Message::Tick(now));
                task.map(Message::Home)
            }
        }
    }

    /// Starts the catalog fetch for this session.
    pub(super) fn start_fetch(&mut self) -> Task<Message> {
        match &self.client {
            Some(client) => self.home.fetch(client).map(Message::Home),
            None => Task::none(),
        }
    }

    fn apply_effect(&mut self, effect: home::Effect) -> Task<Message> {
        match effect {
            home::Effect::None => Task::none(),
            home::Effect::Navigate(route) => self.navigate(route),
            home::Effect::LoadArtwork(mut urls) => {
                // A detail route may have been opened before the catalog arrived.
                urls.extend(self.home.artwork_for_route(&self.route));
                self.load_artwork(urls)
            }
        }
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        if route == self.route {
            return Task::none();
        }
        log::debug!("route {} -> {}", self.route, route);
        self.route = route;
        if self.route.movie_id().is_some() {
            self.home.release_hover(Instant::now());
        }

        let urls = self.home.artwork_for_route(&self.route);
        self.load_artwork(urls)
    }

    fn load_artwork(&mut self, urls: Vec<String>) -> Task<Message> {
        let Some(client) = &self.client else {
            return Task::none();
        };

        let downloads: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.artwork.request(url))
            .map(|url| {
                let http = client.http().clone();
                Task::perform(artwork::download(http, url.clone()), move |result| {
                    Message::ArtworkLoaded { url, result }
                })
            })
            .collect();

        if !downloads.is_empty() {
            log::debug!("downloading {} artwork image(s)", downloads.len());
        }
        Task::batch(downloads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogPage, Movie};
    use iced::widget::image;

    fn catalog() -> CatalogPage {
        CatalogPage {
            page: 1,
            results: (1..=8)
                .map(|id| Movie {
                    id,
                    title: format!("Movie {id}"),
                    overview: String::new(),
                    backdrop_path: Some(format!("/b{id}.jpg")),
                    poster_path: None,
                    release_date: None,
                    vote_average: None,
                })
                .collect(),
            total_pages: 1,
            total_results: 8,
        }
    }

    #[test]
    fn tile_press_opens_detail_route() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::CatalogLoaded(Ok(catalog()))));
        let _ = app.update(Message::Home(home::Message::TilePressed(3)));
        assert_eq!(app.route, Route::movie(3));
        assert!(app.title().starts_with("Movie 3 - "));
    }

    #[test]
    fn escape_or_scrim_returns_home() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::movie(3)));
        let _ = app.update(Message::Home(home::Message::OverlayDismissed));
        assert_eq!(app.route, Route::Home);

        let _ = app.update(Message::Navigate(Route::movie(3)));
        let _ = app.update(Message::Navigate(Route::Home));
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn open_detail_blocks_tile_hover() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::CatalogLoaded(Ok(catalog()))));
        let _ = app.update(Message::Home(home::Message::TileHovered(2)));
        let _ = app.update(Message::Home(home::Message::TilePressed(2)));
        assert!(!app.home.is_hovered(2));

        let _ = app.update(Message::Home(home::Message::TileHovered(4)));
        assert!(!app.home.is_hovered(4));

        let _ = app.update(Message::Home(home::Message::OverlayDismissed));
        let _ = app.update(Message::Home(home::Message::TileHovered(4)));
        assert!(app.home.is_hovered(4));
    }

    #[test]
    fn artwork_results_land_in_cache() {
        let mut app = App::default();
        let url = "https://image.tmdb.org/t/p/w500/b2.jpg".to_string();
        assert!(app.artwork.request(&url));
        let _ = app.update(Message::ArtworkLoaded {
            url: url.clone(),
            result: Ok(image::Handle::from_bytes(vec![0_u8; 4])),
        });
        assert!(app.artwork.handle(&url).is_some());
    }

    #[test]
    fn window_resize_is_tracked() {
        let mut app = App::default();
        let size = iced::Size::new(1024.0, 700.0);
        let _ = app.update(Message::WindowResized(size));
        assert_eq!(app.window_size, size);
    }

    #[test]
    fn without_client_no_fetch_is_started() {
        let mut app = App::default();
        let _ = app.start_fetch();
        assert!(app.home.is_loading());
    }
}
