// SPDX-License-Identifier: MPL-2.0
//! Home screen: banner, paged slider and detail overlay.
//!
//! The screen is a two-phase state machine. It starts in [`Phase::Loading`]
//! and moves to [`Phase::Loaded`] once the catalog arrives; a failed fetch
//! leaves it loading for the rest of its lifetime. The detail overlay is an
//! orthogonal sub-state derived from the current [`Route`] on every render.
//!
//! Slide transitions follow an exit/enter pair. Pressing the banner asks
//! [`pagination::advance`] for the next window; if accepted, the visible row
//! starts its exit tween while the new row enters. When the exit tween
//! finishes, [`pagination::on_transition_complete`] is called exactly once,
//! re-enabling the banner.

mod banner;
mod overlay;
pub mod pagination;
pub mod selection;
mod slider;

pub use pagination::{PaginationState, DEFAULT_PAGE_SIZE};

use crate::app::Route;
use crate::catalog::artwork::ArtworkCache;
use crate::catalog::image_path::ImagePathBuilder;
use crate::catalog::{CatalogPage, ImageSize, Movie, MovieCatalogClient};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::motion::{self, Pose, Tween, Variants};
use crate::ui::styles;
use crate::ui::theming::HomeTheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{column, container, stack, text};
use iced::{alignment, Element, Length, Size, Task};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default duration of one slide transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_secs(1);

/// Messages emitted by the home screen widgets and timers.
#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Result<CatalogPage, FetchError>),
    /// The banner was clicked: show the next slider window.
    BannerPressed,
    TilePressed(i64),
    TileHovered(i64),
    TileUnhovered(i64),
    /// The dimmed area around the detail overlay was clicked.
    OverlayDismissed,
    /// Animation frame.
    Tick(Instant),
}

/// Side effects the application should perform after a home message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Change the current route.
    Navigate(Route),
    /// Start downloading these artwork URLs.
    LoadArtwork(Vec<String>),
}

/// Tunables of the home screen.
#[derive(Debug, Clone)]
pub struct Settings {
    pub page_size: usize,
    pub transition: Duration,
    pub image_paths: ImagePathBuilder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            transition: DEFAULT_TRANSITION,
            image_paths: ImagePathBuilder::default(),
        }
    }
}

/// Top-level phase of the screen.
#[derive(Debug)]
enum Phase {
    Loading { spinner_rotation: f32 },
    Loaded(Loaded),
}

/// Data and animation state once the catalog is available.
#[derive(Debug)]
struct Loaded {
    catalog: CatalogPage,
    pagination: PaginationState,
    entering: RowMotion,
    leaving: Option<RowMotion>,
    hovered: HashMap<i64, TileMotion>,
}

/// One slider row on screen. `generation` keys the row so that a transition
/// back to the same index still swaps two distinct rows.
#[derive(Debug, Clone, Copy)]
struct RowMotion {
    index: usize,
    generation: u64,
    tween: Tween,
}

#[derive(Debug, Clone, Copy)]
struct TileMotion {
    hovered: bool,
    tile: Tween,
    caption: Tween,
}

/// Orthogonal overlay sub-state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay<'a> {
    Hidden,
    /// A detail route is active. The movie is absent when the catalog is not
    /// loaded yet or has no record with the routed id.
    Visible(Option<&'a Movie>),
}

/// Environment required to render the home screen.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a HomeTheme,
    pub artwork: &'a ArtworkCache,
    pub route: &'a Route,
    pub window: Size,
    pub now: Instant,
}

/// Complete home screen state.
#[derive(Debug)]
pub struct State {
    phase: Phase,
    settings: Settings,
    row_variants: Variants,
    tile_variants: Variants,
    caption_variants: Variants,
    fetch_requested: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl State {
    pub fn new(settings: Settings) -> Self {
        let settings = Settings {
            page_size: settings.page_size.clamp(1, sizing::SLIDER_COLUMNS),
            ..settings
        };
        Self {
            phase: Phase::Loading {
                spinner_rotation: 0.0,
            },
            row_variants: motion::row_variants(settings.transition),
            tile_variants: motion::tile_variants(),
            caption_variants: motion::caption_variants(),
            settings,
            fetch_requested: false,
        }
    }

    /// Issues the catalog request for this mount. Later calls do nothing, so
    /// at most one fetch is ever outstanding.
    pub fn fetch(&mut self, client: &MovieCatalogClient) -> Task<Message> {
        if self.fetch_requested {
            return Task::none();
        }
        self.fetch_requested = true;

        let client = client.clone();
        Task::perform(async move { client.fetch().await }, Message::CatalogLoaded)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn catalog(&self) -> Option<&CatalogPage> {
        match &self.phase {
            Phase::Loading { .. } => None,
            Phase::Loaded(loaded) => Some(&loaded.catalog),
        }
    }

    pub fn pagination(&self) -> Option<PaginationState> {
        match &self.phase {
            Phase::Loading { .. } => None,
            Phase::Loaded(loaded) => Some(loaded.pagination),
        }
    }

    pub fn page_size(&self) -> usize {
        self.settings.page_size
    }

    /// Movies of the current slider window.
    pub fn visible_window(&self) -> &[Movie] {
        match &self.phase {
            Phase::Loading { .. } => &[],
            Phase::Loaded(loaded) => pagination::window(
                &loaded.catalog.results,
                loaded.pagination.current_index,
                self.settings.page_size,
            ),
        }
    }

    /// Derives the overlay sub-state for `route`.
    pub fn overlay<'a>(&'a self, route: &Route) -> Overlay<'a> {
        match route.movie_id() {
            None => Overlay::Hidden,
            Some(id) => Overlay::Visible(selection::resolve(Some(id), self.catalog())),
        }
    }

    /// Whether frame ticks are needed right now.
    pub fn is_animating(&self, now: Instant) -> bool {
        match &self.phase {
            Phase::Loading { .. } => true,
            Phase::Loaded(loaded) => {
                loaded.leaving.is_some()
                    || !loaded.entering.tween.is_finished(now)
                    || loaded
                        .hovered
                        .values()
                        .any(|m| !m.tile.is_finished(now) || !m.caption.is_finished(now))
            }
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let effect = match message {
            Message::CatalogLoaded(result) => self.on_catalog_loaded(result),
            Message::BannerPressed => self.on_banner_pressed(Instant::now()),
            Message::TilePressed(id) => Effect::Navigate(Route::movie(id)),
            Message::OverlayDismissed => Effect::Navigate(Route::Home),
            Message::TileHovered(id) => {
                self.set_hover(id, true, Instant::now());
                Effect::None
            }
            Message::TileUnhovered(id) => {
                self.set_hover(id, false, Instant::now());
                Effect::None
            }
            Message::Tick(now) => {
                self.on_tick(now);
                Effect::None
            }
        };
        (effect, Task::none())
    }

    /// Artwork URLs needed to render `route`.
    pub fn artwork_for_route(&self, route: &Route) -> Vec<String> {
        match self.overlay(route) {
            Overlay::Visible(Some(movie)) => vec![self.cover_url(movie)],
            _ => Vec::new(),
        }
    }

    fn on_catalog_loaded(&mut self, result: Result<CatalogPage, FetchError>) -> Effect {
        if !self.is_loading() {
            return Effect::None;
        }

        match result {
            Ok(catalog) => {
                let now = Instant::now();
                self.phase = Phase::Loaded(Loaded {
                    catalog,
                    pagination: PaginationState::default(),
                    entering: RowMotion {
                        index: 0,
                        generation: 0,
                        tween: Tween::settled(self.row_variants.pose(motion::ROW_VISIBLE), now),
                    },
                    leaving: None,
                    hovered: HashMap::new(),
                });
                Effect::LoadArtwork(self.artwork_around_current_window())
            }
            Err(err) => {
                log::debug!("fetch failed, staying on loader: {err}");
                Effect::None
            }
        }
    }

    fn on_banner_pressed(&mut self, now: Instant) -> Effect {
        let page_size = self.settings.page_size;
        let Phase::Loaded(loaded) = &mut self.phase else {
            return Effect::None;
        };

        let previous = loaded.pagination;
        let next = pagination::advance(previous, loaded.catalog.len(), page_size);
        if next == previous {
            log::trace!("slide already running, advance dropped");
            return Effect::None;
        }
        loaded.pagination = next;

        let (Some(exit), Some(visible)) = (
            self.row_variants.get(motion::ROW_EXIT),
            self.row_variants.get(motion::ROW_VISIBLE),
        ) else {
            return Effect::None;
        };

        let outgoing = loaded.entering;
        loaded.leaving = Some(RowMotion {
            tween: outgoing.tween.retarget(exit, now),
            ..outgoing
        });
        loaded.entering = RowMotion {
            index: next.current_index,
            generation: outgoing.generation + 1,
            tween: Tween::start(self.row_variants.pose(motion::ROW_HIDDEN), visible, now),
        };
        loaded.hovered.clear();

        log::debug!(
            "slider window {} -> {}",
            previous.current_index,
            next.current_index
        );
        Effect::LoadArtwork(self.artwork_around_current_window())
    }

    fn on_tick(&mut self, now: Instant) {
        match &mut self.phase {
            Phase::Loading { spinner_rotation } => {
                *spinner_rotation = AnimatedSpinner::step(*spinner_rotation);
            }
            Phase::Loaded(loaded) => {
                let exit_done = loaded
                    .leaving
                    .is_some_and(|row| row.tween.is_finished(now));
                if exit_done {
                    loaded.leaving = None;
                    loaded.pagination = pagination::on_transition_complete(loaded.pagination);
                }

                loaded.hovered.retain(|_, m| {
                    m.hovered || !m.tile.is_finished(now) || !m.caption.is_finished(now)
                });
            }
        }
    }

    fn set_hover(&mut self, id: i64, hovered: bool, now: Instant) {
        let Phase::Loaded(loaded) = &mut self.phase else {
            return;
        };
        let name = if hovered {
            motion::TILE_HOVER
        } else {
            motion::TILE_NORMAL
        };
        let (Some(tile_target), Some(caption_target)) = (
            self.tile_variants.get(name),
            self.caption_variants.get(name),
        ) else {
            return;
        };

        let entry = loaded.hovered.entry(id).or_insert_with(|| TileMotion {
            hovered: false,
            tile: Tween::settled(self.tile_variants.pose(motion::TILE_NORMAL), now),
            caption: Tween::settled(self.caption_variants.pose(motion::TILE_NORMAL), now),
        });
        entry.hovered = hovered;
        entry.tile = entry.tile.retarget(tile_target, now);
        entry.caption = entry.caption.retarget(caption_target, now);
    }

    /// Whether the tile of movie `id` is hovered or heading there.
    pub fn is_hovered(&self, id: i64) -> bool {
        match &self.phase {
            Phase::Loading { .. } => false,
            Phase::Loaded(loaded) => loaded.hovered.get(&id).is_some_and(|m| m.hovered),
        }
    }

    /// Sends every hovered tile back to its normal pose.
    pub fn release_hover(&mut self, now: Instant) {
        let Phase::Loaded(loaded) = &self.phase else {
            return;
        };
        let ids: Vec<i64> = loaded
            .hovered
            .iter()
            .filter(|(_, m)| m.hovered)
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.set_hover(id, false, now);
        }
    }

    /// Banner backdrop plus the current and following slider windows.
    fn artwork_around_current_window(&self) -> Vec<String> {
        let Phase::Loaded(loaded) = &self.phase else {
            return Vec::new();
        };
        let page_size = self.settings.page_size;
        let items = &loaded.catalog.results;
        let index = loaded.pagination.current_index;
        let following = pagination::advance(
            PaginationState {
                current_index: index,
                is_transitioning: false,
            },
            items.len(),
            page_size,
        );

        let mut urls: Vec<String> = loaded
            .catalog
            .featured()
            .map(|movie| self.banner_url(movie))
            .into_iter()
            .collect();
        for movie in pagination::window(items, index, page_size)
            .iter()
            .chain(pagination::window(items, following.current_index, page_size))
        {
            let url = self.tile_url(movie);
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls.retain(|url| !crate::catalog::image_path::is_placeholder(url));
        urls
    }

    fn banner_url(&self, movie: &Movie) -> String {
        self.settings
            .image_paths
            .build(movie.backdrop(), ImageSize::Original)
    }

    fn tile_url(&self, movie: &Movie) -> String {
        self.settings
            .image_paths
            .build(movie.backdrop(), ImageSize::W500)
    }

    fn cover_url(&self, movie: &Movie) -> String {
        self.settings
            .image_paths
            .build(movie.backdrop(), ImageSize::W780)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let base: Element<'a, Message> = match &self.phase {
            Phase::Loading { spinner_rotation } => view_loader(&env, *spinner_rotation),
            Phase::Loaded(loaded) => self.view_loaded(loaded, &env),
        };

        match self.overlay(env.route) {
            Overlay::Hidden => base,
            Overlay::Visible(movie) => {
                let cover = movie.map(|m| self.cover_url(m));
                stack![
                    base,
                    overlay::view(overlay::OverlayView {
                        movie,
                        cover: cover.as_deref().and_then(|url| env.artwork.handle(url)),
                        i18n: env.i18n,
                        theme: env.theme,
                        window: env.window,
                    })
                ]
                .into()
            }
        }
    }

    fn view_loaded<'a>(&'a self, loaded: &'a Loaded, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let page_size = self.settings.page_size;
        let items = &loaded.catalog.results;

        let mut rows = Vec::with_capacity(2);
        for row in loaded.leaving.iter().chain(std::iter::once(&loaded.entering)) {
            rows.push(slider::SlideRow {
                generation: row.generation,
                movies: pagination::window(items, row.index, page_size),
                pose: row.tween.at(env.now),
            });
        }

        let tile_pose = |id: i64| -> (Pose, Pose) {
            match loaded.hovered.get(&id) {
                Some(m) => (m.tile.at(env.now), m.caption.at(env.now)),
                None => (
                    self.tile_variants.pose(motion::TILE_NORMAL),
                    self.caption_variants.pose(motion::TILE_NORMAL),
                ),
            }
        };

        let slider = slider::view(slider::SliderView {
            rows,
            tile_pose: &tile_pose,
            tile_url: &|movie: &Movie| self.tile_url(movie),
            artwork: env.artwork,
            theme: env.theme,
        });

        let featured = loaded.catalog.featured();
        let backdrop = featured
            .map(|movie| self.banner_url(movie))
            .and_then(|url| env.artwork.handle(&url).cloned());

        banner::view(banner::BannerView {
            movie: featured,
            backdrop,
            slider,
            theme: env.theme,
            window: env.window,
        })
    }
}

fn view_loader<'a>(env: &ViewEnv<'a>, rotation: f32) -> Element<'a, Message> {
    let colors = &env.theme.colors;
    let layout = &env.theme.layout;
    let spinner = AnimatedSpinner::new(colors.brand_primary, rotation).into_element::<Message>();

    let content = column![
        spinner,
        text(env.i18n.tr("home-loading"))
            .size(layout.overview_size)
            .color(colors.text_primary)
    ]
    .spacing(layout.caption_padding)
    .align_x(alignment::Horizontal::Center);

    let height = Length::Fixed(env.window.height * layout.loader_height_ratio);
    container(content)
        .center_x(Length::Fill)
        .center_y(height)
        .style(styles::surface(colors.surface_primary))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            overview: format!("Overview {id}"),
            backdrop_path: Some(format!("/backdrop-{id}.jpg")),
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    fn catalog(count: i64) -> CatalogPage {
        CatalogPage {
            page: 1,
            results: (1..=count).map(movie).collect(),
            total_pages: 1,
            total_results: count as u32,
        }
    }

    fn loaded(count: i64) -> State {
        let mut state = State::default();
        let _ = state.handle_message(Message::CatalogLoaded(Ok(catalog(count))));
        state
    }

    fn finish_transition(state: &mut State) {
        let later = Instant::now() + Duration::from_secs(5);
        let _ = state.handle_message(Message::Tick(later));
    }

    fn visible_ids(state: &State) -> Vec<i64> {
        state.visible_window().iter().map(|m| m.id).collect()
    }

    #[test]
    fn starts_loading_without_overlay() {
        let state = State::default();
        assert!(state.is_loading());
        assert_eq!(state.overlay(&Route::Home), Overlay::Hidden);
        assert!(state.visible_window().is_empty());
    }

    #[test]
    fn failed_fetch_keeps_loading() {
        let mut state = State::default();
        let (effect, _) =
            state.handle_message(Message::CatalogLoaded(Err(FetchError::Status(500))));
        assert_eq!(effect, Effect::None);
        assert!(state.is_loading());
        assert!(state.is_animating(Instant::now()));
    }

    #[test]
    fn successful_fetch_loads_and_requests_artwork() {
        let mut state = State::default();
        let (effect, _) = state.handle_message(Message::CatalogLoaded(Ok(catalog(13))));
        assert!(!state.is_loading());
        assert_eq!(state.pagination(), Some(PaginationState::default()));
        match effect {
            Effect::LoadArtwork(urls) => {
                assert_eq!(
                    urls.first().map(String::as_str),
                    Some("https://image.tmdb.org/t/p/original/backdrop-1.jpg")
                );
                assert!(urls.contains(&"https://image.tmdb.org/t/p/w500/backdrop-2.jpg".into()));
                assert!(urls.contains(&"https://image.tmdb.org/t/p/w500/backdrop-13.jpg".into()));
            }
            other => panic!("expected artwork requests, got {other:?}"),
        }
    }

    #[test]
    fn loaded_phase_is_one_way() {
        let mut state = loaded(13);
        let (effect, _) =
            state.handle_message(Message::CatalogLoaded(Err(FetchError::Status(500))));
        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
    }

    #[test]
    fn banner_press_pages_through_windows() {
        let mut state = loaded(13);
        assert_eq!(visible_ids(&state), vec![2, 3, 4, 5, 6, 7]);

        let _ = state.handle_message(Message::BannerPressed);
        assert_eq!(visible_ids(&state), vec![8, 9, 10, 11, 12, 13]);
        assert!(state.pagination().is_some_and(|p| p.is_transitioning));

        finish_transition(&mut state);
        let _ = state.handle_message(Message::BannerPressed);
        assert_eq!(visible_ids(&state), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn banner_press_during_slide_is_dropped() {
        let mut state = loaded(20);
        let _ = state.handle_message(Message::BannerPressed);
        let (effect, _) = state.handle_message(Message::BannerPressed);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.pagination().map(|p| p.current_index), Some(1));
    }

    #[test]
    fn exit_completion_clears_transition_once() {
        let mut state = loaded(13);
        let _ = state.handle_message(Message::BannerPressed);
        assert!(state.is_animating(Instant::now()));

        finish_transition(&mut state);
        assert_eq!(
            state.pagination(),
            Some(PaginationState {
                current_index: 1,
                is_transitioning: false
            })
        );
        finish_transition(&mut state);
        assert!(!state.is_animating(Instant::now() + Duration::from_secs(5)));
    }

    #[test]
    fn single_window_catalog_still_completes_its_slide() {
        let mut state = loaded(3);
        let _ = state.handle_message(Message::BannerPressed);
        assert_eq!(state.pagination().map(|p| p.current_index), Some(0));
        assert!(state.pagination().is_some_and(|p| p.is_transitioning));

        finish_transition(&mut state);
        assert!(state.pagination().is_some_and(|p| !p.is_transitioning));
        assert_eq!(visible_ids(&state), vec![2, 3]);
    }

    #[test]
    fn banner_press_while_loading_is_ignored() {
        let mut state = State::default();
        let (effect, _) = state.handle_message(Message::BannerPressed);
        assert_eq!(effect, Effect::None);
        assert!(state.pagination().is_none());
    }

    #[test]
    fn tile_press_navigates_to_detail_route() {
        let mut state = loaded(13);
        let (effect, _) = state.handle_message(Message::TilePressed(5));
        assert_eq!(effect, Effect::Navigate(Route::movie(5)));
    }

    #[test]
    fn overlay_dismissal_navigates_home() {
        let mut state = loaded(13);
        let (effect, _) = state.handle_message(Message::OverlayDismissed);
        assert_eq!(effect, Effect::Navigate(Route::Home));
    }

    #[test]
    fn overlay_follows_route() {
        let state = loaded(13);
        assert_eq!(state.overlay(&Route::Home), Overlay::Hidden);
        match state.overlay(&Route::movie(4)) {
            Overlay::Visible(Some(movie)) => assert_eq!(movie.id, 4),
            other => panic!("expected movie 4, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_route_shows_empty_overlay() {
        let state = loaded(13);
        assert_eq!(state.overlay(&Route::movie(42)), Overlay::Visible(None));
    }

    #[test]
    fn route_can_outrace_the_fetch() {
        let state = State::default();
        assert_eq!(state.overlay(&Route::movie(1)), Overlay::Visible(None));
        assert!(state.artwork_for_route(&Route::movie(1)).is_empty());
    }

    #[test]
    fn hover_animates_and_settles() {
        let mut state = loaded(13);
        let _ = state.handle_message(Message::TileHovered(2));
        assert!(state.is_animating(Instant::now()));

        let _ = state.handle_message(Message::TileUnhovered(2));
        let later = Instant::now() + Duration::from_secs(5);
        let _ = state.handle_message(Message::Tick(later));
        assert!(!state.is_animating(later));
    }

    #[test]
    fn release_hover_returns_tiles_to_normal() {
        let mut state = loaded(13);
        let _ = state.handle_message(Message::TileHovered(2));
        let _ = state.handle_message(Message::TileHovered(3));
        assert!(state.is_hovered(2) && state.is_hovered(3));

        state.release_hover(Instant::now());
        assert!(!state.is_hovered(2));
        assert!(!state.is_hovered(3));
    }

    #[test]
    fn page_size_is_at_least_one() {
        let state = State::new(Settings {
            page_size: 0,
            ..Settings::default()
        });
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn page_size_never_exceeds_one_row() {
        let state = State::new(Settings {
            page_size: 12,
            ..Settings::default()
        });
        assert_eq!(state.page_size(), sizing::SLIDER_COLUMNS);
    }
}
