// SPDX-License-Identifier: MPL-2.0
use now_showing::app::config::{self, Config, GeneralConfig, SliderConfig};
use now_showing::app::Route;
use now_showing::catalog::image_path::{ImagePathBuilder, PLACEHOLDER_IMAGE_URL};
use now_showing::catalog::{CatalogPage, ImageSize, Movie};
use now_showing::i18n::fluent::I18n;
use now_showing::ui::home::{self, pagination, selection, Overlay, PaginationState};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn movie(id: i64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        overview: String::new(),
        backdrop_path: Some(format!("/b{id}.jpg")),
        poster_path: None,
        release_date: Some("2024-03-01".to_string()),
        vote_average: Some(7.2),
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

#[test]
fn thirteen_items_cycle_between_two_windows() {
    let mut state = PaginationState::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        state = pagination::advance(state, 13, 6);
        seen.push(state.current_index);
        state = pagination::on_transition_complete(state);
    }
    assert_eq!(seen, vec![1, 0, 1, 0]);

    let items: Vec<i64> = (1..=13).collect();
    assert_eq!(pagination::window(&items, 1, 6), &[8, 9, 10, 11, 12, 13]);
}

#[test]
fn three_items_never_leave_the_first_window() {
    let mut state = PaginationState::default();
    for _ in 0..3 {
        state = pagination::advance(state, 3, 6);
        assert_eq!(state.current_index, 0);
        state = pagination::on_transition_complete(state);
    }
}

#[test]
fn route_without_match_resolves_to_nothing() {
    let page = catalog(13);
    let route = Route::parse("movies/42").expect("detail route");
    assert_eq!(selection::resolve(route.movie_id(), Some(&page)), None);

    let route = Route::parse("/movies/7").expect("detail route");
    assert_eq!(
        selection::resolve(route.movie_id(), Some(&page)).map(|m| m.id),
        Some(7)
    );
}

#[test]
fn image_paths_use_base_size_and_path() {
    let builder = ImagePathBuilder::default();
    assert_eq!(
        builder.build("/abc.jpg", ImageSize::W500),
        "https://image.tmdb.org/t/p/w500/abc.jpg"
    );
    assert_eq!(builder.build("", ImageSize::Original), PLACEHOLDER_IMAGE_URL);
}

#[test]
fn home_screen_pages_and_opens_details() {
    let mut state = home::State::default();
    let _ = state.handle_message(home::Message::CatalogLoaded(Ok(catalog(13))));

    let _ = state.handle_message(home::Message::BannerPressed);
    let ids: Vec<i64> = state.visible_window().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![8, 9, 10, 11, 12, 13]);

    let _ = state.handle_message(home::Message::Tick(Instant::now() + Duration::from_secs(3)));
    assert_eq!(
        state.pagination(),
        Some(PaginationState {
            current_index: 1,
            is_transitioning: false
        })
    );

    let (effect, _) = state.handle_message(home::Message::TilePressed(9));
    assert_eq!(effect, home::Effect::Navigate(Route::movie(9)));
    match state.overlay(&Route::movie(9)) {
        Overlay::Visible(Some(movie)) => assert_eq!(movie.title, "Movie 9"),
        other => panic!("expected movie 9, got {other:?}"),
    }
}

#[test]
fn config_round_trip_drives_language_and_slider() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        slider: SliderConfig {
            page_size: Some(4),
            transition_ms: Some(500),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.slider.page_size(), 4);
    assert_eq!(loaded.slider.transition(), Duration::from_millis(500));

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
