// SPDX-License-Identifier: MPL-2.0
//! Horizontal slider rows of backdrop tiles.
//!
//! During a slide two rows share the same slot: the outgoing one translating
//! left and the incoming one arriving from the right. Tiles grow and lift
//! while hovered, and reveal their caption.

use super::Message;
use crate::catalog::artwork::ArtworkCache;
use crate::catalog::Movie;
use crate::ui::motion::Pose;
use crate::ui::styles;
use crate::ui::theming::HomeTheme;
use iced::widget::{column, container, float, image, mouse_area, row, stack, text, Space};
use iced::{alignment, ContentFit, Element, Length, Vector};

pub(super) struct SlideRow<'a> {
    pub generation: u64,
    pub movies: &'a [Movie],
    pub pose: Pose,
}

pub(super) struct SliderView<'a, 'f> {
    pub rows: Vec<SlideRow<'a>>,
    /// Current tile and caption pose for a movie id.
    pub tile_pose: &'f dyn Fn(i64) -> (Pose, Pose),
    pub tile_url: &'f dyn Fn(&Movie) -> String,
    pub artwork: &'a ArtworkCache,
    pub theme: &'a HomeTheme,
}

pub(super) fn view<'a>(slider: SliderView<'a, '_>) -> Element<'a, Message> {
    let SliderView {
        mut rows,
        tile_pose,
        tile_url,
        artwork,
        theme,
    } = slider;
    let layout = &theme.layout;

    // Newer rows are drawn on top.
    rows.sort_by_key(|row| row.generation);

    let layers: Vec<Element<'a, Message>> = rows
        .into_iter()
        .map(|slide| {
            let mut tiles: Vec<Element<'a, Message>> = slide
                .movies
                .iter()
                .map(|movie| {
                    let (tile, caption) = tile_pose(movie.id);
                    let handle = artwork.handle(&tile_url(movie)).cloned();
                    view_tile(movie, handle, tile, caption, theme)
                })
                .collect();
            while tiles.len() < layout.columns {
                tiles.push(Space::new().width(Length::FillPortion(1)).into());
            }

            let offset = slide.pose.offset_x;
            translated(
                row(tiles)
                    .spacing(layout.tile_gap)
                    .width(Length::Fill)
                    .into(),
                move |width| Vector::new(width * offset, 0.0),
            )
        })
        .collect();

    column![
        container(stack(layers))
            .width(Length::Fill)
            .height(Length::Fixed(layout.tile_height))
            .padding([0.0, layout.tile_gap]),
        Space::new().height(Length::Fixed(layout.slider_headroom)),
    ]
    .into()
}

fn view_tile<'a>(
    movie: &'a Movie,
    handle: Option<image::Handle>,
    tile: Pose,
    caption: Pose,
    theme: &'a HomeTheme,
) -> Element<'a, Message> {
    let colors = &theme.colors;
    let layout = &theme.layout;
    let height = Length::Fixed(layout.tile_height);

    let artwork: Element<'a, Message> = match handle {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new())
            .width(Length::Fill)
            .height(height)
            .style(styles::tile_placeholder(colors.tile_placeholder))
            .into(),
    };

    let mut body = stack![artwork];
    if caption.opacity > 0.0 {
        body = body.push(
            container(
                container(text(movie.title.as_str()).size(layout.caption_size))
                    .width(Length::Fill)
                    .padding(layout.caption_padding)
                    .style(styles::caption(
                        colors.surface_caption,
                        colors.text_primary,
                        caption.opacity,
                    )),
            )
            .width(Length::Fill)
            .height(height)
            .align_y(alignment::Vertical::Bottom),
        );
    }

    let lift = tile.offset_y;
    let lifted: Element<'a, Message> = if tile == Pose::REST {
        body.into()
    } else {
        float(body)
            .scale(tile.scale)
            .translate(move |_bounds, _viewport| Vector::new(0.0, lift))
            .into()
    };

    container(
        mouse_area(lifted)
            .on_press(Message::TilePressed(movie.id))
            .on_enter(Message::TileHovered(movie.id))
            .on_exit(Message::TileUnhovered(movie.id)),
    )
    .width(Length::FillPortion(1))
    .into()
}

/// Shifts `content` by a vector computed from its own width.
fn translated<'a>(
    content: Element<'a, Message>,
    offset: impl Fn(f32) -> Vector + 'a,
) -> Element<'a, Message> {
    float(content)
        .translate(move |bounds, _viewport| offset(bounds.width))
        .into()
}
