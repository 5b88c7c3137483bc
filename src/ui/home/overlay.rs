// SPDX-License-Identifier: MPL-2.0
//! Detail overlay shown on top of the home screen for `/movies/:id`.

use super::Message;
use crate::catalog::Movie;
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use crate::ui::theming::HomeTheme;
use iced::widget::{column, container, image, mouse_area, opaque, scrollable, stack, text, Space};
use iced::{mouse, padding, ContentFit, Element, Length, Size};

pub(super) struct OverlayView<'a> {
    pub movie: Option<&'a Movie>,
    pub cover: Option<&'a image::Handle>,
    pub i18n: &'a I18n,
    pub theme: &'a HomeTheme,
    pub window: Size,
}

pub(super) fn view(overlay: OverlayView<'_>) -> Element<'_, Message> {
    let OverlayView {
        movie,
        cover,
        i18n,
        theme,
        window,
    } = overlay;
    let colors = &theme.colors;
    let layout = &theme.layout;

    let scrim = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::scrim(colors.scrim)),
    )
    .interaction(mouse::Interaction::Idle)
    .on_press(Message::OverlayDismissed);

    let body: Element<'_, Message> = match movie {
        Some(movie) => view_details(movie, cover, i18n, theme),
        None => container(text(i18n.tr("overlay-no-data")).color(colors.text_secondary))
            .padding(layout.banner_padding)
            .into(),
    };

    let card = container(scrollable(body))
        .width(Length::Fixed(window.width * layout.overlay_width_ratio))
        .height(Length::Fixed(window.height * layout.overlay_height_ratio))
        .style(styles::panel(colors.surface_secondary, colors.text_primary));

    let positioned = container(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(padding::top(layout.overlay_top));

    stack![scrim, positioned].into()
}

fn view_details<'a>(
    movie: &'a Movie,
    cover: Option<&'a image::Handle>,
    i18n: &'a I18n,
    theme: &'a HomeTheme,
) -> Element<'a, Message> {
    let colors = &theme.colors;
    let layout = &theme.layout;
    let cover_height = Length::Fixed(layout.overlay_cover_height);

    let cover: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(cover_height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new())
            .width(Length::Fill)
            .height(cover_height)
            .style(styles::tile_placeholder(colors.tile_placeholder))
            .into(),
    };

    let mut facts = column![].spacing(layout.caption_padding / 2.0);
    if let Some(date) = movie.release_date() {
        facts = facts.push(
            text(i18n.tr_with_args(
                "overlay-release-date",
                &[("date", date.format("%Y-%m-%d").to_string())],
            ))
            .size(layout.caption_size)
            .color(colors.text_secondary),
        );
    }
    if let Some(rating) = format_rating(movie.vote_average) {
        facts = facts.push(
            text(i18n.tr_with_args("overlay-rating", &[("rating", rating)]))
                .size(layout.caption_size)
                .color(colors.text_secondary),
        );
    }

    let details = column![
        text(movie.title.as_str())
            .size(layout.overlay_title_size)
            .color(colors.text_primary),
        facts,
        text(movie.overview.as_str())
            .size(layout.overview_size)
            .color(colors.text_primary),
    ]
    .spacing(layout.caption_padding)
    .padding(layout.caption_padding * 2.0);

    column![cover, details].into()
}

/// One decimal place, out of ten. Unrated movies show nothing.
fn format_rating(vote_average: Option<f64>) -> Option<String> {
    vote_average
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| format!("{v:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_uses_one_decimal() {
        assert_eq!(format_rating(Some(7.456)), Some("7.5".to_string()));
    }

    #[test]
    fn missing_or_zero_rating_is_hidden() {
        assert_eq!(format_rating(None), None);
        assert_eq!(format_rating(Some(0.0)), None);
    }
}
