// SPDX-License-Identifier: MPL-2.0
//! Full-window banner for the featured movie, with the slider pulled up
//! over its lower edge.

use super::Message;
use crate::catalog::Movie;
use crate::ui::styles;
use crate::ui::theming::HomeTheme;
use iced::widget::{column, container, image, mouse_area, scrollable, stack, text, Space};
use iced::{alignment, ContentFit, Element, Length, Size};

pub(super) struct BannerView<'a> {
    pub movie: Option<&'a Movie>,
    pub backdrop: Option<image::Handle>,
    pub slider: Element<'a, Message>,
    pub theme: &'a HomeTheme,
    pub window: Size,
}

/// Total height of the banner area once the slider overlaps it.
pub(super) fn total_height(theme: &HomeTheme, window: Size) -> f32 {
    let layout = &theme.layout;
    window.height + layout.tile_height + layout.slider_headroom - layout.slider_overlap
}

pub(super) fn view(banner: BannerView<'_>) -> Element<'_, Message> {
    let BannerView {
        movie,
        backdrop,
        slider,
        theme,
        window,
    } = banner;
    let colors = &theme.colors;
    let layout = &theme.layout;

    let backdrop: Element<'_, Message> = match backdrop {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::surface(colors.surface_secondary))
            .into(),
    };

    let shade = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::gradient(colors.gradient_start, colors.gradient_end));

    let (title, overview) = movie
        .map(|m| (m.title.as_str(), m.overview.as_str()))
        .unwrap_or_default();
    let copy = container(
        column![
            text(title).size(layout.title_size).color(colors.banner_text),
            container(
                text(overview)
                    .size(layout.overview_size)
                    .color(colors.banner_text)
            )
            .width(Length::Fixed(window.width * layout.overview_width_ratio)),
        ]
        .spacing(layout.caption_padding),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(layout.banner_padding)
    .align_y(alignment::Vertical::Center);

    let banner = mouse_area(
        container(stack![backdrop, shade, copy])
            .width(Length::Fill)
            .height(Length::Fixed(window.height)),
    )
    .on_press(Message::BannerPressed);

    let slider_layer = column![
        Space::new().height(Length::Fixed(window.height - layout.slider_overlap)),
        slider,
    ];

    let page = container(stack![banner, slider_layer])
        .width(Length::Fill)
        .height(Length::Fixed(total_height(theme, window)))
        .style(styles::surface(colors.surface_primary));

    scrollable(page).height(Length::Fill).into()
}
