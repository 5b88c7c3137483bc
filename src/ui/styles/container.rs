// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Colors are always passed in from the [`HomeTheme`](crate::ui::theming::HomeTheme)
//! rather than read from the Iced `Theme`.

use crate::ui::design_tokens::radius;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};

/// Flat background fill.
pub fn surface(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Vertical fade painted over the banner backdrop.
pub fn gradient(start: Color, end: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Gradient(
            Linear::new(Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, start)
                .add_stop(1.0, end)
                .into(),
        )),
        ..Default::default()
    }
}

/// Dimmed layer behind the detail overlay.
pub fn scrim(color: Color) -> impl Fn(&Theme) -> container::Style {
    surface(color)
}

/// The detail overlay card.
pub fn panel(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Caption strip under a hovered tile; `alpha` follows the caption tween.
pub fn caption(background: Color, text: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: background.a * alpha,
            ..background
        })),
        text_color: Some(Color {
            a: text.a * alpha,
            ..text
        }),
        ..Default::default()
    }
}

/// Tile whose artwork has not arrived.
pub fn tile_placeholder(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_alpha_scales_both_colors() {
        let style = caption(Color::BLACK, Color::WHITE, 0.5)(&Theme::Dark);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.5));
        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: 0.5,
                ..Color::BLACK
            }))
        );
    }

    #[test]
    fn surface_uses_given_color() {
        let style = surface(Color::WHITE)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(Color::WHITE)));
    }
}
