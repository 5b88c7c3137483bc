// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the explicit theme handed to the home screen.
//!
//! Views never reach for global style constants directly. [`HomeTheme`] is
//! built once from the [`ThemeMode`] and passed down at composition time.

use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_secondary: Color,
    /// Caption strip under a hovered tile.
    pub surface_caption: Color,
    /// Flat fill for tiles whose artwork is missing or still loading.
    pub tile_placeholder: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand
    pub brand_primary: Color,

    // Banner gradient, painted from top to bottom over the backdrop.
    pub gradient_start: Color,
    pub gradient_end: Color,
    /// Title and overview drawn over the banner gradient.
    pub banner_text: Color,

    /// Dimmed layer behind the detail overlay.
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_caption: palette::GRAY_100,
            tile_placeholder: palette::GRAY_200,

            text_primary: palette::GRAY_950,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::RED_600,

            gradient_start: Color {
                a: opacity::TRANSPARENT,
                ..palette::BLACK
            },
            gradient_end: palette::BLACK,
            banner_text: palette::WHITE,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::BLACK,
            surface_secondary: palette::GRAY_900,
            surface_caption: palette::GRAY_950,
            tile_placeholder: palette::GRAY_900,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::RED_500,

            gradient_start: Color {
                a: opacity::TRANSPARENT,
                ..palette::BLACK
            },
            gradient_end: palette::BLACK,
            banner_text: palette::WHITE,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Sizes and proportions of the home screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub columns: usize,
    pub tile_height: f32,
    pub tile_gap: f32,
    pub slider_overlap: f32,
    pub slider_headroom: f32,
    pub banner_padding: f32,
    /// Share of the banner width used by the overview paragraph.
    pub overview_width_ratio: f32,
    pub title_size: f32,
    pub overview_size: f32,
    pub caption_size: f32,
    pub caption_padding: f32,
    pub overlay_width_ratio: f32,
    pub overlay_height_ratio: f32,
    pub overlay_top: f32,
    pub overlay_cover_height: f32,
    pub overlay_title_size: f32,
    pub loader_height_ratio: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            columns: sizing::SLIDER_COLUMNS,
            tile_height: sizing::TILE_HEIGHT,
            tile_gap: spacing::XS,
            slider_overlap: sizing::SLIDER_OVERLAP,
            slider_headroom: sizing::SLIDER_HEADROOM,
            banner_padding: spacing::XXL,
            overview_width_ratio: 0.5,
            title_size: typography::DISPLAY,
            overview_size: typography::BODY_LG,
            caption_size: typography::CAPTION,
            caption_padding: spacing::SM,
            overlay_width_ratio: sizing::OVERLAY_WIDTH_RATIO,
            overlay_height_ratio: sizing::OVERLAY_HEIGHT_RATIO,
            overlay_top: sizing::OVERLAY_TOP,
            overlay_cover_height: sizing::OVERLAY_COVER_HEIGHT,
            overlay_title_size: typography::TITLE,
            loader_height_ratio: sizing::LOADER_HEIGHT_RATIO,
        }
    }
}

/// Everything the home screen needs to style itself.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeTheme {
    pub colors: ColorScheme,
    pub layout: Layout,
    pub mode: ThemeMode,
}

impl HomeTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self {
            colors,
            layout: Layout::default(),
            mode,
        }
    }

    /// The matching built-in Iced theme for widget defaults.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.colors == ColorScheme::light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    }
}

impl Default for HomeTheme {
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}
