// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Base values every style of the application is derived from.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use now_showing::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::XXL;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.094, 0.094, 0.094); // #181818
    pub const GRAY_900: Color = Color::from_rgb(0.184, 0.184, 0.184); // #2F2F2F
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);

    // Brand
    pub const RED_600: Color = Color::from_rgb(0.898, 0.035, 0.078); // #E51013
    pub const RED_500: Color = Color::from_rgb(0.925, 0.2, 0.2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 7.0; // slider gap
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 20.0;
    pub const LG: f32 = 30.0;
    pub const XL: f32 = 50.0;
    pub const XXL: f32 = 60.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Tiles per slider row. A window never holds more.
    pub const SLIDER_COLUMNS: usize = 6;

    /// Height of one slider tile.
    pub const TILE_HEIGHT: f32 = 150.0;

    /// How far the slider is pulled up over the banner.
    pub const SLIDER_OVERLAP: f32 = 100.0;

    /// Extra room under the slider so lifted tiles are not clipped.
    pub const SLIDER_HEADROOM: f32 = 60.0;

    /// Detail overlay width, as a fraction of the window width.
    pub const OVERLAY_WIDTH_RATIO: f32 = 0.4;

    /// Detail overlay height, as a fraction of the window height.
    pub const OVERLAY_HEIGHT_RATIO: f32 = 0.8;

    /// Detail overlay distance from the window top.
    pub const OVERLAY_TOP: f32 = 50.0;

    /// Height of the cover image inside the detail overlay.
    pub const OVERLAY_COVER_HEIGHT: f32 = 300.0;

    /// Loader area height, as a fraction of the window height.
    pub const LOADER_HEIGHT_RATIO: f32 = 0.2;

    pub const SPINNER: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title.
    pub const DISPLAY: f32 = 70.0;

    /// Overlay title.
    pub const TITLE: f32 = 36.0;

    /// Banner overview.
    pub const BODY_LG: f32 = 20.0;

    pub const BODY: f32 = 16.0;

    /// Tile caption.
    pub const CAPTION: f32 = 15.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XXL > spacing::XL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::OVERLAY_WIDTH_RATIO > 0.0 && sizing::OVERLAY_WIDTH_RATIO <= 1.0);
    assert!(sizing::OVERLAY_HEIGHT_RATIO > 0.0 && sizing::OVERLAY_HEIGHT_RATIO <= 1.0);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
