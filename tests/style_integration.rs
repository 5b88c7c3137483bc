// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use now_showing::ui::design_tokens::{opacity, palette, sizing, spacing};
    use now_showing::ui::styles;
    use now_showing::ui::theming::{HomeTheme, ThemeMode};

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;
        let colors = HomeTheme::default().colors;

        let _ = styles::surface(colors.surface_primary)(&theme);
        let _ = styles::gradient(colors.gradient_start, colors.gradient_end)(&theme);
        let _ = styles::scrim(colors.scrim)(&theme);
        let _ = styles::panel(colors.surface_secondary, colors.text_primary)(&theme);
        let _ = styles::caption(colors.surface_caption, colors.text_primary, 0.5)(&theme);
        let _ = styles::tile_placeholder(colors.tile_placeholder)(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::RED_600;
        let _ = spacing::XS;
        let _ = opacity::OVERLAY_MEDIUM;
        let _ = sizing::TILE_HEIGHT;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = HomeTheme::new(ThemeMode::Light);
        let dark = HomeTheme::new(ThemeMode::Dark);

        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
        assert_eq!(light.layout, dark.layout);
    }
}
