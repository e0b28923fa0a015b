//! Dashboard theme and styling
//!
//! Light and dark palettes for the dashboard UI. Components read colors from
//! the active [`Palette`] instead of hard-coding them, so a theme switch
//! recolors the whole tree.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::dashboard::state::Theme;

/// Corner radius shared by cards and buttons
pub const CARD_ROUNDING: f32 = 16.0;

/// Colors used by every dashboard component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // Background colors
    pub background: Color32,
    pub card: Color32,
    pub muted: Color32,
    pub hover: Color32,

    // Accent colors
    pub primary: Color32,
    pub secondary: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Border colors
    pub border: Color32,
    pub border_focus: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(250, 250, 252),
        card: Color32::from_rgb(255, 255, 255),
        muted: Color32::from_rgb(241, 242, 246),
        hover: Color32::from_rgb(232, 234, 240),
        primary: Color32::from_rgb(37, 99, 235),
        secondary: Color32::from_rgb(226, 232, 240),
        text_primary: Color32::from_rgb(15, 23, 42),
        text_secondary: Color32::from_rgb(71, 85, 105),
        text_muted: Color32::from_rgb(100, 116, 139),
        border: Color32::from_rgb(226, 232, 240),
        border_focus: Color32::from_rgb(37, 99, 235),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(18, 18, 24),
        card: Color32::from_rgb(28, 28, 36),
        muted: Color32::from_rgb(38, 38, 48),
        hover: Color32::from_rgb(48, 48, 60),
        primary: Color32::from_rgb(88, 166, 255),
        secondary: Color32::from_rgb(38, 38, 48),
        text_primary: Color32::from_rgb(240, 240, 245),
        text_secondary: Color32::from_rgb(160, 160, 175),
        text_muted: Color32::from_rgb(100, 100, 115),
        border: Color32::from_rgb(50, 50, 65),
        border_focus: Color32::from_rgb(88, 166, 255),
    };

    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &Self::LIGHT,
            Theme::Dark => &Self::DARK,
        }
    }
}

/// Build egui visuals for a theme
pub fn visuals_for(theme: Theme) -> Visuals {
    let palette = Palette::for_theme(theme);
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    // Window and panel backgrounds
    visuals.window_fill = palette.card;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.muted;
    visuals.extreme_bg_color = palette.card;

    // Widget colors
    visuals.widgets.noninteractive.bg_fill = palette.card;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_secondary);
    visuals.widgets.noninteractive.rounding = Rounding::same(CARD_ROUNDING);

    visuals.widgets.inactive.bg_fill = palette.muted;
    visuals.widgets.inactive.weak_bg_fill = palette.muted;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.inactive.rounding = Rounding::same(CARD_ROUNDING);

    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.hovered.weak_bg_fill = palette.hover;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.hovered.rounding = Rounding::same(CARD_ROUNDING);

    visuals.widgets.active.bg_fill = palette.primary;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.active.rounding = Rounding::same(CARD_ROUNDING);

    visuals.widgets.open.bg_fill = palette.hover;
    visuals.widgets.open.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.open.rounding = Rounding::same(CARD_ROUNDING);

    // Selection and interaction
    visuals.selection.bg_fill = color_with_alpha(palette.primary, 77); // ~0.3 alpha
    visuals.selection.stroke = Stroke::new(1.0, palette.border_focus);

    visuals.hyperlink_color = palette.primary;

    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, palette.border);
    visuals.menu_rounding = Rounding::same(8.0);

    visuals
}

/// Apply a theme to egui
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let mut style = (*ctx.style()).clone();

    style.visuals = visuals_for(theme);

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(16.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(16.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), &Palette::LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), &Palette::DARK);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }

    #[test]
    fn test_visuals_follow_theme() {
        assert!(!visuals_for(Theme::Light).dark_mode);
        assert!(visuals_for(Theme::Dark).dark_mode);
        assert_eq!(visuals_for(Theme::Dark).panel_fill, Palette::DARK.background);
        assert_eq!(visuals_for(Theme::Light).panel_fill, Palette::LIGHT.background);
    }

    #[test]
    fn test_apply_theme_sets_context_style() {
        let ctx = egui::Context::default();

        apply_theme(&ctx, Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);

        apply_theme(&ctx, Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = color_with_alpha(Color32::from_rgb(10, 20, 30), 128);
        assert_eq!(color.a(), 128);
    }
}
