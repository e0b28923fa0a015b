//! Button variants used across the dashboard

use egui::{Color32, RichText, Rounding, Stroke};

use crate::dashboard::theme::{Palette, CARD_ROUNDING};

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the accent color
    Primary,
    /// Subtle filled background
    Secondary,
    /// No background until hovered
    Ghost,
}

/// Build a rounded button in the given variant
pub fn pill_button(label: &str, variant: ButtonVariant, palette: &Palette) -> egui::Button<'static> {
    let (text_color, fill, stroke) = match variant {
        ButtonVariant::Primary => (Color32::WHITE, palette.primary, Stroke::NONE),
        ButtonVariant::Secondary => (
            palette.text_primary,
            palette.secondary,
            Stroke::new(1.0, palette.border),
        ),
        ButtonVariant::Ghost => (palette.text_primary, Color32::TRANSPARENT, Stroke::NONE),
    };

    egui::Button::new(RichText::new(label.to_owned()).color(text_color))
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(CARD_ROUNDING))
        .min_size(egui::vec2(0.0, 32.0))
}
