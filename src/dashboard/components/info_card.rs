//! Card container and read-only list card

use egui::{RichText, Rounding, Stroke};

use crate::dashboard::theme::{Palette, CARD_ROUNDING};

/// Frame shared by every dashboard card
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.border))
        .rounding(Rounding::same(CARD_ROUNDING))
        .inner_margin(16.0)
}

/// A titled card with arbitrary content
pub fn show_card<R>(
    ui: &mut egui::Ui,
    palette: &Palette,
    icon: &str,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(16.0));
            ui.label(
                RichText::new(title)
                    .size(16.0)
                    .color(palette.text_primary)
                    .strong(),
            );
        });

        ui.add_space(8.0);
        add_contents(ui)
    })
}

/// A titled card showing one line per row, in order
pub fn render_list_card(
    ui: &mut egui::Ui,
    palette: &Palette,
    icon: &str,
    title: &str,
    rows: &[String],
) -> egui::Response {
    show_card(ui, palette, icon, title, |ui| {
        for row in rows {
            ui.label(RichText::new(row).size(14.0).color(palette.text_primary));
        }
    })
    .response
}
