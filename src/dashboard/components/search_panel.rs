//! Advanced search & filters panel
//!
//! The input accepts text and the filter buttons accept clicks, but neither
//! filters anything.

use crate::dashboard::components::{pill_button, show_card, ButtonVariant};
use crate::dashboard::state::{DashboardAction, DashboardState, InertControl};
use crate::dashboard::theme::Palette;

const SEARCH_HINT: &str = "Search by genre, rating, platform...";

pub fn render_search_panel(
    ui: &mut egui::Ui,
    palette: &Palette,
    filters: &[&'static str],
    state: &mut DashboardState,
) {
    show_card(ui, palette, "🔍", "Advanced Search & Filters", |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.search.advanced)
                .hint_text(SEARCH_HINT)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for &filter in filters {
                if ui.add(pill_button(filter, ButtonVariant::Secondary, palette)).clicked() {
                    state.emit(DashboardAction::Inert(InertControl::Filter(filter)));
                }
            }
        });
    });
}
