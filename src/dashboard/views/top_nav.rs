//! Top navigation bar shown in compact layout

use egui::RichText;

use crate::dashboard::components::{pill_button, ButtonVariant};
use crate::dashboard::state::{DashboardAction, DashboardState, InertControl};
use crate::dashboard::theme::Palette;

pub fn render_top_nav(ui: &mut egui::Ui, palette: &Palette, state: &mut DashboardState) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let home = ui
            .add(pill_button("🏠", ButtonVariant::Ghost, palette))
            .on_hover_text("Home");
        if home.clicked() {
            state.emit(DashboardAction::Inert(InertControl::MobileHome));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(pill_button("➡ Log in / Sign up", ButtonVariant::Primary, palette))
                .clicked()
            {
                state.emit(DashboardAction::Inert(InertControl::LogIn));
            }

            ui.add(
                egui::TextEdit::singleline(&mut state.search.mobile)
                    .hint_text(RichText::new("Search").color(palette.text_muted))
                    .desired_width(ui.available_width()),
            );
        });
    });
    ui.add_space(8.0);
}
