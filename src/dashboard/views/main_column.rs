//! Main column - quick actions, game grid, search and activity feed

use crate::dashboard::components::info_card::card_frame;
use crate::dashboard::components::{
    pill_button, render_game_grid, render_list_card, render_search_panel, ButtonVariant,
};
use crate::dashboard::data::{activity_rows, ACTIVITIES, GAMES, QUICK_ACTIONS, SEARCH_FILTERS};
use crate::dashboard::state::{DashboardAction, DashboardState, InertControl, LayoutMode};
use crate::dashboard::theme::Palette;

/// Render the main column
pub fn render_main_column(
    ui: &mut egui::Ui,
    palette: &Palette,
    state: &mut DashboardState,
    mode: LayoutMode,
    card_progress: f32,
) {
    render_quick_actions(ui, palette, state, mode);

    ui.add_space(24.0);

    // Game cards are wide-layout only
    if mode == LayoutMode::Wide {
        render_game_grid(ui, palette, &GAMES, card_progress);
        ui.add_space(8.0);
    }

    render_search_panel(ui, palette, &SEARCH_FILTERS, state);

    ui.add_space(24.0);

    render_list_card(ui, palette, "📢", "Activity Feed", &activity_rows(&ACTIVITIES));
}

/// Quick actions bar
fn render_quick_actions(
    ui: &mut egui::Ui,
    palette: &Palette,
    state: &mut DashboardState,
    mode: LayoutMode,
) {
    card_frame(palette).inner_margin(12.0).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal_wrapped(|ui| {
            for (idx, &action) in QUICK_ACTIONS.iter().enumerate() {
                let variant = if idx == 0 {
                    ButtonVariant::Secondary
                } else {
                    ButtonVariant::Ghost
                };
                if ui.add(pill_button(action, variant, palette)).clicked() {
                    state.emit(DashboardAction::Inert(InertControl::QuickAction(action)));
                }
            }

            if mode == LayoutMode::Wide {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(pill_button("➡ Log in / Sign up", ButtonVariant::Primary, palette))
                        .clicked()
                    {
                        state.emit(DashboardAction::Inert(InertControl::LogIn));
                    }
                    ui.add(
                        egui::TextEdit::singleline(&mut state.search.quick)
                            .hint_text("Search games")
                            .desired_width(224.0),
                    );
                });
            }
        });
    });
}
