//! Right-hand widget column

use egui::RichText;

use crate::dashboard::components::{render_list_card, show_card};
use crate::dashboard::data::{
    achievement_rows, friend_rows, leaderboard_rows, notification_rows, UserProfile,
    ACHIEVEMENTS, FRIENDS, LEADERBOARD, NOTIFICATIONS, USER,
};
use crate::dashboard::theme::Palette;

/// Gap between widget cards
const WIDGET_SPACING: f32 = 16.0;

/// Render profile, notifications, friends, leaderboard and achievements
pub fn render_widgets_column(ui: &mut egui::Ui, palette: &Palette) {
    render_profile_card(ui, palette, &USER);
    ui.add_space(WIDGET_SPACING);

    render_list_card(ui, palette, "🔔", "Notifications", &notification_rows(&NOTIFICATIONS));
    ui.add_space(WIDGET_SPACING);

    render_list_card(ui, palette, "👥", "Friends Online", &friend_rows(&FRIENDS));
    ui.add_space(WIDGET_SPACING);

    render_list_card(ui, palette, "📊", "Leaderboard", &leaderboard_rows(&LEADERBOARD));
    ui.add_space(WIDGET_SPACING);

    render_list_card(ui, palette, "🏅", "Achievements", &achievement_rows(&ACHIEVEMENTS));
}

fn render_profile_card(ui: &mut egui::Ui, palette: &Palette, user: &UserProfile) {
    show_card(ui, palette, "👤", user.name, |ui| {
        for row in user.rows() {
            ui.label(RichText::new(row).size(14.0).color(palette.text_primary));
        }
    });
}
