//! Sidebar navigation component

use egui::{Color32, RichText, Rounding, Sense, Vec2};

use crate::dashboard::data::{NavLink, BRAND_ICON, BRAND_NAME};
use crate::dashboard::state::{DashboardAction, DashboardState, InertControl};
use crate::dashboard::theme::{color_with_alpha, Palette};

const THEME_SWITCH_ICON: &str = "🌓";
const THEME_SWITCH_LABEL: &str = "Theme Switch";

/// Render the sidebar: brand, navigation rows and the theme switch.
///
/// The switch sits in its own bottom strip; the brand and nav rows scroll
/// above it when the window is too short to show them all.
pub fn render_sidebar(
    ui: &mut egui::Ui,
    palette: &Palette,
    links: &[NavLink],
    state: &mut DashboardState,
) {
    egui::TopBottomPanel::bottom("sidebar_footer")
        .frame(egui::Frame::none())
        .show_separator_line(true)
        .show_inside(ui, |ui| {
            ui.add_space(4.0);
            if nav_button(ui, palette, THEME_SWITCH_ICON, THEME_SWITCH_LABEL) {
                state.emit(DashboardAction::ToggleTheme);
            }
            ui.add_space(4.0);
        });

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;
            ui.add_space(12.0);

            // Logo/Title
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                egui::Frame::none()
                    .fill(color_with_alpha(palette.primary, 26))
                    .rounding(Rounding::same(12.0))
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(BRAND_ICON).size(16.0));
                    });
                ui.label(
                    RichText::new(BRAND_NAME)
                        .size(16.0)
                        .color(palette.text_primary)
                        .strong(),
                );
            });

            ui.add_space(8.0);

            for link in links {
                if nav_button(ui, palette, link.icon, link.label) {
                    state.emit(DashboardAction::Inert(InertControl::Nav(link.label)));
                }
            }
        });
}

/// Render a navigation row; returns true when clicked
fn nav_button(ui: &mut egui::Ui, palette: &Palette, icon: &str, label: &str) -> bool {
    let available_width = ui.available_width();
    let desired_size = Vec2::new(available_width, 36.0);

    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if response.hovered() {
            palette.hover
        } else {
            Color32::TRANSPARENT
        };

        let text_color = if response.hovered() {
            palette.text_primary
        } else {
            palette.text_secondary
        };

        ui.painter()
            .rect_filled(rect, Rounding::same(16.0), bg_color);

        let icon_pos = rect.left_center() + Vec2::new(14.0, 0.0);
        ui.painter().text(
            icon_pos,
            egui::Align2::LEFT_CENTER,
            icon,
            egui::FontId::proportional(16.0),
            palette.text_primary,
        );

        let label_pos = rect.left_center() + Vec2::new(44.0, 0.0);
        ui.painter().text(
            label_pos,
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(14.0),
            text_color,
        );
    }

    response.on_hover_text(label).clicked()
}
