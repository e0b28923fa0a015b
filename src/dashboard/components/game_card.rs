//! Game preview cards and the two-column game grid

use egui::{RichText, Rounding, Sense, Vec2};

use crate::dashboard::components::info_card::card_frame;
use crate::dashboard::data::GameEntry;
use crate::dashboard::state::CARD_ENTRANCE_OFFSET;
use crate::dashboard::theme::Palette;

/// Number of columns in the game grid
pub const GRID_COLUMNS: usize = 2;

/// Render the game grid in array order, row by row.
///
/// `progress` is the entrance animation progress in `[0, 1]`. Returns the
/// number of cards drawn.
pub fn render_game_grid(
    ui: &mut egui::Ui,
    palette: &Palette,
    games: &[GameEntry],
    progress: f32,
) -> usize {
    let mut drawn = 0;
    for row in games.chunks(GRID_COLUMNS) {
        ui.columns(GRID_COLUMNS, |columns| {
            for (column, game) in columns.iter_mut().zip(row) {
                render_game_card(column, palette, game, progress);
                drawn += 1;
            }
        });
        ui.add_space(16.0);
    }
    drawn
}

/// Render a single game card
pub fn render_game_card(ui: &mut egui::Ui, palette: &Palette, game: &GameEntry, progress: f32) {
    ui.set_opacity(progress);
    ui.add_space(CARD_ENTRANCE_OFFSET * (1.0 - progress));

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Title and subtitle on one line
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(game.title)
                    .size(16.0)
                    .color(palette.text_primary)
                    .strong(),
            );
            ui.label(RichText::new(game.subtitle).size(13.0).color(palette.text_muted));
        });

        ui.add_space(8.0);

        // 4:3 preview area
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, width * 3.0 / 4.0), Sense::hover());
        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, Rounding::same(12.0), palette.muted);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Game preview",
                egui::FontId::proportional(13.0),
                palette.text_secondary,
            );
        }
        response.on_hover_text(game.label());

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("♡ Rating").size(13.0).color(palette.text_secondary));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("Most played").size(13.0).color(palette.text_secondary));
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::data::GAMES;

    fn run_headless(add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1200.0, 2000.0),
            )),
            ..Default::default()
        };
        let mut add_contents = add_contents;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    #[test]
    fn test_grid_draws_one_card_per_game() {
        let mut drawn = 0;
        run_headless(|ui| {
            drawn = render_game_grid(ui, &Palette::LIGHT, &GAMES, 1.0);
        });

        assert_eq!(drawn, 4);
        let titles: Vec<_> = GAMES.iter().map(|g| g.title).collect();
        assert_eq!(
            titles,
            vec!["Best game", "Spotlight Game", "Arcade Frenzy", "Puzzle Master"]
        );
    }

    #[test]
    fn test_grid_with_odd_count() {
        let mut drawn = 0;
        run_headless(|ui| {
            drawn = render_game_grid(ui, &Palette::DARK, &GAMES[..3], 0.5);
        });
        assert_eq!(drawn, 3);
    }

    #[test]
    fn test_empty_grid() {
        let mut drawn = usize::MAX;
        run_headless(|ui| {
            drawn = render_game_grid(ui, &Palette::LIGHT, &[], 1.0);
        });
        assert_eq!(drawn, 0);
    }
}
