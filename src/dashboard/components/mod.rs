//! Reusable UI components for the dashboard

pub mod buttons;
pub mod game_card;
pub mod info_card;
pub mod search_panel;
pub mod sidebar;

pub use buttons::{pill_button, ButtonVariant};
pub use game_card::render_game_grid;
pub use info_card::{render_list_card, show_card};
pub use search_panel::render_search_panel;
pub use sidebar::render_sidebar;
