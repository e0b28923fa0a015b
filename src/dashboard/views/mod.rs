//! Dashboard views

pub mod main_column;
pub mod top_nav;
pub mod widgets_column;

pub use main_column::render_main_column;
pub use top_nav::render_top_nav;
pub use widgets_column::render_widgets_column;
