//! Dashboard UI Module
//!
//! The Woopen Gamers dashboard: navigation sidebar, game grid, search panel
//! and a column of read-only widgets, with a light/dark theme switch.

pub mod app;
pub mod components;
pub mod data;
pub mod state;
pub mod theme;
pub mod views;

pub use app::run_dashboard;
