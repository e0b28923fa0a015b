//! Dashboard view state management

use std::fmt;
use tracing::{debug, info};

/// Color scheme of the whole dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Responsive layout, picked from the available width each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Top bar only; side columns and game grid hidden
    Compact,
    /// Sidebar, main column and widget column
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

/// Visible controls that have no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertControl {
    Nav(&'static str),
    QuickAction(&'static str),
    Filter(&'static str),
    LogIn,
    MobileHome,
}

/// Something the user did during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    ToggleTheme,
    Inert(InertControl),
}

/// Text typed into the search inputs. Never read back.
#[derive(Debug, Default)]
pub struct SearchInputs {
    pub mobile: String,
    pub quick: String,
    pub advanced: String,
}

/// Overall dashboard state
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Current theme; the only application state that changes
    pub theme: Theme,
    /// Search input buffers
    pub search: SearchInputs,
    /// Actions emitted while rendering the current frame
    pending: Vec<DashboardAction>,
}

impl DashboardState {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Queue an action to be applied after the frame is drawn
    pub fn emit(&mut self, action: DashboardAction) {
        self.pending.push(action);
    }

    /// Apply every queued action in emission order; returns what was applied
    pub fn process_actions(&mut self) -> Vec<DashboardAction> {
        let pending = std::mem::take(&mut self.pending);
        for &action in &pending {
            self.handle(action);
        }
        pending
    }

    /// Drop queued actions without applying them
    pub fn discard_actions(&mut self) {
        self.pending.clear();
    }

    pub fn handle(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::ToggleTheme => {
                self.theme.toggle();
                info!("Theme switched to {}", self.theme);
            }
            DashboardAction::Inert(control) => {
                debug!("Inert control pressed: {:?}", control);
            }
        }
    }
}

/// Duration of the game card entrance animation, in seconds
pub const CARD_ENTRANCE_SECS: f64 = 0.3;

/// Vertical distance game cards travel while entering
pub const CARD_ENTRANCE_OFFSET: f32 = 12.0;

/// Entrance animation progress in `[0, 1]` after `elapsed` seconds
pub fn entrance_progress(elapsed: f64) -> f32 {
    if elapsed <= 0.0 {
        0.0
    } else {
        (elapsed / CARD_ENTRANCE_SECS).min(1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::data::{NAV_LINKS, QUICK_ACTIONS, SEARCH_FILTERS};

    fn all_inert_actions() -> Vec<DashboardAction> {
        let mut actions: Vec<_> = NAV_LINKS
            .iter()
            .map(|link| DashboardAction::Inert(InertControl::Nav(link.label)))
            .collect();
        actions.extend(
            QUICK_ACTIONS
                .iter()
                .map(|&label| DashboardAction::Inert(InertControl::QuickAction(label))),
        );
        actions.extend(
            SEARCH_FILTERS
                .iter()
                .map(|&label| DashboardAction::Inert(InertControl::Filter(label))),
        );
        actions.push(DashboardAction::Inert(InertControl::LogIn));
        actions.push(DashboardAction::Inert(InertControl::MobileHome));
        actions
    }

    #[test]
    fn test_initial_theme_is_light() {
        let state = DashboardState::default();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.theme().name(), "light");
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut state = DashboardState::default();

        state.handle(DashboardAction::ToggleTheme);
        assert_eq!(state.theme(), Theme::Dark);

        state.handle(DashboardAction::ToggleTheme);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_toggled_never_leaves_two_values() {
        let mut theme = Theme::default();
        for _ in 0..11 {
            theme.toggle();
            assert!(matches!(theme, Theme::Light | Theme::Dark));
        }
        // odd number of toggles from light
        assert_eq!(theme, Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_inert_controls_leave_theme_unchanged() {
        let mut state = DashboardState::default();
        for action in all_inert_actions() {
            state.handle(action);
            assert_eq!(state.theme(), Theme::Light);
        }

        state.handle(DashboardAction::ToggleTheme);
        for action in all_inert_actions() {
            state.handle(action);
            assert_eq!(state.theme(), Theme::Dark);
        }
    }

    #[test]
    fn test_queued_actions_apply_in_order() {
        let mut state = DashboardState::default();
        state.emit(DashboardAction::ToggleTheme);
        state.emit(DashboardAction::Inert(InertControl::LogIn));
        state.emit(DashboardAction::ToggleTheme);
        state.emit(DashboardAction::ToggleTheme);

        // nothing applies until processed
        assert_eq!(state.theme(), Theme::Light);

        let applied = state.process_actions();
        assert_eq!(applied.len(), 4);
        assert_eq!(applied[1], DashboardAction::Inert(InertControl::LogIn));
        assert_eq!(state.theme(), Theme::Dark);

        // queue is drained
        assert!(state.process_actions().is_empty());
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_discarded_actions_are_not_applied() {
        let mut state = DashboardState::default();
        state.emit(DashboardAction::ToggleTheme);
        state.discard_actions();
        assert!(state.process_actions().is_empty());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_typing_in_search_does_not_touch_theme() {
        let mut state = DashboardState::default();
        state.search.advanced.push_str("rpg");
        state.search.quick.push_str("arcade");
        state.process_actions();
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_layout_mode_breakpoint() {
        assert_eq!(LayoutMode::for_width(767.9, 768.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(768.0, 768.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(1400.0, 768.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(0.0, 768.0), LayoutMode::Compact);
    }

    #[test]
    fn test_entrance_progress() {
        assert_eq!(entrance_progress(-1.0), 0.0);
        assert_eq!(entrance_progress(0.0), 0.0);
        assert!((entrance_progress(0.15) - 0.5).abs() < 0.001);
        assert_eq!(entrance_progress(CARD_ENTRANCE_SECS), 1.0);
        assert_eq!(entrance_progress(10.0), 1.0);

        let mut last = 0.0;
        for step in 0..40 {
            let p = entrance_progress(step as f64 * 0.01);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
