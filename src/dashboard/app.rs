//! Dashboard application entry point

use eframe::egui;
use tracing::{debug, info};

use crate::config::{AppConfig, LayoutConfig, WindowConfig};
use crate::dashboard::components::render_sidebar;
use crate::dashboard::data::NAV_LINKS;
use crate::dashboard::state::{
    entrance_progress, DashboardAction, DashboardState, LayoutMode, Theme,
};
use crate::dashboard::theme::{self, Palette};
use crate::dashboard::views::{render_main_column, render_top_nav, render_widgets_column};

/// The main dashboard application
pub struct DashboardApp {
    /// Dashboard state; owns the theme flag
    state: DashboardState,
    /// Layout settings
    layout: LayoutConfig,
    /// Theme last pushed into the egui context
    applied_theme: Option<Theme>,
    /// Input time of the first frame, used for the card entrance animation
    mounted_at: Option<f64>,
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            state: DashboardState::default(),
            layout,
            applied_theme: None,
            mounted_at: None,
        }
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Create eframe options for the dashboard window
    pub fn options(window: &WindowConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([window.width, window.height])
                .with_min_inner_size([window.min_width, window.min_height])
                .with_title(window.title.clone()),
            ..Default::default()
        }
    }

    /// Push the theme into egui when it differs from the applied one
    fn sync_theme(&mut self, ctx: &egui::Context) {
        let theme = self.state.theme();
        if self.applied_theme != Some(theme) {
            theme::apply_theme(ctx, theme);
            debug!("Applied {} palette", theme);
            self.applied_theme = Some(theme);
        }
    }

    /// Card entrance progress for this frame
    fn card_progress(&mut self, ctx: &egui::Context) -> f32 {
        if !self.layout.animate_cards {
            return 1.0;
        }

        let now = ctx.input(|i| i.time);
        let mounted_at = *self.mounted_at.get_or_insert(now);
        let progress = entrance_progress(now - mounted_at);
        if progress < 1.0 {
            ctx.request_repaint();
        }
        progress
    }

    /// Draw one frame and apply the actions it produced.
    ///
    /// Returns the applied actions; a pass egui will discard applies none.
    pub fn ui(&mut self, ctx: &egui::Context) -> Vec<DashboardAction> {
        self.sync_theme(ctx);

        let palette = Palette::for_theme(self.state.theme());
        let width = ctx.screen_rect().width();
        let mode = LayoutMode::for_width(width, self.layout.compact_breakpoint);
        let card_progress = self.card_progress(ctx);

        match mode {
            LayoutMode::Compact => {
                egui::TopBottomPanel::top("mobile_nav").show(ctx, |ui| {
                    render_top_nav(ui, palette, &mut self.state);
                });
            }
            LayoutMode::Wide => {
                egui::SidePanel::left("sidebar")
                    .resizable(false)
                    .exact_width(self.layout.sidebar_width)
                    .show(ctx, |ui| {
                        render_sidebar(ui, palette, &NAV_LINKS, &mut self.state);
                    });

                egui::SidePanel::right("sidebar_features")
                    .resizable(false)
                    .exact_width(self.layout.widgets_width)
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical().show(ui, |ui| {
                            ui.add_space(16.0);
                            render_widgets_column(ui, palette);
                        });
                    });
            }
        }

        let content_max_width = self.layout.content_max_width;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none().inner_margin(16.0).show(ui, |ui| {
                    ui.set_max_width(content_max_width);
                    render_main_column(ui, palette, &mut self.state, mode, card_progress);
                });
            });
        });

        // A discarded pass is re-run, so its clicks will be seen again
        if ctx.will_discard() {
            self.state.discard_actions();
            Vec::new()
        } else {
            self.state.process_actions()
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let _ = self.ui(ctx);
    }
}

/// Run the dashboard window (blocking)
pub fn run_dashboard(config: &AppConfig) -> Result<(), eframe::Error> {
    info!("Opening dashboard window");
    let app = DashboardApp::new(config.layout.clone());
    eframe::run_native(
        &config.window.title,
        DashboardApp::options(&config.window),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::data::{leaderboard_rows, NAV_LINKS, LEADERBOARD};
    use crate::dashboard::state::InertControl;
    use egui::{Event, Modifiers, PointerButton, Pos2, Rect, Vec2};

    const WIDE: Vec2 = Vec2::new(1400.0, 900.0);

    /// x coordinate inside the sidebar
    const SIDEBAR_X: f32 = 100.0;

    fn run_frame(
        app: &mut DashboardApp,
        ctx: &egui::Context,
        size: Vec2,
        time: f64,
        events: Vec<Event>,
    ) -> (Vec<DashboardAction>, egui::FullOutput) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, size)),
            time: Some(time),
            events,
            ..Default::default()
        };
        let mut applied = Vec::new();
        let output = ctx.run(input, |ctx| applied.extend(app.ui(ctx)));
        (applied, output)
    }

    fn frame(app: &mut DashboardApp, ctx: &egui::Context, size: Vec2, time: f64) -> Vec<DashboardAction> {
        run_frame(app, ctx, size, time, Vec::new()).0
    }

    /// Press in one frame, release in the next
    fn click(
        app: &mut DashboardApp,
        ctx: &egui::Context,
        size: Vec2,
        pos: Pos2,
        time: f64,
    ) -> Vec<DashboardAction> {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        };

        let mut applied = run_frame(app, ctx, size, time, vec![Event::PointerMoved(pos), button(true)]).0;
        applied.extend(run_frame(app, ctx, size, time + 0.05, vec![button(false)]).0);
        applied
    }

    /// Click down the sidebar, one freshly mounted dashboard per click
    fn sidebar_sweep(size: Vec2) -> Vec<(f32, Vec<DashboardAction>)> {
        let ctx = egui::Context::default();
        let mut results = Vec::new();
        let mut time = 0.0;
        let mut y = 2.0;
        while y < size.y {
            let mut app = DashboardApp::new(LayoutConfig::default());
            frame(&mut app, &ctx, size, time);
            let applied = click(&mut app, &ctx, size, Pos2::new(SIDEBAR_X, y), time + 1.0);
            results.push((y, applied));
            y += 6.0;
            time += 10.0;
        }
        results
    }

    fn find_y(sweep: &[(f32, Vec<DashboardAction>)], action: DashboardAction) -> f32 {
        sweep
            .iter()
            .find(|(_, applied)| applied.as_slice() == [action])
            .map(|(y, _)| *y)
            .unwrap_or_else(|| panic!("no sidebar position produced {:?}", action))
    }

    fn drawn_texts(output: &egui::FullOutput) -> Vec<String> {
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_mount_starts_light_and_draws_leaderboard_in_order() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(LayoutConfig::default());

        let (applied, output) = run_frame(&mut app, &ctx, Vec2::new(1400.0, 2000.0), 0.0, Vec::new());

        assert!(applied.is_empty());
        assert_eq!(app.theme(), Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);

        let texts = drawn_texts(&output);
        let rows = leaderboard_rows(&LEADERBOARD);
        assert_eq!(
            rows,
            vec!["🏆 PlayerOne – 1200 pts", "🥈 GamerX – 950 pts", "🥉 ProHero – 870 pts"]
        );

        let positions: Vec<usize> = rows
            .iter()
            .map(|row| {
                let matches = texts.iter().filter(|t| *t == row).count();
                assert_eq!(matches, 1, "leaderboard row {:?} drawn {} times", row, matches);
                texts.iter().position(|t| t == row).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_every_sidebar_row_clickable_at_minimum_height() {
        let size = Vec2::new(1400.0, WindowConfig::default().min_height);
        let sweep = sidebar_sweep(size);

        for (y, applied) in &sweep {
            assert!(applied.len() <= 1, "y={} applied {:?}", y, applied);
        }
        for link in &NAV_LINKS {
            find_y(&sweep, DashboardAction::Inert(InertControl::Nav(link.label)));
        }
        let notes = find_y(&sweep, DashboardAction::Inert(InertControl::Nav("Notes")));
        let toggle = find_y(&sweep, DashboardAction::ToggleTheme);
        assert!(notes < toggle);
    }

    #[test]
    fn test_theme_switch_click_toggles_exactly_once() {
        let toggle_y = find_y(&sidebar_sweep(WIDE), DashboardAction::ToggleTheme);
        let pos = Pos2::new(SIDEBAR_X, toggle_y);

        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(LayoutConfig::default());
        frame(&mut app, &ctx, WIDE, 0.0);

        let applied = click(&mut app, &ctx, WIDE, pos, 1.0);
        assert_eq!(applied, vec![DashboardAction::ToggleTheme]);
        assert_eq!(app.theme(), Theme::Dark);

        // palette follows on the next frame
        frame(&mut app, &ctx, WIDE, 2.0);
        assert!(ctx.style().visuals.dark_mode);

        let applied = click(&mut app, &ctx, WIDE, pos, 3.0);
        assert_eq!(applied, vec![DashboardAction::ToggleTheme]);
        assert_eq!(app.theme(), Theme::Light);

        frame(&mut app, &ctx, WIDE, 4.0);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_nav_click_leaves_theme_unchanged() {
        let chat = DashboardAction::Inert(InertControl::Nav("Chat"));
        let chat_y = find_y(&sidebar_sweep(WIDE), chat);

        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(LayoutConfig::default());
        frame(&mut app, &ctx, WIDE, 0.0);

        let applied = click(&mut app, &ctx, WIDE, Pos2::new(SIDEBAR_X, chat_y), 1.0);
        assert_eq!(applied, vec![chat]);
        assert_eq!(app.theme(), Theme::Light);

        frame(&mut app, &ctx, WIDE, 2.0);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_inert_actions_survive_frames_unchanged() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(LayoutConfig::default());

        for (step, label) in ["Home", "Chat", "Notes"].into_iter().enumerate() {
            app.state_mut()
                .emit(DashboardAction::Inert(InertControl::Nav(label)));
            app.state_mut()
                .emit(DashboardAction::Inert(InertControl::Filter("Genre")));
            frame(&mut app, &ctx, WIDE, step as f64);
            assert_eq!(app.theme(), Theme::Light);
        }
    }

    #[test]
    fn test_compact_layout_hides_sidebar() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(LayoutConfig::default());
        let size = Vec2::new(400.0, 900.0);

        let (_, output) = run_frame(&mut app, &ctx, size, 0.0, Vec::new());
        let texts = drawn_texts(&output);

        assert!(!texts.iter().any(|t| t == "Theme Switch"));
        assert!(!texts.iter().any(|t| t == "Notes"));
        assert!(texts.iter().any(|t| t == "Advanced Search & Filters"));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_card_progress_tracks_mount_time() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(LayoutConfig::default());

        frame(&mut app, &ctx, WIDE, 5.0);
        assert_eq!(app.mounted_at, Some(5.0));

        frame(&mut app, &ctx, WIDE, 6.0);
        assert_eq!(app.mounted_at, Some(5.0));
    }

    #[test]
    fn test_card_animation_can_be_disabled() {
        let ctx = egui::Context::default();
        let layout = LayoutConfig {
            animate_cards: false,
            ..LayoutConfig::default()
        };
        let mut app = DashboardApp::new(layout);

        frame(&mut app, &ctx, WIDE, 0.0);
        assert_eq!(app.mounted_at, None);
    }

    #[test]
    fn test_window_options() {
        let window = WindowConfig::default();
        let options = DashboardApp::options(&window);
        assert_eq!(
            options.viewport.inner_size,
            Some(egui::vec2(window.width, window.height))
        );
        assert_eq!(options.viewport.title.as_deref(), Some("Woopen Gamers"));
    }
}
