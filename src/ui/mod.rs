pub mod config;
mod history_view;
mod settings_view;
mod timer_view;

use std::time::Duration;

use config::AppConfig;
use egui::{Color32, Visuals, style::Widgets};
use log::error;

use crate::history::{JsonFileHistory, RaceStore};
use crate::timing::{SAMPLE_INTERVAL_MS, Stopwatch, SystemClock};

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(16, 185, 129);
pub(crate) const PALETTE_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub(crate) const PALETTE_GRAY: Color32 = Color32::from_rgb(107, 114, 128);
pub(crate) const PALETTE_AMBER: Color32 = Color32::from_rgb(245, 158, 11);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Timer,
    History,
    Settings,
}

/// `PacelineApp` is the desktop shell around the stopwatch and race store.
///
/// It renders three tabs mirroring the mobile app's screens: the timer with
/// its viewfinder backdrop, the race history, and the settings. While the
/// stopwatch is running the shell schedules a repaint every sampling interval
/// and feeds a tick to the state machine on each frame; leaving the running
/// state stops the scheduling, which is the sampler cancellation the core
/// relies on.
pub struct PacelineApp {
    stopwatch: Stopwatch<SystemClock>,
    store: RaceStore<JsonFileHistory>,
    app_config: AppConfig,
    active_tab: Tab,
}

impl PacelineApp {
    pub fn new(
        store: RaceStore<JsonFileHistory>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            faint_bg_color: PALETTE_BLACK,
            panel_fill: PALETTE_BLACK,
            button_frame: true,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let mut stopwatch = Stopwatch::new(SystemClock);
        stopwatch.set_rider_name(app_config.rider_name.clone());

        Self {
            stopwatch,
            store,
            app_config,
            active_tab: Tab::Timer,
        }
    }

    /// Commit the current session if it carried any elapsed time.
    fn stop_and_commit(&mut self) {
        if let Some(race) = self.stopwatch.stop() {
            if let Err(e) = self.store.add_race(race) {
                error!("Could not record race: {}", e);
            }
        }
    }
}

impl eframe::App for PacelineApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.stopwatch.tick();

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, Tab::Timer, "Timer");
                ui.selectable_value(&mut self.active_tab, Tab::History, "History");
                ui.selectable_value(&mut self.active_tab, Tab::Settings, "Settings");
            });
        });

        match self.active_tab {
            Tab::Timer => self.timer_view(ctx, _frame),
            Tab::History => self.history_view(ctx, _frame),
            Tab::Settings => self.settings_view(ctx, _frame),
        }

        // The recurring sampler: one repaint per interval while running,
        // nothing scheduled once the session stops.
        if self.stopwatch.is_running() {
            ctx.request_repaint_after(Duration::from_millis(SAMPLE_INTERVAL_MS));
        }
    }
}
