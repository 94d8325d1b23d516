use egui::{Button, RichText};

use super::{PALETTE_RED, PacelineApp};

impl PacelineApp {
    pub(crate) fn settings_view(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label(RichText::new("Timing Preferences").strong());
            ui.checkbox(
                &mut self.app_config.sound_enabled,
                "Sound effects when starting/stopping the timer",
            );
            ui.checkbox(
                &mut self.app_config.haptics_enabled,
                "Haptic feedback when recording lap times",
            );
            ui.checkbox(
                &mut self.app_config.auto_save,
                "Automatically save completed races",
            );

            ui.add_space(10.);
            ui.horizontal(|ui| {
                ui.label("Rider name:");
                if ui
                    .text_edit_singleline(&mut self.app_config.rider_name)
                    .changed()
                {
                    self.stopwatch
                        .set_rider_name(self.app_config.rider_name.clone());
                }
            });

            ui.add_space(16.);
            ui.label(RichText::new("Camera").strong());
            ui.checkbox(
                &mut self.app_config.capture_permission_granted,
                "Allow camera capture (required to start timing)",
            );

            ui.add_space(16.);
            ui.label(RichText::new("Data Management").strong());
            ui.label(format!("{} races recorded", self.store.races().len()));
            if ui
                .add(Button::new(RichText::new("Clear All History").strong()).fill(PALETTE_RED))
                .clicked()
            {
                self.store.clear_history();
            }
        });
    }
}
