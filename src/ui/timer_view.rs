use egui::{Align, Button, Frame, Layout, RichText};

use crate::timing::format_elapsed;

use super::{PALETTE_AMBER, PALETTE_BLACK, PALETTE_GRAY, PALETTE_GREEN, PALETTE_RED, PacelineApp};

impl PacelineApp {
    pub(crate) fn timer_view(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls")
            .min_height(90.)
            .show(ctx, |ui| {
                if !self.app_config.capture_permission_granted {
                    return;
                }
                ui.add_space(10.);
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    ui.add_space(20.);
                    if self.stopwatch.is_running() {
                        if ui
                            .add(
                                Button::new(RichText::new("STOP").strong().size(18.))
                                    .fill(PALETTE_RED)
                                    .min_size([120., 48.].into()),
                            )
                            .clicked()
                        {
                            self.stop_and_commit();
                        }
                    } else if ui
                        .add(
                            Button::new(RichText::new("START").strong().size(18.))
                                .fill(PALETTE_GREEN)
                                .min_size([120., 48.].into()),
                        )
                        .clicked()
                    {
                        self.stopwatch.start();
                    }

                    if ui
                        .add(
                            Button::new(RichText::new("RESET").strong().size(18.))
                                .fill(PALETTE_GRAY)
                                .min_size([120., 48.].into()),
                        )
                        .clicked()
                    {
                        self.stopwatch.reset();
                    }

                    if self.stopwatch.is_running()
                        && ui
                            .add(
                                Button::new(RichText::new("LAP").strong().size(18.))
                                    .fill(PALETTE_AMBER)
                                    .min_size([120., 48.].into()),
                            )
                            .clicked()
                    {
                        self.stopwatch.record_lap();
                    }
                });
                ui.add_space(10.);
            });

        // Dark backdrop standing in for the camera viewfinder; the feed is
        // never processed, it only sits behind the readout.
        egui::CentralPanel::default()
            .frame(Frame::new().fill(PALETTE_BLACK))
            .show(ctx, |ui| {
                if !self.app_config.capture_permission_granted {
                    self.permission_prompt(ui);
                    return;
                }

                ui.add_space(40.);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format_elapsed(self.stopwatch.elapsed_ms()))
                            .monospace()
                            .size(48.),
                    );
                    let status = if self.stopwatch.is_running() {
                        "RUNNING"
                    } else {
                        "READY"
                    };
                    ui.label(RichText::new(status).color(PALETTE_GREEN).strong());
                });

                let laps = self.stopwatch.laps();
                if !laps.is_empty() {
                    ui.add_space(30.);
                    ui.label(RichText::new("Lap Times:").strong());
                    let first_shown = laps.len().saturating_sub(3);
                    for (index, lap) in laps.iter().enumerate().skip(first_shown) {
                        ui.label(
                            RichText::new(format!(
                                "Lap {}: {}",
                                index + 1,
                                format_elapsed(*lap)
                            ))
                            .monospace(),
                        );
                    }
                }
            });
    }

    fn permission_prompt(&mut self, ui: &mut egui::Ui) {
        ui.add_space(80.);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Camera Access Required").size(24.).strong());
            ui.add_space(8.);
            ui.label("We need camera access for precise timing during races.");
            ui.add_space(24.);
            if ui
                .add(Button::new(RichText::new("Grant Permission").strong()))
                .clicked()
            {
                self.app_config.capture_permission_granted = true;
            }
        });
    }
}
