use chrono::{DateTime, Local};
use egui::{Align, Button, Layout, RichText, ScrollArea};

use crate::timing::format_elapsed;

use super::{PALETTE_AMBER, PALETTE_RED, PacelineApp};

impl PacelineApp {
    pub(crate) fn history_view(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Race History");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if !self.store.races().is_empty()
                        && ui
                            .add(Button::new(RichText::new("Clear All").strong()).fill(PALETTE_RED))
                            .clicked()
                    {
                        self.store.clear_history();
                    }
                });
            });

            if let Some(warning) = self.store.persist_warning() {
                ui.colored_label(
                    PALETTE_AMBER,
                    format!("History could not be saved to disk: {}", warning),
                );
            }
            ui.separator();

            if self.store.races().is_empty() {
                ui.add_space(60.);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No Races Recorded").size(20.).strong());
                    ui.label("Start timing races to see your history here.");
                });
                return;
            }

            let mut delete_requested: Option<String> = None;
            ScrollArea::vertical().show(ui, |ui| {
                // Most recent race first; storage keeps append order.
                for race in self.store.races().iter().rev() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&race.rider_name).strong());
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.small_button("Delete").clicked() {
                                    delete_requested = Some(race.id.clone());
                                }
                                let finished: DateTime<Local> = race.end_time.into();
                                ui.label(
                                    RichText::new(
                                        finished.format("%Y-%m-%d %H:%M").to_string(),
                                    )
                                    .weak(),
                                );
                            });
                        });
                        ui.label(
                            RichText::new(format_elapsed(race.total_time_ms))
                                .monospace()
                                .size(22.),
                        );
                        if race.lap_times_ms.len() > 1 {
                            ui.label(RichText::new("Lap Times:").weak());
                            for (index, lap) in race.lap_times_ms.iter().enumerate() {
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
                    ui.add_space(6.);
                }
            });

            if let Some(id) = delete_requested {
                self.store.delete_race(&id);
            }
        });
    }
}
