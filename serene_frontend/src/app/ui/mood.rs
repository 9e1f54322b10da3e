use eframe::egui::{self, Context, RichText};

use crate::mood::{self, SyncState, MAX_MOOD, MIN_MOOD};
use crate::theme;

use super::super::SereneApp;
use super::card::card;
use super::modal::CustomModal;

impl SereneApp {
    pub(crate) fn render_mood_panel(&mut self, ui: &mut egui::Ui) {
        let mut open_prompt = false;
        card(ui, |ui| {
            ui.label(RichText::new("How are you feeling today?").strong().size(16.0));
            ui.add_space(4.0);

            if !self.session.is_authenticated() {
                ui.label(
                    RichText::new("Sign in to keep track of your mood.").color(theme::TEXT_MUTED),
                );
                return;
            }

            match self.mood.today() {
                Some(today) => {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(mood::emoji_for(today.value)).size(40.0));
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}/10", today.value))
                                    .size(20.0)
                                    .strong()
                                    .color(theme::mood_color(today.value)),
                            );
                            if today.sync == Some(SyncState::Pending) {
                                ui.label(RichText::new("Saving…").small().color(theme::TEXT_MUTED));
                            }
                        });
                    });
                    ui.add_space(4.0);
                    ui.label(today.message);
                    ui.add_space(4.0);
                    if ui.small_button("Update mood").clicked() {
                        open_prompt = true;
                    }
                }
                None if self.mood.is_loading() => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Checking today's check-in…");
                    });
                }
                None => {
                    if ui.button("Log mood").clicked() {
                        open_prompt = true;
                    }
                }
            }
        });
        if open_prompt {
            self.mood.open_prompt();
        }
    }

    pub(crate) fn render_mood_prompt(&mut self, ctx: &Context) {
        if !self.mood.prompt_visible() {
            return;
        }
        let mut open = true;
        let mut picked = None;

        CustomModal::new("mood_prompt", "Daily check-in")
            .width(420.0)
            .show(ctx, &mut open, |ui| {
                ui.label("On a scale of 1 to 10, how is your mood right now?");
                ui.add_space(8.0);
                egui::Grid::new("mood_prompt_grid")
                    .num_columns(5)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        for value in MIN_MOOD..=MAX_MOOD {
                            let button = egui::Button::new(
                                RichText::new(format!("{}\n{value}", mood::emoji_for(value)))
                                    .size(18.0),
                            )
                            .min_size(egui::vec2(64.0, 56.0))
                            .fill(theme::ACCENT_SOFT);
                            if ui.add(button).clicked() {
                                picked = Some(value);
                            }
                            if value % 5 == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });

        if let Some(value) = picked {
            self.spawn_submit_mood(value);
        } else if !open {
            self.mood.dismiss_prompt();
        }
    }
}
