use eframe::egui::{self, RichText};

use crate::activities::{activity_icon, ActivitiesState};
use crate::models::Activity;
use crate::theme;

use super::super::{format_timestamp, SereneApp};
use super::card::card;

pub fn activity_row(ui: &mut egui::Ui, activity: &Activity) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(activity_icon(&activity.kind)).size(20.0));
        ui.vertical(|ui| {
            ui.label(&activity.description);
            ui.label(
                RichText::new(format_timestamp(&activity.created_at))
                    .small()
                    .color(theme::TEXT_MUTED),
            );
        });
    });
}

impl SereneApp {
    pub(crate) fn render_activities(&mut self, ui: &mut egui::Ui) {
        card(ui, |ui| {
            if !self.session.is_authenticated() {
                ui.label(RichText::new("Sign in to see your activity.").color(theme::TEXT_MUTED));
                return;
            }
            match self.activities.state() {
                ActivitiesState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading recent activity…");
                    });
                }
                ActivitiesState::Empty => {
                    ui.label(
                        RichText::new("Nothing here yet. Your check-ins and sessions will show up here.")
                            .color(theme::TEXT_MUTED),
                    );
                }
                ActivitiesState::Populated(list) => {
                    for (index, activity) in list.iter().enumerate() {
                        if index > 0 {
                            ui.separator();
                        }
                        activity_row(ui, activity);
                    }
                }
            }
        });
    }
}
