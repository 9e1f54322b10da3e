use eframe::egui::{self, RichText};

use crate::theme;

use super::super::state::ViewState;
use super::super::SereneApp;

impl SereneApp {
    pub(crate) fn render_top_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🌿 Serene").size(18.0).strong().color(theme::ACCENT));
            ui.separator();
            for (view, label) in [
                (ViewState::Home, "Home"),
                (ViewState::Catalog, "Events"),
                (ViewState::Settings, "Settings"),
            ] {
                if ui.selectable_label(self.view == view, label).clicked() {
                    self.set_view(view);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let who = self
                    .session
                    .user()
                    .map(|user| user.email.clone().unwrap_or_else(|| user.id.clone()));
                match who {
                    Some(who) => {
                        if ui.button("Sign out").clicked() {
                            self.sign_out();
                        }
                        ui.label(RichText::new(who).color(theme::TEXT_MUTED));
                    }
                    None => {
                        ui.label(RichText::new("Not signed in").color(theme::TEXT_MUTED));
                    }
                }
            });
        });

        if let Some(message) = self.info_banner.clone() {
            let mut dismiss = false;
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(message.as_str());
                        if ui.button("Dismiss").clicked() {
                            dismiss = true;
                        }
                    });
                });
            if dismiss {
                self.info_banner = None;
            }
        }
    }
}
