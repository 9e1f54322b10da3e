use eframe::egui::{self, RichText};

use crate::theme;

use super::super::SereneApp;
use super::card::section_header;

impl SereneApp {
    pub(crate) fn render_home(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("home_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let name = self
                    .session
                    .profile()
                    .map(|profile| profile.greeting_name().to_string())
                    .unwrap_or_else(|| "there".to_string());
                ui.label(RichText::new(format!("Hello, {name}")).size(24.0).strong());
                ui.label(RichText::new("Take a moment for yourself today.").color(theme::TEXT_MUTED));
                ui.add_space(8.0);

                self.render_mood_panel(ui);

                section_header(ui, "Upcoming events");
                self.render_carousel(ui);

                section_header(ui, "Recent activities");
                self.render_activities(ui);

                section_header(ui, "Explore");
                self.render_tabs(ui);
                ui.add_space(16.0);
            });
    }
}
