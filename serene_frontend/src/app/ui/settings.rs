use eframe::egui::{self, RichText};

use crate::config::{self, AppConfig};
use crate::theme;

use super::super::state::ViewState;
use super::super::SereneApp;
use super::card::{card, section_header};

impl SereneApp {
    pub(crate) fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading("⚙ Settings");
        ui.add_space(12.0);

        egui::ScrollArea::vertical()
            .id_salt("settings_scroll")
            .show(ui, |ui| {
                section_header(ui, "API");
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Backend URL:");
                        ui.text_edit_singleline(&mut self.base_url_input);
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Apply Changes").clicked() {
                            match self.api.set_base_url(self.base_url_input.clone()) {
                                Ok(()) => {
                                    self.base_url_input = self.api.base_url().to_string();
                                    self.info_banner = Some("API URL updated".into());
                                    // Fresh backend, fresh session data.
                                    self.activities.reset();
                                }
                                Err(err) => {
                                    self.info_banner = Some(format!("Failed to update URL: {err}"));
                                }
                            }
                        }
                        if ui.button("Reset to Default").clicked() {
                            self.base_url_input = AppConfig::default().api_url;
                        }
                    });
                });

                section_header(ui, "Account");
                card(ui, |ui| match self.session.user() {
                    Some(user) => {
                        ui.label(format!("User ID: {}", user.id));
                        if let Some(email) = &user.email {
                            ui.label(format!("Email: {email}"));
                        }
                    }
                    None => {
                        ui.label(
                            RichText::new("Set SERENE_USER_ID or user_id in the config file to sign in.")
                                .color(theme::TEXT_MUTED),
                        );
                    }
                });

                section_header(ui, "Local data");
                card(ui, |ui| {
                    let config_file = config::config_path()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "unavailable".into());
                    ui.label(format!("Config file: {config_file}"));
                    let data_dir = self
                        .config
                        .resolved_data_dir()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "in memory only".into());
                    ui.label(format!("Data directory: {data_dir}"));
                    ui.label(format!(
                        "Carousel advances every {} s",
                        self.carousel.interval().as_secs()
                    ));
                });
            });

        ui.add_space(12.0);
        if ui.button("← Back to Home").clicked() {
            self.set_view(ViewState::Home);
        }
    }
}
