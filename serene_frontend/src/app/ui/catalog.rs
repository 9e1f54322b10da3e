use eframe::egui::{self, RichText};

use crate::events;
use crate::models::Event;
use crate::theme;

use super::super::state::{ModalContent, ViewState};
use super::super::SereneApp;
use super::card::{card, remote_image};

enum CatalogAction {
    Add(Event),
    Remove(String),
    Details(Event),
}

impl SereneApp {
    pub(crate) fn render_catalog(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("← Home").clicked() {
                self.set_view(ViewState::Home);
            }
            ui.heading("Browse events");
        });
        ui.label(
            RichText::new(format!("{} saved to your upcoming list", self.events.len()))
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(8.0);

        let mut action: Option<CatalogAction> = None;
        let mut needs_image = Vec::new();

        egui::ScrollArea::vertical()
            .id_salt("catalog_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in events::catalog() {
                    let saved = self.events.contains(&event.id);
                    card(ui, |ui| {
                        ui.horizontal(|ui| {
                            if remote_image(ui, &self.images, &event.image, egui::vec2(120.0, 80.0)) {
                                needs_image.push(event.image.clone());
                            }
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&event.title).strong().size(16.0));
                                ui.label(
                                    RichText::new(format!("{} · {}", event.date, event.location))
                                        .color(theme::TEXT_MUTED),
                                );
                                ui.label(RichText::new(format!("by {}", event.organizer)).small());
                                ui.horizontal(|ui| {
                                    if saved {
                                        if ui.button("✓ Saved · Remove").clicked() {
                                            action = Some(CatalogAction::Remove(event.id.clone()));
                                        }
                                    } else if ui.button("+ Add to upcoming").clicked() {
                                        action = Some(CatalogAction::Add(event.clone()));
                                    }
                                    if ui.button("Details").clicked() {
                                        action = Some(CatalogAction::Details(event.clone()));
                                    }
                                });
                            });
                        });
                    });
                    ui.add_space(6.0);
                }
            });

        match action {
            Some(CatalogAction::Add(event)) => {
                self.events.add(event);
            }
            Some(CatalogAction::Remove(id)) => {
                self.events.remove(&id);
            }
            Some(CatalogAction::Details(event)) => {
                self.modal = Some(ModalContent::EventDetails(event));
            }
            None => {}
        }
        for url in needs_image {
            self.spawn_load_image(&url);
        }
    }
}
