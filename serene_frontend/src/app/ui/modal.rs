use eframe::egui::{self, Align2, Context, RichText};

use crate::theme;

use super::super::state::ModalContent;
use super::super::SereneApp;

/// Centered, non-collapsible dialog shared by the mood prompt and detail views.
pub struct CustomModal<'a> {
    id: &'a str,
    title: &'a str,
    width: f32,
}

impl<'a> CustomModal<'a> {
    pub fn new(id: &'a str, title: &'a str) -> Self {
        Self {
            id,
            title,
            width: 380.0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Shows the modal while `open` is true. The close button and the window's
    /// own X both clear it.
    pub fn show<R>(
        self,
        ctx: &Context,
        open: &mut bool,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<R> {
        if !*open {
            return None;
        }
        let mut close_clicked = false;
        let result = egui::Window::new(RichText::new(self.title).strong())
            .id(egui::Id::new(self.id))
            .collapsible(false)
            .resizable(false)
            .default_width(self.width)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(open)
            .show(ctx, |ui| {
                let inner = add_contents(ui);
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
                inner
            })
            .and_then(|response| response.inner);
        if close_clicked {
            *open = false;
        }
        result
    }
}

impl SereneApp {
    pub(crate) fn render_modal(&mut self, ctx: &Context) {
        let Some(content) = self.modal.clone() else {
            return;
        };
        let mut open = true;

        match content {
            ModalContent::EventDetails(event) => {
                let mut toggle = false;
                let saved = self.events.contains(&event.id);
                CustomModal::new("event_details", &event.title).show(ctx, &mut open, |ui| {
                    ui.label(RichText::new(event.status.label()).color(theme::ACCENT));
                    ui.add_space(4.0);
                    ui.label(&event.description);
                    ui.add_space(8.0);
                    egui::Grid::new("event_details_grid")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("When").strong());
                            ui.label(&event.date);
                            ui.end_row();
                            ui.label(RichText::new("Where").strong());
                            ui.label(&event.location);
                            ui.end_row();
                            ui.label(RichText::new("Host").strong());
                            ui.label(&event.organizer);
                            ui.end_row();
                        });
                    ui.add_space(8.0);
                    let label = if saved {
                        "Remove from upcoming"
                    } else {
                        "Add to upcoming"
                    };
                    if ui.button(label).clicked() {
                        toggle = true;
                    }
                });
                if toggle {
                    if saved {
                        self.events.remove(&event.id);
                    } else {
                        self.events.add(event.clone());
                    }
                    open = false;
                }
            }
            ModalContent::QuickAction(action) => {
                let title = format!("{} {}", action.icon, action.title);
                CustomModal::new("quick_action", &title).show(ctx, &mut open, |ui| {
                    ui.label(action.description);
                });
            }
        }

        if !open {
            self.modal = None;
        }
    }
}
