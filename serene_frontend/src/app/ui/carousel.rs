use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::carousel;
use crate::models::Event;
use crate::theme;

use super::super::state::{ImageState, ModalContent, ViewState};
use super::super::SereneApp;
use super::card::{card, fixed_card, remote_image};

const ITEM_GAP: f32 = 12.0;
const IMAGE_HEIGHT: f32 = 140.0;

/// One event tile. Click opens details; long-press (right-click on desktop) removes.
pub fn carousel_item(
    ui: &mut egui::Ui,
    event: &Event,
    images: &ImageState,
    width: f32,
    needs_image: &mut Vec<String>,
) -> egui::Response {
    let inner = fixed_card(ui, width, |ui| {
        if remote_image(ui, images, &event.image, egui::vec2(width, IMAGE_HEIGHT)) {
            needs_image.push(event.image.clone());
        }
        ui.add_space(6.0);
        ui.label(RichText::new(&event.title).strong().size(16.0));
        ui.label(RichText::new(format!("📅 {}", event.date)).color(theme::TEXT_MUTED));
        ui.label(RichText::new(format!("📍 {}", event.location)).color(theme::TEXT_MUTED));
        ui.label(RichText::new(event.status.label()).small().color(theme::ACCENT));
    });
    inner.response.interact(egui::Sense::click())
}

/// Placeholder shown instead of the carousel when nothing is saved.
/// Returns true when the user asks to browse events.
pub fn empty_events_carousel(ui: &mut egui::Ui) -> bool {
    card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("🗓").size(32.0));
            ui.label(RichText::new("No upcoming events yet").strong());
            ui.label(
                RichText::new("Find a workshop, walk or support circle that suits you.")
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(6.0);
            let browse = ui.button("Browse events").clicked();
            ui.add_space(8.0);
            browse
        })
        .inner
    })
    .inner
}

fn pager_dots(ui: &mut egui::Ui, len: usize, current: usize) -> Option<usize> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for index in 0..len {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::click());
            let color = if index == current {
                theme::ACCENT
            } else {
                theme::ACCENT_SOFT
            };
            ui.painter().circle_filled(rect.center(), 4.0, color);
            if response.clicked() {
                picked = Some(index);
            }
        }
    });
    picked
}

impl SereneApp {
    pub(crate) fn render_carousel(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        self.carousel.set_len(self.events.len(), now);

        if self.events.is_empty() {
            if empty_events_carousel(ui) {
                self.set_view(ViewState::Catalog);
            }
            return;
        }

        self.carousel.tick(now);
        let scroll_target = self.carousel.take_scroll_request();
        let current = self.carousel.current_index();
        let item_width = (ui.available_width() - 40.0).clamp(220.0, 420.0);
        // Card frame adds its margin and stroke on both sides.
        let stride = item_width + 2.0 * 15.0 + ITEM_GAP;

        let mut removed: Option<String> = None;
        let mut opened: Option<Event> = None;
        let mut needs_image = Vec::new();

        let output = egui::ScrollArea::horizontal()
            .id_salt("events_carousel")
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = ITEM_GAP;
                    for (index, event) in self.events.events().iter().enumerate() {
                        let response =
                            carousel_item(ui, event, &self.images, item_width, &mut needs_image);
                        if scroll_target == Some(index) {
                            response.scroll_to_me(Some(egui::Align::Min));
                        }
                        if response.long_touched() || response.secondary_clicked() {
                            removed = Some(event.id.clone());
                        } else if response.clicked() {
                            opened = Some(event.clone());
                        }
                        if index == current {
                            response.on_hover_text("Hold or right-click to remove");
                        }
                    }
                });
            });

        let hovered = ui.rect_contains_pointer(output.inner_rect);
        let interacting = ui.input(|i| {
            carousel::is_scroll_gesture(
                hovered,
                i.pointer.is_decidedly_dragging(),
                i.raw_scroll_delta.length(),
            )
        });
        let max_offset = (output.content_size.x - output.inner_rect.width()).max(0.0);
        let mut offset = output.state.offset.x;
        // The last card can never be scrolled flush left, so the end of the range maps to it.
        if max_offset > 0.0 && offset >= max_offset - 1.0 {
            offset = (self.events.len() - 1) as f32 * stride;
        }
        self.carousel.observe_scroll(offset, stride, interacting);

        if let Some(index) = pager_dots(ui, self.events.len(), self.carousel.current_index()) {
            self.carousel.jump_to(index);
        }

        if let Some(id) = removed {
            if self.events.remove(&id) {
                self.carousel.set_len(self.events.len(), now);
            }
        } else if let Some(event) = opened {
            self.modal = Some(ModalContent::EventDetails(event));
        }

        for url in needs_image {
            self.spawn_load_image(&url);
        }

        if let Some(wait) = self.carousel.time_until_tick(now) {
            ui.ctx().request_repaint_after(wait);
        }
        if self.carousel.is_scrolling() || self.carousel.has_scroll_request() {
            ui.ctx().request_repaint();
        }
    }
}
