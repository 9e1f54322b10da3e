use eframe::egui::{self, Color32, InnerResponse, RichText, Rounding, Stroke};

use crate::theme;

use super::super::state::ImageState;

fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(theme::CARD)
        .rounding(Rounding::same(theme::CARD_ROUNDING))
        .stroke(Stroke::new(1.0, theme::ACCENT_SOFT))
        .inner_margin(egui::Margin::same(14.0))
}

/// Rounded white surface every home section sits on, stretched to the full width.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> InnerResponse<R> {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        add_contents(ui)
    })
}

/// Same surface with a fixed content width, for horizontally scrolling rows.
pub fn fixed_card<R>(
    ui: &mut egui::Ui,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> InnerResponse<R> {
    card_frame().show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(add_contents).inner
    })
}

pub fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).size(18.0).strong());
    ui.add_space(2.0);
}

/// Draws a downloaded image or a placeholder of the same size.
/// Returns true when the texture is not available yet and should be requested.
pub fn remote_image(ui: &mut egui::Ui, images: &ImageState, url: &str, size: egui::Vec2) -> bool {
    if let Some(texture) = images.texture(url) {
        ui.add(
            egui::Image::from_texture(texture)
                .fit_to_exact_size(size)
                .rounding(Rounding::same(10.0)),
        );
        return false;
    }

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, Rounding::same(10.0), theme::ACCENT_SOFT);
    let failed = url.is_empty() || images.is_failed(url);
    let glyph = if failed { "🌿" } else { "⏳" };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(28.0),
        Color32::from_gray(140),
    );
    !failed
}
