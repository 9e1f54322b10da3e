//! Soft palette used across the home screen.

use eframe::egui::{self, Color32, Rounding, Stroke};

pub const ACCENT: Color32 = Color32::from_rgb(108, 142, 230);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(226, 233, 252);
pub const SURFACE: Color32 = Color32::from_rgb(250, 250, 253);
pub const CARD: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 124, 140);
pub const LIKED: Color32 = Color32::from_rgb(232, 88, 112);
pub const REPOSTED: Color32 = Color32::from_rgb(70, 170, 120);

const MOOD_LOW: Color32 = Color32::from_rgb(238, 132, 120);
const MOOD_MID: Color32 = Color32::from_rgb(244, 200, 110);
const MOOD_HIGH: Color32 = Color32::from_rgb(120, 200, 150);

pub const CARD_ROUNDING: f32 = 14.0;

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Warm for low scores, green for high ones.
pub fn mood_color(value: u8) -> Color32 {
    let t = (value.clamp(1, 10) - 1) as f32 / 9.0;
    if t < 0.5 {
        lerp(MOOD_LOW, MOOD_MID, t * 2.0)
    } else {
        lerp(MOOD_MID, MOOD_HIGH, (t - 0.5) * 2.0)
    }
}

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = SURFACE;
    visuals.window_fill = CARD;
    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, ACCENT_SOFT);
    visuals.selection.bg_fill = ACCENT_SOFT;
    visuals.selection.stroke.color = ACCENT;
    visuals.hyperlink_color = ACCENT;
    visuals.widgets.inactive.rounding = Rounding::same(10.0);
    visuals.widgets.hovered.rounding = Rounding::same(10.0);
    visuals.widgets.active.rounding = Rounding::same(10.0);
    visuals.widgets.active.bg_fill = ACCENT;
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_scale_endpoints() {
        assert_eq!(mood_color(1), MOOD_LOW);
        assert_eq!(mood_color(10), MOOD_HIGH);
        assert_eq!(mood_color(0), MOOD_LOW);
        assert_eq!(mood_color(200), MOOD_HIGH);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = lerp(Color32::from_rgb(0, 0, 0), Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}
