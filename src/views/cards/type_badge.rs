use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Rounding};

use super::card::CardData;
use super::tilt;
use crate::ui_constants::card as card_c;

/// Accent colour per type, matching the classic game palette.
pub fn type_glow_color(kind: &str) -> Color32 {
    match kind {
        "normal" => Color32::from_rgb(168, 168, 120),
        "fire" => Color32::from_rgb(240, 128, 48),
        "water" => Color32::from_rgb(104, 144, 240),
        "electric" => Color32::from_rgb(248, 208, 48),
        "grass" => Color32::from_rgb(120, 200, 80),
        "ice" => Color32::from_rgb(152, 216, 216),
        "fighting" => Color32::from_rgb(192, 48, 40),
        "poison" => Color32::from_rgb(160, 64, 160),
        "ground" => Color32::from_rgb(224, 192, 104),
        "flying" => Color32::from_rgb(168, 144, 240),
        "psychic" => Color32::from_rgb(248, 88, 136),
        "bug" => Color32::from_rgb(168, 184, 32),
        "rock" => Color32::from_rgb(184, 160, 56),
        "ghost" => Color32::from_rgb(112, 88, 152),
        "dragon" => Color32::from_rgb(112, 56, 248),
        "dark" => Color32::from_rgb(112, 88, 72),
        "steel" => Color32::from_rgb(184, 184, 208),
        "fairy" => Color32::from_rgb(238, 153, 172),
        _ => Color32::from_gray(130),
    }
}

/// Row of type badges, centred at the BADGES_V anchor of the card quad.
pub fn draw_type_badges(
    ui: &egui::Ui,
    painter: &egui::Painter,
    corners: &[Pos2; 4],
    data: &CardData,
    alpha: f32,
) {
    if data.types.is_empty() {
        return;
    }

    let font = FontId::proportional(13.0);
    let pad_x = 10.0;
    let gap = 6.0;

    // Measure first so the row can be centred as a whole.
    let galleys: Vec<_> = ui.fonts(|f| {
        data.types
            .iter()
            .map(|t| f.layout_no_wrap(t.clone(), font.clone(), Color32::WHITE))
            .collect()
    });
    let widths: Vec<f32> = galleys.iter().map(|g| g.size().x + 2.0 * pad_x).collect();
    let total_w: f32 = widths.iter().sum::<f32>() + gap * (widths.len() - 1) as f32;

    let centre = tilt::quad_point(corners, 0.5, card_c::BADGES_V);
    let mut x = centre.x - total_w / 2.0;
    for (t, w) in data.types.iter().zip(widths) {
        let badge = Rect::from_min_size(
            egui::pos2(x, centre.y - card_c::BADGE_HEIGHT / 2.0),
            egui::vec2(w, card_c::BADGE_HEIGHT),
        );
        let raw = t.to_lowercase();
        painter.rect_filled(
            badge,
            Rounding::same(card_c::BADGE_ROUNDING),
            type_glow_color(&raw).gamma_multiply(alpha),
        );
        painter.text(
            badge.center(),
            Align2::CENTER_CENTER,
            t,
            font.clone(),
            Color32::WHITE.gamma_multiply(alpha),
        );
        x += w + gap;
    }
}
