use eframe::egui::{self, Align2, Color32, FontId, Pos2};

use super::card::CardData;
use super::tilt;
use crate::ui_constants::card as card_c;

/// Two-column stats block under the badges, plus a centred base
/// experience line at the bottom of the card.
pub fn draw_stats_grid(painter: &egui::Painter, corners: &[Pos2; 4], data: &CardData, alpha: f32) {
    let label_font = FontId::proportional(12.0);
    let value_font = FontId::proportional(13.0);
    let label_color = Color32::from_gray(150).gamma_multiply(alpha);
    let value_color = Color32::from_gray(225).gamma_multiply(alpha);

    let rows: [(&str, String); 4] = [
        ("Height", format!("{:.1} m", data.height_m)),
        ("Weight", format!("{:.1} kg", data.weight_kg)),
        ("Ability", data.ability.clone()),
        ("Speed", data.speed.clone()),
    ];

    // Two rows of two cells: labels over values, like a small stat plaque.
    for (i, (label, value)) in rows.iter().enumerate() {
        let col = i % 2;
        let row = i / 2;
        let u = if col == 0 { 0.28 } else { 0.72 };
        let v = card_c::STATS_TOP_V + row as f32 * 2.0 * card_c::STATS_ROW_STEP_V;

        painter.text(
            tilt::quad_point(corners, u, v),
            Align2::CENTER_CENTER,
            *label,
            label_font.clone(),
            label_color,
        );
        painter.text(
            tilt::quad_point(corners, u, v + card_c::STATS_ROW_STEP_V * 0.8),
            Align2::CENTER_CENTER,
            value,
            value_font.clone(),
            value_color,
        );
    }

    painter.text(
        tilt::quad_point(corners, 0.5, card_c::BASE_EXP_V),
        Align2::CENTER_CENTER,
        format!("Base Exp: {}", data.base_exp),
        FontId::proportional(12.0),
        Color32::from_gray(170).gamma_multiply(alpha),
    );
}
