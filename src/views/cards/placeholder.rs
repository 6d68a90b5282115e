use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use super::card::CardResponse;
use crate::ui_constants::{card as card_c, spacing, CARD_HEIGHT};

/// Fixed-size stand-in for a card whose data could not be displayed.
/// The failure stays local: the rest of the grid renders normally and
/// the retry button only re-requests this card's resources.
pub fn draw_error_placeholder(ui: &mut egui::Ui, id: u32, width: f32) -> CardResponse {
    let mut retry_clicked = false;

    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, CARD_HEIGHT), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return CardResponse {
            retry_clicked: false,
        };
    }

    let painter = ui.painter_at(rect);
    let rounding = Rounding::same(card_c::ROUNDING);
    painter.rect_filled(rect, rounding, Color32::from_rgba_unmultiplied(40, 30, 34, 235));
    painter.rect_stroke(
        rect,
        rounding,
        Stroke::new(1.5, Color32::from_rgb(160, 70, 70)),
    );

    let mut content = ui.child_ui(
        rect.shrink(spacing::LARGE),
        egui::Layout::top_down(egui::Align::Center),
    );
    content.add_space(CARD_HEIGHT * 0.38);
    content.label(
        RichText::new("Failed to load Pokémon")
            .size(16.0)
            .color(Color32::from_rgb(230, 150, 150)),
    );
    content.add_space(spacing::MEDIUM);
    content.push_id(("card_retry", id), |ui| {
        if ui.button("Retry").clicked() {
            retry_clicked = true;
        }
    });

    CardResponse { retry_clicked }
}
