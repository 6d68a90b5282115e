use eframe::egui::{self, Color32, RichText};
use strum::IntoEnumIterator;

use crate::app::state::SearchState;
use crate::types::SortMode;
use crate::ui_constants::spacing;

pub struct SearchPanelResponse {
    pub refresh_clicked: bool,
    pub open_logs: bool,
}

/// Header panel: title, search box, sort mode and utility buttons.
/// Editing the query only changes the local filter; it never fetches.
pub fn draw_search_panel(ctx: &egui::Context, search: &mut SearchState) -> SearchPanelResponse {
    let mut refresh_clicked = false;
    let mut open_logs = false;

    egui::TopBottomPanel::top("header_panel")
        .frame(
            egui::Frame::none()
                .fill(Color32::from_rgb(18, 20, 28))
                .inner_margin(egui::Margin::symmetric(spacing::LARGE, spacing::LARGE)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Pokédeck")
                        .size(34.0)
                        .strong()
                        .color(Color32::from_rgb(94, 234, 212)),
                );
                ui.label(
                    RichText::new("Gotta Catch 'Em All!")
                        .small()
                        .color(Color32::from_gray(140)),
                );
            });
            ui.add_space(spacing::MEDIUM);

            ui.horizontal(|ui| {
                let total_w = ui.available_width();
                let search_w = (total_w * 0.5).clamp(220.0, 480.0);
                ui.add_space(((total_w - search_w) / 2.0 - 180.0).max(0.0));

                ui.add(
                    egui::TextEdit::singleline(&mut search.query)
                        .desired_width(search_w)
                        .hint_text("Find your Pokémon..."),
                );

                egui::ComboBox::from_id_source("sort_mode")
                    .selected_text(format!("Sort: {}", search.sort))
                    .show_ui(ui, |ui| {
                        for mode in SortMode::iter() {
                            ui.selectable_value(&mut search.sort, mode, mode.to_string());
                        }
                    });

                ui.add_space(spacing::MEDIUM);
                if ui.button("⟳ Refresh").clicked() {
                    refresh_clicked = true;
                }
                if ui.button("Logs").clicked() {
                    open_logs = true;
                }
            });
            ui.add_space(spacing::SMALL);
        });

    SearchPanelResponse {
        refresh_clicked,
        open_logs,
    }
}
