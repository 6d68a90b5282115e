use eframe::egui;

use crate::api::Pokemon;
use crate::ui_constants::CARD_HEIGHT;
use crate::views::cards::pokemon_card;

/// Grid rendering split from app.rs: centred responsive columns with
/// virtualized rows (only rows intersecting the viewport are laid out).
impl super::DeckApp {
    fn on_card_ui(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        p: &Pokemon,
        ordinal: usize,
        card_w: f32,
        gap: f32,
        c: usize,
        cols: usize,
    ) {
        ui.vertical(|ui| {
            ui.set_min_width(card_w);
            ui.set_max_width(card_w);

            let resp = {
                let sprite = self.sprites.textures.get(&p.id);
                let sprite_failed = self.sprites.failed.contains(&p.id);
                pokemon_card(ui, p, ordinal, card_w, sprite, sprite_failed)
            };

            if resp.retry_clicked {
                // Per-card retry: forget the failed sprite and re-request it.
                // Card data extraction is recomputed every frame anyway.
                self.sprites.failed.remove(&p.id);
                self.schedule_sprite_downloads(ctx);
                ctx.request_repaint();
            }
        });
        if c + 1 < cols {
            ui.add_space(gap);
        }
    }

    pub(super) fn draw_cards_grid(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        data: &[&Pokemon],
        cols: usize,
        left_pad: f32,
        gap: f32,
        card_w: f32,
    ) {
        let total_items = data.len();
        if total_items == 0 || cols == 0 {
            return;
        }
        let cols = cols.max(1);
        let total_rows = (total_items + cols - 1) / cols;

        // Cards have a fixed height, so row geometry is trivial.
        let row_h = CARD_HEIGHT + gap;

        let start_y = ui.cursor().min.y;
        let clip = ui.clip_rect();

        let mut first_row = ((clip.top() - start_y) / row_h).floor() as isize;
        let mut last_row = ((clip.bottom() - start_y) / row_h).ceil() as isize;

        // Overscan a bit for smoothness
        let overscan: isize = 1;
        first_row = (first_row - overscan).max(0);
        last_row = (last_row + overscan).min(total_rows as isize);

        let start_row = first_row as usize;
        let end_row = last_row as usize;

        let top_skip = (start_row as f32) * row_h;
        if top_skip > 0.0 {
            ui.add_space(top_skip);
        }

        for r in start_row..end_row {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                let base = r * cols;
                for c in 0..cols {
                    if let Some(p) = data.get(base + c) {
                        self.on_card_ui(ui, ctx, p, base + c, card_w, gap, c, cols);
                    }
                }
            });
            ui.add_space(gap);
        }

        // Trailing space for rows below the visible range keeps the
        // scrollbar honest.
        let rendered_rows = end_row.saturating_sub(start_row) as f32;
        let bottom_skip = ((total_rows as f32) * row_h - top_skip - rendered_rows * row_h).max(0.0);
        if bottom_skip > 0.0 {
            ui.add_space(bottom_skip);
        }
    }
}
