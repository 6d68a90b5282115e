// App state and the per-frame UI. Data fetching and the tokio runtime live
// in submodules to keep the update loop readable.

use eframe::egui::{self, RichText};
use eframe::App;

use crate::api::Pokemon;
use crate::ui_constants::{CARD_GAP, CARD_WIDTH};
use crate::views::search::draw_search_panel;

mod fetch;
mod grid;
mod logs_ui;
mod runtime;
pub mod search;
pub(crate) mod state;

pub use runtime::rt;
use state::{NetState, SearchState, SpritesState};

pub struct DeckApp {
    pub(crate) search: SearchState,
    pub(crate) net: NetState,
    pub(crate) sprites: SpritesState,
}

impl Default for DeckApp {
    fn default() -> Self {
        Self {
            search: SearchState::default(),
            net: NetState::new(),
            sprites: SpritesState::new(),
        }
    }
}

impl App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        // Incoming async messages (aggregate result, sprite images)
        self.poll_incoming(ctx);

        // First frame kicks off the aggregate fetch. Failures stay on screen
        // until the user retries; there are no automatic retries.
        if self.net.catalog.is_none() && self.net.last_error.is_none() && !self.net.loading {
            self.start_fetch(ctx);
        }

        // Header: title, search box, sort mode, refresh/logs buttons.
        // The query filters already-fetched data only; typing never fetches.
        let header = draw_search_panel(ctx, &mut self.search);
        if header.refresh_clicked {
            self.start_fetch(ctx);
        }
        if header.open_logs {
            logs_ui::open_logs();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail_w = ui.available_width().floor();
                    let card_w = CARD_WIDTH;
                    let gap = CARD_GAP;

                    let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
                    if cols == 0 {
                        cols = 1;
                    }
                    let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
                    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

                    if let Some(err) = &self.net.last_error {
                        let err = err.clone();
                        ui.add_space(48.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("Error loading Pokémon")
                                    .heading()
                                    .color(egui::Color32::from_rgb(220, 80, 80)),
                            );
                            ui.add_space(8.0);
                            ui.label(RichText::new(err).color(egui::Color32::from_gray(170)));
                            ui.add_space(16.0);
                            if ui.button("Try Again").clicked() {
                                self.start_fetch(ctx);
                            }
                        });
                    } else if self.net.loading && self.net.catalog.is_none() {
                        ui.add_space(48.0);
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Spinner::new().size(32.0));
                            ui.add_space(8.0);
                            ui.label("Loading Pokémon...");
                        });
                    } else if self.net.catalog.is_some() {
                        // Clone data so we don't hold an immutable borrow of
                        // `self` across a call that needs `&mut self`.
                        let catalog: Vec<Pokemon> =
                            self.net.catalog.as_ref().cloned().unwrap_or_default();

                        let mut shown = search::filter_by_name(&catalog, &self.search.query);
                        self.search.sort.apply(&mut shown);

                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(format!(
                                    "Found {} of {} Pokémon",
                                    shown.len(),
                                    catalog.len()
                                ))
                                .color(egui::Color32::from_gray(150)),
                            );
                        });
                        ui.add_space(16.0);

                        self.draw_cards_grid(ui, ctx, &shown, cols, left_pad, gap, card_w);

                        if shown.is_empty() && !self.search.query.is_empty() {
                            ui.add_space(32.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "No Pokémon found matching \"{}\"",
                                        self.search.query
                                    ))
                                    .color(egui::Color32::from_gray(150)),
                                );
                            });
                        }
                    }
                });
        });

        // Logs window (separate OS viewport)
        logs_ui::draw_logs_viewport(ctx);
    }
}
