// Logs window (separate OS viewport): the in-app log buffer with a minimum
// severity filter, whole-line level colouring and the usual utilities.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::Mutex;

use crate::logger::{self, LogEntry};

struct LogsPanel {
    open: bool,
    autoscroll: bool,
    min_level: Level,
}

lazy_static! {
    // The viewport callback is deferred (may run off the main pass), so the
    // panel state cannot live on the app struct.
    static ref PANEL: Mutex<LogsPanel> = Mutex::new(LogsPanel {
        open: false,
        autoscroll: true,
        min_level: Level::Trace,
    });
}

pub fn open_logs() {
    if let Ok(mut p) = PANEL.lock() {
        p.open = true;
    }
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    let open = PANEL.lock().map(|p| p.open).unwrap_or(false);
    if !open {
        return;
    }

    ctx.show_viewport_deferred(
        egui::ViewportId::from_hash_of("logs_window"),
        egui::ViewportBuilder::default()
            .with_title("Logs")
            .with_inner_size([760.0, 480.0])
            .with_resizable(true),
        |ctx, _class| {
            // OS close (X): mark closed and shut the viewport down.
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut p) = PANEL.lock() {
                    p.open = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            let (mut autoscroll, mut min_level) = PANEL
                .lock()
                .map(|p| (p.autoscroll, p.min_level))
                .unwrap_or((true, Level::Trace));

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        logger::clear();
                    }
                    if ui.button("Copy").clicked() {
                        let text = logger::get_all().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    ui.checkbox(&mut autoscroll, "Autoscroll");

                    egui::ComboBox::from_id_source("logs_min_level")
                        .selected_text(format!("{min_level}+"))
                        .show_ui(ui, |ui| {
                            for level in
                                [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error]
                            {
                                ui.selectable_value(&mut min_level, level, level.to_string());
                            }
                        });

                    ui.separator();
                    ui.label(format!("{} buffered", logger::len()));
                });
                ui.separator();

                // The severity filter changes the row count between frames,
                // so snapshot the visible subset and virtualize over that.
                let rows: Vec<LogEntry> = logger::filtered(min_level);
                let mut area = egui::ScrollArea::vertical().auto_shrink([false, false]);
                if autoscroll {
                    area = area.stick_to_bottom(true);
                }
                let row_h = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                area.show_rows(ui, row_h, rows.len(), |ui, range| {
                    for e in &rows[range] {
                        let line = format!("[{:>5}] {}: {}", e.level, e.target, e.msg);
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .color(level_color(e.level)),
                        );
                    }
                });
            });

            if let Ok(mut p) = PANEL.lock() {
                p.autoscroll = autoscroll;
                p.min_level = min_level;
            }
        },
    );
}

fn level_color(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_rgb(200, 200, 200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}
