#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: window configuration and app startup.
// All logic lives in the app module (src/app.rs) and its submodules.

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod api;
mod app;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Initialize in-app GUI logger (also mirrors to stderr when asked)
    logger::init();

    // Low-latency presentation: the tilt effect re-renders on every pointer
    // sample, so vsync is off.
    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Pokédeck",
        native_options,
        Box::new(|_cc| Box::new(app::DeckApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
