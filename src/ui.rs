// src/ui.rs
use egui;

use shadow_caster::canvas::palette;
use shadow_caster::scene::Scene;
use shadow_caster::selection::Mode;

fn color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Fills the reserved strip at the top of the window with mode help.
pub fn build_ui(ctx: &egui::Context, scene: &Scene) {
    let strip = scene.config().control_strip_height as f32;
    egui::TopBottomPanel::top("control_strip")
        .exact_height(strip)
        .resizable(false)
        .frame(egui::Frame::default().fill(color32(palette::CONTROL_STRIP)).inner_margin(8.0))
        .show(ctx, |ui| {
            let (title, help) = match scene.mode() {
                Mode::Select => ("Draw walls", "Left click: first endpoint   Right click: delete walls at point"),
                Mode::Pending(_) => ("Draw walls", "Left click: second endpoint   Right click: cancel"),
                Mode::Cast => ("Cast light", "Move the mouse to move the light"),
            };
            ui.heading(title);
            ui.label(help);
            ui.label("C: clear all   Tab/→: cast light   Shift+Tab/←: back to drawing   Esc: quit");
            ui.label(format!(
                "{} wall(s), {} shadow(s)",
                scene.occluders().len(),
                scene.last_shadows().len()
            ));
        });
}
