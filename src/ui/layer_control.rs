//! Layer control in the top-right corner of the map.
//!
//! Collapsed to an icon button by default; expanding it lists the base
//! layers as radio buttons and the overlays as checkboxes.

use crate::config::MapConfig;
use crate::state::AppState;
use eframe::egui::{self, Align2, Id, RichText, Vec2};
use egui_phosphor::regular as icons;

pub fn render_layer_control(ctx: &egui::Context, state: &mut AppState, config: &MapConfig) {
    egui::Area::new(Id::new("layer_control"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-10.0, 10.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                let layers = &mut state.layer_state;
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.toggle_value(&mut layers.control_open, RichText::new(icons::STACK).size(18.0))
                        .on_hover_text("Layers");
                });

                if !layers.control_open {
                    return;
                }

                ui.separator();

                for (index, source) in config.base_layers.iter().enumerate() {
                    if ui
                        .radio_value(&mut layers.base_layer, index, source.name.as_str())
                        .changed()
                    {
                        log::info!("Base layer changed to {}", source.name);
                    }
                }

                ui.separator();

                if config.has_plates() {
                    ui.checkbox(&mut layers.show_plates, "Tectonic Plates");
                }
                ui.checkbox(&mut layers.show_earthquakes, "Earthquakes");
            });
        });

    // A hidden marker cannot keep its popup
    if !state.layer_state.show_earthquakes {
        state.selected_quake = None;
    }
}
