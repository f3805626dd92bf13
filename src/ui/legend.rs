//! Depth legend in the bottom-right corner of the map.

use super::colors;
use crate::quake::Legend;
use eframe::egui::{self, Align2, Id, RichText, Sense, Stroke, StrokeKind, Vec2};

const SWATCH_SIZE: f32 = 16.0;

pub fn render_legend(ctx: &egui::Context, legend: &Legend) {
    if legend.bands.is_empty() {
        return;
    }

    egui::Area::new(Id::new("depth_legend"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-10.0, -10.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(legend.title).strong());
                ui.add_space(2.0);

                for band in &legend.bands {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
                        ui.painter().rect(
                            rect,
                            0.0,
                            band.color,
                            Stroke::new(1.0, colors::map::SWATCH_BORDER),
                            StrokeKind::Inside,
                        );
                        ui.label(band.label());
                    });
                }
            });
        });
}
