//! Earthquake popup shown above a clicked marker.

use super::colors;
use crate::quake::PopupContent;
use eframe::egui::{self, Align2, Id, Order, Pos2, RichText, Vec2};
use egui_phosphor::regular as icons;

/// Gap between the marker edge and the popup.
const POPUP_GAP: f32 = 6.0;

/// Shows the popup for a marker at `anchor`. Returns true if it was closed.
pub fn render_popup(
    ctx: &egui::Context,
    anchor: Pos2,
    marker_radius: f32,
    content: &PopupContent,
) -> bool {
    let mut closed = false;

    egui::Area::new(Id::new("quake_popup"))
        .order(Order::Foreground)
        .fixed_pos(anchor - Vec2::new(0.0, marker_radius + POPUP_GAP))
        .pivot(Align2::CENTER_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(280.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&content.title).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.small_button(icons::X).on_hover_text("Close").clicked() {
                            closed = true;
                        }
                        if ui
                            .small_button(icons::COPY)
                            .on_hover_text("Copy details")
                            .clicked()
                        {
                            ui.ctx().copy_text(content.to_text());
                        }
                    });
                });

                ui.separator();

                egui::Grid::new("quake_popup_grid")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        for (label, value) in &content.rows {
                            ui.label(RichText::new(*label).color(colors::ui::LABEL));
                            ui.label(RichText::new(value).color(colors::ui::VALUE));
                            ui.end_row();
                        }
                    });
            });
        });

    closed
}
