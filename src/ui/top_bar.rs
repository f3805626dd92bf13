//! Top bar UI: app title, feed status and counts.

use super::colors;
use crate::config::MapConfig;
use crate::quake::FeedKind;
use crate::state::AppState;
use eframe::egui::{self, RichText};

/// Title of the map; the plates are only named when they are shown.
fn title(config: &MapConfig) -> &'static str {
    if config.has_plates() {
        "Earthquakes & Tectonic Plates"
    } else {
        "Earthquakes"
    }
}

pub fn render_top_bar(
    ctx: &egui::Context,
    state: &AppState,
    config: &MapConfig,
    loading: bool,
) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // App title
                ui.label(
                    RichText::new(title(config))
                        .strong()
                        .size(16.0)
                        .color(colors::ui::TITLE),
                );

                ui.separator();

                if loading {
                    ui.spinner();
                }

                // Status text
                let status_color = if state.failed_feeds.is_empty() {
                    colors::ui::LABEL
                } else {
                    colors::ui::ERROR
                };
                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(status_color),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(plates) = &state.plates {
                        feed_count(ui, "Plate lines", plates.line_count());
                    } else if state.failed_feeds.contains(&FeedKind::Plates) {
                        ui.label(
                            RichText::new("Plates unavailable")
                                .size(12.0)
                                .color(colors::ui::ERROR),
                        );
                    }
                    feed_count(ui, "Earthquakes", state.earthquakes.len());
                });
            });
        });
}

fn feed_count(ui: &mut egui::Ui, label: &str, count: usize) {
    ui.label(
        RichText::new(count.to_string())
            .monospace()
            .size(12.0)
            .color(colors::ui::VALUE),
    );
    ui.label(
        RichText::new(format!("{}:", label))
            .size(12.0)
            .color(colors::ui::LABEL),
    );
}
