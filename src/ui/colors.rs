//! Centralized color constants for the UI.
//!
//! This module provides consistent colors across the panels and map
//! overlays.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels.
    pub const LABEL: Color32 = Color32::from_rgb(140, 140, 140);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(200, 200, 200);
    /// Title text.
    pub const TITLE: Color32 = Color32::WHITE;
    /// Failed feed indicator.
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
}

/// Colors drawn directly on the map canvas.
pub mod map {
    use super::Color32;

    /// Canvas background behind the tiles.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// Attribution box behind the credit text.
    pub const ATTRIBUTION_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 150);
    /// Attribution credit text.
    pub const ATTRIBUTION_TEXT: Color32 = Color32::from_rgb(220, 220, 220);
    /// Legend swatch outline.
    pub const SWATCH_BORDER: Color32 = Color32::from_rgb(60, 60, 60);
}
