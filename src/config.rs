//! Map configuration.
//!
//! Everything the map needs to know up front: where the feeds live, where
//! the view starts, how markers are scaled and coloured, and which
//! background tile sources can be picked. The app is built from a
//! `MapConfig` value; nothing here is read from globals.

use crate::geo::{Credit, TileSource};
use crate::quake::{DepthBand, DepthBands, HexColor};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// USGS summary feed with every earthquake of the past week.
pub const USGS_WEEK_FEED: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic plate polygons.
pub const PB2002_PLATES: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_plates.json";

/// Lowest zoom level the view may reach.
pub const MIN_ZOOM: f64 = 1.0;

/// Ceiling for every configured zoom limit. Tile servers stop well before
/// this and tile coordinates overflow not far above it.
pub const MAX_ZOOM_LIMIT: u8 = 22;

/// Complete configuration for a map session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// GeoJSON feed of earthquake points.
    pub earthquake_url: String,

    /// GeoJSON feed of plate boundaries. `None` disables the plate overlay
    /// entirely and skips its fetch.
    pub plates_url: Option<String>,

    /// Initial view center latitude.
    pub center_lat: f64,

    /// Initial view center longitude.
    pub center_lon: f64,

    /// Initial zoom level (web-mercator, 0 = whole world in one tile).
    pub zoom: f64,

    /// Highest zoom level the view may reach.
    pub max_zoom: f64,

    /// Marker radius in pixels per unit of magnitude.
    pub magnitude_scale: f64,

    /// Depth to fill colour mapping.
    pub depth_bands: DepthBands,

    /// Lower bounds of the legend rows, in km.
    pub legend_grades: Vec<f64>,

    /// Selectable background layers; the first one is shown on start.
    pub base_layers: Vec<TileSource>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            earthquake_url: USGS_WEEK_FEED.to_string(),
            plates_url: Some(PB2002_PLATES.to_string()),
            // Center of the contiguous US
            center_lat: 37.09,
            center_lon: -95.71,
            zoom: 5.0,
            max_zoom: 8.0,
            magnitude_scale: 4.0,
            depth_bands: DepthBands::default(),
            legend_grades: vec![-10.0, 10.0, 30.0, 50.0, 70.0, 90.0],
            base_layers: default_base_layers(),
        }
    }
}

impl MapConfig {
    /// Earthquakes only, without the plate overlay and with the larger
    /// marker scale of the single-layer map.
    pub fn single_layer() -> Self {
        Self {
            plates_url: None,
            magnitude_scale: 5.0,
            max_zoom: 20.0,
            base_layers: vec![positron(20)],
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// Zoom limits are clamped to `[MIN_ZOOM, MAX_ZOOM_LIMIT]` and the
    /// initial zoom to the resulting `max_zoom`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.clamp_zoom_limits())
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn clamp_zoom_limits(mut self) -> Self {
        let limit = MAX_ZOOM_LIMIT as f64;
        if !self.max_zoom.is_finite() {
            log::warn!("max_zoom {} is not a number, using {}", self.max_zoom, limit);
            self.max_zoom = limit;
        }
        self.max_zoom = self.max_zoom.clamp(MIN_ZOOM, limit);

        if !self.zoom.is_finite() {
            self.zoom = MIN_ZOOM;
        }
        self.zoom = self.zoom.clamp(MIN_ZOOM, self.max_zoom);

        for layer in &mut self.base_layers {
            layer.max_zoom = layer.max_zoom.min(MAX_ZOOM_LIMIT);
        }
        self
    }

    /// Returns true if the plate overlay is part of this map.
    pub fn has_plates(&self) -> bool {
        self.plates_url.is_some()
    }
}

impl Default for DepthBands {
    fn default() -> Self {
        Self {
            bands: vec![
                DepthBand::new(90.0, Color32::from_rgb(0x58, 0x18, 0x45)),
                DepthBand::new(70.0, Color32::from_rgb(0x90, 0x0C, 0x3F)),
                DepthBand::new(50.0, Color32::from_rgb(0xC7, 0x00, 0x39)),
                DepthBand::new(30.0, Color32::from_rgb(0xFF, 0x57, 0x33)),
                DepthBand::new(10.0, Color32::from_rgb(0xFF, 0xC3, 0x00)),
            ],
            fallback: HexColor(Color32::from_rgb(0xDA, 0xF7, 0xA6)),
        }
    }
}

fn default_base_layers() -> Vec<TileSource> {
    vec![
        TileSource {
            name: "Street Map".to_string(),
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: Vec::new(),
            credit: Credit::OpenStreetMap,
            max_zoom: 8,
        },
        positron(8),
        TileSource {
            name: "Carto Map".to_string(),
            url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            subdomains: carto_subdomains(),
            credit: Credit::Carto,
            max_zoom: 8,
        },
    ]
}

fn positron(max_zoom: u8) -> TileSource {
    TileSource {
        name: "Positron Map".to_string(),
        url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_string(),
        subdomains: carto_subdomains(),
        credit: Credit::Carto,
        max_zoom,
    }
}

fn carto_subdomains() -> Vec<String> {
    ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect()
}
