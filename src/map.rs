//! Map assembly: turns fetched features and layer toggles into the list of
//! things to draw.

use crate::config::MapConfig;
use crate::geo::{to_screen, GeoLayer};
use crate::quake::{marker_style, plate_style, EarthquakeFeature, LineStyle, MarkerStyle};
use crate::state::LayerState;
use eframe::egui::Pos2;
use geo_types::Coord;
use walkers::Projector;

/// Extra pointer tolerance around a marker, in pixels.
const HIT_SLOP: f32 = 2.0;

/// A circle marker for one earthquake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Index into the earthquake list
    pub quake_index: usize,
    pub center: Coord<f64>,
    pub style: MarkerStyle,
}

/// One plate boundary polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateLine<'a> {
    pub points: &'a [Coord<f64>],
    pub style: LineStyle,
}

/// Everything drawn above the base tiles, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapScene<'a> {
    pub plate_lines: Vec<PlateLine<'a>>,
    pub markers: Vec<Marker>,
}

impl MapScene<'_> {
    /// Finds the marker under a screen position.
    ///
    /// Markers later in the list are drawn on top, so they win.
    pub fn hit_test(&self, pos: Pos2, projector: &Projector) -> Option<&Marker> {
        self.markers.iter().rev().find(|marker| {
            if marker.style.radius <= 0.0 {
                return false;
            }
            let center = to_screen(projector, marker.center);
            let reach = marker.style.radius + marker.style.stroke_weight / 2.0 + HIT_SLOP;
            center.distance(pos) <= reach
        })
    }
}

/// Builds the scene from the loaded data and the visible overlays.
///
/// Plates are drawn under the earthquakes. Hidden overlays contribute
/// nothing.
pub fn build_scene<'a>(
    quakes: &[EarthquakeFeature],
    plates: Option<&'a GeoLayer>,
    layers: &LayerState,
    config: &MapConfig,
) -> MapScene<'a> {
    let plate_lines = match plates {
        Some(layer) if layers.show_plates => {
            let style = plate_style();
            layer
                .features
                .iter()
                .flat_map(|feature| feature.lines())
                .map(|points| PlateLine { points, style })
                .collect()
        }
        _ => Vec::new(),
    };

    let markers = if layers.show_earthquakes {
        quakes
            .iter()
            .enumerate()
            .map(|(quake_index, quake)| Marker {
                quake_index,
                center: quake.coordinates,
                style: marker_style(quake, config.magnitude_scale, &config.depth_bands),
            })
            .collect()
    } else {
        Vec::new()
    };

    MapScene {
        plate_lines,
        markers,
    }
}
