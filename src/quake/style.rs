//! Visual styling of earthquake markers and plate boundary lines.

use super::EarthquakeFeature;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker outline colour.
pub const MARKER_STROKE_COLOR: Color32 = Color32::BLACK;
/// Marker outline width in pixels.
pub const MARKER_STROKE_WEIGHT: f32 = 0.25;
/// Marker fill opacity.
pub const MARKER_FILL_OPACITY: f32 = 0.8;

/// A colour that (de)serializes as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Color32);

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color32::from_hex(&value)
            .map(HexColor)
            .map_err(|e| format!("invalid colour {:?}: {:?}", value, e))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.0.to_array();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// One depth threshold and the colour used for anything deeper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthBand {
    /// Depth in km that must be strictly exceeded.
    pub threshold: f64,
    pub color: HexColor,
}

impl DepthBand {
    pub fn new(threshold: f64, color: Color32) -> Self {
        Self {
            threshold,
            color: HexColor(color),
        }
    }
}

/// Mapping from earthquake depth to marker fill colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthBands {
    pub bands: Vec<DepthBand>,
    /// Colour for depths that exceed no threshold.
    pub fallback: HexColor,
}

impl DepthBands {
    /// Returns the colour for a depth in km.
    ///
    /// Thresholds are strict: a depth equal to a threshold falls into the
    /// next shallower band. The deepest exceeded threshold wins regardless
    /// of the order the bands are listed in. NaN exceeds nothing.
    pub fn color_for(&self, depth: f64) -> Color32 {
        self.bands
            .iter()
            .filter(|band| depth > band.threshold)
            .max_by(|a, b| a.threshold.total_cmp(&b.threshold))
            .map(|band| band.color.0)
            .unwrap_or(self.fallback.0)
    }

    /// Colour for an optional depth; unknown depths get the fallback.
    pub fn color_for_depth(&self, depth: Option<f64>) -> Color32 {
        depth.map_or(self.fallback.0, |d| self.color_for(d))
    }
}

/// Visual descriptor of one circle marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Radius in screen pixels.
    pub radius: f32,
    pub stroke_color: Color32,
    pub stroke_weight: f32,
    pub fill_color: Color32,
    pub fill_opacity: f32,
}

impl MarkerStyle {
    /// Fill colour with the fill opacity applied.
    pub fn fill(&self) -> Color32 {
        with_opacity(self.fill_color, self.fill_opacity)
    }
}

/// Style for plate boundary lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color32,
    pub weight: f32,
    pub opacity: f32,
}

impl LineStyle {
    /// Stroke colour with the opacity applied.
    pub fn stroke_color(&self) -> Color32 {
        with_opacity(self.color, self.opacity)
    }
}

/// Builds the marker style for an earthquake.
///
/// The radius is `magnitude * magnitude_scale` with no clamping. An
/// earthquake without a magnitude gets a zero radius.
pub fn marker_style(
    feature: &EarthquakeFeature,
    magnitude_scale: f64,
    bands: &DepthBands,
) -> MarkerStyle {
    MarkerStyle {
        radius: marker_radius(feature.magnitude, magnitude_scale),
        stroke_color: MARKER_STROKE_COLOR,
        stroke_weight: MARKER_STROKE_WEIGHT,
        fill_color: bands.color_for_depth(feature.depth),
        fill_opacity: MARKER_FILL_OPACITY,
    }
}

/// Radius in pixels for a magnitude.
pub fn marker_radius(magnitude: Option<f64>, magnitude_scale: f64) -> f32 {
    magnitude.map_or(0.0, |m| (m * magnitude_scale) as f32)
}

/// The single style shared by every plate boundary.
pub fn plate_style() -> LineStyle {
    LineStyle {
        color: Color32::RED,
        weight: 2.0,
        opacity: 0.8,
    }
}

fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Coord;

    fn bands() -> DepthBands {
        DepthBands::default()
    }

    fn quake(magnitude: Option<f64>, depth: Option<f64>) -> EarthquakeFeature {
        EarthquakeFeature {
            place: None,
            time: None,
            magnitude,
            coordinates: Coord { x: 0.0, y: 0.0 },
            depth,
        }
    }

    fn deepest() -> Color32 {
        Color32::from_rgb(0x58, 0x18, 0x45)
    }

    fn second_deepest() -> Color32 {
        Color32::from_rgb(0x90, 0x0C, 0x3F)
    }

    fn shallowest() -> Color32 {
        Color32::from_rgb(0xDA, 0xF7, 0xA6)
    }

    #[test]
    fn test_depth_band_order() {
        let bands = bands();
        assert_eq!(bands.color_for(95.0), deepest());
        assert_eq!(bands.color_for(75.0), second_deepest());
        assert_eq!(bands.color_for(55.0), Color32::from_rgb(0xC7, 0x00, 0x39));
        assert_eq!(bands.color_for(35.0), Color32::from_rgb(0xFF, 0x57, 0x33));
        assert_eq!(bands.color_for(15.0), Color32::from_rgb(0xFF, 0xC3, 0x00));
        assert_eq!(bands.color_for(5.0), shallowest());
    }

    #[test]
    fn test_depth_thresholds_are_strict() {
        let bands = bands();
        assert_eq!(bands.color_for(90.0), second_deepest());
        assert_eq!(bands.color_for(90.0001), deepest());
        assert_eq!(bands.color_for(10.0), shallowest());
        assert_eq!(bands.color_for(-5.0), shallowest());
    }

    #[test]
    fn test_unknown_depth_is_shallowest() {
        let bands = bands();
        assert_eq!(bands.color_for_depth(None), shallowest());
        assert_eq!(bands.color_for(f64::NAN), shallowest());
    }

    #[test]
    fn test_band_listing_order_does_not_matter() {
        let mut bands = bands();
        bands.bands.reverse();
        assert_eq!(bands.color_for(95.0), deepest());
        assert_eq!(bands.color_for(90.0), second_deepest());
    }

    #[test]
    fn test_radius_is_linear_in_magnitude() {
        for m in [0.0, 0.5, 1.0, 2.5, 4.5, 7.8, 9.5] {
            let style = marker_style(&quake(Some(m), Some(20.0)), 4.0, &bands());
            assert!((style.radius - (m * 4.0) as f32).abs() < 1e-5);
        }
        let big = marker_style(&quake(Some(12.0), None), 5.0, &bands());
        assert_eq!(big.radius, 60.0);
    }

    #[test]
    fn test_missing_magnitude_has_no_radius() {
        let style = marker_style(&quake(None, Some(20.0)), 4.0, &bands());
        assert_eq!(style.radius, 0.0);
    }

    #[test]
    fn test_marker_fixed_attributes() {
        let style = marker_style(&quake(Some(3.0), Some(95.0)), 4.0, &bands());
        assert_eq!(style.stroke_color, Color32::BLACK);
        assert_eq!(style.stroke_weight, 0.25);
        assert_eq!(style.fill_opacity, 0.8);
        assert_eq!(style.fill_color, deepest());
        assert_eq!(style.fill().a(), 204);
    }

    #[test]
    fn test_plate_style() {
        let style = plate_style();
        assert_eq!(style.color, Color32::RED);
        assert_eq!(style.weight, 2.0);
        assert_eq!(style.opacity, 0.8);
    }

    #[test]
    fn test_hex_color_display() {
        assert_eq!(HexColor(deepest()).to_string(), "#581845");
        let parsed = HexColor::try_from("#FFC300".to_string()).expect("valid hex");
        assert_eq!(parsed.0, Color32::from_rgb(0xFF, 0xC3, 0x00));
    }
}
