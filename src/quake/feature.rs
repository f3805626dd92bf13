//! Earthquake records read from the USGS GeoJSON feed.

use super::FeedError;
use crate::geo::GeoLayer;
use geo_types::Coord;
use geojson::{Feature, GeoJson, JsonObject, Value};

/// A single earthquake as published by the feed.
///
/// Properties are taken verbatim. Anything the feed leaves out stays
/// `None`; nothing is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    /// Human-readable location, e.g. "10km ENE of Ridgecrest, CA".
    pub place: Option<String>,
    /// Origin time in milliseconds since the Unix epoch.
    pub time: Option<i64>,
    pub magnitude: Option<f64>,
    /// Epicenter (x = longitude, y = latitude).
    pub coordinates: Coord<f64>,
    /// Hypocenter depth in km.
    pub depth: Option<f64>,
}

impl EarthquakeFeature {
    /// Builds an earthquake from a GeoJSON feature with Point geometry.
    ///
    /// Returns `None` for features without a usable point.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let geometry = feature.geometry.as_ref()?;
        let Value::Point(position) = &geometry.value else {
            return None;
        };

        let (lon, lat) = match position.as_slice() {
            [lon, lat, ..] => (*lon, *lat),
            _ => return None,
        };

        let properties = feature.properties.as_ref();

        Some(Self {
            place: string_property(properties, "place"),
            time: properties
                .and_then(|p| p.get("time"))
                .and_then(|v| v.as_i64()),
            magnitude: properties
                .and_then(|p| p.get("mag"))
                .and_then(|v| v.as_f64()),
            coordinates: Coord { x: lon, y: lat },
            depth: position.get(2).copied(),
        })
    }
}

fn string_property(properties: Option<&JsonObject>, key: &str) -> Option<String> {
    properties
        .and_then(|p| p.get(key))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Parses the earthquake feed into a list of earthquakes.
///
/// Features that are not points are skipped.
pub fn parse_earthquakes(geojson_str: &str) -> Result<Vec<EarthquakeFeature>, FeedError> {
    let geojson: GeoJson = geojson_str.parse()?;

    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => return Err(FeedError::UnexpectedDocument),
    };

    let total = features.len();
    let quakes: Vec<EarthquakeFeature> = features
        .iter()
        .filter_map(EarthquakeFeature::from_feature)
        .collect();

    if quakes.len() < total {
        log::debug!(
            "Skipped {} earthquake feature(s) without point geometry",
            total - quakes.len()
        );
    }

    Ok(quakes)
}

/// Parses the plate boundary feed into a line layer.
pub fn parse_plates(geojson_str: &str) -> Result<GeoLayer, FeedError> {
    let mut layer = GeoLayer::new("Tectonic Plates");
    layer.load_from_geojson(geojson_str)?;
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"title": "USGS All Earthquakes, Past Week"},
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 4.5, "place": "10km ENE of X", "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [-120.1, 38.2, 12.3]},
                "id": "nc1"
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": null, "time": 1700000100000},
                "geometry": {"type": "Point", "coordinates": [150.5, -5.25]},
                "id": "us2"
            },
            {
                "type": "Feature",
                "properties": {"mag": 2.0},
                "geometry": null,
                "id": "ak3"
            }
        ]
    }"#;

    #[test]
    fn test_parse_feed() {
        let quakes = parse_earthquakes(FEED).expect("valid feed");
        assert_eq!(quakes.len(), 2);

        let first = &quakes[0];
        assert_eq!(first.place.as_deref(), Some("10km ENE of X"));
        assert_eq!(first.time, Some(1700000000000));
        assert_eq!(first.magnitude, Some(4.5));
        assert_eq!(first.coordinates, Coord { x: -120.1, y: 38.2 });
        assert_eq!(first.depth, Some(12.3));
    }

    #[test]
    fn test_missing_properties_stay_unset() {
        let quakes = parse_earthquakes(FEED).expect("valid feed");
        let second = &quakes[1];
        assert_eq!(second.place, None);
        assert_eq!(second.magnitude, None);
        assert_eq!(second.depth, None);
        assert_eq!(second.time, Some(1700000100000));
    }

    #[test]
    fn test_empty_collection() {
        let quakes = parse_earthquakes(r#"{"type": "FeatureCollection", "features": []}"#)
            .expect("valid feed");
        assert!(quakes.is_empty());
    }

    #[test]
    fn test_bare_geometry_is_rejected() {
        let result = parse_earthquakes(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#);
        assert!(matches!(result, Err(FeedError::UnexpectedDocument)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_earthquakes("{not json"),
            Err(FeedError::GeoJson(_))
        ));
    }

    #[test]
    fn test_parse_plates_keeps_polygons() {
        let plates = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"Code": "NA"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]]}},
            {"type": "Feature", "properties": {"Code": "PA"},
             "geometry": {"type": "LineString", "coordinates": [[5.0, 5.0], [6.0, 6.0]]}}
        ]}"#;
        let layer = parse_plates(plates).expect("valid plates");
        assert_eq!(layer.name, "Tectonic Plates");
        assert_eq!(layer.features.len(), 2);
        assert_eq!(layer.line_count(), 2);
    }

    #[test]
    fn test_parse_plates_empty_collection() {
        let layer = parse_plates(r#"{"type": "FeatureCollection", "features": []}"#)
            .expect("valid plates");
        assert_eq!(layer.line_count(), 0);
    }
}
