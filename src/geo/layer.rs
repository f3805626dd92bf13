//! Geographic layer data structures.

use crate::quake::FeedError;
use geo_types::Coord;
use geojson::{Feature, GeoJson, Geometry, Position, Value};

/// A geographic feature that can be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoFeature {
    /// A series of connected line segments (boundaries, faults)
    LineString(Vec<Coord<f64>>),
    /// Multiple line strings
    MultiLineString(Vec<Vec<Coord<f64>>>),
    /// A closed polygon
    Polygon {
        exterior: Vec<Coord<f64>>,
        holes: Vec<Vec<Coord<f64>>>,
    },
    /// Multiple polygons
    MultiPolygon(Vec<(Vec<Coord<f64>>, Vec<Vec<Coord<f64>>>)>),
    /// A single point
    Point(Coord<f64>),
}

impl GeoFeature {
    /// Every polyline of this feature, polygon rings included.
    ///
    /// Polygons are drawn as outlines, so their exterior and hole rings are
    /// returned like any other line. Points have no lines.
    pub fn lines(&self) -> Vec<&[Coord<f64>]> {
        match self {
            GeoFeature::LineString(coords) => vec![coords.as_slice()],
            GeoFeature::MultiLineString(lines) => lines.iter().map(Vec::as_slice).collect(),
            GeoFeature::Polygon { exterior, holes } => std::iter::once(exterior.as_slice())
                .chain(holes.iter().map(Vec::as_slice))
                .collect(),
            GeoFeature::MultiPolygon(polygons) => polygons
                .iter()
                .flat_map(|(exterior, holes)| {
                    std::iter::once(exterior.as_slice()).chain(holes.iter().map(Vec::as_slice))
                })
                .collect(),
            GeoFeature::Point(_) => Vec::new(),
        }
    }
}

/// A geographic layer containing multiple features.
#[derive(Debug, Clone, Default)]
pub struct GeoLayer {
    /// Display name of this layer
    pub name: String,
    /// Features in this layer
    pub features: Vec<GeoFeature>,
}

impl GeoLayer {
    /// Creates a new empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    /// Loads features from GeoJSON data.
    pub fn load_from_geojson(&mut self, geojson_str: &str) -> Result<(), FeedError> {
        let geojson: GeoJson = geojson_str.parse()?;

        match geojson {
            GeoJson::FeatureCollection(fc) => {
                for feature in fc.features {
                    if let Some(geo_feature) = convert_feature(&feature) {
                        self.features.push(geo_feature);
                    }
                }
            }
            GeoJson::Feature(f) => {
                if let Some(feature) = convert_feature(&f) {
                    self.features.push(feature);
                }
            }
            GeoJson::Geometry(g) => {
                if let Some(feature) = convert_geometry(&g) {
                    self.features.push(feature);
                }
            }
        }

        Ok(())
    }

    /// Total number of polylines across all features.
    pub fn line_count(&self) -> usize {
        self.features.iter().map(|f| f.lines().len()).sum()
    }
}

fn convert_feature(feature: &Feature) -> Option<GeoFeature> {
    feature.geometry.as_ref().and_then(convert_geometry)
}

fn convert_geometry(geometry: &Geometry) -> Option<GeoFeature> {
    match &geometry.value {
        Value::Point(position) => to_coord(position).map(GeoFeature::Point),
        Value::MultiPoint(points) => {
            // Only the first point is kept as the representative
            points.first().and_then(to_coord).map(GeoFeature::Point)
        }
        Value::LineString(line) => Some(GeoFeature::LineString(to_line(line))),
        Value::MultiLineString(lines) => Some(GeoFeature::MultiLineString(
            lines.iter().map(|line| to_line(line)).collect(),
        )),
        Value::Polygon(rings) => {
            let (exterior, holes) = to_rings(rings)?;
            Some(GeoFeature::Polygon { exterior, holes })
        }
        Value::MultiPolygon(polygons) => Some(GeoFeature::MultiPolygon(
            polygons.iter().filter_map(|rings| to_rings(rings)).collect(),
        )),
        Value::GeometryCollection(geometries) => {
            // Take the first convertible geometry
            geometries.iter().find_map(convert_geometry)
        }
    }
}

fn to_coord(position: &Position) -> Option<Coord<f64>> {
    match position.as_slice() {
        [x, y, ..] => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

fn to_line(positions: &[Position]) -> Vec<Coord<f64>> {
    positions.iter().filter_map(to_coord).collect()
}

fn to_rings(rings: &[Vec<Position>]) -> Option<(Vec<Coord<f64>>, Vec<Vec<Coord<f64>>>)> {
    let (exterior, holes) = rings.split_first()?;
    Some((
        to_line(exterior),
        holes.iter().map(|ring| to_line(ring)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(geojson: &str) -> GeoLayer {
        let mut layer = GeoLayer::new("test");
        layer.load_from_geojson(geojson).expect("valid GeoJSON");
        layer
    }

    #[test]
    fn test_polygon_rings_become_lines() {
        let layer = load(
            r#"{"type": "Feature", "properties": {},
                "geometry": {"type": "Polygon", "coordinates": [
                    [[0, 0], [10, 0], [10, 10], [0, 0]],
                    [[2, 2], [3, 2], [3, 3], [2, 2]]
                ]}}"#,
        );
        assert_eq!(layer.features.len(), 1);
        let lines = layer.features[0].lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 4);
        assert_eq!(lines[0][1], Coord { x: 10.0, y: 0.0 });
    }

    #[test]
    fn test_feature_collection_mixed_geometries() {
        let layer = load(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                    [[[5, 5], [6, 5], [6, 6], [5, 5]]]
                 ]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "Point", "coordinates": [3, 4]}},
                {"type": "Feature", "properties": null, "geometry": null}
            ]}"#,
        );
        assert_eq!(layer.features.len(), 3);
        assert_eq!(layer.line_count(), 3);
        assert_eq!(layer.features[2], GeoFeature::Point(Coord { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn test_empty_polygon_is_skipped() {
        let layer = load(r#"{"type": "Polygon", "coordinates": []}"#);
        assert!(layer.features.is_empty());
    }

    #[test]
    fn test_invalid_geojson() {
        let mut layer = GeoLayer::new("test");
        assert!(layer.load_from_geojson(r#"{"type": "Nope"}"#).is_err());
    }
}
