//! Map rendering.
//!
//! Plate boundaries and earthquake markers are painted by a walkers plugin,
//! above the tiles the map widget has already drawn.

use crate::map::{MapScene, Marker, PlateLine};
use eframe::egui::{self, Color32, Painter, Pos2, Rect, Response, Stroke, Ui};
use geo_types::Coord;
use walkers::{lon_lat, MapMemory, Plugin, Projector};

/// Screen position of a geographic coordinate.
pub fn to_screen(projector: &Projector, coord: Coord<f64>) -> Pos2 {
    projector.project(lon_lat(coord.x, coord.y)).to_pos2()
}

/// Draws the plate lines and markers of a scene, plus the selection ring.
pub struct SceneLayer<'s> {
    scene: &'s MapScene<'s>,
    selected: Option<Marker>,
}

impl<'s> SceneLayer<'s> {
    pub fn new(scene: &'s MapScene<'s>, selected: Option<Marker>) -> Self {
        Self { scene, selected }
    }
}

impl Plugin for SceneLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let painter = ui.painter().with_clip_rect(ui.max_rect());
        let visible = painter.clip_rect();

        for line in &self.scene.plate_lines {
            render_plate_line(&painter, line, projector, visible);
        }

        for marker in &self.scene.markers {
            render_marker(&painter, marker, projector, visible);
        }

        if let Some(marker) = &self.selected {
            render_selection(&painter, marker, projector);
        }
    }
}

/// Renders a plate boundary polyline.
fn render_plate_line(painter: &Painter, line: &PlateLine<'_>, projector: &Projector, visible: Rect) {
    if line.points.len() < 2 {
        return;
    }

    let mut screen_points: Vec<Pos2> = Vec::with_capacity(line.points.len());
    for coord in line.points {
        let pos = to_screen(projector, *coord);
        // Skip sub-pixel steps
        if let Some(last) = screen_points.last() {
            if last.distance_sq(pos) < 0.5 {
                continue;
            }
        }
        screen_points.push(pos);
    }

    if screen_points.len() < 2 || !visible.intersects(Rect::from_points(&screen_points)) {
        return;
    }

    let stroke = Stroke::new(line.style.weight, line.style.stroke_color());
    painter.add(egui::Shape::line(screen_points, stroke));
}

/// Renders one earthquake circle.
fn render_marker(painter: &Painter, marker: &Marker, projector: &Projector, visible: Rect) {
    let style = &marker.style;
    if style.radius <= 0.0 {
        return;
    }

    let center = to_screen(projector, marker.center);
    if !visible.expand(style.radius + style.stroke_weight).contains(center) {
        return;
    }

    painter.circle(
        center,
        style.radius,
        style.fill(),
        Stroke::new(style.stroke_weight, style.stroke_color),
    );
}

/// Draws a ring around the selected marker.
fn render_selection(painter: &Painter, marker: &Marker, projector: &Projector) {
    painter.circle_stroke(
        to_screen(projector, marker.center),
        marker.style.radius + 3.0,
        Stroke::new(2.0, Color32::WHITE),
    );
}
