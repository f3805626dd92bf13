//! Central canvas UI: the map itself.

use super::{colors, popup};
use crate::config::MapConfig;
use crate::geo::{self, BaseMaps, SceneLayer};
use crate::map::build_scene;
use crate::quake::PopupContent;
use crate::state::AppState;
use eframe::egui::{self, FontId, Painter, Rect, Vec2};
use walkers::{Map, Tiles};

/// Everything the canvas needs besides the app state.
pub struct CanvasContext<'a> {
    pub config: &'a MapConfig,
    pub base_maps: &'a mut BaseMaps,
}

/// What a pointer press on the map asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerAction {
    None,
    /// Return to the initial view
    ResetView,
    /// Select the earthquake under the pointer, or clear the selection
    Select(Option<usize>),
}

/// Decides what a click does.
///
/// The second click of a double-click also reports `clicked`; it only
/// resets the view and leaves the selection alone.
fn resolve_pointer(double_clicked: bool, clicked: bool, hit: Option<usize>) -> PointerAction {
    if double_clicked {
        PointerAction::ResetView
    } else if clicked {
        PointerAction::Select(hit)
    } else {
        PointerAction::None
    }
}

/// Render the map canvas and handle marker clicks.
///
/// Panning and zooming are handled by the walkers map widget: drag to pan,
/// the mouse wheel or a pinch to zoom around the pointer.
pub fn render_canvas(ctx: &egui::Context, state: &mut AppState, canvas: CanvasContext<'_>) {
    let config = canvas.config;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(colors::map::BACKGROUND))
        .show(ctx, |ui| {
            let scene = build_scene(
                &state.earthquakes,
                state.plates.as_ref(),
                &state.layer_state,
                config,
            );

            let selected_marker = state
                .selected_quake
                .and_then(|i| scene.markers.iter().find(|m| m.quake_index == i))
                .copied();
            let popup_content = selected_marker
                .and(state.selected())
                .map(PopupContent::for_quake);

            let tiles = canvas.base_maps.get_mut(state.layer_state.base_layer);
            let attribution = tiles.as_deref().map(Tiles::attribution);

            let map = Map::new(
                tiles.map(|tiles| tiles as &mut dyn Tiles),
                &mut state.view.memory,
                state.view.home,
            )
            .zoom_with_ctrl(false)
            .double_click_to_zoom(false)
            .with_plugin(SceneLayer::new(&scene, selected_marker));

            let inner = map.show(ui, |ui, response, projector, _memory| {
                let rect = response.rect;

                if let Some(attribution) = &attribution {
                    draw_attribution(ui.painter(), rect, attribution.text);
                }

                let mut popup_closed = false;
                if let (Some(marker), Some(content)) = (selected_marker, &popup_content) {
                    let anchor = geo::to_screen(projector, marker.center);
                    popup_closed = popup::render_popup(ctx, anchor, marker.style.radius, content);
                }

                let hit = if response.clicked() {
                    response
                        .interact_pointer_pos()
                        .and_then(|pos| scene.hit_test(pos, projector))
                        .map(|marker| marker.quake_index)
                } else {
                    None
                };

                let action = resolve_pointer(response.double_clicked(), response.clicked(), hit);
                (action, popup_closed)
            });

            let (action, popup_closed) = inner.inner;
            if popup_closed {
                state.selected_quake = None;
            }

            match action {
                PointerAction::ResetView => {
                    log::debug!("View reset");
                    state.view.reset(config.max_zoom);
                }
                PointerAction::Select(hit) => {
                    if let Some(index) = hit {
                        log::debug!("Selected earthquake {}", index);
                    }
                    state.selected_quake = hit;
                }
                PointerAction::None => {}
            }

            state.view.clamp_zoom(config.max_zoom);
        });
}

/// Draws the base layer credit in the bottom-left corner.
fn draw_attribution(painter: &Painter, rect: Rect, text: &str) {
    if text.is_empty() {
        return;
    }

    let galley = painter.layout_no_wrap(
        text.to_string(),
        FontId::proportional(10.0),
        colors::map::ATTRIBUTION_TEXT,
    );
    let pos = rect.left_bottom() + Vec2::new(4.0, -4.0 - galley.size().y);
    let background = Rect::from_min_size(pos, galley.size()).expand(2.0);

    painter.rect_filled(background, 2.0, colors::map::ATTRIBUTION_BG);
    painter.galley(pos, galley, colors::map::ATTRIBUTION_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, Modifiers, MouseWheelUnit, Pos2, RawInput};

    #[test]
    fn test_double_click_resets_without_selecting() {
        assert_eq!(
            resolve_pointer(true, true, Some(3)),
            PointerAction::ResetView
        );
        assert_eq!(resolve_pointer(true, false, None), PointerAction::ResetView);
    }

    #[test]
    fn test_single_click_selects_or_clears() {
        assert_eq!(
            resolve_pointer(false, true, Some(3)),
            PointerAction::Select(Some(3))
        );
        assert_eq!(resolve_pointer(false, true, None), PointerAction::Select(None));
        assert_eq!(resolve_pointer(false, false, Some(3)), PointerAction::None);
    }

    fn frame_input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    #[test]
    fn test_ctrl_wheel_zooms_once() {
        let ctx = egui::Context::default();
        let config = MapConfig::default();
        let mut state = AppState::new(&config);
        let mut base_maps = BaseMaps::default();
        let pointer = Pos2::new(400.0, 300.0);

        let mut frame = |events: Vec<Event>, state: &mut AppState| {
            let _ = ctx.run(frame_input(events), |ctx| {
                render_canvas(
                    ctx,
                    state,
                    CanvasContext {
                        config: &config,
                        base_maps: &mut base_maps,
                    },
                );
            });
        };

        // Let egui learn where the map is before scrolling over it
        frame(vec![Event::PointerMoved(pointer)], &mut state);
        frame(vec![Event::PointerMoved(pointer)], &mut state);
        let before = state.view.zoom();

        frame(
            vec![Event::MouseWheel {
                unit: MouseWheelUnit::Point,
                delta: Vec2::new(0.0, 5.0),
                modifiers: Modifiers::COMMAND,
            }],
            &mut state,
        );
        let zoom_delta = ctx.input(|i| i.zoom_delta()) as f64;

        assert!(zoom_delta > 1.0);
        // walkers applies (zoom_delta - 1) * zoom_speed, with a zoom speed of 2
        let expected = before + (zoom_delta - 1.0) * 2.0;
        assert!((state.view.zoom() - expected).abs() < 1e-6);
    }
}
