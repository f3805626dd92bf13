//! Layer visibility state.

/// Which base layer is shown and which overlays are switched on.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    /// Index into the configured base layers
    pub base_layer: usize,

    /// Show the tectonic plate boundaries
    pub show_plates: bool,

    /// Show the earthquake markers
    pub show_earthquakes: bool,

    /// Whether the layer control is expanded
    pub control_open: bool,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            base_layer: 0,
            show_plates: true,
            show_earthquakes: true,
            control_open: false,
        }
    }
}

impl LayerState {
    /// Selects a base layer by index, ignoring indexes out of range.
    pub fn select_base_layer(&mut self, index: usize, layer_count: usize) {
        if index < layer_count {
            self.base_layer = index;
        } else {
            log::warn!(
                "Base layer {} does not exist ({} configured)",
                index,
                layer_count
            );
        }
    }
}
