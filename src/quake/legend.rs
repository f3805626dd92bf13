//! Depth legend.

use super::DepthBands;
use eframe::egui::Color32;

/// One row of the legend: a depth range and its swatch colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendBand {
    /// Lower bound in km.
    pub lower: f64,
    /// Upper bound in km; `None` for the open-ended last row.
    pub upper: Option<f64>,
    pub color: Color32,
}

impl LegendBand {
    /// Row label, e.g. `10 – 30` or `90+`.
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{} – {}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }
}

/// Static legend built once from the configured grades.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: &'static str,
    pub bands: Vec<LegendBand>,
}

/// Builds the legend rows.
///
/// Each grade is paired with the colour of a depth just above it
/// (`grade + 1`) so the swatch matches the markers inside the range.
pub fn build_legend(grades: &[f64], bands: &DepthBands) -> Legend {
    let bands = grades
        .iter()
        .enumerate()
        .map(|(i, &lower)| LegendBand {
            lower,
            upper: grades.get(i + 1).copied(),
            color: bands.color_for(lower + 1.0),
        })
        .collect();

    Legend {
        title: "Depth (km)",
        bands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;

    fn legend() -> Legend {
        let config = MapConfig::default();
        build_legend(&config.legend_grades, &config.depth_bands)
    }

    #[test]
    fn test_six_bands() {
        let legend = legend();
        assert_eq!(legend.bands.len(), 6);
        let lowers: Vec<f64> = legend.bands.iter().map(|b| b.lower).collect();
        assert_eq!(lowers, [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0]);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = legend().bands.iter().map(LegendBand::label).collect();
        assert_eq!(
            labels,
            ["-10 – 10", "10 – 30", "30 – 50", "50 – 70", "70 – 90", "90+"]
        );
    }

    #[test]
    fn test_colors_follow_depth_bands() {
        let config = MapConfig::default();
        let legend = legend();
        assert_eq!(legend.bands[0].color, config.depth_bands.fallback.0);
        assert_eq!(legend.bands[5].color, Color32::from_rgb(0x58, 0x18, 0x45));

        // Each swatch matches a marker from the middle of its range
        for band in &legend.bands {
            let inside = band.upper.map_or(band.lower + 50.0, |u| (band.lower + u) / 2.0);
            assert_eq!(config.depth_bands.color_for(inside), band.color);
        }
    }

    #[test]
    fn test_empty_grades() {
        let legend = build_legend(&[], &DepthBands::default());
        assert!(legend.bands.is_empty());
    }
}
