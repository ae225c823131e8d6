use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.60);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: factor type → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct study factor type to a colour for the factor table.
#[derive(Debug, Clone, Default)]
pub struct FactorColors {
    mapping: BTreeMap<String, Color32>,
}

impl FactorColors {
    pub fn new(types: &BTreeSet<String>) -> Self {
        let palette = generate_palette(types.len());
        let mapping = types.iter().cloned().zip(palette).collect();
        FactorColors { mapping }
    }

    /// Colour for a factor type; gray for types not seen at construction.
    pub fn color_for(&self, kind: &str) -> Color32 {
        self.mapping.get(kind).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries (type → colour) in sorted order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(kind, c)| (kind.clone(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());

        let colours = generate_palette(5);
        assert_eq!(colours.len(), 5);
        let distinct: BTreeSet<[u8; 4]> = colours.iter().map(|c| c.to_array()).collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn unknown_type_is_gray() {
        let types: BTreeSet<String> = ["Environmental".to_string()].into();
        let colors = FactorColors::new(&types);

        assert_ne!(colors.color_for("Environmental"), Color32::GRAY);
        assert_eq!(colors.color_for("Radiation"), Color32::GRAY);
        assert_eq!(colors.legend_entries().len(), 1);
    }
}
