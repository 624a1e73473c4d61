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
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: country → Color32
// ---------------------------------------------------------------------------

/// Maps each country to a distinct colour for the emissions scatter plot.
#[derive(Debug, Clone)]
pub struct CountryColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CountryColors {
    /// Build a colour map from the dataset's unique country set.
    pub fn new(countries: &BTreeSet<String>) -> Self {
        let palette = generate_palette(countries.len());
        let mapping: BTreeMap<String, Color32> = countries
            .iter()
            .zip(palette.into_iter())
            .map(|(c, color): (&String, Color32)| (c.clone(), color))
            .collect();

        CountryColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a country.
    pub fn color_for(&self, country: &str) -> Color32 {
        self.mapping
            .get(country)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Continuous "sunset" colormap
// ---------------------------------------------------------------------------

/// Anchor colours of the sunset scale, light yellow to deep violet.
const SUNSET_STOPS: &[(u8, u8, u8)] = &[
    (243, 231, 155),
    (250, 196, 132),
    (248, 160, 126),
    (235, 127, 134),
    (206, 102, 147),
    (160, 89, 160),
    (110, 64, 170),
];

/// Map `t` in `[0, 1]` onto the sunset scale by piecewise-linear
/// interpolation between the anchor colours.  `t` is clamped.
pub fn sunset(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let segments = (SUNSET_STOPS.len() - 1) as f64;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(SUNSET_STOPS.len() - 2);
    let frac = pos - i as f64;

    let (r0, g0, b0) = SUNSET_STOPS[i];
    let (r1, g1, b1) = SUNSET_STOPS[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    Color32::from_rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Normalise `v` into `[0, 1]` over `[min, max]` for colormap lookup.
/// A degenerate range maps everything to the midpoint.
pub fn normalize(v: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range.abs() < f64::EPSILON {
        0.5
    } else {
        (v - min) / range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_colors() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(12);
        assert_eq!(p.len(), 12);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn country_colors_fall_back_to_gray() {
        let countries: BTreeSet<String> =
            ["France", "Peru"].iter().map(|s| s.to_string()).collect();
        let cm = CountryColors::new(&countries);
        assert_ne!(cm.color_for("France"), cm.color_for("Peru"));
        assert_eq!(cm.color_for("Atlantis"), Color32::GRAY);
    }

    #[test]
    fn sunset_endpoints_match_anchor_stops() {
        assert_eq!(sunset(0.0), Color32::from_rgb(243, 231, 155));
        assert_eq!(sunset(1.0), Color32::from_rgb(110, 64, 170));
        // Out-of-range inputs are clamped.
        assert_eq!(sunset(-3.0), sunset(0.0));
        assert_eq!(sunset(7.0), sunset(1.0));
    }

    #[test]
    fn normalize_handles_degenerate_range() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(42.0, 42.0, 42.0), 0.5);
    }
}
