//! Helpers for duotone pickers built on the plain color palette.

use serde::{Deserialize, Serialize};

use super::rgba::Rgba;

/// Colors offered for custom duotones when the palette is too small.
pub const FALLBACK_DUOTONE_COLORS: [&str; 2] = ["#000", "#fff"];

/// Direction of the gradient used to preview a duotone.
pub const DEFAULT_GRADIENT_ANGLE: &str = "90deg";

/// An entry of the `color.palette` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub slug: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteColor {
    pub fn new(slug: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            color: color.into(),
            name: None,
        }
    }
}

/// Picks the darkest and the lightest palette colors as a starting duotone.
///
/// Ties go to the later color. Palettes with fewer than two parseable colors
/// fall back to [`FALLBACK_DUOTONE_COLORS`].
pub fn default_colors(palette: &[PaletteColor]) -> Vec<String> {
    let fallback = || FALLBACK_DUOTONE_COLORS.iter().map(|c| c.to_string()).collect();

    let measured: Vec<(&str, f64)> = palette
        .iter()
        .filter_map(|entry| {
            Rgba::parse(&entry.color)
                .ok()
                .map(|rgba| (entry.color.as_str(), rgba.brightness()))
        })
        .collect();
    if measured.len() < 2 {
        return fallback();
    }

    let mut darkest = measured[0];
    let mut lightest = measured[0];
    for &current in &measured[1..] {
        if current.1 <= darkest.1 {
            darkest = current;
        }
        if current.1 >= lightest.1 {
            lightest = current;
        }
    }

    vec![darkest.0.to_string(), lightest.0.to_string()]
}

/// Builds a hard-stop `linear-gradient` showing each color in equal bands.
///
/// An empty list previews [`FALLBACK_DUOTONE_COLORS`] instead.
///
/// ```rust
/// use duotone::gradient_from_colors;
///
/// assert_eq!(
///     gradient_from_colors(&["#000", "#fff"], None),
///     "linear-gradient( 90deg, #000 0%, #000 50%, #fff 50%, #fff 100% )",
/// );
/// ```
pub fn gradient_from_colors<S: AsRef<str>>(colors: &[S], angle: Option<&str>) -> String {
    if colors.is_empty() {
        return gradient_from_colors(&FALLBACK_DUOTONE_COLORS, angle);
    }
    let band = 100.0 / colors.len() as f64;
    let stops = colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let color = color.as_ref();
            format!(
                "{} {}%, {} {}%",
                color,
                i as f64 * band,
                color,
                (i + 1) as f64 * band
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "linear-gradient( {}, {} )",
        angle.unwrap_or(DEFAULT_GRADIENT_ANGLE),
        stops
    )
}

/// A color at a position along a gradient, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
}

/// Spreads colors evenly from 0% to 100%. A single color sits at 0%.
pub fn color_stops<S: AsRef<str>>(colors: &[S]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| ColorStop {
            position: i as f64 * 100.0 / last,
            color: color.as_ref().to_string(),
        })
        .collect()
}

pub fn colors_from_stops(stops: &[ColorStop]) -> Vec<String> {
    stops.iter().map(|stop| stop.color.clone()).collect()
}
