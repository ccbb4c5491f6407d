//! Resolution between symbolic preset references and color lists.

use super::palette::{DuotonePalette, DuotonePreset};

/// Prefix shared by every symbolic duotone preset reference.
pub const PRESET_REFERENCE_PREFIX: &str = "var:preset|duotone|";

/// Formats the symbolic reference for a preset slug.
///
/// # Example
///
/// ```rust
/// use duotone::preset_reference;
///
/// assert_eq!(preset_reference("blue-orange"), "var:preset|duotone|blue-orange");
/// ```
pub fn preset_reference(slug: &str) -> String {
    format!("{}{}", PRESET_REFERENCE_PREFIX, slug)
}

/// Returns the colors of the preset referenced by `style_value`.
///
/// An absent or empty value resolves to `None`. Otherwise the palette is
/// scanned in order and the first preset whose formatted reference equals
/// `style_value` wins.
///
/// # Example
///
/// ```rust
/// use duotone::{resolve_colors_from_preset, DuotonePreset};
///
/// let palette = vec![DuotonePreset::new("dark-grayscale", ["#000000", "#7f7f7f"])];
///
/// let colors = resolve_colors_from_preset(Some("var:preset|duotone|dark-grayscale"), &palette);
/// assert_eq!(colors, Some(&["#000000".to_string(), "#7f7f7f".to_string()][..]));
/// assert_eq!(resolve_colors_from_preset(Some("var:preset|duotone|other"), &palette), None);
/// ```
pub fn resolve_colors_from_preset<'a>(
    style_value: Option<&str>,
    palette: &'a [DuotonePreset],
) -> Option<&'a [String]> {
    let style_value = style_value.filter(|value| !value.is_empty())?;
    let preset = palette.iter().find(|preset| {
        style_value
            .strip_prefix(PRESET_REFERENCE_PREFIX)
            .is_some_and(|slug| slug == preset.slug)
    });

    if preset.is_none() {
        tracing::debug!(reference = style_value, "no duotone preset matches reference");
    }
    preset.map(|preset| preset.colors.as_slice())
}

/// Returns the symbolic reference of the first preset matching `colors`.
///
/// A preset matches when each of its colors equals the color at the same
/// index of `colors`. Only the preset's own length is compared: trailing
/// input colors beyond it are ignored, and a preset without colors matches
/// any list.
///
/// # Example
///
/// ```rust
/// use duotone::{resolve_preset_from_colors, DuotonePreset};
///
/// let palette = vec![DuotonePreset::new("purple-yellow", ["#660066", "#ffff00"])];
///
/// assert_eq!(
///     resolve_preset_from_colors(&["#660066", "#ffff00"], &palette).as_deref(),
///     Some("var:preset|duotone|purple-yellow"),
/// );
/// assert_eq!(resolve_preset_from_colors(&["#ffff00", "#660066"], &palette), None);
/// ```
pub fn resolve_preset_from_colors<S: AsRef<str>>(
    colors: &[S],
    palette: &[DuotonePreset],
) -> Option<String> {
    palette
        .iter()
        .find(|preset| {
            preset
                .colors
                .iter()
                .enumerate()
                .all(|(index, color)| colors.get(index).map(|c| c.as_ref()) == Some(color.as_str()))
        })
        .map(|preset| preset_reference(&preset.slug))
}

/// Resolves presets for the rendering layer.
///
/// Rendering code receives a resolver explicitly instead of reaching for a
/// shared palette, so callers decide which palette (or which wrapper around
/// it) answers the lookups.
pub trait PresetResolver {
    /// Returns the colors of the preset referenced by `reference`.
    fn colors_for_preset(&self, reference: Option<&str>) -> Option<&[String]>;

    /// Returns the reference of the first preset matching `colors`.
    fn preset_for_colors(&self, colors: &[String]) -> Option<String>;
}

impl PresetResolver for [DuotonePreset] {
    fn colors_for_preset(&self, reference: Option<&str>) -> Option<&[String]> {
        resolve_colors_from_preset(reference, self)
    }

    fn preset_for_colors(&self, colors: &[String]) -> Option<String> {
        resolve_preset_from_colors(colors, self)
    }
}

impl PresetResolver for DuotonePalette {
    fn colors_for_preset(&self, reference: Option<&str>) -> Option<&[String]> {
        resolve_colors_from_preset(reference, self.presets())
    }

    fn preset_for_colors(&self, colors: &[String]) -> Option<String> {
        resolve_preset_from_colors(colors, self.presets())
    }
}
