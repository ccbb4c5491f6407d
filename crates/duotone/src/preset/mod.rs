//! Duotone presets and palettes.
//!
//! This module provides:
//!
//! - [`DuotonePreset`]: A named, ordered list of colors
//! - [`DuotonePalette`]: Presets merged from the custom, theme and default tiers
//! - [`Tiers`]: The three origins a palette is assembled from
//! - [`PresetResolver`]: The seam rendering code uses to resolve presets
//!
//! Presets are referenced from block attributes with symbolic references of
//! the form `var:preset|duotone|<slug>`. See [`preset_reference`].

mod palette;
mod reference;

pub use palette::{
    DuotonePalette, DuotonePreset, PresetSource, Tiers, DEFAULT_DUOTONE_SETTING, DUOTONE_SETTING,
};
pub use reference::{
    preset_reference, resolve_colors_from_preset, resolve_preset_from_colors, PresetResolver,
    PRESET_REFERENCE_PREFIX,
};
