//! CSS colors used by duotone filters and pickers.
//!
//! This module provides:
//!
//! - [`Rgba`]: A parsed sRGB color with alpha
//! - [`ChannelTables`]: Per-channel transfer tables built from a color list
//! - [`PaletteColor`]: An entry of the plain color palette
//! - Picker helpers: [`default_colors`], [`gradient_from_colors`], [`color_stops`]

mod error;
mod palette;
mod rgba;

pub use error::ColorParseError;
pub use palette::{
    color_stops, colors_from_stops, default_colors, gradient_from_colors, ColorStop,
    PaletteColor, DEFAULT_GRADIENT_ANGLE, FALLBACK_DUOTONE_COLORS,
};
pub use rgba::{ChannelTables, Rgba};
