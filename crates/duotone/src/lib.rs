//! # Duotone - filter presets and scoped stylesheets for block editors
//!
//! Duotone is a two-or-more color filter: an image is reduced to its
//! luminance, which is then mapped onto an ordered list of colors, dark to
//! light. This crate implements the editor side of duotone support:
//!
//! - Resolving between symbolic preset references (`var:preset|duotone|<slug>`)
//!   and explicit color lists against a palette
//! - Scoping a block type's filter selectors to a single block instance
//! - Rendering the SVG filter and the stylesheet rule that applies it
//! - Assembling palettes from tiered settings, registering block types,
//!   and writing picked values back to the block's `style` attribute
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone::{
//!     compute_scoped_duotone_selectors, resolve_colors_from_preset,
//!     resolve_preset_from_colors, DuotonePreset,
//! };
//!
//! let palette = vec![
//!     DuotonePreset::new("dark-grayscale", ["#000000", "#7f7f7f"]),
//!     DuotonePreset::new("purple-green", ["#8c00b7", "#fcff41"]),
//! ];
//!
//! // Reference to colors
//! let colors = resolve_colors_from_preset(Some("var:preset|duotone|purple-green"), &palette);
//! assert_eq!(colors.unwrap(), ["#8c00b7", "#fcff41"]);
//!
//! // Colors back to a reference
//! let reference = resolve_preset_from_colors(&["#000000", "#7f7f7f"], &palette);
//! assert_eq!(reference.as_deref(), Some("var:preset|duotone|dark-grayscale"));
//!
//! // Selector for one instance
//! assert_eq!(
//!     compute_scoped_duotone_selectors("wp-duotone-1", "img"),
//!     ".editor-styles-wrapper .wp-duotone-1img",
//! );
//! ```
//!
//! ## Editor composition
//!
//! [`DuotoneEditor`] combines a [`BlockTypeRegistry`] (or any other
//! [`FilterSelectors`]), the palettes from [`Settings`] and an
//! [`InstanceIds`] generator, and renders each block's filter into a
//! [`StyleSurface`] such as the in-memory [`Stylesheet`].
//!
//! ## Value shapes
//!
//! A block's `style.color.duotone` holds one of:
//!
//! - an array of colors, e.g. `["#000000", "#ffffff"]`
//! - a preset reference, e.g. `"var:preset|duotone|blue-orange"`
//! - `"unset"`, which removes a duotone applied by global styles
//!
//! See [`DuotoneStyle`].

pub mod color;
pub mod editor;
pub mod filter;
pub mod instance;
pub mod panel;
pub mod preset;
pub mod registry;
pub mod selector;
pub mod settings;
pub mod style;

pub use color::{
    color_stops, colors_from_stops, default_colors, gradient_from_colors, ChannelTables,
    ColorParseError, ColorStop, PaletteColor, Rgba,
};
pub use editor::{
    duotone_styles, Block, BlockAttributes, BlockRender, DuotoneEditor, StyleSurface, Stylesheet,
};
pub use filter::{DuotoneMarkup, FilterRenderer, RenderError};
pub use instance::InstanceIds;
pub use panel::{DuotoneOptions, DuotonePanel};
pub use preset::{
    preset_reference, resolve_colors_from_preset, resolve_preset_from_colors, DuotonePalette,
    DuotonePreset, PresetResolver, PresetSource, Tiers,
};
pub use registry::{
    add_duotone_attributes, AttributeSchema, BlockType, BlockTypeRegistry, FilterSelectors,
    RegistryError,
};
pub use selector::{class_selector, compute_scoped_duotone_selectors, EDITOR_WRAPPER_SELECTOR};
pub use settings::{Settings, SettingsError};
pub use style::{BlockStyle, DuotoneStyle};
