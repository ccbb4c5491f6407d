//! SVG filter definitions and the stylesheet rules that apply them.
//!
//! A duotone is rendered as an SVG `<filter>` that first maps every pixel to
//! its luminance and then looks the luminance up in per-channel tables built
//! from the duotone colors. A stylesheet rule points the scoped selector at
//! the filter by id.
//!
//! - [`FilterRenderer`]: Renders filters and rules from templates
//! - [`DuotoneMarkup`]: The rendered output for one block instance
//! - [`RenderError`]: Template failures

mod error;
mod markup;
mod renderer;
mod templates;

pub use error::RenderError;
pub use markup::DuotoneMarkup;
pub use renderer::FilterRenderer;
