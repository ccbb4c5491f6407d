//! Duotone values stored on blocks.
//!
//! - [`DuotoneStyle`]: The value of `style.color.duotone`
//! - [`BlockStyle`]: The block `style` attribute that carries it

mod attributes;
mod value;

pub use attributes::BlockStyle;
pub use value::{DuotoneStyle, UNSET};
