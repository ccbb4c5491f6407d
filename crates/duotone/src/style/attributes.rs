//! The block `style` attribute.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::value::DuotoneStyle;

/// A block's `style` attribute, kept as a JSON object.
///
/// Only `color.duotone` is interpreted here; every other key is carried
/// through untouched when the duotone value is replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockStyle(Map<String, Value>);

impl BlockStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Returns the raw `color.duotone` value.
    pub fn duotone_value(&self) -> Option<&Value> {
        self.0.get("color")?.get("duotone")
    }

    /// Returns `color.duotone` when it holds a recognized shape.
    pub fn duotone(&self) -> Option<DuotoneStyle> {
        self.duotone_value().and_then(DuotoneStyle::from_value)
    }

    /// Returns a copy with `color.duotone` replaced.
    ///
    /// Sibling keys under `color` and at the top level are preserved. `None`
    /// removes the duotone key.
    pub fn with_duotone(&self, duotone: Option<&DuotoneStyle>) -> Self {
        let mut style = self.0.clone();
        let mut color = match style.remove("color") {
            Some(Value::Object(color)) => color,
            _ => Map::new(),
        };

        match duotone {
            Some(duotone) => {
                color.insert("duotone".to_string(), duotone.to_value());
            }
            None => {
                color.remove("duotone");
            }
        }

        style.insert("color".to_string(), Value::Object(color));
        Self(style)
    }
}

impl From<Map<String, Value>> for BlockStyle {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
