//! The duotone style value.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::preset::PresetResolver;

/// Sentinel that removes a duotone applied by global styles.
pub const UNSET: &str = "unset";

/// The value of a block's `style.color.duotone` attribute.
///
/// In serialized form this is either the string `"unset"`, an array of
/// color strings ordered dark to light, or any other string, usually a
/// symbolic preset reference such as `var:preset|duotone|blue-orange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuotoneStyle {
    /// Explicitly removes any inherited duotone filter.
    Unset,
    /// Custom colors, dark to light.
    Colors(Vec<String>),
    /// A preset reference or another CSS string.
    Reference(String),
}

impl DuotoneStyle {
    /// Reads a style from an attribute value.
    ///
    /// Returns `None` for shapes the attribute never legitimately holds:
    /// numbers, booleans, objects, null, and arrays with non-string entries.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if s == UNSET => Some(DuotoneStyle::Unset),
            Value::String(s) => Some(DuotoneStyle::Reference(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(DuotoneStyle::Colors),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            DuotoneStyle::Unset => Value::String(UNSET.to_string()),
            DuotoneStyle::Colors(colors) => {
                Value::Array(colors.iter().cloned().map(Value::String).collect())
            }
            DuotoneStyle::Reference(reference) => Value::String(reference.clone()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, DuotoneStyle::Unset)
    }

    /// Returns the custom colors, if this is a color list.
    pub fn colors(&self) -> Option<&[String]> {
        match self {
            DuotoneStyle::Colors(colors) => Some(colors),
            _ => None,
        }
    }

    /// Returns the reference string, if this is neither `unset` nor a color list.
    pub fn reference(&self) -> Option<&str> {
        match self {
            DuotoneStyle::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Returns the colors this style renders with.
    ///
    /// Custom colors are returned as-is and references are looked up through
    /// `resolver`. `Unset` never reaches the resolver.
    pub fn resolved_colors<'a, R>(&'a self, resolver: &'a R) -> Option<&'a [String]>
    where
        R: PresetResolver + ?Sized,
    {
        match self {
            DuotoneStyle::Unset => None,
            DuotoneStyle::Colors(colors) => Some(colors),
            DuotoneStyle::Reference(reference) => {
                resolver.colors_for_preset(Some(reference.as_str()))
            }
        }
    }

    /// Returns the preset reference equivalent to this style's colors.
    ///
    /// Only color lists are matched; every other variant yields `None`.
    pub fn preset_reference<R>(&self, resolver: &R) -> Option<String>
    where
        R: PresetResolver + ?Sized,
    {
        self.colors().and_then(|colors| resolver.preset_for_colors(colors))
    }
}

impl From<&str> for DuotoneStyle {
    fn from(value: &str) -> Self {
        if value == UNSET {
            DuotoneStyle::Unset
        } else {
            DuotoneStyle::Reference(value.to_string())
        }
    }
}

impl From<String> for DuotoneStyle {
    fn from(value: String) -> Self {
        if value == UNSET {
            DuotoneStyle::Unset
        } else {
            DuotoneStyle::Reference(value)
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for DuotoneStyle {
    fn from(colors: Vec<S>) -> Self {
        DuotoneStyle::Colors(colors.into_iter().map(Into::into).collect())
    }
}

impl Serialize for DuotoneStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DuotoneStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        DuotoneStyle::from_value(&value)
            .ok_or_else(|| D::Error::custom("expected a list of color strings or a string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::DuotonePreset;
    use serde_json::json;

    fn palette() -> Vec<DuotonePreset> {
        vec![DuotonePreset::new("blue-red", ["#0000ff", "#ff0000"])]
    }

    #[test]
    fn test_from_value_variants() {
        assert_eq!(
            DuotoneStyle::from_value(&json!("unset")),
            Some(DuotoneStyle::Unset)
        );
        assert_eq!(
            DuotoneStyle::from_value(&json!(["#000", "#fff"])),
            Some(DuotoneStyle::from(vec!["#000", "#fff"]))
        );
        assert_eq!(
            DuotoneStyle::from_value(&json!("var:preset|duotone|blue-red")),
            Some(DuotoneStyle::Reference("var:preset|duotone|blue-red".into()))
        );
    }

    #[test]
    fn test_from_value_out_of_contract() {
        assert_eq!(DuotoneStyle::from_value(&json!(42)), None);
        assert_eq!(DuotoneStyle::from_value(&json!(null)), None);
        assert_eq!(DuotoneStyle::from_value(&json!({"a": 1})), None);
        assert_eq!(DuotoneStyle::from_value(&json!(["#000", 1])), None);
    }

    #[test]
    fn test_unset_is_not_a_reference_or_colors() {
        let style = DuotoneStyle::from("unset");
        assert!(style.is_unset());
        assert_eq!(style.colors(), None);
        assert_eq!(style.reference(), None);
        assert_eq!(style.resolved_colors(palette().as_slice()), None);
        assert_eq!(style.preset_reference(palette().as_slice()), None);
    }

    #[test]
    fn test_resolved_colors_through_reference() {
        let palette = palette();
        let style = DuotoneStyle::from("var:preset|duotone|blue-red");
        assert_eq!(
            style.resolved_colors(palette.as_slice()).unwrap(),
            ["#0000ff", "#ff0000"]
        );

        let missing = DuotoneStyle::from("var:preset|duotone|nope");
        assert_eq!(missing.resolved_colors(palette.as_slice()), None);
    }

    #[test]
    fn test_preset_reference_only_for_colors() {
        let palette = palette();
        let colors = DuotoneStyle::from(vec!["#0000ff", "#ff0000"]);
        assert_eq!(
            colors.preset_reference(palette.as_slice()).as_deref(),
            Some("var:preset|duotone|blue-red")
        );

        let string = DuotoneStyle::from("#0000ff");
        assert_eq!(string.preset_reference(palette.as_slice()), None);
    }

    #[test]
    fn test_serde_shapes() {
        let style: DuotoneStyle = serde_json::from_str(r##"["#111", "#eee"]"##).unwrap();
        assert_eq!(style.colors().unwrap().len(), 2);
        assert_eq!(serde_json::to_value(&style).unwrap(), json!(["#111", "#eee"]));

        let unset: DuotoneStyle = serde_json::from_str(r#""unset""#).unwrap();
        assert_eq!(unset, DuotoneStyle::Unset);

        assert!(serde_json::from_str::<DuotoneStyle>("3").is_err());
    }
}
