//! Presets and palettes assembled from tiered settings.

use serde::{Deserialize, Deserializer, Serialize};

/// Settings path of the tiered duotone preset lists.
pub const DUOTONE_SETTING: &str = "color.duotone";

/// Settings path of the flag that hides the default preset tier.
pub const DEFAULT_DUOTONE_SETTING: &str = "color.defaultDuotone";

/// A named, ordered list of colors, dark to light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuotonePreset {
    pub slug: String,
    pub colors: Vec<String>,
    /// Human readable label, when the settings provide one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DuotonePreset {
    /// Creates a preset without a display name.
    pub fn new<C, I>(slug: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            slug: slug.into(),
            colors: colors.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    /// Sets the display name, returning the updated preset.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Values split by origin: user customizations, the theme and core defaults.
///
/// In settings documents a tiered value is either an object with any of the
/// `custom`, `theme` and `default` keys, or a plain array, which is read as
/// the theme tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tiers<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<T>>,
}

impl<T> Default for Tiers<T> {
    fn default() -> Self {
        Self {
            custom: None,
            theme: None,
            default: None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tiers<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Flat(Vec<T>),
            Split {
                custom: Option<Vec<T>>,
                theme: Option<Vec<T>>,
                default: Option<Vec<T>>,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flat(theme) => Tiers {
                custom: None,
                theme: Some(theme),
                default: None,
            },
            Repr::Split {
                custom,
                theme,
                default,
            } => Tiers {
                custom,
                theme,
                default,
            },
        })
    }
}

/// Supplies tiered presets and flags, looked up by settings path.
pub trait PresetSource {
    /// Returns the preset tiers stored at `path`.
    fn preset_tiers(&self, path: &str) -> Tiers<DuotonePreset>;

    /// Returns the boolean stored at `path`, or `default` when unset.
    fn flag(&self, path: &str, default: bool) -> bool;
}

/// Ordered presets offered to the user.
///
/// Order is significant: lookups return the first match, so presets from
/// higher precedence tiers shadow later ones with the same slug.
///
/// # Example
///
/// ```rust
/// use duotone::{DuotonePalette, DuotonePreset};
///
/// let palette = DuotonePalette::new()
///     .add(DuotonePreset::new("grayscale", ["#000000", "#ffffff"]))
///     .add(DuotonePreset::new("sepia", ["#2b1b0e", "#f0d9b5"]));
///
/// assert_eq!(palette.len(), 2);
/// assert!(palette.get("sepia").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuotonePalette {
    presets: Vec<DuotonePreset>,
}

impl DuotonePalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a palette from presets in their given order.
    pub fn from_presets(presets: Vec<DuotonePreset>) -> Self {
        Self { presets }
    }

    /// Merges tiers in precedence order: custom, theme, then default.
    ///
    /// Slugs are not deduplicated; list order decides which preset wins.
    pub fn from_tiers(tiers: &Tiers<DuotonePreset>, include_default: bool) -> Self {
        let default = if include_default {
            tiers.default.as_deref()
        } else {
            None
        };

        let presets = [tiers.custom.as_deref(), tiers.theme.as_deref(), default]
            .into_iter()
            .flatten()
            .flatten()
            .cloned()
            .collect();

        Self { presets }
    }

    /// Assembles the palette from the `color.duotone` setting.
    ///
    /// The default tier is left out when `color.defaultDuotone` is `false`.
    pub fn from_source<S: PresetSource + ?Sized>(source: &S) -> Self {
        let tiers = source.preset_tiers(DUOTONE_SETTING);
        let include_default = source.flag(DEFAULT_DUOTONE_SETTING, true);
        let palette = Self::from_tiers(&tiers, include_default);
        tracing::debug!(
            presets = palette.len(),
            include_default,
            "assembled duotone palette"
        );
        palette
    }

    /// Appends a preset, returning the updated palette for chaining.
    pub fn add(mut self, preset: DuotonePreset) -> Self {
        self.presets.push(preset);
        self
    }

    /// Returns the first preset with the given slug.
    pub fn get(&self, slug: &str) -> Option<&DuotonePreset> {
        self.presets.iter().find(|preset| preset.slug == slug)
    }

    pub fn presets(&self) -> &[DuotonePreset] {
        &self.presets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DuotonePreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl<'a> IntoIterator for &'a DuotonePalette {
    type Item = &'a DuotonePreset;
    type IntoIter = std::slice::Iter<'a, DuotonePreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
