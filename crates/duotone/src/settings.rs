//! Editor settings loaded from JSON or YAML.
//!
//! Settings are kept as a JSON tree and looked up by dot separated paths
//! such as `color.duotone`. A document may either be the settings object
//! itself or a theme document carrying it under a top-level `settings` key:
//!
//! ```json
//! {
//!   "version": 2,
//!   "settings": {
//!     "color": {
//!       "customDuotone": true,
//!       "duotone": [
//!         { "slug": "blue-orange", "colors": ["#0d3b66", "#f4a259"] }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Tiered settings (`color.duotone`, `color.palette`) accept either an
//! object with `custom`, `theme` and `default` lists or a plain list, which
//! is read as the theme tier.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::color::PaletteColor;
use crate::preset::{DuotonePreset, PresetSource, Tiers};

/// Settings path of the plain color palette.
pub const PALETTE_SETTING: &str = "color.palette";

/// Settings path of the flag allowing arbitrary colors.
pub const CUSTOM_COLORS_SETTING: &str = "color.custom";

/// Settings path of the flag allowing custom duotones.
pub const CUSTOM_DUOTONE_SETTING: &str = "color.customDuotone";

/// Error returned when settings cannot be loaded or read.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported settings file '{}' (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid value at '{path}': {message}")]
    InvalidValue { path: String, message: String },
}

/// A settings tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    root: Value,
}

impl Settings {
    /// Wraps a settings tree, unwrapping a theme document's `settings` key.
    pub fn new(document: Value) -> Self {
        let root = match document {
            Value::Object(mut map) if map.get("settings").is_some_and(Value::is_object) => {
                map.remove("settings").unwrap_or_default()
            }
            other => other,
        };
        Self { root }
    }

    pub fn from_json_str(source: &str) -> Result<Self, SettingsError> {
        Ok(Self::new(serde_json::from_str(source)?))
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, SettingsError> {
        Ok(Self::new(serde_yaml::from_str(source)?))
    }

    /// Loads a settings file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, SettingsError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(SettingsError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = parse(&source)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Returns the raw value at a dot separated path.
    pub fn value(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.root, |value, segment| value.get(segment))
    }

    /// Deserializes the value at `path`.
    ///
    /// Returns `Ok(None)` when nothing is stored there.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, SettingsError> {
        let Some(value) = self.value(path) else {
            return Ok(None);
        };
        T::deserialize(value)
            .map(Some)
            .map_err(|err| SettingsError::InvalidValue {
                path: path.to_string(),
                message: err.to_string(),
            })
    }

    /// Reads a boolean, falling back to `default` when unset or not a boolean.
    pub fn flag(&self, path: &str, default: bool) -> bool {
        self.value(path).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Returns tiers stored at `path`, or empty tiers when absent or invalid.
    pub fn tiers<T: DeserializeOwned>(&self, path: &str) -> Tiers<T> {
        match self.get::<Tiers<T>>(path) {
            Ok(tiers) => tiers.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring invalid tiered setting");
                Tiers::default()
            }
        }
    }

    /// Returns the plain color palette with all tiers merged, custom first.
    pub fn color_palette(&self) -> Vec<PaletteColor> {
        let tiers = self.tiers::<PaletteColor>(PALETTE_SETTING);
        [tiers.custom, tiers.theme, tiers.default]
            .into_iter()
            .flatten()
            .flatten()
            .collect()
    }
}

impl PresetSource for Settings {
    fn preset_tiers(&self, path: &str) -> Tiers<DuotonePreset> {
        self.tiers(path)
    }

    fn flag(&self, path: &str, default: bool) -> bool {
        Settings::flag(self, path, default)
    }
}
