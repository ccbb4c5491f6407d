//! Duotone controls for a selected block.
//!
//! The panel decides whether duotone controls are offered at all, what value
//! they show, and how a picked value is written back to the block's `style`
//! attribute. Drawing the controls is left to the embedding UI.

use crate::color::{default_colors, PaletteColor};
use crate::preset::{DuotonePalette, PresetResolver};
use crate::settings::{Settings, CUSTOM_COLORS_SETTING, CUSTOM_DUOTONE_SETTING};
use crate::style::{BlockStyle, DuotoneStyle};

/// Palettes and permissions that shape the duotone controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuotoneOptions {
    pub palette: DuotonePalette,
    pub color_palette: Vec<PaletteColor>,
    pub custom_colors: bool,
    pub custom_duotone: bool,
}

impl DuotoneOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            palette: DuotonePalette::from_source(settings),
            color_palette: settings.color_palette(),
            custom_colors: settings.flag(CUSTOM_COLORS_SETTING, true),
            custom_duotone: settings.flag(CUSTOM_DUOTONE_SETTING, true),
        }
    }

    pub fn disable_custom_colors(&self) -> bool {
        !self.custom_colors
    }

    /// Custom duotones need the setting, and some colors to pick from.
    pub fn disable_custom_duotone(&self) -> bool {
        !self.custom_duotone || (self.color_palette.is_empty() && self.disable_custom_colors())
    }
}

/// State of the duotone controls for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct DuotonePanel<'a> {
    pub options: &'a DuotoneOptions,
    /// Current value: explicit colors, a preset's colors, or `Unset`.
    pub value: Option<DuotoneStyle>,
    /// Starting colors offered for a new custom duotone.
    pub default_colors: Vec<String>,
}

impl<'a> DuotonePanel<'a> {
    /// Builds the panel, or returns `None` when no controls should show.
    ///
    /// Controls are hidden for content-locked blocks and when there is
    /// neither a preset to choose nor permission to build a custom duotone.
    pub fn build(
        style: Option<&BlockStyle>,
        options: &'a DuotoneOptions,
        content_locked: bool,
    ) -> Option<Self> {
        if content_locked {
            return None;
        }
        if options.palette.is_empty() && options.disable_custom_duotone() {
            return None;
        }

        let value = style.and_then(BlockStyle::duotone).and_then(|duotone| {
            match duotone {
                DuotoneStyle::Reference(reference) => options
                    .palette
                    .colors_for_preset(Some(reference.as_str()))
                    .map(|colors| DuotoneStyle::Colors(colors.to_vec())),
                other => Some(other),
            }
        });

        Some(Self {
            options,
            value,
            default_colors: default_colors(&options.color_palette),
        })
    }

    /// Writes a newly picked value back through `set_style`.
    ///
    /// Colors matching a preset are stored as that preset's reference so the
    /// block follows later edits to the preset. `None` clears the value.
    pub fn change<F>(&self, style: Option<&BlockStyle>, new_value: Option<DuotoneStyle>, set_style: F)
    where
        F: FnOnce(BlockStyle),
    {
        let duotone = new_value
            .as_ref()
            .and_then(|value| value.preset_reference(&self.options.palette))
            .map(DuotoneStyle::Reference)
            .or(new_value);

        let style = style.cloned().unwrap_or_default();
        set_style(style.with_duotone(duotone.as_ref()));
    }
}
