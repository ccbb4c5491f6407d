//! Duotone support composed for an editor canvas.
//!
//! [`DuotoneEditor`] ties the pieces together for each render pass of a
//! block: it looks up the block type's filter selector, assigns the instance
//! its filter class, scopes the selector to that class and hands the
//! generated markup to a [`StyleSurface`]. Collaborators are passed in
//! explicitly; nothing is registered globally.

use serde::{Deserialize, Serialize};

use crate::filter::{DuotoneMarkup, FilterRenderer, RenderError};
use crate::instance::InstanceIds;
use crate::panel::{DuotoneOptions, DuotonePanel};
use crate::preset::{DuotonePalette, PresetResolver};
use crate::registry::FilterSelectors;
use crate::selector::compute_scoped_duotone_selectors;
use crate::style::{BlockStyle, DuotoneStyle};

/// Where generated filter markup is inserted.
pub trait StyleSurface {
    /// Inserts or replaces the markup stored under `key`.
    fn insert(&mut self, key: &str, markup: DuotoneMarkup);

    /// Removes the markup stored under `key`, returning whether it existed.
    fn remove(&mut self, key: &str) -> bool;
}

/// An in-memory surface keeping markup in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    entries: Vec<(String, DuotoneMarkup)>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&DuotoneMarkup> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, markup)| markup)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DuotoneMarkup> {
        self.entries.iter().map(|(_, markup)| markup)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenates every entry's markup, one per line.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(DuotoneMarkup::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSurface for Stylesheet {
    fn insert(&mut self, key: &str, markup: DuotoneMarkup) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = markup,
            None => self.entries.push((key.to_string(), markup)),
        }
    }

    fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        self.entries.len() != before
    }
}

/// Attributes of a block instance relevant to duotone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// A block instance in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub attributes: BlockAttributes,
}

impl Block {
    pub fn new(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            name: name.into(),
            attributes: BlockAttributes::default(),
        }
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.attributes.style = Some(style);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.attributes.class_name = Some(class_name.into());
        self
    }

    pub fn duotone(&self) -> Option<DuotoneStyle> {
        self.attributes.style.as_ref().and_then(BlockStyle::duotone)
    }
}

/// Outcome of rendering one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRender {
    /// Class names for the block wrapper, including the filter class.
    pub class_name: Option<String>,
    /// The filter id, when the block carries a duotone.
    pub filter_id: Option<String>,
}

/// Renders the markup for one instance's duotone style.
///
/// `Unset` produces a rule removing inherited filters and is handled before
/// any preset lookup. Colors produce a filter and its rule. References are
/// resolved through `resolver`; references that match no preset, like other
/// CSS strings, produce nothing.
pub fn duotone_styles<R>(
    renderer: &FilterRenderer,
    id: &str,
    selector: &str,
    style: &DuotoneStyle,
    resolver: &R,
) -> Result<Option<DuotoneMarkup>, RenderError>
where
    R: PresetResolver + ?Sized,
{
    let markup = match style {
        DuotoneStyle::Unset => Some(renderer.unset_markup(id, selector)?),
        DuotoneStyle::Colors(colors) => Some(renderer.filter_markup(id, selector, colors)?),
        DuotoneStyle::Reference(reference) => {
            match resolver.colors_for_preset(Some(reference.as_str())) {
                Some(colors) => Some(renderer.filter_markup(id, selector, colors)?),
                None => None,
            }
        }
    };
    Ok(markup)
}

/// Duotone support for one editor canvas.
///
/// # Example
///
/// ```rust
/// use duotone::{
///     Block, BlockStyle, BlockType, BlockTypeRegistry, DuotoneEditor, DuotoneOptions,
///     DuotonePalette, DuotonePreset, Stylesheet,
/// };
///
/// let registry = BlockTypeRegistry::from_block_types([
///     BlockType::new("core/image").with_duotone("img"),
/// ])
/// .unwrap();
/// let options = DuotoneOptions {
///     palette: DuotonePalette::new().add(DuotonePreset::new("sea", ["#003", "#0cf"])),
///     ..DuotoneOptions::default()
/// };
/// let editor = DuotoneEditor::new(&registry, options).unwrap();
///
/// let style: BlockStyle =
///     serde_json::from_str(r#"{"color": {"duotone": "var:preset|duotone|sea"}}"#).unwrap();
/// let block = Block::new("b1", "core/image").with_style(style);
///
/// let mut stylesheet = Stylesheet::new();
/// let render = editor.render_block(&block, Some(&mut stylesheet)).unwrap();
///
/// assert_eq!(render.class_name.as_deref(), Some("wp-duotone-1"));
/// assert_eq!(
///     stylesheet.get("wp-duotone-1").unwrap().css,
///     ".editor-styles-wrapper .wp-duotone-1img{filter:url(#wp-duotone-1);}",
/// );
/// ```
pub struct DuotoneEditor<'a> {
    block_types: &'a dyn FilterSelectors,
    options: DuotoneOptions,
    ids: InstanceIds,
    renderer: &'static FilterRenderer,
}

impl<'a> DuotoneEditor<'a> {
    /// Creates an editor over `block_types` with the given palettes.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter templates fail to compile.
    pub fn new(
        block_types: &'a dyn FilterSelectors,
        options: DuotoneOptions,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            block_types,
            options,
            ids: InstanceIds::new(),
            renderer: FilterRenderer::shared()?,
        })
    }

    pub fn options(&self) -> &DuotoneOptions {
        &self.options
    }

    pub fn palette(&self) -> &DuotonePalette {
        &self.options.palette
    }

    /// Returns the controls for `block`, if its type supports duotone.
    pub fn panel(&self, block: &Block, content_locked: bool) -> Option<DuotonePanel<'_>> {
        self.block_types.duotone_selector(&block.name)?;
        DuotonePanel::build(block.attributes.style.as_ref(), &self.options, content_locked)
    }

    /// Applies a value picked in the controls to `block`.
    ///
    /// Does nothing when the block would not show controls.
    pub fn change(&self, block: &mut Block, new_value: Option<DuotoneStyle>) {
        let Some(panel) = self.panel(block, false) else {
            return;
        };
        let current = block.attributes.style.clone();
        panel.change(current.as_ref(), new_value, |style| {
            block.attributes.style = Some(style);
        });
    }

    /// Renders `block`'s duotone into `surface` and returns its class names.
    ///
    /// Blocks whose type has no filter selector, or which carry no duotone
    /// value, keep their class names and render nothing. Without a surface
    /// the class is still assigned but no markup is produced.
    pub fn render_block(
        &self,
        block: &Block,
        surface: Option<&mut dyn StyleSurface>,
    ) -> Result<BlockRender, RenderError> {
        let class_name = block.attributes.class_name.clone();
        let (Some(selector_list), Some(style)) = (
            self.block_types.duotone_selector(&block.name),
            block.duotone(),
        ) else {
            return Ok(BlockRender {
                class_name,
                filter_id: None,
            });
        };

        let id = self.ids.id_for(&block.client_id);
        let selector = compute_scoped_duotone_selectors(&id, selector_list);

        if let Some(surface) = surface {
            match duotone_styles(self.renderer, &id, &selector, &style, &self.options.palette)? {
                Some(markup) => surface.insert(&id, markup),
                None => {
                    tracing::debug!(block = %block.client_id, "duotone value renders no filter");
                    surface.remove(&id);
                }
            }
        }

        Ok(BlockRender {
            class_name: Some(join_class_names(class_name.as_deref(), &id)),
            filter_id: Some(id),
        })
    }

    /// Drops a removed block's markup and forgets its instance id.
    pub fn remove_block(&self, client_id: &str, surface: Option<&mut dyn StyleSurface>) {
        let Some(id) = self.ids.get(client_id) else {
            return;
        };
        if let Some(surface) = surface {
            surface.remove(&id);
        }
        self.ids.release(client_id);
    }
}

fn join_class_names(existing: Option<&str>, class: &str) -> String {
    match existing.map(str::trim).filter(|existing| !existing.is_empty()) {
        Some(existing) => format!("{} {}", existing, class),
        None => class.to_string(),
    }
}
