//! Block type registry.
//!
//! Block types declare duotone support by naming, under
//! `supports.color.duotone`, the selector of the elements the filter applies
//! to. Registration gives such types a `style` attribute so instances can
//! store their duotone value.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error type for block type registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A block type with this name is already registered.
    #[error("block type '{name}' is already registered")]
    Duplicate { name: String },

    /// Block type names must look like `namespace/name`.
    #[error("invalid block type name '{name}': expected 'namespace/name'")]
    InvalidName { name: String },
}

/// Schema of a single block attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSchema {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AttributeSchema {
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            default: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSupports {
    /// Selector of the elements receiving the duotone filter.
    #[serde(
        default,
        alias = "__experimentalDuotone",
        skip_serializing_if = "Option::is_none"
    )]
    pub duotone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSupports {
    #[serde(default)]
    pub color: ColorSupports,
}

/// A registered kind of block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockType {
    pub name: String,
    #[serde(default)]
    pub supports: BlockSupports,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSchema>,
}

impl BlockType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supports: BlockSupports::default(),
            attributes: BTreeMap::new(),
        }
    }

    /// Declares duotone support for the elements matching `selector`.
    pub fn with_duotone(mut self, selector: impl Into<String>) -> Self {
        self.supports.color.duotone = Some(selector.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, schema: AttributeSchema) -> Self {
        self.attributes.insert(name.into(), schema);
        self
    }

    pub fn duotone_selector(&self) -> Option<&str> {
        self.supports.color.duotone.as_deref()
    }

    pub fn supports_duotone(&self) -> bool {
        self.duotone_selector().is_some()
    }
}

/// Adds an object-typed `style` attribute to block types supporting duotone.
///
/// Existing `style` schemas and types without duotone support are returned
/// unchanged.
pub fn add_duotone_attributes(mut block_type: BlockType) -> BlockType {
    if block_type.supports_duotone() && !block_type.attributes.contains_key("style") {
        block_type
            .attributes
            .insert("style".to_string(), AttributeSchema::of_type("object"));
    }
    block_type
}

/// Looks up the duotone selector a block type registers.
pub trait FilterSelectors {
    fn duotone_selector(&self, block_name: &str) -> Option<&str>;
}

/// Registered block types, by name.
///
/// # Example
///
/// ```rust
/// use duotone::{BlockType, BlockTypeRegistry, FilterSelectors};
///
/// let mut registry = BlockTypeRegistry::new();
/// registry.register(BlockType::new("core/image").with_duotone("img")).unwrap();
///
/// assert_eq!(registry.duotone_selector("core/image"), Some("img"));
/// assert!(registry.get("core/image").unwrap().attributes.contains_key("style"));
/// assert!(registry.register(BlockType::new("core/image")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockTypeRegistry {
    block_types: HashMap<String, BlockType>,
}

impl BlockTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from block types, failing on the first invalid one.
    pub fn from_block_types<I>(block_types: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = BlockType>,
    {
        let mut registry = Self::new();
        for block_type in block_types {
            registry.register(block_type)?;
        }
        Ok(registry)
    }

    /// Registers a block type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for names not shaped like
    /// `namespace/name` and [`RegistryError::Duplicate`] for names already
    /// registered.
    pub fn register(&mut self, block_type: BlockType) -> Result<&BlockType, RegistryError> {
        if !is_valid_name(&block_type.name) {
            return Err(RegistryError::InvalidName {
                name: block_type.name,
            });
        }
        if self.block_types.contains_key(&block_type.name) {
            return Err(RegistryError::Duplicate {
                name: block_type.name,
            });
        }

        let block_type = add_duotone_attributes(block_type);
        tracing::debug!(
            name = %block_type.name,
            duotone = block_type.duotone_selector(),
            "registered block type"
        );
        let name = block_type.name.clone();
        Ok(self.block_types.entry(name).or_insert(block_type))
    }

    pub fn get(&self, name: &str) -> Option<&BlockType> {
        self.block_types.get(name)
    }

    /// Returns registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.block_types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.block_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block_types.is_empty()
    }
}

impl FilterSelectors for BlockTypeRegistry {
    fn duotone_selector(&self, block_name: &str) -> Option<&str> {
        self.get(block_name).and_then(BlockType::duotone_selector)
    }
}

fn is_valid_name(name: &str) -> bool {
    match name.split_once('/') {
        Some((namespace, local)) => {
            !namespace.is_empty() && !local.is_empty() && !local.contains('/')
        }
        None => false,
    }
}
