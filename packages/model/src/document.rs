//! # Campaign Document
//!
//! The page definition being edited: theme plus ordered blocks.
//!
//! Documents are plain data. The editor never mutates one in place; it builds
//! a new document that shares every untouched `Arc<PageBlock>` with the
//! previous version.

use crate::{BlockIdGenerator, ModelError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Ordered property/style bag (keeps the order fields were first set)
pub type PropMap = IndexMap<String, PropValue>;

/// Value of a single prop or style entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// `false` only for NaN and infinite numbers
    pub fn is_finite(&self) -> bool {
        match self {
            PropValue::Number(n) => n.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f64)
    }
}

/// Campaign-wide look and feel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub global_font: String,

    /// Color role (e.g. "primary") → CSS color value
    #[serde(default)]
    pub global_colors: IndexMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let global_colors = [
            ("primary", "#2563eb"),
            ("secondary", "#0f172a"),
            ("accent", "#f59e0b"),
            ("background", "#ffffff"),
            ("text", "#111827"),
        ]
        .into_iter()
        .map(|(role, value)| (role.to_string(), value.to_string()))
        .collect();

        Self {
            global_font: "Inter, sans-serif".to_string(),
            global_colors,
        }
    }
}

/// One visual unit on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    pub id: String,

    /// Key into the block type registry
    #[serde(rename = "type")]
    pub block_type: String,

    /// Content-facing attributes (text, toggles, numeric settings)
    #[serde(default)]
    pub props: PropMap,

    /// Visual attributes (colors, spacing)
    #[serde(default)]
    pub styles: PropMap,
}

impl PageBlock {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            props: PropMap::new(),
            styles: PropMap::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    pub fn style(&self, key: &str) -> Option<&PropValue> {
        self.styles.get(key)
    }
}

/// Serializable page definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDocument {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub theme: Theme,

    /// Render order
    #[serde(default)]
    pub blocks: Vec<Arc<PageBlock>>,
}

impl CampaignDocument {
    /// Create an empty document with the default theme
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            theme: Theme::default(),
            blocks: Vec::new(),
        }
    }

    /// Default content for a campaign that has nothing persisted yet
    ///
    /// A header, a hero section and a call to action, so a new campaign
    /// never opens on a blank canvas.
    pub fn starter(
        id: impl Into<String>,
        name: impl Into<String>,
        ids: &mut BlockIdGenerator,
    ) -> Self {
        let mut doc = Self::new(id, name);

        let header = PageBlock::new(ids.new_id_for("Header1", &doc), "Header1")
            .with_prop("logoText", doc.name.clone())
            .with_prop("showNav", true);
        doc.blocks.push(Arc::new(header));

        let hero = PageBlock::new(ids.new_id_for("Hero1", &doc), "Hero1")
            .with_prop("title", "Your headline goes here")
            .with_prop("subtitle", "Explain the offer in one sentence.");
        doc.blocks.push(Arc::new(hero));

        let cta = PageBlock::new(ids.new_id_for("Cta1", &doc), "Cta1")
            .with_prop("buttonText", "Get started")
            .with_prop("buttonUrl", "#");
        doc.blocks.push(Arc::new(cta));

        doc
    }

    /// Parse and validate a document from JSON
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let doc: Self = serde_json::from_str(source)?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural invariants a loaded document must hold
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.is_empty() {
            return Err(ModelError::EmptyDocumentId);
        }

        let mut seen = HashSet::with_capacity(self.blocks.len());
        for (index, block) in self.blocks.iter().enumerate() {
            if block.id.is_empty() {
                return Err(ModelError::EmptyBlockId(index));
            }
            if block.block_type.is_empty() {
                return Err(ModelError::EmptyBlockType(block.id.clone()));
            }
            if !seen.insert(block.id.as_str()) {
                return Err(ModelError::DuplicateBlockId(block.id.clone()));
            }
            let non_finite = block
                .props
                .iter()
                .chain(block.styles.iter())
                .find(|(_, value)| !value.is_finite());
            if let Some((key, _)) = non_finite {
                return Err(ModelError::NonFiniteValue {
                    block_id: block.id.clone(),
                    key: key.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn find_block(&self, block_id: &str) -> Option<&Arc<PageBlock>> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn index_of(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    pub fn contains_block(&self, block_id: &str) -> bool {
        self.index_of(block_id).is_some()
    }

    pub fn block_ids(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
