//! # Block Type Registry
//!
//! Catalog of block types the editor knows how to create and render.
//! Lookups are pure; the only mutation is registering a definition while
//! the registry is being assembled.

use crate::builtin;
use crate::schema::EditSchema;
use crate::vnode::VNode;
use lander_model::{CampaignDocument, PageBlock, PropMap, PropValue};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Renders one block from its props and styles
///
/// Renderers see nothing but the block's own bags, so new block types can
/// be added without touching the editor.
pub trait BlockRenderer: Send + Sync {
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode;
}

impl<F> BlockRenderer for F
where
    F: Fn(&PropMap, &PropMap) -> VNode + Send + Sync,
{
    fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        self(props, styles)
    }
}

/// A registered block type
pub struct BlockDefinition {
    /// Registry key stored in `PageBlock::block_type`
    pub block_type: String,

    /// Palette label
    pub label: String,

    /// Props a freshly inserted block starts with
    pub default_props: PropMap,

    /// Declared settings editors (falls back to inference when absent)
    pub schema: Option<EditSchema>,

    renderer: Box<dyn BlockRenderer>,
}

impl BlockDefinition {
    pub fn new(
        block_type: impl Into<String>,
        label: impl Into<String>,
        renderer: impl BlockRenderer + 'static,
    ) -> Self {
        Self {
            block_type: block_type.into(),
            label: label.into(),
            default_props: PropMap::new(),
            schema: None,
            renderer: Box::new(renderer),
        }
    }

    pub fn with_default_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.default_props.insert(key.into(), value.into());
        self
    }

    pub fn with_schema(mut self, schema: EditSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn render(&self, props: &PropMap, styles: &PropMap) -> VNode {
        self.renderer.render(props, styles)
    }
}

impl fmt::Debug for BlockDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockDefinition")
            .field("block_type", &self.block_type)
            .field("label", &self.label)
            .field("default_props", &self.default_props)
            .field("schema", &self.schema)
            .finish()
    }
}

/// Registry of all available block types
pub struct BlockRegistry {
    definitions: Vec<BlockDefinition>,
    index: HashMap<String, usize>,
}

impl BlockRegistry {
    /// Create a registry with the built-in block catalog
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for definition in builtin::definitions() {
            registry.register(definition);
        }
        registry
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a block type. Re-registering a type replaces it in place,
    /// keeping its palette position.
    pub fn register(&mut self, definition: BlockDefinition) {
        match self.index.get(&definition.block_type) {
            Some(&slot) => {
                debug!(block_type = %definition.block_type, "Replacing block definition");
                self.definitions[slot] = definition;
            }
            None => {
                self.index
                    .insert(definition.block_type.clone(), self.definitions.len());
                self.definitions.push(definition);
            }
        }
    }

    /// Look up a block type
    pub fn resolve(&self, block_type: &str) -> Option<&BlockDefinition> {
        self.index.get(block_type).map(|&slot| &self.definitions[slot])
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.index.contains_key(block_type)
    }

    /// Block types in registration order (palette order)
    pub fn list_available_types(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|d| d.block_type.as_str())
            .collect()
    }

    pub fn definitions(&self) -> &[BlockDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Render a single block, or an inert placeholder if its type is unknown
    pub fn render_block(&self, block: &PageBlock) -> VNode {
        match self.resolve(&block.block_type) {
            Some(definition) => {
                definition
                    .render(&block.props, &block.styles)
                    .with_attr("data-block-id", block.id.clone())
            }
            None => {
                debug!(block_id = %block.id, block_type = %block.block_type, "Rendering placeholder for unknown block type");
                VNode::unknown_block(block.id.clone(), block.block_type.clone())
            }
        }
    }

    /// Render every block of a document under a themed root node
    pub fn render_document(&self, doc: &CampaignDocument) -> VNode {
        let mut root = VNode::element("main")
            .with_attr("data-campaign-id", doc.id.clone())
            .with_style("font-family", doc.theme.global_font.clone());

        for (role, value) in &doc.theme.global_colors {
            root = root.with_style(format!("--color-{}", role), value.clone());
        }

        root.with_children(doc.blocks.iter().map(|b| self.render_block(b)).collect())
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BlockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRegistry")
            .field("types", &self.list_available_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn badge(props: &PropMap, _styles: &PropMap) -> VNode {
        let label = props
            .get("label")
            .map(|v| v.to_string())
            .unwrap_or_default();
        VNode::element("span").with_child(VNode::text(label))
    }

    #[test]
    fn test_builtin_types_in_palette_order() {
        let registry = BlockRegistry::new();
        assert_eq!(
            registry.list_available_types(),
            vec!["Header1", "Hero1", "Features1", "Cta1", "Footer1"]
        );
    }

    #[test]
    fn test_resolve_unknown_type() {
        let registry = BlockRegistry::new();
        assert!(registry.resolve("Hero1").is_some());
        assert!(registry.resolve("hero1").is_none());
        assert!(registry.resolve("Carousel9").is_none());
    }

    #[test]
    fn test_register_custom_block() {
        let mut registry = BlockRegistry::empty();
        registry.register(BlockDefinition::new("Badge", "Badge", badge).with_default_prop("label", "New"));

        let def = registry.resolve("Badge").unwrap();
        assert_eq!(def.default_props.get("label"), Some(&PropValue::from("New")));

        let node = def.render(&def.default_props, &PropMap::new());
        assert_eq!(node.text_content(), "New");
    }

    #[test]
    fn test_reregister_keeps_position() {
        let mut registry = BlockRegistry::new();
        registry.register(BlockDefinition::new("Hero1", "Custom hero", badge));

        assert_eq!(registry.list_available_types()[1], "Hero1");
        assert_eq!(registry.resolve("Hero1").unwrap().label, "Custom hero");
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_render_document_with_unknown_block() {
        let registry = BlockRegistry::new();
        let mut doc = CampaignDocument::new("c1", "Test");
        doc.blocks.push(Arc::new(PageBlock::new("a", "Hero1").with_prop("title", "Hi")));
        doc.blocks.push(Arc::new(PageBlock::new("b", "Carousel9")));

        let root = registry.render_document(&doc);
        let children = root.children();
        assert_eq!(children.len(), 2);
        assert!(!children[0].is_error());
        assert!(children[1].is_error());
        assert!(root.text_content().contains("Hi"));
    }

    #[test]
    fn test_render_block_tags_block_id() {
        let registry = BlockRegistry::new();
        let block = PageBlock::new("hero-1", "Hero1");

        match registry.render_block(&block) {
            VNode::Element { attributes, .. } => {
                assert_eq!(attributes.get("data-block-id").map(String::as_str), Some("hero-1"));
            }
            other => panic!("Expected element, got {:?}", other),
        }
    }
}
