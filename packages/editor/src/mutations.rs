//! # Document Mutations
//!
//! Atomic, pure transformations of a campaign document.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every operation maps `(&Arc<CampaignDocument>, params)` to a
//!    new `Arc<CampaignDocument>` and never touches its input
//! 2. **Shared**: blocks a mutation does not touch are the same `Arc` in the
//!    input and the output
//! 3. **No-ops are identity**: a mutation that finds nothing to change
//!    (missing block, unknown type, same value, same index) returns a clone
//!    of the input `Arc`, so callers detect it with `Arc::ptr_eq`
//!
//! ## Mutation Semantics
//!
//! ### InsertBlock
//! - Props are the registry defaults overlaid with the caller's props
//! - Index is clamped to `[0, len]`
//! - Unknown block type is a no-op
//!
//! ### MoveBlock
//! - Remove then reinsert at the clamped index (`[0, len - 1]`)
//! - Same index is a no-op
//!
//! ### SetBlockProp / SetBlockStyle
//! - Replace a single entry; props and styles are never merged
//! - Setting the value already stored is a no-op
//! - NaN and infinite numbers are rejected as no-ops (JSON cannot store them)

use lander_blocks::BlockRegistry;
use lander_model::{BlockIdGenerator, CampaignDocument, PageBlock, PropMap, PropValue};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// What a mutation needs beyond the document itself
pub struct MutationContext<'a> {
    pub registry: &'a BlockRegistry,
    pub ids: &'a mut BlockIdGenerator,
}

impl<'a> MutationContext<'a> {
    pub fn new(registry: &'a BlockRegistry, ids: &'a mut BlockIdGenerator) -> Self {
        Self { registry, ids }
    }
}

/// History-recorded document edits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Create a block from the registry at index
    InsertBlock {
        block_type: String,
        index: usize,
        #[serde(default)]
        default_props: PropMap,
    },

    /// Reorder an existing block
    MoveBlock { block_id: String, to_index: usize },

    RemoveBlock { block_id: String },

    SetBlockProp {
        block_id: String,
        key: String,
        value: PropValue,
    },

    SetBlockStyle {
        block_id: String,
        key: String,
        value: PropValue,
    },

    /// Copy a block (props and styles) under a fresh id at index
    DuplicateBlock { block_id: String, index: usize },

    SetCampaignName { name: String },

    SetThemeFont { font: String },

    SetThemeColor { role: String, value: String },
}

impl Mutation {
    /// Apply to `doc`, returning the next document (or `doc` itself on a no-op)
    pub fn apply(
        &self,
        doc: &Arc<CampaignDocument>,
        ctx: &mut MutationContext<'_>,
    ) -> Arc<CampaignDocument> {
        match self {
            Mutation::InsertBlock {
                block_type,
                index,
                default_props,
            } => insert_block(doc, ctx, block_type, *index, default_props),

            Mutation::MoveBlock { block_id, to_index } => move_block(doc, block_id, *to_index),

            Mutation::RemoveBlock { block_id } => remove_block(doc, block_id),

            Mutation::SetBlockProp {
                block_id,
                key,
                value,
            } => set_block_prop(doc, block_id, key, value.clone()),

            Mutation::SetBlockStyle {
                block_id,
                key,
                value,
            } => set_block_style(doc, block_id, key, value.clone()),

            Mutation::DuplicateBlock { block_id, index } => {
                duplicate_block(doc, ctx, block_id, *index)
            }

            Mutation::SetCampaignName { name } => set_campaign_name(doc, name),

            Mutation::SetThemeFont { font } => set_theme_font(doc, font),

            Mutation::SetThemeColor { role, value } => set_theme_color(doc, role, value),
        }
    }

    /// Debug name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertBlock { .. } => "insertBlock",
            Mutation::MoveBlock { .. } => "moveBlock",
            Mutation::RemoveBlock { .. } => "removeBlock",
            Mutation::SetBlockProp { .. } => "setBlockProp",
            Mutation::SetBlockStyle { .. } => "setBlockStyle",
            Mutation::DuplicateBlock { .. } => "duplicateBlock",
            Mutation::SetCampaignName { .. } => "setCampaignName",
            Mutation::SetThemeFont { .. } => "setThemeFont",
            Mutation::SetThemeColor { .. } => "setThemeColor",
        }
    }
}

/// Insert a new block of `block_type` at `at_index` (clamped to `[0, len]`)
pub fn insert_block(
    doc: &Arc<CampaignDocument>,
    ctx: &mut MutationContext<'_>,
    block_type: &str,
    at_index: usize,
    default_props: &PropMap,
) -> Arc<CampaignDocument> {
    let Some(definition) = ctx.registry.resolve(block_type) else {
        debug!(block_type, "insertBlock: unknown block type, ignoring");
        return Arc::clone(doc);
    };

    if let Some((key, _)) = default_props.iter().find(|(_, v)| !v.is_finite()) {
        debug!(block_type, key = %key, "insertBlock: non-finite number, ignoring");
        return Arc::clone(doc);
    }

    let mut props = definition.default_props.clone();
    for (key, value) in default_props {
        props.insert(key.clone(), value.clone());
    }

    let block = PageBlock {
        id: ctx.ids.new_id_for(block_type, doc),
        block_type: block_type.to_string(),
        props,
        styles: PropMap::new(),
    };

    let index = at_index.min(doc.blocks.len());
    let mut next = CampaignDocument::clone(doc);
    next.blocks.insert(index, Arc::new(block));
    Arc::new(next)
}

/// Move a block to `to_index` (clamped to `[0, len - 1]`)
pub fn move_block(
    doc: &Arc<CampaignDocument>,
    block_id: &str,
    to_index: usize,
) -> Arc<CampaignDocument> {
    let Some(from) = doc.index_of(block_id) else {
        debug!(block_id, "moveBlock: block not found, ignoring");
        return Arc::clone(doc);
    };

    let to = to_index.min(doc.blocks.len() - 1);
    if from == to {
        return Arc::clone(doc);
    }

    let mut next = CampaignDocument::clone(doc);
    let block = next.blocks.remove(from);
    next.blocks.insert(to, block);
    Arc::new(next)
}

pub fn remove_block(doc: &Arc<CampaignDocument>, block_id: &str) -> Arc<CampaignDocument> {
    if !doc.contains_block(block_id) {
        debug!(block_id, "removeBlock: block not found, ignoring");
        return Arc::clone(doc);
    }

    let mut next = CampaignDocument::clone(doc);
    next.blocks.retain(|b| b.id != block_id);
    Arc::new(next)
}

pub fn set_block_prop(
    doc: &Arc<CampaignDocument>,
    block_id: &str,
    key: &str,
    value: PropValue,
) -> Arc<CampaignDocument> {
    if !value.is_finite() {
        debug!(block_id, key, "setBlockProp: non-finite number, ignoring");
        return Arc::clone(doc);
    }
    update_block(doc, block_id, "setBlockProp", |block| {
        if block.props.get(key) == Some(&value) {
            return None;
        }
        let mut next = block.clone();
        next.props.insert(key.to_string(), value);
        Some(next)
    })
}

pub fn set_block_style(
    doc: &Arc<CampaignDocument>,
    block_id: &str,
    key: &str,
    value: PropValue,
) -> Arc<CampaignDocument> {
    if !value.is_finite() {
        debug!(block_id, key, "setBlockStyle: non-finite number, ignoring");
        return Arc::clone(doc);
    }
    update_block(doc, block_id, "setBlockStyle", |block| {
        if block.styles.get(key) == Some(&value) {
            return None;
        }
        let mut next = block.clone();
        next.styles.insert(key.to_string(), value);
        Some(next)
    })
}

/// Copy an existing block under a fresh id at `at_index` (clamped to `[0, len]`)
pub fn duplicate_block(
    doc: &Arc<CampaignDocument>,
    ctx: &mut MutationContext<'_>,
    block_id: &str,
    at_index: usize,
) -> Arc<CampaignDocument> {
    let Some(source) = doc.find_block(block_id) else {
        debug!(block_id, "duplicateBlock: block not found, ignoring");
        return Arc::clone(doc);
    };

    let copy = PageBlock {
        id: ctx.ids.new_id_for(&source.block_type, doc),
        block_type: source.block_type.clone(),
        props: source.props.clone(),
        styles: source.styles.clone(),
    };

    let index = at_index.min(doc.blocks.len());
    let mut next = CampaignDocument::clone(doc);
    next.blocks.insert(index, Arc::new(copy));
    Arc::new(next)
}

pub fn set_campaign_name(doc: &Arc<CampaignDocument>, name: &str) -> Arc<CampaignDocument> {
    if doc.name == name {
        return Arc::clone(doc);
    }
    let mut next = CampaignDocument::clone(doc);
    next.name = name.to_string();
    Arc::new(next)
}

pub fn set_theme_font(doc: &Arc<CampaignDocument>, font: &str) -> Arc<CampaignDocument> {
    if doc.theme.global_font == font {
        return Arc::clone(doc);
    }
    let mut next = CampaignDocument::clone(doc);
    next.theme.global_font = font.to_string();
    Arc::new(next)
}

pub fn set_theme_color(
    doc: &Arc<CampaignDocument>,
    role: &str,
    value: &str,
) -> Arc<CampaignDocument> {
    if doc.theme.global_colors.get(role).map(String::as_str) == Some(value) {
        return Arc::clone(doc);
    }
    let mut next = CampaignDocument::clone(doc);
    next.theme
        .global_colors
        .insert(role.to_string(), value.to_string());
    Arc::new(next)
}

/// Wholesale replacement, used for hydration only
pub fn replace_document(
    _doc: &Arc<CampaignDocument>,
    new_doc: Arc<CampaignDocument>,
) -> Arc<CampaignDocument> {
    new_doc
}

/// Swap one block for an updated copy; `None` from `f` means nothing changed
fn update_block<F>(
    doc: &Arc<CampaignDocument>,
    block_id: &str,
    op: &'static str,
    f: F,
) -> Arc<CampaignDocument>
where
    F: FnOnce(&PageBlock) -> Option<PageBlock>,
{
    let Some(index) = doc.index_of(block_id) else {
        debug!(op, block_id, "block not found, ignoring");
        return Arc::clone(doc);
    };

    match f(&doc.blocks[index]) {
        Some(updated) => {
            let mut next = CampaignDocument::clone(doc);
            next.blocks[index] = Arc::new(updated);
            Arc::new(next)
        }
        None => {
            debug!(op, block_id, "value unchanged, ignoring");
            Arc::clone(doc)
        }
    }
}
