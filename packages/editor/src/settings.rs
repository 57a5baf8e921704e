//! # Settings Projection
//!
//! Derives the editable field list for the selected block. A block type's
//! declared `EditSchema` wins; fields it does not declare get an editor
//! inferred from key name and value shape.

use lander_blocks::{BlockRegistry, EditSchema, EditorKind};
use lander_model::{CampaignDocument, PropMap, PropValue};
use serde::Serialize;

/// Strings longer than this (in characters) get a multi-line editor
pub const LONG_TEXT_THRESHOLD: usize = 60;

/// One editable entry of a block's props or styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsField {
    pub key: String,
    pub value: PropValue,
    pub editor: EditorKind,
}

/// What the settings panel should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SettingsProjection {
    /// Nothing (or a block that no longer exists) is selected
    Empty,

    Block {
        block_id: String,
        block_type: String,
        props: Vec<SettingsField>,
        styles: Vec<SettingsField>,
    },
}

impl SettingsProjection {
    pub fn is_empty(&self) -> bool {
        matches!(self, SettingsProjection::Empty)
    }

    pub fn props(&self) -> &[SettingsField] {
        match self {
            SettingsProjection::Block { props, .. } => props,
            SettingsProjection::Empty => &[],
        }
    }

    pub fn styles(&self) -> &[SettingsField] {
        match self {
            SettingsProjection::Block { styles, .. } => styles,
            SettingsProjection::Empty => &[],
        }
    }
}

/// Fallback editor choice from key name and value shape
pub fn infer_editor_kind(key: &str, value: &PropValue) -> EditorKind {
    match value {
        PropValue::Bool(_) => EditorKind::Toggle,
        _ if key.to_lowercase().contains("color") => EditorKind::Color,
        PropValue::Text(s) if s.chars().count() > LONG_TEXT_THRESHOLD => EditorKind::MultiLineText,
        PropValue::Text(_) => EditorKind::SingleLineText,
        _ => EditorKind::Unsupported,
    }
}

/// Project the settings panel for `selected` in `doc`
pub fn project_settings(
    doc: &CampaignDocument,
    selected: Option<&str>,
    registry: &BlockRegistry,
) -> SettingsProjection {
    let Some(block) = selected.and_then(|id| doc.find_block(id)) else {
        return SettingsProjection::Empty;
    };

    let schema = registry
        .resolve(&block.block_type)
        .and_then(|definition| definition.schema.as_ref());

    SettingsProjection::Block {
        block_id: block.id.clone(),
        block_type: block.block_type.clone(),
        props: fields(&block.props, schema, false),
        styles: fields(&block.styles, schema, true),
    }
}

fn fields(bag: &PropMap, schema: Option<&EditSchema>, is_style: bool) -> Vec<SettingsField> {
    bag.iter()
        .map(|(key, value)| SettingsField {
            key: key.clone(),
            value: value.clone(),
            editor: editor_kind_for(schema, key, value, is_style),
        })
        .collect()
}

/// Editor kind for a single field, schema first
pub fn editor_kind_for(
    schema: Option<&EditSchema>,
    key: &str,
    value: &PropValue,
    is_style: bool,
) -> EditorKind {
    let declared = schema.and_then(|s| {
        if is_style {
            s.style_kind(key)
        } else {
            s.prop_kind(key)
        }
    });
    declared.unwrap_or_else(|| infer_editor_kind(key, value))
}
