use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which editor control a settings field gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorKind {
    Toggle,
    Color,
    SingleLineText,
    MultiLineText,
    Number,
    /// Shown read-only
    Unsupported,
}

/// Declared editor kinds for a block type's fields
///
/// Props and styles are declared separately since the settings panel
/// shows them as two tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditSchema {
    #[serde(default)]
    pub props: IndexMap<String, EditorKind>,
    #[serde(default)]
    pub styles: IndexMap<String, EditorKind>,
}

impl EditSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, key: impl Into<String>, kind: EditorKind) -> Self {
        self.props.insert(key.into(), kind);
        self
    }

    pub fn style(mut self, key: impl Into<String>, kind: EditorKind) -> Self {
        self.styles.insert(key.into(), kind);
        self
    }

    pub fn prop_kind(&self, key: &str) -> Option<EditorKind> {
        self.props.get(key).copied()
    }

    pub fn style_kind(&self, key: &str) -> Option<EditorKind> {
        self.styles.get(key).copied()
    }
}
