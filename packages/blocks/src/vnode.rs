use indexmap::IndexMap;
use lander_model::{PropMap, PropValue};
use serde::{Deserialize, Serialize};

/// Renderer output node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
        styles: IndexMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },

    /// Placeholder for a block whose type the registry cannot resolve
    /// (shown inline instead of failing the whole page)
    Error {
        message: String,
        block_id: String,
        block_type: String,
    },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            styles: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn unknown_block(block_id: impl Into<String>, block_type: impl Into<String>) -> Self {
        let block_type = block_type.into();
        VNode::Error {
            message: format!("Unknown block type \"{}\"", block_type),
            block_id: block_id.into(),
            block_type,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    /// Apply a block's style bag on top of the node's own styles
    pub fn with_block_styles(mut self, block_styles: &PropMap) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            for (key, value) in block_styles {
                styles.insert(css_property_name(key), css_value(value));
            }
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self, VNode::Error { .. })
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text content of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Element { children, .. } => {
                children.iter().map(|c| c.text_content()).collect()
            }
            VNode::Error { message, .. } => message.clone(),
        }
    }
}

/// `backgroundColor` → `background-color`
pub fn css_property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Numbers are treated as pixel lengths
pub fn css_value(value: &PropValue) -> String {
    match value {
        PropValue::Number(n) => format!("{}px", n),
        other => other.to_string(),
    }
}
