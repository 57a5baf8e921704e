//! # Lander Blocks
//!
//! Block type registry and renderers for campaign pages.
//!
//! ```text
//! PageBlock { type, props, styles }
//!         ↓ BlockRegistry::resolve(type)
//! BlockDefinition { defaults, schema, renderer }
//!         ↓ render(props, styles)
//! VNode tree  →  html::page_to_html
//! ```
//!
//! Unknown block types never fail a render: the registry substitutes a
//! `VNode::Error` placeholder so the rest of the page still shows.

pub mod builtin;
pub mod html;
pub mod registry;
pub mod schema;
pub mod vnode;

pub use html::{page_to_html, to_html, HtmlOptions};
pub use registry::{BlockDefinition, BlockRegistry, BlockRenderer};
pub use schema::{EditSchema, EditorKind};
pub use vnode::VNode;
