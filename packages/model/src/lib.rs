//! # Lander Model
//!
//! Serializable campaign document schema shared by the block registry,
//! the editor engine and the CLI.
//!
//! A campaign is an identity, a theme and an ordered list of blocks. Blocks
//! are held behind `Arc` so that editor mutations can share untouched blocks
//! between document versions:
//!
//! ```text
//! CampaignDocument
//!   ├─ id, name
//!   ├─ theme { globalFont, globalColors }
//!   └─ blocks: [Arc<PageBlock>]
//!        └─ PageBlock { id, type, props, styles }
//! ```

pub mod document;
pub mod error;
pub mod id_generator;

pub use document::{CampaignDocument, PageBlock, PropMap, PropValue, Theme};
pub use error::ModelError;
pub use id_generator::BlockIdGenerator;
