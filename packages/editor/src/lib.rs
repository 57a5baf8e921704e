//! # Lander Editor
//!
//! State engine behind the campaign page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: CampaignDocument, PageBlock, Theme   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session state + mutations           │
//! │  - Pure mutations over shared snapshots     │
//! │  - Snapshot undo/redo history               │
//! │  - Drag gesture → mutation reconciliation   │
//! │  - Settings projection for the selection    │
//! │  - Load/save through a CampaignStore        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ blocks: registry → VNode tree → HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every edit produces a new `Arc` snapshot
//! 2. **Untouched blocks are shared**: snapshots reuse the same block `Arc`s
//! 3. **No-ops leave no trace**: an edit that changes nothing is not recorded
//! 4. **One drag at a time**: a drop resolves to at most one mutation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lander_blocks::BlockRegistry;
//! use lander_editor::{EditSession, MemoryStore};
//! use std::sync::Arc;
//!
//! let store = MemoryStore::new();
//! let registry = Arc::new(BlockRegistry::new());
//! let mut session = EditSession::load(&store, "spring-sale", "alice", registry).await?;
//!
//! session.start_drag_from_palette("Hero1");
//! session.drop_at(1);
//! session.undo();
//!
//! session.save(&store, "alice").await?;
//! ```

mod dnd;
mod errors;
mod history;
mod mutations;
mod session;
mod settings;
mod store;

pub use dnd::{DragController, DragPayload, DragState, DropTarget};
pub use errors::EditorError;
pub use history::History;
pub use mutations::{
    duplicate_block, insert_block, move_block, remove_block, replace_document, set_block_prop,
    set_block_style, set_campaign_name, set_theme_color, set_theme_font, Mutation,
    MutationContext,
};
pub use session::{EditSession, PendingSave};
pub use settings::{
    editor_kind_for, infer_editor_kind, project_settings, SettingsField, SettingsProjection,
    LONG_TEXT_THRESHOLD,
};
pub use store::{CampaignStore, FileStore, LoadError, MemoryStore, SaveError, StoredCampaign};

// Re-export common types for convenience
pub use lander_blocks::{BlockRegistry, EditorKind, VNode};
pub use lander_model::{CampaignDocument, PageBlock, PropMap, PropValue};
