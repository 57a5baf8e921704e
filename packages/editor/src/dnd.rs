//! # Drag and Drop
//!
//! Reconciles a drag gesture between the block palette and the canvas into
//! a single document mutation.
//!
//! ```text
//! Idle ──start──▶ Dragging(payload) ──drop on canvas──▶ Idle  (→ Mutation)
//!                        │
//!                        └──cancel / drop outside──────▶ Idle  (nothing)
//! ```
//!
//! The payload carries an explicit `origin` tag, so adding a new kind of
//! drag source means adding a variant and its arm in `into_mutation`.

use crate::mutations::Mutation;
use lander_model::PropMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What is being dragged and where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[non_exhaustive]
pub enum DragPayload {
    /// New block template dragged out of the palette
    Palette {
        block_type: String,
        #[serde(default)]
        default_props: PropMap,
    },

    /// Existing block being reordered
    Canvas { block_id: String },

    /// Existing block being copied to a new position
    Duplicate { block_id: String },
}

impl DragPayload {
    pub fn palette(block_type: impl Into<String>) -> Self {
        DragPayload::Palette {
            block_type: block_type.into(),
            default_props: PropMap::new(),
        }
    }

    pub fn canvas(block_id: impl Into<String>) -> Self {
        DragPayload::Canvas {
            block_id: block_id.into(),
        }
    }

    pub fn duplicate(block_id: impl Into<String>) -> Self {
        DragPayload::Duplicate {
            block_id: block_id.into(),
        }
    }

    /// The mutation a drop of this payload at `index` stands for
    pub fn into_mutation(self, index: usize) -> Mutation {
        match self {
            DragPayload::Palette {
                block_type,
                default_props,
            } => Mutation::InsertBlock {
                block_type,
                index,
                default_props,
            },
            DragPayload::Canvas { block_id } => Mutation::MoveBlock {
                block_id,
                to_index: index,
            },
            DragPayload::Duplicate { block_id } => Mutation::DuplicateBlock { block_id, index },
        }
    }
}

/// Where a drag ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// A slot between or around canvas blocks
    Canvas { index: usize },

    /// Anywhere that is not a drop target
    Outside,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

/// Tracks the single in-flight drag gesture
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag. A payload left over from an unfinished gesture is discarded.
    pub fn start(&mut self, payload: DragPayload) {
        if let DragState::Dragging(stale) = &self.state {
            debug!(payload = ?stale, "Discarding unfinished drag");
        }
        self.state = DragState::Dragging(payload);
    }

    pub fn start_from_palette(&mut self, block_type: impl Into<String>) {
        self.start(DragPayload::palette(block_type));
    }

    pub fn start_from_canvas(&mut self, block_id: impl Into<String>) {
        self.start(DragPayload::canvas(block_id));
    }

    pub fn start_duplicate(&mut self, block_id: impl Into<String>) {
        self.start(DragPayload::duplicate(block_id));
    }

    /// End the gesture over `target`, consuming the payload
    ///
    /// Returns the mutation to apply for a canvas drop, `None` otherwise
    /// (outside drop, or no drag in progress).
    pub fn drop_on(&mut self, target: DropTarget) -> Option<Mutation> {
        let payload = match std::mem::take(&mut self.state) {
            DragState::Dragging(payload) => payload,
            DragState::Idle => {
                debug!("Drop without an active drag, ignoring");
                return None;
            }
        };

        match target {
            DropTarget::Canvas { index } => Some(payload.into_mutation(index)),
            DropTarget::Outside => {
                debug!(payload = ?payload, "Dropped outside any target, discarding");
                None
            }
        }
    }

    /// Abort the gesture (e.g. escape key); nothing has been mutated yet
    pub fn cancel(&mut self) {
        if let DragState::Dragging(payload) = std::mem::take(&mut self.state) {
            debug!(payload = ?payload, "Drag cancelled");
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Dragging(payload) => Some(payload),
            DragState::Idle => None,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }
}
