//! # Edit Session
//!
//! One editor instance for one campaign: the document history, the drag
//! gesture in progress, the selected block and save bookkeeping.
//!
//! Sessions are plain values. Several can live side by side (tests,
//! multi-document editing) without sharing any state beyond the block
//! registry they were handed.

use crate::dnd::{DragController, DragPayload, DropTarget};
use crate::history::History;
use crate::mutations::{Mutation, MutationContext};
use crate::settings::{project_settings, SettingsProjection};
use crate::store::{CampaignStore, LoadError, SaveError};
use crate::EditorError;
use lander_blocks::{BlockRegistry, VNode};
use lander_model::{BlockIdGenerator, CampaignDocument, PropMap, PropValue};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Editing state for a single campaign
#[derive(Debug)]
pub struct EditSession {
    campaign_id: String,

    registry: Arc<BlockRegistry>,

    ids: BlockIdGenerator,

    history: History,

    drag: DragController,

    selected_block: Option<String>,

    /// Snapshot last acknowledged by the store (or loaded from it)
    last_saved: Arc<CampaignDocument>,

    save_in_flight: bool,
}

/// A snapshot handed to the store by `begin_save`
#[derive(Debug, Clone)]
pub struct PendingSave {
    pub campaign_id: String,
    pub document: Arc<CampaignDocument>,
}

impl EditSession {
    /// Start a session on an already loaded (or freshly created) document
    pub fn new(registry: Arc<BlockRegistry>, document: CampaignDocument) -> Result<Self, EditorError> {
        document.validate()?;

        let present = Arc::new(document);
        Ok(Self {
            campaign_id: present.id.clone(),
            registry,
            ids: BlockIdGenerator::new(),
            history: History::new(Arc::clone(&present)),
            drag: DragController::new(),
            selected_block: None,
            last_saved: present,
            save_in_flight: false,
        })
    }

    /// Load a campaign from `store` and start a session on it
    ///
    /// Nothing is hydrated unless the document loads and validates.
    pub async fn load<S>(
        store: &S,
        campaign_id: &str,
        acting_user: &str,
        registry: Arc<BlockRegistry>,
    ) -> Result<Self, LoadError>
    where
        S: CampaignStore + ?Sized,
    {
        let document = store.load_campaign(campaign_id, acting_user).await?;
        if document.id != campaign_id {
            return Err(LoadError::Malformed(format!(
                "document id {} does not match campaign {}",
                document.id, campaign_id
            )));
        }

        let session = Self::new(registry, document).map_err(|e| LoadError::Malformed(e.to_string()))?;
        info!(campaign_id, blocks = session.document().blocks.len(), "Campaign loaded");
        Ok(session)
    }

    /// Cap undo depth (0 = unlimited). Existing history is dropped.
    pub fn with_history_limit(mut self, max_levels: usize) -> Self {
        self.history = History::with_max_levels(Arc::clone(self.history.present()), max_levels);
        self
    }

    /// Use a specific id generator (deterministic ids in tests)
    pub fn with_id_generator(mut self, ids: BlockIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the document wholesale (reload). Not undoable; clears history.
    ///
    /// Refused while a save is in flight, since its outcome would describe
    /// a document that is no longer loaded.
    pub fn hydrate(&mut self, document: CampaignDocument) -> Result<(), EditorError> {
        if self.save_in_flight {
            return Err(EditorError::SaveInFlight);
        }
        document.validate()?;

        let present = Arc::new(document);
        self.campaign_id = present.id.clone();
        self.history.hydrate(Arc::clone(&present));
        self.last_saved = present;
        self.drag.cancel();
        self.drop_stale_selection();
        Ok(())
    }

    // -- Mutations ----------------------------------------------------------

    /// Apply a mutation through history; `false` if it changed nothing
    pub fn apply(&mut self, mutation: &Mutation) -> bool {
        let mut ctx = MutationContext::new(&self.registry, &mut self.ids);
        let applied = self.history.apply_mutation(mutation, &mut ctx);
        if applied {
            debug!(mutation = mutation.name(), "Applied mutation");
            self.drop_stale_selection();
        }
        applied
    }

    /// Insert a block from the registry; returns the new block's id
    pub fn insert_block(
        &mut self,
        block_type: &str,
        index: usize,
        default_props: PropMap,
    ) -> Option<String> {
        let slot = index.min(self.document().blocks.len());
        let applied = self.apply(&Mutation::InsertBlock {
            block_type: block_type.to_string(),
            index,
            default_props,
        });
        applied.then(|| self.document().blocks[slot].id.clone())
    }

    pub fn move_block(&mut self, block_id: &str, to_index: usize) -> bool {
        self.apply(&Mutation::MoveBlock {
            block_id: block_id.to_string(),
            to_index,
        })
    }

    pub fn remove_block(&mut self, block_id: &str) -> bool {
        self.apply(&Mutation::RemoveBlock {
            block_id: block_id.to_string(),
        })
    }

    pub fn set_block_prop(&mut self, block_id: &str, key: &str, value: impl Into<PropValue>) -> bool {
        self.apply(&Mutation::SetBlockProp {
            block_id: block_id.to_string(),
            key: key.to_string(),
            value: value.into(),
        })
    }

    pub fn set_block_style(&mut self, block_id: &str, key: &str, value: impl Into<PropValue>) -> bool {
        self.apply(&Mutation::SetBlockStyle {
            block_id: block_id.to_string(),
            key: key.to_string(),
            value: value.into(),
        })
    }

    /// Copy a block to `index`; returns the copy's id
    pub fn duplicate_block(&mut self, block_id: &str, index: usize) -> Option<String> {
        let slot = index.min(self.document().blocks.len());
        let applied = self.apply(&Mutation::DuplicateBlock {
            block_id: block_id.to_string(),
            index,
        });
        applied.then(|| self.document().blocks[slot].id.clone())
    }

    pub fn set_campaign_name(&mut self, name: &str) -> bool {
        self.apply(&Mutation::SetCampaignName {
            name: name.to_string(),
        })
    }

    pub fn set_theme_font(&mut self, font: &str) -> bool {
        self.apply(&Mutation::SetThemeFont {
            font: font.to_string(),
        })
    }

    pub fn set_theme_color(&mut self, role: &str, value: &str) -> bool {
        self.apply(&Mutation::SetThemeColor {
            role: role.to_string(),
            value: value.to_string(),
        })
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            self.drop_stale_selection();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            self.drop_stale_selection();
        }
        redone
    }

    // -- Drag and drop ------------------------------------------------------

    pub fn start_drag(&mut self, payload: DragPayload) {
        self.drag.start(payload);
    }

    pub fn start_drag_from_palette(&mut self, block_type: &str) {
        self.drag.start_from_palette(block_type);
    }

    pub fn start_drag_from_canvas(&mut self, block_id: &str) {
        self.drag.start_from_canvas(block_id);
    }

    pub fn start_drag_duplicate(&mut self, block_id: &str) {
        self.drag.start_duplicate(block_id);
    }

    /// Finish the drag over `target`; `true` if the document changed
    pub fn drop_on(&mut self, target: DropTarget) -> bool {
        match self.drag.drop_on(target) {
            Some(mutation) => self.apply(&mutation),
            None => false,
        }
    }

    pub fn drop_at(&mut self, index: usize) -> bool {
        self.drop_on(DropTarget::Canvas { index })
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    // -- Selection ----------------------------------------------------------

    /// Select a block (or clear with `None`). Unknown ids select nothing.
    pub fn select(&mut self, block_id: Option<&str>) {
        self.selected_block = block_id
            .filter(|id| self.document().contains_block(id))
            .map(str::to_string);
    }

    pub fn selected_block(&self) -> Option<&str> {
        self.selected_block.as_deref()
    }

    /// Settings panel contents for the current selection
    pub fn settings(&self) -> SettingsProjection {
        project_settings(self.document(), self.selected_block(), &self.registry)
    }

    fn drop_stale_selection(&mut self) {
        let stale = matches!(&self.selected_block, Some(id) if !self.history.present().contains_block(id));
        if stale {
            self.selected_block = None;
        }
    }

    // -- Reading ------------------------------------------------------------

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    pub fn document(&self) -> &Arc<CampaignDocument> {
        self.history.present()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.registry
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Render the current document
    pub fn render(&self) -> VNode {
        self.registry.render_document(self.document())
    }

    // -- Saving -------------------------------------------------------------

    /// Whether the current document differs from the last saved one
    pub fn is_dirty(&self) -> bool {
        let present = self.document();
        !Arc::ptr_eq(present, &self.last_saved) && **present != *self.last_saved
    }

    pub fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    /// Mark a save as started and hand out the snapshot to persist
    ///
    /// Only one save may be in flight; a second request is rejected, not
    /// queued. Editing may continue while the save runs.
    pub fn begin_save(&mut self) -> Result<PendingSave, EditorError> {
        if self.save_in_flight {
            return Err(EditorError::SaveInFlight);
        }
        self.save_in_flight = true;
        Ok(PendingSave {
            campaign_id: self.campaign_id.clone(),
            document: Arc::clone(self.document()),
        })
    }

    /// Record the outcome of a save started with `begin_save`
    ///
    /// On failure the in-memory document is kept as is.
    pub fn finish_save(
        &mut self,
        pending: PendingSave,
        outcome: Result<(), SaveError>,
    ) -> Result<(), EditorError> {
        if !self.save_in_flight {
            return Err(EditorError::NoSaveInFlight);
        }
        if pending.campaign_id != self.campaign_id {
            return Err(EditorError::ForeignSave {
                expected: self.campaign_id.clone(),
                found: pending.campaign_id,
            });
        }
        self.save_in_flight = false;

        match outcome {
            Ok(()) => {
                info!(campaign_id = %pending.campaign_id, "Campaign saved");
                self.last_saved = pending.document;
                Ok(())
            }
            Err(e) => {
                warn!(campaign_id = %pending.campaign_id, error = %e, "Campaign save failed");
                Err(e.into())
            }
        }
    }

    /// Save the current document to `store` as `acting_user`
    pub async fn save<S>(&mut self, store: &S, acting_user: &str) -> Result<(), EditorError>
    where
        S: CampaignStore + ?Sized,
    {
        let pending = self.begin_save()?;
        let outcome = store
            .save_campaign(&pending.campaign_id, acting_user, &pending.document)
            .await;
        self.finish_save(pending, outcome)
    }
}
