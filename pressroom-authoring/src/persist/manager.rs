//! Draft persistence manager
//!
//! Owns the slot-store port and drives the snapshot lifecycle:
//! Idle → AutoSaving → (Idle | Restoring) → Cleared.

use pressroom_common::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{SlotStore, DRAFT_SLOT, PREVIEW_SLOT};
use crate::models::{DraftSnapshot, PreviewSnapshot};

/// Persistence lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistState {
    Idle,
    AutoSaving,
    Restoring,
    Cleared,
}

pub struct DraftPersistenceManager {
    store: Arc<dyn SlotStore>,
    state: PersistState,
}

impl DraftPersistenceManager {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self {
            store,
            state: PersistState::Idle,
        }
    }

    pub fn state(&self) -> PersistState {
        self.state
    }

    /// One autosave interval elapsed. Persists the snapshot only when
    /// the draft is a new (not-yet-created) item with a non-empty
    /// title; edit-mode drafts are never auto-persisted. Overwrites any
    /// prior snapshot in the slot.
    ///
    /// Returns whether a snapshot was written.
    pub async fn autosave_tick(
        &mut self,
        snapshot: &DraftSnapshot,
        is_new_item: bool,
    ) -> Result<bool> {
        if !is_new_item || snapshot.form_data.title.trim().is_empty() {
            return Ok(false);
        }

        self.state = PersistState::AutoSaving;
        let json = serde_json::to_string(snapshot)?;
        let result = self.store.save(DRAFT_SLOT, &json).await;
        self.state = PersistState::Idle;
        result?;

        debug!(title = %snapshot.form_data.title, "Autosaved draft snapshot");
        Ok(true)
    }

    /// On authoring-surface initialization for a new item: if a
    /// persisted snapshot exists, return it and delete the slot. A
    /// corrupt snapshot is discarded silently and treated as absent;
    /// restoration failure is never fatal.
    pub async fn restore_on_init(&mut self) -> Result<Option<DraftSnapshot>> {
        let Some(raw) = self.store.load(DRAFT_SLOT).await? else {
            return Ok(None);
        };

        self.state = PersistState::Restoring;
        let restored = match serde_json::from_str::<DraftSnapshot>(&raw) {
            Ok(snapshot) => {
                info!("Restoring draft snapshot from persisted slot");
                Some(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "Discarding unparseable draft snapshot");
                None
            }
        };

        // The slot is consumed either way
        self.store.delete(DRAFT_SLOT).await?;
        self.state = PersistState::Idle;
        Ok(restored)
    }

    /// On successful submission both slots are deleted unconditionally,
    /// regardless of an autosave that may have just rewritten them.
    pub async fn clear_after_submit(&mut self) -> Result<()> {
        self.store.delete(DRAFT_SLOT).await?;
        self.store.delete(PREVIEW_SLOT).await?;
        self.state = PersistState::Cleared;
        info!("Cleared draft and preview slots after submission");
        Ok(())
    }

    /// One-shot preview capture: writes the flattened preview copy and
    /// independently persists a restoration snapshot so in-progress
    /// edits survive navigating to preview and back.
    pub async fn capture_preview(&self, snapshot: &DraftSnapshot) -> Result<()> {
        let preview = PreviewSnapshot {
            form_data: snapshot.form_data.clone(),
            states: snapshot.selected_states.clone(),
        };
        self.store
            .save(PREVIEW_SLOT, &serde_json::to_string(&preview)?)
            .await?;
        self.store
            .save(DRAFT_SLOT, &serde_json::to_string(snapshot)?)
            .await?;
        debug!("Captured preview and restoration snapshots");
        Ok(())
    }
}
