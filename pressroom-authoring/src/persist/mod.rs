//! Draft persistence
//!
//! A [`SlotStore`] is a named key-value port to whatever durable local
//! storage the platform offers. One slot holds the outstanding draft
//! snapshot, a second holds the ephemeral preview copy; there is no
//! multi-draft versioning.

mod manager;
mod memory;
mod sqlite;

pub use manager::{DraftPersistenceManager, PersistState};
pub use memory::MemorySlotStore;
pub use sqlite::SqliteSlotStore;

use async_trait::async_trait;
use pressroom_common::Result;

/// Well-known slot holding the outstanding draft snapshot
pub const DRAFT_SLOT: &str = "pressroom.draft";

/// Well-known slot holding the one-shot preview copy
pub const PREVIEW_SLOT: &str = "pressroom.preview";

/// Named-slot persistence port
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Read a slot's raw JSON, `None` if the slot is empty
    async fn load(&self, slot: &str) -> Result<Option<String>>;

    /// Write a slot, overwriting any prior value
    async fn save(&self, slot: &str, value: &str) -> Result<()>;

    /// Delete a slot; deleting an empty slot is not an error
    async fn delete(&self, slot: &str) -> Result<()>;
}
