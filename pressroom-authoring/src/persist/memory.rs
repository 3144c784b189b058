//! In-memory slot store for tests and ephemeral sessions

use async_trait::async_trait;
use pressroom_common::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::SlotStore;

#[derive(Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn load(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn save(&self, slot: &str, value: &str) -> Result<()> {
        self.slots
            .write()
            .await
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, slot: &str) -> Result<()> {
        self.slots.write().await.remove(slot);
        Ok(())
    }
}
