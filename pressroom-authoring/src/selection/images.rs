//! Operator-managed image list for photo drafts
//!
//! Independent of the external gallery reference. Order is meaningful
//! and preserved across persistence; reordering is by adjacent swap.

use pressroom_common::api::ImageEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered sequence of {id, url, alt} entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageGalleryList {
    entries: Vec<ImageEntry>,
}

impl ImageGalleryList {
    pub fn from_entries(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append an image, assigning it a fresh id. Returns the id.
    pub fn add(&mut self, url: impl Into<String>, alt: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.push(ImageEntry {
            id: id.clone(),
            url: url.into(),
            alt: alt.into(),
        });
        id
    }

    /// Remove the entry with the given id. Returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Swap the entry with its predecessor. No-op at the head.
    pub fn move_up(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) if idx > 0 => {
                self.entries.swap(idx - 1, idx);
                true
            }
            _ => false,
        }
    }

    /// Swap the entry with its successor. No-op at the tail.
    pub fn move_down(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) if idx + 1 < self.entries.len() => {
                self.entries.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }
}
