//! External gallery reference selection

use pressroom_common::api::GalleryRecord;
use serde::{Deserialize, Serialize};

/// At most one externally-defined gallery; selecting a new one replaces
/// the previous reference wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GallerySelection {
    current: Option<GalleryRecord>,
}

impl GallerySelection {
    pub fn select(&mut self, gallery: GalleryRecord) {
        self.current = Some(gallery);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&GalleryRecord> {
        self.current.as_ref()
    }

    /// Identifier for the wire payload, or none
    pub fn gallery_id(&self) -> Option<i64> {
        self.current.as_ref().map(|g| g.id)
    }
}

impl From<Option<GalleryRecord>> for GallerySelection {
    fn from(current: Option<GalleryRecord>) -> Self {
        Self { current }
    }
}
