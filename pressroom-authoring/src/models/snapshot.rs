//! Persisted draft snapshots
//!
//! A snapshot is the serialized tuple of form state plus auxiliary
//! selections, written to a single well-known slot. The key names are
//! the legacy slot format and carry no schema version; a format change
//! requires clearing old snapshots.

use pressroom_common::api::GalleryRecord;
use serde::{Deserialize, Serialize};

use super::ContentDraft;

/// The tuple written to the draft slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    #[serde(rename = "formData", default)]
    pub form_data: ContentDraft,
    #[serde(rename = "selectedStates", default)]
    pub selected_states: Vec<String>,
    #[serde(rename = "selectedArtist", default)]
    pub selected_artist: Option<String>,
    #[serde(rename = "selectedGallery", default)]
    pub selected_gallery: Option<GalleryRecord>,
}

/// Ephemeral copy written to the preview slot: the flattened form data
/// with the region selection folded in under `states`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewSnapshot {
    #[serde(flatten)]
    pub form_data: ContentDraft,
    pub states: Vec<String>,
}
