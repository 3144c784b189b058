//! Submission payload sent to the Content API
//!
//! One-way derived structure: never mutated in place, always computed
//! fresh from current state at submit time by [`crate::submit`].

use chrono::{DateTime, Utc};
use pressroom_common::api::ImageEntry;
use serde::{Deserialize, Serialize};

use super::ContentType;

/// Normalized wire submission for `POST`/`PUT /cms/articles`
///
/// `scheduled_publish_at` and `gallery_id` are always serialized, as an
/// explicit null when absent, so that a previously set value can be
/// cleared on edit. Type-specific fields are omitted when the variant
/// does not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub seo_title: String,
    pub seo_description: String,
    pub content_type: ContentType,
    pub language: String,
    pub category: String,
    /// Ordered region codes, sentinel included verbatim
    pub states: Vec<String>,
    /// Zero or one artist name; never a bare string
    pub artists: Vec<String>,
    /// Operator-managed image list, order preserved
    pub image_gallery: Vec<ImageEntry>,
    /// Explicit null when no gallery is referenced
    pub gallery_id: Option<i64>,
    pub is_published: bool,
    pub is_scheduled: bool,
    /// Explicit null unless scheduled with a value
    pub scheduled_publish_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_top_story: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ott_platform: Option<String>,
}
