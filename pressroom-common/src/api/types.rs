//! Shared Content API request/response types
//!
//! These mirror the JSON bodies of the Content API endpoints consumed by
//! the authoring engine. Region and artist membership on a fetched
//! record arrive as embedded JSON fragments (legacy encoding), so they
//! are plain strings here and decoded defensively by the consumer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /cms/config`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmsConfig {
    pub languages: Vec<Language>,
    pub states: Vec<Region>,
    pub categories: Vec<Category>,
}

/// Publishing language
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Target region; `code` is canonical, `name` is the display form
/// searched by the operator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

/// Content category
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A content record as returned by `GET /cms/articles/{id}`
///
/// Only the identity fields are guaranteed; everything else depends on
/// the record's content type.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArticleRecord {
    pub id: i64,
    pub title: String,
    pub content_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// JSON-encoded list of region codes (legacy fragment)
    #[serde(default)]
    pub states: Option<String>,
    /// JSON-encoded list of artist names (legacy fragment)
    #[serde(default)]
    pub artists: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_top_story: Option<bool>,
    #[serde(default)]
    pub allow_comments: Option<bool>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub movie_rating: Option<String>,
    #[serde(default)]
    pub movie_cast: Option<String>,
    #[serde(default)]
    pub movie_verdict: Option<String>,
    #[serde(default)]
    pub ott_platform: Option<String>,
    #[serde(default)]
    pub gallery_category: Option<String>,
    #[serde(default)]
    pub gallery_entity: Option<String>,
    #[serde(default)]
    pub gallery_id: Option<i64>,
    #[serde(default)]
    pub image_gallery: Option<Vec<ImageEntry>>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub is_scheduled: Option<bool>,
    #[serde(default)]
    pub scheduled_publish_at: Option<DateTime<Utc>>,
}

/// One image in an operator-managed image gallery; order is meaningful
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageEntry {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// Artist as returned by `GET /artists`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Externally-defined image gallery (`GET /galleries`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleryRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image_count: u32,
    #[serde(default)]
    pub artists: Vec<String>,
}

/// Streaming platform tag (`GET /cms/ott-platforms`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OttPlatform {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Response of `POST /cms/upload-image`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadResult {
    pub url: String,
    pub storage: String,
}

/// One ad placement toggle (`GET /ad-settings`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdSetting {
    pub id: i64,
    pub placement: String,
    pub enabled: bool,
}
