//! Content API boundary
//!
//! The engine talks to the backend through the [`ContentApi`] port so
//! that resolvers, the session, and the ad-settings panel are testable
//! without a live server. [`client::ContentApiClient`] is the single
//! production implementation.

pub mod client;

pub use client::ContentApiClient;

use async_trait::async_trait;
use pressroom_common::api::{
    AdSetting, ArticleRecord, ArtistRecord, CmsConfig, GalleryRecord, OttPlatform, UploadResult,
};
use pressroom_common::Result;

use crate::models::SubmissionPayload;

/// Request/response boundary to the Content API
///
/// All calls are plain async request/response with no overlap control;
/// callers decide whether a failure is surfaced or swallowed.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn fetch_config(&self) -> Result<CmsConfig>;

    async fn fetch_article(&self, id: i64) -> Result<ArticleRecord>;
    async fn list_published_articles(&self) -> Result<Vec<ArticleRecord>>;
    async fn create_article(&self, payload: &SubmissionPayload) -> Result<ArticleRecord>;
    async fn update_article(&self, id: i64, payload: &SubmissionPayload) -> Result<ArticleRecord>;
    /// Publish/unpublish toggle for an existing record
    async fn patch_publish_state(&self, id: i64, publish: bool) -> Result<()>;

    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadResult>;

    async fn fetch_artists(&self) -> Result<Vec<ArtistRecord>>;
    async fn create_artist(&self, name: &str) -> Result<ArtistRecord>;

    async fn fetch_galleries(&self) -> Result<Vec<GalleryRecord>>;
    async fn fetch_gallery(&self, id: i64) -> Result<GalleryRecord>;

    async fn fetch_ott_platforms(&self) -> Result<Vec<OttPlatform>>;
    async fn create_ott_platform(&self, name: &str) -> Result<OttPlatform>;

    async fn fetch_gallery_entities(&self, category: &str) -> Result<Vec<String>>;
    async fn create_gallery_entity(&self, category: &str, name: &str) -> Result<String>;
    async fn fetch_gallery_next_number(&self, category: &str, entity: &str) -> Result<u32>;

    async fn fetch_ad_settings(&self) -> Result<Vec<AdSetting>>;
    async fn update_ad_setting(&self, id: i64, enabled: bool) -> Result<AdSetting>;

    // External collaborators, consumed as opaque CRUD
    async fn fetch_cricket_schedules(&self) -> Result<Vec<serde_json::Value>>;
    async fn delete_cricket_schedule(&self, id: i64) -> Result<()>;
    async fn fetch_scheduler_settings(&self) -> Result<serde_json::Value>;
    async fn run_scheduler_now(&self) -> Result<()>;
}
