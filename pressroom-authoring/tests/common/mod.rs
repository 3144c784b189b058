//! Shared test fixtures: an in-memory Content API double

use async_trait::async_trait;
use pressroom_authoring::api::ContentApi;
use pressroom_authoring::models::SubmissionPayload;
use pressroom_common::api::{
    AdSetting, ArticleRecord, ArtistRecord, Category, CmsConfig, GalleryRecord, Language,
    OttPlatform, Region, UploadResult,
};
use pressroom_common::{Error, Result};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Content API double backed by fixture data. Submissions are recorded
/// for inspection; `fail_submissions` turns create/update into
/// transport failures.
pub struct MockContentApi {
    pub articles: Vec<ArticleRecord>,
    pub galleries: Vec<GalleryRecord>,
    pub platforms: Vec<String>,
    pub fail_submissions: bool,
    pub created: Mutex<Vec<SubmissionPayload>>,
    pub created_artists: Mutex<Vec<String>>,
    pub next_id: AtomicI64,
}

impl Default for MockContentApi {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            galleries: vec![GalleryRecord {
                id: 42,
                title: "Premiere".to_string(),
                image_count: 9,
                artists: vec!["Samantha".to_string()],
            }],
            platforms: vec!["Netflix".to_string(), "Prime Video".to_string()],
            fail_submissions: false,
            created: Mutex::new(Vec::new()),
            created_artists: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(100),
        }
    }
}

fn transport_err<T>() -> Result<T> {
    Err(Error::Transport("connection refused".to_string()))
}

fn stored_record(id: i64, payload: &SubmissionPayload) -> ArticleRecord {
    ArticleRecord {
        id,
        title: payload.title.clone(),
        content_type: payload.content_type.as_str().to_string(),
        content: payload.content.clone(),
        ..ArticleRecord::default()
    }
}

#[async_trait]
impl ContentApi for MockContentApi {
    async fn fetch_config(&self) -> Result<CmsConfig> {
        Ok(CmsConfig {
            languages: vec![Language { code: "te".to_string(), name: "Telugu".to_string() }],
            states: vec![
                Region { code: "ap".to_string(), name: "Andhra Pradesh".to_string() },
                Region { code: "ts".to_string(), name: "Telangana".to_string() },
            ],
            categories: vec![Category { id: 1, name: "Movies".to_string() }],
        })
    }

    async fn fetch_article(&self, id: i64) -> Result<ArticleRecord> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("article {}", id)))
    }

    async fn list_published_articles(&self) -> Result<Vec<ArticleRecord>> {
        Ok(self.articles.clone())
    }

    async fn create_article(&self, payload: &SubmissionPayload) -> Result<ArticleRecord> {
        if self.fail_submissions {
            return transport_err();
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(payload.clone());
        Ok(stored_record(id, payload))
    }

    async fn update_article(&self, id: i64, payload: &SubmissionPayload) -> Result<ArticleRecord> {
        if self.fail_submissions {
            return transport_err();
        }
        self.created.lock().unwrap().push(payload.clone());
        Ok(stored_record(id, payload))
    }

    async fn patch_publish_state(&self, _id: i64, _publish: bool) -> Result<()> {
        Ok(())
    }

    async fn upload_image(&self, filename: &str, _bytes: Vec<u8>) -> Result<UploadResult> {
        Ok(UploadResult {
            url: format!("https://cdn.example/{}", filename),
            storage: "s3".to_string(),
        })
    }

    async fn fetch_artists(&self) -> Result<Vec<ArtistRecord>> {
        Ok(Vec::new())
    }

    async fn create_artist(&self, name: &str) -> Result<ArtistRecord> {
        self.created_artists.lock().unwrap().push(name.to_string());
        Ok(ArtistRecord { id: Some(1), name: name.to_string() })
    }

    async fn fetch_galleries(&self) -> Result<Vec<GalleryRecord>> {
        Ok(self.galleries.clone())
    }

    async fn fetch_gallery(&self, id: i64) -> Result<GalleryRecord> {
        self.galleries
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("gallery {}", id)))
    }

    async fn fetch_ott_platforms(&self) -> Result<Vec<OttPlatform>> {
        Ok(self
            .platforms
            .iter()
            .map(|name| OttPlatform { id: None, name: name.clone() })
            .collect())
    }

    async fn create_ott_platform(&self, name: &str) -> Result<OttPlatform> {
        Ok(OttPlatform { id: None, name: name.to_string() })
    }

    async fn fetch_gallery_entities(&self, _category: &str) -> Result<Vec<String>> {
        Ok(vec!["Samantha".to_string()])
    }

    async fn create_gallery_entity(&self, _category: &str, name: &str) -> Result<String> {
        Ok(name.to_string())
    }

    async fn fetch_gallery_next_number(&self, _category: &str, _entity: &str) -> Result<u32> {
        Ok(1)
    }

    async fn fetch_ad_settings(&self) -> Result<Vec<AdSetting>> {
        Ok(Vec::new())
    }

    async fn update_ad_setting(&self, id: i64, enabled: bool) -> Result<AdSetting> {
        Ok(AdSetting { id, placement: "header".to_string(), enabled })
    }

    async fn fetch_cricket_schedules(&self) -> Result<Vec<serde_json::Value>> {
        Ok(Vec::new())
    }

    async fn delete_cricket_schedule(&self, _id: i64) -> Result<()> {
        Ok(())
    }

    async fn fetch_scheduler_settings(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({}))
    }

    async fn run_scheduler_now(&self) -> Result<()> {
        Ok(())
    }
}
