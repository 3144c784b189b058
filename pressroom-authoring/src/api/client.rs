//! Content API HTTP client

use async_trait::async_trait;
use pressroom_common::api::{
    AdSetting, ArticleRecord, ArtistRecord, CmsConfig, GalleryRecord, OttPlatform, UploadResult,
};
use pressroom_common::{Error, Result};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

use super::ContentApi;
use crate::models::SubmissionPayload;

const USER_AGENT: &str = concat!("Pressroom/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// reqwest-backed implementation of [`ContentApi`]
pub struct ContentApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ContentApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(
                response.url().path().to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(status.as_u16(), body));
        }
        response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Decode response failed: {}", e)))
    }

    async fn check_status(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(status.as_u16(), body));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self
            .http_client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(path, "POST");
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ContentApi for ContentApiClient {
    async fn fetch_config(&self) -> Result<CmsConfig> {
        self.get_json("/cms/config").await
    }

    async fn fetch_article(&self, id: i64) -> Result<ArticleRecord> {
        self.get_json(&format!("/cms/articles/{}", id)).await
    }

    async fn list_published_articles(&self) -> Result<Vec<ArticleRecord>> {
        self.get_json("/cms/articles").await
    }

    async fn create_article(&self, payload: &SubmissionPayload) -> Result<ArticleRecord> {
        self.post_json("/cms/articles", payload).await
    }

    async fn update_article(&self, id: i64, payload: &SubmissionPayload) -> Result<ArticleRecord> {
        tracing::debug!(id, "PUT /cms/articles");
        let response = self
            .http_client
            .put(self.url(&format!("/cms/articles/{}", id)))
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn patch_publish_state(&self, id: i64, publish: bool) -> Result<()> {
        tracing::debug!(id, publish, "PATCH /cms/articles");
        let response = self
            .http_client
            .patch(self.url(&format!("/cms/articles/{}", id)))
            .json(&json!({ "is_published": publish }))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::check_status(response).await
    }

    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadResult> {
        tracing::debug!(filename, size = bytes.len(), "POST /cms/upload-image");
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("image", part);
        let response = self
            .http_client
            .post(self.url("/cms/upload-image"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn fetch_artists(&self) -> Result<Vec<ArtistRecord>> {
        self.get_json("/artists").await
    }

    async fn create_artist(&self, name: &str) -> Result<ArtistRecord> {
        self.post_json("/artists", &json!({ "name": name })).await
    }

    async fn fetch_galleries(&self) -> Result<Vec<GalleryRecord>> {
        self.get_json("/galleries").await
    }

    async fn fetch_gallery(&self, id: i64) -> Result<GalleryRecord> {
        self.get_json(&format!("/galleries/by-id/{}", id)).await
    }

    async fn fetch_ott_platforms(&self) -> Result<Vec<OttPlatform>> {
        self.get_json("/cms/ott-platforms").await
    }

    async fn create_ott_platform(&self, name: &str) -> Result<OttPlatform> {
        self.post_json("/cms/ott-platforms", &json!({ "name": name }))
            .await
    }

    async fn fetch_gallery_entities(&self, category: &str) -> Result<Vec<String>> {
        self.get_json(&format!("/cms/gallery-entities/{}", category))
            .await
    }

    async fn create_gallery_entity(&self, category: &str, name: &str) -> Result<String> {
        self.post_json(
            &format!("/cms/gallery-entities/{}", category),
            &json!({ "name": name }),
        )
        .await
    }

    async fn fetch_gallery_next_number(&self, category: &str, entity: &str) -> Result<u32> {
        self.get_json(&format!("/cms/gallery-next-number/{}/{}", category, entity))
            .await
    }

    async fn fetch_ad_settings(&self) -> Result<Vec<AdSetting>> {
        self.get_json("/ad-settings").await
    }

    async fn update_ad_setting(&self, id: i64, enabled: bool) -> Result<AdSetting> {
        self.post_json("/ad-settings", &json!({ "id": id, "enabled": enabled }))
            .await
    }

    async fn fetch_cricket_schedules(&self) -> Result<Vec<serde_json::Value>> {
        self.get_json("/cricket-schedules").await
    }

    async fn delete_cricket_schedule(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "DELETE /cricket-schedules");
        let response = self
            .http_client
            .delete(self.url(&format!("/cricket-schedules/{}", id)))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::check_status(response).await
    }

    async fn fetch_scheduler_settings(&self) -> Result<serde_json::Value> {
        self.get_json("/admin/scheduler-settings").await
    }

    async fn run_scheduler_now(&self) -> Result<()> {
        tracing::debug!("POST /admin/scheduler/run-now");
        let response = self
            .http_client
            .post(self.url("/admin/scheduler/run-now"))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ContentApiClient::new("http://localhost:8080");
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ContentApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.url("/cms/config"), "http://localhost:8080/cms/config");
    }
}
