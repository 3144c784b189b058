//! Editable content draft
//!
//! In memory the draft is a tagged union over the content type, so
//! required-field validation is a total function over the tag. On the
//! wire (snapshots, legacy records) the draft is the flat field bag the
//! Content API speaks; the conversion lives in `DraftWire`.

use chrono::{DateTime, Utc};
use pressroom_common::api::{ArticleRecord, ImageEntry};
use serde::{Deserialize, Serialize};

use crate::selection::ImageGalleryList;

/// Content-type discriminant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Post,
    Photo,
    Video,
    MovieReview,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Photo => "photo",
            ContentType::Video => "video",
            ContentType::MovieReview => "movie_review",
        }
    }

    /// Parse a wire discriminant; unknown values fall back to `post`.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "photo" => ContentType::Photo,
            "video" => ContentType::Video,
            "movie_review" => ContentType::MovieReview,
            "post" => ContentType::Post,
            other => {
                tracing::warn!(content_type = other, "Unknown content type, treating as post");
                ContentType::Post
            }
        }
    }
}

/// Type-specific field group; exactly one variant is active per draft
#[derive(Debug, Clone, PartialEq)]
pub enum TypeFields {
    Post {
        image_url: String,
        is_top_story: bool,
        allow_comments: bool,
    },
    Photo {
        gallery_category: String,
        gallery_entity: String,
        image_gallery: ImageGalleryList,
    },
    Video {
        video_url: String,
    },
    MovieReview {
        rating: String,
        cast: String,
        verdict: String,
        ott_platform: String,
    },
}

impl TypeFields {
    pub fn empty(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Post => TypeFields::Post {
                image_url: String::new(),
                is_top_story: false,
                allow_comments: true,
            },
            ContentType::Photo => TypeFields::Photo {
                gallery_category: String::new(),
                gallery_entity: String::new(),
                image_gallery: ImageGalleryList::default(),
            },
            ContentType::Video => TypeFields::Video {
                video_url: String::new(),
            },
            ContentType::MovieReview => TypeFields::MovieReview {
                rating: String::new(),
                cast: String::new(),
                verdict: String::new(),
                ott_platform: String::new(),
            },
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            TypeFields::Post { .. } => ContentType::Post,
            TypeFields::Photo { .. } => ContentType::Photo,
            TypeFields::Video { .. } => ContentType::Video,
            TypeFields::MovieReview { .. } => ContentType::MovieReview,
        }
    }
}

impl Default for TypeFields {
    fn default() -> Self {
        TypeFields::empty(ContentType::Post)
    }
}

/// The union of all editable fields for the item being authored.
/// Identity-free: a record id appears only after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DraftWire", into = "DraftWire")]
pub struct ContentDraft {
    pub title: String,
    /// Sanitized markup emitted by the rich-content surface
    pub content: String,
    pub summary: String,
    pub seo_title: String,
    pub seo_description: String,
    pub language: String,
    pub category: String,
    pub is_published: bool,
    pub is_scheduled: bool,
    pub scheduled_publish_at: Option<DateTime<Utc>>,
    pub type_fields: TypeFields,
}

impl ContentDraft {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            type_fields: TypeFields::empty(content_type),
            ..Self::default()
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.type_fields.content_type()
    }

    /// Switch the active content type, replacing the variant field
    /// group with empty defaults. No-op when the type is unchanged.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        if self.content_type() != content_type {
            self.type_fields = TypeFields::empty(content_type);
        }
    }

    pub fn image_gallery(&self) -> Option<&ImageGalleryList> {
        match &self.type_fields {
            TypeFields::Photo { image_gallery, .. } => Some(image_gallery),
            _ => None,
        }
    }

    pub fn image_gallery_mut(&mut self) -> Option<&mut ImageGalleryList> {
        match &mut self.type_fields {
            TypeFields::Photo { image_gallery, .. } => Some(image_gallery),
            _ => None,
        }
    }

    /// Required-field check for the active content type. Returns the
    /// names of missing fields; empty means the draft is submittable.
    /// Total over the tag; the store's setters never call this.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        match &self.type_fields {
            TypeFields::Post { image_url, .. } => {
                if image_url.trim().is_empty() {
                    missing.push("image_url");
                }
            }
            TypeFields::Photo {
                gallery_category,
                gallery_entity,
                image_gallery,
            } => {
                if gallery_category.trim().is_empty() {
                    missing.push("gallery_category");
                }
                if gallery_entity.trim().is_empty() {
                    missing.push("gallery_entity");
                }
                if image_gallery.is_empty() {
                    missing.push("image_gallery");
                }
            }
            TypeFields::Video { video_url } => {
                if video_url.trim().is_empty() {
                    missing.push("video_url");
                }
            }
            TypeFields::MovieReview {
                rating,
                verdict,
                ott_platform,
                ..
            } => {
                if rating.trim().is_empty() {
                    missing.push("movie_rating");
                }
                if verdict.trim().is_empty() {
                    missing.push("movie_verdict");
                }
                if ott_platform.trim().is_empty() {
                    missing.push("ott_platform");
                }
            }
        }
        missing
    }

    /// Hydrate a draft from a fetched record (edit mode). Region and
    /// artist membership are legacy JSON fragments on the record and
    /// are decoded separately by the session.
    pub fn from_record(record: &ArticleRecord) -> Self {
        let content_type = ContentType::parse_lossy(&record.content_type);
        let type_fields = match content_type {
            ContentType::Post => TypeFields::Post {
                image_url: record.image_url.clone().unwrap_or_default(),
                is_top_story: record.is_top_story.unwrap_or(false),
                allow_comments: record.allow_comments.unwrap_or(true),
            },
            ContentType::Photo => TypeFields::Photo {
                gallery_category: record.gallery_category.clone().unwrap_or_default(),
                gallery_entity: record.gallery_entity.clone().unwrap_or_default(),
                image_gallery: ImageGalleryList::from_entries(
                    record.image_gallery.clone().unwrap_or_default(),
                ),
            },
            ContentType::Video => TypeFields::Video {
                video_url: record.video_url.clone().unwrap_or_default(),
            },
            ContentType::MovieReview => TypeFields::MovieReview {
                rating: record.movie_rating.clone().unwrap_or_default(),
                cast: record.movie_cast.clone().unwrap_or_default(),
                verdict: record.movie_verdict.clone().unwrap_or_default(),
                ott_platform: record.ott_platform.clone().unwrap_or_default(),
            },
        };

        Self {
            title: record.title.clone(),
            content: record.content.clone(),
            summary: record.summary.clone().unwrap_or_default(),
            seo_title: record.seo_title.clone().unwrap_or_default(),
            seo_description: record.seo_description.clone().unwrap_or_default(),
            language: record.language.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            is_published: record.is_published.unwrap_or(false),
            is_scheduled: record.is_scheduled.unwrap_or(false),
            scheduled_publish_at: record.scheduled_publish_at,
            type_fields,
        }
    }
}

/// Flat wire form of the draft, tolerant of partial input. Snapshots
/// have no schema versioning, so every field defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct DraftWire {
    title: String,
    content: String,
    summary: String,
    seo_title: String,
    seo_description: String,
    language: String,
    category: String,
    content_type: ContentType,
    is_published: bool,
    is_scheduled: bool,
    scheduled_publish_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_top_story: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gallery_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gallery_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_gallery: Option<Vec<ImageEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    movie_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    movie_cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    movie_verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ott_platform: Option<String>,
}

impl From<DraftWire> for ContentDraft {
    fn from(wire: DraftWire) -> Self {
        let type_fields = match wire.content_type {
            ContentType::Post => TypeFields::Post {
                image_url: wire.image_url.unwrap_or_default(),
                is_top_story: wire.is_top_story.unwrap_or(false),
                allow_comments: wire.allow_comments.unwrap_or(true),
            },
            ContentType::Photo => TypeFields::Photo {
                gallery_category: wire.gallery_category.unwrap_or_default(),
                gallery_entity: wire.gallery_entity.unwrap_or_default(),
                image_gallery: ImageGalleryList::from_entries(
                    wire.image_gallery.unwrap_or_default(),
                ),
            },
            ContentType::Video => TypeFields::Video {
                video_url: wire.video_url.unwrap_or_default(),
            },
            ContentType::MovieReview => TypeFields::MovieReview {
                rating: wire.movie_rating.unwrap_or_default(),
                cast: wire.movie_cast.unwrap_or_default(),
                verdict: wire.movie_verdict.unwrap_or_default(),
                ott_platform: wire.ott_platform.unwrap_or_default(),
            },
        };

        Self {
            title: wire.title,
            content: wire.content,
            summary: wire.summary,
            seo_title: wire.seo_title,
            seo_description: wire.seo_description,
            language: wire.language,
            category: wire.category,
            is_published: wire.is_published,
            is_scheduled: wire.is_scheduled,
            scheduled_publish_at: wire.scheduled_publish_at,
            type_fields,
        }
    }
}

impl From<ContentDraft> for DraftWire {
    fn from(draft: ContentDraft) -> Self {
        let mut wire = DraftWire {
            title: draft.title,
            content: draft.content,
            summary: draft.summary,
            seo_title: draft.seo_title,
            seo_description: draft.seo_description,
            language: draft.language,
            category: draft.category,
            content_type: draft.type_fields.content_type(),
            is_published: draft.is_published,
            is_scheduled: draft.is_scheduled,
            scheduled_publish_at: draft.scheduled_publish_at,
            ..DraftWire::default()
        };

        match draft.type_fields {
            TypeFields::Post {
                image_url,
                is_top_story,
                allow_comments,
            } => {
                wire.image_url = Some(image_url);
                wire.is_top_story = Some(is_top_story);
                wire.allow_comments = Some(allow_comments);
            }
            TypeFields::Photo {
                gallery_category,
                gallery_entity,
                image_gallery,
            } => {
                wire.gallery_category = Some(gallery_category);
                wire.gallery_entity = Some(gallery_entity);
                wire.image_gallery = Some(image_gallery.entries().to_vec());
            }
            TypeFields::Video { video_url } => {
                wire.video_url = Some(video_url);
            }
            TypeFields::MovieReview {
                rating,
                cast,
                verdict,
                ott_platform,
            } => {
                wire.movie_rating = Some(rating);
                wire.movie_cast = Some(cast);
                wire.movie_verdict = Some(verdict);
                wire.ott_platform = Some(ott_platform);
            }
        }

        wire
    }
}
