//! Form state store
//!
//! The canonical mutable record of all editable fields for the item
//! being authored. Mutations go through the field setters; the derived
//! `content` field is produced only by the rich-content surface's
//! change events. The store enforces exactly one invariant at mutation
//! time: `is_published` and `is_scheduled` are mutually exclusive.
//! Required-field validation belongs to the edit surface.

use chrono::{DateTime, Utc};

use crate::models::{ContentDraft, ContentType, TypeFields};

/// Text field names accepted by [`FormStateStore::set_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Summary,
    SeoTitle,
    SeoDescription,
    Language,
    Category,
    ImageUrl,
    GalleryCategory,
    GalleryEntity,
    VideoUrl,
    MovieRating,
    MovieCast,
    MovieVerdict,
    OttPlatform,
}

/// Checkbox-like fields accepted by [`FormStateStore::set_flag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFlag {
    IsPublished,
    IsScheduled,
    IsTopStory,
    AllowComments,
}

/// Holds the draft and applies field edits
#[derive(Debug, Clone, Default)]
pub struct FormStateStore {
    draft: ContentDraft,
}

impl FormStateStore {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            draft: ContentDraft::new(content_type),
        }
    }

    pub fn from_draft(draft: ContentDraft) -> Self {
        Self { draft }
    }

    pub fn get(&self) -> &ContentDraft {
        &self.draft
    }

    pub fn into_draft(self) -> ContentDraft {
        self.draft
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.draft.set_content_type(content_type);
    }

    /// Image list of a photo draft, `None` for other content types
    pub fn images_mut(&mut self) -> Option<&mut crate::selection::ImageGalleryList> {
        self.draft.image_gallery_mut()
    }

    /// Rich-content surface output; never edited directly
    pub fn set_content(&mut self, html: &str) {
        self.draft.content = html.to_string();
    }

    /// Set a text field. Variant fields that do not belong to the
    /// active content type are ignored with a warning; the edit surface
    /// only shows fields of the active type.
    pub fn set_text(&mut self, field: FormField, value: &str) {
        let value = value.to_string();
        match field {
            FormField::Title => self.draft.title = value,
            FormField::Summary => self.draft.summary = value,
            FormField::SeoTitle => self.draft.seo_title = value,
            FormField::SeoDescription => self.draft.seo_description = value,
            FormField::Language => self.draft.language = value,
            FormField::Category => self.draft.category = value,
            FormField::ImageUrl => {
                if let TypeFields::Post { image_url, .. } = &mut self.draft.type_fields {
                    *image_url = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::GalleryCategory => {
                if let TypeFields::Photo { gallery_category, .. } = &mut self.draft.type_fields {
                    *gallery_category = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::GalleryEntity => {
                if let TypeFields::Photo { gallery_entity, .. } = &mut self.draft.type_fields {
                    *gallery_entity = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::VideoUrl => {
                if let TypeFields::Video { video_url } = &mut self.draft.type_fields {
                    *video_url = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::MovieRating => {
                if let TypeFields::MovieReview { rating, .. } = &mut self.draft.type_fields {
                    *rating = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::MovieCast => {
                if let TypeFields::MovieReview { cast, .. } = &mut self.draft.type_fields {
                    *cast = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::MovieVerdict => {
                if let TypeFields::MovieReview { verdict, .. } = &mut self.draft.type_fields {
                    *verdict = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
            FormField::OttPlatform => {
                if let TypeFields::MovieReview { ott_platform, .. } = &mut self.draft.type_fields {
                    *ott_platform = value;
                } else {
                    self.warn_wrong_variant(field);
                }
            }
        }
    }

    /// Set a checkbox-like field, enforcing publish/schedule
    /// exclusivity at the point of mutation.
    pub fn set_flag(&mut self, flag: FormFlag, value: bool) {
        match flag {
            FormFlag::IsPublished => {
                self.draft.is_published = value;
                if value {
                    self.draft.is_scheduled = false;
                    self.draft.scheduled_publish_at = None;
                }
            }
            FormFlag::IsScheduled => {
                self.draft.is_scheduled = value;
                if value {
                    self.draft.is_published = false;
                } else {
                    // The schedule time is only preserved while scheduled
                    self.draft.scheduled_publish_at = None;
                }
            }
            FormFlag::IsTopStory => {
                if let TypeFields::Post { is_top_story, .. } = &mut self.draft.type_fields {
                    *is_top_story = value;
                } else {
                    tracing::warn!(?flag, "Flag does not belong to the active content type");
                }
            }
            FormFlag::AllowComments => {
                if let TypeFields::Post { allow_comments, .. } = &mut self.draft.type_fields {
                    *allow_comments = value;
                } else {
                    tracing::warn!(?flag, "Flag does not belong to the active content type");
                }
            }
        }
    }

    /// Set the schedule time; only meaningful while `is_scheduled`.
    pub fn set_scheduled_publish_at(&mut self, at: Option<DateTime<Utc>>) {
        if self.draft.is_scheduled {
            self.draft.scheduled_publish_at = at;
        } else {
            tracing::warn!("Ignoring schedule time on an unscheduled draft");
        }
    }

    fn warn_wrong_variant(&self, field: FormField) {
        tracing::warn!(
            ?field,
            content_type = self.draft.content_type().as_str(),
            "Field does not belong to the active content type"
        );
    }
}
