//! Submission transformer
//!
//! Pure, total function from current editable state to the wire
//! submission payload. Applied rules, in order: markup stripping,
//! auto-summary, region serialization, artist list form, image order,
//! SEO fallbacks, schedule normalization, gallery reference.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{ContentDraft, SubmissionPayload, TypeFields};
use crate::selection::{GallerySelection, RegionSelection};

/// Auto-summary length in characters of stripped content
pub const SUMMARY_MAX_CHARS: usize = 200;

/// SEO description fallback length in characters
pub const SEO_DESCRIPTION_MAX_CHARS: usize = 160;

/// Literal suffix appended to derived summaries/descriptions
pub const ELLIPSIS: &str = "...";

/// Named transformer policies
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Overwrite any manually authored summary with the derived one.
    /// This matches the observed upstream behavior; turning it off
    /// preserves a non-empty manual summary instead.
    pub auto_summary_override: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            auto_summary_override: true,
        }
    }
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex"))
}

/// Strip all markup tags from rendered content, yielding plain text
pub fn strip_markup(html: &str) -> String {
    tag_regex().replace_all(html, "").into_owned()
}

/// First `max_chars` characters (not bytes) of `text`
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn derive_excerpt(plain_text: &str, max_chars: usize) -> String {
    format!("{}{}", truncate_chars(plain_text, max_chars), ELLIPSIS)
}

/// Build the submission payload from current state. Cannot fail:
/// total over validated inputs; submission failure belongs to the
/// Content API boundary.
pub fn build_submission(
    draft: &ContentDraft,
    regions: &RegionSelection,
    artist: Option<&str>,
    gallery: &GallerySelection,
    options: &TransformOptions,
) -> SubmissionPayload {
    let plain_text = strip_markup(&draft.content);

    let summary = if options.auto_summary_override || draft.summary.trim().is_empty() {
        derive_excerpt(&plain_text, SUMMARY_MAX_CHARS)
    } else {
        draft.summary.clone()
    };

    let seo_title = if draft.seo_title.trim().is_empty() {
        draft.title.clone()
    } else {
        draft.seo_title.clone()
    };

    let seo_description = if draft.seo_description.trim().is_empty() {
        derive_excerpt(&plain_text, SEO_DESCRIPTION_MAX_CHARS)
    } else {
        draft.seo_description.clone()
    };

    let scheduled_publish_at = if draft.is_scheduled {
        draft.scheduled_publish_at
    } else {
        None
    };

    let mut payload = SubmissionPayload {
        title: draft.title.clone(),
        content: draft.content.clone(),
        summary,
        seo_title,
        seo_description,
        content_type: draft.content_type(),
        language: draft.language.clone(),
        category: draft.category.clone(),
        states: regions.codes().to_vec(),
        artists: artist
            .filter(|a| !a.trim().is_empty())
            .map(|a| vec![a.to_string()])
            .unwrap_or_default(),
        image_gallery: draft
            .image_gallery()
            .map(|list| list.entries().to_vec())
            .unwrap_or_default(),
        gallery_id: gallery.gallery_id(),
        is_published: draft.is_published,
        is_scheduled: draft.is_scheduled,
        scheduled_publish_at,
        image_url: None,
        is_top_story: None,
        allow_comments: None,
        gallery_category: None,
        gallery_entity: None,
        video_url: None,
        movie_rating: None,
        movie_cast: None,
        movie_verdict: None,
        ott_platform: None,
    };

    match &draft.type_fields {
        TypeFields::Post {
            image_url,
            is_top_story,
            allow_comments,
        } => {
            payload.image_url = Some(image_url.clone());
            payload.is_top_story = Some(*is_top_story);
            payload.allow_comments = Some(*allow_comments);
        }
        TypeFields::Photo {
            gallery_category,
            gallery_entity,
            ..
        } => {
            payload.gallery_category = Some(gallery_category.clone());
            payload.gallery_entity = Some(gallery_entity.clone());
        }
        TypeFields::Video { video_url } => {
            payload.video_url = Some(video_url.clone());
        }
        TypeFields::MovieReview {
            rating,
            cast,
            verdict,
            ott_platform,
        } => {
            payload.movie_rating = Some(rating.clone());
            payload.movie_cast = Some(cast.clone());
            payload.movie_verdict = Some(verdict.clone());
            payload.ott_platform = Some(ott_platform.clone());
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;
    use chrono::{TimeZone, Utc};

    fn base_draft(content_type: ContentType) -> ContentDraft {
        let mut draft = ContentDraft::new(content_type);
        draft.title = "Big premiere".to_string();
        draft.content = "<p>Opening <b>night</b> report</p>".to_string();
        draft
    }

    fn transform(draft: &ContentDraft) -> SubmissionPayload {
        build_submission(
            draft,
            &RegionSelection::default(),
            None,
            &GallerySelection::default(),
            &TransformOptions::default(),
        )
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_markup("no tags"), "no tags");
        assert_eq!(strip_markup("<img src=\"x.jpg\"/>caption"), "caption");
    }

    #[test]
    fn test_auto_summary_short_content() {
        let payload = transform(&base_draft(ContentType::Post));
        assert_eq!(payload.summary, "Opening night report...");
    }

    #[test]
    fn test_auto_summary_truncates_at_200_chars() {
        let mut draft = base_draft(ContentType::Post);
        let body = "x".repeat(500);
        draft.content = format!("<p>{}</p>", body);

        let payload = transform(&draft);
        assert_eq!(payload.summary.len(), 200 + ELLIPSIS.len());
        assert!(payload.summary.ends_with(ELLIPSIS));
        assert_eq!(&payload.summary[..200], &body[..200]);
    }

    #[test]
    fn test_auto_summary_counts_chars_not_bytes() {
        let mut draft = base_draft(ContentType::Post);
        let body: String = "ప".repeat(300);
        draft.content = format!("<p>{}</p>", body);

        let payload = transform(&draft);
        let summary_chars: Vec<char> = payload.summary.chars().collect();
        assert_eq!(summary_chars.len(), 200 + ELLIPSIS.len());
    }

    #[test]
    fn test_auto_summary_overwrites_manual_summary() {
        let mut draft = base_draft(ContentType::Post);
        draft.summary = "Hand-written summary".to_string();

        let payload = transform(&draft);
        assert_eq!(payload.summary, "Opening night report...");
    }

    #[test]
    fn test_manual_summary_kept_when_override_disabled() {
        let mut draft = base_draft(ContentType::Post);
        draft.summary = "Hand-written summary".to_string();

        let payload = build_submission(
            &draft,
            &RegionSelection::default(),
            None,
            &GallerySelection::default(),
            &TransformOptions {
                auto_summary_override: false,
            },
        );
        assert_eq!(payload.summary, "Hand-written summary");
    }

    #[test]
    fn test_seo_fallbacks() {
        let payload = transform(&base_draft(ContentType::Post));
        assert_eq!(payload.seo_title, "Big premiere");
        assert_eq!(payload.seo_description, "Opening night report...");

        let mut draft = base_draft(ContentType::Post);
        draft.seo_title = "Custom SEO title".to_string();
        draft.seo_description = "Custom description".to_string();
        let payload = transform(&draft);
        assert_eq!(payload.seo_title, "Custom SEO title");
        assert_eq!(payload.seo_description, "Custom description");
    }

    #[test]
    fn test_regions_serialized_verbatim_with_sentinel() {
        let payload = transform(&base_draft(ContentType::Post));
        assert_eq!(payload.states, ["all"]);

        let mut regions = RegionSelection::default();
        regions.select("ap");
        regions.select("ts");
        let payload = build_submission(
            &base_draft(ContentType::Post),
            &regions,
            None,
            &GallerySelection::default(),
            &TransformOptions::default(),
        );
        assert_eq!(payload.states, ["ap", "ts"]);
    }

    #[test]
    fn test_artist_is_list_never_bare_string() {
        let draft = base_draft(ContentType::Post);
        let payload = build_submission(
            &draft,
            &RegionSelection::default(),
            Some("Nani"),
            &GallerySelection::default(),
            &TransformOptions::default(),
        );
        assert_eq!(payload.artists, ["Nani"]);

        let payload = transform(&draft);
        assert!(payload.artists.is_empty());
    }

    #[test]
    fn test_schedule_normalization() {
        let mut draft = base_draft(ContentType::Post);
        let at = Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap();

        // Not scheduled: explicit null even when a stale value lingers
        draft.scheduled_publish_at = Some(at);
        let payload = transform(&draft);
        assert_eq!(payload.scheduled_publish_at, None);

        draft.is_scheduled = true;
        let payload = transform(&draft);
        assert_eq!(payload.scheduled_publish_at, Some(at));

        // Serialized form carries the key explicitly, never omitted
        let value = serde_json::to_value(transform(&base_draft(ContentType::Post))).unwrap();
        assert!(value.as_object().unwrap().contains_key("scheduled_publish_at"));
        assert!(value["scheduled_publish_at"].is_null());
    }

    #[test]
    fn test_photo_payload_shape() {
        let mut draft = base_draft(ContentType::Photo);
        {
            let images = draft.image_gallery_mut().unwrap();
            images.add("a", "");
            images.add("b", "");
        }

        let payload = transform(&draft);
        let urls: Vec<_> = payload.image_gallery.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, ["a", "b"]);
        assert_eq!(payload.gallery_id, None);

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["gallery_id"].is_null());
        assert_eq!(value["image_gallery"].as_array().unwrap().len(), 2);
        // Variant fields of other types are omitted entirely
        assert!(value.get("video_url").is_none());
        assert!(value.get("movie_rating").is_none());
    }

    #[test]
    fn test_gallery_reference_is_id_only() {
        use pressroom_common::api::GalleryRecord;

        let mut gallery = GallerySelection::default();
        gallery.select(GalleryRecord {
            id: 42,
            title: "Premiere".to_string(),
            image_count: 9,
            artists: vec![],
        });

        let payload = build_submission(
            &base_draft(ContentType::Post),
            &RegionSelection::default(),
            None,
            &gallery,
            &TransformOptions::default(),
        );
        assert_eq!(payload.gallery_id, Some(42));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["gallery_id"], 42);
        assert!(value.get("selectedGallery").is_none());
    }
}
