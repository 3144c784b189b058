//! Entity resolvers
//!
//! Fetch and de-duplicate the selectable auxiliary entity lists. These
//! feed non-blocking UI, not required submission data, so fetch
//! failures are swallowed here: the resolver logs a warning and
//! presents an empty list instead of propagating an error. All
//! resolution is idempotent and safe to repeat.

use pressroom_common::api::{Category, GalleryRecord, Language, Region};
use pressroom_common::Result;
use tracing::warn;

use crate::api::ContentApi;
use crate::selection::RegionSelection;

fn swallow<T>(what: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(list) => list,
        Err(e) => {
            warn!(error = %e, what, "Entity resolution failed, presenting empty list");
            Vec::new()
        }
    }
}

pub async fn resolve_regions(api: &dyn ContentApi) -> Vec<Region> {
    swallow("regions", api.fetch_config().await.map(|c| c.states))
}

pub async fn resolve_categories(api: &dyn ContentApi) -> Vec<Category> {
    swallow("categories", api.fetch_config().await.map(|c| c.categories))
}

pub async fn resolve_languages(api: &dyn ContentApi) -> Vec<Language> {
    swallow("languages", api.fetch_config().await.map(|c| c.languages))
}

/// Aggregate artist names: the dedicated artist collection seeds the
/// list, then names referenced by published items and galleries are
/// merged in. Empty/whitespace entries are discarded and dedup is
/// case-sensitive; differently-cased names stay distinct.
pub async fn resolve_artists(api: &dyn ContentApi) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for artist in swallow("artists", api.fetch_artists().await) {
        push_unique(&mut names, artist.name);
    }

    let articles = swallow("published articles", api.list_published_articles().await);
    for article in &articles {
        for name in decode_artist_fragment(article.artists.as_deref()) {
            push_unique(&mut names, name);
        }
    }

    let galleries = swallow("galleries", api.fetch_galleries().await);
    for gallery in &galleries {
        for name in &gallery.artists {
            push_unique(&mut names, name.clone());
        }
    }

    names
}

pub async fn resolve_galleries(api: &dyn ContentApi) -> Vec<GalleryRecord> {
    swallow("galleries", api.fetch_galleries().await)
}

pub async fn resolve_platforms(api: &dyn ContentApi) -> Vec<String> {
    swallow("ott platforms", api.fetch_ott_platforms().await)
        .into_iter()
        .map(|p| p.name)
        .collect()
}

pub async fn resolve_gallery_entities(api: &dyn ContentApi, category: &str) -> Vec<String> {
    swallow(
        "gallery entities",
        api.fetch_gallery_entities(category).await,
    )
}

/// Next sequence number for a photo gallery under `category`/`entity`,
/// `None` when the lookup fails.
pub async fn resolve_gallery_next_number(
    api: &dyn ContentApi,
    category: &str,
    entity: &str,
) -> Option<u32> {
    match api.fetch_gallery_next_number(category, entity).await {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(error = %e, category, entity, "Gallery next-number lookup failed");
            None
        }
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return;
    }
    if !names.iter().any(|n| n == trimmed) {
        names.push(trimmed.to_string());
    }
}

/// Decode a legacy JSON-encoded region list from a record or snapshot.
/// Unparseable input falls back to the sentinel selection and is never
/// surfaced as an error.
pub fn decode_region_fragment(fragment: Option<&str>) -> RegionSelection {
    let Some(raw) = fragment else {
        return RegionSelection::default();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(codes) => RegionSelection::from_codes(codes),
        Err(e) => {
            warn!(error = %e, "Malformed region fragment, falling back to \"all\"");
            RegionSelection::default()
        }
    }
}

/// Decode a legacy JSON-encoded artist list; unparseable input falls
/// back to empty.
pub fn decode_artist_fragment(fragment: Option<&str>) -> Vec<String> {
    let Some(raw) = fragment else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(names) => names
            .into_iter()
            .filter(|n| !n.trim().is_empty())
            .collect(),
        Err(e) => {
            warn!(error = %e, "Malformed artist fragment, falling back to empty");
            Vec::new()
        }
    }
}
