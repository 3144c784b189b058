//! Authoring session orchestration
//!
//! Ties one authoring screen together: the form state store, the
//! selection managers, draft persistence, and the submit/preview flows
//! against the Content API. There is exactly one session per authoring
//! screen and no shared mutable resource beyond the persisted slots.

use pressroom_common::config::AuthoringConfig;
use pressroom_common::{Error, Notification, NotificationBus, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::ContentApi;
use crate::models::{ContentType, DraftSnapshot};
use crate::persist::{DraftPersistenceManager, SlotStore};
use crate::resolvers::{
    decode_artist_fragment, decode_region_fragment, resolve_artists, resolve_platforms,
};
use crate::selection::{GallerySelection, NamedListSelection, RegionSelection};
use crate::state::FormStateStore;
use crate::submit::{build_submission, TransformOptions};

/// Whether the screen authors a new item or edits an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    New,
    Edit { article_id: i64 },
}

pub struct AuthoringSession {
    api: Arc<dyn ContentApi>,
    notifications: NotificationBus,
    mode: SessionMode,
    form: FormStateStore,
    regions: RegionSelection,
    artists: NamedListSelection,
    platforms: NamedListSelection,
    gallery: GallerySelection,
    persistence: DraftPersistenceManager,
    options: TransformOptions,
}

impl AuthoringSession {
    /// Initialize the screen for a new item. Offers restoration of a
    /// persisted snapshot: if one exists it is applied, the slot is
    /// deleted, and the operator is notified.
    pub async fn start_new(
        api: Arc<dyn ContentApi>,
        store: Arc<dyn SlotStore>,
        notifications: NotificationBus,
        config: &AuthoringConfig,
    ) -> Result<Self> {
        let mut session = Self::assemble(api, store, notifications, config, SessionMode::New).await;

        if let Some(snapshot) = session.persistence.restore_on_init().await? {
            session.apply_snapshot(snapshot);
            session.notifications.emit(Notification::info(
                "Draft restored",
                "An unsaved draft was restored",
            ));
        }

        Ok(session)
    }

    /// Initialize the screen for an existing record (edit mode).
    /// Malformed region/artist fragments on the record recover to safe
    /// defaults without surfacing an error; a failed record fetch is a
    /// transport error and is surfaced.
    pub async fn start_edit(
        api: Arc<dyn ContentApi>,
        store: Arc<dyn SlotStore>,
        notifications: NotificationBus,
        config: &AuthoringConfig,
        article_id: i64,
    ) -> Result<Self> {
        let record = match api.fetch_article(article_id).await {
            Ok(record) => record,
            Err(e) => {
                notifications.emit(Notification::error(
                    "Load failed",
                    "Could not load the article for editing",
                ));
                return Err(e);
            }
        };

        let mut session = Self::assemble(
            api,
            store,
            notifications,
            config,
            SessionMode::Edit { article_id },
        )
        .await;

        session.form = FormStateStore::from_draft(crate::models::ContentDraft::from_record(&record));
        session.regions = decode_region_fragment(record.states.as_deref());
        if let Some(name) = decode_artist_fragment(record.artists.as_deref()).into_iter().next() {
            session.artists.select(&name);
        }
        if let Some(gallery_id) = record.gallery_id {
            match session.api.fetch_gallery(gallery_id).await {
                Ok(gallery) => session.gallery.select(gallery),
                Err(e) => {
                    warn!(error = %e, gallery_id, "Gallery reference not resolved");
                }
            }
        }

        Ok(session)
    }

    async fn assemble(
        api: Arc<dyn ContentApi>,
        store: Arc<dyn SlotStore>,
        notifications: NotificationBus,
        config: &AuthoringConfig,
        mode: SessionMode,
    ) -> Self {
        let artist_names = resolve_artists(api.as_ref()).await;
        let platform_names = resolve_platforms(api.as_ref()).await;

        Self {
            persistence: DraftPersistenceManager::new(store),
            artists: NamedListSelection::new(artist_names, config.artist_dedup_case_insensitive),
            platforms: NamedListSelection::new(
                platform_names,
                config.artist_dedup_case_insensitive,
            ),
            gallery: GallerySelection::default(),
            regions: RegionSelection::default(),
            form: FormStateStore::new(ContentType::Post),
            options: TransformOptions {
                auto_summary_override: config.auto_summary_override,
            },
            api,
            notifications,
            mode,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_new_item(&self) -> bool {
        self.mode == SessionMode::New
    }

    pub fn form(&self) -> &FormStateStore {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormStateStore {
        &mut self.form
    }

    pub fn regions(&self) -> &RegionSelection {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut RegionSelection {
        &mut self.regions
    }

    pub fn artists(&self) -> &NamedListSelection {
        &self.artists
    }

    pub fn artists_mut(&mut self) -> &mut NamedListSelection {
        &mut self.artists
    }

    pub fn platforms(&self) -> &NamedListSelection {
        &self.platforms
    }

    pub fn platforms_mut(&mut self) -> &mut NamedListSelection {
        &mut self.platforms
    }

    pub fn gallery(&self) -> &GallerySelection {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GallerySelection {
        &mut self.gallery
    }

    /// Current state as the persisted tuple
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            form_data: self.form.get().clone(),
            selected_states: self.regions.codes().to_vec(),
            selected_artist: self.artists.selected().map(str::to_string),
            selected_gallery: self.gallery.current().cloned(),
        }
    }

    fn apply_snapshot(&mut self, snapshot: DraftSnapshot) {
        self.form = FormStateStore::from_draft(snapshot.form_data);
        self.regions = RegionSelection::from_codes(snapshot.selected_states);
        match snapshot.selected_artist {
            Some(name) => self.artists.select(&name),
            None => self.artists.clear(),
        }
        self.gallery = GallerySelection::from(snapshot.selected_gallery);
    }

    /// Create a new artist locally and push it upstream. The local
    /// list/selection update is transactional; the upstream POST is
    /// best-effort and surfaced on failure.
    pub async fn create_and_select_artist(&mut self, name: &str) -> Result<()> {
        let inserted = self.artists.create_and_select(name)?;
        if inserted {
            if let Err(e) = self.api.create_artist(name.trim()).await {
                warn!(error = %e, "Artist not persisted upstream");
                self.notifications.emit(Notification::error(
                    "Artist",
                    "Could not save the new artist to the server",
                ));
            }
        }
        Ok(())
    }

    /// Create a new streaming-platform tag locally and upstream
    pub async fn create_and_select_platform(&mut self, name: &str) -> Result<()> {
        let inserted = self.platforms.create_and_select(name)?;
        if inserted {
            if let Err(e) = self.api.create_ott_platform(name.trim()).await {
                warn!(error = %e, "Platform not persisted upstream");
                self.notifications.emit(Notification::error(
                    "Platform",
                    "Could not save the new platform to the server",
                ));
            }
        }
        Ok(())
    }

    /// Create a new gallery entity for a photo draft. The created name
    /// is written back into the form; unlike artists, there is no local
    /// list so the upstream POST must succeed.
    pub async fn create_gallery_entity(&mut self, category: &str, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("Name must not be empty".to_string()));
        }
        match self.api.create_gallery_entity(category, trimmed).await {
            Ok(created) => {
                self.form.set_text(crate::state::FormField::GalleryEntity, &created);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Gallery entity not persisted upstream");
                self.notifications.emit(Notification::error(
                    "Gallery entity",
                    "Could not save the new gallery entity to the server",
                ));
                Err(e)
            }
        }
    }

    /// One autosave interval elapsed; see
    /// [`DraftPersistenceManager::autosave_tick`] for eligibility.
    pub async fn autosave_tick(&mut self) -> Result<bool> {
        let snapshot = self.snapshot();
        let is_new = self.is_new_item();
        self.persistence.autosave_tick(&snapshot, is_new).await
    }

    /// Validate, transform, and submit the draft. On success the
    /// persisted slots are cleared unconditionally and an edit session
    /// continues against the stored record.
    pub async fn submit(&mut self) -> Result<i64> {
        let missing = self.form.get().validate();
        if !missing.is_empty() {
            self.notifications.emit(Notification::error(
                "Missing fields",
                format!("Required fields missing: {}", missing.join(", ")),
            ));
            return Err(Error::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let payload = build_submission(
            self.form.get(),
            &self.regions,
            self.artists.selected(),
            &self.gallery,
            &self.options,
        );

        let result = match self.mode {
            SessionMode::New => self.api.create_article(&payload).await,
            SessionMode::Edit { article_id } => {
                self.api.update_article(article_id, &payload).await
            }
        };

        match result {
            Ok(record) => {
                self.persistence.clear_after_submit().await?;
                self.mode = SessionMode::Edit { article_id: record.id };
                info!(id = record.id, "Submission stored");
                self.notifications
                    .emit(Notification::success("Saved", "Content saved successfully"));
                Ok(record.id)
            }
            Err(e) => {
                warn!(error = %e, "Submission failed");
                self.notifications.emit(Notification::error(
                    "Save failed",
                    "Could not save the content, please try again",
                ));
                Err(e)
            }
        }
    }

    /// Capture the current state for the ephemeral preview view
    pub async fn preview(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.persistence.capture_preview(&snapshot).await
    }

    /// Publish or unpublish the stored record (edit mode only)
    pub async fn set_published(&mut self, publish: bool) -> Result<()> {
        let SessionMode::Edit { article_id } = self.mode else {
            return Err(Error::InvalidInput(
                "Cannot publish an item that has not been created".to_string(),
            ));
        };

        match self.api.patch_publish_state(article_id, publish).await {
            Ok(()) => {
                self.form.set_flag(crate::state::FormFlag::IsPublished, publish);
                Ok(())
            }
            Err(e) => {
                self.notifications.emit(Notification::error(
                    "Publish failed",
                    "Could not change the publish state",
                ));
                Err(e)
            }
        }
    }
}

/// Drive the autosave interval for a shared session. The loop runs
/// until the returned handle is aborted; eligibility is re-checked on
/// every tick.
pub fn spawn_autosave(
    session: Arc<RwLock<AuthoringSession>>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick of a tokio interval fires immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let mut session = session.write().await;
            if let Err(e) = session.autosave_tick().await {
                warn!(error = %e, "Autosave failed");
            }
        }
    })
}
