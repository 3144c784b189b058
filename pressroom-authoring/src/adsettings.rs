//! Ad placement toggles
//!
//! Optimistic toggling: the mutation is applied to in-memory state
//! immediately, then confirmed by a network call. On failure the
//! mutation is reverted exactly once and the operator is notified; no
//! retry is attempted.

use pressroom_common::api::AdSetting;
use pressroom_common::{Error, Notification, NotificationBus, Result};
use std::sync::Arc;
use tracing::warn;

use crate::api::ContentApi;

pub struct AdSettingsPanel {
    api: Arc<dyn ContentApi>,
    notifications: NotificationBus,
    settings: Vec<AdSetting>,
}

impl AdSettingsPanel {
    pub fn new(api: Arc<dyn ContentApi>, notifications: NotificationBus) -> Self {
        Self {
            api,
            notifications,
            settings: Vec::new(),
        }
    }

    pub fn settings(&self) -> &[AdSetting] {
        &self.settings
    }

    /// Fetch the current placements. Transport failure is surfaced via
    /// notification and leaves the current list untouched.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.fetch_ad_settings().await {
            Ok(settings) => {
                self.settings = settings;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load ad settings");
                self.notifications.emit(Notification::error(
                    "Ad settings",
                    "Could not load ad settings",
                ));
                Err(e)
            }
        }
    }

    /// Toggle one placement. Returns the final enabled state: the new
    /// value on success, the pre-toggle value after a reverted failure.
    pub async fn toggle(&mut self, id: i64) -> Result<bool> {
        let idx = self
            .settings
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("ad setting {}", id)))?;

        // Optimistic flip
        let previous = self.settings[idx].enabled;
        let target = !previous;
        self.settings[idx].enabled = target;

        match self.api.update_ad_setting(id, target).await {
            Ok(confirmed) => {
                self.settings[idx] = confirmed;
                Ok(self.settings[idx].enabled)
            }
            Err(e) => {
                // Revert exactly once; the operator must re-trigger
                self.settings[idx].enabled = previous;
                warn!(error = %e, id, "Ad toggle failed, reverted");
                self.notifications.emit(Notification::error(
                    "Ad settings",
                    "Could not update ad placement",
                ));
                Ok(previous)
            }
        }
    }
}
