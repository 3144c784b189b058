//! Operator notification bus
//!
//! Carries (kind, title, message) triples from the authoring engine to
//! whatever surface renders them. The engine only ever emits; rendering
//! and dismissal belong to the consumer.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Notification severity/kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single operator-facing notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Broadcast bus for operator notifications
///
/// Thin wrapper over a tokio broadcast channel. Emitting with no
/// subscribers is not an error; notifications are advisory and no
/// failure here is ever fatal to the authoring session.
#[derive(Clone)]
pub struct NotificationBus {
    tx: broadcast::Sender<Notification>,
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all future notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Emit a notification to all subscribers
    pub fn emit(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            tracing::debug!("No notification subscribers: {}", e);
        }
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(64)
    }
}
