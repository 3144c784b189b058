//! # Pressroom Common Library
//!
//! Shared code for the Pressroom authoring tools including:
//! - Error taxonomy
//! - Content API wire types
//! - Configuration loading
//! - Operator notification bus

pub mod api;
pub mod config;
pub mod error;
pub mod notify;

pub use error::{Error, Result};
pub use notify::{Notification, NotificationBus, NotificationKind};
