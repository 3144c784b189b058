//! pressroom-authoring library interface
//!
//! The draft-state and submission-transform engine behind the Pressroom
//! authoring screen: form state, auxiliary entity selection, periodic
//! draft persistence, and the deterministic transformation of editable
//! state into a Content API submission payload.

pub mod adsettings;
pub mod api;
pub mod models;
pub mod persist;
pub mod resolvers;
pub mod selection;
pub mod session;
pub mod state;
pub mod submit;

pub use crate::api::ContentApi;
pub use crate::models::{ContentDraft, ContentType, DraftSnapshot, SubmissionPayload};
pub use crate::session::{AuthoringSession, SessionMode};
pub use crate::state::FormStateStore;
