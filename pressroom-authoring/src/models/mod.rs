//! Domain models for the authoring engine

mod draft;
mod payload;
mod snapshot;

pub use draft::{ContentDraft, ContentType, TypeFields};
pub use payload::SubmissionPayload;
pub use snapshot::{DraftSnapshot, PreviewSnapshot};
