//! Error types.
//!
//! Attribute parsing never fails: malformed values degrade to defaults.
//! What remains are catalog and preview failures, which the gallery turns
//! into inline messages, and audio playback failures, which are swallowed.

use thiserror::Error;

use crate::components::Category;

/// Errors surfaced by the catalog, the stage and the preview pane.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("no component registered for tag `{0}`")]
    UnknownTag(String),

    #[error("component `{name}` not found in category `{category}`")]
    UnknownComponent { category: Category, name: String },

    #[error("malformed markup `{snippet}`: {reason}")]
    MalformedMarkup { snippet: String, reason: &'static str },

    #[error("invalid catalog entry `{name}`: {reason}")]
    InvalidEntry { name: String, reason: String },

    #[error("instance {0} is not mounted")]
    UnknownInstance(u64),

    #[error("no component is being previewed")]
    NoActivePreview,

    #[error("failed to export catalog metadata: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

/// Why an audio cue could not be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback blocked by host policy")]
    Blocked,
}
