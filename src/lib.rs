//! # spark-gallery
//!
//! Attribute-driven game UI components and a catalog to browse them.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive view state.
//!
//! ## Architecture
//!
//! Components are configured entirely by string attributes. Each write is
//! reflected synchronously: unchanged values are ignored, watched attributes
//! re-render the view, and a sprite's playback rate restarts its frame loop.
//!
//! ```text
//! Catalog ─► Stage (mount / attach) ─► set_attribute ─► View signal ─► renderer
//!                      │
//!                      └─► FrameQueue ─► Stage::advance(ts) ─► FrameScheduler::tick
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, button styles, sprite views
//! - [`theme`] - Button themes and sizes
//! - [`attributes`] - Attribute metadata, reflection contract and parsing
//! - [`state`] - Frame scheduling and audio cues
//! - [`components`] - `game-button` and `game-sprite`
//! - [`catalog`] - Registry, edit controls, markup snippets, gallery page
//! - [`pipeline`] - The stage instances are mounted on
//! - [`renderer`] - Terminal preview output

pub mod attributes;
pub mod catalog;
pub mod components;
pub mod error;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{GalleryError, PlaybackError, Result};

pub use attributes::{AttributeKind, AttributeMap, AttributeSpec, Reaction, RenderResult};

pub use theme::{ButtonSize, ButtonTheme, Palette};

pub use state::{
    AudioSink, FrameHandle, FrameHost, FrameQueue, FrameScheduler, NullSink, RecordingSink,
    SchedulerState, SoundCue, Tick,
};

pub use components::{
    AnimatedSprite, Category, Component, ComponentContext, ComponentDescriptor, Example, Factory,
    ThemedButton,
};

pub use catalog::{Catalog, CatalogEntry, Control, ControlKind, Gallery, Pane};

pub use pipeline::{InstanceId, Stage};

pub use renderer::{render_gallery, render_view};
