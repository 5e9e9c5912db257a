//! Component catalog: what exists, how to preview it, how to edit it.
//!
//! - [`registry`] - static list of descriptor + factory pairs
//! - [`controls`] - edit controls derived from attribute metadata
//! - [`markup`] - example and usage snippets
//! - [`preview`] - the gallery page state built on top of a [`Stage`](crate::pipeline::Stage)

pub mod controls;
pub mod markup;
pub mod preview;
pub mod registry;

pub use controls::{Control, ControlKind, controls_for};
pub use markup::Markup;
pub use preview::{ActivePreview, ExamplePreview, Gallery, Pane, PREVIEW_MARKER};
pub use registry::{Catalog, CatalogEntry, SearchHit};
