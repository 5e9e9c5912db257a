//! Embedding pipeline: mounting instances and delivering frames.
//!
//! ```text
//! Catalog ─► Stage::create ─► Stage::mount (attach) ─► Stage::advance(ts) ─► on_animation_frame
//!                                   │
//!                                   └─► Stage::unmount (detach)
//! ```

pub mod mount;

pub use mount::{InstanceId, Stage};
