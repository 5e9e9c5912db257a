//! Terminal preview of component views and the gallery page.
//!
//! Views are plain data; this module turns them into crossterm commands
//! queued on any [`std::io::Write`]. Nothing here reads component state
//! other than through [`View`](crate::types::View) and the
//! [`Gallery`](crate::catalog::Gallery) accessors.

pub mod preview;

pub use preview::{render_gallery, render_view, STRIP_LIMIT};
