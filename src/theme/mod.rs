//! Theme System for the game button.
//!
//! A theme picks the color palette, a size picks padding and font scale.
//! Both are parsed from attribute strings and silently fall back to their
//! defaults (`primary`, `medium`) when the value is not recognized.
//!
//! # Example
//!
//! ```rust
//! use spark_gallery::theme::{ButtonSize, ButtonTheme};
//!
//! let theme = ButtonTheme::parse("neon").unwrap_or_default();
//! assert_eq!(theme, ButtonTheme::Primary);
//!
//! let size = ButtonSize::parse("large").unwrap_or_default();
//! assert_eq!(size.font_size(), 16);
//! ```

pub mod metrics;
pub mod variant;

pub use metrics::ButtonSize;
pub use variant::{ButtonTheme, Palette};
