//! Button themes and their color palettes.
//!
//! # Example
//!
//! ```
//! use spark_gallery::theme::ButtonTheme;
//!
//! let theme = ButtonTheme::parse("success").unwrap_or_default();
//! println!("base: {}", theme.palette().base.to_hex());
//! ```

use serde::Serialize;

use crate::types::Rgba;

// =============================================================================
// ButtonTheme
// =============================================================================

/// Semantic color themes for the game button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTheme {
    /// Blue call-to-action
    #[default]
    Primary,
    /// Green confirmation
    Success,
    /// Red destructive action
    Danger,
}

impl ButtonTheme {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }

    /// Attribute value for this theme.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    pub const fn all() -> &'static [ButtonTheme] {
        &[Self::Primary, Self::Success, Self::Danger]
    }

    /// Colors used to paint a button in this theme.
    pub const fn palette(&self) -> Palette {
        match self {
            Self::Primary => Palette {
                base: Rgba::from_rgb_int(0x4a90e2),
                hover: Rgba::from_rgb_int(0x357abd),
                active: Rgba::from_rgb_int(0x2b62a3),
                shadow: Rgba::from_rgb_int(0x2b62a3),
            },
            Self::Success => Palette {
                base: Rgba::from_rgb_int(0x2ecc71),
                hover: Rgba::from_rgb_int(0x27ae60),
                active: Rgba::from_rgb_int(0x219a52),
                shadow: Rgba::from_rgb_int(0x219a52),
            },
            Self::Danger => Palette {
                base: Rgba::from_rgb_int(0xe74c3c),
                hover: Rgba::from_rgb_int(0xc0392b),
                active: Rgba::from_rgb_int(0xa93224),
                shadow: Rgba::from_rgb_int(0xa93224),
            },
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Resolved colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Resting background
    pub base: Rgba,
    /// Background under the pointer
    pub hover: Rgba,
    /// Background while pressed
    pub active: Rgba,
    /// Drop shadow under the button
    pub shadow: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_themes() {
        for theme in ButtonTheme::all() {
            assert_eq!(ButtonTheme::parse(theme.as_str()), Some(*theme));
        }
        assert_eq!(ButtonTheme::parse("DANGER"), Some(ButtonTheme::Danger));
    }

    #[test]
    fn test_parse_unknown_theme() {
        assert_eq!(ButtonTheme::parse("warning"), None);
        assert_eq!(ButtonTheme::parse(""), None);
    }

    #[test]
    fn test_palettes_are_distinct() {
        let primary = ButtonTheme::Primary.palette();
        let success = ButtonTheme::Success.palette();
        let danger = ButtonTheme::Danger.palette();
        assert_ne!(primary.base, success.base);
        assert_ne!(success.base, danger.base);
        assert_eq!(danger.active, danger.shadow);
    }
}
