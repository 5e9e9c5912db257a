//! Button sizes: padding and font scale.

use serde::Serialize;

use crate::types::Padding;

/// Size presets for the game button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub const fn padding(&self) -> Padding {
        match self {
            Self::Small => Padding { vertical: 8, horizontal: 16 },
            Self::Medium => Padding { vertical: 12, horizontal: 24 },
            Self::Large => Padding { vertical: 16, horizontal: 32 },
        }
    }

    /// Label font size in pixels.
    pub const fn font_size(&self) -> u16 {
        match self {
            Self::Small => 12,
            Self::Medium => 14,
            Self::Large => 16,
        }
    }
}
