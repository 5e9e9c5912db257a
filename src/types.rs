//! Core types for spark-gallery.
//!
//! Colors and the rendered views that flow out of components. Every view is a
//! plain value: hosts compare, serialize or draw them however they like.

use serde::{Serialize, Serializer};

use crate::theme::{ButtonSize, ButtonTheme, Palette};

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create from a packed `0xRRGGBB` integer.
    ///
    /// ```
    /// use spark_gallery::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_rgb_int(0x4a90e2), Rgba::rgb(74, 144, 226));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// =============================================================================
// Button view
// =============================================================================

/// Box padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub vertical: u16,
    pub horizontal: u16,
}

/// Everything a host needs to draw a themed button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub label: String,
    pub theme: ButtonTheme,
    pub size: ButtonSize,
    pub palette: Palette,
    /// Label color, identical for every theme.
    pub foreground: Rgba,
    pub padding: Padding,
    pub font_size: u16,
}

// =============================================================================
// Sprite view
// =============================================================================

/// Horizontal mirroring of a sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flip {
    #[default]
    None,
    Horizontal,
}

impl Flip {
    /// Parse from an attribute value (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "horizontal" => Some(Self::Horizontal),
            _ => None,
        }
    }
}

/// A cropped window onto a sprite sheet.
///
/// The sheet is positioned at (`offset_x`, `offset_y`) behind a
/// `width × height` viewport, so the visible frame is the one starting at
/// `-offset_x` on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteView {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub frame: u32,
    pub frame_count: u32,
    pub offset_x: i64,
    pub offset_y: i64,
    pub flip: Flip,
}

impl SpriteView {
    pub fn is_mirrored(&self) -> bool {
        self.flip == Flip::Horizontal
    }
}

// =============================================================================
// View
// =============================================================================

/// Rendered output of any component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum View {
    Button(ButtonStyle),
    Sprite(SpriteView),
}

impl View {
    pub fn as_button(&self) -> Option<&ButtonStyle> {
        match self {
            Self::Button(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_sprite(&self) -> Option<&SpriteView> {
        match self {
            Self::Sprite(view) => Some(view),
            _ => None,
        }
    }
}
