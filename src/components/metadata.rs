//! Static component metadata consumed by the catalog.

use std::fmt;

use serde::Serialize;

use crate::attributes::AttributeSpec;

/// Catalog section a component is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ui,
    Sprites,
    Physics,
    Effects,
}

impl Category {
    pub const fn all() -> &'static [Category] {
        &[Self::Ui, Self::Sprites, Self::Physics, Self::Effects]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Sprites => "sprites",
            Self::Physics => "physics",
            Self::Effects => "effects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named markup snippet demonstrating one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub name: &'static str,
    pub code: &'static str,
}

/// Everything the catalog knows about a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    pub name: &'static str,
    /// Markup tag the component is invoked with.
    pub tag: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub attributes: &'static [AttributeSpec],
    pub examples: &'static [Example],
}
