//! Attribute reflection - the contract shared by every component.
//!
//! Components are configured only through named string attributes:
//!
//! 1. Each kind declares a fixed list of watched attribute names.
//! 2. A change is reported only when the new string differs from the old one.
//! 3. Reads always go through parse + fallback and never fail.
//!
//! [`AttributeMap`] stores the raw strings in insertion order and performs the
//! old/new comparison; [`reflect`] combines it with the watched list.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::View;

pub mod parse;

// =============================================================================
// Attribute metadata
// =============================================================================

/// Value type of an attribute, used to pick an edit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    String,
    Number,
}

/// Static description of one attribute of a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    pub description: &'static str,
}

// =============================================================================
// Reaction flags
// =============================================================================

bitflags::bitflags! {
    /// What a changed attribute asks its component to do.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Reaction: u8 {
        /// Recompute the view.
        const RENDER = 1 << 0;
        /// Tear down and restart the animation loop.
        const RESCHEDULE = 1 << 1;
    }
}

// =============================================================================
// RenderResult
// =============================================================================

/// Outcome of a mutation through `set_attribute` / `remove_attribute`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    /// New value equals the old one; nothing happened.
    Unchanged,
    /// Value stored, but the attribute is not watched.
    Unobserved,
    /// The component re-rendered synchronously.
    Rendered(View),
}

impl RenderResult {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn view(&self) -> Option<&View> {
        match self {
            Self::Rendered(view) => Some(view),
            _ => None,
        }
    }
}

// =============================================================================
// AttributeMap
// =============================================================================

/// Raw attribute strings in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    values: IndexMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Store `value`. Returns false when it equals the current value.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.values.get_mut(name) {
            Some(current) if current == value => false,
            Some(current) => {
                value.clone_into(current);
                true
            }
            None => {
                self.values.insert(name.to_string(), value.to_string());
                true
            }
        }
    }

    /// Remove `name`. Returns false when it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.values.shift_remove(name).is_some()
    }

    /// Attributes in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// =============================================================================
// Reflection
// =============================================================================

/// Result of writing an attribute, before the component reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// Old and new strings are equal (or an absent attribute was removed).
    Unchanged,
    /// Stored, but not in the watched list.
    Unobserved,
    /// Stored and watched: the component must react.
    Changed,
}

/// Write (`Some`) or remove (`None`) an attribute and classify the change.
pub fn reflect(
    attrs: &mut AttributeMap,
    watched: &[&str],
    name: &str,
    value: Option<&str>,
) -> Reflection {
    let changed = match value {
        Some(value) => attrs.set(name, value),
        None => attrs.remove(name),
    };

    if !changed {
        Reflection::Unchanged
    } else if watched.contains(&name) {
        Reflection::Changed
    } else {
        Reflection::Unobserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCHED: &[&str] = &["text", "theme"];

    #[test]
    fn test_set_same_value_is_unchanged() {
        let mut attrs = AttributeMap::new();
        assert_eq!(reflect(&mut attrs, WATCHED, "text", Some("Go")), Reflection::Changed);
        assert_eq!(reflect(&mut attrs, WATCHED, "text", Some("Go")), Reflection::Unchanged);
        assert_eq!(reflect(&mut attrs, WATCHED, "text", Some("Stop")), Reflection::Changed);
    }

    #[test]
    fn test_comparison_is_on_raw_strings() {
        let mut attrs = AttributeMap::new();
        reflect(&mut attrs, WATCHED, "theme", Some("primary"));
        // Parses to the same theme, but the string differs.
        assert_eq!(reflect(&mut attrs, WATCHED, "theme", Some("PRIMARY")), Reflection::Changed);
    }

    #[test]
    fn test_unwatched_is_stored() {
        let mut attrs = AttributeMap::new();
        assert_eq!(reflect(&mut attrs, WATCHED, "data-id", Some("7")), Reflection::Unobserved);
        assert_eq!(attrs.get("data-id"), Some("7"));
    }

    #[test]
    fn test_remove() {
        let mut attrs = AttributeMap::new();
        assert_eq!(reflect(&mut attrs, WATCHED, "text", None), Reflection::Unchanged);
        reflect(&mut attrs, WATCHED, "text", Some(""));
        assert_eq!(reflect(&mut attrs, WATCHED, "text", None), Reflection::Changed);
        assert!(!attrs.contains("text"));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut attrs = AttributeMap::new();
        attrs.set("b", "1");
        attrs.set("a", "2");
        attrs.set("b", "3");
        let names: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
