//! Catalog Registry - descriptor + factory pairs grouped by category.
//!
//! The registry knows nothing about rendering. A front-end lists entries,
//! filters them with [`Catalog::search`] and instantiates them through their
//! factory.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::components::{self, Category, Component, ComponentContext, ComponentDescriptor, Factory};
use crate::error::{GalleryError, Result};

// =============================================================================
// Entry
// =============================================================================

/// One listable component kind.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub descriptor: &'static ComponentDescriptor,
    pub factory: Factory,
}

impl CatalogEntry {
    pub fn new(descriptor: &'static ComponentDescriptor, factory: Factory) -> Self {
        Self { descriptor, factory }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn tag(&self) -> &'static str {
        self.descriptor.tag
    }

    pub fn instantiate(&self, ctx: &ComponentContext) -> Box<dyn Component> {
        (self.factory)(ctx)
    }

    /// Reject entries a front-end could not list or preview.
    pub fn validate(&self) -> Result<()> {
        let d = self.descriptor;
        let invalid = |reason: String| GalleryError::InvalidEntry {
            name: d.name.to_string(),
            reason,
        };

        if d.name.trim().is_empty() {
            return Err(invalid("empty name".into()));
        }
        if d.tag.is_empty() || !d.tag.contains('-') {
            return Err(invalid(format!("tag `{}` must contain a hyphen", d.tag)));
        }

        let mut seen = HashSet::new();
        for attr in d.attributes {
            if !seen.insert(attr.name) {
                return Err(invalid(format!("duplicate attribute `{}`", attr.name)));
            }
            if let (Some(options), Some(default)) = (attr.options, attr.default) {
                if !options.contains(&default) {
                    return Err(invalid(format!(
                        "default `{default}` of `{}` is not one of its options",
                        attr.name
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.descriptor.name)
            .field("tag", &self.descriptor.tag)
            .finish()
    }
}

// =============================================================================
// Search
// =============================================================================

/// Visibility of one listed entry under a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub category: Category,
    pub name: &'static str,
    pub visible: bool,
}

// =============================================================================
// Catalog
// =============================================================================

/// Static registry of component kinds.
#[derive(Debug)]
pub struct Catalog {
    sections: IndexMap<Category, Vec<CatalogEntry>>,
}

impl Catalog {
    /// Empty catalog with every category present.
    pub fn new() -> Self {
        let sections = Category::all().iter().map(|&c| (c, Vec::new())).collect();
        Self { sections }
    }

    /// Catalog holding the built-in components.
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        catalog.load(
            components::builtin()
                .into_iter()
                .map(|(descriptor, factory)| Ok(CatalogEntry::new(descriptor, factory))),
        );
        catalog
    }

    /// Add an entry under its descriptor's category.
    pub fn register(&mut self, entry: CatalogEntry) -> Result<()> {
        entry.validate()?;
        if let Some(existing) = self.find_by_tag(entry.tag()) {
            return Err(GalleryError::InvalidEntry {
                name: entry.name().to_string(),
                reason: format!("tag `{}` already registered by `{}`", entry.tag(), existing.name()),
            });
        }

        let category = entry.descriptor.category;
        log::debug!("registered `{}` under {category}", entry.name());
        self.sections.entry(category).or_default().push(entry);
        Ok(())
    }

    /// Register every loaded entry; failures are logged and skipped.
    ///
    /// Returns the number of entries registered.
    pub fn load<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Result<CatalogEntry>>,
    {
        let mut loaded = 0;
        for entry in entries {
            match entry.and_then(|e| self.register(e)) {
                Ok(()) => loaded += 1,
                Err(err) => log::error!("error loading component: {err}"),
            }
        }
        loaded
    }

    pub fn list(&self, category: Category) -> &[CatalogEntry] {
        self.sections.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&CatalogEntry> {
        self.list(category).iter().find(|e| e.name() == name)
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&CatalogEntry> {
        self.entries().find(|e| e.tag().eq_ignore_ascii_case(tag))
    }

    /// All entries, category by category.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.sections.values().flatten()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sections.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create an unmounted instance of the component registered for `tag`.
    pub fn instantiate(&self, tag: &str, ctx: &ComponentContext) -> Result<Box<dyn Component>> {
        self.find_by_tag(tag)
            .map(|entry| entry.instantiate(ctx))
            .ok_or_else(|| GalleryError::UnknownTag(tag.to_string()))
    }

    /// Case-insensitive name filter. An empty term shows everything.
    ///
    /// The term is matched as typed, surrounding whitespace included.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        let term = term.to_lowercase();
        self.sections
            .iter()
            .flat_map(|(&category, entries)| {
                let term = term.clone();
                entries.iter().map(move |e| SearchHit {
                    category,
                    name: e.name(),
                    visible: e.name().to_lowercase().contains(&term),
                })
            })
            .collect()
    }

    /// Descriptors of every entry as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let descriptors: Vec<&ComponentDescriptor> = self.entries().map(|e| e.descriptor).collect();
        Ok(serde_json::to_string_pretty(&descriptors)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttributeKind, AttributeSpec};
    use crate::components::button;

    static BROKEN: ComponentDescriptor = ComponentDescriptor {
        name: "Broken",
        tag: "broken-thing",
        category: Category::Effects,
        description: "",
        attributes: &[
            AttributeSpec {
                name: "a",
                kind: AttributeKind::String,
                default: None,
                options: None,
                description: "",
            },
            AttributeSpec {
                name: "a",
                kind: AttributeKind::Number,
                default: None,
                options: None,
                description: "",
            },
        ],
        examples: &[],
    };

    static BAD_DEFAULT: ComponentDescriptor = ComponentDescriptor {
        name: "Bad Default",
        tag: "bad-default",
        category: Category::Effects,
        description: "",
        attributes: &[AttributeSpec {
            name: "mode",
            kind: AttributeKind::String,
            default: Some("loud"),
            options: Some(&["quiet"]),
            description: "",
        }],
        examples: &[],
    };

    #[test]
    fn test_builtin_entries() {
        let catalog = Catalog::with_builtin();
        assert_eq!(catalog.len(), 2);
        let names: Vec<_> = catalog.list(Category::Ui).iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Game Button", "Game Sprite"]);
        assert!(catalog.list(Category::Physics).is_empty());
    }

    #[test]
    fn test_every_category_present() {
        let catalog = Catalog::new();
        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(categories, Category::all());
    }

    #[test]
    fn test_get_and_find_by_tag() {
        let catalog = Catalog::with_builtin();
        assert_eq!(catalog.get(Category::Ui, "Game Sprite").unwrap().tag(), "game-sprite");
        assert!(catalog.get(Category::Sprites, "Game Sprite").is_none());
        assert_eq!(catalog.find_by_tag("GAME-BUTTON").unwrap().name(), "Game Button");
    }

    #[test]
    fn test_instantiate_uses_entry_factory() {
        let catalog = Catalog::with_builtin();
        let ctx = ComponentContext::default();
        let sprite = catalog.instantiate("game-sprite", &ctx).unwrap();
        assert_eq!(sprite.tag_name(), "game-sprite");
        let button = catalog.instantiate("game-button", &ctx).unwrap();
        assert_eq!(button.tag_name(), "game-button");
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut catalog = Catalog::with_builtin();
        let entry = CatalogEntry::new(&button::METADATA, button::create);
        assert!(catalog.register(entry).is_err());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_invalid_entries_skipped_on_load() {
        let mut catalog = Catalog::new();
        let loaded = catalog.load([
            Ok(CatalogEntry::new(&BROKEN, button::create)),
            Ok(CatalogEntry::new(&BAD_DEFAULT, button::create)),
            Err(GalleryError::UnknownTag("missing-module".into())),
            Ok(CatalogEntry::new(&button::METADATA, button::create)),
        ]);
        assert_eq!(loaded, 1);
        assert!(catalog.list(Category::Effects).is_empty());
        assert_eq!(catalog.list(Category::Ui).len(), 1);
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::with_builtin();
        let hits = catalog.search("SPRITE");
        let visible: Vec<_> = hits.iter().filter(|h| h.visible).map(|h| h.name).collect();
        assert_eq!(visible, vec!["Game Sprite"]);
        assert_eq!(hits.len(), 2);

        assert!(catalog.search("").iter().all(|h| h.visible));
        assert!(catalog.search("dragon").iter().all(|h| !h.visible));
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let catalog = Catalog::with_builtin();
        assert!(catalog.search(" button").iter().all(|h| !h.visible));
        let hits = catalog.search("game ");
        assert!(hits.iter().all(|h| h.visible));
    }

    #[test]
    fn test_json_export() {
        let catalog = Catalog::with_builtin();
        let json = catalog.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["name"], "Game Button");
        assert_eq!(first["category"], "ui");
        assert_eq!(first["attributes"][1]["options"][2], "danger");
        assert_eq!(first["attributes"][0]["type"], "string");
        // `src` has no default, so the key is omitted
        assert!(value[1]["attributes"][0].get("default").is_none());
    }
}
