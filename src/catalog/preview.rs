//! Gallery - catalog page state: selection, live preview, controls, examples.
//!
//! Selecting an entry builds a preview pane:
//!
//! 1. A live instance with every attribute default applied
//! 2. One edit control per attribute
//! 3. A usage snippet regenerated from the live instance's attributes
//! 4. One instance per example snippet
//!
//! Edits go through [`Gallery::edit`], which writes onto the live instance
//! and refreshes the snippet. Any failure while building the pane replaces it
//! with an inline error message.

use crate::attributes::RenderResult;
use crate::components::{Category, ComponentDescriptor};
use crate::error::{GalleryError, Result};
use crate::pipeline::{InstanceId, Stage};

use super::controls::{Control, controls_for};
use super::markup;
use super::registry::{Catalog, SearchHit};

/// Marker attribute identifying the live preview instance.
pub const PREVIEW_MARKER: &str = "data-preview-component";

pub const PLACEHOLDER_TITLE: &str = "Select a Component";
pub const PLACEHOLDER_TEXT: &str = "Select a component from the list to preview";

// =============================================================================
// Pane
// =============================================================================

/// One rendered example.
#[derive(Debug, Clone)]
pub struct ExamplePreview {
    pub name: &'static str,
    pub code: &'static str,
    pub instance: InstanceId,
}

/// The pane for a selected entry.
#[derive(Debug, Clone)]
pub struct ActivePreview {
    pub category: Category,
    pub descriptor: &'static ComponentDescriptor,
    pub live: InstanceId,
    pub controls: Vec<Control>,
    pub usage: String,
    pub examples: Vec<ExamplePreview>,
}

/// What the preview area currently shows.
#[derive(Debug, Clone)]
pub enum Pane {
    Placeholder,
    Error { title: String, message: String },
    Preview(ActivePreview),
}

// =============================================================================
// Gallery
// =============================================================================

pub struct Gallery {
    catalog: Catalog,
    stage: Stage,
    pane: Pane,
    search: String,
}

impl Gallery {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_stage(catalog, Stage::new())
    }

    pub fn with_stage(catalog: Catalog, stage: Stage) -> Self {
        Self {
            catalog,
            stage,
            pane: Pane::Placeholder,
            search: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn pane(&self) -> &Pane {
        &self.pane
    }

    pub fn active(&self) -> Option<&ActivePreview> {
        match &self.pane {
            Pane::Preview(active) => Some(active),
            _ => None,
        }
    }

    /// Heading of the preview area.
    pub fn title(&self) -> &str {
        match &self.pane {
            Pane::Placeholder => PLACEHOLDER_TITLE,
            Pane::Error { title, .. } => title.as_str(),
            Pane::Preview(active) => active.descriptor.name,
        }
    }

    /// Show `name` from `category`. Errors end up in the pane.
    pub fn select(&mut self, category: Category, name: &str) -> &Pane {
        self.stage.clear();
        self.pane = match self.build(category, name) {
            Ok(active) => Pane::Preview(active),
            Err(err) => {
                log::error!("error loading component: {err}");
                self.stage.clear();
                Pane::Error {
                    title: name.to_string(),
                    message: format!("Error loading component: {err}"),
                }
            }
        };
        &self.pane
    }

    /// Back to the placeholder.
    pub fn deselect(&mut self) {
        self.stage.clear();
        self.pane = Pane::Placeholder;
    }

    fn build(&mut self, category: Category, name: &str) -> Result<ActivePreview> {
        let entry = *self
            .catalog
            .get(category, name)
            .ok_or_else(|| GalleryError::UnknownComponent {
                category,
                name: name.to_string(),
            })?;
        let descriptor = entry.descriptor;

        let mut live = entry.instantiate(self.stage.context());
        live.set_attribute(PREVIEW_MARKER, "");
        for attr in descriptor.attributes {
            if let Some(default) = attr.default {
                live.set_attribute(attr.name, default);
            }
        }
        let live = self.stage.mount(live);

        let mut examples = Vec::with_capacity(descriptor.examples.len());
        for example in descriptor.examples {
            let parsed = markup::parse(example.code)?;
            let mut instance = self.catalog.instantiate(&parsed.tag, self.stage.context())?;
            for (attr, value) in &parsed.attributes {
                instance.set_attribute(attr, value);
            }
            examples.push(ExamplePreview {
                name: example.name,
                code: example.code,
                instance: self.stage.mount(instance),
            });
        }

        let usage = self.usage_of(live)?;
        Ok(ActivePreview {
            category,
            descriptor,
            live,
            controls: controls_for(descriptor),
            usage,
            examples,
        })
    }

    /// Write an edited control value onto the live instance.
    pub fn edit(&mut self, attribute: &str, value: &str) -> Result<RenderResult> {
        let live = self.active().ok_or(GalleryError::NoActivePreview)?.live;
        let result = self.stage.set_attribute(live, attribute, value)?;
        let usage = self.usage_of(live)?;

        if let Pane::Preview(active) = &mut self.pane {
            if let Some(control) = active.controls.iter_mut().find(|c| c.attribute == attribute) {
                control.set_value(value);
            }
            active.usage = usage;
        }
        Ok(result)
    }

    /// Click the live instance.
    pub fn activate(&mut self) -> Result<()> {
        let live = self.active().ok_or(GalleryError::NoActivePreview)?.live;
        self.stage.activate(live)
    }

    /// Deliver animation frames to every previewed instance.
    pub fn advance(&mut self, timestamp: f64) -> usize {
        self.stage.advance(timestamp)
    }

    /// Usage snippet for the current live instance.
    pub fn usage(&self) -> Option<&str> {
        self.active().map(|a| a.usage.as_str())
    }

    fn usage_of(&self, id: InstanceId) -> Result<String> {
        let component = self
            .stage
            .get(id)
            .ok_or(GalleryError::UnknownInstance(id.id()))?;
        let attributes = component
            .attributes()
            .iter()
            .filter(|(name, _)| *name != PREVIEW_MARKER);
        Ok(markup::render(component.tag_name(), attributes))
    }

    /// Filter the list by name.
    pub fn search(&mut self, term: &str) -> Vec<SearchHit> {
        term.clone_into(&mut self.search);
        self.catalog.search(term)
    }

    /// Entries of `category` with their visibility under the current search.
    pub fn listing(&self, category: Category) -> Vec<SearchHit> {
        self.catalog
            .search(&self.search)
            .into_iter()
            .filter(|hit| hit.category == category)
            .collect()
    }

    /// Whether `name` is the selected entry.
    pub fn is_active(&self, name: &str) -> bool {
        self.active().is_some_and(|a| a.descriptor.name == name)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::components::{Example, button};

    static BAD_EXAMPLES: ComponentDescriptor = ComponentDescriptor {
        name: "Bad Examples",
        tag: "bad-examples",
        category: Category::Effects,
        description: "",
        attributes: &[],
        examples: &[Example {
            name: "Broken",
            code: "<game-button text=",
        }],
    };

    fn setup() -> Gallery {
        Gallery::new(Catalog::with_builtin())
    }

    #[test]
    fn test_starts_with_placeholder() {
        let gallery = setup();
        assert!(matches!(gallery.pane(), Pane::Placeholder));
        assert_eq!(gallery.title(), PLACEHOLDER_TITLE);
        assert!(gallery.usage().is_none());
    }

    #[test]
    fn test_select_button() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Button");
        assert_eq!(gallery.title(), "Game Button");

        let active = gallery.active().unwrap();
        assert_eq!(active.controls.len(), 3);
        assert_eq!(active.examples.len(), 3);
        assert_eq!(
            active.usage,
            r#"<game-button text="Click Me" theme="primary" size="medium"></game-button>"#
        );
        // live + examples
        assert_eq!(gallery.stage().len(), 4);
    }

    #[test]
    fn test_select_sprite_instantiates_sprite() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Sprite");
        let active = gallery.active().unwrap();
        let live = gallery.stage().get(active.live).unwrap();
        assert_eq!(live.tag_name(), "game-sprite");
        // `src` has no default and is left unset
        assert_eq!(live.get_attribute("src"), None);
        assert!(active.usage.starts_with(r#"<game-sprite frame-width="32""#));
    }

    #[test]
    fn test_edit_updates_instance_and_usage() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Button");

        let result = gallery.edit("theme", "danger").unwrap();
        assert!(result.is_rendered());
        assert_eq!(
            gallery.usage().unwrap(),
            r#"<game-button text="Click Me" theme="danger" size="medium"></game-button>"#
        );
        let active = gallery.active().unwrap();
        assert_eq!(active.controls[1].value(), "danger");
    }

    #[test]
    fn test_edit_same_value() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Button");
        assert_eq!(gallery.edit("size", "medium").unwrap(), RenderResult::Unchanged);
    }

    #[test]
    fn test_edit_without_selection() {
        let mut gallery = setup();
        assert!(matches!(gallery.edit("text", "x"), Err(GalleryError::NoActivePreview)));
    }

    #[test]
    fn test_unknown_component_shows_error() {
        let mut gallery = setup();
        let pane = gallery.select(Category::Physics, "Rigid Body");
        match pane {
            Pane::Error { message, .. } => assert!(message.starts_with("Error loading component:")),
            other => panic!("expected error pane, got {other:?}"),
        }
        assert!(gallery.stage().is_empty());
    }

    #[test]
    fn test_malformed_example_shows_error() {
        let mut catalog = Catalog::with_builtin();
        catalog
            .register(CatalogEntry::new(&BAD_EXAMPLES, button::create))
            .unwrap();
        let mut gallery = Gallery::new(catalog);
        gallery.select(Category::Effects, "Bad Examples");
        assert!(matches!(gallery.pane(), Pane::Error { .. }));
        assert!(gallery.stage().is_empty());
    }

    #[test]
    fn test_reselect_tears_down_previous() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Sprite");
        gallery.edit("fps", "10").unwrap();
        // Animated example + live instance
        assert_eq!(gallery.stage().frames().pending_count(), 2);

        gallery.select(Category::Ui, "Game Button");
        assert_eq!(gallery.stage().frames().pending_count(), 0);
    }

    #[test]
    fn test_preview_animates() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Sprite");
        gallery.edit("frame-count", "4").unwrap();
        gallery.edit("fps", "10").unwrap();
        gallery.advance(0.0);
        gallery.advance(100.0);

        let live = gallery.active().unwrap().live;
        let instance = gallery.stage().get(live).unwrap();
        assert_eq!(instance.get_attribute("current-frame"), Some("1"));
    }

    #[test]
    fn test_listing_respects_search() {
        let mut gallery = setup();
        gallery.search("button");
        let hits = gallery.listing(Category::Ui);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].visible);
        assert!(!hits[1].visible);
        assert!(gallery.listing(Category::Effects).is_empty());
    }

    #[test]
    fn test_deselect() {
        let mut gallery = setup();
        gallery.select(Category::Ui, "Game Button");
        assert!(gallery.is_active("Game Button"));
        gallery.deselect();
        assert!(matches!(gallery.pane(), Pane::Placeholder));
        assert!(gallery.stage().is_empty());
    }
}
