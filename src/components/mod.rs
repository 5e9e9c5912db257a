//! Components - attribute-driven visual elements.
//!
//! Every component follows the same contract:
//!
//! ```text
//! set_attribute(name, value) ──► old == new? ──yes──► Unchanged
//!                                   │ no
//!                                   ▼
//!                               watched? ──no──► Unobserved
//!                                   │ yes
//!                                   ▼
//!                          react (render / reschedule) ──► Rendered(view)
//! ```
//!
//! Lifecycle is explicit: the embedder calls [`Component::attach`] when the
//! instance enters the document and [`Component::detach`] when it leaves.
//!
//! - [`button`] - `game-button`, a themed button with a click cue
//! - [`sprite`] - `game-sprite`, a sprite-sheet frame viewer with playback

use std::rc::Rc;

use crate::attributes::{AttributeMap, RenderResult};
use crate::state::animate::{FrameHandle, FrameHost, FrameQueue};
use crate::state::audio::{AudioSink, NullSink};
use crate::types::View;

pub mod button;
pub mod metadata;
pub mod sprite;

pub use button::ThemedButton;
pub use metadata::{Category, ComponentDescriptor, Example};
pub use sprite::AnimatedSprite;

// =============================================================================
// Context
// =============================================================================

/// Host services injected into every component at construction.
#[derive(Clone)]
pub struct ComponentContext {
    pub frames: Rc<dyn FrameHost>,
    pub audio: Rc<dyn AudioSink>,
}

impl ComponentContext {
    pub fn new(frames: Rc<dyn FrameHost>, audio: Rc<dyn AudioSink>) -> Self {
        Self { frames, audio }
    }
}

impl Default for ComponentContext {
    /// A private frame queue and a muted sink.
    fn default() -> Self {
        Self {
            frames: Rc::new(FrameQueue::new()),
            audio: Rc::new(NullSink),
        }
    }
}

// =============================================================================
// Component trait
// =============================================================================

/// Factory producing a fresh instance of one component kind.
pub type Factory = fn(&ComponentContext) -> Box<dyn Component>;

/// A visual element configured entirely by string attributes.
pub trait Component {
    /// Static metadata of this component kind.
    fn descriptor(&self) -> &'static ComponentDescriptor;

    /// Attribute names whose changes trigger a reaction.
    fn watched_attributes(&self) -> &'static [&'static str];

    /// Current raw attributes, in insertion order.
    fn attributes(&self) -> &AttributeMap;

    /// Write an attribute and react synchronously.
    fn set_attribute(&mut self, name: &str, value: &str) -> RenderResult;

    /// Remove an attribute, so reads fall back to the default.
    fn remove_attribute(&mut self, name: &str) -> RenderResult;

    /// Entered the document.
    fn attach(&mut self);

    /// Left the document. Tears down any running animation.
    fn detach(&mut self);

    fn is_attached(&self) -> bool;

    /// Current rendered output.
    fn view(&self) -> View;

    /// Number of renders since construction.
    fn render_count(&self) -> u64;

    /// User activation (a click).
    fn activate(&mut self) {}

    /// Deliver a frame requested from the host.
    ///
    /// Returns None when the handle does not belong to this instance.
    fn on_animation_frame(&mut self, _handle: FrameHandle, _timestamp: f64) -> Option<RenderResult> {
        None
    }

    fn tag_name(&self) -> &'static str {
        self.descriptor().tag
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }
}

/// Factories for every built-in component, paired with their metadata.
pub fn builtin() -> [(&'static ComponentDescriptor, Factory); 2] {
    [
        (&button::METADATA, button::create),
        (&sprite::METADATA, sprite::create),
    ]
}
