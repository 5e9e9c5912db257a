//! Stage - the document that component instances live in.
//!
//! The stage owns mounted instances, drives their lifecycle and delivers
//! animation frames. It is the only place `attach` / `detach` are called.
//!
//! # Example
//!
//! ```
//! use spark_gallery::catalog::Catalog;
//! use spark_gallery::pipeline::Stage;
//!
//! let catalog = Catalog::with_builtin();
//! let mut stage = Stage::new();
//!
//! let sprite = stage.create(&catalog, "game-sprite").unwrap();
//! let id = stage.mount(sprite);
//! stage.set_attribute(id, "frame-count", "4").unwrap();
//! stage.set_attribute(id, "fps", "10").unwrap();
//!
//! stage.advance(0.0);   // baseline
//! stage.advance(100.0); // frame 1
//! assert_eq!(stage.get(id).unwrap().get_attribute("current-frame"), Some("1"));
//!
//! stage.unmount(id);
//! ```

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::attributes::RenderResult;
use crate::catalog::Catalog;
use crate::components::{Component, ComponentContext};
use crate::error::{GalleryError, Result};
use crate::state::animate::FrameQueue;
use crate::state::audio::{AudioSink, NullSink};

// =============================================================================
// InstanceId
// =============================================================================

/// Identifies a mounted instance on its stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Stage
// =============================================================================

/// Owner of mounted component instances.
pub struct Stage {
    frames: Rc<FrameQueue>,
    ctx: ComponentContext,
    instances: IndexMap<InstanceId, Box<dyn Component>>,
    next_id: u64,
}

impl Stage {
    /// A stage with a muted audio sink.
    pub fn new() -> Self {
        Self::with_audio(Rc::new(NullSink))
    }

    /// A stage whose components play cues through `audio`.
    pub fn with_audio(audio: Rc<dyn AudioSink>) -> Self {
        let frames = Rc::new(FrameQueue::new());
        let ctx = ComponentContext::new(frames.clone(), audio);
        Self {
            frames,
            ctx,
            instances: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Services handed to components created for this stage.
    pub fn context(&self) -> &ComponentContext {
        &self.ctx
    }

    pub fn frames(&self) -> &FrameQueue {
        &self.frames
    }

    /// Instantiate the component registered for `tag`, unmounted.
    pub fn create(&self, catalog: &Catalog, tag: &str) -> Result<Box<dyn Component>> {
        catalog.instantiate(tag, &self.ctx)
    }

    /// Insert an instance into the document and attach it.
    pub fn mount(&mut self, mut component: Box<dyn Component>) -> InstanceId {
        self.next_id += 1;
        let id = InstanceId(self.next_id);
        component.attach();
        log::debug!("mounted <{}> as {id}", component.tag_name());
        self.instances.insert(id, component);
        id
    }

    /// Detach and drop an instance. Returns false if it was not mounted.
    pub fn unmount(&mut self, id: InstanceId) -> bool {
        match self.instances.shift_remove(&id) {
            Some(mut component) => {
                component.detach();
                log::debug!("unmounted <{}> {id}", component.tag_name());
                true
            }
            None => false,
        }
    }

    /// Unmount every instance.
    pub fn clear(&mut self) {
        let ids: Vec<InstanceId> = self.instances.keys().copied().collect();
        for id in ids {
            self.unmount(id);
        }
    }

    pub fn get(&self, id: InstanceId) -> Option<&dyn Component> {
        self.instances.get(&id).map(|c| c.as_ref())
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut (dyn Component + 'static)> {
        self.instances.get_mut(&id).map(|c| c.as_mut())
    }

    pub fn set_attribute(&mut self, id: InstanceId, name: &str, value: &str) -> Result<RenderResult> {
        let component = self
            .get_mut(id)
            .ok_or(GalleryError::UnknownInstance(id.id()))?;
        Ok(component.set_attribute(name, value))
    }

    /// Click an instance.
    pub fn activate(&mut self, id: InstanceId) -> Result<()> {
        let component = self
            .get_mut(id)
            .ok_or(GalleryError::UnknownInstance(id.id()))?;
        component.activate();
        Ok(())
    }

    /// Deliver every outstanding frame request at `timestamp`.
    ///
    /// Requests made while delivering wait for the next call. Returns the
    /// number of instances that re-rendered.
    pub fn advance(&mut self, timestamp: f64) -> usize {
        let mut rendered = 0;
        for handle in self.frames.take_pending() {
            for component in self.instances.values_mut() {
                if let Some(result) = component.on_animation_frame(handle, timestamp) {
                    if result.is_rendered() {
                        rendered += 1;
                    }
                    break;
                }
            }
        }
        rendered
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::audio::RecordingSink;

    fn setup() -> (Catalog, Stage) {
        (Catalog::with_builtin(), Stage::new())
    }

    #[test]
    fn test_create_unknown_tag() {
        let (catalog, stage) = setup();
        let err = stage.create(&catalog, "game-portal").err().unwrap();
        assert!(matches!(err, GalleryError::UnknownTag(tag) if tag == "game-portal"));
    }

    #[test]
    fn test_mount_attaches_and_unmount_detaches() {
        let (catalog, mut stage) = setup();
        let sprite = stage.create(&catalog, "game-sprite").unwrap();
        let id = stage.mount(sprite);
        assert!(stage.get(id).unwrap().is_attached());

        stage.set_attribute(id, "fps", "10").unwrap();
        assert_eq!(stage.frames().pending_count(), 1);

        assert!(stage.unmount(id));
        assert_eq!(stage.frames().pending_count(), 0);
        assert!(!stage.unmount(id));
    }

    #[test]
    fn test_advance_delivers_to_owner() {
        let (catalog, mut stage) = setup();
        let a = stage.mount(stage.create(&catalog, "game-sprite").unwrap());
        let b = stage.mount(stage.create(&catalog, "game-sprite").unwrap());
        for id in [a, b] {
            stage.set_attribute(id, "frame-count", "3").unwrap();
        }
        stage.set_attribute(a, "fps", "10").unwrap();
        stage.set_attribute(b, "fps", "5").unwrap();

        assert_eq!(stage.advance(0.0), 0);
        assert_eq!(stage.advance(100.0), 1);
        assert_eq!(stage.advance(200.0), 2);

        assert_eq!(stage.get(a).unwrap().get_attribute("current-frame"), Some("2"));
        assert_eq!(stage.get(b).unwrap().get_attribute("current-frame"), Some("1"));
    }

    #[test]
    fn test_unknown_instance() {
        let (_, mut stage) = setup();
        let err = stage.set_attribute(InstanceId(42), "text", "x").unwrap_err();
        assert!(matches!(err, GalleryError::UnknownInstance(42)));
    }

    #[test]
    fn test_activate_routes_to_audio() {
        let catalog = Catalog::with_builtin();
        let sink = Rc::new(RecordingSink::new());
        let mut stage = Stage::with_audio(sink.clone());
        let id = stage.mount(stage.create(&catalog, "game-button").unwrap());
        stage.activate(id).unwrap();
        assert_eq!(sink.played().len(), 1);
    }

    #[test]
    fn test_clear() {
        let (catalog, mut stage) = setup();
        stage.mount(stage.create(&catalog, "game-button").unwrap());
        stage.mount(stage.create(&catalog, "game-sprite").unwrap());
        stage.clear();
        assert!(stage.is_empty());
    }
}
