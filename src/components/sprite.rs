//! Game Sprite - one frame of a horizontal sprite sheet, optionally animated.
//!
//! The sheet is a single image with `frame-count` frames of
//! `frame-width × frame-height` laid out left to right. The view crops the
//! frame at `current-frame`; with `fps > 0` and the sprite attached, a frame
//! loop advances `current-frame` on its own.
//!
//! # Attributes
//!
//! | name            | default | notes                          |
//! |-----------------|---------|--------------------------------|
//! | `src`           | empty   | never validated                |
//! | `frame-width`   | 32      | must be > 0                    |
//! | `frame-height`  | 32      | must be > 0                    |
//! | `frame-count`   | 1       | must be > 0                    |
//! | `fps`           | 0       | 0 disables playback            |
//! | `current-frame` | 0       | read modulo `frame-count`      |
//! | `flip`          | `none`  | `none`, `horizontal`           |
//!
//! Malformed numbers fall back to the defaults.
//!
//! # Playback
//!
//! ```text
//!            attach() && fps > 0
//!            fps: 0 → n (attached)
//!   Idle  ───────────────────────────►  Running ──┐ fps: n → m
//!    ▲                                     │  ▲   │ (restart)
//!    └─────────── detach() / fps → 0 ──────┘  └───┘
//! ```

use spark_signals::{Signal, signal};

use super::metadata::{Category, ComponentDescriptor, Example};
use super::{Component, ComponentContext};
use crate::attributes::parse::{enum_or_default, non_negative_or, positive_or};
use crate::attributes::{
    AttributeKind, AttributeMap, AttributeSpec, Reaction, Reflection, RenderResult, reflect,
};
use crate::state::animate::{FrameHandle, FrameScheduler, SchedulerState, Tick};
use crate::types::{Flip, SpriteView, View};

pub const TAG: &str = "game-sprite";

pub const DEFAULT_FRAME_WIDTH: u32 = 32;
pub const DEFAULT_FRAME_HEIGHT: u32 = 32;
pub const DEFAULT_FRAME_COUNT: u32 = 1;
pub const DEFAULT_FPS: u32 = 0;
pub const DEFAULT_CURRENT_FRAME: u32 = 0;

const WATCHED: &[&str] = &[
    "src",
    "frame-width",
    "frame-height",
    "frame-count",
    "fps",
    "current-frame",
    "flip",
];

pub static METADATA: ComponentDescriptor = ComponentDescriptor {
    name: "Game Sprite",
    tag: TAG,
    category: Category::Ui,
    description: "A sprite component for displaying game graphics with animation support",
    attributes: &[
        AttributeSpec {
            name: "src",
            kind: AttributeKind::String,
            default: None,
            options: None,
            description: "URL of the sprite sheet image",
        },
        AttributeSpec {
            name: "frame-width",
            kind: AttributeKind::Number,
            default: Some("32"),
            options: None,
            description: "Width of each frame in pixels",
        },
        AttributeSpec {
            name: "frame-height",
            kind: AttributeKind::Number,
            default: Some("32"),
            options: None,
            description: "Height of each frame in pixels",
        },
        AttributeSpec {
            name: "frame-count",
            kind: AttributeKind::Number,
            default: Some("1"),
            options: None,
            description: "Total number of frames in the sprite sheet",
        },
        AttributeSpec {
            name: "fps",
            kind: AttributeKind::Number,
            default: Some("0"),
            options: None,
            description: "Frames per second for animation (0 for static)",
        },
        AttributeSpec {
            name: "current-frame",
            kind: AttributeKind::Number,
            default: Some("0"),
            options: None,
            description: "Current frame to display (0-based index)",
        },
        AttributeSpec {
            name: "flip",
            kind: AttributeKind::String,
            default: Some("none"),
            options: Some(&["none", "horizontal"]),
            description: "Flip the sprite horizontally",
        },
    ],
    examples: &[
        Example {
            name: "Static Sprite",
            code: r#"<game-sprite src="character.png" frame-width="32" frame-height="32"></game-sprite>"#,
        },
        Example {
            name: "Animated Sprite",
            code: r#"<game-sprite src="walk-cycle.png" frame-width="32" frame-height="32" frame-count="8" fps="12"></game-sprite>"#,
        },
        Example {
            name: "Flipped Sprite",
            code: r#"<game-sprite src="character.png" frame-width="32" frame-height="32" flip="horizontal"></game-sprite>"#,
        },
    ],
};

/// Catalog factory.
pub fn create(ctx: &ComponentContext) -> Box<dyn Component> {
    Box::new(AnimatedSprite::new(ctx))
}

/// Reaction to a changed watched attribute.
fn reaction(name: &str) -> Reaction {
    match name {
        "fps" => Reaction::RENDER | Reaction::RESCHEDULE,
        _ => Reaction::RENDER,
    }
}

// =============================================================================
// AnimatedSprite
// =============================================================================

/// The `game-sprite` component.
pub struct AnimatedSprite {
    attrs: AttributeMap,
    attached: bool,
    scheduler: FrameScheduler,
    view: Signal<SpriteView>,
    renders: Signal<u64>,
}

impl AnimatedSprite {
    /// Create an idle sprite. Renders once.
    pub fn new(ctx: &ComponentContext) -> Self {
        let attrs = AttributeMap::new();
        let initial = compute_view(&attrs);
        Self {
            attrs,
            attached: false,
            scheduler: FrameScheduler::new(ctx.frames.clone()),
            view: signal(initial),
            renders: signal(1),
        }
    }

    pub fn src(&self) -> &str {
        self.attrs.get("src").unwrap_or("")
    }

    pub fn frame_width(&self) -> u32 {
        positive_or(self.attrs.get("frame-width"), DEFAULT_FRAME_WIDTH)
    }

    pub fn frame_height(&self) -> u32 {
        positive_or(self.attrs.get("frame-height"), DEFAULT_FRAME_HEIGHT)
    }

    pub fn frame_count(&self) -> u32 {
        positive_or(self.attrs.get("frame-count"), DEFAULT_FRAME_COUNT)
    }

    pub fn fps(&self) -> u32 {
        non_negative_or(self.attrs.get("fps"), DEFAULT_FPS)
    }

    /// Displayed frame, always in `[0, frame_count)`.
    pub fn current_frame(&self) -> u32 {
        current_frame_of(&self.attrs)
    }

    pub fn flip(&self) -> Flip {
        enum_or_default(self.attrs.get("flip"), Flip::parse)
    }

    /// Jump to `frame` (taken modulo `frame_count` when rendered).
    pub fn set_current_frame(&mut self, frame: u32) -> RenderResult {
        self.set_attribute("current-frame", &frame.to_string())
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Last rendered view.
    pub fn sprite_view(&self) -> SpriteView {
        self.view.get()
    }

    fn apply(&mut self, name: &str, value: Option<&str>) -> RenderResult {
        match reflect(&mut self.attrs, WATCHED, name, value) {
            Reflection::Unchanged => RenderResult::Unchanged,
            Reflection::Unobserved => RenderResult::Unobserved,
            Reflection::Changed => {
                let reaction = reaction(name);
                if reaction.contains(Reaction::RESCHEDULE) {
                    self.reschedule();
                }
                self.render()
            }
        }
    }

    /// Bring the loop in line with the current rate.
    fn reschedule(&mut self) {
        if !self.attached {
            return;
        }
        let fps = self.fps();
        if fps > 0 {
            self.scheduler.start(fps);
        } else {
            self.scheduler.stop();
        }
    }

    fn render(&mut self) -> RenderResult {
        let view = compute_view(&self.attrs);
        self.view.set(view.clone());
        self.renders.set(self.renders.get() + 1);
        RenderResult::Rendered(View::Sprite(view))
    }
}

fn current_frame_of(attrs: &AttributeMap) -> u32 {
    let count = positive_or(attrs.get("frame-count"), DEFAULT_FRAME_COUNT);
    non_negative_or(attrs.get("current-frame"), DEFAULT_CURRENT_FRAME) % count
}

/// Pure attribute → view mapping.
fn compute_view(attrs: &AttributeMap) -> SpriteView {
    let width = positive_or(attrs.get("frame-width"), DEFAULT_FRAME_WIDTH);
    let frame = current_frame_of(attrs);
    SpriteView {
        src: attrs.get("src").unwrap_or("").to_string(),
        width,
        height: positive_or(attrs.get("frame-height"), DEFAULT_FRAME_HEIGHT),
        frame,
        frame_count: positive_or(attrs.get("frame-count"), DEFAULT_FRAME_COUNT),
        offset_x: -(i64::from(frame) * i64::from(width)),
        offset_y: 0,
        flip: enum_or_default(attrs.get("flip"), Flip::parse),
    }
}

impl Component for AnimatedSprite {
    fn descriptor(&self) -> &'static ComponentDescriptor {
        &METADATA
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        WATCHED
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attrs
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> RenderResult {
        self.apply(name, Some(value))
    }

    fn remove_attribute(&mut self, name: &str) -> RenderResult {
        self.apply(name, None)
    }

    fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        let fps = self.fps();
        if fps > 0 {
            self.scheduler.start(fps);
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        self.scheduler.stop();
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn view(&self) -> View {
        View::Sprite(self.sprite_view())
    }

    fn render_count(&self) -> u64 {
        self.renders.get()
    }

    fn on_animation_frame(&mut self, handle: FrameHandle, timestamp: f64) -> Option<RenderResult> {
        if !self.scheduler.owns(handle) {
            return None;
        }
        let fps = self.fps();
        match self.scheduler.tick(handle, timestamp, fps) {
            Tick::Advance => {
                let next = (self.current_frame() + 1) % self.frame_count();
                Some(self.set_current_frame(next))
            }
            Tick::Baseline | Tick::Wait | Tick::Stale => Some(RenderResult::Unchanged),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
