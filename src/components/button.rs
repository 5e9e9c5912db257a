//! Game Button - a themed, sized button that clicks when activated.
//!
//! # Attributes
//!
//! | name    | default    | values                       |
//! |---------|------------|------------------------------|
//! | `text`  | `Click Me` | any non-empty string         |
//! | `theme` | `primary`  | `primary`, `success`, `danger` |
//! | `size`  | `medium`   | `small`, `medium`, `large`   |
//!
//! Unrecognized `theme` / `size` values render as the defaults.
//!
//! # Example
//!
//! ```
//! use spark_gallery::components::{Component, ComponentContext, ThemedButton};
//! use spark_gallery::theme::ButtonTheme;
//!
//! let mut button = ThemedButton::new(&ComponentContext::default());
//! button.set_attribute("theme", "danger");
//! assert_eq!(button.style().theme, ButtonTheme::Danger);
//! ```

use std::rc::Rc;

use spark_signals::{Signal, signal};

use super::metadata::{Category, ComponentDescriptor, Example};
use super::{Component, ComponentContext};
use crate::attributes::parse::{enum_or_default, text_or};
use crate::attributes::{
    AttributeKind, AttributeMap, AttributeSpec, Reflection, RenderResult, reflect,
};
use crate::state::audio::{AudioSink, CLICK_VOLUME, SoundCue};
use crate::theme::{ButtonSize, ButtonTheme};
use crate::types::{ButtonStyle, Rgba, View};

pub const TAG: &str = "game-button";
pub const DEFAULT_TEXT: &str = "Click Me";

const WATCHED: &[&str] = &["text", "theme", "size"];

pub static METADATA: ComponentDescriptor = ComponentDescriptor {
    name: "Game Button",
    tag: TAG,
    category: Category::Ui,
    description: "A stylized button component with pixel art aesthetics and sound effects",
    attributes: &[
        AttributeSpec {
            name: "text",
            kind: AttributeKind::String,
            default: Some(DEFAULT_TEXT),
            options: None,
            description: "The text to display on the button",
        },
        AttributeSpec {
            name: "theme",
            kind: AttributeKind::String,
            default: Some("primary"),
            options: Some(&["primary", "success", "danger"]),
            description: "The color theme of the button",
        },
        AttributeSpec {
            name: "size",
            kind: AttributeKind::String,
            default: Some("medium"),
            options: Some(&["small", "medium", "large"]),
            description: "The size of the button",
        },
    ],
    examples: &[
        Example {
            name: "Default Button",
            code: r#"<game-button text="Click Me"></game-button>"#,
        },
        Example {
            name: "Success Button",
            code: r#"<game-button text="Level Complete" theme="success" size="large"></game-button>"#,
        },
        Example {
            name: "Danger Button",
            code: r#"<game-button text="Game Over" theme="danger" size="small"></game-button>"#,
        },
    ],
};

/// Catalog factory.
pub fn create(ctx: &ComponentContext) -> Box<dyn Component> {
    Box::new(ThemedButton::new(ctx))
}

// =============================================================================
// ThemedButton
// =============================================================================

/// The `game-button` component.
pub struct ThemedButton {
    attrs: AttributeMap,
    attached: bool,
    audio: Rc<dyn AudioSink>,
    cue: SoundCue,
    style: Signal<ButtonStyle>,
    renders: Signal<u64>,
}

impl ThemedButton {
    /// Create a button with the default click cue. Renders once.
    pub fn new(ctx: &ComponentContext) -> Self {
        Self::with_cue(ctx, SoundCue::click())
    }

    /// Create a button that plays `cue` on activation.
    pub fn with_cue(ctx: &ComponentContext, cue: SoundCue) -> Self {
        let attrs = AttributeMap::new();
        let initial = compute_style(&attrs);
        Self {
            attrs,
            attached: false,
            audio: ctx.audio.clone(),
            cue,
            style: signal(initial),
            renders: signal(1),
        }
    }

    pub fn text(&self) -> &str {
        text_or(self.attrs.get("text"), DEFAULT_TEXT)
    }

    pub fn theme(&self) -> ButtonTheme {
        enum_or_default(self.attrs.get("theme"), ButtonTheme::parse)
    }

    pub fn size(&self) -> ButtonSize {
        enum_or_default(self.attrs.get("size"), ButtonSize::parse)
    }

    /// Last rendered style.
    pub fn style(&self) -> ButtonStyle {
        self.style.get()
    }

    /// Reactive handle on the rendered style.
    pub fn style_signal(&self) -> Signal<ButtonStyle> {
        self.style.clone()
    }

    fn apply(&mut self, name: &str, value: Option<&str>) -> RenderResult {
        match reflect(&mut self.attrs, WATCHED, name, value) {
            Reflection::Unchanged => RenderResult::Unchanged,
            Reflection::Unobserved => RenderResult::Unobserved,
            Reflection::Changed => self.render(),
        }
    }

    fn render(&mut self) -> RenderResult {
        let style = compute_style(&self.attrs);
        self.style.set(style.clone());
        self.renders.set(self.renders.get() + 1);
        RenderResult::Rendered(View::Button(style))
    }
}

/// Pure attribute → style mapping.
fn compute_style(attrs: &AttributeMap) -> ButtonStyle {
    let theme: ButtonTheme = enum_or_default(attrs.get("theme"), ButtonTheme::parse);
    let size: ButtonSize = enum_or_default(attrs.get("size"), ButtonSize::parse);
    ButtonStyle {
        label: text_or(attrs.get("text"), DEFAULT_TEXT).to_string(),
        theme,
        size,
        palette: theme.palette(),
        foreground: Rgba::WHITE,
        padding: size.padding(),
        font_size: size.font_size(),
    }
}

impl Component for ThemedButton {
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
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn view(&self) -> View {
        View::Button(self.style())
    }

    fn render_count(&self) -> u64 {
        self.renders.get()
    }

    /// Play the click cue. Playback failures are swallowed.
    fn activate(&mut self) {
        if let Err(err) = self.audio.play(&self.cue, CLICK_VOLUME) {
            log::trace!("{TAG}: click cue not played: {err}");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::audio::RecordingSink;
    use crate::state::animate::FrameQueue;

    fn setup() -> (Rc<RecordingSink>, ThemedButton) {
        let sink = Rc::new(RecordingSink::new());
        let ctx = ComponentContext::new(Rc::new(FrameQueue::new()), sink.clone());
        (sink, ThemedButton::new(&ctx))
    }

    #[test]
    fn test_defaults() {
        let (_, button) = setup();
        let style = button.style();
        assert_eq!(style.label, "Click Me");
        assert_eq!(style.theme, ButtonTheme::Primary);
        assert_eq!(style.size, ButtonSize::Medium);
        assert_eq!(style.padding.vertical, 12);
        assert_eq!(style.padding.horizontal, 24);
        assert_eq!(style.font_size, 14);
        assert_eq!(style.foreground, Rgba::WHITE);
        assert_eq!(button.text(), "Click Me");
        assert_eq!(button.theme(), ButtonTheme::Primary);
        assert_eq!(button.size(), ButtonSize::Medium);
    }

    #[test]
    fn test_constructor_renders_once() {
        let (_, button) = setup();
        assert_eq!(button.render_count(), 1);
    }

    #[test]
    fn test_change_renders() {
        let (_, mut button) = setup();
        let result = button.set_attribute("text", "Start");
        let view = result.view().and_then(View::as_button).unwrap();
        assert_eq!(view.label, "Start");
        assert_eq!(button.render_count(), 2);
    }

    #[test]
    fn test_same_value_no_render() {
        let (_, mut button) = setup();
        button.set_attribute("size", "large");
        let before = button.render_count();
        assert_eq!(button.set_attribute("size", "large"), RenderResult::Unchanged);
        assert_eq!(button.render_count(), before);
    }

    #[test]
    fn test_unwatched_attribute_no_render() {
        let (_, mut button) = setup();
        assert_eq!(button.set_attribute("data-id", "1"), RenderResult::Unobserved);
        assert_eq!(button.render_count(), 1);
        assert_eq!(button.get_attribute("data-id"), Some("1"));
    }

    #[test]
    fn test_invalid_theme_and_size_fall_back() {
        let (_, mut button) = setup();
        button.set_attribute("theme", "neon");
        button.set_attribute("size", "gigantic");
        assert_eq!(button.theme(), ButtonTheme::Primary);
        assert_eq!(button.size(), ButtonSize::Medium);
        assert_eq!(button.style().palette, ButtonTheme::Primary.palette());
    }

    #[test]
    fn test_empty_text_falls_back() {
        let (_, mut button) = setup();
        button.set_attribute("text", "");
        assert_eq!(button.text(), DEFAULT_TEXT);
    }

    #[test]
    fn test_remove_attribute_restores_default() {
        let (_, mut button) = setup();
        button.set_attribute("theme", "danger");
        assert!(button.remove_attribute("theme").is_rendered());
        assert_eq!(button.theme(), ButtonTheme::Primary);
    }

    #[test]
    fn test_activate_plays_click_at_fixed_volume() {
        let (sink, mut button) = setup();
        button.activate();
        button.activate();
        assert_eq!(sink.played(), vec![("click", CLICK_VOLUME), ("click", CLICK_VOLUME)]);
    }

    #[test]
    fn test_blocked_playback_is_swallowed() {
        let (sink, mut button) = setup();
        sink.block(true);
        button.activate();
        assert!(sink.played().is_empty());
        // Still usable afterwards
        assert!(button.set_attribute("text", "Again").is_rendered());
    }

    #[test]
    fn test_activation_does_not_render() {
        let (_, mut button) = setup();
        button.activate();
        assert_eq!(button.render_count(), 1);
    }

    #[test]
    fn test_watched_matches_metadata() {
        let (_, button) = setup();
        let names: Vec<_> = METADATA.attributes.iter().map(|a| a.name).collect();
        assert_eq!(button.watched_attributes(), names.as_slice());
    }

    #[test]
    fn test_style_signal_tracks_renders() {
        let (_, mut button) = setup();
        let signal = button.style_signal();
        button.set_attribute("theme", "success");
        assert_eq!(signal.get().theme, ButtonTheme::Success);
    }
}
