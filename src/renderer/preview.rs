//! Preview renderer - one line per view.
//!
//! ```text
//! Button:  ███  Click Me  ███          (palette base as background)
//! Sprite:  ▒▒█▒▒▒▒▒  frame 2/8  32×32  @(-64,0)  mirrored  walk.png
//! ```

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::catalog::{ControlKind, Gallery, Pane};
use crate::types::{ButtonStyle, Rgba, SpriteView, View};

/// Frame strips longer than this are cut off with `…`.
pub const STRIP_LIMIT: u32 = 32;

/// Cells per pixel of horizontal padding.
const PX_PER_CELL: u16 = 8;

#[inline]
fn color(rgba: Rgba) -> Color {
    Color::Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

/// Queue one view, without a trailing newline.
pub fn render_view<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    match view {
        View::Button(style) => render_button(out, style),
        View::Sprite(sprite) => render_sprite(out, sprite),
    }
}

fn render_button<W: Write>(out: &mut W, style: &ButtonStyle) -> io::Result<()> {
    let pad = " ".repeat(usize::from((style.padding.horizontal / PX_PER_CELL).max(1)));
    queue!(
        out,
        SetForegroundColor(color(style.palette.shadow)),
        Print("▐"),
        SetBackgroundColor(color(style.palette.base)),
        SetForegroundColor(color(style.foreground)),
        SetAttribute(Attribute::Bold),
        Print(format!("{pad}{}{pad}", style.label)),
        SetAttribute(Attribute::Reset),
        ResetColor,
        SetForegroundColor(color(style.palette.shadow)),
        Print("▌"),
        ResetColor
    )
}

fn render_sprite<W: Write>(out: &mut W, sprite: &SpriteView) -> io::Result<()> {
    let shown = sprite.frame_count.min(STRIP_LIMIT);
    for i in 0..shown {
        let cell = if i == sprite.frame { "█" } else { "▒" };
        queue!(out, Print(cell))?;
    }
    if sprite.frame_count > STRIP_LIMIT {
        queue!(out, Print("…"))?;
    }

    let mut info = format!(
        "  frame {}/{}  {}×{}  @({},{})",
        sprite.frame + 1,
        sprite.frame_count,
        sprite.width,
        sprite.height,
        sprite.offset_x,
        sprite.offset_y,
    );
    if sprite.is_mirrored() {
        info.push_str("  mirrored");
    }
    queue!(out, Print(info))?;

    if !sprite.src.is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(format!("  {}", sprite.src)),
            SetAttribute(Attribute::Reset)
        )?;
    }
    Ok(())
}

/// Queue the whole gallery page: listing, then the preview pane.
pub fn render_gallery<W: Write>(out: &mut W, gallery: &Gallery) -> io::Result<()> {
    for category in gallery.catalog().categories() {
        let hits = gallery.listing(category);
        if hits.is_empty() {
            continue;
        }
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(format!("{category}\n")),
            SetAttribute(Attribute::Reset)
        )?;
        for hit in hits.iter().filter(|h| h.visible) {
            let marker = if gallery.is_active(hit.name) { '>' } else { ' ' };
            queue!(out, Print(format!(" {marker} {}\n", hit.name)))?;
        }
    }

    queue!(
        out,
        Print("\n"),
        SetAttribute(Attribute::Bold),
        Print(format!("{}\n", gallery.title())),
        SetAttribute(Attribute::Reset)
    )?;

    match gallery.pane() {
        Pane::Placeholder => queue!(out, Print(format!("{}\n", crate::catalog::preview::PLACEHOLDER_TEXT))),
        Pane::Error { message, .. } => queue!(
            out,
            SetForegroundColor(Color::Red),
            Print(format!("{message}\n")),
            ResetColor
        ),
        Pane::Preview(active) => {
            queue!(out, Print(format!("{}\n\n", active.descriptor.description)))?;
            if let Some(live) = gallery.stage().get(active.live) {
                render_view(out, &live.view())?;
                queue!(out, Print("\n\n"))?;
            }

            for control in &active.controls {
                let value = match &control.kind {
                    ControlKind::Select { options, .. } => format!("{} ({})", control.value(), options.join("|")),
                    ControlKind::Number { .. } | ControlKind::Text { .. } => control.value().to_string(),
                };
                queue!(out, Print(format!("  {:<14} {value}\n", control.attribute)))?;
            }
            queue!(out, Print(format!("\n{}\n", active.usage)))?;

            for example in &active.examples {
                queue!(
                    out,
                    Print(format!("\n{}\n", example.name)),
                    SetAttribute(Attribute::Dim),
                    Print(format!("  {}\n  ", example.code)),
                    SetAttribute(Attribute::Reset)
                )?;
                if let Some(instance) = gallery.stage().get(example.instance) {
                    render_view(out, &instance.view())?;
                }
                queue!(out, Print("\n"))?;
            }
            Ok(())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::components::Category;
    use crate::theme::{ButtonSize, ButtonTheme};
    use crate::types::Flip;

    fn render(view: &View) -> String {
        let mut buf = Vec::new();
        render_view(&mut buf, view).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sprite(frame: u32, frame_count: u32, flip: Flip) -> SpriteView {
        SpriteView {
            src: "walk.png".into(),
            width: 32,
            height: 32,
            frame,
            frame_count,
            offset_x: -(i64::from(frame) * 32),
            offset_y: 0,
            flip,
        }
    }

    #[test]
    fn test_button_uses_palette() {
        let palette = ButtonTheme::Danger.palette();
        let style = ButtonStyle {
            label: "Game Over".into(),
            theme: ButtonTheme::Danger,
            size: ButtonSize::Large,
            palette,
            foreground: Rgba::WHITE,
            padding: ButtonSize::Large.padding(),
            font_size: ButtonSize::Large.font_size(),
        };
        let out = render(&View::Button(style));
        assert!(out.contains("Game Over"));
        let bg = format!("48;2;{};{};{}", palette.base.r, palette.base.g, palette.base.b);
        assert!(out.contains(&bg));
    }

    #[test]
    fn test_sprite_strip() {
        let out = render(&View::Sprite(sprite(2, 4, Flip::None)));
        assert!(out.starts_with("▒▒█▒"));
        assert!(out.contains("frame 3/4"));
        assert!(out.contains("@(-64,0)"));
        assert!(!out.contains("mirrored"));
        assert!(out.contains("walk.png"));
    }

    #[test]
    fn test_sprite_mirrored_and_truncated() {
        let out = render(&View::Sprite(sprite(0, 40, Flip::Horizontal)));
        assert!(out.contains('…'));
        assert!(out.contains("mirrored"));
    }

    #[test]
    fn test_gallery_placeholder() {
        let gallery = Gallery::new(Catalog::with_builtin());
        let mut buf = Vec::new();
        render_gallery(&mut buf, &gallery).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Game Button"));
        assert!(out.contains(crate::catalog::preview::PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_gallery_preview() {
        let mut gallery = Gallery::new(Catalog::with_builtin());
        gallery.select(Category::Ui, "Game Button");
        let mut buf = Vec::new();
        render_gallery(&mut buf, &gallery).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains(" > Game Button"));
        assert!(out.contains("primary|success|danger"));
        assert!(out.contains("Level Complete"));
        assert!(out.contains(r#"<game-button text="Click Me""#));
        assert!(out.contains(r#"<game-button text="Game Over" theme="danger" size="small"></game-button>"#));
    }
}
