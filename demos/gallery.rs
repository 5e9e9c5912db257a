//! Gallery demo - browse the catalog and watch a sprite play in the terminal.
//!
//! Run with: RUST_LOG=debug cargo run --example gallery

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use spark_gallery::{Catalog, Category, Gallery, render_gallery, render_view};

fn edit(gallery: &mut Gallery, attr: &str, value: &str) {
    if let Err(err) = gallery.edit(attr, value) {
        log::warn!("edit {attr}={value} failed: {err}");
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut gallery = Gallery::new(Catalog::with_builtin());
    let mut stdout = io::stdout();

    // Button page, then a couple of edits
    gallery.select(Category::Ui, "Game Button");
    edit(&mut gallery, "theme", "danger");
    edit(&mut gallery, "text", "Game Over");
    if let Err(err) = gallery.activate() {
        log::warn!("activate failed: {err}");
    }
    render_gallery(&mut stdout, &gallery)?;
    writeln!(stdout)?;

    // Sprite page with playback
    gallery.search("sprite");
    gallery.select(Category::Ui, "Game Sprite");
    for (attr, value) in [("src", "walk-cycle.png"), ("frame-count", "8"), ("fps", "12")] {
        edit(&mut gallery, attr, value);
    }
    render_gallery(&mut stdout, &gallery)?;
    writeln!(stdout)?;

    let Some(live) = gallery.active().map(|a| a.live) else {
        return Ok(());
    };

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(3) {
        let now = start.elapsed().as_secs_f64() * 1000.0;
        if gallery.advance(now) > 0 {
            if let Some(instance) = gallery.stage().get(live) {
                queue!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                render_view(&mut stdout, &instance.view())?;
                stdout.flush()?;
            }
        }
        thread::sleep(Duration::from_millis(16));
    }
    writeln!(stdout)?;

    gallery.deselect();
    Ok(())
}
