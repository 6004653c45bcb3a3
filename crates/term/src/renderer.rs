//! Terminal output: full redraws on size change, changed runs otherwise.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

pub struct TerminalRenderer {
    out: io::Stdout,
    previous: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
            scratch: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode plus alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.scratch.clear();
        self.scratch.queue(terminal::EnterAlternateScreen)?;
        self.scratch.queue(cursor::Hide)?;
        self.scratch.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn leave(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.queue(ResetColor)?;
        self.scratch.queue(SetAttribute(Attribute::Reset))?;
        self.scratch.queue(terminal::EnableLineWrap)?;
        self.scratch.queue(cursor::Show)?;
        self.scratch.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Next present is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Write `frame` and keep it as the diff base.
    ///
    /// The buffer handed back in `frame` is the previous frame; callers
    /// render over it, so steady-state drawing does not allocate.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        match self.previous.take() {
            Some(mut prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_changes(&prev, frame, &mut self.scratch)?;
                std::mem::swap(&mut prev, frame);
                self.previous = Some(prev);
            }
            _ => {
                encode_frame(frame, &mut self.scratch)?;
                self.previous = Some(frame.clone());
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// A display that must be restored once entered.
pub trait Screen {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
}

impl Screen for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        TerminalRenderer::enter(self)
    }

    fn leave(&mut self) -> Result<()> {
        TerminalRenderer::leave(self)
    }
}

/// Enter `screen`, run `body`, then leave.
///
/// `leave` runs on every path, including a partially failed `enter`. The
/// first error wins.
pub fn run_on_screen<S: Screen, R>(
    screen: &mut S,
    body: impl FnOnce(&mut S) -> Result<R>,
) -> Result<R> {
    if let Err(e) = screen.enter() {
        let _ = screen.leave();
        return Err(e);
    }
    let result = body(screen);
    let restored = screen.leave();
    let value = result?;
    restored?;
    Ok(value)
}

/// Queues glyphs, emitting style changes only when the style differs.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<Style>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn glyph(&mut self, glyph: Glyph) -> Result<()> {
        if self.style != Some(glyph.style) {
            let s = glyph.style;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(SetForegroundColor(color(s.fg)))?;
            self.out.queue(SetBackgroundColor(color(s.bg)))?;
            if s.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if s.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(s);
        }
        self.out.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode the whole frame, clearing the screen first.
pub fn encode_frame(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = Encoder::new(out);
    for y in 0..frame.height() {
        enc.out.queue(cursor::MoveTo(0, y))?;
        for x in 0..frame.width() {
            enc.glyph(frame.get(x, y).unwrap_or_default())?;
        }
    }
    enc.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Both frames must have the same size.
pub fn encode_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = Encoder::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        enc.out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            enc.glyph(next.get(cx, y).unwrap_or_default())?;
        }
    }
    enc.finish()
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs of differing cells as `(x, y, len)`.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let width = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x >= width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}
