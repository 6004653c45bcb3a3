//! Paints a [`GameSnapshot`] into a [`FrameBuffer`]. No I/O.

use crate::core::{pieces::get_spawn_shape, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side figures shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub best: Option<u32>,
}

/// Board layout in terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

/// Position and size of the bordered well, border included.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_with_hud(snap, &Hud::default(), viewport, fb);
    }

    /// Render into a reused buffer, resizing it to the viewport.
    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let inner_w = BOARD_WIDTH as u16 * self.cell_w;
        let inner_h = BOARD_HEIGHT as u16;
        let frame = Frame {
            x: viewport.width.saturating_sub(inner_w + 2) / 2,
            y: viewport.height.saturating_sub(inner_h + 2) / 2,
            w: inner_w + 2,
            h: inner_h + 2,
        };

        fb.rect(frame.x + 1, frame.y + 1, inner_w, inner_h, ' ', Style::new(WELL_BG, WELL_BG));
        draw_border(fb, frame);

        let dot = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(kind) => self.block(fb, frame, col as u16, row as u16, *kind),
                    None => self.paint(fb, frame, col as u16, row as u16, '·', dot),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.visible_cells() {
                self.block(fb, frame, x as u16, y as u16, active.kind);
            }
        }

        self.side_panel(fb, snap, hud, viewport, frame);

        let banner = match snap.status {
            GameStatus::Idle => Some("PRESS ENTER"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Running => None,
        };
        if let Some(text) = banner {
            draw_banner(fb, frame, text);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = Style::new(Rgb::from(kind.rgb()), WELL_BG).bold();
        self.paint(fb, frame, x, y, '█', style);
    }

    fn paint(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: Style) {
        fb.rect(frame.x + 1 + x * self.cell_w, frame.y + 1 + y, self.cell_w, 1, ch, style);
    }

    fn side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud,
        viewport: Viewport,
        frame: Frame,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(x) < PANEL_MIN_WIDTH {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let mut y = frame.y;

        fb.text(x, y, "SCORE", label);
        fb.number(x, y + 1, snap.score, value);
        y += 3;

        fb.text(x, y, "LINES", label);
        fb.number(x, y + 1, snap.lines_cleared, value);
        y += 3;

        fb.text(x, y, "NEXT", label);
        y += 1;
        let next_style = Style::new(Rgb::from(snap.next.rgb()), PANEL_BG).bold();
        for (dx, dy) in get_spawn_shape(snap.next) {
            // Spawn shapes span columns -1..=2 and rows -1..=1.
            let px = x + ((dx + 1) as u16) * self.cell_w;
            let py = y + (dy + 1) as u16;
            fb.rect(px, py, self.cell_w, 1, '█', next_style);
        }
        y += 5;

        fb.text(x, y, "BEST", label);
        match hud.best {
            Some(best) => fb.number(x, y + 1, best.max(snap.score), value),
            None if snap.score > 0 => fb.number(x, y + 1, snap.score, value),
            None => fb.text(x, y + 1, "-", value),
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, f: Frame) {
    let style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
    let right = f.x + f.w - 1;
    let bottom = f.y + f.h - 1;
    for x in f.x + 1..right {
        fb.put(x, f.y, '─', style);
        fb.put(x, bottom, '─', style);
    }
    for y in f.y + 1..bottom {
        fb.put(f.x, y, '│', style);
        fb.put(right, y, '│', style);
    }
    fb.put(f.x, f.y, '┌', style);
    fb.put(right, f.y, '┐', style);
    fb.put(f.x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
}

fn draw_banner(fb: &mut FrameBuffer, f: Frame, text: &str) {
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let width = text.chars().count() as u16;
    let x = f.x + f.w.saturating_sub(width) / 2;
    fb.text(x, f.y + f.h / 2, text, style);
}
