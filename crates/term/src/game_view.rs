//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and only reads the snapshot, so it can be
//! unit-tested and can never disturb the engine.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Color, SessionState, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Color = Color::new(30, 30, 40);
const PANEL_BG: Color = Color::new(0, 0, 0);

/// Terminal viewport dimensions.
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the Tetris game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board block width in terminal columns.
    cell_w: u16,
    /// Board block height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left corner of the bordered playfield inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            show_ghost: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Size of the bordered playfield in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (w, h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w - 2,
            h - 2,
            ' ',
            CellStyle::plain(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, frame, x as i16, y as i16, *color),
                    None => self.draw_empty(fb, frame, x as i16, y as i16),
                }
            }
        }

        if let Some(active) = snap.active {
            if self.show_ghost {
                if let Some(ghost_y) = snap.ghost_y.filter(|&g| g != active.y) {
                    let style = CellStyle::plain(Color::new(140, 140, 140), PLAYFIELD_BG).dim();
                    for (x, y) in active.cells_at(ghost_y) {
                        self.fill_block(fb, frame, x, y, '░', style);
                    }
                }
            }
            for (x, y) in active.cells() {
                self.draw_block(fb, frame, x, y, active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.session {
            SessionState::NotStarted => self.draw_overlay_text(fb, frame, "PRESS ENTER"),
            SessionState::Over => {
                self.draw_overlay_text(fb, frame, "GAME OVER");
                self.draw_overlay_line(fb, frame, 2, "ENTER: AGAIN");
            }
            SessionState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::plain(Color::new(200, 200, 200), PANEL_BG);
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, x: i16, y: i16) {
        let style = CellStyle::plain(Color::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_block(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i16, y: i16, color: Color) {
        let style = CellStyle::plain(color, PLAYFIELD_BG).bold();
        self.fill_block(fb, frame, x, y, '█', style);
    }

    /// Paint one board block; blocks outside the board (e.g. above row 0) are skipped.
    fn fill_block(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16 {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Color::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Color::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        let hints: &[&str] = if snap.playable() {
            &[
                "←/→ move",
                "↓ soft drop",
                "↑ rotate",
                "z rotate ccw",
                "space drop",
                "r restart",
                "q quit",
            ]
        } else {
            &["enter start", "q quit"]
        };
        for line in hints {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        self.draw_overlay_line(fb, frame, 0, text);
    }

    fn draw_overlay_line(&self, fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::plain(Color::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
