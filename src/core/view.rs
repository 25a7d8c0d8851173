//! GameView: maps `core::Game` into render-sink draw calls.
//!
//! This module is pure (no I/O). The same call sequence drives any sink:
//! the terminal framebuffer here, a pixel surface on a handheld.

use crate::core::{piece_color, Game, Piece};
use crate::host::{Font, RenderSink};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_X};

const FRAME_COLOR: Rgb = Rgb::new(50, 50, 50);
const EMPTY_COLOR: Rgb = Rgb::new(0, 0, 0);
const TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);
const GAME_OVER_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Renders the playfield, the side panel and overlays.
pub struct GameView {
    /// Board cell width in sink pixels.
    cell_w: i32,
    /// Board cell height in sink pixels.
    cell_h: i32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio; a square
        // pixel host would pass equal sides.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: i32, cell_h: i32) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the game into a sink as one deterministic frame.
    pub fn render(&self, game: &Game, sink: &mut impl RenderSink) {
        sink.clear_frame();

        // Playfield frame, one pixel of border around the grid.
        let board_px_w = BOARD_WIDTH as i32 * self.cell_w;
        let board_px_h = BOARD_HEIGHT as i32 * self.cell_h;
        sink.set_color(FRAME_COLOR);
        sink.fill_rect(0, 0, board_px_w + 2, board_px_h + 2);

        // Locked board cells; empty cells punch the background back out of
        // the frame rect.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let color = match game.board().get(x, y) {
                    Some(Some(kind)) => piece_color(kind),
                    _ => EMPTY_COLOR,
                };
                sink.set_color(color);
                self.fill_cell(sink, x, y);
            }
        }

        // The falling piece. Once the game is over the blocked spawn piece
        // would overlap the stack, so only the stack is shown.
        if !game.game_over() {
            self.draw_piece(sink, &game.current());
        }

        // Next piece in its off-board preview slot.
        self.draw_piece(sink, &game.next_piece());

        let (panel_x, panel_y) = self.cell_origin(PREVIEW_X - 2, 0);
        sink.set_color(TEXT_COLOR);
        sink.draw_text(&format!("Score: {}", game.score()), Font::Minimal, panel_x, panel_y);
        let (label_x, label_y) = self.cell_origin(PREVIEW_X - 2, 1);
        sink.draw_text("Next:", Font::Minimal, label_x, label_y);

        if game.game_over() {
            let (over_x, over_y) = self.cell_origin(1, (BOARD_HEIGHT / 2) as i8);
            sink.set_color(GAME_OVER_COLOR);
            sink.draw_text("GAME OVER", Font::Bold, over_x, over_y);
        }
    }

    /// Top-left sink pixel of a board cell (border offset included).
    fn cell_origin(&self, x: i8, y: i8) -> (i32, i32) {
        (1 + x as i32 * self.cell_w, 1 + y as i32 * self.cell_h)
    }

    fn fill_cell(&self, sink: &mut impl RenderSink, x: i8, y: i8) {
        let (px, py) = self.cell_origin(x, y);
        sink.fill_rect(px, py, self.cell_w, self.cell_h);
    }

    /// Draw all four blocks of a piece in its color. Works for the falling
    /// piece and for the preview piece anchored off the board; sinks clip
    /// anything outside their surface.
    fn draw_piece(&self, sink: &mut impl RenderSink, piece: &Piece) {
        sink.set_color(piece_color(piece.kind));
        for (x, y) in piece.blocks() {
            self.fill_cell(sink, x, y);
        }
    }
}
