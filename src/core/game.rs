//! Game module - the falling-piece state machine
//!
//! Owns the board, the current and next piece, score and timing. The host
//! calls `update` once per frame with a millisecond timestamp and the held
//! button state; everything else (debounced movement, gravity, locking,
//! line clears, spawning, game over, restart) happens in here.

use crate::core::{Board, Piece, SimpleRng};
use crate::host::InputSource;
use crate::types::{
    Button, DROP_INTERVAL_MS, INPUT_REPEAT_MS, LINE_SCORE, PREVIEW_X, PREVIEW_Y,
    SOFT_DROP_MULTIPLIER, SPAWN_X, SPAWN_Y,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
    /// Milliseconds accumulated toward the next gravity step.
    drop_acc_ms: u32,
    /// Timestamp of the last attempted movement or rotation.
    last_input_ms: u32,
    /// Timestamp of the previous frame; None until the first update anchors
    /// the clock.
    last_frame_ms: Option<u32>,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Piece::random(&mut rng, SPAWN_X, SPAWN_Y);
        let next = Piece::random(&mut rng, PREVIEW_X, PREVIEW_Y);
        Self {
            board: Board::new(),
            current,
            next,
            score: 0,
            game_over: false,
            rng,
            drop_acc_ms: 0,
            last_input_ms: 0,
            last_frame_ms: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance the game by one frame.
    ///
    /// `now_ms` is the host clock in milliseconds; it only ever needs to be
    /// comparable to earlier values passed here. The very first call anchors
    /// the clock and advances nothing; a clock that jumps backwards counts
    /// as zero elapsed time.
    pub fn update(&mut self, now_ms: u32, input: &impl InputSource) {
        let dt_ms = match self.last_frame_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => {
                self.last_frame_ms = Some(now_ms);
                return;
            }
        };
        self.last_frame_ms = Some(now_ms);

        if self.game_over {
            if input.is_held(Button::Menu) {
                self.restart();
            }
            return;
        }

        self.handle_input(now_ms, input);
        self.apply_gravity(dt_ms, input.is_held(Button::SoftDrop));
    }

    /// Check whether a piece overlaps a wall, the floor, the ceiling or an
    /// occupied cell. Every movement decision goes through here.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece
            .blocks()
            .iter()
            .any(|&(x, y)| !self.board.is_open(x, y))
    }

    /// Rebuild the whole state for a fresh game.
    ///
    /// The RNG is reseeded from its current state, so the piece sequence
    /// continues instead of replaying the finished game.
    pub fn restart(&mut self) {
        *self = Self::new(self.rng.state());
    }

    /// Apply at most one held movement or rotation, throttled by the input
    /// repeat window.
    fn handle_input(&mut self, now_ms: u32, input: &impl InputSource) {
        if now_ms.saturating_sub(self.last_input_ms) < INPUT_REPEAT_MS {
            return;
        }

        // Fixed priority; one action per window.
        let candidate = if input.is_held(Button::MoveLeft) {
            Some(self.current.moved_by(-1, 0))
        } else if input.is_held(Button::MoveRight) {
            Some(self.current.moved_by(1, 0))
        } else if input.is_held(Button::RotateCw) {
            Some(self.current.rotated_cw())
        } else if input.is_held(Button::RotateCcw) {
            Some(self.current.rotated_ccw())
        } else {
            None
        };

        if let Some(piece) = candidate {
            if !self.collides(&piece) {
                self.current = piece;
            }
            // Rejected attempts restart the window too, so a piece held
            // against a wall does not retry every frame.
            self.last_input_ms = now_ms;
        }
    }

    /// Accumulate elapsed time and perform at most one gravity step.
    fn apply_gravity(&mut self, dt_ms: u32, soft_drop: bool) {
        self.drop_acc_ms = self.drop_acc_ms.saturating_add(dt_ms);
        if soft_drop {
            self.drop_acc_ms = self
                .drop_acc_ms
                .saturating_add(dt_ms.saturating_mul(SOFT_DROP_MULTIPLIER));
        }

        if self.drop_acc_ms < DROP_INTERVAL_MS {
            return;
        }
        self.drop_acc_ms = 0;

        let dropped = self.current.moved_by(0, 1);
        if self.collides(&dropped) {
            self.lock_current();
        } else {
            self.current = dropped;
        }
    }

    /// Lock the current piece into the board, clear full rows, score them
    /// and spawn the next piece, all within the same frame.
    fn lock_current(&mut self) {
        for (x, y) in self.current.blocks() {
            let placed = self.board.set(x, y, Some(self.current.kind));
            debug_assert!(placed, "locked block out of bounds at ({}, {})", x, y);
        }

        let cleared = self.board.clear_full_rows();
        self.score += cleared.len() as u32 * LINE_SCORE;

        self.spawn_next();
    }

    /// Promote the preview piece to the spawn anchor and draw a new preview.
    /// A blocked spawn is the game-over condition.
    fn spawn_next(&mut self) {
        self.current = Piece::new(self.next.kind, SPAWN_X, SPAWN_Y);
        self.next = Piece::random(&mut self.rng, PREVIEW_X, PREVIEW_Y);

        if self.collides(&self.current) {
            self.game_over = true;
        }
    }
}
