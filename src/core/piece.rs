//! Piece - an active tetromino as a pure value.
//!
//! Moves and rotations return new values; whether a candidate is legal on
//! the board is the game's call, not the piece's.

use crate::core::rng::SimpleRng;
use crate::core::shapes::{get_shape, BlockOffset};
use crate::types::{PieceKind, Rotation};

/// A tetromino with a position and orientation on (or near) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece in spawn orientation at the given anchor.
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// New piece with a uniformly random kind.
    pub fn random(rng: &mut SimpleRng, x: i8, y: i8) -> Self {
        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        Self::new(kind, x, y)
    }

    /// Absolute board coordinates of the four blocks.
    pub fn blocks(&self) -> [BlockOffset; 4] {
        let mut blocks = get_shape(self.kind, self.rotation);
        for (bx, by) in blocks.iter_mut() {
            *bx += self.x;
            *by += self.y;
        }
        blocks
    }

    /// Copy translated by (dx, dy).
    pub fn moved_by(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy rotated a quarter turn clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Copy rotated a quarter turn counter-clockwise.
    pub fn rotated_ccw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_translate_with_anchor() {
        let piece = Piece::new(PieceKind::O, 4, 10);
        assert_eq!(piece.blocks(), [(4, 10), (5, 10), (4, 11), (5, 11)]);
    }

    #[test]
    fn test_moved_by_leaves_original_untouched() {
        let piece = Piece::new(PieceKind::T, 5, 0);
        let moved = piece.moved_by(-1, 2);
        assert_eq!((moved.x, moved.y), (4, 2));
        assert_eq!((piece.x, piece.y), (5, 0));
        assert_eq!(moved.kind, piece.kind);
        assert_eq!(moved.rotation, piece.rotation);
    }

    #[test]
    fn test_ccw_is_three_cw() {
        let piece = Piece::new(PieceKind::J, 5, 5);
        let ccw = piece.rotated_ccw();
        let three_cw = piece.rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(ccw, three_cw);
    }

    #[test]
    fn test_random_uses_spawn_rotation() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..20 {
            let piece = Piece::random(&mut rng, 5, 0);
            assert_eq!(piece.rotation, Rotation::North);
            assert!(PieceKind::ALL.contains(&piece.kind));
        }
    }
}
