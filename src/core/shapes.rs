//! Tetromino shape table and rotation.
//!
//! Each kind is stored once, in its spawn orientation, as block offsets
//! around the piece origin. Other orientations are derived by composing a
//! 90-degree clockwise rotation, so the four orientations of a kind are
//! always consistent by construction.

use crate::types::{PieceKind, Rgb, Rotation};

/// Offset of a single block relative to piece origin
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from piece origin
pub type PieceShape = [BlockOffset; 4];

/// Canonical (spawn orientation) shape for a piece kind
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::S => [(0, 0), (1, 0), (-1, 1), (0, 1)],
        PieceKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::J => [(-1, 0), (-1, 1), (0, 0), (1, 0)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
    }
}

/// Rotate one offset 90 degrees clockwise about the origin.
///
/// Screen coordinates (y grows downward), so clockwise is (x, y) -> (y, -x).
pub fn rotate_offset_cw((x, y): BlockOffset) -> BlockOffset {
    (y, -x)
}

/// Get the shape (block offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut shape = base_shape(kind);
    for _ in 0..rotation.quarter_turns() {
        for offset in shape.iter_mut() {
            *offset = rotate_offset_cw(*offset);
        }
    }
    shape
}

/// Display color for a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(160, 32, 240),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
