//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (visible playfield, in cells)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 800;
pub const SOFT_DROP_MULTIPLIER: u32 = 10;
pub const INPUT_REPEAT_MS: u32 = 120;

/// Points awarded per cleared line
pub const LINE_SCORE: u32 = 100;

/// Anchor where freshly spawned pieces enter the board
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;
pub const SPAWN_Y: i8 = 0;

/// Anchor for the next-piece preview, off the board to the right
pub const PREVIEW_X: i8 = BOARD_WIDTH as i8 + 2;
pub const PREVIEW_Y: i8 = 2;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Normalize an arbitrary (possibly negative) quarter-turn count.
    pub fn from_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Clockwise quarter turns from spawn orientation, in [0, 3].
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Buttons the game polls each frame.
///
/// The core sees held state only; edge detection and key repeat belong to
/// the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    Menu,
}

impl Button {
    pub const COUNT: usize = 6;

    /// Stable index for per-button state tables.
    pub fn index(&self) -> usize {
        match self {
            Button::MoveLeft => 0,
            Button::MoveRight => 1,
            Button::RotateCw => 2,
            Button::RotateCcw => 3,
            Button::SoftDrop => 4,
            Button::Menu => 5,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
