//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O; hosts plug in through the traits
//! in `crate::host`.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod view;

// Re-export commonly used types
pub use board::Board;
pub use game::Game;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::{base_shape, get_shape, piece_color, rotate_offset_cw, BlockOffset, PieceShape};
pub use view::GameView;
