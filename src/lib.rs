//! Falling-block puzzle core with a terminal front end.
//!
//! `core` holds the deterministic game logic (board, pieces, gravity,
//! scoring) behind the host traits in `host`; `input` and `term` are the
//! terminal implementations of those traits, and `melody` is the optional
//! background tune. The binary in `main.rs` wires them together.

pub mod core;
pub mod host;
pub mod input;
pub mod melody;
pub mod term;
pub mod types;
