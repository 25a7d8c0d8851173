//! Terminal rendering layer.
//!
//! The game view draws through the render-sink contract; here that sink is
//! a character framebuffer (`FrameSink`), flushed to the real terminal by
//! `TerminalRenderer` with changed-run diffing. `core` stays deterministic
//! and testable; everything terminal-specific lives in this module.

pub mod fb;
pub mod renderer;
pub mod sink;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
pub use sink::FrameSink;
