//! Terminal input layer: key mapping plus held-button tracking.

pub mod held;
pub mod keys;

pub use held::HeldButtons;
pub use keys::{map_key, should_quit};
