//! Host collaborator interfaces.
//!
//! The game core runs against three narrow seams: a polled input source, a
//! stateful-pen render sink and an optional audio channel. Hosts implement
//! whichever of these their platform has; the terminal front end in this
//! crate implements input and rendering, a handheld build would add real
//! audio.

use crate::types::{Button, Rgb};

/// Held-button state, polled once per frame.
pub trait InputSource {
    fn is_held(&self, button: Button) -> bool;
}

/// Text faces a sink must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Minimal,
    Bold,
}

/// Drawing surface with a stateful pen color.
///
/// Coordinates are sink pixels; implementations clip out-of-range geometry
/// rather than reporting errors.
pub trait RenderSink {
    /// Reset the frame to the background.
    fn clear_frame(&mut self);

    /// Set the pen color used by subsequent draws.
    fn set_color(&mut self, color: Rgb);

    /// Fill an axis-aligned rectangle with the pen color.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32);

    /// Draw a text run at the given position.
    fn draw_text(&mut self, text: &str, font: Font, x: i32, y: i32);
}

/// Oscillator waveforms an audio channel can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
    Saw,
    Sine,
    Noise,
}

/// One-time audio channel setup (ADSR envelope plus waveform).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub waveform: Waveform,
    pub attack_ms: u16,
    pub decay_ms: u16,
    pub sustain: u16,
    pub release_ms: u16,
    pub volume: u16,
}

/// Single melodic audio channel.
pub trait AudioSink {
    /// Apply channel configuration; called once at startup.
    fn configure(&mut self, config: ChannelConfig);

    /// Start the envelope at the given frequency.
    fn trigger_attack(&mut self, freq_hz: u16);

    /// Release the currently sounding note.
    fn trigger_release(&mut self);
}

/// No-op audio sink for hosts without a synthesizer.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn configure(&mut self, _config: ChannelConfig) {}

    fn trigger_attack(&mut self, _freq_hz: u16) {}

    fn trigger_release(&mut self) {}
}
