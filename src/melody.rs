//! Looping background melody.
//!
//! A fixed (frequency, duration) sequence stepped by per-frame elapsed
//! time, driving a single audio channel. Purely decorative: game logic
//! never depends on it, and hosts without a synthesizer wire `NullAudio`.

use crate::host::{AudioSink, ChannelConfig, Waveform};

/// One melody entry; a frequency of zero is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

const fn note(freq_hz: u16, duration_ms: u16) -> Note {
    Note {
        freq_hz,
        duration_ms,
    }
}

// Pitches (Hz).
const A4: u16 = 440;
const B4: u16 = 494;
const C5: u16 = 523;
const D5: u16 = 587;
const E5: u16 = 659;
const F5: u16 = 698;
const G5: u16 = 784;
const A5: u16 = 880;
const REST: u16 = 0;

// Note lengths at 150 BPM (ms): eighth, quarter, dotted quarter.
const EIGHTH: u16 = 200;
const QUARTER: u16 = 400;
const DOTTED_QUARTER: u16 = 600;

/// Korobeiniki, two phrases, looped.
pub const MELODY: [Note; 39] = [
    // Part A
    note(E5, QUARTER),
    note(B4, EIGHTH),
    note(C5, EIGHTH),
    note(D5, QUARTER),
    note(C5, EIGHTH),
    note(B4, EIGHTH),
    note(A4, QUARTER),
    note(A4, EIGHTH),
    note(C5, EIGHTH),
    note(E5, QUARTER),
    note(D5, EIGHTH),
    note(C5, EIGHTH),
    note(B4, DOTTED_QUARTER),
    note(C5, EIGHTH),
    note(D5, QUARTER),
    note(E5, QUARTER),
    note(C5, QUARTER),
    note(A4, QUARTER),
    note(A4, QUARTER),
    note(REST, EIGHTH),
    // Part B
    note(D5, DOTTED_QUARTER),
    note(F5, EIGHTH),
    note(A5, QUARTER),
    note(G5, EIGHTH),
    note(F5, EIGHTH),
    note(E5, DOTTED_QUARTER),
    note(C5, EIGHTH),
    note(E5, QUARTER),
    note(D5, EIGHTH),
    note(C5, EIGHTH),
    note(B4, QUARTER),
    note(B4, EIGHTH),
    note(C5, EIGHTH),
    note(D5, QUARTER),
    note(E5, QUARTER),
    note(C5, QUARTER),
    note(A4, QUARTER),
    note(A4, QUARTER),
    note(REST, QUARTER),
];

/// Channel setup for the melody voice: a plain square wave with a snappy
/// envelope.
pub const CHANNEL_CONFIG: ChannelConfig = ChannelConfig {
    waveform: Waveform::Square,
    attack_ms: 2,
    decay_ms: 200,
    sustain: 2,
    release_ms: 2,
    volume: 1000,
};

/// Steps through `MELODY` against the frame clock.
#[derive(Debug, Clone)]
pub struct MelodyPlayer {
    index: usize,
    timer_ms: u32,
}

impl MelodyPlayer {
    pub fn new() -> Self {
        // A zero timer makes the first `advance` sound the first note.
        Self {
            index: 0,
            timer_ms: 0,
        }
    }

    /// Advance by one frame's elapsed time, triggering the next note when
    /// the current one has run out. Overshoot past a note boundary is
    /// dropped rather than carried, which keeps the tune locked to frame
    /// granularity.
    pub fn advance(&mut self, dt_ms: u32, audio: &mut impl AudioSink) {
        if self.timer_ms > dt_ms {
            self.timer_ms -= dt_ms;
            return;
        }

        audio.trigger_release();
        let note = MELODY[self.index];
        if note.freq_hz > 0 {
            audio.trigger_attack(note.freq_hz);
        }
        self.timer_ms = note.duration_ms as u32;
        self.index = (self.index + 1) % MELODY.len();
    }
}

impl Default for MelodyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum AudioOp {
        Attack(u16),
        Release,
    }

    #[derive(Default)]
    struct RecordingAudio {
        ops: Vec<AudioOp>,
    }

    impl AudioSink for RecordingAudio {
        fn configure(&mut self, _config: ChannelConfig) {}

        fn trigger_attack(&mut self, freq_hz: u16) {
            self.ops.push(AudioOp::Attack(freq_hz));
        }

        fn trigger_release(&mut self) {
            self.ops.push(AudioOp::Release);
        }
    }

    #[test]
    fn test_first_advance_sounds_first_note() {
        let mut player = MelodyPlayer::new();
        let mut audio = RecordingAudio::default();

        player.advance(16, &mut audio);

        assert_eq!(audio.ops, vec![AudioOp::Release, AudioOp::Attack(E5)]);
    }

    #[test]
    fn test_note_holds_until_duration_elapses() {
        let mut player = MelodyPlayer::new();
        let mut audio = RecordingAudio::default();

        // First note (E5, 400 ms) starts on the first frame.
        player.advance(100, &mut audio);
        // 300 ms more is not enough to finish it.
        player.advance(100, &mut audio);
        player.advance(100, &mut audio);
        player.advance(100, &mut audio);
        // The boundary falls here.
        player.advance(100, &mut audio);

        let attacks: Vec<_> = audio
            .ops
            .iter()
            .filter(|op| matches!(op, AudioOp::Attack(_)))
            .collect();
        assert_eq!(attacks.len(), 2);
        assert_eq!(*attacks[1], AudioOp::Attack(B4));
    }

    #[test]
    fn test_rest_releases_without_attack() {
        let mut player = MelodyPlayer::new();
        let mut audio = RecordingAudio::default();

        // One call per note: dt exceeds every duration in the table.
        for _ in 0..19 {
            player.advance(1000, &mut audio);
        }
        audio.ops.clear();
        player.advance(1000, &mut audio);

        assert_eq!(audio.ops, vec![AudioOp::Release]);
    }

    #[test]
    fn test_melody_loops() {
        let mut player = MelodyPlayer::new();
        let mut audio = RecordingAudio::default();

        for _ in 0..MELODY.len() {
            player.advance(1000, &mut audio);
        }
        audio.ops.clear();
        player.advance(1000, &mut audio);

        assert_eq!(audio.ops, vec![AudioOp::Release, AudioOp::Attack(E5)]);
    }
}
