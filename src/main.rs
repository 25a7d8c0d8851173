//! Terminal runner (default binary).
//!
//! Owns the game state and the frame loop: crossterm events feed the
//! held-button tracker, a fixed tick advances the game and the melody, and
//! each frame is rendered through the framebuffer sink to the terminal.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameView};
use blockfall::host::{AudioSink, NullAudio};
use blockfall::input::{map_key, should_quit, HeldButtons};
use blockfall::melody::{MelodyPlayer, CHANNEL_CONFIG};
use blockfall::term::{FrameSink, TerminalRenderer};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Wall-clock milliseconds, truncated; only seed quality matters here.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(wall_clock_seed());
    let view = GameView::default();
    let mut held = HeldButtons::new();

    // The terminal has no synthesizer; the melody still runs so a host
    // with a real channel only has to swap the sink.
    let mut audio = NullAudio;
    let mut melody = MelodyPlayer::new();
    audio.configure(CHANNEL_CONFIG);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut sink = FrameSink::new(w, h);

    let epoch = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_now_ms: u32 = 0;

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    // Terminal auto-repeat counts as a press: it refreshes
                    // the hold in terminals that never send releases.
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(button) = map_key(key.code) {
                            held.press(button, epoch.elapsed().as_millis() as u32);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(button) = map_key(key.code) {
                            held.release(button);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = epoch.elapsed().as_millis() as u32;
            let dt_ms = now_ms.saturating_sub(last_now_ms);
            last_now_ms = now_ms;

            held.tick(now_ms);
            melody.advance(dt_ms, &mut audio);
            game.update(now_ms, &held);

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            sink.resize(w, h);
            view.render(&game, &mut sink);
            term.present(sink.frame_mut())?;
        }
    }
}
