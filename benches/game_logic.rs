use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Game, GameView, Piece};
use blockfall::host::InputSource;
use blockfall::term::FrameSink;
use blockfall::types::{Button, PieceKind};

/// Holds Menu only: play is unaffected and a finished game restarts on the
/// next frame, so long benchmark runs keep exercising live updates.
struct MenuHeld;

impl InputSource for MenuHeld {
    fn is_held(&self, button: Button) -> bool {
        button == Button::Menu
    }
}

fn bench_update_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    let mut now = 0u32;

    c.bench_function("game_update_16ms", |b| {
        b.iter(|| {
            now += 16;
            game.update(black_box(now), &MenuHeld);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_collision_check(c: &mut Criterion) {
    let game = Game::new(12345);
    let piece = Piece::new(PieceKind::T, 5, 10);

    c.bench_function("collides", |b| {
        b.iter(|| game.collides(black_box(&piece)))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let game = Game::new(12345);
    let view = GameView::default();
    let mut sink = FrameSink::new(80, 24);

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            view.render(&game, &mut sink);
            black_box(sink.frame().cells().len())
        })
    });
}

criterion_group!(
    benches,
    bench_update_tick,
    bench_line_clear,
    bench_collision_check,
    bench_render_frame
);
criterion_main!(benches);
