//! End-to-end terminal rendering - game state into framebuffer cells

use blockfall::core::{Game, GameView};
use blockfall::term::{FrameBuffer, FrameSink};
use blockfall::types::Rgb;

fn row_text(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len)
        .map(|cx| fb.get(cx, y).map(|c| c.ch).unwrap_or('?'))
        .collect()
}

#[test]
fn test_frame_has_border_and_empty_grid() {
    let game = Game::new(1);
    let mut sink = FrameSink::new(40, 24);

    GameView::default().render(&game, &mut sink);
    let fb = sink.frame();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20, plus border => 22x22
    let border = Rgb::new(50, 50, 50);
    assert_eq!(fb.get(0, 0).unwrap().style.bg, border);
    assert_eq!(fb.get(21, 0).unwrap().style.bg, border);
    assert_eq!(fb.get(0, 21).unwrap().style.bg, border);
    assert_eq!(fb.get(21, 21).unwrap().style.bg, border);

    // Top-left grid cell is empty board, not border.
    assert_eq!(fb.get(1, 1).unwrap().style.bg, Rgb::new(0, 0, 0));
}

#[test]
fn test_side_panel_text_lands_right_of_board() {
    let game = Game::new(1);
    let mut sink = FrameSink::new(40, 24);

    GameView::default().render(&game, &mut sink);
    let fb = sink.frame();

    assert_eq!(row_text(fb, 21, 1, 8), "Score: 0");
    assert_eq!(row_text(fb, 21, 2, 5), "Next:");
    assert!(!fb.get(21, 1).unwrap().style.bold);
}

#[test]
fn test_undersized_terminal_clips_without_panic() {
    let game = Game::new(1);
    let mut sink = FrameSink::new(10, 5);

    GameView::default().render(&game, &mut sink);

    assert_eq!(sink.frame().width(), 10);
    assert_eq!(sink.frame().height(), 5);
    // What fits is still drawn.
    assert_eq!(sink.frame().get(0, 0).unwrap().style.bg, Rgb::new(50, 50, 50));
}
