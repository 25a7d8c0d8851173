//! FrameSink: the terminal's implementation of the render-sink contract.
//!
//! Rect fills become background-colored blank cells, text runs become
//! styled characters. Out-of-surface geometry (including negative
//! coordinates from pieces anchored off the board) is clipped silently.

use crate::host::{Font, RenderSink};
use crate::term::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// A framebuffer plus the pen state the draw calls thread through it.
pub struct FrameSink {
    fb: FrameBuffer,
    pen: Rgb,
}

impl FrameSink {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            pen: Rgb::new(255, 255, 255),
        }
    }

    /// Track the terminal size; cheap when unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }
}

impl RenderSink for FrameSink {
    fn clear_frame(&mut self) {
        self.fb.clear(Cell::default());
    }

    fn set_color(&mut self, color: Rgb) {
        self.pen = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let style = CellStyle {
            bg: self.pen,
            ..CellStyle::default()
        };
        for py in y.max(0)..y.saturating_add(h) {
            for px in x.max(0)..x.saturating_add(w) {
                if px > u16::MAX as i32 || py > u16::MAX as i32 {
                    continue;
                }
                self.fb.put_char(px as u16, py as u16, ' ', style);
            }
        }
    }

    fn draw_text(&mut self, text: &str, font: Font, x: i32, y: i32) {
        if y < 0 || y > u16::MAX as i32 {
            return;
        }
        let style = CellStyle {
            fg: self.pen,
            bg: Rgb::new(0, 0, 0),
            bold: matches!(font, Font::Bold),
        };
        for (i, ch) in text.chars().enumerate() {
            let px = x + i as i32;
            if px < 0 || px > u16::MAX as i32 {
                continue;
            }
            self.fb.put_char(px as u16, y as u16, ch, style);
        }
    }
}
