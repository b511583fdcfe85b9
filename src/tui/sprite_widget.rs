use crate::input::CellSize;
use crate::sprite::{DrawTransform, FrameRect, SpriteSheet};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";

/// Blits one sprite frame into a buffer using half-block cells.
///
/// Each cell shows two vertically stacked samples. The sample points are the
/// centers of the upper and lower halves of the cell in logical pixels,
/// mapped back into the frame through the draw transform.
pub struct SpriteWidget<'a> {
    sheet: &'a SpriteSheet,
    frame: FrameRect,
    transform: DrawTransform,
    cell: CellSize,
    background: Color,
}

impl<'a> SpriteWidget<'a> {
    pub fn new(
        sheet: &'a SpriteSheet,
        frame: FrameRect,
        transform: DrawTransform,
        cell: CellSize,
        background: Color,
    ) -> Self {
        Self {
            sheet,
            frame,
            transform,
            cell,
            background,
        }
    }

    fn sample(&self, sx: f32, sy: f32) -> Option<Color> {
        let (u, v) = self.transform.invert(sx, sy);
        if u < 0.0 || v < 0.0 {
            return None;
        }
        self.sheet
            .frame_pixel(&self.frame, u.floor() as u32, v.floor() as u32)
            .map(|[r, g, b]| Color::Rgb(r, g, b))
    }
}

/// Cells in `0..limit` touched by the logical span `start..end`.
fn cell_span(start: f32, end: f32, cell: f32, limit: u16) -> std::ops::Range<u16> {
    let first = (start / cell).floor().max(0.0);
    let last = (end / cell).ceil().min(limit as f32);
    if last <= first {
        return 0..0;
    }
    first as u16..last as u16
}

impl Widget for SpriteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cell_w = self.cell.width as f32;
        let cell_h = self.cell.height as f32;
        let (left, top, right, bottom) = self
            .transform
            .bounds(self.frame.width, self.frame.height);

        for row in cell_span(top, bottom, cell_h, area.height) {
            for col in cell_span(left, right, cell_w, area.width) {
                let sx = (col as f32 + 0.5) * cell_w;
                let upper = self.sample(sx, (row as f32 + 0.25) * cell_h);
                let lower = self.sample(sx, (row as f32 + 0.75) * cell_h);

                let (symbol, fg, bg) = match (upper, lower) {
                    (Some(up), Some(down)) => (UPPER_HALF, up, down),
                    (Some(up), None) => (UPPER_HALF, up, self.background),
                    (None, Some(down)) => (LOWER_HALF, down, self.background),
                    (None, None) => continue,
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(symbol).set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}
