//! Off-screen braille canvas
//!
//! Each terminal cell is a 2x4 block of braille dots, giving line work
//! sub-cell resolution. Segments are rasterized with Bresenham's line
//! algorithm in dot space; a cell shows the color of the last segment
//! that touched it.

use crate::geometry::Segment;
use crate::terminal::Terminal;
use crossterm::style::Color;

pub const DOTS_X: usize = 2;
pub const DOTS_Y: usize = 4;
const BRAILLE_BASE: u32 = 0x2800;

pub struct Canvas {
    cells_w: usize,
    cells_h: usize,
    dots: Vec<bool>,
    cell_colors: Vec<Option<Color>>,
}

impl Canvas {
    pub fn new(cells_w: u16, cells_h: u16) -> Self {
        let (cells_w, cells_h) = (cells_w as usize, cells_h as usize);
        Self {
            cells_w,
            cells_h,
            dots: vec![false; cells_w * DOTS_X * cells_h * DOTS_Y],
            cell_colors: vec![None; cells_w * cells_h],
        }
    }

    /// Drawing area in dot coordinates
    pub fn dot_size(&self) -> (usize, usize) {
        (self.cells_w * DOTS_X, self.cells_h * DOTS_Y)
    }

    pub fn clear(&mut self) {
        self.dots.fill(false);
        self.cell_colors.fill(None);
    }

    pub fn resize(&mut self, cells_w: u16, cells_h: u16) {
        *self = Self::new(cells_w, cells_h);
    }

    /// Rasterize one segment into the dot grid. Geometry outside the
    /// canvas is clipped dot by dot.
    pub fn draw_segment(&mut self, segment: &Segment) {
        let mut x = segment.start.x.round() as i32;
        let mut y = segment.start.y.round() as i32;
        let x1 = segment.end.x.round() as i32;
        let y1 = segment.end.y.round() as i32;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y, segment.width, segment.color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x == x1 {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == y1 {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }

    /// Mark one point of the stroke: a single dot for thin strokes, a
    /// disc of dots for wide ones
    fn stamp(&mut self, x: i32, y: i32, width: u32, color: Color) {
        let r = width as i32 / 2;
        if r == 0 {
            self.set_dot(x, y, color);
            return;
        }
        for oy in -r..=r {
            for ox in -r..=r {
                if ox * ox + oy * oy <= r * r {
                    self.set_dot(x + ox, y + oy, color);
                }
            }
        }
    }

    fn set_dot(&mut self, x: i32, y: i32, color: Color) {
        let (dot_w, dot_h) = self.dot_size();
        if x < 0 || y < 0 || x >= dot_w as i32 || y >= dot_h as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        self.dots[y * dot_w + x] = true;
        self.cell_colors[(y / DOTS_Y) * self.cells_w + x / DOTS_X] = Some(color);
    }

    fn dot(&self, x: usize, y: usize) -> bool {
        self.dots[y * self.cells_w * DOTS_X + x]
    }

    /// Braille character and color for one cell, or None if it is empty
    pub fn cell(&self, cx: usize, cy: usize) -> Option<(char, Color)> {
        // Braille dot positions:
        // 0 3
        // 1 4
        // 2 5
        // 6 7
        let bx = cx * DOTS_X;
        let by = cy * DOTS_Y;
        let mut code: u32 = 0;
        if self.dot(bx, by) {
            code |= 1 << 0;
        }
        if self.dot(bx, by + 1) {
            code |= 1 << 1;
        }
        if self.dot(bx, by + 2) {
            code |= 1 << 2;
        }
        if self.dot(bx + 1, by) {
            code |= 1 << 3;
        }
        if self.dot(bx + 1, by + 1) {
            code |= 1 << 4;
        }
        if self.dot(bx + 1, by + 2) {
            code |= 1 << 5;
        }
        if self.dot(bx, by + 3) {
            code |= 1 << 6;
        }
        if self.dot(bx + 1, by + 3) {
            code |= 1 << 7;
        }

        if code == 0 {
            return None;
        }
        let ch = char::from_u32(BRAILLE_BASE + code).unwrap_or(' ');
        let color = self.cell_colors[cy * self.cells_w + cx].unwrap_or(Color::White);
        Some((ch, color))
    }

    /// Copy the whole canvas into the terminal back buffer
    pub fn flush(&self, term: &mut Terminal) {
        for cy in 0..self.cells_h {
            for cx in 0..self.cells_w {
                match self.cell(cx, cy) {
                    Some((ch, color)) => term.set(cx as i32, cy as i32, ch, Some(color), false),
                    None => term.set(cx as i32, cy as i32, ' ', None, false),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64, width: u32, color: Color) -> Segment {
        Segment {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            color,
            width,
        }
    }

    #[test]
    fn new_canvas_is_empty() {
        let canvas = Canvas::new(4, 2);
        for cy in 0..2 {
            for cx in 0..4 {
                assert!(canvas.cell(cx, cy).is_none());
            }
        }
    }

    #[test]
    fn horizontal_line_fills_expected_cells() {
        let mut canvas = Canvas::new(4, 2);
        canvas.draw_segment(&seg(0.0, 0.0, 3.0, 0.0, 1, Color::Cyan));

        // dots (0,0)..(3,0) cover the top rows of cells (0,0) and (1,0)
        let (ch, color) = canvas.cell(0, 0).unwrap();
        assert_eq!(ch, '\u{2809}');
        assert_eq!(color, Color::Cyan);
        assert_eq!(canvas.cell(1, 0), Some(('\u{2809}', Color::Cyan)));
        assert!(canvas.cell(2, 0).is_none());
        assert!(canvas.cell(0, 1).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut canvas = Canvas::new(4, 2);
        canvas.draw_segment(&seg(0.0, 0.0, 7.0, 7.0, 2, Color::Magenta));
        canvas.clear();
        for cy in 0..2 {
            for cx in 0..4 {
                assert!(canvas.cell(cx, cy).is_none());
            }
        }
    }

    #[test]
    fn out_of_bounds_geometry_is_clipped() {
        let mut canvas = Canvas::new(4, 2);
        canvas.draw_segment(&seg(-10.0, -10.0, 50.0, 3.0, 2, Color::Cyan));
        canvas.draw_segment(&seg(100.0, 100.0, 200.0, 200.0, 1, Color::Cyan));
        // nothing to assert beyond "no panic" and the grid staying intact
        assert_eq!(canvas.dot_size(), (8, 8));
    }

    #[test]
    fn last_writer_wins_cell_color() {
        let mut canvas = Canvas::new(2, 1);
        canvas.draw_segment(&seg(0.0, 0.0, 1.0, 0.0, 1, Color::Cyan));
        canvas.draw_segment(&seg(0.0, 1.0, 1.0, 1.0, 1, Color::Magenta));
        let (_, color) = canvas.cell(0, 0).unwrap();
        assert_eq!(color, Color::Magenta);
    }

    #[test]
    fn wide_stroke_marks_neighboring_cells() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_segment(&seg(4.0, 8.0, 4.0, 8.0, 4, Color::Cyan));
        // a radius-2 disc around dot (4,8) reaches cells above and beside
        assert!(canvas.cell(2, 2).is_some());
        assert!(canvas.cell(2, 1).is_some());
        assert!(canvas.cell(1, 2).is_some());
    }
}
