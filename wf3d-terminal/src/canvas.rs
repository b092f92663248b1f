/// Character-cell framebuffer for terminal rendering
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::{self, Write};
use wf3d_core::{Color, Surface, Viewport};

/// Projected points further out than this are not rasterized
const MAX_COORD: f32 = 1.0e5;

const VERTEX_GLYPH: char = 'o';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    color: Color::BLACK,
};

/// One pixel per terminal cell; lines are drawn with slope-matching glyphs
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    caption: String,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
            caption: String::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as u32, self.height as u32)
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![BLANK; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Glyph at a cell, `None` outside the canvas
    pub fn glyph(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x].glyph)
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { glyph, color };
    }

    /// Bresenham line between two projected points
    fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, color: Color) {
        if !is_drawable(&from) || !is_drawable(&to) {
            return;
        }

        let (mut x0, mut y0) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);
        let glyph = line_glyph(x1 - x0, y1 - y0);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, glyph, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Queue the whole canvas to `writer`, switching color only when it changes
    pub fn present<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for cell in &self.cells[y * self.width..(y + 1) * self.width] {
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(term_color(cell.color)))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for Canvas {
    fn draw_polygon(&mut self, points: &[Point2<f32>], color: Color, _width: u32) {
        // Cells are too coarse for thicker strokes.
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.draw_line(from, to, color);
        }
    }

    fn draw_circle(&mut self, center: Point2<f32>, color: Color, _radius: f32) {
        if is_drawable(&center) {
            self.plot(center.x.round() as i32, center.y.round() as i32, VERTEX_GLYPH, color);
        }
    }

    fn draw_text(&mut self, text: &str, position: Point2<f32>, color: Color) {
        if !is_drawable(&position) {
            return;
        }
        let (x, y) = (position.x.round() as i32, position.y.round() as i32);
        for (offset, glyph) in text.chars().enumerate() {
            self.plot(x + offset as i32, y, glyph, color);
        }
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption.clear();
        self.caption.push_str(caption);
    }
}

fn is_drawable(point: &Point2<f32>) -> bool {
    point.x.abs() < MAX_COORD && point.y.abs() < MAX_COORD
}

/// Pick a glyph that follows the line direction (screen y grows downward)
fn line_glyph(dx: i32, dy: i32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        '.'
    } else if ay * 2 <= ax {
        '-'
    } else if ax * 2 <= ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
