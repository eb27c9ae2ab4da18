//! Rasterizes a display list onto terminal cells.
//!
//! World coordinates are scaled independently on each axis to fit the
//! target area, the same way the play field stretches to the terminal.

use crate::render::{DrawCommand, Paint, TextSize};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a world paint.
pub fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Sky => Color::White,
        Paint::Text => Color::Black,
        Paint::Bird => Color::Rgb(255, 165, 0),
        Paint::DeadBird => Color::Red,
        Paint::Pipe => Color::Green,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

/// A grid of terminal cells covering a world of `world_width` × `world_height`.
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    x_scale: f64,
    y_scale: f64,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        let x_scale = if world_width > 0.0 {
            cols as f64 / world_width
        } else {
            1.0
        };
        let y_scale = if world_height > 0.0 {
            rows as f64 / world_height
        } else {
            1.0
        };
        Self {
            cols,
            rows,
            x_scale,
            y_scale,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    /// Paint every command in order; later commands cover earlier ones.
    pub fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }

    pub fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => self.fill_rect(*x, *y, *width, *height, paint_color(*paint)),
            DrawCommand::Text {
                x,
                y,
                text,
                size,
                paint,
            } => self.put_text(*x, *y, text, *size == TextSize::Large, paint_color(*paint)),
        }
    }

    /// Fill the cells covered by a world rectangle. Anything visible gets at
    /// least one cell so thin shapes do not vanish at small terminal sizes.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let Some((c0, c1)) = span(x, x + width, self.x_scale, self.cols) else {
            return;
        };
        let Some((r0, r1)) = span(y, y + height, self.y_scale, self.rows) else {
            return;
        };
        for row in r0..r1 {
            for col in c0..c1 {
                let cell = &mut self.cells[row * self.cols + col];
                cell.symbol = ' ';
                cell.bg = color;
            }
        }
    }

    /// Write text starting at the cell under a world point, clipped to the grid.
    fn put_text(&mut self, x: f64, y: f64, text: &str, bold: bool, color: Color) {
        let row = (y * self.y_scale).round();
        let col = (x * self.x_scale).round();
        if row < 0.0 || row >= self.rows as f64 {
            return;
        }
        let row = row as usize;
        let mut col = col as i64;
        for ch in text.chars() {
            if col >= self.cols as i64 {
                break;
            }
            if col >= 0 {
                let cell = &mut self.cells[row * self.cols + col as usize];
                cell.symbol = ch;
                cell.fg = color;
                cell.bold = bold;
            }
            col += 1;
        }
    }

    /// Convert the grid into styled lines, one span per run of equal style.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows);
        for row in self.cells.chunks(self.cols.max(1)).take(self.rows) {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_style: Option<Style> = None;

            for cell in row {
                let style = cell_style(cell);
                if run_style != Some(style) {
                    if let Some(previous) = run_style {
                        spans.push(Span::styled(std::mem::take(&mut run), previous));
                    }
                    run_style = Some(style);
                }
                run.push(cell.symbol);
            }
            if let Some(style) = run_style {
                spans.push(Span::styled(run, style));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    /// Symbol at a cell, for tests and debugging.
    pub fn symbol_at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col].symbol)
    }

    /// Background at a cell.
    pub fn background_at(&self, col: usize, row: usize) -> Option<Color> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col].bg)
    }
}

fn cell_style(cell: &Cell) -> Style {
    let style = Style::default().fg(cell.fg).bg(cell.bg);
    if cell.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Cell range `[start, end)` covered by the world interval `[from, to)`, clipped.
fn span(from: f64, to: f64, scale: f64, limit: usize) -> Option<(usize, usize)> {
    let start = (from * scale).round();
    let mut end = (to * scale).round();
    if end <= start {
        end = start + 1.0;
    }
    let start = start.max(0.0);
    let end = end.min(limit as f64);
    if end <= start {
        return None;
    }
    Some((start as usize, end as usize))
}
