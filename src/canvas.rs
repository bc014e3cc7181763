use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect as CellRect};
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::geometry::{Point, Rect, ShapePath, Size};
use crate::style::Font;

/// Points covered by one terminal cell when no config overrides it.
pub const DEFAULT_CELL_SIZE: Size = Size::new(6.0, 12.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub alignment: Alignment,
    pub color: Color,
}

/// Drawing backend that item views render through. Coordinates are in points.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_shape(&mut self, path: &ShapePath, fill: Color, stroke: Option<Stroke>);

    /// Draws a single line of text inside `rect`, vertically centered.
    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle);
}

/// Rasterizes into a ratatui [`Buffer`], sampling each cell at its center.
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: CellRect,
    cell: Size,
}

impl<'a> BufferCanvas<'a> {
    /// `area` is where point (0, 0) lands and clips all drawing.
    #[must_use]
    pub fn new(buf: &'a mut Buffer, area: CellRect, cell: Size) -> Self {
        let area = area.intersection(buf.area);
        Self { buf, area, cell }
    }

    /// Point size of the drawable area.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.area.width) * self.cell.width,
            f64::from(self.area.height) * self.cell.height,
        )
    }

    fn cell_center(&self, col: u16, row: u16) -> Point {
        Point::new(
            (f64::from(col - self.area.x) + 0.5) * self.cell.width,
            (f64::from(row - self.area.y) + 0.5) * self.cell.height,
        )
    }

    /// Cells whose centers fall inside `rect`, clipped to the area, in row-major order.
    fn cells_in(&self, rect: Rect) -> Vec<(u16, u16)> {
        let to_col = |x: f64| self.to_cell(x, self.cell.width, self.area.x, self.area.width);
        let to_row = |y: f64| self.to_cell(y, self.cell.height, self.area.y, self.area.height);
        let (x0, x1) = (to_col(rect.min_x()), to_col(rect.max_x() + self.cell.width));
        let (y0, y1) = (to_row(rect.min_y()), to_row(rect.max_y() + self.cell.height));
        (y0..y1)
            .flat_map(|row| (x0..x1).map(move |col| (col, row)))
            .filter(|&(col, row)| rect.contains(self.cell_center(col, row)))
            .collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_cell(&self, value: f64, unit: f64, start: u16, len: u16) -> u16 {
        if unit <= 0.0 {
            return start;
        }
        let index = (value / unit).floor().clamp(0.0, f64::from(len)) as u16;
        start + index
    }

    fn paint(&mut self, col: u16, row: u16, color: Color) {
        if let Some(cell) = self.buf.cell_mut((col, row)) {
            cell.set_bg(color);
        }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color == Color::Reset || rect.is_empty() {
            return;
        }
        for (col, row) in self.cells_in(rect) {
            self.paint(col, row, color);
        }
    }

    fn draw_shape(&mut self, path: &ShapePath, fill: Color, stroke: Option<Stroke>) {
        let inner = stroke.map(|s| path.inset(s.width));
        for (col, row) in self.cells_in(path.bounding_box()) {
            let center = self.cell_center(col, row);
            if !path.contains(center) {
                continue;
            }
            match (stroke, inner) {
                (Some(stroke), Some(inner)) if !inner.contains(center) => {
                    self.paint(col, row, stroke.color);
                }
                _ if fill != Color::Reset => self.paint(col, row, fill),
                _ => {}
            }
        }
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) {
        if text.is_empty() || rect.is_empty() {
            return;
        }
        let cells = self.cells_in(rect);
        let Some(&(first_col, first_row)) = cells.first() else {
            return;
        };
        let Some(&(last_col, last_row)) = cells.last() else {
            return;
        };
        let columns = usize::from(last_col.saturating_sub(first_col)) + 1;
        let row = first_row + last_row.saturating_sub(first_row) / 2;

        let text_width = text.width().min(columns);
        let slack = columns - text_width;
        let offset = match style.alignment {
            Alignment::Left => 0,
            Alignment::Center => slack / 2,
            Alignment::Right => slack,
        };

        #[allow(clippy::cast_possible_truncation)]
        let x = first_col + offset as u16;
        let text_style = Style::default()
            .fg(style.color)
            .add_modifier(style.font.modifier());
        self.buf.set_stringn(x, row, text, columns - offset, text_style);
    }
}
