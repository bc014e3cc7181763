use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;

use crate::appearance::Appearance;
use crate::canvas::{BufferCanvas, Canvas};
use crate::config::Config;
use crate::geometry::{Rect, Size};
use crate::item::{ItemView, LayoutMode};
use crate::labels;
use crate::pool::{PoolStats, ReusePool};
use crate::theme;
use crate::views::{CalendarItemContent, CalendarItemProperties, CalendarItemView};

/// Header rows expressed in terminal rows, converted to points with the cell size.
pub const MONTH_HEADER_ROWS: f64 = 3.0;
pub const WEEKDAY_ROWS: f64 = 3.0;

/// Hosts one month header above a row of weekday headers, recycling views through a pool.
pub struct HeaderStrip {
    pool: ReusePool<CalendarItemView>,
    visible: Vec<CalendarItemView>,
    cell: Size,
}

impl HeaderStrip {
    #[must_use]
    pub fn new(cell: Size) -> Self {
        Self {
            pool: ReusePool::new(),
            visible: Vec::new(),
            cell,
        }
    }

    /// Recycles the current items and lays out fresh ones for `month` inside `bounds`.
    pub fn layout(
        &mut self,
        bounds: Rect,
        month: NaiveDate,
        layout_mode: LayoutMode,
        config: &Config,
    ) {
        for view in self.visible.drain(..) {
            self.pool.enqueue(view);
        }

        let header_height = MONTH_HEADER_ROWS * self.cell.height;
        let weekday_height = WEEKDAY_ROWS * self.cell.height;

        let header_key = CalendarItemProperties::MonthHeader(config.month_header.clone());
        let header_content =
            CalendarItemContent::MonthHeader(labels::month_header_content(month, layout_mode));
        let header_frame = Rect::new(
            bounds.min_x(),
            bounds.min_y(),
            bounds.size.width,
            header_height,
        );
        self.place(&header_key, header_content, header_frame, config);

        let day_key = CalendarItemProperties::DayOfWeek(config.day_of_week.clone());
        let column_width = bounds.size.width / 7.0;
        let week = labels::week_starting(config.first_weekday);
        for (index, weekday) in week.into_iter().enumerate() {
            let content = CalendarItemContent::DayOfWeek(labels::day_of_week_content(
                weekday,
                config.weekday_symbols,
                layout_mode,
            ));
            #[allow(clippy::cast_precision_loss)]
            let x = bounds.min_x() + column_width * index as f64;
            let frame = Rect::new(x, bounds.min_y() + header_height, column_width, weekday_height);
            self.place(&day_key, content, frame, config);
        }

        tracing::debug!(
            %month,
            ?layout_mode,
            visible = self.visible.len(),
            stats = ?self.pool.stats(),
            "header strip laid out"
        );
    }

    fn place(
        &mut self,
        key: &CalendarItemProperties,
        content: CalendarItemContent,
        frame: Rect,
        config: &Config,
    ) {
        let mut view = self.pool.dequeue_with_content(key, content);
        view.set_layout_direction(config.layout_direction);
        view.set_frame(frame);
        self.visible.push(view);
    }

    pub fn render(&self, area: CellRect, buf: &mut Buffer, appearance: Appearance) {
        let mut canvas = BufferCanvas::new(buf, area, self.cell);
        let backdrop = canvas.bounds();
        canvas.fill_rect(backdrop, theme::GLOBAL_BACKGROUND.resolve(appearance));
        for view in &self.visible {
            view.draw(&mut canvas, appearance);
        }
    }

    #[must_use]
    pub fn visible(&self) -> &[CalendarItemView] {
        &self.visible
    }

    #[must_use]
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Point height the strip needs.
    #[must_use]
    pub fn height(&self) -> f64 {
        (MONTH_HEADER_ROWS + WEEKDAY_ROWS) * self.cell.height
    }
}
