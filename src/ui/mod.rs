mod footer;
mod strip;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect as CellRect},
    widgets::Paragraph,
};

use crate::app::App;
use crate::geometry::Rect;

pub use footer::{render_footer, render_status};
pub use strip::{HeaderStrip, MONTH_HEADER_ROWS, WEEKDAY_ROWS};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const STRIP_ROWS: u16 = (MONTH_HEADER_ROWS + WEEKDAY_ROWS) as u16;

pub fn render_app(f: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STRIP_ROWS),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let strip_area = chunks[0];
    app.prepare_strip(points_for(strip_area, app));
    app.strip.render(strip_area, f.buffer_mut(), app.appearance);

    f.render_widget(Paragraph::new(render_status(app)), chunks[2]);
    f.render_widget(Paragraph::new(render_footer(app)), chunks[3]);
}

/// Point-space bounds of a cell area, anchored at the origin of the canvas.
fn points_for(area: CellRect, app: &App) -> Rect {
    let cell = app.config.cell_size();
    Rect::new(
        0.0,
        0.0,
        f64::from(area.width) * cell.width,
        f64::from(area.height) * cell.height,
    )
}
