#![allow(dead_code)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, style::Color};

use monthgrid::app::App;
use monthgrid::appearance::Appearance;
use monthgrid::canvas::{Canvas, Stroke, TextStyle};
use monthgrid::config::Config;
use monthgrid::geometry::{Rect, ShapePath};
use monthgrid::{handlers, ui};

/// One call made against a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Shape {
        path: ShapePath,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Text {
        text: String,
        rect: Rect,
        style: TextStyle,
    },
}

/// Canvas that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn shapes(&self) -> Vec<&ShapePath> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Shape { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_shape(&mut self, path: &ShapePath, fill: Color, stroke: Option<Stroke>) {
        self.ops.push(DrawOp::Shape {
            path: *path,
            fill,
            stroke,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            rect,
            style: *style,
        });
    }
}

pub struct TestContext {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let app = App::new_with_date(config, Appearance::Dark, date);
        let terminal = Terminal::new(TestBackend::new(84, 12)).expect("Failed to create terminal");
        Self { app, terminal }
    }

    pub fn press(&mut self, key: KeyCode) {
        handlers::handle_key(&mut self.app, KeyEvent::new(key, KeyModifiers::NONE));
    }

    pub fn draw(&mut self) {
        let app = &mut self.app;
        self.terminal
            .draw(|f| ui::render_app(f, app))
            .expect("Failed to draw");
    }

    pub fn screen_lines(&mut self) -> Vec<String> {
        self.draw();
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    pub fn screen_contains(&mut self, text: &str) -> bool {
        self.screen_lines().iter().any(|line| line.contains(text))
    }

    pub fn background_at(&mut self, x: u16, y: u16) -> Color {
        self.draw();
        self.terminal.backend().buffer()[(x, y)].bg
    }
}
