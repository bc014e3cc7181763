use crate::appearance::Appearance;
use crate::canvas::{Canvas, Stroke, TextStyle};
use crate::geometry::{LayoutDirection, Rect, ShapePath};
use crate::style::{DrawingConfig, Font, TextAlignment};
use crate::theme::{self, ThemeColor};

/// A single-line text run positioned inside its owning view.
#[derive(Debug, Clone)]
pub(crate) struct Label {
    pub text: String,
    pub frame: Rect,
    pub font: Font,
    pub alignment: TextAlignment,
    pub color: ThemeColor,
    pub is_hidden: bool,
}

impl Label {
    pub fn new(font: Font, alignment: TextAlignment, color: ThemeColor) -> Self {
        Self {
            text: String::new(),
            frame: Rect::ZERO,
            font,
            alignment,
            color,
            is_hidden: false,
        }
    }

    /// Draws relative to the owning view's frame.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        view_frame: Rect,
        direction: LayoutDirection,
        appearance: Appearance,
    ) {
        if self.is_hidden || self.text.is_empty() {
            return;
        }
        let style = TextStyle {
            font: self.font,
            alignment: self.alignment.resolve(direction),
            color: self.color.resolve(appearance),
        };
        let rect = self.frame.offset(view_frame.origin.x, view_frame.origin.y);
        canvas.draw_text(&self.text, rect, &style);
    }
}

/// A filled and optionally stroked path drawn behind a view's label.
#[derive(Debug, Clone)]
pub(crate) struct ShapeLayer {
    pub path: Option<ShapePath>,
    pub fill_color: ThemeColor,
    pub stroke: DrawingConfig,
}

impl ShapeLayer {
    pub fn new(stroke: DrawingConfig) -> Self {
        Self {
            path: None,
            fill_color: theme::CLEAR,
            stroke,
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, view_frame: Rect, appearance: Appearance) {
        let Some(path) = self.path else {
            return;
        };
        let stroke = self.stroke.has_border().then(|| Stroke {
            color: self.stroke.border_color.resolve(appearance),
            width: self.stroke.border_width,
        });
        let path = path.translated(view_frame.origin.x, view_frame.origin.y);
        canvas.draw_shape(&path, self.fill_color.resolve(appearance), stroke);
    }
}
