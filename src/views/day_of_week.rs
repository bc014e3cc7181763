//! Day-of-the-week header, e.g. "Sun", "Mon", "Tue", drawn over a circular or rounded
//! rectangular badge.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::layers::{Label, ShapeLayer};
use crate::appearance::Appearance;
use crate::canvas::Canvas;
use crate::geometry::{DirectionalEdgeInsets, LayoutDirection, Rect, ShapePath, canonical_bits};
use crate::item::{Accessible, ItemView, LayoutMode, ViewBase};
use crate::style::{AccessibilityTraits, DrawingConfig, Font, TextAlignment};
use crate::theme::{self, ThemeColor};

/// Outline of the background layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Shape {
    #[default]
    Circle,
    Rectangle { corner_radius: f64 },
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Circle, Self::Circle) => true,
            (Self::Rectangle { corner_radius: a }, Self::Rectangle { corner_radius: b }) => {
                canonical_bits(*a) == canonical_bits(*b)
            }
            _ => false,
        }
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Self::Rectangle { corner_radius } = self {
            canonical_bits(*corner_radius).hash(state);
        }
    }
}

/// Configuration that cannot change after a [`DayOfWeekView`] is constructed.
///
/// Equality and hashing cover every field, so any difference yields a distinct pool key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InvariantViewProperties {
    /// Part of the pool key only. Painting follows the layout mode: first layer when horizontal,
    /// global background when vertical.
    pub background_color: ThemeColor,
    /// Applies to both the badge and the label.
    pub edge_insets: DirectionalEdgeInsets,
    pub shape: Shape,
    /// Stroke of the always-visible badge.
    pub background_shape_drawing_config: DrawingConfig,
    pub font: Font,
    pub text_alignment: TextAlignment,
    pub text_color: ThemeColor,
    /// Individual weekday headers are usually redundant for assistive tech when each day's own
    /// label already names its weekday.
    pub is_accessibility_element: bool,
    pub accessibility_traits: AccessibilityTraits,
}

impl InvariantViewProperties {
    #[must_use]
    pub fn base() -> Self {
        Self {
            background_color: theme::GLOBAL_BACKGROUND,
            edge_insets: DirectionalEdgeInsets::ZERO,
            shape: Shape::Circle,
            background_shape_drawing_config: DrawingConfig::default(),
            font: Font::system(16.0),
            text_alignment: TextAlignment::Center,
            text_color: theme::SECONDARY_LABEL,
            is_accessibility_element: false,
            accessibility_traits: AccessibilityTraits::empty(),
        }
    }
}

impl Default for InvariantViewProperties {
    fn default() -> Self {
        Self::base()
    }
}

/// Per-cell data for a [`DayOfWeekView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub text: String,
    pub accessibility_label: Option<String>,
    pub layout_mode: LayoutMode,
}

impl Content {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        accessibility_label: Option<String>,
        layout_mode: LayoutMode,
    ) -> Self {
        Self {
            text: text.into(),
            accessibility_label,
            layout_mode,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DayOfWeekView {
    base: ViewBase,
    invariant_properties: InvariantViewProperties,
    layout_mode: Option<LayoutMode>,
    background_color: ThemeColor,
    background_layer: ShapeLayer,
    label: Label,
}

impl DayOfWeekView {
    fn new(invariant_properties: InvariantViewProperties) -> Self {
        let background_layer = ShapeLayer::new(invariant_properties.background_shape_drawing_config);
        let label = Label::new(
            invariant_properties.font,
            invariant_properties.text_alignment,
            invariant_properties.text_color,
        );

        let mut view = Self {
            base: ViewBase::default(),
            invariant_properties,
            layout_mode: None,
            background_color: theme::CLEAR,
            background_layer,
            label,
        };
        view.update_layout_styling();
        view
    }

    fn set_content(&mut self, content: Content) {
        self.label.text = content.text;
        self.layout_mode = Some(content.layout_mode);
        self.base.accessibility_label = content.accessibility_label;
        self.update_layout_styling();
    }

    /// Recolors the view and its badge for the current layout mode.
    fn update_layout_styling(&mut self) {
        let color = match self.effective_layout_mode() {
            LayoutMode::Horizontal => theme::GLOBAL_FIRST_LAYER,
            LayoutMode::Vertical => theme::GLOBAL_BACKGROUND,
        };
        self.background_color = color;
        self.background_layer.fill_color = color;
    }

    fn layout_subviews(&mut self) {
        let inset_bounds = self.base.bounds().inset_by(
            self.invariant_properties.edge_insets,
            self.base.layout_direction,
        );

        let path = match self.invariant_properties.shape {
            Shape::Circle => ShapePath::ellipse(inset_bounds),
            Shape::Rectangle { corner_radius } => {
                ShapePath::rounded_rect(inset_bounds, corner_radius)
            }
        };

        self.background_layer.path = Some(path);
        self.label.frame = inset_bounds;
        tracing::trace!(?inset_bounds, "day-of-week layout pass");
    }

    /// Layout mode from the last content, if any has been applied.
    #[must_use]
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.layout_mode
    }

    /// Layout mode currently driving the styling.
    #[must_use]
    pub fn effective_layout_mode(&self) -> LayoutMode {
        self.layout_mode.unwrap_or(LayoutMode::FALLBACK)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.label.text
    }

    #[must_use]
    pub fn label_frame(&self) -> Rect {
        self.label.frame
    }

    /// Path of the badge, available after the first layout pass.
    #[must_use]
    pub fn background_path(&self) -> Option<ShapePath> {
        self.background_layer.path
    }

    #[must_use]
    pub fn background_color(&self) -> ThemeColor {
        self.background_color
    }

    #[must_use]
    pub fn shape_fill_color(&self) -> ThemeColor {
        self.background_layer.fill_color
    }
}

impl ItemView for DayOfWeekView {
    type InvariantProperties = InvariantViewProperties;
    type Content = Content;

    fn construct(invariant_properties: InvariantViewProperties) -> Self {
        Self::new(invariant_properties)
    }

    fn apply_content(content: Content, view: &mut Self) {
        view.set_content(content);
    }

    fn invariant_properties(&self) -> &InvariantViewProperties {
        &self.invariant_properties
    }

    fn frame(&self) -> Rect {
        self.base.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        if self.base.set_frame(frame) || self.background_layer.path.is_none() {
            self.layout_subviews();
        }
    }

    fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.base.set_layout_direction(direction) {
            self.layout_subviews();
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, appearance: Appearance) {
        let frame = self.base.frame;
        canvas.fill_rect(frame, self.background_color.resolve(appearance));
        self.background_layer.draw(canvas, frame, appearance);
        self.label
            .draw(canvas, frame, self.base.layout_direction, appearance);
    }
}

impl Accessible for DayOfWeekView {
    fn is_accessibility_element(&self) -> bool {
        self.invariant_properties.is_accessibility_element
    }

    fn accessibility_traits(&self) -> AccessibilityTraits {
        self.invariant_properties.accessibility_traits
    }

    fn accessibility_label(&self) -> Option<&str> {
        self.base.accessibility_label.as_deref()
    }
}
