//! Month title shown above each month, e.g. "January 2026".

use serde::{Deserialize, Serialize};

use super::layers::Label;
use crate::appearance::Appearance;
use crate::canvas::Canvas;
use crate::geometry::{DirectionalEdgeInsets, LayoutDirection, Rect};
use crate::item::{Accessible, ItemView, LayoutMode, ViewBase};
use crate::style::{AccessibilityTraits, Font, TextAlignment};
use crate::theme::{self, ThemeColor};

/// Configuration that cannot change after a [`MonthHeaderView`] is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InvariantViewProperties {
    /// Fills the entire view, unaffected by `edge_insets`.
    pub background_color: ThemeColor,
    /// Pins the label inside the view's edges.
    pub edge_insets: DirectionalEdgeInsets,
    pub font: Font,
    pub text_alignment: TextAlignment,
    pub text_color: ThemeColor,
    pub accessibility_traits: AccessibilityTraits,
}

impl InvariantViewProperties {
    #[must_use]
    pub fn base() -> Self {
        Self {
            background_color: theme::CLEAR,
            edge_insets: DirectionalEdgeInsets::ZERO,
            font: Font::system(22.0),
            text_alignment: TextAlignment::Natural,
            text_color: theme::LABEL,
            accessibility_traits: AccessibilityTraits::HEADER,
        }
    }
}

impl Default for InvariantViewProperties {
    fn default() -> Self {
        Self::base()
    }
}

/// Per-cell data for a [`MonthHeaderView`].
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

/// Month title whose label only shows in vertical layouts.
///
/// Between construction and the first content the label follows [`LayoutMode::FALLBACK`], so a
/// freshly built header starts hidden until content says otherwise.
#[derive(Debug, Clone)]
pub struct MonthHeaderView {
    base: ViewBase,
    invariant_properties: InvariantViewProperties,
    layout_mode: Option<LayoutMode>,
    label: Label,
}

impl MonthHeaderView {
    fn new(invariant_properties: InvariantViewProperties) -> Self {
        let label = Label::new(
            invariant_properties.font,
            invariant_properties.text_alignment,
            invariant_properties.text_color,
        );

        let mut view = Self {
            base: ViewBase::default(),
            invariant_properties,
            layout_mode: None,
            label,
        };
        view.update_visibility();
        view
    }

    fn set_content(&mut self, content: Content) {
        self.label.text = content.text;
        self.base.accessibility_label = content.accessibility_label;
        self.layout_mode = Some(content.layout_mode);
        self.update_visibility();
    }

    fn update_visibility(&mut self) {
        self.label.is_hidden = match self.effective_layout_mode() {
            LayoutMode::Vertical => false,
            LayoutMode::Horizontal => true,
        };
    }

    fn layout_subviews(&mut self) {
        self.label.frame = self.base.bounds().inset_by(
            self.invariant_properties.edge_insets,
            self.base.layout_direction,
        );
        tracing::trace!(label_frame = ?self.label.frame, "month header layout pass");
    }

    #[must_use]
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.layout_mode
    }

    #[must_use]
    pub fn effective_layout_mode(&self) -> LayoutMode {
        self.layout_mode.unwrap_or(LayoutMode::FALLBACK)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.label.text
    }

    #[must_use]
    pub fn is_label_hidden(&self) -> bool {
        self.label.is_hidden
    }

    #[must_use]
    pub fn label_frame(&self) -> Rect {
        self.label.frame
    }

    #[must_use]
    pub fn background_color(&self) -> ThemeColor {
        self.invariant_properties.background_color
    }
}

impl ItemView for MonthHeaderView {
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
        if self.base.set_frame(frame) {
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
        canvas.fill_rect(
            frame,
            self.invariant_properties.background_color.resolve(appearance),
        );
        self.label
            .draw(canvas, frame, self.base.layout_direction, appearance);
    }
}

impl Accessible for MonthHeaderView {
    fn is_accessibility_element(&self) -> bool {
        true
    }

    fn accessibility_traits(&self) -> AccessibilityTraits {
        self.invariant_properties.accessibility_traits
    }

    fn accessibility_label(&self) -> Option<&str> {
        self.base.accessibility_label.as_deref()
    }
}
