//! The recycling contract between a pooling host and the views it reuses.
//!
//! A host keeps views keyed by their [`ItemView::InvariantProperties`]. For each visible cell it
//! takes (or constructs) a view for the cell's properties, applies the cell's content, then sets
//! the view's frame, which recomputes the view's internal geometry.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::appearance::Appearance;
use crate::canvas::Canvas;
use crate::geometry::{LayoutDirection, Rect};
use crate::style::AccessibilityTraits;

/// How the calendar arranges its months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    Horizontal,
    Vertical,
}

impl LayoutMode {
    /// Used before any content has told a view which layout it lives in.
    pub const FALLBACK: LayoutMode = LayoutMode::Horizontal;

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A view that a host can pool by invariant properties and repopulate with content.
///
/// Constructing is the expensive step: it applies every invariant property. Applying content only
/// touches what may differ between reuses. Views are not `Deserialize`; they can only come from
/// [`ItemView::construct`].
pub trait ItemView: Sized {
    /// Configuration fixed for the lifetime of a view; also the pool key.
    type InvariantProperties: Clone + Eq + Hash + Debug;
    /// Per-cell data, fully replacing the view's visible state on each reuse.
    type Content: Clone + PartialEq + Debug;

    fn construct(invariant_properties: Self::InvariantProperties) -> Self;

    fn apply_content(content: Self::Content, view: &mut Self);

    fn invariant_properties(&self) -> &Self::InvariantProperties;

    fn frame(&self) -> Rect;

    /// Positions the view; a size change reruns the view's layout pass.
    fn set_frame(&mut self, frame: Rect);

    fn set_layout_direction(&mut self, direction: LayoutDirection);

    /// Renders the view at its frame.
    fn draw(&self, canvas: &mut dyn Canvas, appearance: Appearance);
}

/// Accessibility surface of an item view.
///
/// The setters exist for hosts that configure accessibility generically; views whose values are
/// projections of their invariant properties ignore them.
pub trait Accessible {
    fn is_accessibility_element(&self) -> bool;

    fn set_is_accessibility_element(&mut self, _value: bool) {}

    fn accessibility_traits(&self) -> AccessibilityTraits;

    fn set_accessibility_traits(&mut self, _traits: AccessibilityTraits) {}

    fn accessibility_label(&self) -> Option<&str>;
}

/// State every item view carries regardless of kind.
#[derive(Debug, Clone, Default)]
pub(crate) struct ViewBase {
    pub frame: Rect,
    pub layout_direction: LayoutDirection,
    pub accessibility_label: Option<String>,
}

impl ViewBase {
    /// Stores the frame, returning whether a layout pass is needed.
    pub fn set_frame(&mut self, frame: Rect) -> bool {
        let resized = frame.size != self.frame.size;
        self.frame = frame;
        resized
    }

    /// Stores the direction, returning whether a layout pass is needed.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) -> bool {
        let changed = direction != self.layout_direction;
        self.layout_direction = direction;
        changed
    }

    /// Local bounds, origin at zero.
    pub fn bounds(&self) -> Rect {
        self.frame.local_bounds()
    }
}
