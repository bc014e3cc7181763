use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Bit pattern used for float equality and hashing, with `-0.0` folded into `0.0`.
#[must_use]
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in points, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Clamps negative or non-finite extents to zero so degenerate insets yield an empty rect
    /// anchored at the original origin rather than an inverted one.
    #[must_use]
    pub fn standardized(self) -> Self {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            origin: self.origin,
            size: Size::new(clamp(self.size.width), clamp(self.size.height)),
        }
    }

    /// Bounds of this rect in its own coordinate space.
    #[must_use]
    pub fn local_bounds(&self) -> Self {
        Self {
            origin: Point::default(),
            size: self.size,
        }
    }

    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Shrinks the rect by directional insets, resolving leading/trailing for `direction`.
    #[must_use]
    pub fn inset_by(&self, insets: DirectionalEdgeInsets, direction: LayoutDirection) -> Self {
        let (left, right) = insets.horizontal(direction);
        Self::new(
            self.origin.x + left,
            self.origin.y + insets.top,
            self.size.width - left - right,
            self.size.height - insets.top - insets.bottom,
        )
        .standardized()
    }

    /// Uniform inset on all four edges.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        self.inset_by(
            DirectionalEdgeInsets::uniform(amount),
            LayoutDirection::LeftToRight,
        )
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// Writing direction used to resolve leading and trailing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Edge insets expressed in writing-direction-aware terms.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalEdgeInsets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl DirectionalEdgeInsets {
    pub const ZERO: DirectionalEdgeInsets = DirectionalEdgeInsets::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    #[must_use]
    pub const fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Physical `(left, right)` insets for the given writing direction.
    #[must_use]
    pub fn horizontal(&self, direction: LayoutDirection) -> (f64, f64) {
        match direction {
            LayoutDirection::LeftToRight => (self.leading, self.trailing),
            LayoutDirection::RightToLeft => (self.trailing, self.leading),
        }
    }
}

impl PartialEq for DirectionalEdgeInsets {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.top) == canonical_bits(other.top)
            && canonical_bits(self.leading) == canonical_bits(other.leading)
            && canonical_bits(self.bottom) == canonical_bits(other.bottom)
            && canonical_bits(self.trailing) == canonical_bits(other.trailing)
    }
}

impl Eq for DirectionalEdgeInsets {}

impl Hash for DirectionalEdgeInsets {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.top).hash(state);
        canonical_bits(self.leading).hash(state);
        canonical_bits(self.bottom).hash(state);
        canonical_bits(self.trailing).hash(state);
    }
}

/// A closed path filling a rectangle, as assigned to a background shape layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePath {
    Ellipse { rect: Rect },
    RoundedRect { rect: Rect, corner_radius: f64 },
}

impl ShapePath {
    #[must_use]
    pub fn ellipse(rect: Rect) -> Self {
        Self::Ellipse {
            rect: rect.standardized(),
        }
    }

    /// Rounded rectangle; the radius is clamped to half the shorter side.
    #[must_use]
    pub fn rounded_rect(rect: Rect, corner_radius: f64) -> Self {
        let rect = rect.standardized();
        let max_radius = rect.size.width.min(rect.size.height) / 2.0;
        let corner_radius = if corner_radius.is_finite() {
            corner_radius.clamp(0.0, max_radius)
        } else {
            0.0
        };
        Self::RoundedRect {
            rect,
            corner_radius,
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Ellipse { rect } | Self::RoundedRect { rect, .. } => *rect,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Self::Ellipse { rect } => {
                if rect.is_empty() {
                    return false;
                }
                let center = rect.center();
                let rx = rect.size.width / 2.0;
                let ry = rect.size.height / 2.0;
                let nx = (point.x - center.x) / rx;
                let ny = (point.y - center.y) / ry;
                nx * nx + ny * ny <= 1.0
            }
            Self::RoundedRect {
                rect,
                corner_radius,
            } => {
                if rect.is_empty() || !rect.contains(point) {
                    return false;
                }
                let r = corner_radius;
                if r <= 0.0 {
                    return true;
                }
                // Distance from the point to the inner rectangle the corner arcs are centered on.
                let dx = (rect.min_x() + r - point.x).max(point.x - (rect.max_x() - r)).max(0.0);
                let dy = (rect.min_y() + r - point.y).max(point.y - (rect.max_y() - r)).max(0.0);
                dx * dx + dy * dy <= r * r
            }
        }
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match *self {
            Self::Ellipse { rect } => Self::Ellipse {
                rect: rect.offset(dx, dy),
            },
            Self::RoundedRect {
                rect,
                corner_radius,
            } => Self::RoundedRect {
                rect: rect.offset(dx, dy),
                corner_radius,
            },
        }
    }

    /// The same shape shrunk inward by `amount`, used to find the stroke band.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        match *self {
            Self::Ellipse { rect } => Self::ellipse(rect.inset(amount)),
            Self::RoundedRect {
                rect,
                corner_radius,
            } => Self::rounded_rect(rect.inset(amount), (corner_radius - amount).max(0.0)),
        }
    }
}
