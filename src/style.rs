use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use ratatui::layout::Alignment;
use ratatui::style::Modifier;
use serde::{Deserialize, Serialize};

use crate::geometry::{LayoutDirection, canonical_bits};
use crate::theme::{self, ThemeColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Font request handed to the text backend. Terminal backends only honor the weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    #[must_use]
    pub const fn system(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    #[must_use]
    pub const fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    #[must_use]
    pub fn modifier(&self) -> Modifier {
        match self.weight {
            FontWeight::Light => Modifier::DIM,
            FontWeight::Regular | FontWeight::Medium => Modifier::empty(),
            FontWeight::Semibold | FontWeight::Bold => Modifier::BOLD,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.size) == canonical_bits(other.size) && self.weight == other.weight
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.size).hash(state);
        self.weight.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    /// Leading edge of the current writing direction.
    #[default]
    Natural,
    Left,
    Center,
    Right,
}

impl TextAlignment {
    #[must_use]
    pub fn resolve(self, direction: LayoutDirection) -> Alignment {
        match (self, direction) {
            (Self::Natural, LayoutDirection::LeftToRight) | (Self::Left, _) => Alignment::Left,
            (Self::Natural, LayoutDirection::RightToLeft) | (Self::Right, _) => Alignment::Right,
            (Self::Center, _) => Alignment::Center,
        }
    }
}

bitflags! {
    /// Accessibility trait set, combinable with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AccessibilityTraits: u32 {
        const BUTTON = 1 << 0;
        const HEADER = 1 << 1;
        const STATIC_TEXT = 1 << 2;
        const SELECTED = 1 << 3;
        const NOT_ENABLED = 1 << 4;
    }
}

/// Stroke parameters for a background shape layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    pub border_color: ThemeColor,
    pub border_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            border_color: theme::CLEAR,
            border_width: 1.0,
        }
    }
}

impl DrawingConfig {
    /// Whether a stroke would be visible at all.
    #[must_use]
    pub fn has_border(&self) -> bool {
        !self.border_color.is_clear() && self.border_width > 0.0
    }
}

impl PartialEq for DrawingConfig {
    fn eq(&self, other: &Self) -> bool {
        self.border_color == other.border_color
            && canonical_bits(self.border_width) == canonical_bits(other.border_width)
    }
}

impl Eq for DrawingConfig {}

impl Hash for DrawingConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.border_color.hash(state);
        canonical_bits(self.border_width).hash(state);
    }
}
