use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::appearance::Appearance;

// Palette primitives
pub const WHITE_D1: Color = Color::Rgb(255, 255, 255);
pub const WHITE_D2: Color = Color::Rgb(246, 246, 246);
pub const BLACK_D1: Color = Color::Rgb(15, 15, 15);
pub const GRAY_D1: Color = Color::Rgb(30, 30, 31);

/// Backdrop shared by the whole calendar.
pub const GLOBAL_BACKGROUND: ThemeColor = resolve_theme_color(WHITE_D2, BLACK_D1);

/// One elevation step above the global background.
pub const GLOBAL_FIRST_LAYER: ThemeColor = resolve_theme_color(WHITE_D1, GRAY_D1);

// Text colors
pub const LABEL: ThemeColor = resolve_theme_color(Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255));
pub const SECONDARY_LABEL: ThemeColor =
    resolve_theme_color(Color::Rgb(120, 120, 128), Color::Rgb(152, 152, 159));

/// No fill; lets whatever is behind show through.
pub const CLEAR: ThemeColor = ThemeColor::fixed(Color::Reset);

/// A color that tracks the light/dark appearance of the rendering environment.
///
/// Resolution is explicit: callers pass the active [`Appearance`] to [`ThemeColor::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ThemeColorRepr", into = "ThemeColorRepr")]
pub struct ThemeColor {
    pub light: Color,
    pub dark: Color,
}

impl ThemeColor {
    /// A color that is the same in both appearances.
    #[must_use]
    pub const fn fixed(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    #[must_use]
    pub const fn resolve(self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.light == Color::Reset && self.dark == Color::Reset
    }
}

impl From<Color> for ThemeColor {
    fn from(color: Color) -> Self {
        Self::fixed(color)
    }
}

/// Builds a color that returns `light` or `dark` depending on the active appearance.
#[must_use]
pub const fn resolve_theme_color(light: Color, dark: Color) -> ThemeColor {
    ThemeColor { light, dark }
}

/// Config form: either a single color or a `{ light, dark }` table.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ThemeColorRepr {
    Fixed(Color),
    Dynamic { light: Color, dark: Color },
}

impl From<ThemeColorRepr> for ThemeColor {
    fn from(repr: ThemeColorRepr) -> Self {
        match repr {
            ThemeColorRepr::Fixed(color) => Self::fixed(color),
            ThemeColorRepr::Dynamic { light, dark } => resolve_theme_color(light, dark),
        }
    }
}

impl From<ThemeColor> for ThemeColorRepr {
    fn from(color: ThemeColor) -> Self {
        if color.light == color.dark {
            Self::Fixed(color.light)
        } else {
            Self::Dynamic {
                light: color.light,
                dark: color.dark,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_resolves_per_appearance() {
        assert_eq!(GLOBAL_BACKGROUND.resolve(Appearance::Light), WHITE_D2);
        assert_eq!(GLOBAL_BACKGROUND.resolve(Appearance::Dark), BLACK_D1);
        assert_eq!(GLOBAL_FIRST_LAYER.resolve(Appearance::Light), WHITE_D1);
        assert_eq!(GLOBAL_FIRST_LAYER.resolve(Appearance::Dark), GRAY_D1);
    }

    #[test]
    fn fixed_color_ignores_appearance() {
        let color = ThemeColor::fixed(Color::Red);
        assert_eq!(color.resolve(Appearance::Light), Color::Red);
        assert_eq!(color.resolve(Appearance::Dark), Color::Red);
    }

    #[test]
    fn clear_is_clear() {
        assert!(CLEAR.is_clear());
        assert!(!GLOBAL_BACKGROUND.is_clear());
    }
}
