//! Colors, label fonts and selection shapes used by the picker.
//!
//! The core model is framework-free: colors are plain `Rgba` values so that
//! appearance resolution can be tested without a renderer. The `gui` feature
//! adds the conversion into `iced::Color`.

use serde::Deserialize;

/// An RGBA color with `0.0..=1.0` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(feature = "gui")]
impl From<Rgba> for iced::Color {
    fn from(c: Rgba) -> Self {
        iced::Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}

// Day label colors
pub const IN_MONTH_TEXT: Rgba = Rgba::rgb(0.96, 0.97, 0.99);
pub const OUT_OF_MONTH_TEXT: Rgba = Rgba::rgb(0.45, 0.48, 0.55);
pub const UNAVAILABLE_TEXT: Rgba = Rgba::rgb(0.32, 0.34, 0.4);
pub const TODAY_TEXT: Rgba = Rgba::rgb(0.35, 0.65, 0.95);
pub const SELECTED_TEXT: Rgba = Rgba::rgb(0.98, 0.99, 1.0);

// Day cell backgrounds
pub const IN_MONTH_BG: Rgba = Rgba::rgb(0.09, 0.11, 0.15);
pub const OUT_OF_MONTH_BG: Rgba = Rgba::rgb(0.06, 0.075, 0.1);
pub const UNAVAILABLE_BG: Rgba = Rgba::rgb(0.07, 0.08, 0.11);

// Selection indicator fills
pub const SELECTION_FILL: Rgba = Rgba::rgb(0.35, 0.65, 0.95);
pub const SEMI_SELECTION_FILL: Rgba = Rgba::rgba(0.35, 0.65, 0.95, 0.45);

// Weekday header row
pub const WEEKDAY_HEADER_TEXT: Rgba = Rgba::rgb(0.6, 0.63, 0.7);
pub const WEEKDAY_HEADER_BG: Rgba = Rgba::rgb(0.05, 0.06, 0.09);

/// Preferred size of the day label relative to the cell.
///
/// The resolved pixel size is `min(cell_w, cell_h)` divided by the scale's
/// divisor, so labels track the cell size across window resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontScale {
    VerySmall,
    Small,
    #[default]
    Medium,
    Large,
    VeryLarge,
}

impl FontScale {
    fn divisor(self) -> f32 {
        match self {
            FontScale::VerySmall => 3.5,
            FontScale::Small => 3.0,
            FontScale::Medium => 2.5,
            FontScale::Large => 2.0,
            FontScale::VeryLarge => 1.5,
        }
    }

    /// Label pixel size for a cell of the given dimensions.
    pub fn size_for(self, cell_width: f32, cell_height: f32) -> f32 {
        cell_width.min(cell_height) / self.divisor()
    }
}

/// Font preference for day labels. An empty/absent family means the
/// renderer's default font.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelFont {
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub scale: FontScale,
}

/// Shape of the committed and preview selection indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionShape {
    #[default]
    Circle,
    Square,
    RoundedRect,
    FullCell,
}
