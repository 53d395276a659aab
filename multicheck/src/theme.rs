//! Default palette shared by all primitives.

use tuigrid::Rgb;

/// Colors a primitive falls back to when its owner does not set them.
///
/// The palette is shared by every primitive, so it carries roles the
/// multi-checkbox itself never reads (`more_contrast_background`, `graphics`,
/// `tertiary_text`, `inverse_text`, `contrast_secondary_text`).
///
/// A `Styles` value is passed to constructors instead of living in a global,
/// so two controls can be built from different palettes side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Main background of every primitive.
    pub primitive_background: Rgb,
    /// Background of input areas and other contrasting elements.
    pub contrast_background: Rgb,
    /// Background for elements that must stand out even more.
    pub more_contrast_background: Rgb,
    pub border: Rgb,
    pub title: Rgb,
    /// Lines and other graphical elements.
    pub graphics: Rgb,
    pub primary_text: Rgb,
    /// Labels and similar secondary text.
    pub secondary_text: Rgb,
    pub tertiary_text: Rgb,
    /// Text on a primary-text colored background.
    pub inverse_text: Rgb,
    /// Secondary text on a contrast background.
    pub contrast_secondary_text: Rgb,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            primitive_background: Rgb::BLACK,
            contrast_background: Rgb::BLUE,
            more_contrast_background: Rgb::GREEN,
            border: Rgb::WHITE,
            title: Rgb::WHITE,
            graphics: Rgb::WHITE,
            primary_text: Rgb::WHITE,
            secondary_text: Rgb::YELLOW,
            tertiary_text: Rgb::GREEN,
            inverse_text: Rgb::BLUE,
            contrast_secondary_text: Rgb::hex(0x008b8b),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitive_background(mut self, color: Rgb) -> Self {
        self.primitive_background = color;
        self
    }

    pub fn contrast_background(mut self, color: Rgb) -> Self {
        self.contrast_background = color;
        self
    }

    pub fn border(mut self, color: Rgb) -> Self {
        self.border = color;
        self
    }

    pub fn title(mut self, color: Rgb) -> Self {
        self.title = color;
        self
    }

    pub fn primary_text(mut self, color: Rgb) -> Self {
        self.primary_text = color;
        self
    }

    pub fn secondary_text(mut self, color: Rgb) -> Self {
        self.secondary_text = color;
        self
    }
}
