use super::{Rgb, TextStyle};

/// Colors and attributes applied to a cell. `None` leaves the cell's color untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    /// Swap foreground and background.
    pub fn reverse(self) -> Self {
        Self {
            background: self.foreground,
            foreground: self.background,
            ..self
        }
    }
}
