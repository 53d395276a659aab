use crate::types::{Rgb, Style, TextStyle};

/// One character position on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a wide character drawn in the cell to the left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Apply a style on top of this cell. Unset colors keep the cell's current ones.
    pub fn with_style(mut self, style: Style) -> Self {
        if let Some(fg) = style.foreground {
            self.fg = fg;
        }
        if let Some(bg) = style.background {
            self.bg = bg;
        }
        self.style = style.text_style;
        self
    }
}
