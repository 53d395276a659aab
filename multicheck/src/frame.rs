//! The box every primitive is drawn inside: background, border, title, padding and focus.

use std::fmt;

use tuigrid::text::print;
use tuigrid::{Border, Buffer, Edges, KeyEvent, MouseAction, MouseEvent, Rect, Rgb, Style, TextAlign};

use crate::theme::Styles;

type InputCapture = Box<dyn FnMut(KeyEvent) -> Option<KeyEvent>>;
type MouseCapture = Box<dyn FnMut(MouseAction, MouseEvent) -> Option<(MouseAction, MouseEvent)>>;

/// Geometry and decoration shared by all primitives.
///
/// A primitive owns a `Frame`, draws it first, and then draws its own content
/// inside [`Frame::inner_rect`].
pub struct Frame {
    rect: Rect,
    background_color: Rgb,
    border: Border,
    border_color: Rgb,
    title: String,
    title_color: Rgb,
    title_align: TextAlign,
    padding: Edges,
    has_focus: bool,
    input_capture: Option<InputCapture>,
    mouse_capture: Option<MouseCapture>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("rect", &self.rect)
            .field("background_color", &self.background_color)
            .field("border", &self.border)
            .field("title", &self.title)
            .field("padding", &self.padding)
            .field("has_focus", &self.has_focus)
            .finish_non_exhaustive()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(&Styles::default())
    }
}

impl Frame {
    pub fn new(styles: &Styles) -> Self {
        Self {
            rect: Rect::new(0, 0, 15, 10),
            background_color: styles.primitive_background,
            border: Border::None,
            border_color: styles.border,
            title: String::new(),
            title_color: styles.title,
            title_align: TextAlign::Center,
            padding: Edges::default(),
            has_focus: false,
            input_capture: None,
            mouse_capture: None,
        }
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) -> &mut Self {
        self.rect = rect;
        self
    }

    /// Area left for content once the border and padding are taken away.
    pub fn inner_rect(&self) -> Rect {
        let rect = if self.border.is_none() {
            self.rect
        } else {
            self.rect.shrink(1, 1, 1, 1)
        };
        rect.inset(self.padding)
    }

    /// Whether the screen position lies within the frame, border included.
    pub fn in_rect(&self, x: u16, y: u16) -> bool {
        self.rect.contains(x, y)
    }

    pub fn padding(&self) -> Edges {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Edges) -> &mut Self {
        self.padding = padding;
        self
    }

    // -------------------------------------------------------------------------
    // Decoration
    // -------------------------------------------------------------------------

    pub fn background_color(&self) -> Rgb {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Rgb) -> &mut Self {
        self.background_color = color;
        self
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn set_border(&mut self, border: Border) -> &mut Self {
        self.border = border;
        self
    }

    pub fn set_border_color(&mut self, color: Rgb) -> &mut Self {
        self.border_color = color;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_title_color(&mut self, color: Rgb) -> &mut Self {
        self.title_color = color;
        self
    }

    pub fn set_title_align(&mut self, align: TextAlign) -> &mut Self {
        self.title_align = align;
        self
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focus(&mut self) {
        self.has_focus = true;
    }

    pub fn blur(&mut self) {
        self.has_focus = false;
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    // -------------------------------------------------------------------------
    // Input capture
    // -------------------------------------------------------------------------

    /// Install a hook that sees every key before the primitive does. It may
    /// return a different event, or `None` to swallow the key.
    pub fn set_input_capture(
        &mut self,
        capture: impl FnMut(KeyEvent) -> Option<KeyEvent> + 'static,
    ) -> &mut Self {
        self.input_capture = Some(Box::new(capture));
        self
    }

    /// Install a hook that sees every mouse event before the primitive does.
    pub fn set_mouse_capture(
        &mut self,
        capture: impl FnMut(MouseAction, MouseEvent) -> Option<(MouseAction, MouseEvent)> + 'static,
    ) -> &mut Self {
        self.mouse_capture = Some(Box::new(capture));
        self
    }

    pub fn capture_key(&mut self, event: KeyEvent) -> Option<KeyEvent> {
        match self.input_capture.as_mut() {
            Some(capture) => {
                let result = capture(event);
                if result.is_none() {
                    log::trace!("[frame] key {:?} swallowed by input capture", event.key);
                }
                result
            }
            None => Some(event),
        }
    }

    pub fn capture_mouse(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
    ) -> Option<(MouseAction, MouseEvent)> {
        match self.mouse_capture.as_mut() {
            Some(capture) => capture(action, event),
            None => Some((action, event)),
        }
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Fill the background, then draw border and title if a border is set.
    /// A focused frame draws its border with double lines.
    pub fn draw(&self, buf: &mut Buffer) {
        if self.rect.is_empty() {
            return;
        }

        buf.fill(self.rect, Style::new().background(self.background_color));

        if self.rect.width < 2 || self.rect.height < 2 {
            return;
        }
        let border = if self.has_focus && !self.border.is_none() {
            Border::Double
        } else {
            self.border
        };
        let Some((tl, tr, bl, br, h, v)) = border.glyphs() else {
            return;
        };

        let style = Style::new()
            .foreground(self.border_color)
            .background(self.background_color);
        let (left, top) = (self.rect.left(), self.rect.top());
        let right = self.rect.right().saturating_sub(1);
        let bottom = self.rect.bottom().saturating_sub(1);

        for x in left.saturating_add(1)..right {
            buf.set_content(x, top, h, style);
            buf.set_content(x, bottom, h, style);
        }
        for y in top.saturating_add(1)..bottom {
            buf.set_content(left, y, v, style);
            buf.set_content(right, y, v, style);
        }
        buf.set_content(left, top, tl, style);
        buf.set_content(right, top, tr, style);
        buf.set_content(left, bottom, bl, style);
        buf.set_content(right, bottom, br, style);

        if !self.title.is_empty() && self.rect.width > 2 {
            print(
                buf,
                &self.title,
                left.saturating_add(1),
                top,
                self.rect.width - 2,
                self.title_align,
                self.title_color,
            );
        }
    }
}
