//! Drawing for MultiCheckbox.

use tuigrid::text::print;
use tuigrid::{Buffer, Style, TextAlign};

use super::events::bit_mask;
use super::{CHECKED_GLYPH, MultiCheckbox, UNCHECKED_GLYPH};

impl MultiCheckbox {
    pub(super) fn render(&self, buf: &mut Buffer) {
        self.frame.draw(buf);

        let inner = self.frame.inner_rect();
        if inner.is_empty() {
            return;
        }
        let (mut x, y) = (inner.x, inner.y);

        if self.label_width > 0 {
            let width = u16::try_from(self.label_width)
                .unwrap_or(u16::MAX)
                .min(inner.width);
            print(buf, &self.label, x, y, width, TextAlign::Left, self.label_color);
            x = x.saturating_add(width);
        } else {
            let drawn = print(
                buf,
                &self.label,
                x,
                y,
                inner.width,
                TextAlign::Left,
                self.label_color,
            );
            x = x.saturating_add(drawn);
        }

        let field = Style::new()
            .background(self.field_background_color)
            .foreground(self.field_text_color);
        let has_focus = self.frame.has_focus();

        // Cells are not clipped to the inner rect; the row runs on to the buffer edge.
        for bit in 0..self.bits {
            let col = usize::from(x) + bit;
            if col >= usize::from(buf.width()) {
                break;
            }

            let style = if has_focus && bit == self.focused_bit {
                field.reverse()
            } else {
                field
            };
            let glyph = if self.checked & bit_mask(bit) != 0 {
                CHECKED_GLYPH
            } else {
                UNCHECKED_GLYPH
            };
            buf.set_content(col as u16, y, glyph, style);
        }
    }
}
