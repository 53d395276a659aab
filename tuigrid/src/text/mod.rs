use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::buffer::Buffer;
use crate::types::{Rgb, Style, TextAlign};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Longest prefix of `s` that fits in `max_width` columns, without splitting a wide char.
fn fit_prefix(s: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            return (&s[..idx], width);
        }
        width += ch_width;
    }
    (s, width)
}

/// Longest suffix of `s` that fits in `max_width` columns.
fn fit_suffix(s: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    for (idx, ch) in s.char_indices().rev() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            return (&s[idx + ch.len_utf8()..], width);
        }
        width += ch_width;
    }
    (s, width)
}

/// Print `text` on row `y` inside the columns `x..x + max_width`.
///
/// Text that does not fit is cut off: right-aligned text loses its start,
/// everything else loses its end. Only the foreground is set; the background
/// already in the buffer is kept. Returns the number of columns the printed
/// text occupies.
pub fn print(
    buf: &mut Buffer,
    text: &str,
    x: u16,
    y: u16,
    max_width: u16,
    align: TextAlign,
    fg: Rgb,
) -> u16 {
    if max_width == 0 || text.is_empty() {
        return 0;
    }

    let available = max_width as usize;
    let (visible, width) = match align {
        TextAlign::Right => fit_suffix(text, available),
        TextAlign::Left | TextAlign::Center => fit_prefix(text, available),
    };

    let style = Style::new().foreground(fg);
    let mut col = x as usize + align_offset(width, available, align);
    for ch in visible.chars() {
        let ch_width = char_width(ch);
        if ch_width == 0 {
            continue;
        }
        let Ok(cx) = u16::try_from(col) else {
            break;
        };
        buf.set_content(cx, y, ch, style);
        for extra in 1..ch_width {
            if let Some(cell) = u16::try_from(col + extra)
                .ok()
                .and_then(|ex| buf.get_mut(ex, y))
            {
                cell.char = ' ';
                cell.fg = fg;
                cell.wide_continuation = true;
            }
        }
        col += ch_width;
    }

    width as u16
}
