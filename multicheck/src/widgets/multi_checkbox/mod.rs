//! A row of independently toggleable bit cells backed by a single bitmask.

mod events;
mod render;

use std::fmt;

use tuigrid::{Buffer, Key, KeyEvent, MouseAction, MouseEvent, Rgb};

use crate::form::FormItem;
use crate::frame::Frame;
use crate::primitive::{MouseOutcome, Primitive, PrimitiveId};
use crate::theme::Styles;

/// Glyph drawn for a set bit.
pub const CHECKED_GLYPH: char = 'X';
/// Glyph drawn for a clear bit.
pub const UNCHECKED_GLYPH: char = ' ';

type ChangedFunc = Box<dyn FnMut(u32)>;
type KeyFunc = Box<dyn FnMut(Key)>;

/// A form field showing `bits` cells after a label, cell `i` mirroring bit `i`
/// of a `u32` mask.
///
/// Left/Right move a cursor between cells, Space/Enter (or a left click on
/// the row) flip the cell under the cursor. Tab, BackTab, Escape, Up and Down
/// end the interaction and are reported through the done and finished
/// handlers.
///
/// Bits at or above `bits` are kept but never drawn or toggled.
///
/// # Example
///
/// ```
/// use multicheck::prelude::*;
///
/// let mut flags = MultiCheckbox::new(&Styles::default());
/// flags
///     .set_label("Flags: ")
///     .set_bits(4)
///     .set_checked(0b0101)
///     .set_changed_func(|mask| println!("mask is now {mask:#06b}"));
///
/// flags.handle_key(KeyEvent::new(Key::Char(' ')), &mut |_| {});
/// assert_eq!(flags.is_checked(), 0b0100);
/// ```
pub struct MultiCheckbox {
    id: PrimitiveId,
    frame: Frame,
    checked: u32,
    bits: usize,
    focused_bit: usize,
    label: String,
    /// 0 sizes the label to its text.
    label_width: usize,
    label_color: Rgb,
    field_background_color: Rgb,
    field_text_color: Rgb,
    changed: Option<ChangedFunc>,
    done: Option<KeyFunc>,
    finished: Option<KeyFunc>,
}

impl fmt::Debug for MultiCheckbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiCheckbox")
            .field("id", &self.id)
            .field("frame", &self.frame)
            .field("checked", &format_args!("{:#b}", self.checked))
            .field("bits", &self.bits)
            .field("focused_bit", &self.focused_bit)
            .field("label", &self.label)
            .field("label_width", &self.label_width)
            .finish_non_exhaustive()
    }
}

impl Default for MultiCheckbox {
    fn default() -> Self {
        Self::new(&Styles::default())
    }
}

impl MultiCheckbox {
    /// Create an empty control (no label, no cells) colored from `styles`.
    pub fn new(styles: &Styles) -> Self {
        Self {
            id: PrimitiveId::new(),
            frame: Frame::new(styles),
            checked: 0,
            bits: 0,
            focused_bit: 0,
            label: String::new(),
            label_width: 0,
            label_color: styles.secondary_text,
            field_background_color: styles.contrast_background,
            field_text_color: styles.primary_text,
            changed: None,
            done: None,
            finished: None,
        }
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Replace the whole mask. Does not call the changed handler.
    pub fn set_checked(&mut self, checked: u32) -> &mut Self {
        self.checked = checked;
        self
    }

    /// The current mask, including bits beyond the visible cells.
    pub fn is_checked(&self) -> u32 {
        self.checked
    }

    /// Set the number of cells.
    ///
    /// The cursor is left where it is; shrinking below it is the caller's
    /// business. A stale cursor is pulled back onto the last cell by the next
    /// key or mouse event.
    pub fn set_bits(&mut self, bits: usize) -> &mut Self {
        self.bits = bits;
        self
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn focused_bit(&self) -> usize {
        self.focused_bit
    }

    /// Move the cell cursor. Stored as given, like [`MultiCheckbox::set_bits`].
    pub fn set_focused_bit(&mut self, bit: usize) -> &mut Self {
        self.focused_bit = bit;
        self
    }

    // -------------------------------------------------------------------------
    // Label and colors
    // -------------------------------------------------------------------------

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Columns reserved for the label; 0 uses the label's own width.
    pub fn set_label_width(&mut self, width: usize) -> &mut Self {
        self.label_width = width;
        self
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn set_label_color(&mut self, color: Rgb) -> &mut Self {
        self.label_color = color;
        self
    }

    pub fn label_color(&self) -> Rgb {
        self.label_color
    }

    pub fn set_field_background_color(&mut self, color: Rgb) -> &mut Self {
        self.field_background_color = color;
        self
    }

    pub fn field_background_color(&self) -> Rgb {
        self.field_background_color
    }

    pub fn set_field_text_color(&mut self, color: Rgb) -> &mut Self {
        self.field_text_color = color;
        self
    }

    pub fn field_text_color(&self) -> Rgb {
        self.field_text_color
    }

    /// One column per cell.
    pub fn field_width(&self) -> usize {
        self.bits
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    /// Called with the new mask after every toggle made by the user.
    /// Replaces any previous handler.
    pub fn set_changed_func(&mut self, handler: impl FnMut(u32) + 'static) -> &mut Self {
        self.changed = Some(Box::new(handler));
        self
    }

    /// Called with the key that ended the interaction: Tab, BackTab, Escape,
    /// Up or Down. Replaces any previous handler.
    pub fn set_done_func(&mut self, handler: impl FnMut(Key) + 'static) -> &mut Self {
        self.done = Some(Box::new(handler));
        self
    }
}

impl Primitive for MultiCheckbox {
    fn id(&self) -> PrimitiveId {
        self.id
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn draw(&self, buf: &mut Buffer) {
        self.render(buf);
    }

    fn handle_key(&mut self, event: KeyEvent, _set_focus: &mut dyn FnMut(PrimitiveId)) {
        self.on_key(event);
    }

    fn handle_mouse(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut dyn FnMut(PrimitiveId),
    ) -> MouseOutcome {
        self.on_mouse(action, event, set_focus)
    }
}

impl FormItem for MultiCheckbox {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_form_attributes(
        &mut self,
        label_width: usize,
        label_color: Rgb,
        bg_color: Rgb,
        field_text_color: Rgb,
        field_bg_color: Rgb,
    ) -> &mut dyn FormItem {
        self.label_width = label_width;
        self.label_color = label_color;
        self.frame.set_background_color(bg_color);
        self.field_text_color = field_text_color;
        self.field_background_color = field_bg_color;
        self
    }

    fn field_width(&self) -> usize {
        self.bits
    }

    fn set_finished_func(&mut self, handler: Box<dyn FnMut(Key)>) -> &mut dyn FormItem {
        self.finished = Some(handler);
        self
    }
}
