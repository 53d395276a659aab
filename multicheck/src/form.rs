//! What a form container needs from the fields it lays out.

use tuigrid::{Key, Rgb};

use crate::primitive::Primitive;

/// A primitive that can sit in a form next to other fields.
pub trait FormItem: Primitive {
    /// Text shown before the field.
    fn label(&self) -> &str;

    /// Apply the styling shared by every item of a form in one call.
    fn set_form_attributes(
        &mut self,
        label_width: usize,
        label_color: Rgb,
        bg_color: Rgb,
        field_text_color: Rgb,
        field_bg_color: Rgb,
    ) -> &mut dyn FormItem;

    /// Columns taken by the field itself, label excluded.
    fn field_width(&self) -> usize;

    /// Install the handler a form uses to move focus once the user leaves this item.
    /// Replaces any previous handler.
    fn set_finished_func(&mut self, handler: Box<dyn FnMut(Key)>) -> &mut dyn FormItem;
}
