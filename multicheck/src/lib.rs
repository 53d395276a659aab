pub mod form;
pub mod frame;
pub mod primitive;
pub mod theme;
pub mod widgets;

pub use form::FormItem;
pub use frame::Frame;
pub use primitive::{MouseOutcome, Primitive, PrimitiveId};
pub use theme::Styles;
pub use widgets::MultiCheckbox;

pub mod prelude {
    pub use crate::form::FormItem;
    pub use crate::frame::Frame;
    pub use crate::primitive::{MouseOutcome, Primitive, PrimitiveId};
    pub use crate::theme::Styles;
    pub use crate::widgets::MultiCheckbox;

    pub use tuigrid::{
        Border, Buffer, Edges, Key, KeyEvent, Modifiers, MouseAction, MouseButton, MouseEvent,
        Rect, Rgb, TextAlign,
    };
}
