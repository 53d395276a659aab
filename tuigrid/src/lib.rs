pub mod buffer;
pub mod event;
pub mod layout;
pub mod mouse;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{Key, KeyEvent, Modifiers, MouseAction, MouseButton, MouseEvent};
pub use layout::Rect;
pub use mouse::ClickTracker;
pub use terminal::Terminal;
pub use text::{display_width, print};
pub use types::*;
