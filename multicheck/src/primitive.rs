//! The contract every drawable, focusable element fulfils.

use std::sync::atomic::{AtomicUsize, Ordering};

use tuigrid::{Buffer, KeyEvent, MouseAction, MouseEvent, Rect};

use crate::frame::Frame;

/// Unique identifier for a primitive instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveId(usize);

impl PrimitiveId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__primitive_{}", self.0)
    }
}

/// Result of offering a mouse event to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseOutcome {
    /// The primitive handled the event; it must not be passed on.
    pub consumed: bool,
    /// Primitive that should receive all mouse events until it releases the capture.
    pub capture: Option<PrimitiveId>,
}

impl MouseOutcome {
    pub const fn ignored() -> Self {
        Self {
            consumed: false,
            capture: None,
        }
    }

    pub const fn consumed() -> Self {
        Self {
            consumed: true,
            capture: None,
        }
    }
}

/// Something the host can lay out, draw and route input to.
///
/// `set_focus` is how a primitive asks the host to move input focus; the host
/// decides and then calls [`Primitive::focus`] / [`Primitive::blur`].
pub trait Primitive {
    fn id(&self) -> PrimitiveId;

    fn frame(&self) -> &Frame;

    fn frame_mut(&mut self) -> &mut Frame;

    /// Paint the current state. Calling it twice with unchanged state paints the same cells.
    fn draw(&self, buf: &mut Buffer);

    /// Handle a key press. Only called while this primitive has focus.
    fn handle_key(&mut self, event: KeyEvent, set_focus: &mut dyn FnMut(PrimitiveId));

    /// Handle a mouse action routed to this primitive.
    fn handle_mouse(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut dyn FnMut(PrimitiveId),
    ) -> MouseOutcome;

    fn focus(&mut self) {
        self.frame_mut().focus();
    }

    fn blur(&mut self) {
        self.frame_mut().blur();
    }

    fn has_focus(&self) -> bool {
        self.frame().has_focus()
    }

    fn rect(&self) -> Rect {
        self.frame().rect()
    }

    fn set_rect(&mut self, rect: Rect) {
        self.frame_mut().set_rect(rect);
    }
}
