use std::time::{Duration, Instant};

use crossterm::event::{MouseEvent as CtMouseEvent, MouseEventKind};

use crate::event::{MouseAction, MouseButton, MouseEvent};

/// Two clicks of the same button closer together than this form a double-click.
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(500);

/// Turns raw terminal mouse reports into [`MouseAction`]s.
///
/// Terminals only report presses and releases. A click is synthesized on
/// release when the pointer is still where the button went down, and a second
/// click within [`DOUBLE_CLICK_INTERVAL`] becomes a double-click.
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed: Option<(MouseButton, u16, u16)>,
    last_click: Option<(MouseButton, Instant)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one terminal report into the actions it produces, in firing order.
    pub fn process(&mut self, raw: &CtMouseEvent, now: Instant) -> Vec<(MouseAction, MouseEvent)> {
        let mut event = MouseEvent::new(raw.column, raw.row);
        event.modifiers = raw.modifiers.into();

        let mut actions = Vec::new();
        match raw.kind {
            MouseEventKind::Down(btn) => {
                let button = MouseButton::from(btn);
                self.pressed = Some((button, event.x, event.y));
                actions.push((down_action(button), event.with_button(button)));
            }
            MouseEventKind::Up(btn) => {
                let button = MouseButton::from(btn);
                actions.push((up_action(button), event));

                let stayed = matches!(
                    self.pressed.take(),
                    Some((pressed, x, y)) if pressed == button && x == event.x && y == event.y
                );
                if stayed {
                    actions.push((self.click(button, now), event));
                }
            }
            MouseEventKind::Drag(btn) => {
                actions.push((MouseAction::Move, event.with_button(btn.into())));
            }
            MouseEventKind::Moved => actions.push((MouseAction::Move, event)),
            MouseEventKind::ScrollUp => actions.push((MouseAction::ScrollUp, event)),
            MouseEventKind::ScrollDown => actions.push((MouseAction::ScrollDown, event)),
            MouseEventKind::ScrollLeft => actions.push((MouseAction::ScrollLeft, event)),
            MouseEventKind::ScrollRight => actions.push((MouseAction::ScrollRight, event)),
        }

        for (action, ev) in &actions {
            log::trace!("[mouse] {:?} at ({}, {})", action, ev.x, ev.y);
        }
        actions
    }

    fn click(&mut self, button: MouseButton, now: Instant) -> MouseAction {
        let is_double = matches!(
            self.last_click,
            Some((last, at)) if last == button && now.saturating_duration_since(at) < DOUBLE_CLICK_INTERVAL
        );

        if is_double {
            self.last_click = None;
            double_click_action(button)
        } else {
            self.last_click = Some((button, now));
            click_action(button)
        }
    }
}

fn down_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftDown,
        MouseButton::Middle => MouseAction::MiddleDown,
        MouseButton::Right => MouseAction::RightDown,
    }
}

fn up_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftUp,
        MouseButton::Middle => MouseAction::MiddleUp,
        MouseButton::Right => MouseAction::RightUp,
    }
}

fn click_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftClick,
        MouseButton::Middle => MouseAction::MiddleClick,
        MouseButton::Right => MouseAction::RightClick,
    }
}

fn double_click_action(button: MouseButton) -> MouseAction {
    match button {
        MouseButton::Left => MouseAction::LeftDoubleClick,
        MouseButton::Middle => MouseAction::MiddleDoubleClick,
        MouseButton::Right => MouseAction::RightDoubleClick,
    }
}
