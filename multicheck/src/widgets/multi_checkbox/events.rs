//! Keyboard and mouse handling for MultiCheckbox.

use tuigrid::{Key, KeyEvent, MouseAction, MouseEvent};

use super::MultiCheckbox;
use crate::primitive::{MouseOutcome, PrimitiveId};

/// Mask selecting bit `bit`; zero when the bit does not exist in a `u32`.
pub(super) fn bit_mask(bit: usize) -> u32 {
    u32::try_from(bit)
        .ok()
        .and_then(|shift| 1u32.checked_shl(shift))
        .unwrap_or(0)
}

impl MultiCheckbox {
    pub(super) fn on_key(&mut self, event: KeyEvent) {
        let Some(event) = self.frame.capture_key(event) else {
            return;
        };

        match event.key {
            Key::Char(' ') | Key::Enter => self.toggle_focused(),
            Key::Tab | Key::BackTab | Key::Escape | Key::Up | Key::Down => self.finish(event.key),
            Key::Left => self.focus_previous_bit(),
            Key::Right => self.focus_next_bit(),
            _ => {}
        }
    }

    pub(super) fn on_mouse(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut dyn FnMut(PrimitiveId),
    ) -> MouseOutcome {
        let Some((action, event)) = self.frame.capture_mouse(action, event) else {
            return MouseOutcome::consumed();
        };

        if !self.frame.in_rect(event.x, event.y) {
            return MouseOutcome::ignored();
        }

        let row = self.frame.inner_rect().y;
        if action == MouseAction::LeftClick && event.y == row {
            set_focus(self.id);
            // Flips the bit under the cell cursor, wherever on the row the click landed.
            self.toggle_focused();
            return MouseOutcome::consumed();
        }

        MouseOutcome::ignored()
    }

    /// Pull a cursor left behind by a shrinking `set_bits` back onto the last cell.
    fn clamp_focused_bit(&mut self) {
        if self.bits > 0 && self.focused_bit >= self.bits {
            log::debug!(
                "[multicheck] focused bit {} out of range for {} bits, clamping",
                self.focused_bit,
                self.bits
            );
            self.focused_bit = self.bits - 1;
        }
    }

    fn toggle_focused(&mut self) {
        if self.bits == 0 {
            return;
        }
        self.clamp_focused_bit();

        self.checked ^= bit_mask(self.focused_bit);
        log::debug!(
            "[multicheck] toggled bit {} -> {:#b}",
            self.focused_bit,
            self.checked
        );
        if let Some(changed) = self.changed.as_mut() {
            changed(self.checked);
        }
    }

    fn finish(&mut self, key: Key) {
        log::debug!("[multicheck] done with {:?}", key);
        if let Some(done) = self.done.as_mut() {
            done(key);
        }
        if let Some(finished) = self.finished.as_mut() {
            finished(key);
        }
    }

    fn focus_previous_bit(&mut self) {
        if self.bits == 0 {
            return;
        }
        // Stepping back from a cursor beyond the last cell lands on the last cell.
        self.focused_bit = self
            .focused_bit
            .checked_sub(1)
            .filter(|&bit| bit < self.bits)
            .unwrap_or(self.bits - 1);
        log::trace!("[multicheck] cursor on bit {}", self.focused_bit);
    }

    fn focus_next_bit(&mut self) {
        if self.bits == 0 {
            return;
        }
        let next = self.focused_bit.saturating_add(1);
        self.focused_bit = if next >= self.bits { 0 } else { next };
        log::trace!("[multicheck] cursor on bit {}", self.focused_bit);
    }
}
