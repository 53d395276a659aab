use std::cell::RefCell;
use std::rc::Rc;

use multicheck::prelude::*;
use multicheck::widgets::multi_checkbox::{CHECKED_GLYPH, UNCHECKED_GLYPH};

fn checkbox(bits: usize, checked: u32) -> MultiCheckbox {
    let mut cb = MultiCheckbox::new(&Styles::default());
    cb.set_bits(bits).set_checked(checked);
    cb.set_rect(Rect::new(0, 0, 20, 1));
    cb
}

fn press(cb: &mut MultiCheckbox, key: Key) {
    cb.handle_key(KeyEvent::new(key), &mut |_| {});
}

fn click(cb: &mut MultiCheckbox, action: MouseAction, x: u16, y: u16) -> (MouseOutcome, Vec<PrimitiveId>) {
    let mut requested = Vec::new();
    let outcome = cb.handle_mouse(action, MouseEvent::new(x, y), &mut |id| requested.push(id));
    (outcome, requested)
}

fn record_changes(cb: &mut MultiCheckbox) -> Rc<RefCell<Vec<u32>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    cb.set_changed_func(move |mask| sink.borrow_mut().push(mask));
    changes
}

fn render(cb: &MultiCheckbox, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    cb.draw(&mut buf);
    buf
}

// ============================================================================
// Defaults & Accessors
// ============================================================================

#[test]
fn test_new_uses_injected_styles() {
    let styles = Styles::default()
        .secondary_text(Rgb::RED)
        .contrast_background(Rgb::NAVY)
        .primary_text(Rgb::SILVER)
        .primitive_background(Rgb::TEAL);
    let cb = MultiCheckbox::new(&styles);

    assert_eq!(cb.label_color(), Rgb::RED);
    assert_eq!(cb.field_background_color(), Rgb::NAVY);
    assert_eq!(cb.field_text_color(), Rgb::SILVER);
    assert_eq!(cb.frame().background_color(), Rgb::TEAL);
    assert_eq!(cb.bits(), 0);
    assert_eq!(cb.is_checked(), 0);
    assert_eq!(cb.label(), "");
    assert_eq!(cb.label_width(), 0);
}

#[test]
fn test_setters_chain() {
    let mut cb = MultiCheckbox::default();
    cb.set_label("Mode")
        .set_label_width(8)
        .set_bits(5)
        .set_checked(0b10)
        .set_label_color(Rgb::LIME)
        .set_field_text_color(Rgb::BLACK)
        .set_field_background_color(Rgb::YELLOW);

    assert_eq!(cb.label(), "Mode");
    assert_eq!(cb.label_width(), 8);
    assert_eq!(cb.bits(), 5);
    assert_eq!(cb.is_checked(), 0b10);
    assert_eq!(cb.label_color(), Rgb::LIME);
    assert_eq!(cb.field_text_color(), Rgb::BLACK);
    assert_eq!(cb.field_background_color(), Rgb::YELLOW);
}

#[test]
fn test_field_width_is_bit_count() {
    let cb = checkbox(7, 0);
    assert_eq!(cb.field_width(), 7);
    assert_eq!(FormItem::field_width(&cb), 7);

    let empty = checkbox(0, 0);
    assert_eq!(FormItem::field_width(&empty), 0);
}

#[test]
fn test_set_form_attributes() {
    let mut cb = checkbox(3, 0);
    cb.set_form_attributes(10, Rgb::AQUA, Rgb::MAROON, Rgb::WHITE, Rgb::PURPLE);

    assert_eq!(cb.label_width(), 10);
    assert_eq!(cb.label_color(), Rgb::AQUA);
    assert_eq!(cb.frame().background_color(), Rgb::MAROON);
    assert_eq!(cb.field_text_color(), Rgb::WHITE);
    assert_eq!(cb.field_background_color(), Rgb::PURPLE);
}

#[test]
fn test_form_item_label() {
    let mut cb = checkbox(3, 0);
    cb.set_label("Flags");
    let item: &dyn FormItem = &cb;
    assert_eq!(item.label(), "Flags");
}

#[test]
fn test_set_checked_does_not_call_changed() {
    let mut cb = checkbox(4, 0);
    let changes = record_changes(&mut cb);

    cb.set_checked(0b1111);

    assert_eq!(cb.is_checked(), 0b1111);
    assert!(changes.borrow().is_empty());
}

// ============================================================================
// Keyboard: Toggle
// ============================================================================

#[test]
fn test_space_toggles_focused_bit_only() {
    for start in [0u32, 0b1010, 0xFFFF_FFFF, 0x8000_0001] {
        for k in 0..6 {
            let mut cb = checkbox(6, start);
            cb.set_focused_bit(k);

            press(&mut cb, Key::Char(' '));

            assert_eq!(cb.is_checked(), start ^ (1 << k), "start {start:#b}, bit {k}");
        }
    }
}

#[test]
fn test_enter_toggles_focused_bit() {
    let mut cb = checkbox(4, 0);
    cb.set_focused_bit(2);

    press(&mut cb, Key::Enter);

    assert_eq!(cb.is_checked(), 0b100);
}

#[test]
fn test_toggle_twice_restores_value() {
    let mut cb = checkbox(8, 0b1001_0110);
    cb.set_focused_bit(5);

    press(&mut cb, Key::Char(' '));
    press(&mut cb, Key::Enter);

    assert_eq!(cb.is_checked(), 0b1001_0110);
}

#[test]
fn test_other_characters_are_ignored() {
    let mut cb = checkbox(4, 0b11);
    let changes = record_changes(&mut cb);

    for ch in ['x', 'X', '1', '\t', 'q'] {
        press(&mut cb, Key::Char(ch));
    }
    press(&mut cb, Key::Backspace);
    press(&mut cb, Key::F(5));
    press(&mut cb, Key::Unknown);

    assert_eq!(cb.is_checked(), 0b11);
    assert_eq!(cb.focused_bit(), 0);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_high_bits_survive_toggles() {
    let mut cb = checkbox(4, 0xF0);

    press(&mut cb, Key::Char(' '));

    assert_eq!(cb.is_checked(), 0xF1);
}

// ============================================================================
// Keyboard: Changed callback
// ============================================================================

#[test]
fn test_changed_fires_once_per_toggle_with_new_mask() {
    let mut cb = checkbox(4, 0);
    let changes = record_changes(&mut cb);

    press(&mut cb, Key::Char(' '));
    press(&mut cb, Key::Right);
    press(&mut cb, Key::Enter);

    assert_eq!(*changes.borrow(), vec![0b01, 0b11]);
}

#[test]
fn test_changed_not_fired_by_movement() {
    let mut cb = checkbox(4, 0);
    let changes = record_changes(&mut cb);

    press(&mut cb, Key::Left);
    press(&mut cb, Key::Right);
    press(&mut cb, Key::Right);

    assert!(changes.borrow().is_empty());
}

#[test]
fn test_changed_handler_last_write_wins() {
    let mut cb = checkbox(2, 0);
    let first = record_changes(&mut cb);
    let second = record_changes(&mut cb);

    press(&mut cb, Key::Char(' '));

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![1]);
}

// ============================================================================
// Keyboard: Focus movement
// ============================================================================

#[test]
fn test_left_wraps_from_first_to_last() {
    let mut cb = checkbox(3, 0);

    press(&mut cb, Key::Left);

    assert_eq!(cb.focused_bit(), 2);
}

#[test]
fn test_right_wraps_from_last_to_first() {
    let mut cb = checkbox(3, 0);
    cb.set_focused_bit(2);

    press(&mut cb, Key::Right);

    assert_eq!(cb.focused_bit(), 0);
}

#[test]
fn test_right_walks_every_cell() {
    let mut cb = checkbox(4, 0);
    let mut seen = vec![cb.focused_bit()];
    for _ in 0..4 {
        press(&mut cb, Key::Right);
        seen.push(cb.focused_bit());
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0]);
}

#[test]
fn test_single_cell_stays_put() {
    let mut cb = checkbox(1, 0);

    press(&mut cb, Key::Left);
    assert_eq!(cb.focused_bit(), 0);
    press(&mut cb, Key::Right);
    assert_eq!(cb.focused_bit(), 0);
}

#[test]
fn test_movement_does_not_touch_mask() {
    let mut cb = checkbox(5, 0b10101);

    press(&mut cb, Key::Right);
    press(&mut cb, Key::Right);
    press(&mut cb, Key::Left);

    assert_eq!(cb.focused_bit(), 1);
    assert_eq!(cb.is_checked(), 0b10101);
}

#[test]
fn test_set_bits_keeps_stale_cursor_until_next_event() {
    let mut cb = checkbox(8, 0);
    cb.set_focused_bit(7);

    cb.set_bits(4);
    assert_eq!(cb.focused_bit(), 7);

    press(&mut cb, Key::Char(' '));

    assert_eq!(cb.focused_bit(), 3);
    assert_eq!(cb.is_checked(), 0b1000);
}

#[test]
fn test_left_from_stale_cursor_lands_on_last_cell() {
    let mut cb = checkbox(8, 0);
    cb.set_focused_bit(7);
    cb.set_bits(4);

    press(&mut cb, Key::Left);

    assert_eq!(cb.focused_bit(), 3);
}

#[test]
fn test_left_from_cursor_at_bit_count_lands_on_last_cell() {
    let mut cb = checkbox(4, 0);
    cb.set_focused_bit(4);

    press(&mut cb, Key::Left);

    assert_eq!(cb.focused_bit(), 3);
}

#[test]
fn test_right_from_stale_cursor_wraps_to_first_cell() {
    let mut cb = checkbox(8, 0);
    cb.set_focused_bit(7);
    cb.set_bits(4);

    press(&mut cb, Key::Right);

    assert_eq!(cb.focused_bit(), 0);
}

// ============================================================================
// Keyboard: Completion
// ============================================================================

#[test]
fn test_completion_keys_call_done_then_finished() {
    for key in [Key::Escape, Key::Tab, Key::BackTab, Key::Up, Key::Down] {
        let mut cb = checkbox(4, 0b0110);
        cb.set_focused_bit(2);
        let calls = Rc::new(RefCell::new(Vec::new()));

        let sink = calls.clone();
        cb.set_done_func(move |k| sink.borrow_mut().push(("done", k)));
        let sink = calls.clone();
        cb.set_finished_func(Box::new(move |k: Key| sink.borrow_mut().push(("finished", k))));
        let changes = record_changes(&mut cb);

        press(&mut cb, key);

        assert_eq!(*calls.borrow(), vec![("done", key), ("finished", key)]);
        assert_eq!(cb.is_checked(), 0b0110);
        assert_eq!(cb.focused_bit(), 2);
        assert!(changes.borrow().is_empty());
    }
}

#[test]
fn test_completion_without_handlers_is_noop() {
    let mut cb = checkbox(2, 1);

    press(&mut cb, Key::Tab);
    press(&mut cb, Key::Escape);

    assert_eq!(cb.is_checked(), 1);
}

#[test]
fn test_done_handler_last_write_wins() {
    let mut cb = checkbox(2, 0);
    let calls = Rc::new(RefCell::new(Vec::new()));

    let sink = calls.clone();
    cb.set_done_func(move |_| sink.borrow_mut().push("first"));
    let sink = calls.clone();
    cb.set_done_func(move |_| sink.borrow_mut().push("second"));

    press(&mut cb, Key::Tab);

    assert_eq!(*calls.borrow(), vec!["second"]);
}

#[test]
fn test_completion_signals_even_without_bits() {
    let mut cb = checkbox(0, 0);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    cb.set_done_func(move |k| sink.borrow_mut().push(k));

    press(&mut cb, Key::Down);

    assert_eq!(*calls.borrow(), vec![Key::Down]);
}

// ============================================================================
// Keyboard: Input capture
// ============================================================================

#[test]
fn test_input_capture_can_swallow_keys() {
    let mut cb = checkbox(3, 0);
    cb.frame_mut().set_input_capture(|event| match event.key {
        Key::Char(' ') => None,
        _ => Some(event),
    });

    press(&mut cb, Key::Char(' '));
    assert_eq!(cb.is_checked(), 0);

    press(&mut cb, Key::Enter);
    assert_eq!(cb.is_checked(), 1);
}

#[test]
fn test_input_capture_can_remap_keys() {
    let mut cb = checkbox(3, 0);
    cb.frame_mut().set_input_capture(|event| match event.key {
        Key::Char('l') => Some(KeyEvent::new(Key::Right)),
        Key::Char('h') => Some(KeyEvent::new(Key::Left)),
        _ => Some(event),
    });

    press(&mut cb, Key::Char('l'));
    press(&mut cb, Key::Char('l'));
    assert_eq!(cb.focused_bit(), 2);

    press(&mut cb, Key::Char('h'));
    assert_eq!(cb.focused_bit(), 1);
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_left_click_on_row_requests_focus_and_toggles() {
    let mut cb = checkbox(4, 0);
    let changes = record_changes(&mut cb);

    let (outcome, requested) = click(&mut cb, MouseAction::LeftClick, 3, 0);

    assert_eq!(outcome, MouseOutcome::consumed());
    assert_eq!(outcome.capture, None);
    assert_eq!(requested, vec![cb.id()]);
    assert_eq!(cb.is_checked(), 0b1);
    assert_eq!(*changes.borrow(), vec![0b1]);
}

#[test]
fn test_click_toggles_focused_bit_not_clicked_cell() {
    let mut cb = checkbox(4, 0);
    cb.set_label("ab");
    cb.set_focused_bit(1);

    // Column 5 shows bit 3, but the cursor is on bit 1.
    click(&mut cb, MouseAction::LeftClick, 5, 0);

    assert_eq!(cb.is_checked(), 0b10);
}

#[test]
fn test_click_outside_rect_passes_through() {
    let mut cb = checkbox(4, 0);
    let changes = record_changes(&mut cb);

    let (outcome, requested) = click(&mut cb, MouseAction::LeftClick, 25, 0);

    assert!(!outcome.consumed);
    assert!(requested.is_empty());
    assert_eq!(cb.is_checked(), 0);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_other_mouse_actions_are_ignored() {
    let mut cb = checkbox(4, 0);

    for action in [
        MouseAction::LeftDown,
        MouseAction::LeftUp,
        MouseAction::LeftDoubleClick,
        MouseAction::RightClick,
        MouseAction::Move,
        MouseAction::ScrollDown,
    ] {
        let (outcome, requested) = click(&mut cb, action, 2, 0);
        assert!(!outcome.consumed, "{action:?}");
        assert!(requested.is_empty(), "{action:?}");
    }
    assert_eq!(cb.is_checked(), 0);
}

#[test]
fn test_click_only_counts_on_the_content_row() {
    let mut cb = checkbox(4, 0);
    cb.set_rect(Rect::new(0, 0, 20, 3));
    cb.frame_mut().set_border(Border::Single);

    // Top border row is inside the rect but not the content row.
    let (outcome, _) = click(&mut cb, MouseAction::LeftClick, 4, 0);
    assert!(!outcome.consumed);
    assert_eq!(cb.is_checked(), 0);

    let (outcome, _) = click(&mut cb, MouseAction::LeftClick, 4, 1);
    assert!(outcome.consumed);
    assert_eq!(cb.is_checked(), 1);
}

#[test]
fn test_mouse_capture_swallow_consumes_without_toggle() {
    let mut cb = checkbox(4, 0);
    cb.frame_mut().set_mouse_capture(|_, _| None);

    let (outcome, requested) = click(&mut cb, MouseAction::LeftClick, 1, 0);

    assert!(outcome.consumed);
    assert!(requested.is_empty());
    assert_eq!(cb.is_checked(), 0);
}

#[test]
fn test_mouse_capture_can_rewrite_action() {
    let mut cb = checkbox(4, 0);
    cb.frame_mut().set_mouse_capture(|action, event| match action {
        MouseAction::LeftDoubleClick => Some((MouseAction::LeftClick, event)),
        other => Some((other, event)),
    });

    let (outcome, _) = click(&mut cb, MouseAction::LeftDoubleClick, 1, 0);

    assert!(outcome.consumed);
    assert_eq!(cb.is_checked(), 1);
}

// ============================================================================
// Degenerate bit counts
// ============================================================================

#[test]
fn test_zero_bits_ignores_every_interaction() {
    let mut cb = checkbox(0, 0b101);
    let changes = record_changes(&mut cb);

    for key in [Key::Char(' '), Key::Enter, Key::Left, Key::Right] {
        press(&mut cb, key);
    }
    let (outcome, _) = click(&mut cb, MouseAction::LeftClick, 0, 0);

    assert!(outcome.consumed);
    assert_eq!(cb.is_checked(), 0b101);
    assert_eq!(cb.focused_bit(), 0);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_zero_bits_draws_only_label() {
    let mut cb = checkbox(0, u32::MAX);
    cb.set_label("Empty");

    let buf = render(&cb, 20, 1);

    assert_eq!(buf.row_text(0), format!("{:<20}", "Empty"));
}

#[test]
fn test_bits_beyond_mask_width_do_not_panic() {
    let mut cb = checkbox(40, 0);
    cb.set_focused_bit(35);

    press(&mut cb, Key::Char(' '));
    press(&mut cb, Key::Right);
    let buf = render(&cb, 60, 1);

    assert_eq!(cb.is_checked(), 0);
    assert_eq!(cb.focused_bit(), 36);
    assert_eq!(buf.row_text(0).trim_end(), "");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_maps_bits_to_cells() {
    let mut cb = checkbox(4, 0b0101);
    cb.set_label("Bits:");

    let buf = render(&cb, 20, 1);

    let glyphs: Vec<char> = (5..9).map(|x| buf.get(x, 0).unwrap().char).collect();
    assert_eq!(
        glyphs,
        vec![CHECKED_GLYPH, UNCHECKED_GLYPH, CHECKED_GLYPH, UNCHECKED_GLYPH]
    );
    for x in 5..9 {
        let cell = buf.get(x, 0).unwrap();
        assert_eq!(cell.bg, cb.field_background_color(), "cell {x}");
        assert_eq!(cell.fg, cb.field_text_color(), "cell {x}");
    }
}

#[test]
fn test_render_label_uses_label_color() {
    let mut cb = checkbox(2, 0);
    cb.set_label("On").set_label_color(Rgb::FUCHSIA);

    let buf = render(&cb, 10, 1);

    assert_eq!(buf.get(0, 0).unwrap().char, 'O');
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::FUCHSIA);
    assert_eq!(buf.get(1, 0).unwrap().char, 'n');
    assert_eq!(buf.get(0, 0).unwrap().bg, cb.frame().background_color());
}

#[test]
fn test_focused_cell_is_inverted_only_with_focus() {
    let mut cb = checkbox(4, 0b0101);
    cb.set_focused_bit(2);

    let unfocused = render(&cb, 10, 1);
    for x in 0..4 {
        assert_eq!(unfocused.get(x, 0).unwrap().bg, cb.field_background_color());
    }

    cb.focus();
    let focused = render(&cb, 10, 1);
    for x in 0..4 {
        let cell = focused.get(x, 0).unwrap();
        if x == 2 {
            assert_eq!(cell.bg, cb.field_text_color());
            assert_eq!(cell.fg, cb.field_background_color());
        } else {
            assert_eq!(cell.bg, cb.field_background_color());
            assert_eq!(cell.fg, cb.field_text_color());
        }
    }
}

#[test]
fn test_fixed_label_width_pads_before_cells() {
    let mut cb = checkbox(2, 0b11);
    cb.set_label("ab").set_label_width(6);

    let buf = render(&cb, 12, 1);

    assert_eq!(&buf.row_text(0)[..8], "ab    XX");
}

#[test]
fn test_label_width_clamped_to_available_width() {
    let mut cb = checkbox(2, 0b11);
    cb.set_rect(Rect::new(0, 0, 10, 1));
    cb.set_label("Very long label text").set_label_width(30);

    let buf = render(&cb, 20, 1);

    assert_eq!(&buf.row_text(0)[..10], "Very long ");
    // Cells start right after the clamped label, past the frame's right edge.
    assert_eq!(buf.get(10, 0).unwrap().char, CHECKED_GLYPH);
    assert_eq!(buf.get(11, 0).unwrap().char, CHECKED_GLYPH);
}

#[test]
fn test_auto_label_truncated_to_available_width() {
    let mut cb = checkbox(1, 1);
    cb.set_rect(Rect::new(0, 0, 4, 1));
    cb.set_label("abcdef");

    let buf = render(&cb, 8, 1);

    assert_eq!(&buf.row_text(0)[..5], "abcdX");
}

#[test]
fn test_cells_stop_at_buffer_edge() {
    let cb = checkbox(10, u32::MAX);

    let buf = render(&cb, 6, 1);

    assert_eq!(buf.row_text(0), "XXXXXX");
}

#[test]
fn test_render_inside_border_and_padding() {
    let mut cb = checkbox(3, 0b010);
    cb.set_rect(Rect::new(1, 1, 12, 3));
    cb.set_label("L");
    cb.frame_mut()
        .set_border(Border::Single)
        .set_padding(Edges::new(0, 0, 0, 1));

    let buf = render(&cb, 14, 5);

    // Border at x=1, padding at x=2, label at x=3, cells at x=4..7 on row 2.
    assert_eq!(buf.get(3, 2).unwrap().char, 'L');
    assert_eq!(buf.get(4, 2).unwrap().char, UNCHECKED_GLYPH);
    assert_eq!(buf.get(5, 2).unwrap().char, CHECKED_GLYPH);
    assert_eq!(buf.get(6, 2).unwrap().char, UNCHECKED_GLYPH);
    assert_eq!(buf.get(5, 2).unwrap().bg, cb.field_background_color());
}

#[test]
fn test_no_content_when_inner_rect_empty() {
    let mut cb = checkbox(3, 0b111);
    cb.set_rect(Rect::new(0, 0, 10, 2));
    cb.set_label("Hidden");
    cb.frame_mut().set_border(Border::Single);

    let buf = render(&cb, 10, 2);

    assert!(!buf.row_text(0).contains('H'));
    assert!(!buf.row_text(1).contains('X'));
}

#[test]
fn test_draw_is_idempotent() {
    let mut cb = checkbox(6, 0b100110);
    cb.set_label("Flags ");
    cb.set_focused_bit(4);
    cb.focus();

    let first = render(&cb, 20, 1);
    let mut second = first.clone();
    cb.draw(&mut second);

    assert_eq!(first.diff(&second).count(), 0);
}

#[test]
fn test_render_only_touches_its_row() {
    let mut cb = checkbox(4, 0b1111);
    cb.set_rect(Rect::new(0, 1, 20, 1));
    cb.set_label("Row");

    let buf = render(&cb, 20, 3);

    assert_eq!(buf.row_text(0).trim(), "");
    assert_eq!(buf.row_text(2).trim(), "");
    assert_eq!(buf.row_text(1).trim_end(), "RowXXXX");
}
