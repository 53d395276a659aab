use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use multicheck::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use tuigrid::{ClickTracker, Terminal};

fn main() -> std::io::Result<()> {
    let log_file = File::create("bitmask.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let styles = Styles::default();
    let left_with = Rc::new(Cell::new(None::<Key>));
    let status = Rc::new(Cell::new(0o644u32));

    let mut permissions = MultiCheckbox::new(&styles);
    permissions
        .set_label("Permissions ")
        .set_bits(9)
        .set_checked(status.get())
        .set_changed_func({
            let status = status.clone();
            move |mask| status.set(mask)
        })
        .set_done_func({
            let left_with = left_with.clone();
            move |key| left_with.set(Some(key))
        });
    permissions.set_rect(Rect::new(2, 1, 40, 1));

    let mut features = MultiCheckbox::new(&styles);
    features
        .set_label("Features ")
        .set_bits(4)
        .set_done_func({
            let left_with = left_with.clone();
            move |key| left_with.set(Some(key))
        });
    features.set_form_attributes(12, Rgb::AQUA, Rgb::BLACK, Rgb::WHITE, Rgb::PURPLE);
    features.set_rect(Rect::new(2, 3, 40, 1));

    let mut fields = [permissions, features];
    let mut focused = 0;
    fields[focused].focus();

    let mut term = Terminal::new()?;
    let mut clicks = ClickTracker::new();

    loop {
        term.draw(|buf| {
            for field in &fields {
                field.draw(buf);
            }
            let footer = format!(
                "mask {:#011b}  tab: next field  space: toggle  q: quit",
                status.get()
            );
            let width = buf.width().saturating_sub(2);
            tuigrid::print(buf, &footer, 2, 5, width, TextAlign::Left, Rgb::GRAY);
        })?;

        for event in term.poll(Some(Duration::from_millis(250)))? {
            match event {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('q') {
                        return Ok(());
                    }
                    fields[focused].handle_key(key.into(), &mut |_| {});
                }
                CrosstermEvent::Mouse(raw) => {
                    for (action, event) in clicks.process(&raw, Instant::now()) {
                        let mut requested = None;
                        for field in fields.iter_mut() {
                            let outcome =
                                field.handle_mouse(action, event, &mut |id| requested = Some(id));
                            if outcome.consumed {
                                break;
                            }
                        }
                        if let Some(id) = requested
                            && let Some(idx) = fields.iter().position(|f| f.id() == id)
                        {
                            fields[focused].blur();
                            focused = idx;
                            fields[focused].focus();
                        }
                    }
                }
                _ => {}
            }

            match left_with.take() {
                Some(Key::Tab | Key::Down) => {
                    fields[focused].blur();
                    focused = (focused + 1) % fields.len();
                    fields[focused].focus();
                }
                Some(Key::BackTab | Key::Up) => {
                    fields[focused].blur();
                    focused = (focused + fields.len() - 1) % fields.len();
                    fields[focused].focus();
                }
                Some(Key::Escape) => return Ok(()),
                _ => {}
            }
        }
    }
}
