//! Drives an `OtpTextField` from stdin.
//!
//! Usage: `otp-demo [LENGTH] [INITIAL]`, then type digits, `bs`, `next`,
//! `tap N`, or `quit`. Set `RUST_LOG=trace` to watch focus directives.

mod command;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use lumo_foundation::{
    FocusDirection, FocusManager, ImeAction, Key, KeyEvent, SoftwareKeyboardController,
};
use lumo_ui::{OtpConfig, OtpState, OtpTextField, DEFAULT_OTP_LENGTH};

use crate::command::Command;

/// Focus cursor over one row of slots.
struct RowFocus {
    slots: usize,
    focused: Cell<usize>,
}

impl FocusManager for RowFocus {
    fn move_focus(&self, direction: FocusDirection) {
        let current = self.focused.get();
        let next = match direction {
            FocusDirection::Next => (current + 1).min(self.slots - 1),
            FocusDirection::Previous => current.saturating_sub(1),
        };
        self.focused.set(next);
    }
}

struct TerminalKeyboard;

impl SoftwareKeyboardController for TerminalKeyboard {
    fn hide(&self) {
        log::info!("keyboard hidden");
    }
}

fn render(field: &OtpTextField, focused: usize) -> String {
    field
        .slots()
        .iter()
        .map(|slot| {
            let shown = if slot.display.is_empty() { "_" } else { slot.display.as_str() };
            if slot.index == focused {
                format!("<{shown}>")
            } else {
                format!("[{shown}]")
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut args = std::env::args().skip(1);
    let length = match args.next() {
        Some(raw) => raw.parse().context("length must be a number")?,
        None => DEFAULT_OTP_LENGTH,
    };
    let config = OtpConfig::new(length)?.with_initial_otp(args.next().unwrap_or_default());

    let focus = Rc::new(RowFocus {
        slots: length,
        focused: Cell::new(0),
    });
    let keyboard: Rc<dyn SoftwareKeyboardController> = Rc::new(TerminalKeyboard);
    let state = OtpState::new(config, focus.clone(), Some(keyboard))
        .with_on_complete(|code| println!("completed: {code}"));
    let mut field = OtpTextField::new(state);
    field.mount();
    if field.focus_requester().take_request() {
        focus.focused.set(0);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", render(&field, focus.focused.get()));
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("{err:#}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Tap(index) if index < length => focus.focused.set(index),
            Command::Tap(index) => log::warn!("no slot {index}"),
            Command::Next => field.on_ime_action(focus.focused.get(), ImeAction::Next),
            Command::Backspace => {
                let index = focus.focused.get();
                if !field.on_preview_key_event(index, &KeyEvent::key_down(Key::Backspace)) {
                    field.on_value_change(index, "");
                }
            }
            Command::Type(text) => {
                for ch in text.chars() {
                    let index = focus.focused.get();
                    let mut value = field.slot(index).map(|slot| slot.value).unwrap_or_default();
                    value.push(ch);
                    field.on_value_change(index, &value);
                }
            }
        }
        writeln!(stdout, "{}", render(&field, focus.focused.get()))?;
    }
    Ok(())
}
