//! Keypad commands driving the dial buffer.

use dialer_core::dial::DialOutcome;
use dialer_core::validate::validate_keypad_symbol;

use crate::{expect_args, parse_args, CommandOutput, Session};

const PRESS_HELP: &str = "\
Press keypad keys (0-9 and +) in order

Usage:
  dialer press <symbols>...";

const DIAL_HELP: &str = "\
Call the entered number and clear the field

Usage:
  dialer dial";

const PLAIN_HELP: &str = "\
Usage:
  dialer del | cancel | buffer | type <text>";

fn buffer_line(text: &str) -> String {
    format!("{text}\n")
}

pub fn run_press(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], PRESS_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if parsed.positional.is_empty() {
        return CommandOutput::usage("expected at least 1 arg, got 0");
    }

    // Reject the whole press sequence before touching the buffer.
    let symbols: Vec<char> = parsed.positional.iter().flat_map(|s| s.chars()).collect();
    if let Some(err) = symbols.iter().find_map(|c| validate_keypad_symbol(*c).err()) {
        return CommandOutput::failed(err);
    }
    let keypad = &mut session.phone.keypad;
    for symbol in symbols {
        if let Err(e) = keypad.press(symbol) {
            return CommandOutput::failed(e);
        }
    }
    CommandOutput::ok(buffer_line(keypad.as_str()))
}

pub fn run_del(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], PLAIN_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }
    CommandOutput::ok(buffer_line(session.phone.keypad.delete()))
}

pub fn run_type(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], PLAIN_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    let text = parsed.positional.join(" ");
    CommandOutput::ok(buffer_line(session.phone.keypad.set_text(&text)))
}

pub fn run_dial(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], DIAL_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }

    match session.phone.keypad.commit() {
        Ok(DialOutcome::Placed { number }) => CommandOutput::ok(format!("calling {number}\n")),
        Ok(DialOutcome::Failed { number, reason }) => CommandOutput::ok_with_warning(
            format!("calling {number}\n"),
            format!("failed to open dialer: {reason}\n"),
        ),
        Err(e) => CommandOutput::failed(e),
    }
}

pub fn run_cancel(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], PLAIN_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }
    CommandOutput::ok(buffer_line(session.phone.keypad.cancel()))
}

pub fn run_buffer(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], PLAIN_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }
    CommandOutput::ok(buffer_line(session.phone.keypad.as_str()))
}
