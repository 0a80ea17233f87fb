//! Navigation commands: `tab`, `screen`, `back`.

use dialer_core::nav::{Screen, Tab};

use crate::{expect_args, parse_args, CommandOutput, Session};

const TAB_HELP: &str = "\
Switch tab

Usage:
  dialer tab <calls|favorites|contacts>";

const SCREEN_HELP: &str = "\
Show the current screen

Usage:
  dialer screen";

const BACK_HELP: &str = "\
Close the contact detail screen

Usage:
  dialer back";

fn describe(screen: &Screen<'_>) -> String {
    match screen {
        Screen::CallLog => Tab::Calls.title().to_string(),
        Screen::Favorites => Tab::Favorites.title().to_string(),
        Screen::ContactList => Tab::Contacts.title().to_string(),
        Screen::ContactDetail(c) => format!("{} > {}", Tab::Contacts.title(), c.name),
    }
}

pub fn run_tab(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], TAB_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 1, 1) {
        return out;
    }

    match parsed.positional[0].parse::<Tab>() {
        Ok(tab) => {
            session.phone.nav.switch(tab);
            CommandOutput::ok(format!("{}\n", describe(&session.phone.nav.current())))
        }
        Err(e) => CommandOutput::usage(e),
    }
}

pub fn run_screen(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], SCREEN_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }
    CommandOutput::ok(format!("{}\n", describe(&session.phone.nav.current())))
}

pub fn run_back(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], BACK_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }
    session.phone.nav.back();
    CommandOutput::ok(format!("{}\n", describe(&session.phone.nav.current())))
}
