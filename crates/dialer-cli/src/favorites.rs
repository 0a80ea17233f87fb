//! Favorites commands.

use dialer_core::confirm::AssumeYes;
use dialer_core::favorites::Removal;

use crate::{expect_args, json_output, parse_args, table, CommandOutput, Session};

const FAVORITES_HELP: &str = "\
Search favorites by name (case-insensitive); no query lists all

Usage:
  dialer favorites [query] [flags]

Flags:
  -h, --help   help for favorites
      --json   Output as JSON";

const ADD_FAVORITE_HELP: &str = "\
Add a favorite; the number must not already be a favorite

Usage:
  dialer add-favorite <number> <name>";

const REMOVE_FAVORITE_HELP: &str = "\
Delete a favorite after confirmation; delete mode must be on

Usage:
  dialer remove-favorite <number> [flags]

Flags:
  -h, --help   help for remove-favorite
  -y, --yes    Confirm without asking";

const DELETE_MODE_HELP: &str = "\
Toggle the per-entry delete controls on the favorites list

Usage:
  dialer delete-mode";

pub fn run_favorites(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], FAVORITES_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 1) {
        return out;
    }

    let query = parsed.positional.first().map(String::as_str).unwrap_or("");
    let favorites = &session.phone.favorites;
    let hits = favorites.list(query);
    if parsed.json {
        return json_output(&hits);
    }

    let delete_mode = favorites.delete_mode();
    let rows = hits.iter().map(|f| {
        if delete_mode {
            format!("{}\t{}\t(-)", f.name, f.number)
        } else {
            format!("{}\t{}", f.name, f.number)
        }
    });
    let header = if delete_mode {
        "NAME\tNUMBER\tDELETE"
    } else {
        "NAME\tNUMBER"
    };
    CommandOutput::ok(table(header, rows))
}

pub fn run_add_favorite(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], ADD_FAVORITE_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 2, 2) {
        return out;
    }

    let (number, name) = (&parsed.positional[0], &parsed.positional[1]);
    match session.phone.favorites.add(number, name) {
        Ok(entry) if parsed.json => json_output(&entry),
        Ok(entry) => CommandOutput::ok(format!("{}: {}\n", entry.name, entry.number)),
        Err(e) => CommandOutput::failed(e),
    }
}

pub fn run_remove_favorite(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--yes"], REMOVE_FAVORITE_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 1, 1) {
        return out;
    }

    if !session.phone.favorites.delete_mode() {
        return CommandOutput::failed("delete mode is off; run delete-mode first");
    }

    let number = &parsed.positional[0];
    let removal = if parsed.yes {
        session.phone.favorites.remove(number, &AssumeYes)
    } else {
        let pending = session.phone.favorites.request_removal(number);
        let decision = session.prompt().confirm(&pending.request());
        session.phone.favorites.resolve(pending, decision)
    };

    match removal {
        Removal::Removed(entry) => CommandOutput::ok(format!("removed {}\n", entry.number)),
        Removal::Absent => CommandOutput::ok(""),
        Removal::Cancelled => CommandOutput::ok("cancelled\n"),
    }
}

pub fn run_delete_mode(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], DELETE_MODE_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }

    let on = session.phone.favorites.toggle_delete_mode();
    CommandOutput::ok(format!("delete mode: {}\n", if on { "on" } else { "off" }))
}
