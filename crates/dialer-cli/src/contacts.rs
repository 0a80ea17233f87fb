//! Contact directory commands.

use crate::{expect_args, json_output, parse_args, table, CommandOutput, Session};

const CONTACTS_HELP: &str = "\
List contacts by name

Usage:
  dialer contacts [flags]

Flags:
  -h, --help   help for contacts
      --json   Output as JSON";

const CONTACT_HELP: &str = "\
Open a contact's details

Usage:
  dialer contact <id> [flags]

Flags:
  -h, --help   help for contact
      --json   Output as JSON";

const ADD_CONTACT_HELP: &str = "\
Add a contact; name, phone and email are all required

Usage:
  dialer add-contact <name> <phone> <email>";

const DELETE_CONTACT_HELP: &str = "\
Delete a contact

Usage:
  dialer delete-contact <id>";

pub fn run_contacts(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], CONTACTS_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }

    let contacts = session.phone.contacts.list();
    if parsed.json {
        return json_output(contacts);
    }
    let rows = contacts
        .iter()
        .map(|c| format!("{}\t{}\t{}", c.id, c.name, c.phone));
    CommandOutput::ok(table("ID\tNAME\tPHONE", rows))
}

pub fn run_contact(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], CONTACT_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 1, 1) {
        return out;
    }

    let contact = match session.phone.open_contact(&parsed.positional[0]) {
        Ok(c) => c,
        Err(e) => return CommandOutput::failed(e),
    };
    if parsed.json {
        return json_output(contact);
    }
    CommandOutput::ok(format!(
        "Contact details\nName: {}\nPhone: {}\nEmail: {}\n",
        contact.name, contact.phone, contact.email
    ))
}

pub fn run_add_contact(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], ADD_CONTACT_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 3, 3) {
        return out;
    }

    let [name, phone, email] = [
        &parsed.positional[0],
        &parsed.positional[1],
        &parsed.positional[2],
    ];
    match session.phone.contacts.add(name, phone, email) {
        Ok(contact) if parsed.json => json_output(&contact),
        Ok(contact) => CommandOutput::ok(format!("{}\n", contact.id)),
        Err(e) => CommandOutput::failed(e),
    }
}

pub fn run_delete_contact(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], DELETE_CONTACT_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 1, 1) {
        return out;
    }

    // Deleting an unknown id is not an error.
    match session.phone.delete_contact(&parsed.positional[0]) {
        Some(removed) => CommandOutput::ok(format!("deleted {}\n", removed.name)),
        None => CommandOutput::ok(""),
    }
}
