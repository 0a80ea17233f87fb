//! dialer-cli: line-oriented shell over a [`Phone`] session.
//!
//! Each command is one user intent (press, type, delete, confirm) forwarded
//! into the matching manager operation. Output is collected into a
//! [`CommandOutput`] so the binary and the tests share one code path.

use std::io::Write;
use std::sync::Arc;

use dialer_core::confirm::{AssumeNo, ConfirmPrompt};
use dialer_core::dial::Dialer;
use dialer_core::phone::Phone;
use serde::Serialize;
use tabwriter::TabWriter;

pub mod calls;
pub mod contacts;
pub mod favorites;
pub mod keypad;
pub mod repl;
pub mod screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn ok_with_warning(stdout: impl Into<String>, warning: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: warning.into(),
            exit_code: 0,
        }
    }

    /// Operation rejected (validation, lookup, empty buffer).
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code: 1,
        }
    }

    /// Bad command line.
    pub fn usage(message: impl std::fmt::Display) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code: 2,
        }
    }
}

/// A phone plus the prompt used for confirmations that were not pre-answered.
pub struct Session {
    pub phone: Phone,
    prompt: Box<dyn ConfirmPrompt>,
}

impl Session {
    pub fn new(phone: Phone, prompt: Box<dyn ConfirmPrompt>) -> Self {
        Self { phone, prompt }
    }

    pub fn prompt(&self) -> &dyn ConfirmPrompt {
        self.prompt.as_ref()
    }

    /// Run one already-split command.
    pub fn run(&mut self, args: &[&str]) -> CommandOutput {
        let Some((cmd, rest)) = args.split_first() else {
            return CommandOutput::usage("missing command");
        };

        match *cmd {
            "calls" => calls::run_calls(rest, self),
            "filter" => calls::run_filter(rest, self),
            "redial" => calls::run_redial(rest, self),
            "contacts" => contacts::run_contacts(rest, self),
            "contact" => contacts::run_contact(rest, self),
            "add-contact" => contacts::run_add_contact(rest, self),
            "delete-contact" => contacts::run_delete_contact(rest, self),
            "favorites" => favorites::run_favorites(rest, self),
            "add-favorite" => favorites::run_add_favorite(rest, self),
            "remove-favorite" => favorites::run_remove_favorite(rest, self),
            "delete-mode" => favorites::run_delete_mode(rest, self),
            "press" => keypad::run_press(rest, self),
            "del" => keypad::run_del(rest, self),
            "type" => keypad::run_type(rest, self),
            "dial" => keypad::run_dial(rest, self),
            "cancel" => keypad::run_cancel(rest, self),
            "buffer" => keypad::run_buffer(rest, self),
            "tab" => screen::run_tab(rest, self),
            "screen" => screen::run_screen(rest, self),
            "back" => screen::run_back(rest, self),
            "help" | "-h" | "--help" => CommandOutput::ok(format!("{HELP_TEXT}\n")),
            _ => CommandOutput::usage(format!("unknown command: {cmd}")),
        }
    }

    /// Split and run one input line.
    pub fn run_line(&mut self, line: &str) -> CommandOutput {
        match split_line(line) {
            Ok(words) => {
                if words.is_empty() {
                    return CommandOutput::ok("");
                }
                let refs: Vec<&str> = words.iter().map(String::as_str).collect();
                self.run(&refs)
            }
            Err(e) => CommandOutput::usage(e),
        }
    }
}

/// Run a single command against a freshly seeded phone.
pub fn run_cli_for_test(args: &[&str], dialer: Arc<dyn Dialer>) -> CommandOutput {
    let mut session = Session::new(Phone::seeded(dialer), Box::new(AssumeNo));
    session.run(args)
}

/// Run several input lines against one seeded phone, in order.
pub fn run_script_for_test(lines: &[&str], dialer: Arc<dyn Dialer>) -> Vec<CommandOutput> {
    let mut session = Session::new(Phone::seeded(dialer), Box::new(AssumeNo));
    lines.iter().map(|line| session.run_line(line)).collect()
}

/// Split a line into words. Single or double quotes group words with spaces.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Flags and positionals pulled out of a command's arguments.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub json: bool,
    pub yes: bool,
    pub positional: Vec<String>,
}

/// Parse `args` accepting only the listed flags. `-h`/`--help` returns the help text.
pub(crate) fn parse_args(
    args: &[&str],
    allowed: &[&str],
    help: &str,
) -> Result<ParsedArgs, CommandOutput> {
    let mut parsed = ParsedArgs::default();
    for arg in args {
        match *arg {
            "-h" | "--help" => return Err(CommandOutput::ok(format!("{help}\n"))),
            "--json" if allowed.contains(&"--json") => parsed.json = true,
            "--yes" | "-y" if allowed.contains(&"--yes") => parsed.yes = true,
            v if v.starts_with('-') && v.len() > 1 && !is_number_like(v) => {
                return Err(CommandOutput::usage(format!("unknown flag: {v}")));
            }
            v => parsed.positional.push(v.to_string()),
        }
    }
    Ok(parsed)
}

// `-1` style tokens are never flags here.
fn is_number_like(v: &str) -> bool {
    v[1..].chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn expect_args(
    parsed: &ParsedArgs,
    min: usize,
    max: usize,
) -> Result<(), CommandOutput> {
    let n = parsed.positional.len();
    if n < min || n > max {
        let msg = if min == max {
            format!("expected {min} args, got {n}")
        } else {
            format!("expected {min} to {max} args, got {n}")
        };
        return Err(CommandOutput::usage(msg));
    }
    Ok(())
}

pub(crate) fn json_output<T: Serialize + ?Sized>(value: &T) -> CommandOutput {
    match serde_json::to_string_pretty(value) {
        Ok(encoded) => CommandOutput::ok(format!("{encoded}\n")),
        Err(e) => CommandOutput::failed(format!("encode json: {e}")),
    }
}

/// Render rows as aligned columns.
pub(crate) fn table(header: &str, rows: impl IntoIterator<Item = String>) -> String {
    let mut tw = TabWriter::new(Vec::new());
    let _ = writeln!(&mut tw, "{header}");
    for row in rows {
        let _ = writeln!(&mut tw, "{row}");
    }
    let bytes = tabwriter_into_bytes(tw);
    String::from_utf8_lossy(&bytes).into_owned()
}

fn tabwriter_into_bytes(mut tw: TabWriter<Vec<u8>>) -> Vec<u8> {
    loop {
        match tw.into_inner() {
            Ok(v) => return v,
            Err(e) => tw = e.into_inner(),
        }
    }
}

pub const HELP_TEXT: &str = "\
Dialer shell

Calls:
  calls [--json]                      List calls under the current filter
  filter [all|incoming|outgoing|missed]
                                      Cycle the call filter, or set it
  redial <id>                         Call a number from the log again

Contacts:
  contacts [--json]                   List contacts by name
  contact <id> [--json]               Open a contact's details
  back                                Close the detail screen
  add-contact <name> <phone> <email>  Add a contact
  delete-contact <id>                 Delete a contact

Favorites:
  favorites [query] [--json]          Search favorites by name
  add-favorite <number> <name>        Add a favorite
  remove-favorite <number> [--yes]    Delete a favorite after confirmation
  delete-mode                         Toggle delete controls

Keypad:
  press <symbols>                     Press keys 0-9 and +
  del                                 Delete the last symbol
  type <text>                         Replace the number field
  dial                                Call the entered number
  cancel                              Clear the number field
  buffer                              Show the number field

Navigation:
  tab <calls|favorites|contacts>      Switch tab
  screen                              Show the current screen";
