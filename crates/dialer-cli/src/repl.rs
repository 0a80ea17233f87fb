//! The read-eval loop behind the `dialer` binary.

use std::io::{BufRead, IsTerminal, Write};

use dialer_core::confirm::{AssumeNo, ConfirmPrompt, ConfirmRequest, Decision};

use crate::{CommandOutput, Session};

/// Asks on stderr and reads the answer from stdin.
struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> Decision {
        eprint!(
            "{}: {} [{}/{}] ",
            request.title, request.message, request.proceed_label, request.cancel_label
        );
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return Decision::Cancel;
        }
        let answer = answer.trim().to_lowercase();
        if answer == "y" || answer == "yes" || answer == request.proceed_label.to_lowercase() {
            Decision::Proceed
        } else {
            Decision::Cancel
        }
    }
}

/// Prompt for confirmations. Only a terminal is asked; piped input carries
/// commands, so confirmations there are declined without reading a line.
pub fn confirm_prompt(interactive: bool) -> Box<dyn ConfirmPrompt> {
    if interactive {
        Box::new(StdinPrompt)
    } else {
        Box::new(AssumeNo)
    }
}

/// True when stdin is a terminal.
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Write a command's output to the two streams.
pub fn emit<W: Write, E: Write>(out: &CommandOutput, stdout: &mut W, stderr: &mut E) {
    if !out.stdout.is_empty() {
        let _ = stdout.write_all(out.stdout.as_bytes());
        let _ = stdout.flush();
    }
    if !out.stderr.is_empty() {
        let _ = stderr.write_all(out.stderr.as_bytes());
    }
}

/// Run lines from `input` until EOF or `exit`/`quit`.
///
/// Returns the exit code: 0 for an interactive session, otherwise the code of
/// the last command.
pub fn run_repl<R, W, E>(
    session: &mut Session,
    mut input: R,
    stdout: &mut W,
    stderr: &mut E,
    interactive: bool,
) -> i32
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut last_code = 0;
    loop {
        if interactive {
            let _ = stdout.write_all(b"> ");
            let _ = stdout.flush();
        }
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                let _ = writeln!(stderr, "read input: {e}");
                return 1;
            }
        }
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }
        let out = session.run_line(trimmed);
        emit(&out, stdout, stderr);
        last_code = out.exit_code;
    }
    if interactive {
        0
    } else {
        last_code
    }
}
