//! Call log commands: `calls`, `filter`, `redial`.

use dialer_core::call_log::CallFilter;
use dialer_core::dial::DialOutcome;

use crate::{expect_args, json_output, parse_args, table, CommandOutput, Session};

const CALLS_HELP: &str = "\
List calls under the current filter

Usage:
  dialer calls [flags]

Flags:
  -h, --help   help for calls
      --json   Output as JSON";

const FILTER_HELP: &str = "\
Cycle the call filter (all -> incoming -> outgoing -> missed), or set it

Usage:
  dialer filter [all|incoming|outgoing|missed]";

const REDIAL_HELP: &str = "\
Call a number from the log again

Usage:
  dialer redial <id>";

pub fn run_calls(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], CALLS_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 0) {
        return out;
    }

    let visible = session.phone.calls.visible();
    if parsed.json {
        return json_output(&visible);
    }
    let rows = visible
        .iter()
        .map(|r| format!("{}\t{}\t{}", r.id, r.status, r.number));
    CommandOutput::ok(table("ID\tSTATUS\tNUMBER", rows))
}

pub fn run_filter(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &[], FILTER_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 0, 1) {
        return out;
    }

    let calls = &mut session.phone.calls;
    let filter = match parsed.positional.first() {
        Some(raw) => match raw.parse::<CallFilter>() {
            Ok(f) => {
                calls.set_filter(f);
                f
            }
            Err(e) => return CommandOutput::usage(e),
        },
        None => calls.cycle_filter(),
    };
    CommandOutput::ok(format!("filter: {filter}\n"))
}

pub fn run_redial(args: &[&str], session: &mut Session) -> CommandOutput {
    let parsed = match parse_args(args, &["--json"], REDIAL_HELP) {
        Ok(p) => p,
        Err(out) => return out,
    };
    if let Err(out) = expect_args(&parsed, 1, 1) {
        return out;
    }

    // Unknown ids are a silent no-op.
    let Some(redial) = session.phone.calls.redial(&parsed.positional[0]) else {
        return CommandOutput::ok("");
    };
    if parsed.json {
        return json_output(&redial);
    }

    let mut stdout = format!("calling {}\n", redial.record.number);
    if redial.previous != redial.record.status {
        stdout.push_str(&format!(
            "call {} marked {} (was {})\n",
            redial.record.id, redial.record.status, redial.previous
        ));
    }
    match redial.dial {
        DialOutcome::Placed { .. } => CommandOutput::ok(stdout),
        DialOutcome::Failed { reason, .. } => {
            CommandOutput::ok_with_warning(stdout, format!("failed to open dialer: {reason}\n"))
        }
    }
}
