#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use dialer_cli::{run_cli_for_test, run_script_for_test};
use dialer_core::dial::Dialer;
use dialer_core::DialerError;

#[derive(Default)]
struct RecordingDialer {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl Dialer for RecordingDialer {
    fn place_call(&self, number: &str) -> Result<(), DialerError> {
        self.calls.lock().unwrap().push(number.to_string());
        if self.fail {
            return Err(DialerError::ExternalActionFailed("no handler for tel:".into()));
        }
        Ok(())
    }
}

#[test]
fn press_delete_dial_round_trip() {
    let dialer = Arc::new(RecordingDialer::default());
    let outs = run_script_for_test(
        &["press 0", "press 9", "del", "dial", "buffer"],
        dialer.clone(),
    );
    assert_eq!(outs[0].stdout, "0\n");
    assert_eq!(outs[1].stdout, "09\n");
    assert_eq!(outs[2].stdout, "0\n");
    assert_eq!(outs[3].stdout, "calling 0\n");
    assert_eq!(outs[4].stdout, "\n");
    assert_eq!(*dialer.calls.lock().unwrap(), ["0"]);
}

#[test]
fn press_accepts_runs_of_symbols() {
    let outs = run_script_for_test(&["press +84 90 1", "buffer"], Arc::new(RecordingDialer::default()));
    assert_eq!(outs[0].stdout, "+84901\n");
    assert_eq!(outs[1].stdout, "+84901\n");
}

#[test]
fn press_invalid_symbol_leaves_buffer() {
    let outs = run_script_for_test(&["press 12", "press 3#", "buffer"], Arc::new(RecordingDialer::default()));
    assert_eq!(outs[1].exit_code, 1);
    assert_eq!(outs[1].stderr, "validation failed: invalid keypad symbol: '#'\n");
    assert_eq!(outs[2].stdout, "12\n");
}

#[test]
fn press_requires_symbols() {
    let out = run_cli_for_test(&["press"], Arc::new(RecordingDialer::default()));
    assert_eq!(out.exit_code, 2);
}

#[test]
fn del_on_empty_buffer_is_fine() {
    let out = run_cli_for_test(&["del"], Arc::new(RecordingDialer::default()));
    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "\n");
}

#[test]
fn dial_empty_buffer_fails() {
    let dialer = Arc::new(RecordingDialer::default());
    let outs = run_script_for_test(&["dial", r#"type "   ""#, "dial"], dialer.clone());
    assert_eq!(outs[0].exit_code, 1);
    assert_eq!(outs[0].stderr, "dial buffer is empty\n");
    assert_eq!(outs[2].exit_code, 1);
    assert!(dialer.calls.lock().unwrap().is_empty());
}

#[test]
fn typed_number_is_dialed_raw() {
    let dialer = Arc::new(RecordingDialer::default());
    let outs = run_script_for_test(&["type 090 123 4567", "dial"], dialer.clone());
    assert_eq!(outs[0].stdout, "090 123 4567\n");
    assert_eq!(outs[1].stdout, "calling 090 123 4567\n");
    assert_eq!(*dialer.calls.lock().unwrap(), ["090 123 4567"]);
}

#[test]
fn cancel_clears_without_dialing() {
    let dialer = Arc::new(RecordingDialer::default());
    let outs = run_script_for_test(&["press 555", "cancel", "buffer"], dialer.clone());
    assert_eq!(outs[1].stdout, "\n");
    assert_eq!(outs[2].stdout, "\n");
    assert!(dialer.calls.lock().unwrap().is_empty());
}

#[test]
fn dial_failure_still_clears_buffer() {
    let dialer = Arc::new(RecordingDialer {
        fail: true,
        ..RecordingDialer::default()
    });
    let outs = run_script_for_test(&["press 113", "dial", "buffer"], dialer);
    assert_eq!(outs[1].exit_code, 0);
    assert_eq!(outs[1].stdout, "calling 113\n");
    assert_eq!(
        outs[1].stderr,
        "failed to open dialer: external action failed: no handler for tel:\n"
    );
    assert_eq!(outs[2].stdout, "\n");
}
