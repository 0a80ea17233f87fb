//! The external "place call" capability.
//!
//! Managers treat dialing as fire-and-forget: their own state transition is
//! applied first, then the dialer is asked to open a `tel:` intent. A failure
//! is logged and handed back as a [`DialOutcome`], never propagated as an
//! error from the manager operation.

use std::process::{Command, Stdio};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::DialerError;

/// Host capability that launches a telephone call.
pub trait Dialer: Send + Sync {
    fn place_call(&self, number: &str) -> Result<(), DialerError>;
}

/// What happened when a manager asked the host to dial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DialOutcome {
    Placed { number: String },
    Failed { number: String, reason: String },
}

impl DialOutcome {
    pub fn number(&self) -> &str {
        match self {
            Self::Placed { number } | Self::Failed { number, .. } => number,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

/// Ask `dialer` to call `number`, catching and logging any failure.
pub fn place_call_reported(dialer: &dyn Dialer, number: &str) -> DialOutcome {
    match dialer.place_call(number) {
        Ok(()) => {
            tracing::info!(number, "call placed");
            DialOutcome::Placed {
                number: number.to_string(),
            }
        }
        Err(err) => {
            tracing::warn!(number, error = %err, "failed to open dialer");
            DialOutcome::Failed {
                number: number.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

/// Build the `tel:` URI handed to the host.
pub fn tel_uri(number: &str) -> String {
    format!("tel:{number}")
}

/// Opens `tel:` URIs with an external opener program (e.g. `xdg-open`).
#[derive(Debug, Clone)]
pub struct CommandDialer {
    opener: String,
}

impl CommandDialer {
    pub fn new(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }
}

impl Dialer for CommandDialer {
    /// Launch the opener and return without waiting for it. Only a failed
    /// spawn is an error; the exit status is reaped and logged in the
    /// background.
    fn place_call(&self, number: &str) -> Result<(), DialerError> {
        let uri = tel_uri(number);
        let mut child = Command::new(&self.opener)
            .arg(&uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                DialerError::ExternalActionFailed(format!("spawn {}: {e}", self.opener))
            })?;

        let opener = self.opener.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!(%opener, %uri, %status, "dial opener exited"),
            Err(err) => tracing::warn!(%opener, %uri, error = %err, "wait for dial opener"),
        });
        Ok(())
    }
}

/// Accepts every request and only logs it; for hosts without a tel handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDialer;

impl Dialer for LogDialer {
    fn place_call(&self, number: &str) -> Result<(), DialerError> {
        tracing::info!(uri = %tel_uri(number), "dial requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Refusing;

    impl Dialer for Refusing {
        fn place_call(&self, _number: &str) -> Result<(), DialerError> {
            Err(DialerError::ExternalActionFailed("no dialer available".into()))
        }
    }

    #[test]
    fn tel_uri_keeps_raw_number() {
        assert_eq!(tel_uri("+84 123"), "tel:+84 123");
    }

    #[test]
    fn reported_success() {
        let outcome = place_call_reported(&LogDialer, "0987654321");
        assert!(outcome.is_placed());
        assert_eq!(outcome.number(), "0987654321");
    }

    #[test]
    fn reported_failure_is_caught() {
        let outcome = place_call_reported(&Refusing, "0123");
        assert_eq!(
            outcome,
            DialOutcome::Failed {
                number: "0123".into(),
                reason: "external action failed: no dialer available".into(),
            }
        );
    }

    #[test]
    fn command_dialer_missing_program_fails() {
        let dialer = CommandDialer::new("/nonexistent/dialer-opener-for-tests");
        let err = dialer.place_call("0123");
        assert!(matches!(err, Err(DialerError::ExternalActionFailed(_))));
    }

    #[test]
    fn command_dialer_does_not_wait_for_exit_status() {
        // `false` exits non-zero; only the spawn is reported.
        let dialer = CommandDialer::new("false");
        assert_eq!(dialer.place_call("0123"), Ok(()));
        assert_eq!(dialer.opener(), "false");
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_string(&DialOutcome::Placed {
            number: "1".into(),
        })
        .unwrap_or_default();
        assert_eq!(json, r#"{"outcome":"placed","number":"1"}"#);
    }
}
