//! Keypad input buffer.
//!
//! States are `Empty` and `NonEmpty`. `press` always lands in `NonEmpty`,
//! `delete` may fall back to `Empty`, and both `commit` and `cancel` reset to
//! `Empty`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::dial::{place_call_reported, DialOutcome, Dialer};
use crate::error::DialerError;
use crate::validate::{has_text, validate_keypad_symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialState {
    Empty,
    NonEmpty,
}

pub struct DialBuffer {
    text: String,
    dialer: Arc<dyn Dialer>,
}

impl fmt::Debug for DialBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialBuffer")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl DialBuffer {
    pub fn new(dialer: Arc<dyn Dialer>) -> Self {
        Self {
            text: String::new(),
            dialer,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> DialState {
        if self.text.is_empty() {
            DialState::Empty
        } else {
            DialState::NonEmpty
        }
    }

    /// Append a keypad symbol (`0-9` or `+`).
    pub fn press(&mut self, symbol: char) -> Result<&str, DialerError> {
        validate_keypad_symbol(symbol)?;
        self.text.push(symbol);
        Ok(&self.text)
    }

    /// Remove the last character, if any.
    pub fn delete(&mut self) -> &str {
        self.text.pop();
        &self.text
    }

    /// Replace the buffer with typed text (the free-form phone field).
    pub fn set_text(&mut self, text: &str) -> &str {
        self.text = text.to_string();
        &self.text
    }

    /// Dial the buffer contents and reset to empty.
    ///
    /// A blank buffer is rejected and left untouched. Once dialing starts the
    /// buffer is cleared whatever the dialer reports.
    pub fn commit(&mut self) -> Result<DialOutcome, DialerError> {
        if !has_text(&self.text) {
            return Err(DialerError::EmptyBuffer);
        }
        let number = std::mem::take(&mut self.text);
        Ok(place_call_reported(self.dialer.as_ref(), &number))
    }

    pub fn cancel(&mut self) -> &str {
        self.text.clear();
        &self.text
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Dialer for Recording {
        fn place_call(&self, number: &str) -> Result<(), DialerError> {
            self.calls.lock().unwrap().push(number.to_string());
            if self.fail {
                return Err(DialerError::ExternalActionFailed("busy".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn press_press_delete_commit() {
        let dialer = Arc::new(Recording::default());
        let mut buf = DialBuffer::new(dialer.clone());
        assert_eq!(buf.state(), DialState::Empty);
        buf.press('0').unwrap();
        buf.press('9').unwrap();
        assert_eq!(buf.delete(), "0");
        assert_eq!(buf.state(), DialState::NonEmpty);

        let outcome = buf.commit().unwrap();
        assert_eq!(outcome, DialOutcome::Placed { number: "0".into() });
        assert_eq!(buf.as_str(), "");
        assert_eq!(buf.state(), DialState::Empty);
        assert_eq!(*dialer.calls.lock().unwrap(), ["0"]);
    }

    #[test]
    fn press_rejects_non_keypad_symbols() {
        let mut buf = DialBuffer::new(Arc::new(Recording::default()));
        buf.press('1').unwrap();
        assert!(matches!(
            buf.press('#'),
            Err(DialerError::ValidationFailed(_))
        ));
        assert_eq!(buf.press('+').unwrap(), "1+");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut buf = DialBuffer::new(Arc::new(Recording::default()));
        assert_eq!(buf.delete(), "");
        assert_eq!(buf.state(), DialState::Empty);
    }

    #[test]
    fn delete_to_empty() {
        let mut buf = DialBuffer::new(Arc::new(Recording::default()));
        buf.press('5').unwrap();
        buf.delete();
        assert_eq!(buf.state(), DialState::Empty);
    }

    #[test]
    fn commit_empty_or_blank_fails_without_dialing() {
        let dialer = Arc::new(Recording::default());
        let mut buf = DialBuffer::new(dialer.clone());
        assert_eq!(buf.commit(), Err(DialerError::EmptyBuffer));
        buf.set_text("   ");
        assert_eq!(buf.commit(), Err(DialerError::EmptyBuffer));
        assert_eq!(buf.as_str(), "   ");
        assert!(dialer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn commit_resets_even_when_dial_fails() {
        let dialer = Arc::new(Recording {
            fail: true,
            ..Recording::default()
        });
        let mut buf = DialBuffer::new(dialer.clone());
        buf.set_text("0901234567");
        let outcome = buf.commit().unwrap();
        assert!(!outcome.is_placed());
        assert_eq!(buf.state(), DialState::Empty);
        assert_eq!(dialer.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn cancel_resets_without_dialing() {
        let dialer = Arc::new(Recording::default());
        let mut buf = DialBuffer::new(dialer.clone());
        buf.press('1').unwrap();
        assert_eq!(buf.cancel(), "");
        assert_eq!(buf.state(), DialState::Empty);
        assert!(dialer.calls.lock().unwrap().is_empty());
    }
}
