//! Validation helpers for user-entered form fields and keypad input.

use crate::error::DialerError;

/// Symbols the keypad can emit besides digits.
pub const KEYPAD_EXTRA_SYMBOLS: &[char] = &['+'];

/// True when `value` has something other than whitespace.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Require a non-blank form field.
pub fn require(field: &str, value: &str) -> Result<(), DialerError> {
    if has_text(value) {
        Ok(())
    } else {
        Err(DialerError::ValidationFailed(format!("{field} is required")))
    }
}

/// Require every `(field, value)` pair to be non-blank, reporting the first miss.
pub fn require_all(fields: &[(&str, &str)]) -> Result<(), DialerError> {
    for (field, value) in fields {
        require(field, value)?;
    }
    Ok(())
}

/// Check that `symbol` is a key on the dial pad (`0-9` or `+`).
pub fn validate_keypad_symbol(symbol: char) -> Result<(), DialerError> {
    if symbol.is_ascii_digit() || KEYPAD_EXTRA_SYMBOLS.contains(&symbol) {
        Ok(())
    } else {
        Err(DialerError::ValidationFailed(format!(
            "invalid keypad symbol: {symbol:?}"
        )))
    }
}
