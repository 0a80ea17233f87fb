//! Error taxonomy shared by every manager.

/// Errors surfaced by dialer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialerError {
    /// A required field was empty, or a value was not acceptable.
    #[error("validation failed: {0}")]
    ValidationFailed(String),
    /// A favorite with this number already exists.
    #[error("duplicate number: {0}")]
    DuplicateNumber(String),
    /// A lookup missed.
    #[error("not found: {0}")]
    NotFound(String),
    /// Commit was attempted with nothing to dial.
    #[error("dial buffer is empty")]
    EmptyBuffer,
    /// The host could not launch the dial intent.
    #[error("external action failed: {0}")]
    ExternalActionFailed(String),
}

impl DialerError {
    /// Errors that should keep the originating form open.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::ValidationFailed(_) | Self::DuplicateNumber(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = DialerError::ValidationFailed("name is required".into());
        assert_eq!(e.to_string(), "validation failed: name is required");

        let e = DialerError::DuplicateNumber("0123456789".into());
        assert_eq!(e.to_string(), "duplicate number: 0123456789");

        let e = DialerError::NotFound("contact 42".into());
        assert_eq!(e.to_string(), "not found: contact 42");

        assert_eq!(DialerError::EmptyBuffer.to_string(), "dial buffer is empty");

        let e = DialerError::ExternalActionFailed("no dialer".into());
        assert_eq!(e.to_string(), "external action failed: no dialer");
    }

    #[test]
    fn only_form_errors_block() {
        assert!(DialerError::ValidationFailed(String::new()).is_blocking());
        assert!(DialerError::DuplicateNumber(String::new()).is_blocking());
        assert!(!DialerError::NotFound(String::new()).is_blocking());
        assert!(!DialerError::EmptyBuffer.is_blocking());
        assert!(!DialerError::ExternalActionFailed(String::new()).is_blocking());
    }

    #[test]
    fn error_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(DialerError::EmptyBuffer);
        assert!(e.to_string().contains("empty"));
    }
}
