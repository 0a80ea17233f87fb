//! Yes/no confirmation prompt used by destructive flows.

use std::fmt;

/// The user's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Cancel,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed => f.write_str("proceed"),
            Self::Cancel => f.write_str("cancel"),
        }
    }
}

/// A question put to the user with two labeled choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub proceed_label: String,
}

/// Host capability that suspends a flow until the user decides.
pub trait ConfirmPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> Decision;
}

/// Answers every prompt with [`Decision::Proceed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&self, _request: &ConfirmRequest) -> Decision {
        Decision::Proceed
    }
}

/// Answers every prompt with [`Decision::Cancel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl ConfirmPrompt for AssumeNo {
    fn confirm(&self, _request: &ConfirmRequest) -> Decision {
        Decision::Cancel
    }
}
