//! Error types.
//!
//! Neither error reaches the visitor: components log them and carry on.

use thiserror::Error;

/// Contact form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A DOM `name` attribute that is not one of the four form fields.
    #[error("unknown form field `{0}` (expected name, email, phone or message)")]
    UnknownField(String),
}

/// Failure of the collaborator that acknowledges a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The host environment refused or failed to show the acknowledgment.
    #[error("host notification failed: {0}")]
    Host(String),
}
