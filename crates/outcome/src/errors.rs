//! Precondition failures raised when an outcome is read from the wrong state.

use reasoned_reasons::Error;
use thiserror::Error;

/// Default message carried by [`OutcomeError::MissingValue`].
pub const DEFAULT_MISSING_VALUE_MESSAGE: &str = "outcome has no value";

/// Misuse of an outcome by the calling code.
///
/// Unlike the [`Error`] inside a failed outcome, these describe bugs: asking
/// for the error of a successful outcome, or unwrapping a failed one.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// An error was requested from a successful outcome.
    #[error("invalid state: outcome succeeded and carries no error")]
    OutcomeSucceeded,

    /// A success was requested from a failed outcome.
    #[error("invalid state: outcome failed and carries no success")]
    OutcomeFailed {
        /// Error held by the failed outcome.
        error: Error,
    },

    /// A value was required from a failed outcome.
    #[error("missing value: {message}")]
    MissingValue {
        /// Caller-supplied or default message.
        message: String,
        /// Error held by the failed outcome.
        #[source]
        error: Error,
    },
}
