//! Chaining reasons from other outcomes.
//!
//! Extension traits over [`Error`] and [`Success`] that read the reason held
//! by another outcome.

use crate::errors::OutcomeError;
use crate::outcome::Outcome;
use reasoned_reasons::{Error, Reason, Success};

/// Append the error of a failed outcome as a cause.
pub trait CausedByOutcome: Sized {
    /// Append `outcome`'s error as a cause.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::OutcomeSucceeded`] when `outcome` succeeded,
    /// since there is no error to capture.
    fn caused_by_outcome<T>(self, outcome: &Outcome<T>) -> Result<Self, OutcomeError>;
}

impl CausedByOutcome for Error {
    fn caused_by_outcome<T>(self, outcome: &Outcome<T>) -> Result<Self, OutcomeError> {
        match outcome {
            Outcome::Failed { error } => Ok(self.caused_by(error.clone())),
            Outcome::Succeeded { .. } => {
                tracing::debug!(
                    message = self.message(),
                    "cause requested from a successful outcome"
                );
                Err(OutcomeError::OutcomeSucceeded)
            },
        }
    }
}

/// Append the success of a successful outcome as an antecedent.
pub trait AntecededByOutcome: Sized {
    /// Append `outcome`'s success as an antecedent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::OutcomeFailed`] when `outcome` failed.
    fn anteceded_by_outcome<T>(self, outcome: &Outcome<T>) -> Result<Self, OutcomeError>;
}

impl AntecededByOutcome for Success {
    fn anteceded_by_outcome<T>(self, outcome: &Outcome<T>) -> Result<Self, OutcomeError> {
        match outcome {
            Outcome::Succeeded { success, .. } => Ok(self.anteceded_by(success.clone())),
            Outcome::Failed { error } => {
                tracing::debug!(
                    message = self.message(),
                    "antecedent requested from a failed outcome"
                );
                Err(OutcomeError::OutcomeFailed {
                    error: error.clone(),
                })
            },
        }
    }
}
