//! Value extraction and conversion out of an outcome.

use crate::errors::{DEFAULT_MISSING_VALUE_MESSAGE, OutcomeError};
use crate::outcome::Outcome;
use reasoned_reasons::{Error, Success};

impl<T> Outcome<T> {
    /// The value, or `alternative` when failed.
    pub fn value_or(self, alternative: T) -> T {
        match self {
            Self::Succeeded { value, .. } => value,
            Self::Failed { .. } => alternative,
        }
    }

    /// The value, or one computed from the error when failed.
    pub fn value_or_else<F>(self, alternative: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Succeeded { value, .. } => value,
            Self::Failed { error } => alternative(error),
        }
    }

    /// The value, or `T::default()` when failed.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(|_| T::default())
    }

    /// The value, or [`OutcomeError::MissingValue`] when failed.
    pub fn value_or_failure(self) -> Result<T, OutcomeError> {
        self.value_or_failure_msg(DEFAULT_MISSING_VALUE_MESSAGE)
    }

    /// The value, or [`OutcomeError::MissingValue`] carrying `message`.
    pub fn value_or_failure_msg(self, message: impl Into<String>) -> Result<T, OutcomeError> {
        match self {
            Self::Succeeded { value, .. } => Ok(value),
            Self::Failed { error } => {
                let message = message.into();
                tracing::debug!(%message, error = %error, "value requested from failed outcome");
                Err(OutcomeError::MissingValue { message, error })
            },
        }
    }

    /// The value as an `Option`, discarding the reason.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Succeeded { value, .. } => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// Convert into a native `Result`, discarding the success reason.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Succeeded { value, .. } => Ok(value),
            Self::Failed { error } => Err(error),
        }
    }

    /// Take the error out of a failed outcome.
    pub fn try_into_error(self) -> Result<Error, OutcomeError> {
        match self {
            Self::Succeeded { .. } => Err(OutcomeError::OutcomeSucceeded),
            Self::Failed { error } => Ok(error),
        }
    }

    /// Take the success reason out of a successful outcome.
    pub fn try_into_success(self) -> Result<Success, OutcomeError> {
        match self {
            Self::Succeeded { success, .. } => Ok(success),
            Self::Failed { error } => Err(OutcomeError::OutcomeFailed { error }),
        }
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_option()
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
