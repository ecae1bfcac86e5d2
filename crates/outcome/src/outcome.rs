//! The outcome sum type, its constructors, and accessors.

use reasoned_reasons::{Error, Success};
use std::fmt;

/// Result of an operation that may succeed or fail, with a reason either way.
///
/// `Succeeded` always holds a [`Success`] and `Failed` always holds an
/// [`Error`]; the variant is fixed at construction and every combinator
/// returns a new outcome. The value-less form is `Outcome<()>`.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T = ()> {
    /// The operation succeeded.
    Succeeded {
        /// Produced value.
        value: T,
        /// Why the operation succeeded.
        success: Success,
    },
    /// The operation failed.
    Failed {
        /// Why the operation failed.
        error: Error,
    },
}

/// Outcome without a value.
pub type UnitOutcome = Outcome<()>;

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl<T> Outcome<T> {
    /// Succeed with `value` and an empty success reason.
    pub fn succeed(value: T) -> Self {
        Self::succeed_with(value, Success::default())
    }

    /// Succeed with `value` and an explicit success reason.
    pub fn succeed_with(value: T, success: impl Into<Success>) -> Self {
        Self::Succeeded {
            value,
            success: success.into(),
        }
    }

    /// Fail with a message or an existing error.
    pub fn fail(error: impl Into<Error>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Fail with a native error wrapped as an exceptional error.
    pub fn fail_exception<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::fail(Error::from_exception(error))
    }

    /// Succeed with the contained value, or fail with `error` when `None`.
    pub fn from_option(option: Option<T>, error: impl Into<Error>) -> Self {
        match option {
            Some(value) => Self::succeed(value),
            None => Self::fail(error),
        }
    }

    /// Convert a native result, wrapping its error as an exceptional error.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::succeed(value),
            Err(error) => Self::fail_exception(error),
        }
    }
}

impl Outcome<()> {
    /// Succeed with an empty success reason.
    pub fn unit() -> Self {
        Self::succeed(())
    }

    /// Succeed with an explicit success reason.
    pub fn unit_with(success: impl Into<Success>) -> Self {
        Self::succeed_with((), success)
    }

    /// Succeed with `success` when `condition` holds, otherwise fail with `error`.
    pub fn succeed_when(
        condition: bool,
        success: impl Into<Success>,
        error: impl Into<Error>,
    ) -> Self {
        if condition {
            Self::unit_with(success)
        } else {
            Self::fail(error)
        }
    }

    /// Fail with `error` when `condition` holds, otherwise succeed with `success`.
    pub fn fail_when(
        condition: bool,
        success: impl Into<Success>,
        error: impl Into<Error>,
    ) -> Self {
        Self::succeed_when(!condition, success, error)
    }

    /// Iterate over zero or one success reason.
    pub fn successes(&self) -> std::option::IntoIter<&Success> {
        self.success().into_iter()
    }

    /// Consume the outcome, yielding zero or one success reason.
    pub fn into_successes(self) -> std::option::IntoIter<Success> {
        match self {
            Self::Succeeded { success, .. } => Some(success).into_iter(),
            Self::Failed { .. } => None.into_iter(),
        }
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl<T> Outcome<T> {
    /// Returns true in the `Succeeded` state.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns true in the `Failed` state.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value, or `None` when failed.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded { value, .. } => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// The success reason, or `None` when failed.
    pub const fn success(&self) -> Option<&Success> {
        match self {
            Self::Succeeded { success, .. } => Some(success),
            Self::Failed { .. } => None,
        }
    }

    /// The error reason, or `None` when succeeded.
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }

    /// Borrow the value, cloning the reason.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Succeeded { value, success } => Outcome::Succeeded {
                value,
                success: success.clone(),
            },
            Self::Failed { error } => Outcome::Failed {
                error: error.clone(),
            },
        }
    }

    /// Iterate over zero or one `(value, success)` pair.
    ///
    /// Unit outcomes yield `((), success)`; [`Outcome::successes`] yields the
    /// reason alone.
    pub fn iter(&self) -> std::option::IntoIter<(&T, &Success)> {
        match self {
            Self::Succeeded { value, success } => Some((value, success)).into_iter(),
            Self::Failed { .. } => None.into_iter(),
        }
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = (T, Success);
    type IntoIter = std::option::IntoIter<(T, Success)>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Succeeded { value, success } => Some((value, success)).into_iter(),
            Self::Failed { .. } => None.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = (&'a T, &'a Success);
    type IntoIter = std::option::IntoIter<(&'a T, &'a Success)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect outcomes into one, stopping at the first failure.
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        crate::sequence::transform(iter, |outcome| outcome)
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { value, success } => {
                write!(formatter, "Succeeded({value:?} | {success})")
            },
            Self::Failed { error } => write!(formatter, "Failed(Error={error})"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
