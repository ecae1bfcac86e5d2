//! Combinator algebra over [`Outcome`].
//!
//! Combinators never mutate the receiver; they consume it and return a new
//! outcome. Functions passed to a combinator are only invoked when the
//! outcome is in the state that needs them.

use crate::outcome::Outcome;
use reasoned_reasons::{Error, Success};

// =============================================================================
// CONSUMPTION
// =============================================================================

impl<T> Outcome<T> {
    /// Evaluate exactly one branch.
    pub fn match_with<R, S, F>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(T, Success) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Succeeded { value, success } => on_success(value, success),
            Self::Failed { error } => on_fail(error),
        }
    }

    /// Evaluate exactly one branch on a borrowed outcome.
    pub fn match_ref<R, S, F>(&self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(&T, &Success) -> R,
        F: FnOnce(&Error) -> R,
    {
        match self {
            Self::Succeeded { value, success } => on_success(value, success),
            Self::Failed { error } => on_fail(error),
        }
    }

    /// Run `action` when succeeded, then return the outcome unchanged.
    pub fn if_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&T, &Success),
    {
        if let Self::Succeeded { value, success } = &self {
            action(value, success);
        }
        self
    }

    /// Run `action` when failed, then return the outcome unchanged.
    pub fn if_fail<A>(self, action: A) -> Self
    where
        A: FnOnce(&Error),
    {
        if let Self::Failed { error } = &self {
            action(error);
        }
        self
    }
}

// =============================================================================
// MAP / FLAT MAP
// =============================================================================

impl<T> Outcome<T> {
    /// Transform the value, keeping the success reason.
    pub fn map<U, F>(self, mapping: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Succeeded { value, success } => Outcome::Succeeded {
                value: mapping(value),
                success,
            },
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// Like [`map`](Self::map); on failure the error becomes `child_error`
    /// caused by the original error.
    pub fn map_wrap<U, F>(self, mapping: F, child_error: impl Into<Error>) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Succeeded { value, success } => Outcome::Succeeded {
                value: mapping(value),
                success,
            },
            Self::Failed { error } => Outcome::fail(child_error.into().caused_by(error)),
        }
    }

    /// Chain an operation that itself produces an outcome.
    ///
    /// A failed receiver short-circuits without invoking `mapping`.
    pub fn flat_map<U, F>(self, mapping: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Succeeded { value, .. } => mapping(value),
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// Like [`flat_map`](Self::flat_map), wrapping any failure.
    ///
    /// Whether the receiver already failed or `mapping` fails, the resulting
    /// error is `child_error` with the underlying error as its cause.
    pub fn flat_map_wrap<U, F>(self, mapping: F, child_error: impl Into<Error>) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Succeeded { value, .. } => mapping(value).flat_map_fail(child_error),
            Self::Failed { error } => Outcome::fail(child_error.into().caused_by(error)),
        }
    }

    /// When succeeded, replace the success reason with `child_success`
    /// anteceded by the current one.
    pub fn flat_map_success(self, child_success: impl Into<Success>) -> Self {
        match self {
            Self::Succeeded { value, success } => Self::Succeeded {
                value,
                success: child_success.into().anteceded_by(success),
            },
            failed @ Self::Failed { .. } => failed,
        }
    }

    /// When failed, replace the error with `child_error` caused by the
    /// current one.
    pub fn flat_map_fail(self, child_error: impl Into<Error>) -> Self {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded,
            Self::Failed { error } => Self::fail(child_error.into().caused_by(error)),
        }
    }
}

impl Outcome<()> {
    /// [`flat_map`](Outcome::flat_map) for value-less outcomes.
    pub fn then<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce() -> Outcome<U>,
    {
        self.flat_map(|()| next())
    }

    /// [`flat_map_wrap`](Outcome::flat_map_wrap) for value-less outcomes.
    pub fn then_wrap<U, F>(self, next: F, child_error: impl Into<Error>) -> Outcome<U>
    where
        F: FnOnce() -> Outcome<U>,
    {
        self.flat_map_wrap(|()| next(), child_error)
    }
}

// =============================================================================
// FILTER / NOT NULL
// =============================================================================

impl<T> Outcome<T> {
    /// Keep the success only when `predicate` holds.
    ///
    /// When it does not, the outcome fails with the error built by
    /// `predicate_error` from the rejected value. A failed receiver invokes
    /// neither function.
    pub fn filter<P, E>(self, predicate: P, predicate_error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        match self {
            Self::Succeeded { value, success } => {
                if predicate(&value) {
                    Self::Succeeded { value, success }
                } else {
                    Self::fail(predicate_error(&value))
                }
            },
            failed @ Self::Failed { .. } => failed,
        }
    }

    /// Like [`filter`](Self::filter); an already failed receiver is wrapped
    /// as `child_error` caused by its error.
    pub fn filter_wrap<P, E>(
        self,
        predicate: P,
        predicate_error: E,
        child_error: impl Into<Error>,
    ) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded.filter(predicate, predicate_error),
            Self::Failed { error } => Self::fail(child_error.into().caused_by(error)),
        }
    }
}

impl<T> Outcome<Option<T>> {
    /// Fail with `error` when the success carries no value.
    pub fn not_null(self, error: impl Into<Error>) -> Outcome<T> {
        match self {
            Self::Succeeded {
                value: Some(value),
                success,
            } => Outcome::Succeeded { value, success },
            Self::Succeeded { value: None, .. } => Outcome::fail(error),
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// Like [`not_null`](Self::not_null) with a lazily built error.
    pub fn not_null_with<E>(self, error: E) -> Outcome<T>
    where
        E: FnOnce() -> Error,
    {
        match self {
            Self::Succeeded {
                value: Some(value),
                success,
            } => Outcome::Succeeded { value, success },
            Self::Succeeded { value: None, .. } => Outcome::fail(error()),
            Self::Failed { error } => Outcome::Failed { error },
        }
    }
}

// =============================================================================
// ALTERNATIVES
// =============================================================================

impl<T> Outcome<T> {
    /// Succeed with `alternative` when failed.
    pub fn or(self, alternative: T) -> Self {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded,
            Self::Failed { .. } => Self::succeed(alternative),
        }
    }

    /// Succeed with a value computed from the error when failed.
    pub fn or_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce(&Error) -> T,
    {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded,
            Self::Failed { error } => Self::succeed(alternative(&error)),
        }
    }

    /// Replace a failed outcome with `alternative`.
    pub fn otherwise(self, alternative: Self) -> Self {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded,
            Self::Failed { .. } => alternative,
        }
    }

    /// Replace a failed outcome with one built from its error.
    ///
    /// `alternative` is not invoked when the receiver succeeded.
    pub fn otherwise_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded,
            Self::Failed { error } => alternative(error),
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl<T> Outcome<T> {
    /// Returns true when succeeded with a value equal to `expected`.
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.value().is_some_and(|value| value == expected)
    }

    /// Returns true when succeeded with a value satisfying `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.value().is_some_and(predicate)
    }
}

// =============================================================================
// TESTS
// =============================================================================
