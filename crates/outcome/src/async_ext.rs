//! Async mirrors of the outcome combinators.
//!
//! Each adapter awaits its input, then runs the same logic as the synchronous
//! combinator. Mapping futures are only created once the previous outcome is
//! known, so a failure short-circuits exactly like the synchronous path.

use crate::lazy::AsyncLazyOutcome;
use crate::outcome::Outcome;
use reasoned_reasons::{Error, Success};
use std::future::Future;

// =============================================================================
// ASYNC MAPPING FUNCTIONS
// =============================================================================

impl<T> Outcome<T> {
    /// [`map`](Self::map) with an async mapping.
    pub async fn map_async<U, F, Fut>(self, mapping: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Succeeded { value, success } => Outcome::Succeeded {
                value: mapping(value).await,
                success,
            },
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// [`flat_map`](Self::flat_map) with an async mapping.
    pub async fn flat_map_async<U, F, Fut>(self, mapping: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Succeeded { value, .. } => mapping(value).await,
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// [`flat_map_wrap`](Self::flat_map_wrap) with an async mapping.
    pub async fn flat_map_wrap_async<U, F, Fut>(
        self,
        mapping: F,
        child_error: impl Into<Error>,
    ) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Succeeded { value, .. } => mapping(value).await.flat_map_fail(child_error),
            Self::Failed { error } => Outcome::fail(child_error.into().caused_by(error)),
        }
    }

    /// [`filter`](Self::filter) with an async predicate.
    pub async fn filter_async<P, Fut, E>(self, predicate: P, predicate_error: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        E: FnOnce(&T) -> Error,
    {
        match self {
            Self::Succeeded { value, success } => {
                if predicate(&value).await {
                    Self::Succeeded { value, success }
                } else {
                    Self::fail(predicate_error(&value))
                }
            },
            failed @ Self::Failed { .. } => failed,
        }
    }

    /// [`otherwise_with`](Self::otherwise_with) with an async alternative.
    pub async fn otherwise_with_async<F, Fut>(self, alternative: F) -> Self
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            succeeded @ Self::Succeeded { .. } => succeeded,
            Self::Failed { error } => alternative(error).await,
        }
    }
}

impl Outcome<()> {
    /// [`then`](Outcome::then) with an async continuation.
    pub async fn then_async<U, F, Fut>(self, next: F) -> Outcome<U>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.flat_map_async(|()| next()).await
    }
}

// =============================================================================
// FUTURE EXTENSION
// =============================================================================

/// Combinators on futures that resolve to an outcome.
///
/// Every method awaits `self` first and then applies the synchronous
/// combinator of the same name.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Await, then [`map`](Outcome::map).
    fn map_outcome<U, F>(self, mapping: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(mapping) }
    }

    /// Await, then [`map_wrap`](Outcome::map_wrap).
    fn map_wrap_outcome<U, F>(
        self,
        mapping: F,
        child_error: impl Into<Error>,
    ) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map_wrap(mapping, child_error) }
    }

    /// Await, then [`flat_map`](Outcome::flat_map).
    fn flat_map_outcome<U, F>(self, mapping: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.flat_map(mapping) }
    }

    /// Await, then [`flat_map_async`](Outcome::flat_map_async).
    fn flat_map_outcome_async<U, F, Fut>(self, mapping: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.flat_map_async(mapping).await }
    }

    /// Await, then [`flat_map_wrap`](Outcome::flat_map_wrap).
    fn flat_map_wrap_outcome<U, F>(
        self,
        mapping: F,
        child_error: impl Into<Error>,
    ) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.flat_map_wrap(mapping, child_error) }
    }

    /// Await, then [`flat_map_success`](Outcome::flat_map_success).
    fn flat_map_success_outcome(
        self,
        child_success: impl Into<Success>,
    ) -> impl Future<Output = Outcome<T>> {
        async move { self.await.flat_map_success(child_success) }
    }

    /// Await, then [`flat_map_fail`](Outcome::flat_map_fail).
    fn flat_map_fail_outcome(
        self,
        child_error: impl Into<Error>,
    ) -> impl Future<Output = Outcome<T>> {
        async move { self.await.flat_map_fail(child_error) }
    }

    /// Await, then [`filter`](Outcome::filter).
    fn filter_outcome<P, E>(
        self,
        predicate: P,
        predicate_error: E,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        async move { self.await.filter(predicate, predicate_error) }
    }

    /// Await, then [`otherwise_with`](Outcome::otherwise_with).
    fn otherwise_outcome<F>(self, alternative: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        async move { self.await.otherwise_with(alternative) }
    }

    /// Await, then [`match_with`](Outcome::match_with).
    fn match_outcome<R, S, F>(self, on_success: S, on_fail: F) -> impl Future<Output = R>
    where
        S: FnOnce(T, Success) -> R,
        F: FnOnce(Error) -> R,
    {
        async move { self.await.match_with(on_success, on_fail) }
    }

    /// Await, then [`value_or`](Outcome::value_or).
    fn value_or_outcome(self, alternative: T) -> impl Future<Output = T> {
        async move { self.await.value_or(alternative) }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

// =============================================================================
// ASYNC SEQUENCES
// =============================================================================

/// [`reduce`](crate::reduce) over outcome futures, awaited one at a time.
///
/// Futures after the first failure are dropped without being polled.
pub async fn reduce_async<I, Fut>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<()>>,
{
    let mut current = Outcome::unit();
    for (index, pending) in outcomes.into_iter().enumerate() {
        current = pending.await;
        if current.is_failure() {
            tracing::trace!(index, "async reduce stopped at failed outcome");
            break;
        }
    }
    current
}

/// [`reduce_lazy`](crate::reduce_lazy) over async lazy outcomes.
pub async fn reduce_lazy_async<'a, I>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = &'a AsyncLazyOutcome>,
{
    reduce_async(outcomes.into_iter().map(|lazy| lazy.resolve())).await
}

/// [`transform`](crate::transform) with an async function, one element at a time.
pub async fn transform_async<S, R, I, F, Fut>(source: I, mut func: F) -> Outcome<Vec<R>>
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> Fut,
    Fut: Future<Output = Outcome<R>>,
{
    let source = source.into_iter();
    let mut values = Vec::with_capacity(source.size_hint().0);
    for (index, item) in source.enumerate() {
        match func(item).await {
            Outcome::Succeeded { value, .. } => values.push(value),
            Outcome::Failed { error } => {
                tracing::trace!(index, "async transform stopped at failed element");
                return Outcome::Failed { error };
            },
        }
    }
    Outcome::succeed(values)
}
