//! Deferred predicate outcomes.
//!
//! A lazy outcome pairs a predicate with pre-built reasons and only decides
//! between them when resolved. Resolution is not cached: every call to
//! `resolve` invokes the predicate again.

use crate::outcome::Outcome;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use reasoned_reasons::{Error, Success};
use std::fmt;
use std::future::Future;

type Predicate = Box<dyn Fn() -> bool + Send + Sync>;
type AsyncPredicate = Box<dyn Fn() -> BoxFuture<'static, bool> + Send + Sync>;

/// A unit outcome decided by a predicate on demand.
pub struct LazyOutcome {
    predicate: Predicate,
    success: Success,
    error: Error,
}

impl LazyOutcome {
    /// Build a lazy outcome; `predicate` is not invoked here.
    pub fn new<P>(predicate: P, success: impl Into<Success>, error: impl Into<Error>) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            success: success.into(),
            error: error.into(),
        }
    }

    /// Pre-bound success reason.
    pub const fn success(&self) -> &Success {
        &self.success
    }

    /// Pre-bound error reason.
    pub const fn error(&self) -> &Error {
        &self.error
    }

    /// Invoke the predicate and build the matching outcome.
    pub fn resolve(&self) -> Outcome<()> {
        let holds = (self.predicate)();
        tracing::trace!(holds, "lazy outcome resolved");
        Outcome::succeed_when(holds, self.success.clone(), self.error.clone())
    }
}

impl fmt::Debug for LazyOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyOutcome")
            .field("success", &self.success)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// A unit outcome decided by an asynchronous predicate on demand.
pub struct AsyncLazyOutcome {
    predicate: AsyncPredicate,
    success: Success,
    error: Error,
}

impl AsyncLazyOutcome {
    /// Build an async lazy outcome; no future is created here.
    pub fn new<P, Fut>(predicate: P, success: impl Into<Success>, error: impl Into<Error>) -> Self
    where
        P: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self {
            predicate: Box::new(move || predicate().boxed()),
            success: success.into(),
            error: error.into(),
        }
    }

    /// Pre-bound success reason.
    pub const fn success(&self) -> &Success {
        &self.success
    }

    /// Pre-bound error reason.
    pub const fn error(&self) -> &Error {
        &self.error
    }

    /// Await the predicate and build the matching outcome.
    pub async fn resolve(&self) -> Outcome<()> {
        let holds = (self.predicate)().await;
        tracing::trace!(holds, "async lazy outcome resolved");
        Outcome::succeed_when(holds, self.success.clone(), self.error.clone())
    }
}

impl fmt::Debug for AsyncLazyOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AsyncLazyOutcome")
            .field("success", &self.success)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
