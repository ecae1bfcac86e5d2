//! # reasoned-outcome
//!
//! A success-or-failure container that carries a [`Success`] or an [`Error`]
//! reason instead of a bare flag.
//!
//! - [`Outcome<T>`] - value-carrying outcome; [`UnitOutcome`] is `Outcome<()>`
//! - Combinators - `map`, `flat_map`, `filter`, `or`, `otherwise`,
//!   `match_with`, `not_null`, `contains`, `exists`
//! - [`LazyOutcome`] / [`AsyncLazyOutcome`] - deferred predicate outcomes
//! - [`reduce`] / [`transform`] - short-circuiting sequence combinators
//! - Async mirrors that await their input before running the synchronous logic
//!
//! ## Error chaining
//!
//! Every `*_wrap` combinator takes a `child_error`. When the chain fails, the
//! resulting error is `child_error` with the underlying error appended as its
//! cause, so higher layers describe *what* failed while keeping *why*.
//!
//! ```
//! use reasoned_outcome::Outcome;
//!
//! let parsed: Outcome<u32> = Outcome::succeed("42")
//!     .flat_map_wrap(
//!         |text| Outcome::from_option(text.parse::<u32>().ok(), "not a number"),
//!         "could not read port",
//!     );
//! assert_eq!(parsed.value_or(0), 42);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// =============================================================================
// OUTCOME
// =============================================================================

pub mod async_ext;
pub mod chaining;
pub mod combinators;
pub mod errors;
pub mod extract;
pub mod lazy;
pub mod outcome;
pub mod sequence;

pub use async_ext::{OutcomeFutureExt, reduce_async, reduce_lazy_async, transform_async};
pub use chaining::{AntecededByOutcome, CausedByOutcome};
pub use errors::OutcomeError;
pub use lazy::{AsyncLazyOutcome, LazyOutcome};
pub use outcome::{Outcome, UnitOutcome};
pub use sequence::{reduce, reduce_lazy, transform};

// Re-export the reason model so consumers need a single import.
pub use reasoned_reasons::{Error, Exception, Reason, Success};

/// Returns the outcome crate version.
#[must_use]
pub const fn outcome_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
