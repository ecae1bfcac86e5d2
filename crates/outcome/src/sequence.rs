//! Short-circuiting combinators over sequences of outcomes.

use crate::lazy::LazyOutcome;
use crate::outcome::Outcome;

/// Fold unit outcomes left to right, stopping at the first failure.
///
/// The result is the first failure unchanged, or the last success. An empty
/// sequence succeeds with an empty reason. Elements after a failure are not
/// pulled from the iterator.
pub fn reduce<I>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = Outcome<()>>,
{
    let mut current = Outcome::unit();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        current = current.flat_map(|()| outcome);
        if current.is_failure() {
            tracing::trace!(index, "reduce stopped at failed outcome");
            break;
        }
    }
    current
}

/// Resolve lazy outcomes in order, stopping at the first failure.
///
/// Predicates after the first failing one are never invoked.
pub fn reduce_lazy<'a, I>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = &'a LazyOutcome>,
{
    reduce(outcomes.into_iter().map(LazyOutcome::resolve))
}

/// Apply `func` to each element, collecting values until the first failure.
///
/// On failure the result carries that element's error unwrapped and `func`
/// is not applied to later elements.
pub fn transform<S, R, I, F>(source: I, mut func: F) -> Outcome<Vec<R>>
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> Outcome<R>,
{
    let source = source.into_iter();
    let mut values = Vec::with_capacity(source.size_hint().0);
    for (index, item) in source.enumerate() {
        match func(item) {
            Outcome::Succeeded { value, .. } => values.push(value),
            Outcome::Failed { error } => {
                tracing::trace!(index, "transform stopped at failed element");
                return Outcome::Failed { error };
            },
        }
    }
    Outcome::succeed(values)
}
