//! Element and key lookups that fail with a reason instead of returning `None`.

use reasoned_outcome::Outcome;
use reasoned_reasons::Error;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Message used when a sequence has no elements.
pub const EMPTY_SEQUENCE_MESSAGE: &str = "sequence contains no elements";
/// Message used when a single element was expected but more were found.
pub const MULTIPLE_ELEMENTS_MESSAGE: &str = "sequence contains more than one element";

// =============================================================================
// SEQUENCES
// =============================================================================

/// The first element, or a failure when empty.
pub fn first_or_fail<I: IntoIterator>(items: I) -> Outcome<I::Item> {
    first_or_fail_with(items, EMPTY_SEQUENCE_MESSAGE)
}

/// The first element, or `error` when empty.
pub fn first_or_fail_with<I: IntoIterator>(items: I, error: impl Into<Error>) -> Outcome<I::Item> {
    Outcome::from_option(items.into_iter().next(), error)
}

/// The last element, or a failure when empty.
pub fn last_or_fail<I: IntoIterator>(items: I) -> Outcome<I::Item> {
    last_or_fail_with(items, EMPTY_SEQUENCE_MESSAGE)
}

/// The last element, or `error` when empty.
pub fn last_or_fail_with<I: IntoIterator>(items: I, error: impl Into<Error>) -> Outcome<I::Item> {
    Outcome::from_option(items.into_iter().last(), error)
}

/// The only element; fails when the sequence is empty or has more than one.
pub fn single_or_fail<I: IntoIterator>(items: I) -> Outcome<I::Item> {
    single_or_fail_with(items, EMPTY_SEQUENCE_MESSAGE, MULTIPLE_ELEMENTS_MESSAGE)
}

/// Like [`single_or_fail`] with caller errors for each failure case.
///
/// Stops reading the sequence at the second element.
pub fn single_or_fail_with<I: IntoIterator>(
    items: I,
    empty_error: impl Into<Error>,
    multiple_error: impl Into<Error>,
) -> Outcome<I::Item> {
    let mut items = items.into_iter();
    match (items.next(), items.next()) {
        (Some(item), None) => Outcome::succeed(item),
        (None, _) => Outcome::fail(empty_error),
        (Some(_), Some(_)) => Outcome::fail(multiple_error),
    }
}

/// The element at `index`, or a failure naming the index.
pub fn element_at_or_fail<I: IntoIterator>(items: I, index: usize) -> Outcome<I::Item> {
    element_at_or_fail_with(items, index, format!("no element at index {index}"))
}

/// The element at `index`, or `error`.
pub fn element_at_or_fail_with<I: IntoIterator>(
    items: I,
    index: usize,
    error: impl Into<Error>,
) -> Outcome<I::Item> {
    Outcome::from_option(items.into_iter().nth(index), error)
}

// =============================================================================
// MAPS
// =============================================================================

/// Key lookup shared by the standard maps.
pub trait KeyLookup<Q: ?Sized> {
    /// Stored value type.
    type Value;

    /// The value stored under `key`.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> KeyLookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> KeyLookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// The value under `key`, or a failure naming the key.
pub fn get_or_fail<'a, M, Q>(map: &'a M, key: &Q) -> Outcome<&'a M::Value>
where
    M: KeyLookup<Q>,
    Q: fmt::Debug + ?Sized,
{
    get_or_fail_with(map, key, format!("key {key:?} not found"))
}

/// The value under `key`, or `error`.
pub fn get_or_fail_with<'a, M, Q>(
    map: &'a M,
    key: &Q,
    error: impl Into<Error>,
) -> Outcome<&'a M::Value>
where
    M: KeyLookup<Q>,
    Q: ?Sized,
{
    Outcome::from_option(map.lookup(key), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reasoned_reasons::Reason;

    #[test]
    fn first_and_last() {
        assert_eq!(first_or_fail([1, 2, 3]).value(), Some(&1));
        assert_eq!(last_or_fail(vec![1, 2, 3]).value(), Some(&3));
        assert_eq!(
            first_or_fail(Vec::<i32>::new()).error().map(Reason::message),
            Some(EMPTY_SEQUENCE_MESSAGE)
        );
        assert_eq!(
            last_or_fail_with(Vec::<i32>::new(), "no rows")
                .error()
                .map(Reason::message),
            Some("no rows")
        );
    }

    #[test]
    fn single_distinguishes_empty_and_multiple() {
        assert_eq!(single_or_fail(["only"]).value(), Some(&"only"));
        assert_eq!(
            single_or_fail(Vec::<u8>::new()).error().map(Reason::message),
            Some(EMPTY_SEQUENCE_MESSAGE)
        );
        assert_eq!(
            single_or_fail([1, 2]).error().map(Reason::message),
            Some(MULTIPLE_ELEMENTS_MESSAGE)
        );
    }

    #[test]
    fn single_stops_after_second_element() {
        let mut pulled = 0;
        let counted = (0..100).inspect(|_| pulled += 1);
        assert!(single_or_fail(counted).is_failure());
        assert_eq!(pulled, 2);
    }

    #[test]
    fn element_at_reports_index() {
        assert_eq!(element_at_or_fail("abc".chars(), 1).value(), Some(&'b'));
        assert_eq!(
            element_at_or_fail("abc".chars(), 5).error().map(Reason::message),
            Some("no element at index 5")
        );
    }

    #[test]
    fn map_lookups() {
        let ports: HashMap<String, u16> = HashMap::from([("http".to_string(), 80)]);
        assert_eq!(get_or_fail(&ports, "http").value(), Some(&&80));
        assert_eq!(
            get_or_fail(&ports, "ssh").error().map(Reason::message),
            Some("key \"ssh\" not found")
        );

        let ordered = BTreeMap::from([(1_u8, "one")]);
        assert_eq!(get_or_fail(&ordered, &1_u8).value(), Some(&&"one"));
        assert!(get_or_fail_with(&ordered, &2_u8, "unknown id").is_failure());
    }

    proptest! {
        #[test]
        fn element_at_agrees_with_get(
            items in proptest::collection::vec(any::<i32>(), 0..16),
            index in 0_usize..20,
        ) {
            let outcome = element_at_or_fail(items.iter().copied(), index);
            prop_assert_eq!(outcome.into_option(), items.get(index).copied());
        }
    }
}
