//! # reasoned-helpers
//!
//! Thin adapters that report through [`Outcome`](reasoned_outcome::Outcome):
//! element lookups over iterators and maps, and `FromStr` parsing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod collections;
pub mod parse;

pub use collections::{
    EMPTY_SEQUENCE_MESSAGE, KeyLookup, MULTIPLE_ELEMENTS_MESSAGE, element_at_or_fail,
    element_at_or_fail_with, first_or_fail, first_or_fail_with, get_or_fail, get_or_fail_with,
    last_or_fail, last_or_fail_with, single_or_fail, single_or_fail_with,
};
pub use parse::{INPUT_METADATA_KEY, try_parse, try_parse_with};

/// Returns the helpers crate version.
#[must_use]
pub const fn helpers_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_lookup() {
        let picked =
            try_parse::<usize>("2").flat_map(|index| element_at_or_fail([10, 20, 30], index));
        assert_eq!(picked.value(), Some(&30));
        assert!(!helpers_crate_version().is_empty());
    }
}
