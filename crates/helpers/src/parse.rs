//! Parsing helpers that turn `FromStr` failures into failed outcomes.

use reasoned_outcome::Outcome;
use reasoned_reasons::Error;
use std::str::FromStr;

/// Metadata key holding the rejected input.
pub const INPUT_METADATA_KEY: &str = "input";

/// Parse `input` as `T`.
///
/// A parse failure becomes an exceptional error wrapping the native error,
/// with the input recorded under [`INPUT_METADATA_KEY`].
pub fn try_parse<T>(input: &str) -> Outcome<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match input.parse::<T>() {
        Ok(value) => Outcome::succeed(value),
        Err(error) => {
            tracing::trace!(input, target_type = std::any::type_name::<T>(), "parse failed");
            Outcome::fail(Error::from_exception_with_metadata(
                error,
                INPUT_METADATA_KEY,
                input,
            ))
        },
    }
}

/// Parse `input` as `T`, failing with `error` caused by the parse failure.
pub fn try_parse_with<T>(input: &str, error: impl Into<Error>) -> Outcome<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    try_parse(input).flat_map_fail(error)
}
