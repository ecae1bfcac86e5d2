//! # reasoned
//!
//! Facade over the reason model, the outcome type, and the helpers.
//! Most consumers only need the [`prelude`].
//!
//! ```
//! use reasoned::prelude::*;
//!
//! let port = try_parse::<u16>("80")
//!     .filter(|port| *port >= 1024, |port| Error::new(format!("port {port} is privileged")))
//!     .flat_map_fail("invalid listen port");
//!
//! assert_eq!(
//!     port.error().map(Error::print),
//!     Some("invalid listen port → port 80 is privileged".to_string())
//! );
//! ```

pub use reasoned_helpers as helpers;
pub use reasoned_outcome as outcome;
pub use reasoned_reasons as reasons;

pub use reasoned_outcome::{
    AntecededByOutcome, AsyncLazyOutcome, CausedByOutcome, LazyOutcome, Outcome,
    OutcomeError, OutcomeFutureExt, UnitOutcome, reduce, reduce_async, reduce_lazy,
    reduce_lazy_async, transform, transform_async,
};
pub use reasoned_reasons::{
    ChainPosition, Error, Exception, FormatConfig, FormatConfigError, PrintOptions, Reason,
    ReasonError, ReasonStringBuilder, Success, ValidatedFormatConfig, parse_format_config_json,
    parse_format_config_toml,
};

/// Common imports.
pub mod prelude {
    pub use reasoned_helpers::{
        element_at_or_fail, first_or_fail, get_or_fail, last_or_fail, single_or_fail, try_parse,
    };
    pub use reasoned_outcome::{
        AntecededByOutcome, CausedByOutcome, LazyOutcome, Outcome, OutcomeFutureExt, UnitOutcome,
    };
    pub use reasoned_reasons::{Error, PrintOptions, Reason, Success};
}

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_versions_match() {
        assert_eq!(facade_crate_version(), outcome::outcome_crate_version());
        assert_eq!(facade_crate_version(), helpers::helpers_crate_version());
    }
}
