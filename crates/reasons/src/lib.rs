//! # reasoned-reasons
//!
//! Reason objects that explain why an outcome succeeded or failed.
//!
//! This crate is the leaf of the workspace and has no workspace dependencies:
//!
//! - [`Success`] - a success reason with an antecedent chain
//! - [`Error`] - an error reason with a cause forest, optionally wrapping a
//!   native error ([`Exception`])
//! - [`ReasonStringBuilder`] - `Type(label='value', ...)` rendering
//! - [`FormatConfig`] - rendering configuration loaded from TOML or JSON
//!
//! ## Sharing and threads
//!
//! Cause and antecedent lists are owned trees. A reason that must appear both
//! in an outcome and inside another reason's cause list is cloned. Appending
//! requires `&mut self` or an owned `self`, so concurrent appends to the same
//! instance are rejected at compile time rather than guarded by a lock.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// =============================================================================
// REASON MODEL
// =============================================================================

pub mod builder;
pub mod config;
pub mod error;
pub mod errors;
pub mod metadata;
pub mod print;
pub mod reason;
pub mod success;

pub use builder::ReasonStringBuilder;
pub use config::{
    CURRENT_FORMAT_CONFIG_VERSION, FormatConfig, FormatConfigError, MAX_PRINT_DEPTH,
    ValidatedFormatConfig, parse_format_config_json, parse_format_config_toml,
};
pub use error::{Chain, Error, Exception};
pub use errors::ReasonError;
pub use metadata::{Metadata, MetadataValue};
pub use print::{ChainPosition, DEFAULT_PRINT_SEPARATOR, PrintOptions};
pub use reason::Reason;
pub use success::Success;

/// Returns the reasons crate version.
#[must_use]
pub const fn reasons_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_types_are_available() {
        let error = Error::new("outer").caused_by("inner");
        assert_eq!(error.message(), "outer");
        assert_eq!(error.causes().len(), 1);

        let success = Success::new("done");
        assert_eq!(success.message(), "done");
        assert!(!reasons_crate_version().is_empty());
    }
}
