//! Precondition failures raised while building reasons.

use thiserror::Error;

/// Misuse of the reason builder API.
///
/// These signal bugs in the calling code rather than domain failures and
/// should be propagated, not recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReasonError {
    /// A metadata key was inserted twice on the same reason.
    #[error("metadata key '{key}' already exists")]
    MetadataKeyExists {
        /// Key that was already present.
        key: String,
    },
}
