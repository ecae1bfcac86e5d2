//! Error reasons and their cause forests.

use crate::builder::{ReasonTree, render_reason};
use crate::config::FormatConfig;
use crate::errors::ReasonError;
use crate::metadata::{self, Metadata, MetadataValue};
use crate::print::{self, ChainPosition, PrintOptions};
use crate::reason::Reason;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// A native error captured inside an exceptional [`Error`].
///
/// The original value is kept behind an `Arc` so errors stay cheap to clone;
/// its type name and message remain available.
#[derive(Clone)]
pub struct Exception {
    type_name: &'static str,
    inner: Arc<dyn std::error::Error + Send + Sync + 'static>,
}

impl Exception {
    /// Capture a native error value.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            type_name: type_name::<E>(),
            inner: Arc::new(error),
        }
    }

    /// Type name of the captured error.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Message of the captured error.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Borrow the captured error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Downcast to the original error type.
    #[must_use]
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exception")
            .field("type_name", &self.type_name)
            .field("message", &self.inner.to_string())
            .finish()
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.message() == other.message()
    }
}

/// Why an operation failed.
///
/// An error carries a message, ordered metadata, and a list of causing
/// errors. The cause list only grows. Errors built with
/// [`Error::from_exception`] additionally own the native error they wrap and
/// render as `ExceptionalError`.
///
/// Dropping and `Display` walk the forest with an explicit work-list, so
/// chains of any depth are safe to build, print and drop. The derived
/// `Clone`, `PartialEq` and `Debug` still recurse once per level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Error {
    message: String,
    metadata: Metadata,
    causes: Vec<Self>,
    exception: Option<Exception>,
}

impl Error {
    /// Create an error with no metadata and no causes.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message.into(), Metadata::new(), None)
    }

    /// Create an error whose sole initial cause is `prior`.
    pub fn with_cause(message: impl Into<String>, prior: impl Into<Self>) -> Self {
        Self::new(message).caused_by(prior)
    }

    /// Wrap a native error. The message is taken from the native error.
    pub fn from_exception<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from(Exception::new(error))
    }

    /// Wrap a native error with a custom message.
    pub fn from_exception_with_message<E>(message: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_parts(message.into(), Metadata::new(), Some(Exception::new(error)))
    }

    /// Wrap a native error and record one metadata entry alongside it.
    ///
    /// The error is fresh, so the insert cannot collide with an existing key.
    pub fn from_exception_with_metadata<E>(
        error: E,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let exception = Exception::new(error);
        let mut metadata = Metadata::new();
        metadata.insert(key.into(), value.into());
        Self::from_parts(exception.message(), metadata, Some(exception))
    }

    const fn from_parts(
        message: String,
        metadata: Metadata,
        exception: Option<Exception>,
    ) -> Self {
        Self {
            message,
            metadata,
            causes: Vec::new(),
            exception,
        }
    }

    /// Direct causes, in insertion order.
    #[must_use]
    pub fn causes(&self) -> &[Self] {
        &self.causes
    }

    /// The wrapped native error, when this is an exceptional error.
    #[must_use]
    pub const fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }

    /// Returns true when this error wraps a native error.
    #[must_use]
    pub const fn is_exceptional(&self) -> bool {
        self.exception.is_some()
    }

    /// Attach a metadata entry.
    ///
    /// Fails when `key` is already present. The error is consumed either way;
    /// on failure only the [`ReasonError`] naming the key comes back.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Result<Self, ReasonError> {
        metadata::insert_unique(&mut self.metadata, key.into(), value.into())?;
        Ok(self)
    }

    /// Attach several metadata entries. Fails on the first duplicate key and
    /// consumes the error.
    pub fn with_metadata_map<I, K, V>(mut self, entries: I) -> Result<Self, ReasonError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        metadata::insert_all(&mut self.metadata, entries)?;
        Ok(self)
    }

    /// Append a cause (a message, an existing error, or an exception).
    #[must_use]
    pub fn caused_by(mut self, cause: impl Into<Self>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Append a native error as an exceptional cause.
    #[must_use]
    pub fn caused_by_exception<E>(self, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.caused_by(Self::from_exception(error))
    }

    /// Append every cause in order.
    #[must_use]
    pub fn caused_by_all<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        self.causes.extend(causes.into_iter().map(Into::into));
        self
    }

    /// Walk from `self` along the first cause of each node.
    #[must_use]
    pub const fn chain(&self) -> Chain<'_> {
        Chain {
            current: Some(self),
        }
    }

    /// Depth-first search of the whole cause forest (excluding `self`).
    pub fn has_cause<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self) -> bool,
    {
        let mut pending: Vec<&Self> = self.causes.iter().rev().collect();
        while let Some(cause) = pending.pop() {
            if predicate(cause) {
                return true;
            }
            pending.extend(cause.causes.iter().rev());
        }
        false
    }

    /// Primary-cause summary joined with `" → "`.
    ///
    /// Only the first cause of each node is followed, so sibling causes never
    /// appear. Use `Display` for the full forest.
    #[must_use]
    pub fn print(&self) -> String {
        self.print_with(&PrintOptions::default())
    }

    /// Primary-cause summary with explicit separator and depth.
    #[must_use]
    pub fn print_with(&self, options: &PrintOptions) -> String {
        self.print_mapped(options, |message, _| message.to_string())
    }

    /// Primary-cause summary, transforming each message with its position.
    pub fn print_mapped<F>(&self, options: &PrintOptions, transform: F) -> String
    where
        F: FnMut(&str, ChainPosition) -> String,
    {
        print::join_chain(self.chain().map(Reason::message), options, transform)
    }
}

impl Reason for Error {
    fn message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn reason_type(&self) -> &'static str {
        if self.is_exceptional() {
            "ExceptionalError"
        } else {
            "Error"
        }
    }

    fn render_with(&self, config: &FormatConfig) -> String {
        render_reason(self, config)
    }
}

impl ReasonTree for Error {
    const CHILDREN_LABEL: &'static str = "Caused by";

    fn children(&self) -> &[Self] {
        &self.causes
    }

    fn extra_info(&self) -> Option<(&'static str, String)> {
        self.exception
            .as_ref()
            .map(|exception| ("Exception", exception.type_name().to_string()))
    }
}

impl Drop for Error {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.causes);
        while let Some(mut cause) = pending.pop() {
            pending.append(&mut cause.causes);
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render_with(&FormatConfig::default()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.exception {
            Some(exception) => Some(exception.as_error()),
            None => self
                .causes
                .first()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Exception> for Error {
    fn from(exception: Exception) -> Self {
        Self::from_parts(exception.message(), Metadata::new(), Some(exception))
    }
}

/// Iterator over an error and its first-cause descendants.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    current: Option<&'a Error>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.causes.first();
        Some(current)
    }
}

// =============================================================================
// TESTS
// =============================================================================
