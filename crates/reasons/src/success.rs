//! Success reasons and their antecedent chains.

use crate::builder::{ReasonTree, render_reason};
use crate::config::FormatConfig;
use crate::errors::ReasonError;
use crate::metadata::{self, Metadata, MetadataValue};
use crate::reason::Reason;
use std::fmt;

/// Why an operation succeeded.
///
/// Structurally mirrors [`Error`](crate::Error): a message, ordered metadata,
/// and a list of antecedent successes that only grows. Deep antecedent
/// chains drop and render without recursion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Success {
    message: String,
    metadata: Metadata,
    antecedents: Vec<Self>,
}

impl Success {
    /// Create a success with no metadata and no antecedents.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            antecedents: Vec::new(),
        }
    }

    /// Create a success whose sole initial antecedent is `prior`.
    pub fn with_antecedent(message: impl Into<String>, prior: impl Into<Self>) -> Self {
        Self::new(message).anteceded_by(prior)
    }

    /// Direct antecedents, in insertion order.
    #[must_use]
    pub fn antecedents(&self) -> &[Self] {
        &self.antecedents
    }

    /// Attach a metadata entry.
    ///
    /// Fails when `key` is already present. The success is consumed either
    /// way; on failure only the [`ReasonError`] naming the key comes back.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Result<Self, ReasonError> {
        metadata::insert_unique(&mut self.metadata, key.into(), value.into())?;
        Ok(self)
    }

    /// Attach several metadata entries. Fails on the first duplicate key and
    /// consumes the success.
    pub fn with_metadata_map<I, K, V>(mut self, entries: I) -> Result<Self, ReasonError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        metadata::insert_all(&mut self.metadata, entries)?;
        Ok(self)
    }

    /// Append an antecedent.
    #[must_use]
    pub fn anteceded_by(mut self, antecedent: impl Into<Self>) -> Self {
        self.antecedents.push(antecedent.into());
        self
    }

    /// Append every antecedent in order.
    #[must_use]
    pub fn anteceded_by_all<I>(mut self, antecedents: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        self.antecedents
            .extend(antecedents.into_iter().map(Into::into));
        self
    }
}

impl Reason for Success {
    fn message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn reason_type(&self) -> &'static str {
        "Success"
    }

    fn render_with(&self, config: &FormatConfig) -> String {
        render_reason(self, config)
    }
}

impl ReasonTree for Success {
    const CHILDREN_LABEL: &'static str = "Anteceded by";

    fn children(&self) -> &[Self] {
        &self.antecedents
    }

    fn extra_info(&self) -> Option<(&'static str, String)> {
        None
    }
}

impl Drop for Success {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.antecedents);
        while let Some(mut antecedent) = pending.pop() {
            pending.append(&mut antecedent.antecedents);
        }
    }
}

impl fmt::Display for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render_with(&FormatConfig::default()))
    }
}

impl From<&str> for Success {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Success {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
