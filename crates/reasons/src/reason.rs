//! Behaviour shared by success and error reasons.

use crate::config::FormatConfig;
use crate::metadata::{Metadata, MetadataValue};

/// A message plus metadata explaining an outcome.
pub trait Reason {
    /// Human-readable message.
    fn message(&self) -> &str;

    /// Metadata in insertion order.
    fn metadata(&self) -> &Metadata;

    /// Type label used when rendering (`Success`, `Error`, ...).
    fn reason_type(&self) -> &'static str;

    /// Render with an explicit format configuration.
    fn render_with(&self, config: &FormatConfig) -> String;

    /// Returns true when the metadata contains `key`.
    fn has_metadata_key(&self, key: &str) -> bool {
        self.metadata().contains_key(key)
    }

    /// Look up a metadata value.
    fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata().get(key)
    }
}
