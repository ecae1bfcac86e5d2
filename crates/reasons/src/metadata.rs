//! Ordered metadata attached to reasons.

use crate::errors::ReasonError;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Arbitrary metadata value.
pub type MetadataValue = serde_json::Value;

/// Metadata keyed by name, kept in insertion order for display.
pub type Metadata = IndexMap<String, MetadataValue>;

/// Insert a key that must not already be present.
///
/// The map is left untouched when the key exists.
pub(crate) fn insert_unique(
    metadata: &mut Metadata,
    key: String,
    value: MetadataValue,
) -> Result<(), ReasonError> {
    if metadata.contains_key(&key) {
        tracing::debug!(%key, "rejected duplicate metadata key");
        return Err(ReasonError::MetadataKeyExists { key });
    }
    metadata.insert(key, value);
    Ok(())
}

/// Insert every entry, stopping at the first duplicate key.
pub(crate) fn insert_all<I, K, V>(metadata: &mut Metadata, entries: I) -> Result<(), ReasonError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<MetadataValue>,
{
    for (key, value) in entries {
        insert_unique(metadata, key.into(), value.into())?;
    }
    Ok(())
}

/// Render metadata as `key: value` pairs joined by `, `.
///
/// String values are written without JSON quotes.
pub(crate) fn render(metadata: &Metadata) -> String {
    metadata
        .iter()
        .map(|(key, value)| format!("{key}: {}", display_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_value(value: &MetadataValue) -> Cow<'_, str> {
    match value {
        MetadataValue::String(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
