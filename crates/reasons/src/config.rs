//! Rendering configuration for reasons.
//!
//! Configuration is parsed from TOML or JSON, then validated into a
//! [`ValidatedFormatConfig`]. Every field has a default, so an empty document
//! is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current format configuration schema version.
pub const CURRENT_FORMAT_CONFIG_VERSION: u32 = 1;

/// Largest accepted `printDepth` (0 means unlimited).
pub const MAX_PRINT_DEPTH: usize = 1024;

/// Default separator joining the direct causes or antecedents of a reason.
pub const DEFAULT_REASON_SEPARATOR: &str = " • ";

/// Controls how reasons are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct FormatConfig {
    /// Schema version.
    pub version: u32,
    /// Separator used by `Error::print` between chain messages.
    pub print_separator: String,
    /// Maximum number of messages `Error::print` collects (0 = unlimited).
    pub print_depth: usize,
    /// Separator joining sibling causes/antecedents in `Display` output.
    pub reason_separator: String,
    /// Whether metadata is included in `Display` output.
    pub include_metadata: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_FORMAT_CONFIG_VERSION,
            print_separator: crate::print::DEFAULT_PRINT_SEPARATOR.to_string(),
            print_depth: 0,
            reason_separator: DEFAULT_REASON_SEPARATOR.to_string(),
            include_metadata: true,
        }
    }
}

impl FormatConfig {
    /// Validate the configuration.
    pub fn validate(self) -> Result<ValidatedFormatConfig, FormatConfigError> {
        if self.version != CURRENT_FORMAT_CONFIG_VERSION {
            return Err(FormatConfigError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_FORMAT_CONFIG_VERSION,
            });
        }
        if self.print_separator.is_empty() {
            return Err(FormatConfigError::EmptySeparator {
                field: "printSeparator",
            });
        }
        if self.reason_separator.is_empty() {
            return Err(FormatConfigError::EmptySeparator {
                field: "reasonSeparator",
            });
        }
        if self.print_depth > MAX_PRINT_DEPTH {
            return Err(FormatConfigError::DepthOutOfRange {
                value: self.print_depth,
                max: MAX_PRINT_DEPTH,
            });
        }
        tracing::debug!(
            print_depth = self.print_depth,
            include_metadata = self.include_metadata,
            "format config validated"
        );
        Ok(ValidatedFormatConfig { raw: self })
    }
}

/// Format configuration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFormatConfig {
    raw: FormatConfig,
}

impl ValidatedFormatConfig {
    /// Borrow the raw config.
    #[must_use]
    pub const fn as_ref(&self) -> &FormatConfig {
        &self.raw
    }

    /// Consume and return the raw config.
    #[must_use]
    pub fn into_inner(self) -> FormatConfig {
        self.raw
    }
}

impl Default for ValidatedFormatConfig {
    fn default() -> Self {
        Self {
            raw: FormatConfig::default(),
        }
    }
}

/// Format configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatConfigError {
    /// The document is not valid TOML for this schema.
    #[error("invalid format config TOML: {message}")]
    InvalidToml {
        /// Parser message.
        message: String,
    },
    /// The document is not valid JSON for this schema.
    #[error("invalid format config JSON: {message}")]
    InvalidJson {
        /// Parser message.
        message: String,
    },
    /// The schema version is not supported.
    #[error("unsupported format config version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the document.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A separator field is empty.
    #[error("{field} must be non-empty")]
    EmptySeparator {
        /// Field name in the config document.
        field: &'static str,
    },
    /// `printDepth` exceeds [`MAX_PRINT_DEPTH`].
    #[error("printDepth {value} is outside [0, {max}]")]
    DepthOutOfRange {
        /// Value provided.
        value: usize,
        /// Maximum allowed value.
        max: usize,
    },
}

/// Parse a format config from a TOML string and validate it.
pub fn parse_format_config_toml(input: &str) -> Result<ValidatedFormatConfig, FormatConfigError> {
    let config: FormatConfig =
        toml::from_str(input).map_err(|error| FormatConfigError::InvalidToml {
            message: error.to_string(),
        })?;
    config.validate()
}

/// Parse a format config from a JSON string and validate it.
pub fn parse_format_config_json(input: &str) -> Result<ValidatedFormatConfig, FormatConfigError> {
    let config: FormatConfig =
        serde_json::from_str(input).map_err(|error| FormatConfigError::InvalidJson {
            message: error.to_string(),
        })?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() -> Result<(), FormatConfigError> {
        let config = parse_format_config_toml("")?;
        assert_eq!(config.as_ref(), &FormatConfig::default());
        Ok(())
    }

    #[test]
    fn default_validated_config_matches_validated_defaults() -> Result<(), FormatConfigError> {
        let validated = FormatConfig::default().validate()?;
        assert_eq!(ValidatedFormatConfig::default(), validated);
        assert_eq!(
            ValidatedFormatConfig::default().as_ref().reason_separator,
            DEFAULT_REASON_SEPARATOR
        );
        Ok(())
    }

    #[test]
    fn toml_overrides_fields() -> Result<(), FormatConfigError> {
        let config = parse_format_config_toml(
            r#"
            printSeparator = " <- "
            printDepth = 2
            includeMetadata = false
            "#,
        )?;
        let raw = config.into_inner();
        assert_eq!(raw.print_separator, " <- ");
        assert_eq!(raw.print_depth, 2);
        assert!(!raw.include_metadata);
        assert_eq!(raw.reason_separator, DEFAULT_REASON_SEPARATOR);
        Ok(())
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let error = parse_format_config_json(r#"{"colour": true}"#).err();
        assert!(matches!(error, Some(FormatConfigError::InvalidJson { .. })));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let version = FormatConfig {
            version: 9,
            ..FormatConfig::default()
        }
        .validate()
        .err();
        assert_eq!(
            version,
            Some(FormatConfigError::UnsupportedVersion {
                found: 9,
                supported: CURRENT_FORMAT_CONFIG_VERSION,
            })
        );

        let separator = parse_format_config_json(r#"{"printSeparator": ""}"#).err();
        assert_eq!(
            separator,
            Some(FormatConfigError::EmptySeparator {
                field: "printSeparator"
            })
        );

        let depth = parse_format_config_toml("printDepth = 5000").err();
        assert!(matches!(
            depth,
            Some(FormatConfigError::DepthOutOfRange { value: 5000, .. })
        ));
    }
}
