//! Primary-cause summaries for error chains.

use crate::config::FormatConfig;

/// Default separator placed between chain messages.
pub const DEFAULT_PRINT_SEPARATOR: &str = " → ";

/// Options for [`Error::print_with`](crate::Error::print_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Text placed between messages.
    pub separator: String,
    /// Maximum number of messages to collect (0 = unlimited).
    pub depth: usize,
}

impl PrintOptions {
    /// Options with a custom separator and unlimited depth.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            depth: 0,
        }
    }

    /// Limit the number of collected messages.
    #[must_use]
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::with_separator(DEFAULT_PRINT_SEPARATOR)
    }
}

impl From<&FormatConfig> for PrintOptions {
    fn from(config: &FormatConfig) -> Self {
        Self {
            separator: config.print_separator.clone(),
            depth: config.print_depth,
        }
    }
}

/// Position of a message within a printed chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainPosition {
    /// 0-based index from the outermost error.
    pub index: usize,
    /// True for the last message that will be printed.
    pub is_last: bool,
}

/// Join pre-collected messages, applying `transform` to each one.
pub(crate) fn join_chain<'a, I, F>(messages: I, options: &PrintOptions, mut transform: F) -> String
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str, ChainPosition) -> String,
{
    let limit = if options.depth == 0 {
        usize::MAX
    } else {
        options.depth
    };
    let collected: Vec<&str> = messages.into_iter().take(limit).collect();
    let last = collected.len().saturating_sub(1);

    collected
        .iter()
        .enumerate()
        .map(|(index, message)| {
            transform(
                message,
                ChainPosition {
                    index,
                    is_last: index == last,
                },
            )
        })
        .collect::<Vec<_>>()
        .join(&options.separator)
}
