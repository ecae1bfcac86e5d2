//! `Type(label='value', ...)` rendering for reasons.

use crate::config::FormatConfig;
use crate::metadata;
use crate::reason::Reason;

/// Accumulates labelled values and renders them as `Type(label='value', ...)`.
///
/// Empty values are skipped so optional sections disappear from the output.
///
/// # Example
///
/// ```
/// use reasoned_reasons::ReasonStringBuilder;
///
/// let rendered = ReasonStringBuilder::new("Error")
///     .with_info("Message", "boom")
///     .with_info("Metadata", "")
///     .build();
/// assert_eq!(rendered, "Error(Message='boom')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonStringBuilder {
    reason_type: String,
    infos: Vec<(String, String)>,
}

impl ReasonStringBuilder {
    /// Start rendering a reason of the given type.
    pub fn new(reason_type: impl Into<String>) -> Self {
        Self {
            reason_type: reason_type.into(),
            infos: Vec::new(),
        }
    }

    /// Append a labelled value (ignored when `value` is empty).
    #[must_use]
    pub fn with_info(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.infos.push((label.into(), value));
        }
        self
    }

    /// Render the accumulated values.
    pub fn build(&self) -> String {
        format!("{}({})", self.reason_type, self.body())
    }

    /// Render the accumulated values and leave `label` open for nested text.
    ///
    /// The caller appends the nested value and then [`CLOSE_NESTED`].
    pub(crate) fn build_open(&self, label: &str) -> String {
        let body = self.body();
        let separator = if body.is_empty() { "" } else { ", " };
        format!("{}({body}{separator}{label}='", self.reason_type)
    }

    fn body(&self) -> String {
        self.infos
            .iter()
            .map(|(label, value)| format!("{label}='{value}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Closes a value opened by [`ReasonStringBuilder::build_open`].
pub(crate) const CLOSE_NESTED: &str = "')";

/// A reason that owns child reasons of its own kind.
pub(crate) trait ReasonTree: Reason + Sized {
    /// Label the children are rendered under.
    const CHILDREN_LABEL: &'static str;

    fn children(&self) -> &[Self];

    /// Additional labelled value rendered after the message.
    fn extra_info(&self) -> Option<(&'static str, String)>;
}

enum Step<'a, R> {
    Open(&'a R),
    Text(&'a str),
}

/// Render a reason together with every descendant (causes or antecedents).
///
/// Works from an explicit stack, so nesting depth is bounded by memory only.
pub(crate) fn render_reason<R: ReasonTree>(root: &R, config: &FormatConfig) -> String {
    let mut rendered = String::new();
    let mut pending = vec![Step::Open(root)];

    while let Some(step) = pending.pop() {
        let reason = match step {
            Step::Text(text) => {
                rendered.push_str(text);
                continue;
            },
            Step::Open(reason) => reason,
        };

        let mut builder = ReasonStringBuilder::new(reason.reason_type())
            .with_info("Message", reason.message());
        if let Some((label, value)) = reason.extra_info() {
            builder = builder.with_info(label, value);
        }
        if config.include_metadata {
            builder = builder.with_info("Metadata", metadata::render(reason.metadata()));
        }

        let children = reason.children();
        if children.is_empty() {
            rendered.push_str(&builder.build());
            continue;
        }
        rendered.push_str(&builder.build_open(R::CHILDREN_LABEL));
        pending.push(Step::Text(CLOSE_NESTED));
        for (index, child) in children.iter().enumerate().rev() {
            pending.push(Step::Open(child));
            if index > 0 {
                pending.push(Step::Text(&config.reason_separator));
            }
        }
    }
    rendered
}
