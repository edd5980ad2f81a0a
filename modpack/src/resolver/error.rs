//! Error types for configuration resolution.

use thiserror::Error;

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Failure reported by a [`ChoiceSelector`](super::ChoiceSelector).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector picked an index outside the choice list.
    #[error("choice index {index} is out of range ({available} choices)")]
    OutOfRange { index: usize, available: usize },

    /// The selector has no answer for this configuration.
    #[error("no choice available for configuration '{0}'")]
    NoAnswer(String),

    /// The selector was given a choice name that does not exist.
    #[error("configuration '{configuration}' has no choice named '{choice}'")]
    UnknownChoice {
        configuration: String,
        choice: String,
    },

    /// The user (or an outer cancellation signal) aborted the prompt.
    #[error("selection cancelled")]
    Cancelled,

    /// Any other failure of the external choice source.
    #[error("{0}")]
    Failed(String),
}

/// Errors that abort configuration resolution.
///
/// Resolution is fail-fast: a partial plan from a broken graph is never
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A choice names a configuration that does not exist.
    #[error("configuration '{from}' choice '{choice}' leads to unknown configuration '{target}'")]
    DanglingReference {
        from: String,
        choice: String,
        target: String,
    },

    /// The resolution path revisited a configuration.
    #[error("configuration cycle detected: {}", path.join(" -> "))]
    CyclicConfiguration { path: Vec<String> },

    /// The choice selector failed or returned an invalid option.
    #[error("choice selection failed for configuration '{configuration}': {source}")]
    SelectorFailure {
        configuration: String,
        #[source]
        source: SelectorError,
    },

    /// Several configurations and none marked root.
    #[error("no root configuration among {count} configurations")]
    MissingRoot { count: usize },

    /// More than one configuration marked root.
    #[error("multiple root configurations: {}", names.join(", "))]
    MultipleRoots { names: Vec<String> },

    /// Two configurations share a name, so lookups by name are ambiguous.
    #[error("duplicate configuration name '{name}'")]
    DuplicateConfiguration { name: String },

    /// A visited configuration has no choices to select from.
    #[error("configuration '{name}' has no choices")]
    EmptyConfiguration { name: String },
}
