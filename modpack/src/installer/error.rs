//! Error types for plan execution.

use thiserror::Error;

use crate::descriptor::InstallType;

/// Result type for installer operations.
pub type InstallResult<T> = Result<T, InstallError>;

/// One failed attempt to fetch a source URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// An install handler could not unpack or place a download.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Errors reported per work item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// The download lists no source URLs.
    #[error("download '{download}' has no sources")]
    NoSources { download: String },

    /// Every mirror failed.
    #[error("all {} sources failed for '{download}': {}", attempts.len(), format_attempts(attempts))]
    AllSourcesFailed {
        download: String,
        attempts: Vec<FetchError>,
    },

    /// No handler registered for the install type.
    #[error("no install handler registered for {strategy}")]
    NoHandler { strategy: InstallType },

    /// The handler rejected the archive.
    #[error("{strategy} handler failed for '{download}': {source}")]
    HandlerFailed {
        download: String,
        strategy: InstallType,
        #[source]
        source: HandlerError,
    },
}

fn format_attempts(attempts: &[FetchError]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
