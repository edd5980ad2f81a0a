//! Seams for the external downloader and install handlers.
//!
//! The core never performs network or filesystem work itself. Callers
//! provide a [`SourceFetcher`] for URLs and one [`InstallHandler`] per
//! install type.

use bytes::Bytes;

use super::error::{FetchError, HandlerError};
use crate::plan::Placement;

/// Raw archive bytes fetched from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArchive {
    /// URL the bytes came from.
    pub source: String,
    pub data: Bytes,
}

impl FetchedArchive {
    pub fn new(source: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            source: source.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fetches one URL.
///
/// Implementations do not retry; mirror fallback is handled by
/// [`fetch_from_mirrors`](super::fetch_from_mirrors).
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedArchive, FetchError>;
}

impl<F> SourceFetcher for F
where
    F: Fn(&str) -> Result<FetchedArchive, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<FetchedArchive, FetchError> {
        self(url)
    }
}

/// Unpacks an archive and applies its placements for one install type.
pub trait InstallHandler {
    /// Apply `placements` using the contents of `archive`.
    ///
    /// Returns the number of placements applied.
    fn install(
        &self,
        archive: &FetchedArchive,
        placements: &[&Placement],
    ) -> Result<usize, HandlerError>;

    /// Name for logs.
    fn name(&self) -> &str {
        "handler"
    }
}

