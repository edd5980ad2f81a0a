//! Mirror fallback.

use tracing::{debug, warn};

use super::error::{InstallError, InstallResult};
use super::traits::{FetchedArchive, SourceFetcher};
use crate::descriptor::Download;

/// Try each of `download`'s sources in list order.
///
/// Returns the first successful fetch. If every source fails the error
/// lists each attempt in order.
///
/// # Example
///
/// ```
/// use modpack::descriptor::{Download, InstallType};
/// use modpack::installer::{fetch_from_mirrors, FetchError, FetchedArchive};
///
/// let download = Download::new("core", InstallType::Memoria)
///     .with_source("https://down.example/core.zip")
///     .with_source("https://mirror.example/core.zip");
///
/// let fetcher = |url: &str| -> Result<FetchedArchive, FetchError> {
///     if url.contains("mirror") {
///         Ok(FetchedArchive::new(url, &b"PK"[..]))
///     } else {
///         Err(FetchError::new(url, "503"))
///     }
/// };
///
/// let archive = fetch_from_mirrors(&fetcher, &download).unwrap();
/// assert_eq!(archive.source, "https://mirror.example/core.zip");
/// ```
pub fn fetch_from_mirrors<F>(fetcher: &F, download: &Download) -> InstallResult<FetchedArchive>
where
    F: SourceFetcher + ?Sized,
{
    if download.sources.is_empty() {
        return Err(InstallError::NoSources {
            download: download.name.clone(),
        });
    }

    let mut attempts = Vec::with_capacity(download.sources.len());
    for url in &download.sources {
        match fetcher.fetch(url) {
            Ok(archive) => {
                debug!(
                    download = %download.name,
                    source = %archive.source,
                    bytes = archive.len(),
                    "fetched"
                );
                return Ok(archive);
            }
            Err(e) => {
                warn!(download = %download.name, error = %e, "source failed, trying next");
                attempts.push(e);
            }
        }
    }

    Err(InstallError::AllSourcesFailed {
        download: download.name.clone(),
        attempts,
    })
}
