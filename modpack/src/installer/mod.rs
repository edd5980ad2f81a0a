//! Install plan execution seams.
//!
//! Downloading and unpacking belong to the surrounding application. This
//! module defines the traits it implements and a small executor that walks
//! an [`InstallPlan`](crate::plan::InstallPlan):
//!
//! 1. Fetch the download, trying mirrors in order ([`fetch_from_mirrors`])
//! 2. Dispatch to the [`InstallHandler`] registered for its install type
//! 3. Record an [`ItemReport`] per work item

mod error;
mod executor;
mod mirrors;
mod traits;

pub use error::{FetchError, HandlerError, InstallError, InstallResult};
pub use executor::{
    ExecProgressCallback, ExecStage, HandlerRegistry, ItemReport, ItemSuccess, PlanExecutor,
};
pub use mirrors::fetch_from_mirrors;
pub use traits::{FetchedArchive, InstallHandler, SourceFetcher};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::descriptor::{Download, DownloadFiles, InstallType, ModFile};
    use crate::plan::{compile, Placement};

    /// Serves fixed bodies by URL and records every request.
    #[derive(Default)]
    struct MockFetcher {
        bodies: HashMap<String, &'static [u8]>,
        requests: RefCell<Vec<String>>,
    }

    impl MockFetcher {
        fn serving(mut self, url: &str, body: &'static [u8]) -> Self {
            self.bodies.insert(url.to_string(), body);
            self
        }
    }

    impl SourceFetcher for MockFetcher {
        fn fetch(&self, url: &str) -> Result<FetchedArchive, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.bodies
                .get(url)
                .map(|body| FetchedArchive::new(url, *body))
                .ok_or_else(|| FetchError::new(url, "not found"))
        }
    }

    struct CountingHandler {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl InstallHandler for CountingHandler {
        fn install(
            &self,
            archive: &FetchedArchive,
            placements: &[&Placement],
        ) -> Result<usize, HandlerError> {
            self.seen.borrow_mut().push(archive.source.clone());
            Ok(placements.len())
        }
    }

    struct FailingHandler;

    impl InstallHandler for FailingHandler {
        fn install(&self, _: &FetchedArchive, _: &[&Placement]) -> Result<usize, HandlerError> {
            Err(HandlerError::new("corrupt archive"))
        }
    }

    #[test]
    fn test_mirrors_tried_in_order() {
        let fetcher = MockFetcher::default().serving("https://b/x.zip", b"PK");
        let download = Download::new("x", InstallType::Bundles)
            .with_source("https://a/x.zip")
            .with_source("https://b/x.zip")
            .with_source("https://c/x.zip");

        let archive = fetch_from_mirrors(&fetcher, &download).unwrap();
        assert_eq!(archive.source, "https://b/x.zip");
        assert_eq!(
            *fetcher.requests.borrow(),
            vec!["https://a/x.zip".to_string(), "https://b/x.zip".to_string()]
        );
    }

    #[test]
    fn test_all_mirrors_failing_lists_attempts() {
        let fetcher = MockFetcher::default();
        let download = Download::new("x", InstallType::Bundles)
            .with_source("https://a/x.zip")
            .with_source("https://b/x.zip");

        match fetch_from_mirrors(&fetcher, &download) {
            Err(InstallError::AllSourcesFailed { download, attempts }) => {
                assert_eq!(download, "x");
                assert_eq!(attempts.len(), 2);
                assert_eq!(attempts[1].url, "https://b/x.zip");
            }
            other => panic!("expected AllSourcesFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_no_sources() {
        let download = Download::new("x", InstallType::Bundles);
        assert_eq!(
            fetch_from_mirrors(&MockFetcher::default(), &download),
            Err(InstallError::NoSources {
                download: "x".into()
            })
        );
    }

    #[test]
    fn test_registry_reports_missing_types() {
        let registry = HandlerRegistry::new().with_handler(InstallType::Memoria, FailingHandler);
        assert!(registry.get(InstallType::Memoria).is_some());
        assert!(!registry.is_complete());
        assert_eq!(
            registry.missing(),
            vec![
                InstallType::Bundles,
                InstallType::Magicite,
                InstallType::BepInEx,
                InstallType::Compressed,
            ]
        );
    }

    #[test]
    fn test_executor_reports_each_referenced_item() {
        let downloads = vec![
            Download::new("core", InstallType::Memoria).with_source("https://a/core.zip"),
            Download::new("fonts", InstallType::Bundles).with_source("https://a/fonts.zip"),
            Download::new("broken", InstallType::Magicite).with_source("https://a/broken.zip"),
            Download::new("unused", InstallType::Compressed).with_source("https://a/unused.7z"),
        ];
        let plan = compile(
            &[
                DownloadFiles::new("core")
                    .with_file(ModFile::new("a", "A"))
                    .with_file(ModFile::new("b", "B")),
                DownloadFiles::new("fonts").with_file(ModFile::new("f", "F")),
                DownloadFiles::new("broken").with_file(ModFile::new("x", "X")),
            ],
            &downloads,
        );

        let seen = Rc::new(RefCell::new(Vec::new()));
        let registry = HandlerRegistry::new()
            .with_handler(
                InstallType::Memoria,
                CountingHandler {
                    seen: Rc::clone(&seen),
                },
            )
            .with_handler(InstallType::Magicite, FailingHandler);
        let fetcher = MockFetcher::default()
            .serving("https://a/core.zip", b"core")
            .serving("https://a/fonts.zip", b"fonts")
            .serving("https://a/broken.zip", b"broken");

        let stages = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&stages);
        let executor = PlanExecutor::new(fetcher, registry).with_progress(Box::new(
            move |stage: ExecStage, name: &str| {
                recorder.borrow_mut().push((stage, name.to_string()));
            },
        ));

        let reports = executor.execute(&plan);
        assert_eq!(reports.len(), 3);

        assert_eq!(
            reports[0].outcome,
            Ok(ItemSuccess {
                source: "https://a/core.zip".into(),
                bytes: 4,
                placed: 2,
            })
        );
        assert_eq!(
            reports[1].outcome,
            Err(InstallError::NoHandler {
                strategy: InstallType::Bundles
            })
        );
        assert!(matches!(
            reports[2].outcome,
            Err(InstallError::HandlerFailed { .. })
        ));
        assert_eq!(*seen.borrow(), vec!["https://a/core.zip".to_string()]);

        let stages = stages.borrow();
        assert_eq!(stages[0], (ExecStage::Fetching, "core".to_string()));
        assert!(stages.contains(&(ExecStage::Failed, "fonts".to_string())));
        assert!(!stages.iter().any(|(_, name)| name == "unused"));
    }
}
