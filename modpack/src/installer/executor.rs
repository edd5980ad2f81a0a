//! Plan execution through registered handlers.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::error::{InstallError, InstallResult};
use super::mirrors::fetch_from_mirrors;
use super::traits::{InstallHandler, SourceFetcher};
use crate::descriptor::InstallType;
use crate::plan::{InstallPlan, WorkItem};

/// Execution stage for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStage {
    Fetching,
    Installing,
    Done,
    Failed,
}

impl ExecStage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetching => "Fetching",
            Self::Installing => "Installing",
            Self::Done => "Done",
            Self::Failed => "Failed",
        }
    }
}

/// Progress callback: stage and download name.
pub type ExecProgressCallback = Box<dyn Fn(ExecStage, &str)>;

/// One handler per install type.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<InstallType, Box<dyn InstallHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `strategy`, replacing any previous one.
    pub fn register(&mut self, strategy: InstallType, handler: impl InstallHandler + 'static) {
        self.handlers.insert(strategy, Box::new(handler));
    }

    pub fn with_handler(
        mut self,
        strategy: InstallType,
        handler: impl InstallHandler + 'static,
    ) -> Self {
        self.register(strategy, handler);
        self
    }

    pub fn get(&self, strategy: InstallType) -> Option<&dyn InstallHandler> {
        self.handlers.get(&strategy).map(|h| h.as_ref())
    }

    /// Install types with no handler, in declaration order.
    pub fn missing(&self) -> Vec<InstallType> {
        InstallType::ALL
            .into_iter()
            .filter(|t| !self.handlers.contains_key(t))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<_> = self.handlers.keys().collect();
        registered.sort();
        f.debug_struct("HandlerRegistry")
            .field("registered", &registered)
            .finish()
    }
}

/// What happened to one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub download: String,
    pub strategy: InstallType,
    pub outcome: InstallResult<ItemSuccess>,
}

impl ItemReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSuccess {
    /// Mirror that served the archive.
    pub source: String,
    pub bytes: usize,
    pub placed: usize,
}

/// Runs an [`InstallPlan`]'s referenced work items in order.
///
/// Each item is fetched through the mirrors and handed to the handler for
/// its install type. Failures are recorded in the item's report and the
/// executor moves on; nothing is retried.
pub struct PlanExecutor<F: SourceFetcher> {
    fetcher: F,
    registry: HandlerRegistry,
    on_progress: Option<ExecProgressCallback>,
}

impl<F: SourceFetcher> PlanExecutor<F> {
    pub fn new(fetcher: F, registry: HandlerRegistry) -> Self {
        Self {
            fetcher,
            registry,
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, callback: ExecProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn execute(&self, plan: &InstallPlan) -> Vec<ItemReport> {
        let items: Vec<&WorkItem> = plan.work_items.iter().filter(|w| w.referenced).collect();
        info!(items = items.len(), "executing install plan");

        let reports: Vec<ItemReport> = items
            .into_iter()
            .map(|item| {
                let outcome = self.run_item(plan, item);
                let stage = if outcome.is_ok() {
                    ExecStage::Done
                } else {
                    ExecStage::Failed
                };
                self.report(stage, &item.download.name);
                if let Err(e) = &outcome {
                    warn!(download = %item.download.name, error = %e, "work item failed");
                }
                ItemReport {
                    download: item.download.name.clone(),
                    strategy: item.strategy,
                    outcome,
                }
            })
            .collect();

        let failed = reports.iter().filter(|r| !r.is_success()).count();
        info!(total = reports.len(), failed, "install plan executed");
        reports
    }

    fn run_item(&self, plan: &InstallPlan, item: &WorkItem) -> InstallResult<ItemSuccess> {
        let handler = self
            .registry
            .get(item.strategy)
            .ok_or(InstallError::NoHandler {
                strategy: item.strategy,
            })?;

        self.report(ExecStage::Fetching, &item.download.name);
        let archive = fetch_from_mirrors(&self.fetcher, &item.download)?;

        self.report(ExecStage::Installing, &item.download.name);
        let placements = plan.placements_for(&item.download.name);
        debug!(
            download = %item.download.name,
            handler = handler.name(),
            placements = placements.len(),
            "dispatching to handler"
        );
        let placed = handler
            .install(&archive, &placements)
            .map_err(|source| InstallError::HandlerFailed {
                download: item.download.name.clone(),
                strategy: item.strategy,
                source,
            })?;

        Ok(ItemSuccess {
            source: archive.source,
            bytes: archive.data.len(),
            placed,
        })
    }

    fn report(&self, stage: ExecStage, download: &str) {
        if let Some(cb) = &self.on_progress {
            cb(stage, download);
        }
    }
}
