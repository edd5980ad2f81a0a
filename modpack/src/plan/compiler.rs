//! Install plan compilation.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::types::{InstallPlan, Overlap, OverlapPolicy, Placement, WorkItem};
use crate::descriptor::{Download, DownloadFiles};

/// Merges resolved payloads into an [`InstallPlan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanCompiler {
    policy: OverlapPolicy,
}

impl PlanCompiler {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Flatten `payloads` in order and classify `downloadables` by install
    /// type. Within one payload, files come before directories.
    pub fn compile(&self, payloads: &[DownloadFiles], downloadables: &[Download]) -> InstallPlan {
        let placements: Vec<Placement> = payloads.iter().flat_map(flatten).collect();
        let overlaps = find_overlaps(&placements);
        for overlap in &overlaps {
            warn!(
                target_path = %overlap.target,
                earlier = %placements[overlap.earlier].download_name(),
                later = %placements[overlap.later].download_name(),
                policy = %self.policy,
                "placements overlap"
            );
        }

        let mut work_items = Vec::new();
        let mut unclassified = Vec::new();
        for download in downloadables {
            match download.install_type {
                Some(strategy) => work_items.push(WorkItem {
                    download: download.clone(),
                    strategy,
                    referenced: placements
                        .iter()
                        .any(|p| p.download_name() == download.name),
                }),
                None => unclassified.push(download.name.clone()),
            }
        }

        debug!(
            placements = placements.len(),
            work_items = work_items.len(),
            unclassified = unclassified.len(),
            overlaps = overlaps.len(),
            "install plan compiled"
        );

        InstallPlan {
            policy: self.policy,
            placements,
            work_items,
            unclassified,
            overlaps,
            order_hints: Vec::new(),
        }
    }
}

/// Compile with the default [`OverlapPolicy::LastWriteWins`].
pub fn compile(payloads: &[DownloadFiles], downloadables: &[Download]) -> InstallPlan {
    PlanCompiler::default().compile(payloads, downloadables)
}

fn flatten(payload: &DownloadFiles) -> impl Iterator<Item = Placement> + '_ {
    let files = payload.files.iter().map(move |file| Placement::File {
        download_name: payload.download_name.clone(),
        file: file.clone(),
    });
    let dirs = payload.dirs.iter().map(move |dir| Placement::Dir {
        download_name: payload.download_name.clone(),
        dir: dir.clone(),
    });
    files.chain(dirs)
}

/// Pair each placement with the previous one on the same target.
fn find_overlaps(placements: &[Placement]) -> Vec<Overlap> {
    let mut last_seen: HashMap<String, usize> = HashMap::new();
    let mut overlaps = Vec::new();
    for (i, placement) in placements.iter().enumerate() {
        let target = placement.target();
        if let Some(earlier) = last_seen.insert(target.clone(), i) {
            overlaps.push(Overlap {
                target,
                earlier,
                later: i,
            });
        }
    }
    overlaps
}
