//! Install plan types.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::compat::OrderHint;
use crate::descriptor::{Download, InstallType, ModDir, ModFile};

/// Rule for two placements targeting the same `To` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// The placement applied later in traversal order is the final state.
    #[default]
    LastWriteWins,
    /// The first placement targeting a path is kept; later ones are dropped.
    FirstWriteWins,
}

impl OverlapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapPolicy::LastWriteWins => "last_write_wins",
            OverlapPolicy::FirstWriteWins => "first_write_wins",
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown overlap policy '{0}' (expected last_write_wins or first_write_wins)")]
pub struct ParsePolicyError(pub String);

impl FromStr for OverlapPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "last_write_wins" | "last" => Ok(OverlapPolicy::LastWriteWins),
            "first_write_wins" | "first" => Ok(OverlapPolicy::FirstWriteWins),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// One file or directory placement, tagged with its source download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    File { download_name: String, file: ModFile },
    Dir { download_name: String, dir: ModDir },
}

impl Placement {
    pub fn download_name(&self) -> &str {
        match self {
            Placement::File { download_name, .. } | Placement::Dir { download_name, .. } => {
                download_name
            }
        }
    }

    pub fn from(&self) -> &str {
        match self {
            Placement::File { file, .. } => &file.from,
            Placement::Dir { dir, .. } => &dir.from,
        }
    }

    pub fn to(&self) -> &str {
        match self {
            Placement::File { file, .. } => &file.to,
            Placement::Dir { dir, .. } => &dir.to,
        }
    }

    /// The `To` path in the form used for collision detection.
    pub fn target(&self) -> String {
        normalize_target(self.to())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Placement::Dir { .. })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::File {
                download_name,
                file,
            } => write!(f, "[{}] {} -> {}", download_name, file.from, file.to),
            Placement::Dir {
                download_name,
                dir,
            } => write!(
                f,
                "[{}] {}/ -> {}/{}",
                download_name,
                dir.from,
                dir.to,
                if dir.recursive { " (recursive)" } else { "" }
            ),
        }
    }
}

/// Normalise a `To` path: `\` becomes `/`, repeated separators collapse and
/// a trailing separator is dropped.
///
/// ```
/// use modpack::plan::normalize_target;
///
/// assert_eq!(normalize_target(r"StreamingAssets\\Data//ui/"), "StreamingAssets/Data/ui");
/// ```
pub fn normalize_target(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let mut out = String::with_capacity(unified.len());
    for segment in unified.split('/').filter(|s| !s.is_empty()) {
        if !out.is_empty() || unified.starts_with('/') {
            out.push('/');
        }
        out.push_str(segment);
    }
    if out.is_empty() && unified.starts_with('/') {
        out.push('/');
    }
    out
}

/// A downloadable tagged with the strategy that unpacks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub download: Download,
    pub strategy: InstallType,
    /// Some placement in the plan reads from this download.
    pub referenced: bool,
}

/// Two placements targeting the same normalised path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub target: String,
    /// Index into [`InstallPlan::placements`] of the earlier placement.
    pub earlier: usize,
    /// Index of the later placement.
    pub later: usize,
}

/// Merged placements plus classified downloads, ready for an installer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    pub policy: OverlapPolicy,
    /// Placements in application order.
    pub placements: Vec<Placement>,
    /// One item per downloadable with an install type, in declaration order.
    pub work_items: Vec<WorkItem>,
    /// Downloadables without an install type.
    pub unclassified: Vec<String>,
    pub overlaps: Vec<Overlap>,
    pub order_hints: Vec<OrderHint>,
}

impl InstallPlan {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements that survive the overlap policy, in application order.
    pub fn effective_placements(&self) -> Vec<&Placement> {
        let mut winner: HashMap<String, usize> = HashMap::new();
        for (i, placement) in self.placements.iter().enumerate() {
            let target = placement.target();
            match self.policy {
                OverlapPolicy::LastWriteWins => {
                    winner.insert(target, i);
                }
                OverlapPolicy::FirstWriteWins => {
                    winner.entry(target).or_insert(i);
                }
            }
        }

        self.placements
            .iter()
            .enumerate()
            .filter(|(i, p)| winner.get(&p.target()) == Some(i))
            .map(|(_, p)| p)
            .collect()
    }

    pub fn work_items_for(&self, strategy: InstallType) -> impl Iterator<Item = &WorkItem> {
        self.work_items
            .iter()
            .filter(move |item| item.strategy == strategy)
    }

    /// Effective placements that read from `download_name`.
    pub fn placements_for(&self, download_name: &str) -> Vec<&Placement> {
        self.effective_placements()
            .into_iter()
            .filter(|p| p.download_name() == download_name)
            .collect()
    }

    pub fn with_order_hints(mut self, hints: Vec<OrderHint>) -> Self {
        self.order_hints = hints;
        self
    }
}
