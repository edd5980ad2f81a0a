//! Require/forbid evaluation and order hints.

use std::fmt;

use tracing::{debug, warn};

use super::installed::InstalledMods;
use crate::descriptor::{CompatOrder, Mod, ModCompat};

/// Which constraint list a conflict or hint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintList {
    Requires,
    Forbids,
}

impl fmt::Display for ConstraintList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintList::Requires => write!(f, "requires"),
            ConstraintList::Forbids => write!(f, "forbids"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// A required mod is absent or installed at an unaccepted version.
    MissingRequirement,
    /// A forbidden mod is installed at a matching version.
    ForbiddenCombination,
}

/// One unmet compatibility constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub mod_id: String,
    /// Display name from the constraint; may be empty.
    pub name: String,
    /// Versions the constraint names. Empty means any version.
    pub accepted_versions: Vec<String>,
    /// What is installed now, if anything.
    pub installed_version: Option<String>,
}

impl Conflict {
    fn new(kind: ConflictKind, compat: &ModCompat, installed: Option<&str>) -> Self {
        Self {
            kind,
            mod_id: compat.mod_id.clone(),
            name: compat.name.clone(),
            accepted_versions: compat.versions.clone(),
            installed_version: installed.map(str::to_string),
        }
    }

    fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.mod_id
        } else {
            &self.name
        }
    }

    fn versions(&self) -> String {
        if self.accepted_versions.is_empty() {
            "any version".to_string()
        } else {
            format!("version {}", self.accepted_versions.join(" or "))
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.installed_version) {
            (ConflictKind::MissingRequirement, None) => write!(
                f,
                "requires {} ({}) which is not installed",
                self.label(),
                self.versions()
            ),
            (ConflictKind::MissingRequirement, Some(installed)) => write!(
                f,
                "requires {} ({}) but {} is installed",
                self.label(),
                self.versions(),
                installed
            ),
            (ConflictKind::ForbiddenCombination, Some(installed)) => write!(
                f,
                "cannot be installed alongside {} {}",
                self.label(),
                installed
            ),
            (ConflictKind::ForbiddenCombination, None) => {
                write!(f, "cannot be installed alongside {}", self.label())
            }
        }
    }
}

/// Advisory install ordering relative to another mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHint {
    pub mod_id: String,
    pub order: CompatOrder,
    pub source_list: ConstraintList,
}

impl fmt::Display for OrderHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.order {
            CompatOrder::Before => "before",
            CompatOrder::After => "after",
        };
        write!(f, "install {} {} ({})", relation, self.mod_id, self.source_list)
    }
}

/// Evaluate `candidate`'s require and forbid lists against `installed`.
///
/// Every constraint is checked; the result lists all conflicts in
/// declaration order, requires first. An empty list means install may
/// proceed. Conflicts are informational: the caller decides whether to
/// override.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use modpack::compat::{check, ConflictKind};
/// use modpack::descriptor::{Mod, ModCompat, ModCompatibility};
///
/// let candidate = Mod::new("me", "Me").with_compatibility(
///     ModCompatibility::default().with_require(ModCompat::new("X").with_version("1.0")),
/// );
///
/// let mut installed = HashMap::new();
/// installed.insert("X".to_string(), "2.0".to_string());
///
/// let conflicts = check(&candidate, &installed);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].kind, ConflictKind::MissingRequirement);
/// ```
pub fn check<I>(candidate: &Mod, installed: &I) -> Vec<Conflict>
where
    I: InstalledMods + ?Sized,
{
    let Some(compat) = &candidate.compatibility else {
        return Vec::new();
    };

    let mut conflicts = Vec::new();

    for require in &compat.requires {
        let version = installed.installed_version(&require.mod_id);
        let satisfied = version.is_some_and(|v| require.accepts(v));
        debug!(mod_id = %require.mod_id, ?version, satisfied, "requirement checked");
        if !satisfied {
            conflicts.push(Conflict::new(ConflictKind::MissingRequirement, require, version));
        }
    }

    for forbid in &compat.forbids {
        let version = installed.installed_version(&forbid.mod_id);
        let matched = version.is_some_and(|v| forbid.accepts(v));
        debug!(mod_id = %forbid.mod_id, ?version, matched, "forbid checked");
        if matched {
            conflicts.push(Conflict::new(ConflictKind::ForbiddenCombination, forbid, version));
        }
    }

    if !conflicts.is_empty() {
        warn!(
            mod_id = %candidate.id,
            conflicts = conflicts.len(),
            "compatibility conflicts found"
        );
    }
    conflicts
}

/// Collect the `Before`/`After` hints of both constraint lists.
pub fn order_hints(candidate: &Mod) -> Vec<OrderHint> {
    let Some(compat) = &candidate.compatibility else {
        return Vec::new();
    };

    let lists = [
        (ConstraintList::Requires, &compat.requires),
        (ConstraintList::Forbids, &compat.forbids),
    ];
    lists
        .into_iter()
        .flat_map(|(list, entries)| {
            entries.iter().filter_map(move |entry| {
                entry.order.map(|order| OrderHint {
                    mod_id: entry.mod_id.clone(),
                    order,
                    source_list: list,
                })
            })
        })
        .collect()
}
