//! Install plan compilation.
//!
//! The compiler merges the ordered payloads produced by the
//! [resolver](crate::resolver) into one flat list of placements and tags each
//! downloadable with its [`InstallType`](crate::descriptor::InstallType)
//! strategy. It performs no I/O; the plan is handed to an external installer.
//!
//! Overlapping `To` paths are recorded, never silently merged. Which
//! placement counts as the final state is decided by [`OverlapPolicy`].

mod compiler;
mod types;

pub use compiler::{compile, PlanCompiler};
pub use types::{
    normalize_target, InstallPlan, Overlap, OverlapPolicy, ParsePolicyError, Placement, WorkItem,
};
