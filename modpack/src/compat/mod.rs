//! Compatibility checking against installed mods.
//!
//! [`check`] evaluates a candidate's `Requires` and `Forbids` lists against an
//! [`InstalledMods`] view and reports every unmet constraint as a
//! [`Conflict`]. `Order` constraints are not gates; [`order_hints`] collects
//! them as advisory metadata for the installer.
//!
//! Version matching is exact string membership. An empty version list
//! matches any installed version.

mod checker;
mod installed;

pub use checker::{check, order_hints, Conflict, ConflictKind, ConstraintList, OrderHint};
pub use installed::{InstalledMods, NothingInstalled};
