//! Configuration graph resolution.
//!
//! A mod's configurations form a small directed graph stored as a flat list
//! of named nodes. [`resolve`] walks it from the root, asking a
//! [`ChoiceSelector`] for one choice per node and collecting each chosen
//! payload. The walk aborts on the first broken edge or revisited node.
//!
//! ```text
//! root ──choice──▶ next ──choice──▶ … ──choice (no next)──▶ done
//! ```

mod error;
mod graph;
mod resolve;
mod selector;

pub use error::{ResolveError, ResolveResult, SelectorError};
pub use graph::ConfigGraph;
pub use resolve::{resolve, Resolution, ResolvedStep};
pub use selector::{ChoiceRequest, ChoiceSelector, FirstChoice, ScriptedSelector};
