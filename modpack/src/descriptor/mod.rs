//! Mod package descriptor model.
//!
//! This module provides the entity definitions for a mod package descriptor:
//! metadata, download sources, file-placement instructions, branching
//! installation configurations and inter-mod compatibility rules.
//!
//! # Type Hierarchy
//!
//! ```text
//! Mod
//! ├── compatibility: Option<ModCompatibility>   (requires / forbids)
//! ├── downloadables: Vec<Download>              (mirrors + InstallType)
//! ├── always_install: Option<DownloadFiles>     (files / dirs)
//! ├── configurations: Vec<Configuration>        (graph nodes)
//! │   └── choices: Vec<Choice>                  (edges, optional payload)
//! ├── games, donation_links, preview
//! └── selection_type: SelectionType
//! ```
//!
//! All types own their children by value. The serde derives use the JSON key
//! names of the descriptor format; see [`crate::codec`] for the XML form.

mod compat;
mod configuration;
mod core;
pub(crate) mod fields;
mod files;
mod meta;
mod types;

pub use self::core::{Mod, UnsupportedGame};
pub use compat::{ModCompat, ModCompatibility};
pub use configuration::{Choice, Configuration};
pub use files::{Download, DownloadFiles, ModDir, ModFile};
pub use meta::{DonationLink, Game, Preview, Size, MIN_PREVIEW_SIZE};
pub use types::{CompatOrder, InstallType, ParseTagError, SelectionType};
