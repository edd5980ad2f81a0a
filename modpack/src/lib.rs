//! Modpack - mod package descriptors for game-modding tools
//!
//! This library validates mod package descriptors and turns them into
//! install plans. It covers:
//!
//! - [`descriptor`]: the descriptor model (metadata, downloads, placements,
//!   configurations, compatibility rules)
//! - [`codec`]: JSON and XML encodings of a descriptor
//! - [`validator`]: full-report structural validation
//! - [`resolver`]: the branching configuration graph walk
//! - [`compat`]: require/forbid checks against installed mods
//! - [`plan`]: merging resolved payloads into an install plan
//! - [`installer`]: seams for downloading and unpacking, plus a plan executor
//! - [`session`]: the validate → check → resolve → compile pipeline
//! - [`config`]: the user's `config.ini`
//! - [`logging`]: tracing subscriber setup for binaries
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use modpack::codec::{self, Format};
//! use modpack::resolver::FirstChoice;
//! use modpack::session::{InstallSession, SessionConfig};
//!
//! let json = r#"{
//!     "ID": "demo", "Name": "Demo", "Author": "me", "ReleaseDate": "today",
//!     "Category": "UI", "Description": "d", "Link": "https://example.com",
//!     "ModFileLink": ["https://example.com/demo.json"],
//!     "Downloadable": [{"Name": "main", "Source": ["https://example.com/main.zip"], "InstallType": "Memoria"}],
//!     "DownloadFile": {"DownloadName": "main", "File": [{"From": "a.txt", "To": "Data/a.txt"}]}
//! }"#;
//!
//! let descriptor = codec::decode(json, Format::Json).unwrap();
//! let installed: HashMap<String, String> = HashMap::new();
//!
//! let session = InstallSession::new(SessionConfig::default());
//! let prepared = session.prepare(&descriptor, &installed, &mut FirstChoice).unwrap();
//! assert!(prepared.can_proceed());
//! assert_eq!(prepared.plan.placements.len(), 1);
//! ```

pub mod codec;
pub mod compat;
pub mod config;
pub mod descriptor;
pub mod installer;
pub mod logging;
pub mod plan;
pub mod resolver;
pub mod session;
pub mod validator;
