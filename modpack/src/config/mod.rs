//! User configuration file.
//!
//! Settings live in `config.ini` under the user's config directory
//! (`~/.config/modpack/config.ini` on Linux). See [`ConfigFile`].

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{ConfigFile, LoggingSettings, PlanSettings, ValidationSettings, DEFAULT_LOG_LEVEL};
