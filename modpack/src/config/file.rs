//! INI-backed user configuration.

use std::path::{Path, PathBuf};

use ini::Ini;
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use crate::plan::OverlapPolicy;
use crate::session::SessionConfig;

const APP_DIR: &str = "modpack";
const FILE_NAME: &str = "config.ini";

const VALIDATION: &str = "validation";
const PLAN: &str = "plan";
const LOGGING: &str = "logging";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSettings {
    /// Refuse to plan installs for invalid descriptors.
    pub strict: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSettings {
    pub overlap_policy: OverlapPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    pub level: String,
    /// Directory for a daily rolling log file. `None` logs to stderr only.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            directory: None,
        }
    }
}

/// The user's `config.ini`.
///
/// ```ini
/// [validation]
/// strict = true
///
/// [plan]
/// overlap_policy = last_write_wins
///
/// [logging]
/// level = info
/// directory = /var/log/modpack
/// ```
///
/// A missing file or key yields the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub validation: ValidationSettings,
    pub plan: PlanSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// `<config dir>/modpack/config.ini` for the current user.
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default path.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(source) => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
            ini::Error::Parse(e) => ConfigError::Parse(e.to_string()),
        })?;
        debug!(path = %path.display(), "config file loaded");
        Self::from_ini(&ini)
    }

    pub fn parse(text: &str) -> ConfigResult<Self> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(strict) = ini.get_from(Some(VALIDATION), "strict") {
            config.validation.strict = parse_bool(VALIDATION, "strict", strict)?;
        }

        if let Some(policy) = ini.get_from(Some(PLAN), "overlap_policy") {
            config.plan.overlap_policy = policy
                .parse()
                .map_err(|_| invalid(PLAN, "overlap_policy", policy))?;
        }

        if let Some(level) = ini.get_from(Some(LOGGING), "level") {
            if level.trim().is_empty() {
                return Err(invalid(LOGGING, "level", level));
            }
            config.logging.level = level.trim().to_string();
        }
        if let Some(dir) = ini.get_from(Some(LOGGING), "directory") {
            let dir = dir.trim();
            config.logging.directory = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        Ok(config)
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some(VALIDATION))
            .set("strict", self.validation.strict.to_string());
        ini.with_section(Some(PLAN))
            .set("overlap_policy", self.plan.overlap_policy.as_str());
        let mut logging = ini.with_section(Some(LOGGING));
        logging.set("level", self.logging.level.as_str());
        if let Some(dir) = &self.logging.directory {
            logging.set("directory", dir.display().to_string());
        }
        ini
    }

    /// Write to the default path.
    pub fn save(&self) -> ConfigResult<PathBuf> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        self.to_ini().write_to_file(path).map_err(write_err)
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.validation.strict = strict;
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.plan.overlap_policy = policy;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    pub fn with_log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logging.directory = Some(dir.into());
        self
    }

    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .with_strict(self.validation.strict)
            .with_overlap_policy(self.plan.overlap_policy)
    }
}

fn parse_bool(section: &str, key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(section, key, value)),
    }
}

fn invalid(section: &str, key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    }
}
