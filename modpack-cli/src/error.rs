//! CLI error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

use modpack::codec::CodecError;
use modpack::config::ConfigError;
use modpack::logging::LoggingError;
use modpack::resolver::{ResolveError, SelectorError};
use modpack::session::SessionError;

/// Errors surfaced to the user by the `modpack` binary.
#[derive(Debug)]
pub enum CliError {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },

    /// A descriptor could not be decoded or encoded.
    Codec { path: PathBuf, source: CodecError },

    /// The configuration file could not be loaded.
    Config(ConfigError),

    /// An input file other than a descriptor is malformed.
    InvalidInput { path: PathBuf, reason: String },

    /// A command-line argument is malformed.
    InvalidArgument(String),

    Resolve(ResolveError),

    Session(SessionError),

    Logging(LoggingError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Codec { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidInput { path, reason } => {
                write!(f, "{}: {}", path.display(), reason)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Resolve(e) => write!(f, "Resolution failed: {}", e),
            CliError::Session(SessionError::Invalid { report, .. }) => {
                writeln!(f, "Descriptor is invalid:")?;
                for violation in report {
                    writeln!(f, "  - {}", violation)?;
                }
                write!(f, "Use --lenient or set strict = false in [validation] to plan anyway.")
            }
            CliError::Session(e) => write!(f, "{}", e),
            CliError::Logging(e) => write!(f, "Logging setup failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Codec { source, .. } => Some(source),
            CliError::Config(e) => Some(e),
            CliError::Resolve(e) => Some(e),
            CliError::Session(e) => Some(e),
            CliError::Logging(e) => Some(e),
            CliError::InvalidInput { .. } | CliError::InvalidArgument(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<ResolveError> for CliError {
    fn from(e: ResolveError) -> Self {
        CliError::Resolve(e)
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        CliError::Session(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}

impl From<SelectorError> for CliError {
    fn from(e: SelectorError) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}
