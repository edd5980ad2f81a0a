//! Structured validation results.
//!
//! A [`ValidationReport`] is an append-only list of [`Violation`]s. The
//! validator pushes one record per broken rule and keeps going, so callers
//! can show everything wrong with a descriptor at once.

use std::fmt;

use crate::descriptor::Size;

/// Which rule a violation broke, with the context needed to act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required scalar field (or the mod file link list) is blank.
    MissingField { field: &'static str },

    /// A mod file link does not end in `.json` or `.xml`.
    InvalidModFileLink { link: String },

    /// The preview is not larger than 50 pixels on both axes.
    PreviewTooSmall { size: Size },

    /// The descriptor has no downloadables.
    NoDownloadables,

    /// A downloadable has a blank name.
    DownloadMissingName,

    /// A downloadable has no sources.
    DownloadMissingSource { download: String },

    /// A downloadable has no install type.
    DownloadMissingInstallType { download: String },

    /// Neither a non-empty "always install" payload nor any configuration.
    NoInstallPayload,

    /// The "always install" payload exists but has no files or dirs.
    EmptyAlwaysInstall { download_name: String },

    /// A configuration has a blank name.
    ConfigurationMissingName,

    /// A configuration has a blank description.
    ConfigurationMissingDescription { configuration: String },

    /// A configuration has no choices.
    ConfigurationWithoutChoices { configuration: String },

    /// A choice has a blank name.
    ChoiceMissingName { configuration: String },

    /// A choice names its own configuration as the next one.
    SelfReferencingChoice {
        configuration: String,
        choice: String,
    },

    /// Several configurations, none marked root.
    MissingRoot,

    /// More than one configuration marked root.
    MultipleRoots { count: usize },

    /// Two configurations share a name.
    DuplicateConfiguration { name: String },

    /// A choice names a configuration that does not exist.
    UnknownNextConfiguration {
        configuration: String,
        choice: String,
        target: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{} is required", field),
            Self::InvalidModFileLink { link } => {
                write!(f, "Mod File Link [{}] must be json or xml", link)
            }
            Self::PreviewTooSmall { .. } => write!(f, "Preview size must be greater than 50"),
            Self::NoDownloadables => write!(f, "Must have at least one Downloadables"),
            Self::DownloadMissingName => write!(f, "Downloadables' name is required"),
            Self::DownloadMissingSource { download } => {
                write!(f, "Downloadables [{}]'s Source is required", download)
            }
            Self::DownloadMissingInstallType { download } => {
                write!(f, "Downloadables [{}]'s Install Type is required", download)
            }
            Self::NoInstallPayload => write!(
                f,
                "One \"Always Download\", at least one \"Configuration\" or both are required"
            ),
            Self::EmptyAlwaysInstall { download_name } => write!(
                f,
                "DownloadFiles [{}] must have at least one File or Dir specified",
                download_name
            ),
            Self::ConfigurationMissingName => write!(f, "Configuration's Name is required"),
            Self::ConfigurationMissingDescription { configuration } => {
                write!(f, "Configuration's [{}] Description is required", configuration)
            }
            Self::ConfigurationWithoutChoices { configuration } => {
                write!(f, "Configuration's [{}] must have Choices", configuration)
            }
            Self::ChoiceMissingName { configuration } => {
                write!(f, "Configuration's [{}] Choice's Name is required", configuration)
            }
            Self::SelfReferencingChoice { configuration, .. } => write!(
                f,
                "Configuration's [{}] Choice's Next Configuration Name must not be the same as the Configuration's Name",
                configuration
            ),
            Self::MissingRoot => write!(f, "Must have at least one 'Root' Configuration"),
            Self::MultipleRoots { .. } => write!(f, "Only one 'Root' Configuration is allowed"),
            Self::DuplicateConfiguration { name } => {
                write!(f, "Configuration name [{}] is used more than once", name)
            }
            Self::UnknownNextConfiguration {
                configuration,
                choice,
                target,
            } => write!(
                f,
                "Configuration's [{}] Choice [{}] names unknown Next Configuration [{}]",
                configuration, choice, target
            ),
        }
    }
}

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl From<ViolationKind> for Violation {
    fn from(kind: ViolationKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered collection of violations. Empty means the descriptor is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn push(&mut self, kind: ViolationKind) {
        self.violations.push(kind.into());
    }

    /// Append a violation when `broken` holds.
    pub fn check(&mut self, broken: bool, kind: impl FnOnce() -> ViolationKind) {
        if broken {
            self.push(kind());
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Messages in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Whether any violation matches `predicate`.
    pub fn contains(&self, predicate: impl Fn(&ViolationKind) -> bool) -> bool {
        self.violations.iter().any(|v| predicate(&v.kind))
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
