//! Closed enumerations used by mod descriptors.
//!
//! Each enumeration round-trips through its canonical text form (the same
//! spelling both encodings use) via [`fmt::Display`] and [`FromStr`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a tag string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseTagError {
    /// Which enumeration was being parsed (e.g. "install type").
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

impl ParseTagError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// How choices are presented when a mod has configurations.
///
/// All three are single-selection semantics; they differ only in how the
/// surrounding application presents the choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionType {
    /// Pick deterministically without prompting.
    #[default]
    Auto,
    /// Drop-down style selection.
    Select,
    /// Radio-button style selection.
    Radio,
}

impl SelectionType {
    /// All selection types in declaration order.
    pub const ALL: [SelectionType; 3] = [Self::Auto, Self::Select, Self::Radio];

    /// Canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Select => "Select",
            Self::Radio => "Radio",
        }
    }

    /// Whether the user must be asked.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::Auto)
    }
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTagError::new("selection type", s))
    }
}

/// Relative ordering of a mod against a referenced mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompatOrder {
    /// Install/load before the referenced mod.
    Before,
    /// Install/load after the referenced mod.
    After,
}

impl CompatOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "Before",
            Self::After => "After",
        }
    }
}

impl fmt::Display for CompatOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatOrder {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(ParseTagError::new("order", s)),
        }
    }
}

/// Unpack/placement strategy for a downloadable.
///
/// The core only carries the tag; an external installer dispatches one
/// handler per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstallType {
    Bundles,
    Memoria,
    Magicite,
    BepInEx,
    Compressed,
}

impl InstallType {
    /// All install types in declaration order.
    pub const ALL: [InstallType; 5] = [
        Self::Bundles,
        Self::Memoria,
        Self::Magicite,
        Self::BepInEx,
        Self::Compressed,
    ];

    /// Canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bundles => "Bundles",
            Self::Memoria => "Memoria",
            Self::Magicite => "Magicite",
            Self::BepInEx => "BepInEx",
            Self::Compressed => "Compressed",
        }
    }
}

impl fmt::Display for InstallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTagError::new("install type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_type_parse_is_case_insensitive() {
        assert_eq!("bepinex".parse::<InstallType>(), Ok(InstallType::BepInEx));
        assert_eq!(" Memoria ".parse::<InstallType>(), Ok(InstallType::Memoria));
    }

    #[test]
    fn test_install_type_display_matches_tag() {
        for t in InstallType::ALL {
            assert_eq!(t.to_string().parse::<InstallType>(), Ok(t));
        }
    }

    #[test]
    fn test_unknown_install_type() {
        let err = "DllPatch".parse::<InstallType>().unwrap_err();
        assert_eq!(err.kind, "install type");
        assert_eq!(err.to_string(), "unknown install type 'DllPatch'");
    }

    #[test]
    fn test_selection_type_default_is_auto() {
        assert_eq!(SelectionType::default(), SelectionType::Auto);
        assert!(!SelectionType::Auto.is_interactive());
        assert!(SelectionType::Radio.is_interactive());
    }

    #[test]
    fn test_compat_order_parse() {
        assert_eq!("Before".parse::<CompatOrder>(), Ok(CompatOrder::Before));
        assert_eq!("AFTER".parse::<CompatOrder>(), Ok(CompatOrder::After));
        assert!("".parse::<CompatOrder>().is_err());
    }
}
