//! The root descriptor type.
//!
//! A [`Mod`] is built or decoded as a unit and is treated as an immutable
//! value by the validator, resolver and compatibility checker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::compat::ModCompatibility;
use super::configuration::Configuration;
use super::files::{Download, DownloadFiles};
use super::meta::{DonationLink, Game, Preview};
use super::types::SelectionType;

/// The mod does not declare support for a game (or game version).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{mod_name} does not support {game}")]
pub struct UnsupportedGame {
    pub mod_name: String,
    pub game: String,
}

/// Full descriptor of one installable modification package.
///
/// # Example
///
/// ```
/// use modpack::descriptor::{Download, DownloadFiles, InstallType, Mod, ModFile};
///
/// let descriptor = Mod::new("ff6.font", "Readable Font")
///     .with_download(Download::new("font", InstallType::Bundles).with_source("https://example.com/font.zip"))
///     .with_always_install(DownloadFiles::new("font").with_file(ModFile::new("font.bundle", "Data/font.bundle")));
///
/// assert_eq!(descriptor.id, "ff6.font");
/// assert!(descriptor.find_download("font").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mod {
    /// Stable identity across versions.
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "ReleaseDate")]
    pub release_date: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "ReleaseNotes")]
    pub release_notes: String,

    #[serde(rename = "Link")]
    pub link: String,

    /// Alternate serialized forms of this descriptor (`.json` / `.xml`).
    #[serde(
        rename = "ModFileLink",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub mod_file_links: Vec<String>,

    #[serde(rename = "Preview", skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,

    #[serde(rename = "Compatibility", skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<ModCompatibility>,

    #[serde(
        rename = "Downloadable",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub downloadables: Vec<Download>,

    #[serde(
        rename = "DonationLink",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub donation_links: Vec<DonationLink>,

    #[serde(
        rename = "Games",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub games: Vec<Game>,

    /// The "always install" payload, applied before any configuration choice.
    #[serde(rename = "DownloadFile", skip_serializing_if = "Option::is_none")]
    pub always_install: Option<DownloadFiles>,

    #[serde(
        rename = "Configuration",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub configurations: Vec<Configuration>,

    #[serde(
        rename = "ConfigSelectionType",
        with = "crate::descriptor::fields::empty_as_default"
    )]
    pub selection_type: SelectionType,
}

impl Mod {
    /// Create a descriptor with only identity fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_download(mut self, download: Download) -> Self {
        self.downloadables.push(download);
        self
    }

    pub fn with_always_install(mut self, files: DownloadFiles) -> Self {
        self.always_install = Some(files);
        self
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configurations.push(configuration);
        self
    }

    pub fn with_compatibility(mut self, compatibility: ModCompatibility) -> Self {
        self.compatibility = Some(compatibility);
        self
    }

    pub fn with_game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }

    pub fn with_selection_type(mut self, selection_type: SelectionType) -> Self {
        self.selection_type = selection_type;
        self
    }

    /// Look up a downloadable by name.
    pub fn find_download(&self, name: &str) -> Option<&Download> {
        self.downloadables.iter().find(|d| d.name == name)
    }

    /// Look up a configuration by name (first match).
    pub fn find_configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|c| c.name == name)
    }

    /// The configuration resolution starts from.
    ///
    /// This is the single node flagged as root, or the only configuration when
    /// exactly one exists. Returns `None` when the root is missing or ambiguous.
    pub fn root_configuration(&self) -> Option<&Configuration> {
        let mut roots = self.configurations.iter().filter(|c| c.root);
        match (roots.next(), roots.next()) {
            (Some(root), None) => Some(root),
            (None, _) if self.configurations.len() == 1 => self.configurations.first(),
            _ => None,
        }
    }

    /// The "always install" payload, if present and non-empty.
    pub fn always_install_files(&self) -> Option<&DownloadFiles> {
        self.always_install.as_ref().filter(|f| !f.is_empty())
    }

    /// Check that the mod declares `game`.
    pub fn supports(&self, game: &str) -> Result<(), UnsupportedGame> {
        if self.games.iter().any(|g| g.names(game)) {
            Ok(())
        } else {
            Err(self.unsupported(game.to_string()))
        }
    }

    /// Check that the mod declares `game` and accepts `version` of it.
    pub fn supports_version(&self, game: &str, version: &str) -> Result<(), UnsupportedGame> {
        if self
            .games
            .iter()
            .any(|g| g.names(game) && g.accepts_version(version))
        {
            Ok(())
        } else {
            Err(self.unsupported(format!("{} {}", game, version)))
        }
    }

    fn unsupported(&self, game: String) -> UnsupportedGame {
        UnsupportedGame {
            mod_name: self.name.clone(),
            game,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Choice;

    #[test]
    fn test_root_configuration_single_node_without_flag() {
        let m = Mod::new("m", "M").with_configuration(Configuration::new("only"));
        assert_eq!(m.root_configuration().map(|c| c.name.as_str()), Some("only"));
    }

    #[test]
    fn test_root_configuration_flagged() {
        let m = Mod::new("m", "M")
            .with_configuration(Configuration::new("B"))
            .with_configuration(Configuration::new("A").as_root());
        assert_eq!(m.root_configuration().map(|c| c.name.as_str()), Some("A"));
    }

    #[test]
    fn test_root_configuration_missing_or_ambiguous() {
        let none = Mod::new("m", "M")
            .with_configuration(Configuration::new("A"))
            .with_configuration(Configuration::new("B"));
        assert!(none.root_configuration().is_none());

        let two = Mod::new("m", "M")
            .with_configuration(Configuration::new("A").as_root())
            .with_configuration(Configuration::new("B").as_root());
        assert!(two.root_configuration().is_none());
    }

    #[test]
    fn test_supports_game() {
        let m = Mod::new("m", "Font Fix").with_game(Game::new("Final Fantasy III").with_version("1.0.2"));

        assert!(m.supports("III").is_ok());
        let err = m.supports("IV").unwrap_err();
        assert_eq!(err.to_string(), "Font Fix does not support IV");

        assert!(m.supports_version("III", "1.0.2").is_ok());
        assert!(m.supports_version("III", "1.0.3").is_err());
    }

    #[test]
    fn test_always_install_files_skips_empty() {
        let m = Mod::new("m", "M").with_always_install(DownloadFiles::new("x"));
        assert!(m.always_install_files().is_none());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let json = r#"{
            "ID": "m", "Name": "M", "ModFileLink": null, "Downloadable": null,
            "DonationLink": null, "Games": null, "ConfigSelectionType": ""
        }"#;
        let m: Mod = serde_json::from_str(json).unwrap();
        assert!(m.mod_file_links.is_empty());
        assert!(m.downloadables.is_empty());
        assert_eq!(m.selection_type, SelectionType::Auto);
    }

    #[test]
    fn test_configuration_lookup() {
        let m = Mod::new("m", "M").with_configuration(
            Configuration::new("A").with_choice(Choice::new("c1")),
        );
        assert!(m.find_configuration("A").is_some());
        assert!(m.find_configuration("B").is_none());
    }
}
