//! Downloadables and file-placement instructions.

use serde::{Deserialize, Serialize};

use super::types::InstallType;

/// One fetchable unit.
///
/// Sources are mirrors, tried in list order by the external downloader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(
        rename = "Source",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub sources: Vec<String>,

    /// `None` when the descriptor leaves the install type blank.
    #[serde(rename = "InstallType", with = "crate::descriptor::fields::empty_as_none")]
    pub install_type: Option<InstallType>,
}

impl Download {
    pub fn new(name: impl Into<String>, install_type: InstallType) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            install_type: Some(install_type),
        }
    }

    /// Append a mirror URL (builder pattern).
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.sources.push(url.into());
        self
    }
}

/// A single file copied from an unpacked download to a game-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModFile {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
}

impl ModFile {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A directory copied from an unpacked download, optionally recursively.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModDir {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Recursive")]
    pub recursive: bool,
}

impl ModDir {
    pub fn new(from: impl Into<String>, to: impl Into<String>, recursive: bool) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            recursive,
        }
    }
}

/// A named bundle of placement instructions.
///
/// `download_name` names the [`Download`] whose unpacked contents the
/// `from` paths are relative to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadFiles {
    #[serde(rename = "DownloadName")]
    pub download_name: String,

    #[serde(
        rename = "File",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub files: Vec<ModFile>,

    #[serde(
        rename = "Dir",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub dirs: Vec<ModDir>,
}

impl DownloadFiles {
    pub fn new(download_name: impl Into<String>) -> Self {
        Self {
            download_name: download_name.into(),
            ..Default::default()
        }
    }

    pub fn with_file(mut self, file: ModFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_dir(mut self, dir: ModDir) -> Self {
        self.dirs.push(dir);
        self
    }

    /// No files and no directories. This is an invalid payload.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Total number of placement instructions.
    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.len()
    }
}
