//! Common helpers shared across CLI commands.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use modpack::codec::{self, Format};
use modpack::config::{ConfigFile, ConfigResult};
use modpack::descriptor::{DownloadFiles, Mod};
use modpack::resolver::{FirstChoice, ScriptedSelector};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;
use crate::prompt::PromptSelector;

/// Choice selection flags shared by `resolve` and `plan`.
#[derive(Debug, Clone, Default, Args)]
pub struct ChoiceArgs {
    /// Answer a configuration ahead of time (repeatable)
    #[arg(long = "choose", value_name = "CONFIG=CHOICE")]
    pub choose: Vec<String>,

    /// Prompt for every configuration not answered by --choose
    #[arg(short, long)]
    pub interactive: bool,
}

impl ChoiceArgs {
    /// Scripted answers first, then prompts or the first choice.
    pub fn selector(&self) -> Result<ScriptedSelector, CliError> {
        let scripted = ScriptedSelector::from_pairs(self.choose.iter().map(String::as_str))?;
        Ok(if self.interactive {
            scripted.with_fallback(PromptSelector::new())
        } else {
            scripted.with_fallback(FirstChoice)
        })
    }
}

/// Load the config file from `explicit`, or the default location.
///
/// A broken default config is reported on `out` and replaced by defaults; a
/// broken explicit one is an error. Runs before logging is installed;
/// problems are printed on `out`.
pub fn load_config(out: &dyn Output, explicit: Option<&Path>) -> Result<ConfigFile, CliError> {
    match explicit {
        Some(path) => Ok(ConfigFile::load_from(path)?),
        None => Ok(or_defaults(out, ConfigFile::load())),
    }
}

fn or_defaults(out: &dyn Output, loaded: ConfigResult<ConfigFile>) -> ConfigFile {
    loaded.unwrap_or_else(|e| {
        out.warning(&format!("warning: ignoring unreadable config file: {}", e));
        ConfigFile::default()
    })
}

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
    fs::write(path, text).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn format_of(path: &Path) -> Result<Format, CliError> {
    Format::from_path(path).map_err(|source| CliError::Codec {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode a descriptor, choosing the format by extension.
pub fn read_descriptor(path: &Path) -> Result<Mod, CliError> {
    let format = format_of(path)?;
    let text = read_text(path)?;
    let descriptor = codec::decode(&text, format).map_err(|source| CliError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %format, id = %descriptor.id, "descriptor loaded");
    Ok(descriptor)
}

/// Read an installed-mods list: a JSON object of mod ID to version.
pub fn read_installed(path: &Path) -> Result<HashMap<String, String>, CliError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| CliError::InvalidInput {
        path: PathBuf::from(path),
        reason: format!("expected a JSON object of mod ID to version: {}", e),
    })
}

pub fn print_download_files(out: &dyn Output, files: &DownloadFiles) {
    out.subheader(&format!("[{}]", files.download_name));
    for file in &files.files {
        out.indented(&format!("{} -> {}", file.from, file.to));
    }
    for dir in &files.dirs {
        let recursive = if dir.recursive { " (recursive)" } else { "" };
        out.indented(&format!("{}/ -> {}/{}", dir.from, dir.to, recursive));
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// A valid two-configuration descriptor.
    pub const DESCRIPTOR_JSON: &str = r#"{
	"ID": "ff6.fonts",
	"Name": "Fonts",
	"Author": "kupo",
	"ReleaseDate": "Jan 02 2024",
	"Category": "Fonts",
	"Description": "Font pack",
	"Link": "https://example.com/fonts",
	"ModFileLink": ["https://example.com/fonts.json"],
	"Downloadable": [
		{"Name": "fonts", "Source": ["https://example.com/fonts.zip"], "InstallType": "Bundles"},
		{"Name": "extra", "Source": ["https://example.com/extra.zip"], "InstallType": "Compressed"}
	],
	"DownloadFile": {"DownloadName": "fonts", "File": [{"From": "base.bundle", "To": "Fonts/base.bundle"}]},
	"Compatibility": {
		"Require": [{"ModID": "ff6.core", "Version": ["2.0"], "Order": "After"}],
		"Forbid": [{"ModID": "ff6.oldfonts"}]
	},
	"Configuration": [
		{"Name": "Style", "Description": "Font style", "Root": true, "Choice": [
			{"Name": "Sans", "DownloadFiles": {"DownloadName": "fonts", "File": [{"From": "sans.bundle", "To": "Fonts/menu.bundle"}]}},
			{"Name": "Serif", "DownloadFiles": {"DownloadName": "fonts", "File": [{"From": "serif.bundle", "To": "Fonts/menu.bundle"}]}, "NextConfigurationName": "Size"}
		]},
		{"Name": "Size", "Description": "Font size", "Choice": [
			{"Name": "Large", "DownloadFiles": {"DownloadName": "fonts", "File": [{"From": "large.bundle", "To": "Fonts/base.bundle"}]}}
		]}
	],
	"ConfigSelectionType": "Select"
}"#;

    pub fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path
    }
}
