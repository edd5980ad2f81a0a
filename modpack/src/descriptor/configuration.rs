//! Branching installation configurations.
//!
//! Configurations form a small directed graph stored as a flat list of
//! named nodes. Each [`Choice`] may name the next configuration to visit;
//! a choice without a next name ends the branch.

use serde::{Deserialize, Serialize};

use super::files::DownloadFiles;
use super::meta::Preview;

/// One option within a [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Preview", skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,

    #[serde(rename = "DownloadFiles", skip_serializing_if = "Option::is_none")]
    pub download_files: Option<DownloadFiles>,

    #[serde(rename = "NextConfigurationName", skip_serializing_if = "Option::is_none")]
    pub next_configuration_name: Option<String>,
}

impl Choice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_files(mut self, files: DownloadFiles) -> Self {
        self.download_files = Some(files);
        self
    }

    pub fn with_next(mut self, configuration: impl Into<String>) -> Self {
        self.next_configuration_name = Some(configuration.into());
        self
    }

    /// The configuration this choice leads to, ignoring blank names.
    pub fn next(&self) -> Option<&str> {
        self.next_configuration_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// A node of the configuration graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Preview", skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,

    #[serde(rename = "Root")]
    pub root: bool,

    #[serde(
        rename = "Choice",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub choices: Vec<Choice>,
}

impl Configuration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Mark this configuration as the graph root (builder pattern).
    pub fn as_root(mut self) -> Self {
        self.root = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn choice(&self, name: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_next_is_terminal() {
        let mut choice = Choice::new("c");
        assert_eq!(choice.next(), None);

        choice.next_configuration_name = Some(String::new());
        assert_eq!(choice.next(), None);

        let choice = Choice::new("c").with_next("B");
        assert_eq!(choice.next(), Some("B"));
    }

    #[test]
    fn test_choice_lookup() {
        let config = Configuration::new("A")
            .with_choice(Choice::new("low"))
            .with_choice(Choice::new("high"));

        assert_eq!(config.choice("high").map(|c| c.name.as_str()), Some("high"));
        assert!(config.choice("medium").is_none());
    }
}
