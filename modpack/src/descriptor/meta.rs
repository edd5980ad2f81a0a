//! Simple attribute records attached to a descriptor.

use serde::{Deserialize, Serialize};

/// Minimum preview dimension (exclusive) on both axes.
pub const MIN_PREVIEW_SIZE: i64 = 50;

/// Pixel size of a preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
}

impl Size {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Both axes exceed [`MIN_PREVIEW_SIZE`].
    pub fn is_large_enough(&self) -> bool {
        self.x > MIN_PREVIEW_SIZE && self.y > MIN_PREVIEW_SIZE
    }
}

/// Optional preview image, remote or relative to the mod's working directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "Local", skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,

    #[serde(rename = "Size")]
    pub size: Size,
}

impl Preview {
    pub fn remote(url: impl Into<String>, size: Size) -> Self {
        Self {
            url: Some(url.into()),
            local: None,
            size,
        }
    }

    pub fn local(path: impl Into<String>, size: Size) -> Self {
        Self {
            url: None,
            local: Some(path.into()),
            size,
        }
    }
}

/// A supported game and the game versions the mod was built against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(rename = "Name")]
    pub name: String,

    /// Empty means every version is accepted.
    #[serde(
        rename = "Version",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub versions: Vec<String>,
}

impl Game {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.versions.push(version.into());
        self
    }

    /// Whether this entry names `game`: exact match, or the declared name
    /// ends with `" <game>"`. Case-insensitive.
    pub fn names(&self, game: &str) -> bool {
        let declared = self.name.to_lowercase();
        let wanted = game.trim().to_lowercase();
        !wanted.is_empty() && (declared == wanted || declared.ends_with(&format!(" {}", wanted)))
    }

    pub fn accepts_version(&self, version: &str) -> bool {
        self.versions.is_empty() || self.versions.iter().any(|v| v == version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationLink {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Link")]
    pub link: String,
}
