//! Inter-mod compatibility constraints.

use serde::{Deserialize, Serialize};

use super::types::CompatOrder;

/// A reference to another mod, with acceptable versions and optional ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModCompat {
    #[serde(rename = "ModID")]
    pub mod_id: String,

    #[serde(rename = "Name")]
    pub name: String,

    /// Exact version strings. Empty matches any version.
    #[serde(
        rename = "Version",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub versions: Vec<String>,

    #[serde(rename = "Source")]
    pub source: String,

    #[serde(
        rename = "Order",
        skip_serializing_if = "Option::is_none",
        with = "crate::descriptor::fields::empty_as_none"
    )]
    pub order: Option<CompatOrder>,
}

impl ModCompat {
    pub fn new(mod_id: impl Into<String>) -> Self {
        Self {
            mod_id: mod_id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.versions.push(version.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_order(mut self, order: CompatOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Exact-match version membership; an empty set accepts everything.
    ///
    /// ```
    /// use modpack::descriptor::ModCompat;
    ///
    /// let any = ModCompat::new("X");
    /// assert!(any.accepts("2.0"));
    ///
    /// let pinned = ModCompat::new("X").with_version("1.0");
    /// assert!(pinned.accepts("1.0"));
    /// assert!(!pinned.accepts("1.0.0"));
    /// ```
    pub fn accepts(&self, version: &str) -> bool {
        self.versions.is_empty() || self.versions.iter().any(|v| v == version)
    }

    /// Name for messages: the display name if set, otherwise the ID.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.mod_id
        } else {
            &self.name
        }
    }
}

/// Require and forbid constraint lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModCompatibility {
    #[serde(
        rename = "Require",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub requires: Vec<ModCompat>,

    #[serde(
        rename = "Forbid",
        deserialize_with = "crate::descriptor::fields::null_as_default"
    )]
    pub forbids: Vec<ModCompat>,
}

impl ModCompatibility {
    pub fn has_items(&self) -> bool {
        !self.requires.is_empty() || !self.forbids.is_empty()
    }

    pub fn with_require(mut self, compat: ModCompat) -> Self {
        self.requires.push(compat);
        self
    }

    pub fn with_forbid(mut self, compat: ModCompat) -> Self {
        self.forbids.push(compat);
        self
    }
}
