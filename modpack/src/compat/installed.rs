//! Read-only view of already-installed mods.

use std::collections::{BTreeMap, HashMap};

/// Supplies the installed version of a mod by ID.
///
/// The store behind this view is owned elsewhere; the checker only reads it.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use modpack::compat::InstalledMods;
///
/// let mut installed = HashMap::new();
/// installed.insert("X".to_string(), "1.0".to_string());
///
/// assert_eq!(installed.installed_version("X"), Some("1.0"));
/// assert!(installed.installed_version("Y").is_none());
/// ```
pub trait InstalledMods {
    fn installed_version(&self, mod_id: &str) -> Option<&str>;

    fn is_installed(&self, mod_id: &str) -> bool {
        self.installed_version(mod_id).is_some()
    }
}

impl InstalledMods for HashMap<String, String> {
    fn installed_version(&self, mod_id: &str) -> Option<&str> {
        self.get(mod_id).map(String::as_str)
    }
}

impl InstalledMods for BTreeMap<String, String> {
    fn installed_version(&self, mod_id: &str) -> Option<&str> {
        self.get(mod_id).map(String::as_str)
    }
}

impl<T: InstalledMods + ?Sized> InstalledMods for &T {
    fn installed_version(&self, mod_id: &str) -> Option<&str> {
        (**self).installed_version(mod_id)
    }
}

/// No mods installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NothingInstalled;

impl InstalledMods for NothingInstalled {
    fn installed_version(&self, _mod_id: &str) -> Option<&str> {
        None
    }
}
