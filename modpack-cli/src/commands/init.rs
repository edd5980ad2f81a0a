//! `modpack init`: write a default `config.ini`.

use std::path::Path;

use modpack::config::ConfigFile;

use crate::error::CliError;
use crate::output::Output;

/// Write defaults to `path`, or the default location when `None`.
///
/// An existing file is kept unless `force` is set.
pub fn run(out: &dyn Output, path: Option<&Path>, force: bool) -> Result<bool, CliError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => ConfigFile::default_path()?,
    };

    if path.exists() && !force {
        out.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
        return Ok(false);
    }

    ConfigFile::default().save_to(&path)?;
    out.success(&format!("Wrote {}", path.display()));
    Ok(true)
}
