//! `modpack check`: compatibility against an installed-mods list.

use std::path::Path;

use modpack::compat::{self, Conflict, OrderHint};

use super::common::{read_descriptor, read_installed};
use crate::error::CliError;
use crate::output::Output;

/// Returns `Ok(false)` when any conflict is found.
pub fn run(out: &dyn Output, file: &Path, installed: &Path) -> Result<bool, CliError> {
    let descriptor = read_descriptor(file)?;
    let installed = read_installed(installed)?;

    let conflicts = compat::check(&descriptor, &installed);
    print_conflicts(out, &conflicts);

    let hints = compat::order_hints(&descriptor);
    if !hints.is_empty() {
        out.newline();
        print_order_hints(out, &hints);
    }
    Ok(conflicts.is_empty())
}

pub fn print_conflicts(out: &dyn Output, conflicts: &[Conflict]) {
    if conflicts.is_empty() {
        out.success("No conflicts");
        return;
    }
    out.header(&format!("Conflicts ({})", conflicts.len()));
    for conflict in conflicts {
        out.warning(&format!("  - {}", conflict));
    }
}

pub fn print_order_hints(out: &dyn Output, hints: &[OrderHint]) {
    out.header("Order hints");
    for hint in hints {
        out.indented(&hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::commands::common::fixtures::{write, DESCRIPTOR_JSON};
    use crate::output::BufferOutput;

    #[test]
    fn test_conflicts_are_listed() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let installed = write(
            &temp,
            "installed.json",
            r#"{"ff6.core": "1.0", "ff6.oldfonts": "0.1"}"#,
        );
        let out = BufferOutput::new();

        assert!(!run(&out, &path, &installed).unwrap());
        let text = out.text();
        assert!(text.contains("Conflicts (2)"));
        assert!(text.contains("requires ff6.core (version 2.0) but 1.0 is installed"));
        assert!(text.contains("cannot be installed alongside ff6.oldfonts 0.1"));
        assert!(text.contains("install after ff6.core (requires)"));
    }

    #[test]
    fn test_no_conflicts() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let installed = write(&temp, "installed.json", r#"{"ff6.core": "2.0"}"#);
        let out = BufferOutput::new();

        assert!(run(&out, &path, &installed).unwrap());
        assert_eq!(out.lines()[0], "No conflicts");
    }
}
