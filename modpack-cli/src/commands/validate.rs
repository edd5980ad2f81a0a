//! `modpack validate`: report every violation in a descriptor.

use std::path::Path;

use modpack::validator;

use super::common::read_descriptor;
use crate::error::CliError;
use crate::output::Output;

/// Returns `Ok(false)` when the descriptor has violations.
pub fn run(out: &dyn Output, file: &Path) -> Result<bool, CliError> {
    let descriptor = read_descriptor(file)?;
    let report = validator::validate(&descriptor);

    if report.is_valid() {
        out.success("Mod is valid");
        return Ok(true);
    }

    out.header(&format!(
        "{} ({} violations)",
        file.display(),
        report.len()
    ));
    for violation in &report {
        out.indented(&format!("- {}", violation));
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::commands::common::fixtures::{write, DESCRIPTOR_JSON};
    use crate::output::BufferOutput;

    #[test]
    fn test_valid_descriptor() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let out = BufferOutput::new();

        assert!(run(&out, &path).unwrap());
        assert_eq!(out.lines(), vec!["Mod is valid"]);
    }

    #[test]
    fn test_invalid_descriptor_lists_violations() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "empty.json", r#"{"Name": "x"}"#);
        let out = BufferOutput::new();

        assert!(!run(&out, &path).unwrap());
        let text = out.text();
        assert!(text.contains("- ID is required"));
        assert!(text.contains("- Must have at least one Downloadables"));
    }
}
