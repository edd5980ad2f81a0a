//! `modpack convert`: re-encode a descriptor between JSON and XML.

use std::path::Path;

use modpack::codec;
use tracing::info;

use super::common::{format_of, read_text, write_text};
use crate::error::CliError;
use crate::output::Output;

pub fn run(out: &dyn Output, input: &Path, output: &Path) -> Result<bool, CliError> {
    let from = format_of(input)?;
    let to = format_of(output)?;

    let text = read_text(input)?;
    let converted = codec::convert(&text, from, to).map_err(|source| CliError::Codec {
        path: input.to_path_buf(),
        source,
    })?;
    write_text(output, &converted)?;

    info!(input = %input.display(), output = %output.display(), %from, %to, "descriptor converted");
    out.success(&format!(
        "Wrote {} ({} -> {})",
        output.display(),
        from,
        to
    ));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use modpack::codec::Format;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::common::fixtures::{write, DESCRIPTOR_JSON};
    use crate::commands::common::read_descriptor;
    use crate::output::BufferOutput;

    #[test]
    fn test_json_to_xml_and_back() {
        let temp = TempDir::new().unwrap();
        let json = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let xml = temp.path().join("fonts.xml");
        let back = temp.path().join("again.json");
        let out = BufferOutput::new();

        run(&out, &json, &xml).unwrap();
        run(&out, &xml, &back).unwrap();

        assert!(read_text(&xml).unwrap().contains("<Mod"));
        assert_eq!(read_descriptor(&back).unwrap(), read_descriptor(&json).unwrap());
        assert!(out.lines()[0].ends_with("(JSON -> XML)"));
    }

    #[test]
    fn test_unknown_output_extension() {
        let temp = TempDir::new().unwrap();
        let json = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let result = run(&BufferOutput::new(), &json, &temp.path().join("fonts.toml"));

        assert!(matches!(result, Err(CliError::Codec { .. })));
        assert_eq!(Format::from_path(&json).unwrap(), Format::Json);
    }
}
