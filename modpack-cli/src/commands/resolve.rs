//! `modpack resolve`: walk the configuration graph and show the result.

use std::path::Path;

use modpack::resolver::{self, ChoiceSelector, Resolution};

use super::common::{print_download_files, read_descriptor};
use crate::error::CliError;
use crate::output::Output;

pub fn run<S>(out: &dyn Output, file: &Path, selector: &mut S) -> Result<bool, CliError>
where
    S: ChoiceSelector + ?Sized,
{
    let descriptor = read_descriptor(file)?;
    let resolution = resolver::resolve(&descriptor, selector)?;
    print_resolution(out, &resolution);
    Ok(true)
}

pub fn print_resolution(out: &dyn Output, resolution: &Resolution) {
    out.header("Choices");
    if resolution.path.is_empty() {
        out.indented("(no configurations)");
    }
    for step in &resolution.path {
        out.indented(&step.to_string());
    }

    out.newline();
    out.header("Files");
    if resolution.files.is_empty() {
        out.indented("(nothing to install)");
    }
    for files in &resolution.files {
        print_download_files(out, files);
    }
}
