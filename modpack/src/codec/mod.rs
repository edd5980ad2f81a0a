//! Textual encodings of mod descriptors.
//!
//! Descriptors round-trip through two encodings with equivalent content:
//!
//! - **JSON** - key names taken from the serde attributes on the
//!   [`descriptor`](crate::descriptor) types
//! - **XML** - `<Mod>` root with its own element names (see [`xml`])
//!
//! The rest of the crate only sees the decoded [`Mod`]; this module is the
//! only place that knows about either encoding. Optional sections that are
//! absent are omitted on encode and decode back to absent.

mod error;
mod json;
mod xml;

use std::fmt;
use std::path::Path;

pub use error::{CodecError, CodecResult};

use crate::descriptor::Mod;

/// Supported descriptor encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// Format for a file extension (without the dot), case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Format for a path or URL, judged by its extension.
    pub fn from_path(path: impl AsRef<Path>) -> CodecResult<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Xml => write!(f, "XML"),
        }
    }
}

/// Decode a descriptor from text.
pub fn decode(text: &str, format: Format) -> CodecResult<Mod> {
    match format {
        Format::Json => json::decode(text),
        Format::Xml => xml::decode(text),
    }
}

/// Encode a descriptor as indented text.
pub fn encode(descriptor: &Mod, format: Format) -> CodecResult<String> {
    match format {
        Format::Json => json::encode(descriptor),
        Format::Xml => xml::encode(descriptor),
    }
}

/// Re-encode descriptor text from one format into another.
pub fn convert(text: &str, from: Format, to: Format) -> CodecResult<String> {
    encode(&decode(text, from)?, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("mods/ff6.JSON").unwrap(), Format::Json);
        assert_eq!(Format::from_path("mod.xml").unwrap(), Format::Xml);
        assert!(matches!(
            Format::from_path("mod.yaml"),
            Err(CodecError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path("mod").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Json.to_string(), "JSON");
        assert_eq!(Format::Xml.extension(), "xml");
    }
}
