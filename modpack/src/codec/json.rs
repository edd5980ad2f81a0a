//! JSON descriptor encoding.
//!
//! The descriptor types carry the JSON key names directly, so this is a thin
//! layer over `serde_json` that adds tab-indented output.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::error::{CodecError, CodecResult};
use super::Format;
use crate::descriptor::Mod;

pub fn decode(text: &str) -> CodecResult<Mod> {
    serde_json::from_str(text).map_err(|e| CodecError::decode(Format::Json, e))
}

pub fn encode(descriptor: &Mod) -> CodecResult<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    descriptor
        .serialize(&mut serializer)
        .map_err(|e| CodecError::encode(Format::Json, e))?;
    String::from_utf8(buffer).map_err(|e| CodecError::encode(Format::Json, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Download, DownloadFiles, InstallType, ModFile};

    #[test]
    fn test_encode_uses_descriptor_key_names() {
        let m = Mod::new("id", "name")
            .with_download(Download::new("main", InstallType::Memoria))
            .with_always_install(DownloadFiles::new("main").with_file(ModFile::new("a", "b")));

        let text = encode(&m).unwrap();
        assert!(text.contains("\"ID\": \"id\""));
        assert!(text.contains("\"Downloadable\""));
        assert!(text.contains("\"DownloadFile\""));
        assert!(text.contains("\"InstallType\": \"Memoria\""));
        assert!(text.contains("\"ConfigSelectionType\": \"Auto\""));
        // optional sections are omitted when absent
        assert!(!text.contains("\"Preview\""));
        assert!(!text.contains("\"Compatibility\""));
        assert!(!text.contains("\"Configuration\""));
        assert!(text.contains("\n\t\"ID\""));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = decode("{ not json").unwrap_err();
        assert!(matches!(err, CodecError::Decode { format: Format::Json, .. }));
    }
}
