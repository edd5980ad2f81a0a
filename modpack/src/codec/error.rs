//! Error types for descriptor encoding and decoding.

use thiserror::Error;

use super::Format;
use crate::descriptor::ParseTagError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while converting descriptors to and from text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not a well-formed descriptor in the given format.
    #[error("failed to decode {format} descriptor: {reason}")]
    Decode { format: Format, reason: String },

    /// The descriptor could not be written in the given format.
    #[error("failed to encode {format} descriptor: {reason}")]
    Encode { format: Format, reason: String },

    /// An enumeration field holds an unknown tag.
    #[error("invalid {field}: {source}")]
    InvalidTag {
        field: &'static str,
        #[source]
        source: ParseTagError,
    },

    /// A path or file name does not indicate a supported format.
    #[error("unsupported descriptor format: {0}")]
    UnsupportedFormat(String),
}

impl CodecError {
    pub(crate) fn decode(format: Format, reason: impl ToString) -> Self {
        Self::Decode {
            format,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encode(format: Format, reason: impl ToString) -> Self {
        Self::Encode {
            format,
            reason: reason.to_string(),
        }
    }
}
