/// Errors produced while encoding or decoding Open API messages.
#[derive(Debug, thiserror::Error)]
pub enum OpenApiError {
    /// An inner message or envelope could not be encoded.
    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        source: prost::EncodeError,
    },

    /// Bytes on the wire are not a valid message of the expected shape.
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        source: prost::DecodeError,
    },

    /// The payload type tag is not in the catalog.
    #[error("unknown payload type {0}")]
    UnknownType(u32),
}

pub type Result<T> = std::result::Result<T, OpenApiError>;
