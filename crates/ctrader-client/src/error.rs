use std::time::Duration;

/// Errors that can occur in client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] ctrader_transport::TransportError),

    /// Message encoding, decoding or type lookup failed.
    #[error("protocol error: {0}")]
    OpenApi(#[from] ctrader_openapi::OpenApiError),

    /// No response arrived before the deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// A correlation id was registered twice.
    #[error("duplicate correlation id {0}")]
    DuplicateId(String),

    /// The client is not started.
    #[error("client is not running")]
    NotRunning,

    /// Application authorization was rejected or malformed.
    #[error("handshake failed: {0}")]
    HandshakeFailed(String),

    /// The server answered with an error response.
    #[error("server error {code}: {description}")]
    Remote { code: String, description: String },

    /// The server answered with a message of the wrong type.
    #[error("unexpected response {actual} (expected {expected})")]
    UnexpectedResponse {
        expected: &'static str,
        actual: &'static str,
    },

    /// The pending request was dropped without a response.
    #[error("request abandoned before a response arrived")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, ClientError>;
