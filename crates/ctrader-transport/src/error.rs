/// Errors that can occur in transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to connect to the specified address.
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        source: std::io::Error,
    },

    /// The address is not a usable `host:port` pair.
    #[error("invalid address '{0}': expected host:port")]
    InvalidAddress(String),

    /// TLS session setup or record processing failed.
    #[error("tls error: {0}")]
    Tls(#[from] rustls::Error),

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame-level error while reading or writing.
    #[error("frame error: {0}")]
    Frame(#[from] ctrader_frame::FrameError),

    /// `start` was called before handlers were installed.
    #[error("transport handlers not installed")]
    MissingHandler,

    /// The transport has no open connection.
    #[error("transport not connected")]
    NotConnected,
}

pub type Result<T> = std::result::Result<T, TransportError>;
