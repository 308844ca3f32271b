/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection was closed before a complete frame was received.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,
}

impl FrameError {
    /// True when the error is a read/write timeout rather than a failure.
    ///
    /// Sockets with a read timeout surface `WouldBlock` or `TimedOut`
    /// depending on the platform; both leave the reader state intact.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            FrameError::Io(err)
                if err.kind() == std::io::ErrorKind::WouldBlock
                    || err.kind() == std::io::ErrorKind::TimedOut
        )
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
