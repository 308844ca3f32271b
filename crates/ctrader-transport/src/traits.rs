use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Result, TransportError};

/// Callback invoked from the transport's reader for every inbound frame.
pub type FrameHandler = Arc<dyn Fn(Bytes) + Send + Sync>;

/// Callback invoked from the transport's reader when the connection fails.
pub type ErrorHandler = Arc<dyn Fn(TransportError) + Send + Sync>;

/// A duplex byte-frame channel with a background reader.
///
/// Implementations are internally synchronized: every method takes `&self`
/// and may be called from any thread. Handlers are invoked from the
/// transport's own background activity, never from the caller of `send`.
pub trait Transport: Send + Sync + 'static {
    /// Open a connection to `address`, replacing any existing one.
    fn start(&self, address: &str) -> Result<()>;

    /// Close the connection and wait for the reader to exit.
    ///
    /// Stopping a transport that is not connected succeeds. A deliberate
    /// stop never triggers the error handler.
    fn stop(&self) -> Result<()>;

    /// Send one complete frame.
    fn send(&self, frame: &[u8]) -> Result<()>;

    /// Install the frame and error handlers used by subsequent `start` calls.
    fn set_handler(&self, on_frame: FrameHandler, on_error: ErrorHandler);
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn start(&self, address: &str) -> Result<()> {
        (**self).start(address)
    }

    fn stop(&self) -> Result<()> {
        (**self).stop()
    }

    fn send(&self, frame: &[u8]) -> Result<()> {
        (**self).send(frame)
    }

    fn set_handler(&self, on_frame: FrameHandler, on_error: ErrorHandler) {
        (**self).set_handler(on_frame, on_error)
    }
}
