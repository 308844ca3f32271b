//! Duplex frame transport for the Open API.
//!
//! Provides the [`Transport`] contract the client engine drives, and
//! [`TcpTransport`], the concrete implementation over TCP with optional TLS:
//! - `start` opens a connection and spawns one reader thread
//! - every inbound frame is handed to the installed frame handler
//! - a read failure the transport did not cause itself is reported once
//!   through the installed error handler
//!
//! This is the lowest layer of ctrader. Everything else builds on top of
//! the byte frames moved here.

pub mod error;
pub mod stream;
pub mod tcp;
pub mod traits;

pub use error::{Result, TransportError};
pub use stream::{ConnStream, ReadHalf, WriteHalf};
pub use tcp::{TcpTransport, TransportConfig};
pub use traits::{ErrorHandler, FrameHandler, Transport};
