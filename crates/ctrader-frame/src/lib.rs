//! Length-prefixed message framing for the Open API TCP stream.
//!
//! Every message on the wire is framed with a 4-byte big-endian payload
//! length followed by exactly that many bytes of encoded envelope.
//!
//! No partial reads, no buffer management in user code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, FrameConfig, DEFAULT_MAX_PAYLOAD, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
