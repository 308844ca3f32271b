//! Persistent-connection client for the cTrader Open API.
//!
//! One TLS connection is shared by every caller: requests are matched to
//! their responses by correlation id, unsolicited messages go to an event
//! handler, a heartbeat keeps the session open and a failed connection is
//! restarted in place.
//!
//! # Crate Structure
//!
//! - [`frame`]: length-prefixed framing over any byte stream
//! - [`transport`]: TCP/TLS transport with a background reader
//! - [`openapi`]: envelope codec, message types and the payload catalog
//! - [`client`]: the multiplexing client (behind the `client` feature)

/// Re-export frame types.
pub mod frame {
    pub use ctrader_frame::*;
}

/// Re-export transport types.
pub mod transport {
    pub use ctrader_transport::*;
}

/// Re-export protocol types.
pub mod openapi {
    pub use ctrader_openapi::*;
}

/// Re-export client types (requires `client` feature).
#[cfg(feature = "client")]
pub mod client {
    pub use ctrader_client::*;
}
