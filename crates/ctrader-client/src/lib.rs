//! Multiplexing, self-recovering cTrader Open API client.
//!
//! One [`Client`] owns one transport connection and shares it between any
//! number of caller threads:
//! - requests carry a fresh correlation id and block until the matching
//!   response arrives or their deadline passes
//! - frames without a correlation id are decoded and handed to the event
//!   handler
//! - a heartbeat keeps the connection alive
//! - a transport failure restarts the client in place, retrying until the
//!   connection and application authorization succeed again

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod keepalive;
pub mod recovery;
pub mod registry;

mod handshake;
mod sender;

#[cfg(test)]
mod testing;

pub use client::Client;
pub use config::{ClientConfig, Credentials, DEMO_ENDPOINT, LIVE_ENDPOINT};
pub use dispatcher::{Dispatcher, EventHandler};
pub use error::{ClientError, Result};
pub use keepalive::Keepalive;
pub use recovery::ConnectionState;
pub use registry::{CorrelationRegistry, PendingGuard};
