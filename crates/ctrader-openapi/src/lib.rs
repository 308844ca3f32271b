//! cTrader Open API protocol catalog.
//!
//! Every frame on the wire carries a [`ProtoMessage`] envelope: a payload
//! type tag, the encoded inner message, and an optional client message id
//! used to correlate responses with requests. This crate provides:
//! - the envelope codec ([`envelope`])
//! - payload type identifiers ([`payload_type`])
//! - request, response and event structs ([`messages`]) and the model
//!   types nested in them ([`model`])
//! - the static type catalog that turns a tag plus bytes into a typed
//!   [`Payload`] ([`catalog`])

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod model;
pub mod payload_type;

pub use catalog::{decode, resolve, Catalog, MessageShape, OpenApiMessage, Payload, RemoteError};
pub use envelope::Envelope;
pub use error::{OpenApiError, Result};
pub use messages::ProtoMessage;
