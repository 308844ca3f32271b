use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use bytes::Bytes;
use ctrader_openapi::{catalog, envelope, Payload};
use ctrader_transport::Transport;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::registry::{CorrelationRegistry, PendingGuard};

/// Send one frame and, when a response is expected, wait for it and decode
/// it through the catalog.
///
/// The pending entry is registered before the frame reaches the transport
/// and removed on every exit path.
pub(crate) fn send<T: Transport>(
    transport: &T,
    registry: &CorrelationRegistry,
    payload_type: u32,
    payload: Bytes,
    expect_response: bool,
    timeout: Duration,
) -> Result<Option<Payload>> {
    if !expect_response {
        let frame = envelope::encode(None, payload_type, payload)?;
        transport.send(&frame)?;
        trace!(payload_type, "sent frame without response");
        return Ok(None);
    }

    let correlation_id = Uuid::new_v4().to_string();
    let slot = registry.register(&correlation_id)?;
    let _guard = PendingGuard::new(registry, correlation_id.as_str());

    let frame = envelope::encode(Some(&correlation_id), payload_type, payload)?;
    transport.send(&frame)?;
    debug!(%correlation_id, payload_type, "sent request");

    match slot.recv_timeout(timeout) {
        Ok(response) => {
            let payload = catalog::decode(response.payload_type, &response.payload)?;
            debug!(%correlation_id, name = payload.name(), "received response");
            Ok(Some(payload))
        }
        Err(RecvTimeoutError::Timeout) => {
            debug!(%correlation_id, ?timeout, "request timed out");
            Err(ClientError::Timeout(timeout))
        }
        Err(RecvTimeoutError::Disconnected) => Err(ClientError::Disconnected),
    }
}
