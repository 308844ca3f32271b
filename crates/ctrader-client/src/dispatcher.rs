use std::sync::Arc;

use ctrader_openapi::{catalog, envelope, payload_type, Payload};
use tracing::{debug, warn};

use crate::registry::CorrelationRegistry;

/// Sink for unsolicited messages. Runs on the transport's reader thread.
pub type EventHandler = Arc<dyn Fn(Payload) + Send + Sync>;

/// Routes every inbound frame to its waiting caller or to the event sink.
pub struct Dispatcher {
    registry: Arc<CorrelationRegistry>,
    events: EventHandler,
}

impl Dispatcher {
    pub fn new(registry: Arc<CorrelationRegistry>, events: EventHandler) -> Self {
        Self { registry, events }
    }

    /// Decode the envelope of `frame` and route it.
    ///
    /// Frames that cannot be decoded or routed are logged and dropped.
    pub fn dispatch(&self, frame: &[u8]) {
        let envelope = match envelope::decode(frame) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(error = %err, len = frame.len(), "dropping undecodable frame");
                return;
            }
        };
        let payload_type = envelope.payload_type;

        let Some(correlation_id) = envelope.correlation_id.clone() else {
            match catalog::decode(payload_type, &envelope.payload) {
                Ok(event) => {
                    debug!(payload_type, name = event.name(), "dispatching event");
                    (self.events)(event);
                }
                Err(err) => warn!(
                    error = %err,
                    payload_type,
                    name = payload_type::name(payload_type).unwrap_or("unknown"),
                    "dropping event"
                ),
            }
            return;
        };

        if self.registry.deliver(&correlation_id, envelope) {
            debug!(%correlation_id, payload_type, "delivered response");
        } else {
            warn!(
                %correlation_id,
                payload_type,
                "dropping response with no pending request"
            );
        }
    }
}
