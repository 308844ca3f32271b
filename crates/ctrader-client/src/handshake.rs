use std::time::Duration;

use bytes::Bytes;
use ctrader_openapi::messages::ProtoOaApplicationAuthReq;
use ctrader_openapi::{OpenApiMessage, Payload};
use ctrader_transport::Transport;
use prost::Message;
use tracing::debug;

use crate::config::Credentials;
use crate::error::{ClientError, Result};
use crate::registry::CorrelationRegistry;
use crate::sender;

/// Authorize the application on a freshly opened connection.
///
/// The server rejects every other request until this succeeds.
pub(crate) fn authorize_application<T: Transport>(
    transport: &T,
    registry: &CorrelationRegistry,
    credentials: &Credentials,
    timeout: Duration,
) -> Result<()> {
    if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
        return Err(ClientError::HandshakeFailed(
            "client id and secret are required".to_string(),
        ));
    }

    let request = ProtoOaApplicationAuthReq {
        payload_type: Some(ProtoOaApplicationAuthReq::PAYLOAD_TYPE as i32),
        client_id: credentials.client_id.clone(),
        client_secret: credentials.client_secret.clone(),
    };
    let response = sender::send(
        transport,
        registry,
        ProtoOaApplicationAuthReq::PAYLOAD_TYPE,
        Bytes::from(request.encode_to_vec()),
        true,
        timeout,
    )?;

    match response {
        Some(Payload::ApplicationAuthRes(_)) => {
            debug!(client_id = %credentials.client_id, "application authorized");
            Ok(())
        }
        Some(other) => match other.error() {
            Some(remote) => Err(ClientError::HandshakeFailed(format!(
                "{}: {}",
                remote.code,
                remote.description.unwrap_or_default()
            ))),
            None => Err(ClientError::HandshakeFailed(format!(
                "unexpected response {}",
                other.name()
            ))),
        },
        None => Err(ClientError::HandshakeFailed("no response".to_string())),
    }
}
