//! Envelope codec.
//!
//! Wraps an encoded inner message with its payload type and an optional
//! client message id. The codec never looks inside the payload.

use bytes::{Bytes, BytesMut};
use prost::Message;

use crate::catalog::OpenApiMessage;
use crate::error::{OpenApiError, Result};
use crate::messages::ProtoMessage;

/// A decoded envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Present on request/response pairs, absent on events and heartbeats.
    pub correlation_id: Option<String>,
    pub payload_type: u32,
    pub payload: Bytes,
}

impl Envelope {
    /// Whether this frame is an unsolicited event.
    pub fn is_event(&self) -> bool {
        self.correlation_id.is_none()
    }
}

/// Encode an envelope around an already-encoded payload.
pub fn encode(correlation_id: Option<&str>, payload_type: u32, payload: Bytes) -> Result<Bytes> {
    let envelope = ProtoMessage {
        payload_type,
        payload: Some(payload),
        client_msg_id: correlation_id.map(str::to_owned),
    };
    encode_exact(&envelope, "envelope")
}

/// Encode `message` and wrap it in an envelope tagged with its payload type.
pub fn encode_message<M: OpenApiMessage>(
    correlation_id: Option<&str>,
    message: &M,
) -> Result<Bytes> {
    let payload = encode_exact(message, M::NAME)?;
    encode(correlation_id, M::PAYLOAD_TYPE, payload)
}

/// Decode an envelope from one frame.
pub fn decode(frame: &[u8]) -> Result<Envelope> {
    let envelope = ProtoMessage::decode(frame).map_err(|source| OpenApiError::Decode {
        what: "envelope",
        source,
    })?;
    Ok(Envelope {
        correlation_id: envelope.client_msg_id,
        payload_type: envelope.payload_type,
        payload: envelope.payload.unwrap_or_default(),
    })
}

fn encode_exact<M: Message>(message: &M, what: &'static str) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(message.encoded_len());
    message
        .encode(&mut buf)
        .map_err(|source| OpenApiError::Encode { what, source })?;
    Ok(buf.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{ProtoHeartbeatEvent, ProtoOaVersionRes};
    use crate::payload_type;

    #[test]
    fn preserves_id_tag_and_payload() {
        let frame = encode(Some("abc-123"), 2105, Bytes::from_static(b"\x12\x031.0")).unwrap();
        let envelope = decode(&frame).unwrap();
        assert_eq!(envelope.correlation_id.as_deref(), Some("abc-123"));
        assert_eq!(envelope.payload_type, 2105);
        assert_eq!(envelope.payload.as_ref(), b"\x12\x031.0");
        assert!(!envelope.is_event());
    }

    #[test]
    fn omits_absent_correlation_id() {
        let frame = encode_message(None, &ProtoHeartbeatEvent::default()).unwrap();
        let envelope = decode(&frame).unwrap();
        assert!(envelope.is_event());
        assert_eq!(envelope.payload_type, payload_type::HEARTBEAT_EVENT);
        assert!(envelope.payload.is_empty());
    }

    #[test]
    fn wire_layout_matches_proto_message() {
        // payload_type=51 (field 1 varint), payload="" (field 2), no id
        let frame = encode(None, 51, Bytes::new()).unwrap();
        assert_eq!(frame.as_ref(), &[0x08, 0x33, 0x12, 0x00]);
    }

    #[test]
    fn message_payload_decodes_back() {
        let res = ProtoOaVersionRes {
            payload_type: None,
            version: "98".to_string(),
        };
        let frame = encode_message(Some("id"), &res).unwrap();
        let envelope = decode(&frame).unwrap();
        let decoded = ProtoOaVersionRes::decode(envelope.payload).unwrap();
        assert_eq!(decoded.version, "98");
    }

    #[test]
    fn rejects_malformed_frame() {
        // field 2 length-delimited, declares 10 bytes, provides 1
        let err = decode(&[0x08, 0x33, 0x12, 0x0a, 0x01]).unwrap_err();
        assert!(matches!(err, OpenApiError::Decode { what: "envelope", .. }));
    }
}
