//! In-memory transport for exercising the client without a network.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use bytes::Bytes;
use ctrader_openapi::messages::{ProtoOaApplicationAuthRes, ProtoOaVersionRes};
use ctrader_openapi::{envelope, payload_type, Envelope, OpenApiMessage};
use ctrader_transport::{ErrorHandler, FrameHandler, Result, Transport, TransportError};

/// Builds reply frames for one outbound envelope.
pub type Responder = Arc<dyn Fn(&Envelope) -> Vec<Bytes> + Send + Sync>;

#[derive(Default)]
struct State {
    handlers: Mutex<Option<(FrameHandler, ErrorHandler)>>,
    connected: AtomicBool,
    sent: Mutex<Vec<Envelope>>,
    sent_changed: Condvar,
    starts: AtomicUsize,
    stops: AtomicUsize,
    failing_starts: AtomicUsize,
    failing_stops: AtomicUsize,
    addresses: Mutex<Vec<String>>,
    responder: Mutex<Option<Responder>>,
}

/// Loopback transport. Clones share state, so a test can keep a handle
/// while the client owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<State>,
}

impl MockTransport {
    /// A transport that answers application auth and version requests.
    pub fn answering() -> Self {
        let transport = Self::default();
        transport.respond_with(Arc::new(standard_replies));
        transport
    }

    pub fn respond_with(&self, responder: Responder) {
        *self.state.responder.lock().unwrap() = Some(responder);
    }

    /// Make the next `n` calls to `start` fail.
    pub fn fail_next_starts(&self, n: usize) {
        self.state.failing_starts.store(n, Ordering::SeqCst);
    }

    /// Make the next `n` calls to `stop` fail, leaving the connection open.
    pub fn fail_next_stops(&self, n: usize) {
        self.state.failing_stops.store(n, Ordering::SeqCst);
    }

    pub fn starts(&self) -> usize {
        self.state.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.state.stops.load(Ordering::SeqCst)
    }

    pub fn is_connected(&self) -> bool {
        self.state.connected.load(Ordering::SeqCst)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.state.addresses.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Envelope> {
        self.state.sent.lock().unwrap().clone()
    }

    pub fn sent_of_type(&self, payload_type: u32) -> Vec<Envelope> {
        self.sent()
            .into_iter()
            .filter(|envelope| envelope.payload_type == payload_type)
            .collect()
    }

    /// Wait until `count` envelopes of `payload_type` have been sent.
    pub fn wait_for_sent(&self, payload_type: u32, count: usize, timeout: Duration) -> Vec<Envelope> {
        let deadline = Instant::now() + timeout;
        let mut sent = self.state.sent.lock().unwrap();
        loop {
            let matching: Vec<Envelope> = sent
                .iter()
                .filter(|envelope| envelope.payload_type == payload_type)
                .cloned()
                .collect();
            if matching.len() >= count {
                return matching;
            }
            let now = Instant::now();
            assert!(
                now < deadline,
                "timed out waiting for {count} frames of type {payload_type}"
            );
            sent = self
                .state
                .sent_changed
                .wait_timeout(sent, deadline - now)
                .unwrap()
                .0;
        }
    }

    /// Deliver an inbound frame as the reader thread would.
    pub fn inject(&self, frame: Bytes) {
        let handlers = self.state.handlers.lock().unwrap().clone();
        if let Some((on_frame, _)) = handlers {
            on_frame(frame);
        }
    }

    /// Report a connection failure from a background thread.
    pub fn fail(&self) {
        let handlers = self.state.handlers.lock().unwrap().clone();
        if let Some((_, on_error)) = handlers {
            thread::spawn(move || {
                on_error(TransportError::Io(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                )))
            })
            .join()
            .unwrap();
        }
    }
}

impl Transport for MockTransport {
    fn start(&self, address: &str) -> Result<()> {
        self.state.addresses.lock().unwrap().push(address.to_string());
        let failing = self.state.failing_starts.load(Ordering::SeqCst);
        if failing > 0 {
            self.state.failing_starts.store(failing - 1, Ordering::SeqCst);
            return Err(TransportError::Connect {
                address: address.to_string(),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
            });
        }
        if self.state.handlers.lock().unwrap().is_none() {
            return Err(TransportError::MissingHandler);
        }
        self.state.starts.fetch_add(1, Ordering::SeqCst);
        self.state.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        let failing = self.state.failing_stops.load(Ordering::SeqCst);
        if failing > 0 {
            self.state.failing_stops.store(failing - 1, Ordering::SeqCst);
            return Err(TransportError::Io(io::Error::other("socket shutdown failed")));
        }
        if self.state.connected.swap(false, Ordering::SeqCst) {
            self.state.stops.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn send(&self, frame: &[u8]) -> Result<()> {
        if !self.is_connected() {
            return Err(TransportError::NotConnected);
        }
        let sent = envelope::decode(frame).expect("client sent a malformed envelope");
        let replies = self
            .state
            .responder
            .lock()
            .unwrap()
            .as_ref()
            .map(|responder| responder(&sent))
            .unwrap_or_default();
        {
            let mut log = self.state.sent.lock().unwrap();
            log.push(sent);
            self.state.sent_changed.notify_all();
        }
        for reply in replies {
            self.inject(reply);
        }
        Ok(())
    }

    fn set_handler(&self, on_frame: FrameHandler, on_error: ErrorHandler) {
        *self.state.handlers.lock().unwrap() = Some((on_frame, on_error));
    }
}

/// Replies for application auth and version requests.
pub fn standard_replies(request: &Envelope) -> Vec<Bytes> {
    let id = request.correlation_id.as_deref();
    match request.payload_type {
        payload_type::PROTO_OA_APPLICATION_AUTH_REQ => {
            vec![reply(id, &ProtoOaApplicationAuthRes::default())]
        }
        payload_type::PROTO_OA_VERSION_REQ => vec![reply(
            id,
            &ProtoOaVersionRes {
                payload_type: None,
                version: "100".to_string(),
            },
        )],
        _ => Vec::new(),
    }
}

/// Encode `message` as a frame answering `correlation_id`.
pub fn reply<M: OpenApiMessage>(correlation_id: Option<&str>, message: &M) -> Bytes {
    envelope::encode_message(correlation_id, message).expect("test message should encode")
}
