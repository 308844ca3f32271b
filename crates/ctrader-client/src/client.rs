use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::time::Duration;

use bytes::Bytes;
use ctrader_openapi::messages::ProtoHeartbeatEvent;
use ctrader_openapi::{OpenApiMessage, Payload};
use ctrader_transport::{Transport, TransportError};
use prost::Message;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::dispatcher::{Dispatcher, EventHandler};
use crate::error::{ClientError, Result};
use crate::handshake;
use crate::keepalive::Keepalive;
use crate::recovery::{ConnectionState, Lifecycle, Recovery};
use crate::registry::CorrelationRegistry;
use crate::sender;

/// A persistent Open API connection shared by many concurrent callers.
///
/// Requests and events are multiplexed over one transport. Responses are
/// matched to callers by correlation id, unsolicited messages go to the
/// event handler, and a transport failure triggers an automatic stop/start
/// cycle until the connection is healthy again.
pub struct Client<T: Transport> {
    inner: Arc<Inner<T>>,
}

struct Inner<T: Transport> {
    config: ClientConfig,
    transport: T,
    events: EventHandler,
    registry: RwLock<Arc<CorrelationRegistry>>,
    running: AtomicBool,
    user_stopped: AtomicBool,
    generation: AtomicU64,
    state: Mutex<ConnectionState>,
    lifecycle: Mutex<()>,
    keepalive: Mutex<Option<Keepalive>>,
    recovery: Recovery,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, transport: T, events: EventHandler) -> Self {
        let recovery = Recovery::new(config.reconnect_backoff);
        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                events,
                registry: RwLock::new(Arc::new(CorrelationRegistry::new())),
                running: AtomicBool::new(false),
                user_stopped: AtomicBool::new(true),
                generation: AtomicU64::new(0),
                state: Mutex::new(ConnectionState::Stopped),
                lifecycle: Mutex::new(()),
                keepalive: Mutex::new(None),
                recovery,
            }),
        }
    }

    /// Connect, authorize the application and start the heartbeat.
    ///
    /// Starting a running client is a no-op.
    pub fn start(&self) -> Result<()> {
        self.inner.user_stopped.store(false, Ordering::SeqCst);
        self.inner
            .recovery
            .ensure_worker(Arc::downgrade(&self.inner))?;
        let _lifecycle = lock(&self.inner.lifecycle);
        self.inner.start_locked()
    }

    /// Stop the heartbeat and close the transport.
    ///
    /// Callers still waiting on a response are released by their own
    /// deadlines.
    pub fn stop(&self) -> Result<()> {
        self.inner.user_stopped.store(true, Ordering::SeqCst);
        let _lifecycle = lock(&self.inner.lifecycle);
        self.inner.stop_locked()
    }

    /// Send an already-encoded payload.
    ///
    /// With `expect_response` the call blocks until the matching response
    /// arrives or `timeout` elapses. Without it the call returns as soon as
    /// the frame is handed to the transport.
    pub fn send_raw(
        &self,
        payload_type: u32,
        payload: Bytes,
        expect_response: bool,
        timeout: Duration,
    ) -> Result<Option<Payload>> {
        self.inner
            .send_raw(payload_type, payload, expect_response, timeout)
    }

    /// Send a typed message. See [`Client::send_raw`].
    pub fn call<M: OpenApiMessage>(
        &self,
        message: &M,
        expect_response: bool,
        timeout: Duration,
    ) -> Result<Option<Payload>> {
        self.send_raw(
            M::PAYLOAD_TYPE,
            Bytes::from(message.encode_to_vec()),
            expect_response,
            timeout,
        )
    }

    /// Send a typed request and wait for its response.
    ///
    /// Error responses from the server become [`ClientError::Remote`].
    pub fn request<M: OpenApiMessage>(&self, message: &M, timeout: Duration) -> Result<Payload> {
        let payload = self
            .call(message, true, timeout)?
            .ok_or(ClientError::Disconnected)?;
        match payload.error() {
            Some(remote) => Err(ClientError::Remote {
                code: remote.code,
                description: remote.description.unwrap_or_default(),
            }),
            None => Ok(payload),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.state()
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Connection attempt counter. A new value means the connection was
    /// replaced and any per-connection state (account authorization,
    /// subscriptions) is gone.
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    /// Requests on the current connection still awaiting a response.
    pub fn pending_requests(&self) -> usize {
        read(&self.inner.registry).len()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }
}

impl<T: Transport> Drop for Client<T> {
    fn drop(&mut self) {
        self.inner.user_stopped.store(true, Ordering::SeqCst);
        {
            let _lifecycle = lock(&self.inner.lifecycle);
            if let Err(err) = self.inner.stop_locked() {
                debug!(error = %err, "client stop on drop failed");
            }
        }
        self.inner.recovery.shutdown();
    }
}

impl<T: Transport> Inner<T> {
    fn start_locked(self: &Arc<Self>) -> Result<()> {
        if self.running.load(Ordering::SeqCst) {
            debug!("client already running");
            return Ok(());
        }
        self.set_state(ConnectionState::Starting);

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let registry = Arc::new(CorrelationRegistry::new());
        *write(&self.registry) = Arc::clone(&registry);

        let dispatcher = Dispatcher::new(Arc::clone(&registry), Arc::clone(&self.events));
        let weak = Arc::downgrade(self);
        self.transport.set_handler(
            Arc::new(move |frame: Bytes| dispatcher.dispatch(&frame)),
            Arc::new(move |err: TransportError| {
                if let Some(inner) = weak.upgrade() {
                    inner.report_error(generation, err);
                }
            }),
        );
        self.recovery.rearm();

        let endpoint = self.config.endpoint();
        if let Err(err) = self.transport.start(endpoint) {
            self.set_state(ConnectionState::Stopped);
            return Err(err.into());
        }

        let setup = handshake::authorize_application(
            &self.transport,
            &registry,
            &self.config.credentials,
            self.config.handshake_timeout,
        )
        .and_then(|()| {
            self.running.store(true, Ordering::SeqCst);
            Keepalive::spawn(self.config.keepalive_interval, self.heartbeat())
        });
        let keepalive = match setup {
            Ok(keepalive) => keepalive,
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                if let Err(stop_err) = self.transport.stop() {
                    warn!(error = %stop_err, "failed to close transport after start failure");
                }
                self.set_state(ConnectionState::Stopped);
                return Err(err);
            }
        };
        *lock(&self.keepalive) = Some(keepalive);

        self.set_state(ConnectionState::Running);
        info!(endpoint, generation, "client started");
        Ok(())
    }

    fn stop_locked(&self) -> Result<()> {
        let previous = self.state();
        self.set_state(ConnectionState::Stopping);
        self.running.store(false, Ordering::SeqCst);

        let keepalive = lock(&self.keepalive).take();
        if let Some(keepalive) = keepalive {
            keepalive.stop();
        }
        let result = self.transport.stop();
        self.set_state(ConnectionState::Stopped);

        if previous != ConnectionState::Stopped {
            info!(pending = self.pending_requests(), "client stopped");
        }
        result.map_err(Into::into)
    }

    fn send_raw(
        &self,
        payload_type: u32,
        payload: Bytes,
        expect_response: bool,
        timeout: Duration,
    ) -> Result<Option<Payload>> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(ClientError::NotRunning);
        }
        let registry = Arc::clone(&read(&self.registry));
        sender::send(
            &self.transport,
            &registry,
            payload_type,
            payload,
            expect_response,
            timeout,
        )
    }

    /// Heartbeat sender for the keepalive worker. Ends once the client is gone.
    fn heartbeat(self: &Arc<Self>) -> impl FnMut() -> bool + Send + 'static {
        let weak = Arc::downgrade(self);
        let frame = Bytes::from(ProtoHeartbeatEvent::default().encode_to_vec());
        let timeout = self.config.keepalive_interval;
        move || {
            let Some(inner) = weak.upgrade() else {
                return false;
            };
            if let Err(err) = inner.send_raw(
                ProtoHeartbeatEvent::PAYLOAD_TYPE,
                frame.clone(),
                false,
                timeout,
            ) {
                warn!(error = %err, "failed to send heartbeat");
            }
            true
        }
    }

    fn report_error(&self, generation: u64, err: TransportError) {
        if self.user_stopped.load(Ordering::SeqCst) {
            debug!(error = %err, "ignoring transport error on stopped client");
            return;
        }
        if generation != self.generation.load(Ordering::SeqCst) {
            debug!(error = %err, generation, "ignoring error from replaced connection");
            return;
        }
        if self.recovery.report(generation, err) {
            debug!(generation, "recovery queued");
        }
    }

    fn pending_requests(&self) -> usize {
        read(&self.registry).len()
    }

    fn state(&self) -> ConnectionState {
        *lock(&self.state)
    }
}

impl<T: Transport> Lifecycle for Inner<T> {
    fn restart(self: &Arc<Self>) -> Result<()> {
        let _lifecycle = lock(&self.lifecycle);
        if self.user_stopped.load(Ordering::SeqCst) {
            return Ok(());
        }
        self.stop_locked()?;
        self.start_locked()
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_user_stopped(&self) -> bool {
        self.user_stopped.load(Ordering::SeqCst)
    }

    fn set_state(&self, state: ConnectionState) {
        let mut current = lock(&self.state);
        if *current != state {
            debug!(from = %*current, to = %state, "client state");
            *current = state;
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn read<T: Clone>(lock: &RwLock<T>) -> T {
    lock.read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
