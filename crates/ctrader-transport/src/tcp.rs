use std::net::TcpStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ctrader_frame::{FrameConfig, FrameReader, FrameWriter, DEFAULT_MAX_PAYLOAD};
use tracing::{debug, info, warn};

use crate::error::{Result, TransportError};
use crate::stream::{shutdown_socket, ConnStream, ReadHalf, WriteHalf};
use crate::traits::{ErrorHandler, FrameHandler, Transport};

/// Connection settings for [`TcpTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Negotiate TLS after the TCP connect. The Open API endpoints require it.
    pub tls: bool,
    /// Bound on TCP connect and TLS handshake.
    pub connect_timeout: Duration,
    /// Maximum inbound and outbound frame payload.
    pub max_payload_size: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: true,
            connect_timeout: Duration::from_secs(5),
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

#[derive(Clone)]
struct Handlers {
    on_frame: FrameHandler,
    on_error: ErrorHandler,
}

struct Session {
    address: String,
    writer: Arc<Mutex<FrameWriter<WriteHalf>>>,
    control: TcpStream,
    closing: Arc<AtomicBool>,
    reader: JoinHandle<()>,
}

/// Length-prefixed frames over TCP, optionally wrapped in TLS.
///
/// Holds at most one live connection. `start` replaces it, `stop` tears it
/// down and joins the reader thread before returning.
pub struct TcpTransport {
    config: TransportConfig,
    handlers: Mutex<Option<Handlers>>,
    session: Mutex<Option<Session>>,
}

impl TcpTransport {
    /// Create a transport with default configuration (TLS on).
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with explicit configuration.
    pub fn with_config(config: TransportConfig) -> Self {
        Self {
            config,
            handlers: Mutex::new(None),
            session: Mutex::new(None),
        }
    }

    /// Whether a connection is currently open.
    pub fn is_connected(&self) -> bool {
        lock(&self.session).is_some()
    }

    /// Address of the open connection, if any.
    pub fn address(&self) -> Option<String> {
        lock(&self.session)
            .as_ref()
            .map(|session| session.address.clone())
    }

    /// Transport name for diagnostics.
    pub fn transport_name(&self) -> &'static str {
        if self.config.tls {
            "tcp+tls"
        } else {
            "tcp"
        }
    }

    fn frame_config(&self) -> FrameConfig {
        FrameConfig {
            max_payload_size: self.config.max_payload_size,
        }
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for TcpTransport {
    fn start(&self, address: &str) -> Result<()> {
        let handlers = lock(&self.handlers)
            .clone()
            .ok_or(TransportError::MissingHandler)?;

        let mut slot = lock(&self.session);
        if let Some(previous) = slot.take() {
            debug!(address = %previous.address, "replacing open connection");
            close_session(previous)?;
        }

        let stream = ConnStream::connect(address, self.config.tls, self.config.connect_timeout)?;
        let (read_half, write_half, control) = stream.split()?;
        let closing = Arc::new(AtomicBool::new(false));

        let reader = FrameReader::with_config(read_half, self.frame_config());
        let reader = {
            let closing = Arc::clone(&closing);
            thread::Builder::new()
                .name("ctrader-transport-reader".to_string())
                .spawn(move || read_loop(reader, handlers, closing))?
        };

        info!(%address, transport = self.transport_name(), "transport started");
        *slot = Some(Session {
            address: address.to_string(),
            writer: Arc::new(Mutex::new(FrameWriter::with_config(
                write_half,
                self.frame_config(),
            ))),
            control,
            closing,
            reader,
        });
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        let session = lock(&self.session).take();
        match session {
            Some(session) => {
                let address = session.address.clone();
                close_session(session)?;
                info!(%address, "transport stopped");
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn send(&self, frame: &[u8]) -> Result<()> {
        let writer = lock(&self.session)
            .as_ref()
            .map(|session| Arc::clone(&session.writer))
            .ok_or(TransportError::NotConnected)?;
        let mut writer = lock(&writer);
        writer.send(frame)?;
        Ok(())
    }

    fn set_handler(&self, on_frame: FrameHandler, on_error: ErrorHandler) {
        *lock(&self.handlers) = Some(Handlers { on_frame, on_error });
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            debug!(error = %err, "transport stop on drop failed");
        }
    }
}

fn read_loop(mut reader: FrameReader<ReadHalf>, handlers: Handlers, closing: Arc<AtomicBool>) {
    loop {
        match reader.read_frame() {
            Ok(frame) => (handlers.on_frame)(frame),
            Err(err) => {
                if closing.load(Ordering::SeqCst) {
                    debug!("transport reader exiting after stop");
                    return;
                }
                warn!(error = %err, "transport read failed");
                (handlers.on_error)(TransportError::Frame(err));
                return;
            }
        }
    }
}

fn close_session(session: Session) -> Result<()> {
    session.closing.store(true, Ordering::SeqCst);
    let shutdown = shutdown_socket(&session.control);
    release_reader(session.reader, &session.address, shutdown)
}

/// Join the reader once its socket is shut down.
///
/// A failed shutdown may leave the reader blocked in `read`, so it is
/// detached instead; the `closing` flag keeps it from reporting an error
/// when it eventually wakes.
fn release_reader(reader: JoinHandle<()>, address: &str, shutdown: Result<()>) -> Result<()> {
    if let Err(err) = &shutdown {
        warn!(%address, error = %err, "socket shutdown failed, detaching reader");
        return shutdown;
    }
    // A handler that stops the transport runs on the reader thread itself.
    if reader.thread().id() != thread::current().id() && reader.join().is_err() {
        warn!(%address, "transport reader panicked");
    }
    shutdown
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
