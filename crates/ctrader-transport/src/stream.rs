use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use bytes::{Buf, BytesMut};
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore};
use tracing::debug;

use crate::error::{Result, TransportError};

const TLS_READ_CHUNK_SIZE: usize = 16 * 1024;

/// A connected byte stream: plain TCP or TLS over TCP.
///
/// A stream is split into a [`ReadHalf`] owned by the reader thread and a
/// [`WriteHalf`] shared by senders. For TLS the halves share one session
/// behind a mutex that is never held across a blocking socket read, so a
/// reader parked on the socket never delays a sender.
pub struct ConnStream {
    socket: TcpStream,
    inner: ConnStreamInner,
}

enum ConnStreamInner {
    Plain,
    Tls(Box<ClientConnection>),
}

impl ConnStream {
    /// Connect to `address` (`host:port`), negotiating TLS when `tls` is set.
    ///
    /// The TLS handshake completes before this returns, bounded by
    /// `connect_timeout`.
    pub fn connect(address: &str, tls: bool, connect_timeout: Duration) -> Result<Self> {
        let (host, port) = split_address(address)?;
        let socket = connect_tcp(address, host, port, connect_timeout)?;
        socket.set_nodelay(true)?;

        if !tls {
            debug!(%address, "connected (plain tcp)");
            return Ok(Self {
                socket,
                inner: ConnStreamInner::Plain,
            });
        }

        let server_name = ServerName::try_from(host.to_string())
            .map_err(|_| TransportError::InvalidAddress(address.to_string()))?;
        let mut conn = ClientConnection::new(tls_client_config()?, server_name)?;

        socket.set_read_timeout(Some(connect_timeout))?;
        socket.set_write_timeout(Some(connect_timeout))?;
        let mut handshake_io = &socket;
        while conn.is_handshaking() {
            conn.complete_io(&mut handshake_io)?;
        }
        socket.set_read_timeout(None)?;
        socket.set_write_timeout(None)?;

        debug!(
            %address,
            protocol = ?conn.protocol_version(),
            "connected (tls)"
        );
        Ok(Self {
            socket,
            inner: ConnStreamInner::Tls(Box::new(conn)),
        })
    }

    /// Whether the stream is encrypted.
    pub fn is_tls(&self) -> bool {
        matches!(self.inner, ConnStreamInner::Tls(_))
    }

    /// Split into independently usable read and write halves.
    ///
    /// The returned `TcpStream` handle is only meant for
    /// [`shutdown_socket`] to unblock the reader.
    pub fn split(self) -> Result<(ReadHalf, WriteHalf, TcpStream)> {
        let control = self.socket.try_clone()?;
        let write_socket = self.socket.try_clone()?;
        match self.inner {
            ConnStreamInner::Plain => Ok((
                ReadHalf::Plain(self.socket),
                WriteHalf::Plain(write_socket),
                control,
            )),
            ConnStreamInner::Tls(conn) => {
                let session = Arc::new(Mutex::new(*conn));
                Ok((
                    ReadHalf::Tls(TlsReader {
                        socket: self.socket,
                        session: Arc::clone(&session),
                        plaintext: BytesMut::new(),
                        closed: false,
                    }),
                    WriteHalf::Tls(TlsWriter {
                        socket: write_socket,
                        session,
                    }),
                    control,
                ))
            }
        }
    }
}

impl std::fmt::Debug for ConnStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_tls() { "tls" } else { "tcp" };
        f.debug_struct("ConnStream")
            .field("type", &kind)
            .field("peer", &self.socket.peer_addr().ok())
            .finish()
    }
}

/// Shut down both directions of a socket, unblocking any pending read.
///
/// A socket that is already disconnected is not an error.
pub fn shutdown_socket(socket: &TcpStream) -> Result<()> {
    match socket.shutdown(Shutdown::Both) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotConnected => Ok(()),
        Err(err) => Err(TransportError::Io(err)),
    }
}

/// The receiving side of a [`ConnStream`].
pub enum ReadHalf {
    Plain(TcpStream),
    Tls(TlsReader),
}

impl Read for ReadHalf {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            ReadHalf::Plain(stream) => stream.read(buf),
            ReadHalf::Tls(reader) => reader.read(buf),
        }
    }
}

/// The sending side of a [`ConnStream`].
pub enum WriteHalf {
    Plain(TcpStream),
    Tls(TlsWriter),
}

impl Write for WriteHalf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteHalf::Plain(stream) => stream.write(buf),
            WriteHalf::Tls(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteHalf::Plain(stream) => stream.flush(),
            WriteHalf::Tls(writer) => writer.flush(),
        }
    }
}

/// Reads ciphertext from the socket and yields decrypted plaintext.
pub struct TlsReader {
    socket: TcpStream,
    session: Arc<Mutex<ClientConnection>>,
    plaintext: BytesMut,
    closed: bool,
}

impl TlsReader {
    /// Move all decrypted bytes out of the session into the local buffer.
    fn drain_plaintext(&mut self, conn: &mut ClientConnection) -> std::io::Result<()> {
        let mut chunk = [0u8; TLS_READ_CHUNK_SIZE];
        loop {
            match conn.reader().read(&mut chunk) {
                Ok(0) => {
                    self.closed = true;
                    return Ok(());
                }
                Ok(n) => self.plaintext.extend_from_slice(&chunk[..n]),
                Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(()),
                Err(err) => return Err(err),
            }
        }
    }
}

impl Read for TlsReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        loop {
            if !self.plaintext.is_empty() {
                let n = buf.len().min(self.plaintext.len());
                buf[..n].copy_from_slice(&self.plaintext[..n]);
                self.plaintext.advance(n);
                return Ok(n);
            }
            if self.closed {
                return Ok(0);
            }

            let session = Arc::clone(&self.session);
            {
                let mut conn = lock_session(&session)?;
                self.drain_plaintext(&mut conn)?;
            }
            if !self.plaintext.is_empty() || self.closed {
                continue;
            }

            let mut ciphertext = vec![0u8; TLS_READ_CHUNK_SIZE];
            let read = (&self.socket).read(&mut ciphertext)?;
            if read == 0 {
                return Ok(0);
            }

            let mut conn = lock_session(&session)?;
            let mut pending = &ciphertext[..read];
            while !pending.is_empty() {
                conn.read_tls(&mut pending)?;
                conn.process_new_packets()
                    .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
                self.drain_plaintext(&mut conn)?;
            }
            while conn.wants_write() {
                conn.write_tls(&mut &self.socket)?;
            }
        }
    }
}

/// Encrypts plaintext and writes the resulting records to the socket.
pub struct TlsWriter {
    socket: TcpStream,
    session: Arc<Mutex<ClientConnection>>,
}

impl Write for TlsWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut conn = lock_session(&self.session)?;
        let written = conn.writer().write(buf)?;
        while conn.wants_write() {
            conn.write_tls(&mut &self.socket)?;
        }
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut conn = lock_session(&self.session)?;
        while conn.wants_write() {
            conn.write_tls(&mut &self.socket)?;
        }
        (&self.socket).flush()
    }
}

fn lock_session(
    session: &Mutex<ClientConnection>,
) -> std::io::Result<MutexGuard<'_, ClientConnection>> {
    session
        .lock()
        .map_err(|_| std::io::Error::other("tls session lock poisoned"))
}

fn tls_client_config() -> Result<Arc<ClientConfig>> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()?
    .with_root_certificates(roots)
    .with_no_client_auth();
    Ok(Arc::new(config))
}

fn split_address(address: &str) -> Result<(&str, u16)> {
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| TransportError::InvalidAddress(address.to_string()))?;
    if host.is_empty() {
        return Err(TransportError::InvalidAddress(address.to_string()));
    }
    let port = port
        .parse::<u16>()
        .map_err(|_| TransportError::InvalidAddress(address.to_string()))?;
    Ok((host, port))
}

fn connect_tcp(address: &str, host: &str, port: u16, timeout: Duration) -> Result<TcpStream> {
    let candidates = (host, port)
        .to_socket_addrs()
        .map_err(|source| TransportError::Connect {
            address: address.to_string(),
            source,
        })?;

    let mut last_err = None;
    for candidate in candidates {
        match TcpStream::connect_timeout(&candidate, timeout) {
            Ok(stream) => return Ok(stream),
            Err(err) => {
                debug!(%candidate, error = %err, "connect attempt failed");
                last_err = Some(err);
            }
        }
    }

    Err(TransportError::Connect {
        address: address.to_string(),
        source: last_err.unwrap_or_else(|| {
            std::io::Error::new(ErrorKind::NotFound, "address resolved to no candidates")
        }),
    })
}
