use std::fmt;
use std::io;

use ctrader_client::ClientError;
use ctrader_frame::FrameError;
use ctrader_openapi::OpenApiError;
use ctrader_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::UnexpectedEof => TRANSPORT_ERROR,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::PayloadTooLarge { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FrameError::ConnectionClosed => {
            CliError::new(TRANSPORT_ERROR, format!("{context}: {err}"))
        }
    }
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Connect { source, .. } | TransportError::Io(source) => {
            match io_error(context, source) {
                // Any connect failure is a transport problem, not an internal one.
                CliError { code: INTERNAL, message } => CliError::new(TRANSPORT_ERROR, message),
                mapped => mapped,
            }
        }
        TransportError::Frame(err) => frame_error(context, err),
        TransportError::InvalidAddress(_) => CliError::new(USAGE, format!("{context}: {err}")),
        TransportError::MissingHandler => CliError::new(INTERNAL, format!("{context}: {err}")),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn openapi_error(context: &str, err: OpenApiError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn client_error(context: &str, err: ClientError) -> CliError {
    match err {
        ClientError::Transport(err) => transport_error(context, err),
        ClientError::OpenApi(err) => openapi_error(context, err),
        ClientError::Timeout(_) => CliError::new(TIMEOUT, format!("{context}: {err}")),
        ClientError::Remote { .. }
        | ClientError::HandshakeFailed(_)
        | ClientError::Disconnected => CliError::new(FAILURE, format!("{context}: {err}")),
        ClientError::UnexpectedResponse { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        ClientError::NotRunning | ClientError::DuplicateId(_) => {
            CliError::new(INTERNAL, format!("{context}: {err}"))
        }
    }
}
