use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ctrader_client::{Client, ClientError, ConnectionState};
use ctrader_openapi::messages::{ProtoOaAccountAuthReq, ProtoOaSubscribeSpotsReq};
use ctrader_openapi::{OpenApiMessage, Payload};
use ctrader_transport::TcpTransport;
use tracing::{info, warn};

use crate::cmd::WatchArgs;
use crate::exit::{client_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::{print_event, OutputFormat};

const POLL: Duration = Duration::from_millis(200);

pub fn run(args: WatchArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = args.connection.timeout()?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let (tx, rx) = mpsc::channel::<Payload>();
    let tx = Mutex::new(tx);
    let client = args.connection.connect(Arc::new(move |event: Payload| {
        if let Ok(tx) = tx.lock() {
            let _ = tx.send(event);
        }
    }))?;

    let mut account = match (args.account_id, args.access_token) {
        (Some(account_id), Some(access_token)) => {
            let account = AccountSession {
                account_id,
                access_token,
                symbols: args.symbols,
                generation: client.generation(),
            };
            account.subscribe(&client, timeout)?;
            Some(account)
        }
        _ => None,
    };

    let mut printed = 0usize;
    while running.load(Ordering::SeqCst) {
        if args.count.is_some_and(|count| printed >= count) {
            break;
        }
        match rx.recv_timeout(POLL) {
            Ok(event) => {
                print_event(&event, format);
                printed = printed.saturating_add(1);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        if let Some(account) = account.as_mut() {
            account.resubscribe_if_replaced(&client, timeout);
        }
    }

    info!(printed, "watch finished");
    client
        .stop()
        .map_err(|err| client_error("disconnect failed", err))?;
    Ok(SUCCESS)
}

/// Account authorization and spot subscription, which live and die with
/// one connection.
struct AccountSession {
    account_id: i64,
    access_token: String,
    symbols: Vec<i64>,
    /// Connection generation the session was last set up on.
    generation: u64,
}

impl AccountSession {
    /// Set the session up again once recovery has brought a new connection to
    /// Running. Tried once per connection; a failure waits for the next one.
    fn resubscribe_if_replaced(&mut self, client: &Client<TcpTransport>, timeout: Duration) {
        let generation = client.generation();
        if generation == self.generation || client.state() != ConnectionState::Running {
            return;
        }
        self.generation = generation;
        match self.subscribe(client, timeout) {
            Ok(()) => info!(account_id = self.account_id, generation, "resubscribed after reconnect"),
            Err(err) => warn!(
                account_id = self.account_id,
                generation,
                error = %err,
                "resubscribe after reconnect failed"
            ),
        }
    }

    fn subscribe(&self, client: &Client<TcpTransport>, timeout: Duration) -> CliResult<()> {
        let auth = ProtoOaAccountAuthReq {
            payload_type: Some(ProtoOaAccountAuthReq::PAYLOAD_TYPE as i32),
            ctid_trader_account_id: self.account_id,
            access_token: self.access_token.clone(),
        };
        expect(client.request(&auth, timeout), "account authorization failed", |payload| {
            matches!(payload, Payload::AccountAuthRes(_))
        })?;

        if self.symbols.is_empty() {
            return Ok(());
        }
        let spots = ProtoOaSubscribeSpotsReq {
            payload_type: Some(ProtoOaSubscribeSpotsReq::PAYLOAD_TYPE as i32),
            ctid_trader_account_id: self.account_id,
            symbol_id: self.symbols.clone(),
            subscribe_to_spot_timestamp: Some(true),
        };
        expect(client.request(&spots, timeout), "spot subscription failed", |payload| {
            matches!(payload, Payload::SubscribeSpotsRes(_))
        })?;
        info!(
            account_id = self.account_id,
            symbols = self.symbols.len(),
            "subscribed to spots"
        );
        Ok(())
    }
}

fn expect(
    response: ctrader_client::Result<Payload>,
    context: &str,
    accept: impl Fn(&Payload) -> bool,
) -> CliResult<()> {
    let payload = response.map_err(|err| client_error(context, err))?;
    if accept(&payload) {
        return Ok(());
    }
    Err(client_error(
        context,
        ClientError::UnexpectedResponse {
            expected: "a matching response",
            actual: payload.name(),
        },
    ))
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| CliError::new(INTERNAL, format!("signal handler setup failed: {err}")))
}
