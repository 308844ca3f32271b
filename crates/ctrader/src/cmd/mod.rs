use std::time::Duration;

use clap::{Args, Subcommand};
use ctrader_client::{Client, ClientConfig, Credentials, EventHandler};
use ctrader_transport::{TcpTransport, TransportConfig};
use tracing::debug;

use crate::exit::{client_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod accounts;
pub mod ping;
pub mod version;
pub mod watch;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show version information.
    Version(VersionArgs),
    /// Connect, authorize and measure a version round trip.
    Ping(PingArgs),
    /// List the trading accounts an access token can reach.
    Accounts(AccountsArgs),
    /// Print unsolicited server events.
    Watch(WatchArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Version(args) => version::run(args, format),
        Command::Ping(args) => ping::run(args, format),
        Command::Accounts(args) => accounts::run(args, format),
        Command::Watch(args) => watch::run(args, format),
    }
}

/// Flags shared by every command that opens a connection.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Use the live endpoint instead of demo.
    #[arg(long)]
    pub live: bool,
    /// Override the endpoint (host:port).
    #[arg(long, value_name = "ADDR", env = "CTRADER_ENDPOINT")]
    pub endpoint: Option<String>,
    /// Connect without TLS. Only useful against local test servers.
    #[arg(long)]
    pub no_tls: bool,
    /// Application client id.
    #[arg(long, env = "CTRADER_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,
    /// Application client secret.
    #[arg(long, env = "CTRADER_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,
    /// Connect and request timeout (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
}

impl ConnectionArgs {
    pub fn timeout(&self) -> CliResult<Duration> {
        parse_duration(&self.timeout)
    }

    pub fn credentials(&self) -> CliResult<Credentials> {
        let client_id = non_empty(self.client_id.as_deref()).ok_or_else(|| {
            CliError::new(
                USAGE,
                "missing client id (use --client-id or CTRADER_CLIENT_ID)",
            )
        })?;
        let client_secret = non_empty(self.client_secret.as_deref()).ok_or_else(|| {
            CliError::new(
                USAGE,
                "missing client secret (use --client-secret or CTRADER_CLIENT_SECRET)",
            )
        })?;
        Ok(Credentials::new(client_id, client_secret))
    }

    pub fn client_config(&self) -> CliResult<ClientConfig> {
        let mut config = ClientConfig::new(self.live, self.credentials()?);
        config.endpoint = self.endpoint.clone();
        config.handshake_timeout = self.timeout()?;
        Ok(config)
    }

    /// Open an authorized connection. Events go to `events`.
    pub fn connect(&self, events: EventHandler) -> CliResult<Client<TcpTransport>> {
        let config = self.client_config()?;
        let transport = TcpTransport::with_config(TransportConfig {
            tls: !self.no_tls,
            connect_timeout: self.timeout()?,
            ..TransportConfig::default()
        });
        debug!(endpoint = config.endpoint(), tls = !self.no_tls, "connecting");

        let client = Client::new(config, transport, events);
        client
            .start()
            .map_err(|err| client_error("connect failed", err))?;
        Ok(client)
    }
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct AccountsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
    /// OAuth access token.
    #[arg(long, env = "CTRADER_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
    /// Exit after printing N events.
    #[arg(long)]
    pub count: Option<usize>,
    /// Authorize this trading account before watching. Authorization and
    /// --symbols are set up again after every reconnect.
    #[arg(long, value_name = "ID", requires = "access_token")]
    pub account_id: Option<i64>,
    /// OAuth access token for --account-id.
    #[arg(long, env = "CTRADER_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
    /// Subscribe to spot quotes for these symbol ids (comma-separated).
    #[arg(long, value_delimiter = ',', requires = "account_id")]
    pub symbols: Vec<i64>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;
    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    Ok(match unit {
        "ms" => Duration::from_millis(value),
        _ => Duration::from_secs(value),
    })
}
