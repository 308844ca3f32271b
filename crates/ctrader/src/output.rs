use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ctrader_openapi::messages::ProtoOaCtidTraderAccount;
use ctrader_openapi::Payload;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct VersionOutput {
    pub name: &'static str,
    pub version: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub target_os: &'static str,
    pub target_arch: &'static str,
    pub live_endpoint: &'static str,
    pub demo_endpoint: &'static str,
}

#[derive(Serialize)]
pub struct PingOutput {
    pub endpoint: String,
    pub server_version: String,
    pub latency_ms: f64,
}

#[derive(Serialize)]
pub struct AccountOutput {
    pub account_id: u64,
    pub live: Option<bool>,
    pub login: Option<i64>,
    pub broker: Option<String>,
}

impl From<&ProtoOaCtidTraderAccount> for AccountOutput {
    fn from(account: &ProtoOaCtidTraderAccount) -> Self {
        Self {
            account_id: account.ctid_trader_account_id,
            live: account.is_live,
            login: account.trader_login,
            broker: account.broker_title_short.clone(),
        }
    }
}

#[derive(Serialize)]
struct EventOutput<'a> {
    payload_type: u32,
    name: &'static str,
    summary: &'a str,
    timestamp: String,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_version(out: &VersionOutput, extended: bool, format: OutputFormat) {
    match (format, extended) {
        (OutputFormat::Json, _) => print_json(out),
        (_, false) => println!("{} {}", out.name, out.version),
        (OutputFormat::Table, true) => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in version_fields(out) {
                table.add_row(vec![field, value]);
            }
            println!("{table}");
        }
        (OutputFormat::Pretty, true) => {
            for (field, value) in version_fields(out) {
                println!("{field}: {value}");
            }
        }
    }
}

fn version_fields(out: &VersionOutput) -> [(&'static str, &'static str); 8] {
    [
        ("name", out.name),
        ("version", out.version),
        ("target", out.target),
        ("profile", out.profile),
        ("target_os", out.target_os),
        ("target_arch", out.target_arch),
        ("live_endpoint", out.live_endpoint),
        ("demo_endpoint", out.demo_endpoint),
    ]
}

pub fn print_ping(out: &PingOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ENDPOINT", "SERVER VERSION", "LATENCY"])
                .add_row(vec![
                    out.endpoint.clone(),
                    out.server_version.clone(),
                    format!("{:.2}ms", out.latency_ms),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("Endpoint:       {}", out.endpoint);
            println!("Server version: {}", out.server_version);
            println!("Latency:        {:.2}ms", out.latency_ms);
        }
    }
}

pub fn print_accounts(accounts: &[AccountOutput], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(accounts),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ACCOUNT", "LIVE", "LOGIN", "BROKER"]);
            for account in accounts {
                table.add_row(vec![
                    account.account_id.to_string(),
                    optional(account.live),
                    optional(account.login),
                    account.broker.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if accounts.is_empty() {
                println!("no accounts");
            }
            for account in accounts {
                println!(
                    "account={} live={} login={} broker={}",
                    account.account_id,
                    optional(account.live),
                    optional(account.login),
                    account.broker.as_deref().unwrap_or("-")
                );
            }
        }
    }
}

/// Print one event. Table output degrades to one row per event since events
/// stream in.
pub fn print_event(event: &Payload, format: OutputFormat) {
    let summary = event_summary(event);
    match format {
        OutputFormat::Json => print_json(&EventOutput {
            payload_type: event.payload_type(),
            name: event.name(),
            summary: &summary,
            timestamp: now_unix_millis(),
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .add_row(vec![
                    now_unix_millis(),
                    event.name().to_string(),
                    summary,
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} {} {}", now_unix_millis(), event.name(), summary);
        }
    }
}

fn event_summary(event: &Payload) -> String {
    match event {
        Payload::Heartbeat(_) => String::new(),
        Payload::Spot(spot) => format!(
            "account={} symbol={} bid={} ask={}",
            spot.ctid_trader_account_id,
            spot.symbol_id,
            optional(spot.bid),
            optional(spot.ask)
        ),
        Payload::ClientDisconnect(event) => format!(
            "reason={}",
            event.reason.as_deref().unwrap_or("unspecified")
        ),
        Payload::AccountDisconnect(event) => {
            format!("account={}", event.ctid_trader_account_id)
        }
        Payload::Execution(event) => format!(
            "account={} type={} order={} position={}",
            event.ctid_trader_account_id,
            event.execution_type,
            optional(event.order.as_ref().map(|order| order.order_id)),
            optional(event.position.as_ref().map(|position| position.position_id))
        ),
        Payload::OrderError(event) => format!(
            "account={} code={} order={}",
            event.ctid_trader_account_id,
            event.error_code,
            optional(event.order_id)
        ),
        other => format!("{other:?}"),
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

fn now_unix_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use ctrader_openapi::messages::{
        ProtoHeartbeatEvent, ProtoOaExecutionEvent, ProtoOaOrder, ProtoOaOrderErrorEvent,
        ProtoOaSpotEvent,
    };

    use super::*;

    #[test]
    fn spot_summary_shows_prices() {
        let event = Payload::from(ProtoOaSpotEvent {
            ctid_trader_account_id: 42,
            symbol_id: 1,
            bid: Some(108_250),
            ask: None,
            ..Default::default()
        });
        assert_eq!(
            event_summary(&event),
            "account=42 symbol=1 bid=108250 ask=-"
        );
        assert!(event_summary(&Payload::from(ProtoHeartbeatEvent::default())).is_empty());
    }

    #[test]
    fn trading_summaries_name_orders() {
        let filled = Payload::from(ProtoOaExecutionEvent {
            ctid_trader_account_id: 42,
            execution_type: 3,
            order: Some(ProtoOaOrder {
                order_id: 9,
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(
            event_summary(&filled),
            "account=42 type=3 order=9 position=-"
        );

        let rejected = Payload::from(ProtoOaOrderErrorEvent {
            error_code: "MARKET_CLOSED".to_string(),
            ctid_trader_account_id: 42,
            ..Default::default()
        });
        assert_eq!(
            event_summary(&rejected),
            "account=42 code=MARKET_CLOSED order=-"
        );
    }

    #[test]
    fn accounts_convert_from_wire_type() {
        let account = ProtoOaCtidTraderAccount {
            ctid_trader_account_id: 9001,
            is_live: Some(false),
            trader_login: Some(1234),
            broker_title_short: Some("Demo Broker".to_string()),
            ..Default::default()
        };
        let out = AccountOutput::from(&account);
        assert_eq!(out.account_id, 9001);
        assert_eq!(out.live, Some(false));

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["broker"], "Demo Broker");
        assert_eq!(json["login"], 1234);
    }
}
