#![cfg(feature = "cli")]

use std::net::{TcpListener, TcpStream};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};

use ctrader_frame::{FrameReader, FrameWriter};
use ctrader_openapi::messages::{
    ProtoOaAccountAuthRes, ProtoOaApplicationAuthRes, ProtoOaCtidTraderAccount, ProtoOaErrorRes,
    ProtoOaGetAccountListByAccessTokenRes, ProtoOaSpotEvent, ProtoOaSubscribeSpotsRes,
    ProtoOaVersionRes,
};
use ctrader_openapi::{envelope, payload_type, Envelope, OpenApiMessage};

fn ctrader() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ctrader"));
    for var in [
        "CTRADER_CLIENT_ID",
        "CTRADER_CLIENT_SECRET",
        "CTRADER_ACCESS_TOKEN",
        "CTRADER_ENDPOINT",
    ] {
        command.env_remove(var);
    }
    command
}

fn run(command: &mut Command) -> Output {
    command.output().expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Plaintext Open API server for one connection.
///
/// `reply` builds the frames to send back for each request; after the
/// application is authorized every frame in `events` is pushed unsolicited.
fn fake_server<F>(reply: F, events: Vec<Vec<u8>>) -> (String, JoinHandle<()>)
where
    F: Fn(&Envelope) -> Vec<Vec<u8>> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let address = listener.local_addr().expect("local addr").to_string();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept should succeed");
        serve(stream, reply, events);
    });
    (address, handle)
}

fn serve<F>(stream: TcpStream, reply: F, events: Vec<Vec<u8>>)
where
    F: Fn(&Envelope) -> Vec<Vec<u8>>,
{
    let mut reader = FrameReader::new(stream.try_clone().expect("clone should succeed"));
    let mut writer = FrameWriter::new(stream);
    let mut events = Some(events);
    while let Ok(frame) = reader.read_frame() {
        let request = envelope::decode(&frame).expect("client frames should decode");
        for response in reply(&request) {
            if writer.send(&response).is_err() {
                return;
            }
        }
        if request.payload_type == payload_type::PROTO_OA_APPLICATION_AUTH_REQ {
            for event in events.take().unwrap_or_default() {
                if writer.send(&event).is_err() {
                    return;
                }
            }
        }
    }
}

fn frame<M: OpenApiMessage>(request: &Envelope, message: &M) -> Vec<u8> {
    envelope::encode_message(request.correlation_id.as_deref(), message)
        .expect("encode should succeed")
        .to_vec()
}

fn standard(request: &Envelope) -> Vec<Vec<u8>> {
    match request.payload_type {
        payload_type::PROTO_OA_APPLICATION_AUTH_REQ => {
            vec![frame(request, &ProtoOaApplicationAuthRes::default())]
        }
        payload_type::PROTO_OA_VERSION_REQ => vec![frame(
            request,
            &ProtoOaVersionRes {
                payload_type: None,
                version: "87".to_string(),
            },
        )],
        payload_type::PROTO_OA_GET_ACCOUNTS_BY_ACCESS_TOKEN_REQ => vec![frame(
            request,
            &ProtoOaGetAccountListByAccessTokenRes {
                access_token: "token".to_string(),
                ctid_trader_account: vec![ProtoOaCtidTraderAccount {
                    ctid_trader_account_id: 9001,
                    is_live: Some(false),
                    trader_login: Some(1234),
                    broker_title_short: Some("Demo".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            },
        )],
        _ => Vec::new(),
    }
}

fn connection_args(address: &str) -> [&str; 8] {
    [
        "--endpoint",
        address,
        "--no-tls",
        "--client-id",
        "app",
        "--client-secret",
        "secret",
        "--format=json",
    ]
}

#[test]
fn version_works_offline() {
    let output = run(ctrader().args(["version", "--format", "json"]));
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["name"], "ctrader");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));

    let output = run(ctrader().args(["version", "--extended", "--format", "pretty"]));
    assert!(output.status.success());
    assert!(stdout(&output).contains("demo_endpoint: demo.ctraderapi.com:5035"));
}

#[test]
fn missing_credentials_is_a_usage_error() {
    let output = run(ctrader().args(["ping", "--client-id", "app"]));
    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("client secret"));
}

#[test]
fn bad_flags_are_rejected_by_the_parser() {
    let output = run(ctrader().args(["ping", "--no-such-flag"]));
    assert_eq!(output.status.code(), Some(2));

    let output = run(ctrader().args([
        "ping",
        "--client-id",
        "a",
        "--client-secret",
        "b",
        "--timeout",
        "0s",
    ]));
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn ping_reports_server_version() {
    let (address, server) = fake_server(standard, Vec::new());
    let output = run(ctrader().arg("ping").args(connection_args(&address)));
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["server_version"], "87");
    assert_eq!(json["endpoint"], address.as_str());
    assert!(json["latency_ms"].as_f64().unwrap() >= 0.0);
    server.join().unwrap();
}

#[test]
fn accounts_lists_token_accounts() {
    let (address, server) = fake_server(standard, Vec::new());
    let output = run(ctrader()
        .arg("accounts")
        .args(connection_args(&address))
        .args(["--access-token", "token"]));
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let accounts = json.as_array().expect("accounts should be an array");
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["account_id"], 9001);
    assert_eq!(accounts[0]["broker"], "Demo");
    server.join().unwrap();
}

#[test]
fn rejected_application_auth_fails() {
    let reject = |request: &Envelope| {
        vec![frame(
            request,
            &ProtoOaErrorRes {
                error_code: "CH_CLIENT_AUTH_FAILURE".to_string(),
                description: Some("bad secret".to_string()),
                ..Default::default()
            },
        )]
    };
    let (address, server) = fake_server(reject, Vec::new());
    let output = run(ctrader().arg("ping").args(connection_args(&address)));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CH_CLIENT_AUTH_FAILURE"));
    server.join().unwrap();
}

#[test]
fn silent_server_times_out() {
    let (address, server) = fake_server(|_: &Envelope| Vec::new(), Vec::new());
    let output = run(ctrader()
        .arg("ping")
        .args(connection_args(&address))
        .args(["--timeout", "300ms"]));
    assert_eq!(output.status.code(), Some(124));
    server.join().unwrap();
}

#[test]
fn refused_connection_is_a_transport_error() {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().to_string()
    };
    let output = run(ctrader().arg("ping").args(connection_args(&address)));
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn watch_prints_events_until_count() {
    let spot = envelope::encode_message(
        None,
        &ProtoOaSpotEvent {
            ctid_trader_account_id: 9001,
            symbol_id: 1,
            bid: Some(108_250),
            ask: Some(108_262),
            ..Default::default()
        },
    )
    .unwrap()
    .to_vec();
    let (address, server) = fake_server(standard, vec![spot.clone(), spot]);
    let output = run(ctrader()
        .arg("watch")
        .args(connection_args(&address))
        .args(["--count", "2"]));
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["name"], "ProtoOaSpotEvent");
    assert_eq!(lines[0]["payload_type"], payload_type::PROTO_OA_SPOT_EVENT);
    assert!(lines[1]["summary"].as_str().unwrap().contains("bid=108250"));
    server.join().unwrap();
}

#[test]
fn watch_resubscribes_after_reconnect() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let address = listener.local_addr().expect("local addr").to_string();
    let spot = envelope::encode_message(
        None,
        &ProtoOaSpotEvent {
            ctid_trader_account_id: 9001,
            symbol_id: 1,
            bid: Some(108_250),
            ..Default::default()
        },
    )
    .unwrap();

    // The first connection is dropped right after the subscription; spots
    // only flow once the replacement connection has subscribed again.
    let server = thread::spawn(move || {
        let mut seen = Vec::new();
        for connection in 0..2 {
            let (stream, _) = listener.accept().expect("accept should succeed");
            let mut reader = FrameReader::new(stream.try_clone().expect("clone should succeed"));
            let mut writer = FrameWriter::new(stream);
            while let Ok(bytes) = reader.read_frame() {
                let request = envelope::decode(&bytes).expect("client frames should decode");
                seen.push((connection, request.payload_type));
                let response = match request.payload_type {
                    payload_type::PROTO_OA_APPLICATION_AUTH_REQ => {
                        frame(&request, &ProtoOaApplicationAuthRes::default())
                    }
                    payload_type::PROTO_OA_ACCOUNT_AUTH_REQ => frame(
                        &request,
                        &ProtoOaAccountAuthRes {
                            payload_type: None,
                            ctid_trader_account_id: 9001,
                        },
                    ),
                    payload_type::PROTO_OA_SUBSCRIBE_SPOTS_REQ => frame(
                        &request,
                        &ProtoOaSubscribeSpotsRes {
                            payload_type: None,
                            ctid_trader_account_id: 9001,
                        },
                    ),
                    _ => continue,
                };
                if writer.send(&response).is_err() {
                    break;
                }
                if request.payload_type == payload_type::PROTO_OA_SUBSCRIBE_SPOTS_REQ {
                    if connection == 0 {
                        break;
                    }
                    if writer.send(&spot).is_err() {
                        break;
                    }
                }
            }
        }
        seen
    });

    let output = run(ctrader()
        .arg("watch")
        .args(connection_args(&address))
        .args(["--account-id", "9001", "--access-token", "token"])
        .args(["--symbols", "1", "--count", "1"]));
    assert!(output.status.success());

    let line: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(line["name"], "ProtoOaSpotEvent");

    let seen = server.join().unwrap();
    for connection in 0..2 {
        for tag in [
            payload_type::PROTO_OA_APPLICATION_AUTH_REQ,
            payload_type::PROTO_OA_ACCOUNT_AUTH_REQ,
            payload_type::PROTO_OA_SUBSCRIBE_SPOTS_REQ,
        ] {
            assert!(
                seen.contains(&(connection, tag)),
                "connection {connection} never saw payload type {tag}"
            );
        }
    }
}
