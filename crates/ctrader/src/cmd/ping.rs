use std::sync::Arc;
use std::time::Instant;

use ctrader_client::ClientError;
use ctrader_openapi::messages::{ProtoOaVersionReq, ProtoOaVersionRes};
use ctrader_openapi::{OpenApiMessage, Payload};

use crate::cmd::PingArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_ping, OutputFormat, PingOutput};

pub fn run(args: PingArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = args.connection.timeout()?;
    let client = args.connection.connect(Arc::new(|_: Payload| {}))?;

    let request = ProtoOaVersionReq {
        payload_type: Some(ProtoOaVersionReq::PAYLOAD_TYPE as i32),
    };
    let started = Instant::now();
    let response = client
        .request(&request, timeout)
        .map_err(|err| client_error("version request failed", err))?;
    let latency = started.elapsed();

    let server_version = match response {
        Payload::VersionRes(res) => res.version,
        other => {
            return Err(client_error(
                "version request failed",
                ClientError::UnexpectedResponse {
                    expected: ProtoOaVersionRes::NAME,
                    actual: other.name(),
                },
            ))
        }
    };

    let out = PingOutput {
        endpoint: client.config().endpoint().to_string(),
        server_version,
        latency_ms: (latency.as_secs_f64() * 1000.0 * 100.0).round() / 100.0,
    };
    client
        .stop()
        .map_err(|err| client_error("disconnect failed", err))?;

    print_ping(&out, format);
    Ok(SUCCESS)
}
