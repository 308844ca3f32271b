use std::sync::Arc;

use ctrader_client::ClientError;
use ctrader_openapi::messages::{
    ProtoOaGetAccountListByAccessTokenReq, ProtoOaGetAccountListByAccessTokenRes,
};
use ctrader_openapi::{OpenApiMessage, Payload};

use crate::cmd::AccountsArgs;
use crate::exit::{client_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_accounts, AccountOutput, OutputFormat};

pub fn run(args: AccountsArgs, format: OutputFormat) -> CliResult<i32> {
    let access_token = args.access_token.trim();
    if access_token.is_empty() {
        return Err(CliError::new(USAGE, "access token must not be empty"));
    }

    let timeout = args.connection.timeout()?;
    let client = args.connection.connect(Arc::new(|_: Payload| {}))?;

    let request = ProtoOaGetAccountListByAccessTokenReq {
        payload_type: Some(ProtoOaGetAccountListByAccessTokenReq::PAYLOAD_TYPE as i32),
        access_token: access_token.to_string(),
    };
    let response = client
        .request(&request, timeout)
        .map_err(|err| client_error("account list request failed", err))?;

    let accounts: Vec<AccountOutput> = match response {
        Payload::AccountListRes(res) => res
            .ctid_trader_account
            .iter()
            .map(AccountOutput::from)
            .collect(),
        other => {
            return Err(client_error(
                "account list request failed",
                ClientError::UnexpectedResponse {
                    expected: ProtoOaGetAccountListByAccessTokenRes::NAME,
                    actual: other.name(),
                },
            ))
        }
    };
    client
        .stop()
        .map_err(|err| client_error("disconnect failed", err))?;

    print_accounts(&accounts, format);
    Ok(SUCCESS)
}
