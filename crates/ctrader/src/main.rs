mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "ctrader", version, about = "cTrader Open API client")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ping_with_connection_flags() {
        let cli = Cli::try_parse_from([
            "ctrader",
            "ping",
            "--live",
            "--client-id",
            "app",
            "--client-secret",
            "secret",
            "--timeout",
            "3s",
        ])
        .expect("ping args should parse");

        match cli.command {
            Command::Ping(args) => {
                assert!(args.connection.live);
                assert_eq!(args.connection.client_id.as_deref(), Some("app"));
                assert_eq!(args.connection.timeout, "3s");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn accounts_requires_access_token() {
        let err = Cli::try_parse_from(["ctrader", "accounts", "--client-id", "app"])
            .expect_err("missing token should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_watch_count_and_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ctrader",
            "watch",
            "--count",
            "5",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .expect("watch args should parse");

        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert!(matches!(cli.log_level, LogLevel::Debug));
        match cli.command {
            Command::Watch(args) => assert_eq!(args.count, Some(5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["ctrader", "version", "--format", "raw"])
            .expect_err("raw is not an output format");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
