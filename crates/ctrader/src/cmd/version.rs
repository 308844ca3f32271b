use ctrader_client::{DEMO_ENDPOINT, LIVE_ENDPOINT};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_version, OutputFormat, VersionOutput};

pub fn run(args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    let out = VersionOutput {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        target: option_env!("CTRADER_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("CTRADER_BUILD_PROFILE").unwrap_or("unknown"),
        target_os: std::env::consts::OS,
        target_arch: std::env::consts::ARCH,
        live_endpoint: LIVE_ENDPOINT,
        demo_endpoint: DEMO_ENDPOINT,
    };
    print_version(&out, args.extended, format);
    Ok(SUCCESS)
}
