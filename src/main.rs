use std::process::ExitCode;

use anyhow::Result;
use clap::{arg, crate_name, crate_version, value_parser, ArgAction, ArgMatches, Command};
use tcpcheck::{logger, CheckConfig, PortSpec, ProcessSpec, TcpCheck};

struct ParsedArgs {
    debug: bool,
    config: CheckConfig,
    process: ProcessSpec,
}

fn parse_args(matches: ArgMatches) -> ParsedArgs {
    let debug = matches.get_flag("debug");

    // PortSpec parsing is infallible: anything non-numeric is a pattern.
    let spec: PortSpec = matches.get_one::<String>("port").unwrap().parse().unwrap();

    let mut config = CheckConfig::new(spec);
    if let Some(&timeout) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(timeout);
    }
    if let Some(&num_retries) = matches.get_one::<u32>("num-retries") {
        config = config.with_num_retries(num_retries);
    }

    let process = ProcessSpec::new(matches.get_one::<String>("process").unwrap());

    ParsedArgs {
        debug,
        config,
        process,
    }
}

fn main() -> Result<ExitCode> {
    let arg_matches = Command::new(crate_name!())
        .about(
            "Checks whether a supervised process accepts TCP connections \
            on any local address.",
        )
        .version(crate_version!())
        .arg_required_else_help(true)
        .args([
            arg!(-d --debug "Turns on debugging information").action(ArgAction::SetTrue),
            arg!(-p --port <SPEC> "Port number, or pattern resolved against the process name")
                .required(true),
            arg!(-t --timeout <SECONDS> "Connect timeout per address")
                .required(false)
                .value_parser(value_parser!(u64)),
            arg!(-r --"num-retries" <N> "Additional sweep rounds after a failed one")
                .required(false)
                .value_parser(value_parser!(u32)),
            arg!([process] "Name of the monitored process").required(true),
        ])
        .get_matches();

    // Extract arguments.
    let parsed = parse_args(arg_matches);

    // Log everything the check does if desired.
    logger::init(parsed.debug);

    // Run a single check invocation.
    let healthy = TcpCheck::new(parsed.config).check(&parsed.process);

    if healthy {
        println!(
            "Process `{}` is accepting TCP connections.",
            parsed.process.name
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Process `{}` is not reachable.", parsed.process.name);
        Ok(ExitCode::FAILURE)
    }
}
