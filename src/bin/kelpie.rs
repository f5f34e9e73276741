//! kelpie binary entry point
//!
//! Parses the command line, loads the server and credentials from the
//! environment and runs a single API call inside a login/logout pair.
//! Responses go to stdout; errors and log output go to stderr.

use clap::{CommandFactory, Parser};
use kelpie::cli::{run, Cli, Invocation, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use kelpie::client::Client;
use kelpie::config::load_from_env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let Some(command) = cli.command.clone() else {
        let _ = Cli::command().print_help();
        return ExitCode::from(EXIT_SUCCESS);
    };

    let invocation = match Invocation::from_cli(&cli, &command) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let config = match load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    log::debug!("loaded configuration: {:?}", config);

    let mut client = match Client::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let status = run(
        &mut client,
        &invocation,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

/// Logs go to stderr. `--debug` lowers the default level; `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
