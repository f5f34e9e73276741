//! Command-line surface of the `kelpie` binary.
//!
//! Maps `get|post|patch|put|delete <path>` onto a single API call wrapped in
//! a login/logout pair. Everything that can be rejected locally (query
//! flags, request bodies) is checked before the first network round-trip.

use crate::client::Client;
use crate::formatter::{write_response, OutputStyle};
use crate::formatter::json::compact_json_bytes;
use crate::models::HttpMethod;
use crate::transport::Transport;
use clap::{Parser, Subcommand};
use log::debug;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Exit status for a completed call.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for configuration, login or call failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for malformed command lines.
pub const EXIT_USAGE: u8 = 2;

/// Simple vSphere REST API client.
#[derive(Debug, Parser)]
#[command(
    name = "kelpie",
    version,
    about = "simple vSphere REST API client",
    long_about = "simple vSphere REST API client\n\n\
        The server and credentials are read from KELPIE_VCENTER_SERVER,\n\
        KELPIE_VCENTER_USER and KELPIE_VCENTER_PASSWORD.\n\n\
        post, patch and put send an empty body when -f/--filename is omitted.\n\
        The version is printed with -V/--version."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Query parameter formatted as <name>=<value>; repeatable
    #[arg(
        short = 'q',
        long = "query",
        global = true,
        value_name = "NAME=VALUE",
        value_delimiter = ','
    )]
    pub query: Vec<String>,

    /// Print JSON bodies on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One sub-command per HTTP method.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// call api with HTTP GET method
    #[command(long_about = "example) kelpie get /api/vcenter/vm")]
    Get {
        /// API path, starting with /api/
        path: String,
    },
    /// call api with HTTP POST method
    #[command(long_about = "example) kelpie post /api/vcenter/vm/{vm}/power -q action=reset")]
    Post {
        /// API path, starting with /api/
        path: String,
        /// File holding the JSON request body, or - for standard input
        #[arg(short = 'f', long = "filename")]
        filename: Option<String>,
    },
    /// call api with HTTP PATCH method
    #[command(long_about = "example) kelpie patch /api/vcenter/resource-pool/{resource_pool} -f ./data.json")]
    Patch {
        /// API path, starting with /api/
        path: String,
        /// File holding the JSON request body, or - for standard input
        #[arg(short = 'f', long = "filename")]
        filename: Option<String>,
    },
    /// call api with HTTP PUT method
    #[command(long_about = "example) kelpie put /api/vcenter/vm/{vm}/guest/customization -f ./data.json")]
    Put {
        /// API path, starting with /api/
        path: String,
        /// File holding the JSON request body, or - for standard input
        #[arg(short = 'f', long = "filename")]
        filename: Option<String>,
    },
    /// call api with HTTP DELETE method
    #[command(long_about = "example) kelpie delete /api/vcenter/vm/{vm}")]
    Delete {
        /// API path, starting with /api/
        path: String,
    },
}

impl Command {
    /// HTTP method issued by this sub-command.
    pub fn method(&self) -> HttpMethod {
        match self {
            Command::Get { .. } => HttpMethod::GET,
            Command::Post { .. } => HttpMethod::POST,
            Command::Patch { .. } => HttpMethod::PATCH,
            Command::Put { .. } => HttpMethod::PUT,
            Command::Delete { .. } => HttpMethod::DELETE,
        }
    }

    /// Target API path.
    pub fn path(&self) -> &str {
        match self {
            Command::Get { path }
            | Command::Post { path, .. }
            | Command::Patch { path, .. }
            | Command::Put { path, .. }
            | Command::Delete { path } => path,
        }
    }

    /// Request body source, if the sub-command accepts one.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Command::Post { filename, .. }
            | Command::Patch { filename, .. }
            | Command::Put { filename, .. } => filename.as_deref(),
            Command::Get { .. } | Command::Delete { .. } => None,
        }
    }
}

/// Errors detected while turning the command line into a request.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `-q` entry is not of the form `<name>=<value>`.
    #[error("invalid query parameter '{0}'. it should be formatted as '<name>=<value>'.")]
    InvalidQuery(String),

    /// The request body could not be read.
    #[error("failed to read request data from '{path}': {source}")]
    ReadBody {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The request body is not valid JSON.
    #[error("request data is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// A fully validated API call, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub method: HttpMethod,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
    pub style: OutputStyle,
}

impl Invocation {
    /// Builds an invocation from parsed arguments, reading the body if any.
    ///
    /// Standard input is only consulted when the body source is `-`.
    pub fn from_cli(cli: &Cli, command: &Command) -> Result<Self, CliError> {
        Self::from_cli_with_stdin(cli, command, io::stdin().lock())
    }

    /// Same as [`Invocation::from_cli`] with an explicit standard input.
    pub fn from_cli_with_stdin<R: BufRead>(
        cli: &Cli,
        command: &Command,
        stdin: R,
    ) -> Result<Self, CliError> {
        let query = parse_query_params(&cli.query)?;
        let body = match command.filename() {
            Some(filename) => load_body(filename, stdin)?,
            None => Vec::new(),
        };
        let style = if cli.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::Pretty
        };

        Ok(Self {
            method: command.method(),
            path: command.path().to_string(),
            query,
            body,
            style,
        })
    }
}

/// Parses `-q` entries into a parameter map.
///
/// Each entry must contain exactly one `=`. Later entries with the same
/// name replace earlier ones.
pub fn parse_query_params(entries: &[String]) -> Result<HashMap<String, String>, CliError> {
    let mut params = HashMap::new();
    for entry in entries {
        let mut parts = entry.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => {
                params.insert(name.to_string(), value.to_string());
            }
            _ => return Err(CliError::InvalidQuery(entry.clone())),
        }
    }
    Ok(params)
}

/// Reads request data from a file, or from `stdin` when `filename` is `-`.
///
/// Lines read from standard input are concatenated without a separator.
pub fn read_request_data<R: BufRead>(filename: &str, stdin: R) -> Result<Vec<u8>, CliError> {
    let result = if filename == "-" {
        read_lines_concatenated(stdin)
    } else {
        std::fs::read(filename)
    };

    result.map_err(|source| CliError::ReadBody {
        path: filename.to_string(),
        source,
    })
}

/// Reads request data and checks that it is a JSON document.
pub fn load_body<R: BufRead>(filename: &str, stdin: R) -> Result<Vec<u8>, CliError> {
    let raw = read_request_data(filename, stdin)?;
    Ok(compact_json_bytes(&raw)?)
}

fn read_lines_concatenated<R: BufRead>(reader: R) -> io::Result<Vec<u8>> {
    let mut body = String::new();
    for line in reader.lines() {
        body.push_str(&line?);
    }
    Ok(body.into_bytes())
}

/// Runs one invocation: login, call, print, logout.
///
/// A failed login aborts the invocation. A response that cannot be written
/// to `out` fails the invocation, and logout still runs. A failed logout is
/// reported but does not change the exit status of an otherwise successful
/// call.
pub fn run<T, O, E>(client: &mut Client<T>, invocation: &Invocation, out: &mut O, err: &mut E) -> u8
where
    T: Transport,
    O: Write,
    E: Write,
{
    if let Err(e) = client.login() {
        debug!("login failed: {:?} (status {:?})", e, e.status_code());
        let _ = writeln!(err, "{}", e);
        return EXIT_FAILURE;
    }

    debug!("{} {}", invocation.method, invocation.path);
    let status = match client.call(
        invocation.method,
        &invocation.path,
        &invocation.query,
        &invocation.body,
    ) {
        Ok(response) => {
            if !response.is_success() {
                debug!("server answered with status {}", response.status_code);
            }
            match write_response(out, &response, invocation.style) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    let _ = writeln!(err, "failed to write response: {}", e);
                    EXIT_FAILURE
                }
            }
        }
        Err(e) => {
            debug!("call failed: {:?} (status {:?})", e, e.status_code());
            let _ = writeln!(err, "{}", e);
            EXIT_FAILURE
        }
    };

    if let Err(e) = client.logout() {
        let _ = writeln!(err, "warning: {}", e);
    }

    status
}
