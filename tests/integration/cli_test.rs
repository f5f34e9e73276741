//! Command-line driver tests.

use super::{login_ok, logout_ok, ScriptedTransport};
use clap::Parser;
use kelpie::cli::{run, Cli, CliError, Invocation, EXIT_FAILURE, EXIT_SUCCESS};
use kelpie::models::{HttpMethod, RawResponse};
use kelpie::session::Session;
use kelpie::{Client, TransportError};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn client(results: Vec<Result<RawResponse, TransportError>>) -> Client<ScriptedTransport> {
    let session = Session::new("https://vc.example.com", "user", "pass");
    Client::new(session, ScriptedTransport::new(results))
}

fn invocation(args: &[&str]) -> Result<Invocation, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("kelpie").chain(args.iter().copied())).unwrap();
    let command = cli.command.clone().unwrap();
    Invocation::from_cli_with_stdin(&cli, &command, Cursor::new(""))
}

fn run_captured(client: &mut Client<ScriptedTransport>, invocation: &Invocation) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(client, invocation, &mut out, &mut err);
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_get_prints_pretty_body() {
    let mut client = client(vec![
        login_ok("tok"),
        Ok(RawResponse::new(200).with_body(r#"{"value":"6.7.0"}"#)),
        logout_ok(),
    ]);
    let invocation = invocation(&["get", "/api/appliance/system/version"]).unwrap();

    let (status, out, err) = run_captured(&mut client, &invocation);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "{\n    \"value\": \"6.7.0\"\n}\n");
    assert!(err.is_empty());
}

#[test]
fn test_post_prints_status_summary_for_empty_body() {
    let mut client = client(vec![login_ok("tok"), Ok(RawResponse::new(201)), logout_ok()]);
    let invocation =
        invocation(&["post", "/api/vcenter/vm/vm-1/power", "-q", "action=reset"]).unwrap();

    let (status, out, _) = run_captured(&mut client, &invocation);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "{\"code\": 201, \"body\": \"no response body\"}\n");
    let requests = client.transport().requests();
    assert_eq!(requests[1].method, HttpMethod::POST);
    assert_eq!(
        requests[1].query,
        vec![("action".to_string(), "reset".to_string())]
    );
}

#[test]
fn test_compact_output() {
    let mut client = client(vec![
        login_ok("tok"),
        Ok(RawResponse::new(200).with_body("[ 1, 2 ]")),
        logout_ok(),
    ]);
    let invocation = invocation(&["--compact", "get", "/api/vcenter/cluster"]).unwrap();

    let (_, out, _) = run_captured(&mut client, &invocation);
    assert_eq!(out, "[1,2]\n");
}

#[test]
fn test_login_failure_stops_invocation() {
    let mut client = client(vec![Ok(RawResponse::new(401))]);
    let invocation = invocation(&["get", "/api/vcenter/vm"]).unwrap();

    let (status, out, err) = run_captured(&mut client, &invocation);

    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());
    assert_eq!(err, "authentication failed\n");
    assert_eq!(client.transport().requests().len(), 1);
}

#[test]
fn test_invalid_path_still_logs_out() {
    let mut client = client(vec![login_ok("tok"), logout_ok()]);
    let invocation = invocation(&["get", "/vcenter/vm"]).unwrap();

    let (status, out, err) = run_captured(&mut client, &invocation);

    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());
    assert_eq!(err, "request path must start with \"/api/\"\n");

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, HttpMethod::DELETE);
}

#[test]
fn test_logout_failure_is_a_warning() {
    let mut client = client(vec![
        login_ok("tok"),
        Ok(RawResponse::new(200).with_body("{}")),
        Ok(RawResponse::new(500)),
    ]);
    let invocation = invocation(&["get", "/api/vcenter/vm"]).unwrap();

    let (status, out, err) = run_captured(&mut client, &invocation);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "{}\n");
    assert_eq!(err, "warning: logout failed\n");
}

#[test]
fn test_malformed_query_fails_before_any_request() {
    let result = invocation(&["get", "/api/vcenter/vm", "-q", "a=1", "-q", "novalue"]);
    assert!(matches!(result, Err(CliError::InvalidQuery(ref q)) if q == "novalue"));
}

#[test]
fn test_body_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\n  \"spec\": {{\n    \"name\": \"pool-1\"\n  }}\n}}").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let invocation = invocation(&[
        "patch",
        "/api/vcenter/resource-pool/resgroup-9",
        "-f",
        path.as_str(),
    ])
    .unwrap();

    assert_eq!(invocation.method, HttpMethod::PATCH);
    assert_eq!(invocation.body, br#"{"spec":{"name":"pool-1"}}"#.to_vec());
}

#[test]
fn test_body_from_stdin() {
    let cli = Cli::try_parse_from(["kelpie", "put", "/api/vcenter/vm/vm-1/guest/customization", "-f", "-"])
        .unwrap();
    let command = cli.command.clone().unwrap();
    let stdin = Cursor::new("{\n\"name\": \"spec-1\"\n}\n");

    let invocation = Invocation::from_cli_with_stdin(&cli, &command, stdin).unwrap();
    assert_eq!(invocation.body, br#"{"name":"spec-1"}"#.to_vec());
}

/// Output stream whose every write fails, like a closed pipe.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_unwritable_output_fails_and_still_logs_out() {
    let mut client = client(vec![
        login_ok("tok"),
        Ok(RawResponse::new(200).with_body(r#"{"a":1}"#)),
        logout_ok(),
    ]);
    let invocation = invocation(&["get", "/api/vcenter/vm"]).unwrap();
    let mut err = Vec::new();

    let status = run(&mut client, &invocation, &mut ClosedPipe, &mut err);

    assert_eq!(status, EXIT_FAILURE);
    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("failed to write response: "));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].method, HttpMethod::DELETE);
}

#[test]
fn test_long_help_documents_empty_body_and_version_flag() {
    use clap::CommandFactory;

    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("send an empty body when -f/--filename is omitted"));
    assert!(help.contains("-V/--version"));
}
