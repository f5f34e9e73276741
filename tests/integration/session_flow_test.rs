//! Session lifecycle tests against a scripted transport.
//!
//! These cover the full login → call → logout flow without a network.

use super::{login_ok, logout_ok, ScriptedTransport};
use kelpie::executor::call;
use kelpie::formatter::render;
use kelpie::models::{HttpMethod, RawResponse};
use kelpie::session::Session;
use kelpie::{Client, ClientError, TransportError};
use serde_json::{json, Value};
use std::collections::HashMap;

fn session() -> Session {
    Session::new("https://vc.example.com", "administrator@vsphere.local", "VMware1!")
}

#[test]
fn test_full_flow_with_explicit_session() {
    let transport = ScriptedTransport::new(vec![
        login_ok("session-1"),
        Ok(RawResponse::new(200).with_body(r#"[{"vm":"vm-1","name":"web-01"}]"#)),
        logout_ok(),
    ]);
    let mut session = session();

    session.login(&transport).unwrap();
    let response = call(
        &session,
        &transport,
        HttpMethod::GET,
        "/api/vcenter/vm",
        &HashMap::new(),
        &[],
    )
    .unwrap();
    session.logout(&transport).unwrap();

    let reparsed: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(reparsed, json!([{"name": "web-01", "vm": "vm-1"}]));

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].url, "https://vc.example.com/api/session");
    assert_eq!(requests[1].header("Vmware-Api-Session-Id"), Some("session-1"));
    assert_eq!(requests[2].method, HttpMethod::DELETE);
    assert_eq!(requests[2].header("Vmware-Api-Session-Id"), Some("session-1"));
}

#[test]
fn test_calls_are_independent() {
    let transport = ScriptedTransport::new(vec![
        login_ok("tok"),
        Ok(RawResponse::new(200).with_body("not json")),
        Ok(RawResponse::new(200).with_body(r#"{"value":true}"#)),
    ]);
    let mut client = Client::new(session(), transport);
    client.login().unwrap();

    assert!(matches!(
        client.get("/api/vcenter/vm"),
        Err(ClientError::Decode { status_code: 200, .. })
    ));

    let response = client.get("/api/vcenter/host").unwrap();
    assert_eq!(response.json, Some(json!({"value": true})));
}

#[test]
fn test_validation_error_issues_no_request() {
    let transport = ScriptedTransport::new(vec![]);
    let client = Client::new(session(), transport);

    let err = client
        .call(HttpMethod::POST, "/rest/com/vmware/cis/session", &HashMap::new(), &[])
        .unwrap_err();

    assert_eq!(err.to_string(), "request path must start with \"/api/\"");
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_call_before_login_sends_empty_token() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(401).with_body(
        r#"{"error_type":"UNAUTHENTICATED","messages":[]}"#,
    ))]);
    let client = Client::new(session(), transport);

    let response = client.get("/api/vcenter/vm").unwrap();

    assert_eq!(response.status_code, 401);
    let requests = client.transport().requests();
    assert_eq!(requests[0].header("Vmware-Api-Session-Id"), Some(""));
}

#[test]
fn test_login_failure_surfaces_transport_error_unchanged() {
    let error = TransportError::Tls("certificate verify failed".to_string());
    let transport = ScriptedTransport::new(vec![Err(error.clone())]);
    let mut client = Client::new(session(), transport);

    match client.login() {
        Err(ClientError::Transport(got)) => assert_eq!(got, error),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[test]
fn test_logout_failure_does_not_affect_prior_response() {
    let transport = ScriptedTransport::new(vec![
        login_ok("tok"),
        Ok(RawResponse::new(404)),
        Ok(RawResponse::new(401)),
    ]);
    let mut client = Client::new(session(), transport);
    client.login().unwrap();

    let response = client.get("/api/vcenter/vm/vm-404").unwrap();
    let logout = client.logout();

    assert_eq!(render(&response), r#"{"code": 404, "body": "request error"}"#);
    assert!(matches!(logout, Err(ClientError::Logout { status_code: 401 })));
}
