use crate::client::client::error_message;
use crate::{Client, ClientError, Session};

use googletest::prelude::*;
use reqwest::StatusCode;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8001/api/", None);
    assert_eq!(client.base_url, "http://localhost:8001/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8001/api", None);
    assert_eq!(client.base_url, "http://localhost:8001/api");
}

#[test]
fn test_with_timeout_trims_base_url() {
    let client = Client::with_timeout(
        "http://localhost:8001/api//",
        None,
        std::time::Duration::from_secs(5),
    )
    .unwrap();
    assert_eq!(client.base_url, "http://localhost:8001/api");
}

#[test]
fn test_session_none_by_default() {
    let client = Client::new("http://localhost:8001/api", None);
    assert!(client.session().is_none());
}

#[test]
fn test_attach_then_end_session() {
    let mut client = Client::new("http://localhost:8001/api", None);

    client.attach_session(Session::new("abc"));
    assert_eq!(client.session().map(Session::access_token), Some("abc"));

    let ended = client.end_session();
    assert_eq!(ended, Some(Session::new("abc")));
    assert!(client.session().is_none());
}

#[test]
fn test_attach_session_replaces_existing() {
    let mut client = Client::new("http://localhost:8001/api", Some(Session::new("old")));

    client.attach_session(Session::new("new"));

    assert_eq!(client.session().map(Session::access_token), Some("new"));
}

// =========================================================================
// Error bodies
// =========================================================================

#[test]
fn given_detail_body_when_parsed_then_detail_returned() {
    let message = error_message(StatusCode::NOT_FOUND, r#"{"detail": "Not found."}"#);

    assert_that!(message, eq("Not found."));
}

#[test]
fn given_field_errors_when_parsed_then_json_kept() {
    let message = error_message(
        StatusCode::BAD_REQUEST,
        r#"{"status": ["\"done\" is not a valid choice."]}"#,
    );

    assert_that!(message, contains_substring("is not a valid choice"));
    assert_that!(message, starts_with("{\"status\""));
}

#[test]
fn given_html_body_when_parsed_then_body_returned() {
    let message = error_message(StatusCode::BAD_GATEWAY, "  <h1>Bad Gateway</h1>\n");

    assert_that!(message, eq("<h1>Bad Gateway</h1>"));
}

#[test]
fn given_empty_body_when_parsed_then_status_reason_returned() {
    let message = error_message(StatusCode::SERVICE_UNAVAILABLE, "");

    assert_that!(message, eq("Service Unavailable"));
}

#[test]
fn given_api_error_then_status_exposed() {
    let err = ClientError::api_error(403, "Forbidden".to_string());

    assert_that!(err.status(), some(eq(403)));
    assert_that!(err.to_string(), contains_substring("status: 403"));
}
