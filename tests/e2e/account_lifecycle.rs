//! Full account lifecycle against a mock service.
//!
//! Walks the register -> login -> password change -> delete path and
//! checks that each phase flips what the service will accept. The mock
//! server is reset between phases to mirror server-side state changes.
//!
//! Run with: cargo test -p tidemark-e2e --test account_lifecycle

use mockito::Matcher;
use serde_json::json;
use tidemark_account::{AccountClient, AccountError};

fn login_mock(
    server: &mut mockito::Server,
    password: &str,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({
            "username": "alice",
            "password": password,
        })))
        .with_status(status)
        .with_body(body)
        .create()
}

#[test]
fn test_full_account_lifecycle() {
    let mut server = mockito::Server::new();
    let client = AccountClient::new(server.url());

    // Phase 1: register
    let register = server
        .mock("POST", "/register")
        .match_body(Matcher::Json(json!({
            "username": "alice",
            "password": "secret",
            "email": "alice@x.com",
        })))
        .with_status(200)
        .with_body(r#"{"session":"sess-create"}"#)
        .create();

    let session = client.create_user("alice", "secret", "alice@x.com").unwrap();
    assert!(!session.is_empty());
    register.assert();

    // Phase 2: login with the original password
    login_mock(&mut server, "secret", 200, r#"{"session":"sess-login"}"#);
    let session = client.login("alice", "secret").unwrap();
    assert_eq!(session, "sess-login");

    // Phase 3: change the password; the PATCH must carry the fresh token
    let patch = server
        .mock("PATCH", "/account/password")
        .match_header("authorization", "Token sess-login")
        .match_body(Matcher::Json(json!({
            "current_password": "secret",
            "new_password": "newsecret",
        })))
        .with_status(200)
        .create();

    client
        .update_password("alice", "secret", "newsecret")
        .unwrap();
    patch.assert();

    // Phase 4: the service now rejects the old password and accepts the
    // new one
    server.reset();
    login_mock(
        &mut server,
        "secret",
        401,
        r#"{"reason":"invalid credentials"}"#,
    );
    login_mock(&mut server, "newsecret", 200, r#"{"session":"sess-new"}"#);

    let err = client.login("alice", "secret").unwrap_err();
    assert!(matches!(err, AccountError::Service(_)));
    assert_eq!(err.to_string(), "invalid credentials");
    assert_eq!(client.login("alice", "newsecret").unwrap(), "sess-new");

    // Phase 5: delete, authenticating with the new password
    let delete = server
        .mock("DELETE", "/account")
        .match_header("authorization", "Token sess-new")
        .with_status(200)
        .create();

    client.delete_user("alice", "newsecret").unwrap();
    delete.assert();

    // Phase 6: the account is gone; no password logs in
    server.reset();
    login_mock(&mut server, "newsecret", 401, r#"{"reason":"account not found"}"#);
    login_mock(&mut server, "secret", 401, r#"{"reason":"account not found"}"#);
    assert!(client.login("alice", "newsecret").is_err());
    assert!(client.login("alice", "secret").is_err());
}

#[test]
fn test_delete_as_first_operation() {
    // No prior login in this process; delete_user must bootstrap its own
    // session.
    let mut server = mockito::Server::new();
    let client = AccountClient::new(server.url());

    login_mock(&mut server, "secret", 200, r#"{"session":"sess-only"}"#);
    let delete = server
        .mock("DELETE", "/account")
        .match_header("authorization", "Token sess-only")
        .with_status(200)
        .create();

    client.delete_user("alice", "secret").unwrap();
    delete.assert();
}

#[test]
fn test_register_conflict_reason_is_verbatim() {
    let mut server = mockito::Server::new();
    let client = AccountClient::new(server.url());

    server
        .mock("POST", "/register")
        .with_status(409)
        .with_body(r#"{"reason":"username taken"}"#)
        .create();

    let err = client
        .create_user("alice", "secret", "alice@x.com")
        .unwrap_err();
    assert_eq!(err.to_string(), "username taken");
}
