//! HTTP client for the account service
//!
//! Wire contract, JSON over HTTP(S):
//!
//! - `POST /register` `{username, password, email}` -> `200 {session}`
//! - `POST /login` `{username, password}` -> `200 {session}`
//! - `PATCH /account/password` `{current_password, new_password}` -> `200`
//! - `DELETE /account` -> `200`
//!
//! Authenticated requests carry `Authorization: Token <session>`. Any
//! non-2xx status is expected to carry a `{reason}` body; a response that
//! fits neither the success nor the error schema is malformed.

use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::host::resolve_host;
use crate::AccountError;

#[derive(Deserialize)]
struct Session {
    session: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    reason: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct PasswordChangeRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Client for the remote account service.
///
/// Holds only the base host and the HTTP transport; safe to share across
/// threads for parallel provisioning.
pub struct AccountClient {
    client: Client,
    host: String,
}

impl AccountClient {
    /// Create a client against an explicit host, e.g. `https://api.tidemark.sh`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into(),
        }
    }

    /// Create a client against the host resolved from the environment.
    pub fn from_env() -> Self {
        Self::new(resolve_host(None))
    }

    /// Base host this client talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Register a new account. Returns the session token issued by the
    /// service.
    pub fn create_user(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<String, AccountError> {
        log::debug!("registering account {username}");
        let resp = self
            .client
            .post(format!("{}/register", self.host))
            .json(&RegisterRequest {
                username,
                password,
                email,
            })
            .send()?;
        read_session(resp)
    }

    /// Authenticate and return a fresh session token.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AccountError> {
        log::debug!("logging in {username}");
        let resp = self
            .client
            .post(format!("{}/login", self.host))
            .json(&LoginRequest { username, password })
            .send()?;
        read_session(resp)
    }

    /// Change the account password. Logs in with the current password
    /// first to obtain the session token.
    pub fn update_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AccountError> {
        let session = self.login(username, current_password)?;
        log::debug!("changing password for {username}");
        let resp = self
            .client
            .patch(format!("{}/account/password", self.host))
            .header(AUTHORIZATION, format!("Token {session}"))
            .json(&PasswordChangeRequest {
                current_password,
                new_password,
            })
            .send()?;
        check_status(resp)
    }

    /// Delete the account. Logs in first; no pre-existing session is
    /// required.
    pub fn delete_user(&self, username: &str, password: &str) -> Result<(), AccountError> {
        let session = self.login(username, password)?;
        log::debug!("deleting account {username}");
        let resp = self
            .client
            .delete(format!("{}/account", self.host))
            .header(AUTHORIZATION, format!("Token {session}"))
            .header(CONTENT_TYPE, "application/json")
            .send()?;
        check_status(resp)
    }
}

/// Decode `{session}` from a 2xx response.
fn read_session(resp: Response) -> Result<String, AccountError> {
    if !resp.status().is_success() {
        return Err(service_error(resp));
    }
    let session: Session = resp.json().map_err(|_| AccountError::MalformedResponse)?;
    Ok(session.session)
}

fn check_status(resp: Response) -> Result<(), AccountError> {
    if !resp.status().is_success() {
        return Err(service_error(resp));
    }
    Ok(())
}

/// Non-2xx responses carry `{reason}`; anything else is malformed.
fn service_error(resp: Response) -> AccountError {
    match resp.json::<ErrorBody>() {
        Ok(body) => AccountError::Service(body.reason),
        Err(_) => AccountError::MalformedResponse,
    }
}
