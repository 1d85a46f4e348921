//! Login against the backend's session endpoint.

use ledgerdesk_shared::{AppError, Session};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::{PortalClient, send_json};
use crate::error::ClientResult;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: String,
    #[serde(default)]
    user: Option<LoggedInUser>,
}

/// User details returned with a login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    /// Email address.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Role, e.g. `"client"` or `"admin"`.
    #[serde(default)]
    pub role: Option<String>,
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct Login {
    /// Session carrying the issued token.
    pub session: Session,
    /// User details, when the backend sends them.
    pub user: Option<LoggedInUser>,
}

impl PortalClient {
    /// `POST /api/auth/login`.
    ///
    /// The client's own session is left unchanged; install the returned one
    /// with [`PortalClient::set_session`].
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Login> {
        let builder = self
            .request(Method::POST, "/api/auth/login")
            .json(&LoginRequest { email, password });
        let response: LoginResponse = send_json(builder, "Login failed").await?;

        let session = Session::with_token(response.token);
        if !session.is_authenticated() {
            return Err(AppError::Unauthorized("Login response carried no token".to_string()).into());
        }
        info!(email, "logged in");
        Ok(Login {
            session,
            user: response.user,
        })
    }
}
