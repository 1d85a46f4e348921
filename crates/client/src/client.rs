//! Backend HTTP client.

use std::time::Duration;

use ledgerdesk_shared::config::ApiConfig;
use ledgerdesk_shared::{AppError, Session};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

/// Client for the accounting backend.
///
/// The session is injected at construction; the bearer token it holds is
/// attached to every request.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl PortalClient {
    /// Creates a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` when the base URL is not http(s), or `Http` when
    /// the underlying client cannot be built.
    pub fn new(config: &ApiConfig, session: Session) -> ClientResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session requests are made with.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replaces the session, e.g. after login.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Starts a request, with the bearer token when the session has one.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "backend request");
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Like [`Self::request`] but refuses to run without a token.
    pub(crate) fn authenticated(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        if !self.session.is_authenticated() {
            return Err(ClientError::NotAuthenticated);
        }
        Ok(self.request(method, path))
    }
}

/// Sends the request and decodes a JSON success body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    fallback: &str,
) -> ClientResult<T> {
    let response = check_status(builder.send().await?, fallback).await?;
    Ok(response.json().await?)
}

/// Sends the request and decodes the success body when there is one.
///
/// Any 2xx is a success. An empty or undecodable body yields `T::default()`.
pub(crate) async fn send_optional_json<T: DeserializeOwned + Default>(
    builder: RequestBuilder,
    fallback: &str,
) -> ClientResult<T> {
    let response = check_status(builder.send().await?, fallback).await?;
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(&body).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring undecodable success body");
        T::default()
    }))
}

/// Sends the request and discards the success body.
pub(crate) async fn send_unit(builder: RequestBuilder, fallback: &str) -> ClientResult<()> {
    check_status(builder.send().await?, fallback).await?;
    Ok(())
}

/// Turns a non-success response into an `AppError`.
///
/// The message comes from the body's `message` field, or `fallback` when
/// the body has none.
async fn check_status(response: Response, fallback: &str) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| fallback.to_string());
    warn!(status = status.as_u16(), %message, "backend rejected request");
    Err(AppError::from_status(status.as_u16(), message).into())
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[rstest]
    #[case("http://localhost:5000", "http://localhost:5000")]
    #[case("https://api.example.com/", "https://api.example.com")]
    #[case(" http://host:1// ", "http://host:1")]
    fn test_base_url_normalized(#[case] input: &str, #[case] expected: &str) {
        let client = PortalClient::new(&config(input), Session::anonymous()).unwrap();
        assert_eq!(client.base_url(), expected);
        assert_eq!(client.url("/api/upload"), format!("{expected}/api/upload"));
    }

    #[rstest]
    #[case("")]
    #[case("localhost:5000")]
    #[case("ftp://files")]
    fn test_invalid_base_url(#[case] input: &str) {
        let err = PortalClient::new(&config(input), Session::anonymous()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_authenticated_requires_token() {
        let client = PortalClient::new(&config("http://localhost"), Session::anonymous()).unwrap();
        assert!(matches!(
            client.authenticated(Method::POST, "/api/admin/content"),
            Err(ClientError::NotAuthenticated)
        ));
    }

    #[rstest]
    #[case(r#"{"message":"Period is closed"}"#, Some("Period is closed"))]
    #[case(r#"{"message":"  "}"#, None)]
    #[case(r#"{"error":"x"}"#, None)]
    #[case("<html>502</html>", None)]
    #[case("", None)]
    fn test_error_message(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(error_message(body).as_deref(), expected);
    }
}
