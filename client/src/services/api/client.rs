//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every endpoint module builds a request through [`ApiClient::public`] or
//! [`ApiClient::authed`] and hands it to [`ApiClient::send`], which owns the
//! cross-cutting rules: request ids, timing logs, status normalization, and
//! session invalidation on a rejected token.

use reqwest::{header, Client, Method, Request, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use url::Url;
use uuid::Uuid;

use super::envelope;
use crate::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::session::SessionStore;

/// How a call authenticates, which also decides how a 401 is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Anonymous endpoint (register)
    None,
    /// Credential exchange; 401 means wrong credentials
    Login,
    /// Bearer token required; 401 means the session is dead
    Bearer,
}

/// HTTP client for communicating with the backend API server.
///
/// Cheap to share: wrap it in an `Arc` and hand clones to tasks.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Url,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client for `config`, reading tokens from `session`.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("vidvest-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs = config.timeout.as_secs(),
                    "Falling back to default HTTP client; configured timeout not applied"
                );
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Endpoint URL from path segments. Each segment is percent-encoded
    /// on its own, so user input cannot introduce extra path components.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn public(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Request carrying the session's bearer token.
    ///
    /// Fails with `AuthRequired` before any I/O when there is no token.
    pub(crate) fn authed(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.session.get_token().ok_or_else(|| {
            tracing::debug!(%url, "No session token; request not sent");
            ApiError::auth_required()
        })?;
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    /// Send a request and return its decoded JSON body.
    ///
    /// Non-2xx responses become an [`ApiError`]; a 401 on a bearer call also
    /// invalidates the session. Empty success bodies decode as `null`.
    pub(crate) async fn send(&self, request: RequestBuilder, auth: Auth, operation: &'static str) -> Result<Value> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        let (client, built) = request
            .header(header::ACCEPT, "application/json")
            .header("X-Request-Id", request_id.to_string())
            .build_split();
        let built = built.map_err(|e| {
            tracing::error!(operation, %request_id, error = %e, "Invalid request");
            ApiError::network(e)
        })?;
        // The token this request carried, not whatever is current on return.
        let sent_token = bearer_token(&built);

        let response = client
            .execute(built)
            .await
            .map_err(|e| {
                tracing::error!(operation, %request_id, error = %e, "Network error");
                ApiError::network(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(operation, %request_id, error = %e, "Failed to read response body");
            ApiError::network(e)
        })?;
        let duration_ms = start.elapsed().as_millis();

        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &body, auth == Auth::Login);
            if status.as_u16() == 401 && auth == Auth::Bearer {
                if let Some(token) = &sent_token {
                    self.session.invalidate_if(token);
                }
            }
            tracing::warn!(
                operation,
                %request_id,
                status = status.as_u16(),
                duration_ms,
                error = %err,
                "Request failed"
            );
            return Err(err);
        }

        let value = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).map_err(|e| {
                tracing::error!(operation, %request_id, error = %e, "Response parse error");
                ApiError::malformed(format!("{operation}: response is not valid JSON"))
                    .with_status(status.as_u16())
                    .with_source(e)
            })?
        };

        envelope::ensure_success(&value, operation).map_err(|e| e.with_status(status.as_u16()))?;

        tracing::debug!(operation, %request_id, status = status.as_u16(), duration_ms, "Request succeeded");
        Ok(value)
    }
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::new(base).unwrap(), Arc::new(SessionStore::in_memory()))
    }

    #[test]
    fn test_url_segments_are_encoded() {
        let api = client("https://api.example.com/api");
        assert_eq!(
            api.url(&["profile", "username", "a b/c?d"]).as_str(),
            "https://api.example.com/api/profile/username/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_url_on_bare_host() {
        let api = client("http://127.0.0.1:8000");
        assert_eq!(api.url(&["wallet", "deposit"]).as_str(), "http://127.0.0.1:8000/wallet/deposit");
    }

    #[test]
    fn test_authed_without_token_fails_fast() {
        let api = client("http://127.0.0.1:8000");
        let err = api.authed(Method::GET, api.url(&["profile"])).unwrap_err();
        assert_eq!(err.kind, crate::core::ErrorKind::AuthRequired);
    }

    #[test]
    fn test_bearer_token_read_from_built_request() {
        let api = client("http://127.0.0.1:8000");
        let signed = api.client.get(api.url(&["wallet"])).bearer_auth("tok-9").build().unwrap();
        assert_eq!(bearer_token(&signed).as_deref(), Some("tok-9"));

        let anonymous = api.client.get(api.url(&["login"])).build().unwrap();
        assert_eq!(bearer_token(&anonymous), None);
    }
}
