//! # Common Error Types
//!
//! Every API operation fails with one [`ApiError`] value. The underlying
//! transport or HTTP failure is normalized into an [`ErrorKind`] and kept as
//! the error's `source()` so nothing is lost for logging.
//!
//! ## Status Normalization
//!
//! | Status | Kind |
//! |---|---|
//! | 401 on login | `InvalidCredentials` |
//! | 401 / 403 elsewhere | `AuthRequired` |
//! | 404 | `NotFound` |
//! | 400 / 409 / 422 | `Validation` (with field errors) |
//! | 5xx | `Server` |
//! | anything else | `Network` |
//!
//! Transport failures and timeouts are `Network`; success bodies that cannot
//! be decoded are `Server`.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use shared::ErrorResponse;

/// Failure category shown to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No session token, or the server rejected it
    AuthRequired,
    /// Input rejected by the client or the server
    Validation,
    /// Wrong email/password on login
    InvalidCredentials,
    NotFound,
    /// 5xx, or a success response with an unusable body
    Server,
    /// Transport failure, timeout, or unexpected status
    Network,
    /// Durable session storage could not be read or written
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::AuthRequired => "authentication required",
            ErrorKind::Validation => "validation error",
            ErrorKind::InvalidCredentials => "invalid credentials",
            ErrorKind::NotFound => "not found",
            ErrorKind::Server => "server error",
            ErrorKind::Network => "network error",
            ErrorKind::Storage => "storage error",
        };
        f.write_str(name)
    }
}

/// Normalized API failure.
#[derive(Debug, Error)]
#[error("{kind}{}{}", status_suffix(.http_status), detail_suffix(.server_message, .caused_by))]
pub struct ApiError {
    pub kind: ErrorKind,
    pub http_status: Option<u16>,
    pub server_message: Option<String>,
    /// Field-level messages from a validation response, keyed by field name
    pub field_errors: BTreeMap<String, Vec<String>>,
    #[source]
    pub caused_by: Option<Box<dyn StdError + Send + Sync>>,
}

impl ApiError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            http_status: None,
            server_message: None,
            field_errors: BTreeMap::new(),
            caused_by: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.server_message = Some(message.into());
        self
    }

    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.caused_by = Some(Box::new(source));
        self
    }

    /// No session token is available.
    pub fn auth_required() -> Self {
        Self::new(ErrorKind::AuthRequired).with_message("Please log in to continue")
    }

    /// Client-side validation failure on a single field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(ErrorKind::Validation)
            .with_message(message.clone())
            .with_field_error(field, message)
    }

    /// Transport-level failure (connect, timeout, body read).
    pub fn network(source: reqwest::Error) -> Self {
        let mut err = Self::new(ErrorKind::Network);
        if let Some(status) = source.status() {
            err.http_status = Some(status.as_u16());
        }
        err.with_source(source)
    }

    /// Success status with a body that matched none of the known shapes.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Server).with_message(message)
    }

    /// Normalize a non-success HTTP response.
    ///
    /// `is_login` selects `InvalidCredentials` over `AuthRequired` for 401.
    pub fn from_status(status: u16, body: &str, is_login: bool) -> Self {
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();

        let kind = match status {
            401 if is_login => ErrorKind::InvalidCredentials,
            401 | 403 => ErrorKind::AuthRequired,
            404 => ErrorKind::NotFound,
            400 | 409 | 422 => ErrorKind::Validation,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Network,
        };

        let message = parsed.message.or_else(|| {
            let text = body.trim();
            // Bare text bodies only; HTML error pages are not worth showing.
            (!text.is_empty() && !text.starts_with('<') && !text.starts_with('{') && text.len() <= 200)
                .then(|| text.to_string())
        });

        Self {
            kind,
            http_status: Some(status),
            server_message: message,
            field_errors: parsed.errors,
            caused_by: None,
        }
    }

    /// Whether retrying the same call can succeed without user changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Network | ErrorKind::Server | ErrorKind::Storage)
    }

    /// Message suitable for a toast or inline error.
    pub fn user_message(&self) -> String {
        if let Some(message) = &self.server_message {
            return message.clone();
        }
        match self.kind {
            ErrorKind::AuthRequired => "Please log in to continue".to_string(),
            ErrorKind::Validation => "Please check the highlighted fields".to_string(),
            ErrorKind::InvalidCredentials => "Invalid email or password".to_string(),
            ErrorKind::NotFound => "The requested item no longer exists".to_string(),
            ErrorKind::Server => "Something went wrong on our side. Please try again".to_string(),
            ErrorKind::Network => "Could not reach the server. Check your connection".to_string(),
            ErrorKind::Storage => "Could not save your session on this device".to_string(),
        }
    }

    /// First message reported for `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

fn detail_suffix(message: &Option<String>, cause: &Option<Box<dyn StdError + Send + Sync>>) -> String {
    match (message, cause) {
        (Some(message), _) => format!(": {}", message),
        (None, Some(cause)) => format!(": {}", cause),
        (None, None) => String::new(),
    }
}

impl From<crate::session::StorageError> for ApiError {
    fn from(err: crate::session::StorageError) -> Self {
        ApiError::new(ErrorKind::Storage).with_source(err)
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
